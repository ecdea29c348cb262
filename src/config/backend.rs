//! Storage backends and their platform-dependent data directories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

const WINDOWS_DATADIR: &str = r"%PROGRAMDATA%\PuppetLabs\Hiera\var";
const UNIX_DATADIR: &str = "/var/lib/hiera";

/// A data backend hiera can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Yaml,
    Json,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Yaml => "yaml",
            Backend::Json => "json",
        }
    }

    /// Data directory used when the config does not set `:datadir`.
    pub fn default_datadir(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (Backend::Yaml | Backend::Json, Platform::Windows) => WINDOWS_DATADIR,
            (Backend::Yaml | Backend::Json, Platform::Unix) => UNIX_DATADIR,
        }
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    /// Parses a backend name case-insensitively.
    ///
    /// The error carries the lowercased name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        match name.as_str() {
            "yaml" => Ok(Backend::Yaml),
            "json" => Ok(Backend::Json),
            _ => Err(ConfigError::UnknownBackend(name)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform used to pick default data directories.
///
/// Passed into normalization explicitly so either branch can be exercised
/// from any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Unix => f.write_str("unix"),
            Platform::Windows => f.write_str("windows"),
        }
    }
}
