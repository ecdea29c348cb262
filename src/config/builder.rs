use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::backend::Platform;
use super::file::{load_document, parse_document};
use super::normalize::{normalize, HieraConfig};
use super::ConfigError;

/// Where the config document comes from.
#[derive(Debug)]
enum ConfigSource {
    File(PathBuf),
    Text(String),
    Document(Value),
}

/// Builder for loading a [`HieraConfig`].
///
/// The target platform decides the default `:datadir` of active backends and
/// defaults to the host platform.
///
/// ## Example
///
/// ```no_run
/// use hiera_config::{HieraConfig, Platform};
///
/// let config = HieraConfig::builder()
///     .with_platform(Platform::Unix)
///     .with_file("/etc/puppet/hiera.yaml")
///     .build()?;
///
/// for level in config.hierarchy() {
///     println!("{level}");
/// }
/// # Ok::<(), hiera_config::ConfigError>(())
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    platform: Platform,
    source: ConfigSource,
}

impl HieraConfig {
    /// Creates a builder with an empty document and the host platform.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            platform: Platform::host(),
            source: ConfigSource::Document(Value::Null),
        }
    }
}

impl ConfigBuilder {
    /// Overrides the platform used for default data directories.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Loads the document from a YAML file.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.source = ConfigSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Loads the document from YAML text.
    pub fn with_str(mut self, text: impl Into<String>) -> Self {
        self.source = ConfigSource::Text(text.into());
        self
    }

    /// Uses an already decoded document.
    pub fn with_document(mut self, document: Value) -> Self {
        self.source = ConfigSource::Document(document);
        self
    }

    /// Reads, decodes and normalizes the configured source.
    pub fn build(self) -> Result<HieraConfig, ConfigError> {
        let document = match self.source {
            ConfigSource::File(path) => load_document(&path)?,
            ConfigSource::Text(text) => parse_document(&text)?,
            ConfigSource::Document(document) => document,
        };

        normalize(&document, self.platform)
    }
}
