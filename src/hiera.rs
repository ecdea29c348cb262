//! The hiera handle: a loaded config plus fact-driven path expansion.

use std::path::Path;

use crate::config::{Backend, ConfigError, HieraConfig};
use crate::facts::FactSource;
use crate::interpolate::interpolate;

/// A loaded hiera configuration.
///
/// Hiera only makes sense in the context of a set of facts: both the
/// hierarchy levels and the data directories may refer to them.
///
/// ## Example
///
/// ```no_run
/// use hiera_config::{Facts, Hiera};
///
/// let hiera = Hiera::load("/etc/puppet/hiera.yaml")?;
/// let facts = Facts::from_env("FACTER_");
///
/// for path in hiera.hierarchy_paths(&facts) {
///     println!("{path}");
/// }
/// # Ok::<(), hiera_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hiera {
    config: HieraConfig,
}

impl Hiera {
    pub fn new(config: HieraConfig) -> Self {
        Self { config }
    }

    /// Loads and normalizes a `hiera.yaml` file for the host platform.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        HieraConfig::builder().with_file(path).build().map(Self::new)
    }

    /// Parses and normalizes `hiera.yaml` text for the host platform.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        HieraConfig::builder().with_str(text).build().map(Self::new)
    }

    pub fn config(&self) -> &HieraConfig {
        &self.config
    }

    /// Expands each hierarchy level against `facts`, highest priority first.
    pub fn hierarchy_paths(&self, facts: &impl FactSource) -> Vec<String> {
        self.config
            .hierarchy()
            .iter()
            .map(|level| interpolate(level, facts))
            .collect()
    }

    /// The expanded data directory of `backend`, or `None` if it is not active.
    pub fn datadir(&self, backend: Backend, facts: &impl FactSource) -> Option<String> {
        if !self.config.is_active(backend) {
            return None;
        }
        Some(interpolate(self.config.sub_config(backend).datadir(), facts))
    }
}

impl From<HieraConfig> for Hiera {
    fn from(config: HieraConfig) -> Self {
        Self::new(config)
    }
}
