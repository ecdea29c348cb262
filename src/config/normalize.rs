//! Normalization of a decoded `hiera.yaml` document.
//!
//! The document arrives as a generic YAML tree. Recognized keys carry a
//! leading `:` (`:backends`, `:hierarchy`, `:yaml`, `:json`,
//! `:merge_behavior`); anything else is ignored.

use serde::de::Error as _;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, trace};

use super::backend::{Backend, Platform};
use super::coerce::coerce;
use super::merge::MergeBehavior;
use super::ConfigError;

const BACKENDS_FIELD: &str = "Backends";
const HIERARCHY_FIELD: &str = "Hiearchy";

/// The recognized shape of a `hiera.yaml` document before normalization.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(rename = ":backends", default)]
    backends: Option<Value>,
    #[serde(rename = ":hierarchy", default)]
    hierarchy: Option<Value>,
    #[serde(rename = ":yaml", default)]
    yaml: Option<RawSubConfig>,
    #[serde(rename = ":json", default)]
    json: Option<RawSubConfig>,
    #[serde(rename = ":merge_behavior", default)]
    merge_behavior: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSubConfig {
    #[serde(rename = ":datadir", default)]
    datadir: Option<String>,
}

/// Per-backend settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubConfig {
    datadir: String,
}

impl SubConfig {
    /// Root directory of the backend's data files.
    ///
    /// May contain `%{fact}` placeholders. Empty only for a backend that is
    /// not active and was not configured.
    pub fn datadir(&self) -> &str {
        &self.datadir
    }
}

impl From<Option<RawSubConfig>> for SubConfig {
    fn from(raw: Option<RawSubConfig>) -> Self {
        Self {
            datadir: raw.and_then(|r| r.datadir).unwrap_or_default(),
        }
    }
}

/// A validated hiera configuration.
///
/// Built once by [`normalize`] (or [`ConfigBuilder`](super::ConfigBuilder))
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HieraConfig {
    backends: Vec<Backend>,
    hierarchy: Vec<String>,
    yaml: SubConfig,
    json: SubConfig,
    merge_behavior: MergeBehavior,
}

impl HieraConfig {
    /// Active backends, in the order they were listed.
    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    /// Hierarchy templates, highest priority first.
    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    pub fn yaml(&self) -> &SubConfig {
        &self.yaml
    }

    pub fn json(&self) -> &SubConfig {
        &self.json
    }

    pub fn sub_config(&self, backend: Backend) -> &SubConfig {
        match backend {
            Backend::Yaml => &self.yaml,
            Backend::Json => &self.json,
        }
    }

    pub fn merge_behavior(&self) -> MergeBehavior {
        self.merge_behavior
    }

    pub fn is_active(&self, backend: Backend) -> bool {
        self.backends.contains(&backend)
    }
}

/// Normalizes a decoded document into a [`HieraConfig`].
///
/// Backend names are lowercased and validated, active backends without a
/// `:datadir` get the default for `platform`, and `:merge_behavior` is checked
/// against the known behaviors. Missing `:backends` or `:hierarchy` keys leave
/// the corresponding list empty.
pub fn normalize(document: &Value, platform: Platform) -> Result<HieraConfig, ConfigError> {
    let raw = match document {
        Value::Null => RawDocument::default(),
        Value::Mapping(_) => RawDocument::deserialize(document)?,
        _ => {
            return Err(ConfigError::InvalidDocument(serde_yaml::Error::custom(
                "top-level value must be a mapping",
            )))
        }
    };

    let names = match &raw.backends {
        Some(value) => coerce(BACKENDS_FIELD, value)?,
        None => Vec::new(),
    };
    let hierarchy = match &raw.hierarchy {
        Some(value) => coerce(HIERARCHY_FIELD, value)?,
        None => Vec::new(),
    };

    let backends = names
        .iter()
        .map(|name| name.parse::<Backend>())
        .collect::<Result<Vec<_>, _>>()?;
    trace!(?backends, "decoded backends");

    let mut yaml = SubConfig::from(raw.yaml);
    let mut json = SubConfig::from(raw.json);
    for &backend in &backends {
        let sub = match backend {
            Backend::Yaml => &mut yaml,
            Backend::Json => &mut json,
        };
        if sub.datadir.is_empty() {
            sub.datadir = backend.default_datadir(platform).to_string();
            debug!(%backend, %platform, datadir = %sub.datadir, "applied default datadir");
        }
    }

    let merge_behavior: MergeBehavior = raw.merge_behavior.as_deref().unwrap_or("").parse()?;
    debug!(
        levels = hierarchy.len(),
        %merge_behavior,
        "normalized hiera config"
    );

    Ok(HieraConfig {
        backends,
        hierarchy,
        yaml,
        json,
        merge_behavior,
    })
}
