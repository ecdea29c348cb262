use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// How values found at several hierarchy levels are combined.
///
/// Only the name is validated here; the merge itself happens in the backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeBehavior {
    #[default]
    Native,
    Deep,
    Deeper,
}

impl MergeBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            MergeBehavior::Native => "native",
            MergeBehavior::Deep => "deep",
            MergeBehavior::Deeper => "deeper",
        }
    }
}

impl FromStr for MergeBehavior {
    type Err = ConfigError;

    /// Parses a merge behavior name. The empty string is an alias for `native`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "native" => Ok(MergeBehavior::Native),
            "deep" => Ok(MergeBehavior::Deep),
            "deeper" => Ok(MergeBehavior::Deeper),
            other => Err(ConfigError::InvalidMergeBehavior(other.to_string())),
        }
    }
}

impl fmt::Display for MergeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `value` names a merge behavior, accepting `""` as well.
pub fn validate_merge_behavior(value: &str) -> Result<(), ConfigError> {
    value.parse::<MergeBehavior>().map(|_| ())
}
