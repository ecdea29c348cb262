//! Reading and decoding `hiera.yaml` sources.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::ConfigError;

/// Reads a config file and decodes it into a generic YAML document.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    debug!(path = %path.display(), bytes = contents.len(), "read hiera config");

    decode(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Decodes YAML text into a generic document.
pub fn parse_document(text: &str) -> Result<Value, ConfigError> {
    decode(text).map_err(ConfigError::InvalidDocument)
}

// An empty file is an empty document, not a parse error.
fn decode(text: &str) -> Result<Value, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ":backends: yaml").unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc[":backends"].as_str(), Some("yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_document(Path::new("/nonexistent/path/hiera.yaml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ":backends: [yaml").unwrap();

        let result = load_document(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_empty_text_is_null_document() {
        assert_eq!(parse_document("").unwrap(), Value::Null);
        assert_eq!(parse_document("\n  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_malformed_text() {
        let result = parse_document(":hierarchy: {common");
        assert!(matches!(result, Err(ConfigError::InvalidDocument(_))));
    }
}
