use std::collections::HashMap;
use std::io::Write;

use hiera_config::config::{coerce, normalize, validate_merge_behavior};
use hiera_config::{interpolate, Backend, ConfigError, Hiera, HieraConfig, MergeBehavior, Platform};
use serde_yaml::Value;
use tempfile::NamedTempFile;

const SITE_CONFIG: &str = r#"
---
:backends:
  - YAML
  - json
:logger: console
:yaml:
  :datadir: /etc/puppet/hieradata/%{::environment}
:hierarchy:
  - "nodes/%{::clientcert}"
  - "%{::osfamily}"
  - common
:merge_behavior: deeper
"#;

fn facts() -> HashMap<String, String> {
    HashMap::from([
        ("environment".to_string(), "production".to_string()),
        ("clientcert".to_string(), "db01.example.com".to_string()),
    ])
}

#[test]
fn test_load_site_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SITE_CONFIG.as_bytes()).unwrap();

    let config = HieraConfig::builder()
        .with_platform(Platform::Unix)
        .with_file(file.path())
        .build()
        .unwrap();

    assert_eq!(config.backends(), &[Backend::Yaml, Backend::Json]);
    assert_eq!(config.json().datadir(), "/var/lib/hiera");
    assert_eq!(config.merge_behavior(), MergeBehavior::Deeper);

    let hiera = Hiera::new(config);
    assert_eq!(
        hiera.hierarchy_paths(&facts()),
        vec!["nodes/db01.example.com", "%{::osfamily}", "common"]
    );
    assert_eq!(
        hiera.datadir(Backend::Yaml, &facts()).as_deref(),
        Some("/etc/puppet/hieradata/production")
    );
}

#[test]
fn test_windows_defaults_from_any_host() {
    let config = HieraConfig::builder()
        .with_platform(Platform::Windows)
        .with_str(":backends: [json, yaml]\n:hierarchy: common\n")
        .build()
        .unwrap();

    assert_eq!(config.yaml().datadir(), r"%PROGRAMDATA%\PuppetLabs\Hiera\var");
    assert_eq!(config.json().datadir(), r"%PROGRAMDATA%\PuppetLabs\Hiera\var");
}

#[test]
fn test_errors_surface_by_kind() {
    let shape = HieraConfig::builder()
        .with_str(":backends: yaml\n:hierarchy:\n  - 506\n")
        .build()
        .unwrap_err();
    assert!(matches!(shape, ConfigError::DecodeShape { ref field, .. } if field == "Hiearchy"));

    let backend = Hiera::from_yaml(":backends: foobar\n").unwrap_err();
    assert!(matches!(backend, ConfigError::UnknownBackend(ref name) if name == "foobar"));

    let merge = Hiera::from_yaml(":backends: yaml\n:merge_behavior: foobar\n").unwrap_err();
    assert!(matches!(merge, ConfigError::InvalidMergeBehavior(ref v) if v == "foobar"));
}

#[test]
fn test_public_building_blocks() {
    let list: Value = serde_yaml::from_str("[a, b]").unwrap();
    assert_eq!(coerce("Hiearchy", &list).unwrap(), vec!["a", "b"]);

    assert!(validate_merge_behavior("").is_ok());
    assert!(validate_merge_behavior("deep").is_ok());
    assert!(validate_merge_behavior("shallow").is_err());

    let document: Value = serde_yaml::from_str(":backends: Yaml").unwrap();
    let config = normalize(&document, Platform::Unix).unwrap();
    assert_eq!(config.backends(), &[Backend::Yaml]);

    assert_eq!(interpolate("%{::environment}", &facts()), "production");
    assert_eq!(interpolate("%{}", &facts()), "%{}");
}
