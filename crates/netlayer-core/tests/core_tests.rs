#[cfg(test)]
mod tests {
    use netlayer_core::*;
    use serde_json::json;
    use std::path::PathBuf;

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_missing_config_file_message() {
        let err = NetlayerError::MissingConfigFile {
            option: "local_networks_config".into(),
            path: "~/xyz/networks.toml".into(),
        };
        assert_eq!(
            err.to_string(),
            "configuration file not found under \"local_networks_config\" path: ~/xyz/networks.toml;"
        );
    }

    #[test]
    fn test_error_parse_names_path() {
        let err = NetlayerError::Parse {
            path: PathBuf::from("/tmp/networks.json"),
            reason: "expected value".into(),
        };
        let s = err.to_string();
        assert!(s.contains("/tmp/networks.json"));
        assert!(s.contains("expected value"));
    }

    #[test]
    fn test_error_unsupported_format() {
        let err = NetlayerError::UnsupportedFormat {
            path: PathBuf::from("networks.yaml"),
            extension: "yaml".into(),
        };
        assert!(err.to_string().contains(".yaml"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NetlayerError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    // ── Defaults ───────────────────────────────────────────────

    #[test]
    fn test_default_network_config() {
        let defaults = default_network_config();
        assert_eq!(defaults["accounts"], json!("remote"));
        assert_eq!(defaults["gas"], json!("auto"));
        assert_eq!(defaults["gasMultiplier"], json!(1));
        assert_eq!(defaults["gasPrice"], json!("auto"));
        assert_eq!(defaults["httpHeaders"], json!({}));
        assert_eq!(defaults["timeout"], json!(20000));
        assert_eq!(defaults.len(), 6);
    }

    // ── OverrideFile ───────────────────────────────────────────

    #[test]
    fn test_override_file_default_is_empty() {
        let file = OverrideFile::default();
        assert!(file.is_empty());
        assert!(file.default_config.is_empty());
        assert!(file.networks.is_empty());
    }

    #[test]
    fn test_override_file_missing_fields_default() {
        let file: OverrideFile =
            serde_json::from_str(r#"{ "networks": { "dev": { "url": "http://localhost:8545" } } }"#)
                .unwrap();
        assert!(file.default_config.is_empty());
        assert_eq!(file.networks["dev"]["url"], json!("http://localhost:8545"));

        let file: OverrideFile = serde_json::from_str(r#"{ "defaultConfig": { "a": 1 } }"#).unwrap();
        assert_eq!(file.default_config["a"], json!(1));
        assert!(file.networks.is_empty());
        assert!(!file.is_empty());
    }

    #[test]
    fn test_override_file_snake_case_alias() {
        let toml_str = r#"
[default_config]
timeout = 5000

[networks.sepolia]
url = "https://sepolia.example"
"#;
        let file: OverrideFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.default_config["timeout"], json!(5000));
        assert_eq!(file.networks["sepolia"]["url"], json!("https://sepolia.example"));
    }

    #[test]
    fn test_override_file_ignores_unknown_keys() {
        let file: OverrideFile =
            serde_json::from_str(r#"{ "comment": "mine", "networks": {} }"#).unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn test_override_file_rejects_non_table_network() {
        let result: std::result::Result<OverrideFile, _> =
            serde_json::from_str(r#"{ "networks": { "dev": "http://localhost:8545" } }"#);
        assert!(result.is_err());
    }

    // ── Layer ──────────────────────────────────────────────────

    #[test]
    fn test_layer_order_is_ascending() {
        let mut sorted = Layer::ORDER;
        sorted.sort();
        assert_eq!(sorted, Layer::ORDER);
        assert_eq!(Layer::ORDER.first(), Some(&Layer::Defaults));
        assert_eq!(Layer::ORDER.last(), Some(&Layer::Project));
    }

    #[test]
    fn test_layer_display() {
        assert_eq!(Layer::HomeDefault.to_string(), "home defaultConfig");
        assert_eq!(Layer::Project.to_string(), "project");
    }
}
