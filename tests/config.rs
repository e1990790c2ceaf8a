use estatelist::config::{Config, EndpointsConfig};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_view, "gallery");
    assert_eq!(config.upload.max_file_size_mb, 5);
    assert_eq!(config.upload.max_files, 50);
    assert_eq!(
        config.upload.allowed_types,
        vec!["image/jpeg", "image/png", "image/gif"]
    );
    assert_eq!(config.toast.duration_ms, 3000);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid default view
    config.ui.sidebar_width = 24;
    config.ui.default_view = "settings".to_string();
    assert!(config.validate().is_err());

    // Reset and test zero size cap
    config.ui.default_view = "users".to_string();
    config.upload.max_file_size_mb = 0;
    assert!(config.validate().is_err());

    // Reset and test a non-MIME allow-list entry
    config.upload.max_file_size_mb = 5;
    config.upload.allowed_types = vec!["jpeg".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_endpoint_validation() {
    let mut config = Config::default();

    config.endpoints.upload_path = "properties/upload/".to_string();
    assert!(config.validate().is_err());

    // A path that must carry an {id} placeholder but doesn't
    config.endpoints.upload_path = "/properties/upload/".to_string();
    assert!(config.validate().is_err());

    config.endpoints.upload_path = "/properties/{id}/images/upload/".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"gallery\""));
    assert!(toml_str.contains("max_file_size_mb = 5"));
    assert!(toml_str.contains("duration_ms = 3000"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[upload]
max_file_size_mb = 10

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.upload.max_file_size_mb, 10);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_view, "gallery");
    assert_eq!(config.upload.max_files, 50);
    assert_eq!(config.toast.duration_ms, 3000);
    assert_eq!(config.endpoints.image_delete_path, "/properties/images/{id}/delete/");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.upload.max_file_size_mb, default_config.upload.max_file_size_mb);
    assert_eq!(config.toast.duration_ms, default_config.toast.duration_ms);
}

#[test]
fn test_resolve_placeholder() {
    assert_eq!(
        EndpointsConfig::resolve("/properties/images/{id}/delete/", 42),
        "/properties/images/42/delete/"
    );
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("estatelist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Estatelist Configuration File"));
    assert!(content.contains("default_view = \"gallery\""));

    let _ = fs::remove_dir_all(&temp_dir);
}
