//! Configuration management for Estatelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, TOAST_DEFAULT_DURATION_MS,
    UPLOAD_DEFAULT_MAX_FILES, UPLOAD_DEFAULT_MAX_MB,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub upload: UploadConfig,
    pub endpoints: EndpointsConfig,
    pub toast: ToastConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// View to open on startup: "gallery" or "users"
    pub default_view: String,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Upload validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum accepted file size in megabytes
    pub max_file_size_mb: u64,
    /// MIME types accepted for upload
    pub allowed_types: Vec<String>,
    /// Maximum number of files per batch
    pub max_files: usize,
}

/// Portal endpoint configuration
///
/// Paths containing `{id}` are resolved against the relevant object id
/// before a request is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Base URL of the portal, e.g. "https://portal.example.com".
    /// The `ESTATELIST_BASE_URL` environment variable takes precedence.
    pub base_url: String,
    /// Id of the property this session manages
    pub property_id: i64,
    pub page_path: String,
    pub upload_path: String,
    pub image_delete_path: String,
    pub set_primary_path: String,
    pub check_username_path: String,
    pub users_path: String,
    pub invite_path: String,
    pub property_edit_path: String,
    pub complete_registration_path: String,
    pub user_delete_path: String,
}

/// Toast notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Visible lifetime of a toast in milliseconds
    pub duration_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Log file path
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "gallery".to_string(),
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: UPLOAD_DEFAULT_MAX_MB,
            allowed_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
            ],
            max_files: UPLOAD_DEFAULT_MAX_FILES,
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            property_id: 0,
            page_path: "/properties/{id}/page/".to_string(),
            upload_path: "/properties/{id}/images/upload/".to_string(),
            image_delete_path: "/properties/images/{id}/delete/".to_string(),
            set_primary_path: "/properties/images/{id}/set-primary/".to_string(),
            check_username_path: "/api/users/check-username/".to_string(),
            users_path: "/companies/users/".to_string(),
            invite_path: "/companies/users/invite/".to_string(),
            property_edit_path: "/properties/{id}/edit/".to_string(),
            complete_registration_path: "/accounts/complete-registration/".to_string(),
            user_delete_path: "/companies/users/{id}/delete/".to_string(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: TOAST_DEFAULT_DURATION_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: "estatelist.log".to_string(),
        }
    }
}

impl EndpointsConfig {
    /// Effective base URL, preferring the environment variable over the file
    pub fn effective_base_url(&self) -> Option<String> {
        match std::env::var("ESTATELIST_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(url.trim().trim_end_matches('/').to_string()),
            _ => {
                if self.base_url.trim().is_empty() {
                    None
                } else {
                    Some(self.base_url.trim().trim_end_matches('/').to_string())
                }
            }
        }
    }

    /// Resolve an `{id}` placeholder path against an object id
    pub fn resolve(path: &str, id: i64) -> String {
        path.replace("{id}", &id.to_string())
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("estatelist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("estatelist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        let valid_views = ["gallery", "users"];
        if !valid_views.contains(&self.ui.default_view.as_str()) {
            anyhow::bail!(
                "default_view must be one of: {}, got '{}'",
                valid_views.join(", "),
                self.ui.default_view
            );
        }

        // Validate upload limits
        if self.upload.max_file_size_mb == 0 {
            anyhow::bail!("max_file_size_mb must be greater than 0");
        }
        if self.upload.max_files == 0 {
            anyhow::bail!("max_files must be greater than 0");
        }
        if self.upload.allowed_types.is_empty() {
            anyhow::bail!("allowed_types cannot be empty");
        }
        for mime in &self.upload.allowed_types {
            if !mime.contains('/') {
                anyhow::bail!("allowed_types entry '{}' is not a MIME type", mime);
            }
        }

        // Validate toast timing
        if self.toast.duration_ms == 0 {
            anyhow::bail!("toast duration_ms must be greater than 0");
        }

        self.validate_endpoints()?;

        Ok(())
    }

    /// Validate endpoint paths
    fn validate_endpoints(&self) -> Result<()> {
        let e = &self.endpoints;
        let paths: [(&str, &str); 10] = [
            ("page_path", &e.page_path),
            ("upload_path", &e.upload_path),
            ("image_delete_path", &e.image_delete_path),
            ("set_primary_path", &e.set_primary_path),
            ("check_username_path", &e.check_username_path),
            ("users_path", &e.users_path),
            ("invite_path", &e.invite_path),
            ("property_edit_path", &e.property_edit_path),
            ("complete_registration_path", &e.complete_registration_path),
            ("user_delete_path", &e.user_delete_path),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                anyhow::bail!("{} must start with '/', got '{}'", name, path);
            }
        }

        let placeholder_paths: [(&str, &str); 5] = [
            ("page_path", &e.page_path),
            ("upload_path", &e.upload_path),
            ("image_delete_path", &e.image_delete_path),
            ("set_primary_path", &e.set_primary_path),
            ("user_delete_path", &e.user_delete_path),
        ];
        for (name, path) in placeholder_paths {
            if !path.contains("{id}") {
                anyhow::bail!("{} must contain an '{{id}}' placeholder, got '{}'", name, path);
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Estatelist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("estatelist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
