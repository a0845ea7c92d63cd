use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Where the profile (credential record plus wallet data) lives. The app
/// reset wipes exactly this directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "data/profile".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_width")]
    pub default_width: i32,
    #[serde(default = "default_height")]
    pub default_height: i32,
    /// Pause before the title starts sliding aside.
    #[serde(default = "default_title_delay_ms")]
    pub title_delay_ms: u64,
    /// Duration of the title slide / form fade that follows.
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

fn default_theme() -> String {
    "dark".into()
}
fn default_width() -> i32 {
    960
}
fn default_height() -> i32 {
    640
}
fn default_title_delay_ms() -> u64 {
    400
}
fn default_fade_ms() -> u64 {
    800
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_width: default_width(),
            default_height: default_height(),
            title_delay_ms: default_title_delay_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Offer the local-authentication (biometric) affordance when a
    /// platform authenticator is available.
    #[serde(default)]
    pub biometric_enabled: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            biometric_enabled: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback chain: explicit path → ./config/default.toml → hardcoded defaults.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path {
            match Self::load(path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {e}", path.display());
                }
            }
        }

        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            match Self::load(default_path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Failed to load default config: {e}");
                }
            }
        }

        tracing::info!("Using hardcoded default configuration");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.storage.data_dir, "data/profile");
        assert_eq!(cfg.ui.title_delay_ms, 400);
        assert_eq!(cfg.ui.fade_ms, 800);
        assert!(!cfg.auth.biometric_enabled);
    }

    #[test]
    fn partial_section_keeps_sibling_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            title_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.title_delay_ms, 0);
        assert_eq!(cfg.ui.fade_ms, 800);
        assert_eq!(cfg.ui.theme, "dark");
    }

    #[test]
    fn full_config_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/coffer-profile"

            [ui]
            theme = "dark"
            default_width = 1280
            default_height = 800
            title_delay_ms = 250
            fade_ms = 500

            [auth]
            biometric_enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.storage.data_dir, "/tmp/coffer-profile");
        assert_eq!(cfg.ui.default_width, 1280);
        assert!(cfg.auth.biometric_enabled);
    }
}
