use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "SKYDECK_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub dashboard: DashboardConfig,
    pub tokens: TokensConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_filter: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: "skydeck=info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Readings file used when the CLI is not given `--input`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Replacement design-token file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load config: `$SKYDECK_CONFIG`, then the user file, then built-in defaults.
    pub fn load() -> Result<Self, CoreError> {
        match Self::source() {
            Some(path) => Self::load_from(&path),
            None => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }

    /// The file [`AppConfig::load`] reads, or `None` when it falls back to
    /// the built-in defaults.
    pub fn source() -> Option<PathBuf> {
        Self::source_with(std::env::var_os(CONFIG_ENV).map(PathBuf::from), Self::config_path())
    }

    fn source_with(env_path: Option<PathBuf>, user_path: PathBuf) -> Option<PathBuf> {
        env_path.or_else(|| user_path.exists().then_some(user_path))
    }

    /// Load a specific config file. Sections it omits keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "skydeck")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.general.log_filter, "skydeck=info");
        assert!(config.dashboard.input.is_none());
        assert!(config.tokens.path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_sections() {
        let config = AppConfig::from_toml_str("[tokens]\npath = \"brand.toml\"\n").unwrap();
        assert_eq!(config.tokens.path, Some(PathBuf::from("brand.toml")));
        assert_eq!(config.general.log_filter, "skydeck=info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[general\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.general.log_filter = "skydeck=trace".into();
        config.dashboard.input = Some(PathBuf::from("readings.json"));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_source_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("config.toml");
        let env = PathBuf::from("/etc/skydeck.toml");

        assert_eq!(AppConfig::source_with(None, user.clone()), None);
        assert_eq!(
            AppConfig::source_with(Some(env.clone()), user.clone()),
            Some(env.clone())
        );

        std::fs::write(&user, "").unwrap();
        assert_eq!(AppConfig::source_with(None, user.clone()), Some(user.clone()));
        assert_eq!(AppConfig::source_with(Some(env.clone()), user), Some(env));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
