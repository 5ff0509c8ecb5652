use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the folio config directory based on priority:
/// 1. FOLIO_PATH environment variable (with tilde expansion)
/// 2. XDG config directory
/// 3. ~/.folio (fallback for systems without XDG)
pub fn resolve_config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("FOLIO_PATH") {
        return Some(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Some(config_dir.join("folio"));
    }

    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".folio"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Capture mouse movement for hover highlighting. On by default.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

fn default_mouse() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default catalog file, used when --catalog is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub tui: TuiConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        resolve_config_dir().map(|dir| dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            catalog: Some(PathBuf::from("/home/user/portfolio.toml")),
            tui: TuiConfig { mouse: false },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.catalog,
            Some(PathBuf::from("/home/user/portfolio.toml"))
        );
        assert!(!loaded.tui.mouse);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.catalog.is_none());
        assert!(config.tui.mouse);

        Ok(())
    }
}
