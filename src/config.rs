use crate::model::flyer::DEFAULT_FLYER_WIDTH;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the deployment path prefix
pub const BASE_PATH_ENV: &str = "STARKFIELD_BASE_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment path prefix prepended to every asset reference
    pub base_path: String,
    /// Program the flyer text is piped into
    pub print_command: String,
    pub print_args: Vec<String>,
    /// Column width of the printed flyer
    pub flyer_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            print_command: "lp".to_string(),
            print_args: Vec::new(),
            flyer_width: DEFAULT_FLYER_WIDTH,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".starkfield"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load from `~/.starkfield/config.json`, falling back to defaults
    pub fn load() -> Config {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }

    /// Pick the deployment prefix: CLI flag, then environment, then config file
    pub fn resolve_base_path(&self, cli: Option<&str>, env_value: Option<&str>) -> String {
        cli.or(env_value)
            .unwrap_or(self.base_path.as_str())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_path, "");
        assert_eq!(config.print_command, "lp");
        assert_eq!(config.flyer_width, DEFAULT_FLYER_WIDTH);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "base_path": "/ethanfrome" }"#).unwrap();
        assert_eq!(config.base_path, "/ethanfrome");
        assert_eq!(config.print_command, "lp");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            print_command: "lpr".to_string(),
            print_args: vec!["-P".to_string(), "attic".to_string()],
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.print_command, "lpr");
        assert_eq!(loaded.print_args, vec!["-P", "attic"]);
    }

    #[test]
    fn test_unreadable_path_yields_none() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(dir.path()).is_none());
    }

    #[test]
    fn test_config_dir_under_home() {
        if let Some(dir) = Config::config_dir() {
            assert!(dir.ends_with(".starkfield"));
        }
    }

    #[test]
    fn test_missing_or_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::load_from(&path).is_none());

        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_none());
    }

    #[test]
    fn test_base_path_precedence() {
        let config = Config {
            base_path: "/from-file".to_string(),
            ..Config::default()
        };
        assert_eq!(config.resolve_base_path(Some("/cli"), Some("/env")), "/cli");
        assert_eq!(config.resolve_base_path(None, Some("/env")), "/env");
        assert_eq!(config.resolve_base_path(None, None), "/from-file");
    }
}
