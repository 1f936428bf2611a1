use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "ldapdeck";

pub const VALID_KEYS: &str = "defaults.theme, defaults.windowed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `ldapdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents, path)
    }

    /// Like `load_from`, but a missing file yields the default config.
    /// Unreadable or malformed files are still errors.
    pub fn load_if_present_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to read config: {e}")),
        }
    }

    /// Config for launching the presentation. A broken file is reported
    /// and skipped rather than blocking the deck.
    pub fn load_or_default() -> Self {
        match Self::path().and_then(|path| Self::load_if_present_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(contents)
            .with_context(|| format!("Malformed config file {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# ldapdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults_mut().theme = Some(value.to_string());
            }
            "defaults.windowed" => {
                let windowed = value.parse::<bool>().map_err(|_| {
                    anyhow::anyhow!("Invalid windowed value: {value}. Must be 'true' or 'false'.")
                })?;
                self.defaults_mut().windowed = Some(windowed);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }

    fn defaults_mut(&mut self) -> &mut DefaultsConfig {
        self.defaults.get_or_insert_with(DefaultsConfig::default)
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn windowed(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_valid_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "light").unwrap();
        config.set("defaults.windowed", "true").unwrap();
        assert_eq!(config.theme(), Some("light"));
        assert!(config.windowed());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
        assert!(config.set("defaults.windowed", "maybe").is_err());
        assert!(config.set("defaults.start_slide", "2").is_err());
        let err = config.set("defaults.transition", "fade").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::default();
        assert_eq!(config.theme(), None);
        assert!(!config.windowed());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# ldapdeck configuration"));
        assert!(!contents.contains("windowed"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_load_if_present_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_if_present_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_if_present_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "defaults:\n  theme: light\n  windowed: [oops\n").unwrap();
        let err = Config::load_if_present_from(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed config file"));
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let config: Config =
            serde_yaml::from_str("defaults:\n  theme: light\n  windowed: true\n").unwrap();
        assert_eq!(config.theme(), Some("light"));
        assert!(config.windowed());
    }
}
