use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context};
use tracing::{debug, info};

use samurai_types::HighlightSettings;
use crate::error::CliError;

const SETTINGS_FILE: &str = "samurai.settings.json";

pub struct ConfigManager {
    settings_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_file: Option<PathBuf>) -> Result<Self> {
        let settings_path = match config_file {
            Some(path) => path,
            None => Self::default_settings_path()?,
        };

        Ok(Self { settings_path })
    }

    fn default_settings_path() -> Result<PathBuf> {
        #[cfg(windows)]
        {
            use std::env;
            let app_data = env::var("APPDATA")
                .or_else(|_| env::var("USERPROFILE"))
                .context("Failed to determine user configuration directory")?;

            Ok(PathBuf::from(app_data).join("Samurai").join(SETTINGS_FILE))
        }

        #[cfg(not(windows))]
        {
            use std::env;
            let home = env::var("HOME")
                .context("Failed to determine home directory")?;

            Ok(PathBuf::from(home).join(".config").join("samurai").join(SETTINGS_FILE))
        }
    }

    /// Loads the settings file, falling back to defaults when it does not exist.
    pub fn load_settings(&self) -> Result<HighlightSettings> {
        if !self.settings_path.exists() {
            debug!("No settings at {}, using defaults", self.settings_path.display());
            return Ok(HighlightSettings::default());
        }

        debug!("Loading settings from: {}", self.settings_path.display());

        let content = fs::read_to_string(&self.settings_path).map_err(|e| {
            CliError::config(format!(
                "Failed to read settings file {}: {}",
                self.settings_path.display(),
                e
            ))
        })?;

        let settings: HighlightSettings = serde_json::from_str(&content).map_err(|e| {
            CliError::config(format!(
                "Failed to parse settings file {}: {}",
                self.settings_path.display(),
                e
            ))
        })?;

        Ok(settings)
    }

    pub fn save_settings(&self, settings: &HighlightSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context("Failed to create settings directory")?;
            }
        }

        let json = serde_json::to_string_pretty(settings)
            .context("Failed to serialize settings")?;

        fs::write(&self.settings_path, json)
            .with_context(|| format!("Failed to write settings file: {}", self.settings_path.display()))?;

        info!("Settings saved to: {}", self.settings_path.display());
        Ok(())
    }

    pub fn settings_exist(&self) -> bool {
        self.settings_path.exists()
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(Some(temp_dir.path().join("settings.json"))).unwrap();

        assert!(!manager.settings_exist());
        assert_eq!(manager.load_settings().unwrap(), HighlightSettings::default());
        // 読み込みだけではファイルを作らない
        assert!(!manager.settings_exist());
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");
        let manager = ConfigManager::new(Some(path)).unwrap();

        let settings = HighlightSettings {
            highlight_full_pitch_characters: false,
            ..HighlightSettings::default()
        };
        manager.save_settings(&settings).unwrap();

        assert!(manager.settings_exist());
        assert_eq!(manager.load_settings().unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "highlight_platform_dependent_characters": false }"#).unwrap();

        let manager = ConfigManager::new(Some(path)).unwrap();
        let settings = manager.load_settings().unwrap();

        assert!(!settings.highlight_platform_dependent_characters);
        assert!(settings.highlight_full_pitch_characters);
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let manager = ConfigManager::new(Some(path)).unwrap();
        let err = manager.load_settings().unwrap_err();
        let cli_error = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_error, CliError::Config { .. }));
        assert_eq!(cli_error.error_code(), 10);
    }

    #[test]
    fn test_unreadable_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        // ディレクトリはファイルとして読めない
        let manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();
        let err = manager.load_settings().unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().error_code(), 10);
    }
}
