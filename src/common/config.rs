use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global winsweep configuration, persisted as TOML in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category ids the user has selected for cleaning
    #[serde(default)]
    pub selected: Vec<String>,

    /// Exclusion patterns (case-insensitive wildcards matched
    /// against the full path)
    #[serde(default)]
    pub exclusions: Vec<String>,

    /// Minimum file age in days; files modified more recently are
    /// never touched (0 = no age filter)
    #[serde(default)]
    pub min_file_age_days: u32,

    /// Clear the read-only attribute before deleting
    #[serde(default)]
    pub delete_read_only: bool,

    /// Overwrite files with random data before removal
    #[serde(default)]
    pub secure_delete: bool,

    /// Number of overwrite passes when secure_delete is set
    #[serde(default = "default_secure_passes")]
    pub secure_passes: u32,

    /// User-defined extra locations to clean
    #[serde(default)]
    pub custom_paths: Vec<CustomPath>,

    /// Output format preference
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// A user-defined cleanable location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPath {
    pub path: String,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_true")]
    pub recursive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Quiet,
}

fn default_secure_passes() -> u32 {
    3
}
fn default_pattern() -> String {
    "*".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            exclusions: Vec::new(),
            min_file_age_days: 0,
            delete_read_only: false,
            secure_delete: false,
            secure_passes: default_secure_passes(),
            custom_paths: Vec::new(),
            output_format: OutputFormat::Human,
        }
    }
}

impl Config {
    /// Get the winsweep data directory (~/.winsweep)
    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("WINSWEEP_DATA_DIR") {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".winsweep")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Get the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::data_dir().join("logs")
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let dir = path.parent().unwrap();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir: {}", dir.display()))?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Initialize the winsweep directories
    pub fn init_dirs() -> Result<()> {
        for dir in [Self::data_dir(), Self::logs_dir()] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Check whether a category id is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Mark a category id as selected (idempotent)
    pub fn select(&mut self, id: &str) {
        if !self.is_selected(id) {
            self.selected.push(id.to_string());
        }
    }

    /// Remove a category id from the selection
    pub fn deselect(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
    }

    /// Add an exclusion pattern (idempotent)
    pub fn add_exclusion(&mut self, pattern: &str) {
        if !self.exclusions.iter().any(|p| p == pattern) {
            self.exclusions.push(pattern.to_string());
        }
    }

    /// Remove an exclusion pattern
    pub fn remove_exclusion(&mut self, pattern: &str) {
        self.exclusions.retain(|p| p != pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.selected.is_empty());
        assert!(config.exclusions.is_empty());
        assert_eq!(config.min_file_age_days, 0);
        assert!(!config.secure_delete);
        assert_eq!(config.secure_passes, 3);
    }

    #[test]
    fn test_select_deselect() {
        let mut config = Config::default();
        config.select("windows_temp");
        config.select("windows_temp");
        assert_eq!(config.selected.len(), 1);
        assert!(config.is_selected("windows_temp"));

        config.deselect("windows_temp");
        assert!(!config.is_selected("windows_temp"));
    }

    #[test]
    fn test_exclusions() {
        let mut config = Config::default();
        config.add_exclusion("*.lock");
        config.add_exclusion("*.lock");
        assert_eq!(config.exclusions.len(), 1);
        config.remove_exclusion("*.lock");
        assert!(config.exclusions.is_empty());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.select("chrome_cache");
        config.min_file_age_days = 7;
        config.secure_delete = true;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.selected, config.selected);
        assert_eq!(loaded.min_file_age_days, 7);
        assert!(loaded.secure_delete);
        assert_eq!(loaded.secure_passes, 3);
    }
}
