//! Settings configuration
//!
//! User-configurable settings for the picker. Default values are defined in
//! `config/default.toml`. There is no per-user config directory in a page
//! embedding; override content arrives from the host (extension storage)
//! as a TOML string, or from a file in native test setups.

use std::fs;
use std::path::Path;

use anyhow::Result;
use mojipop_engine::MatchConfig;
use serde::{Deserialize, Serialize};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Candidate matching settings
    pub matching: MatchingSettings,
}

/// Matching-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingSettings {
    /// Maximum number of candidates shown in the popup
    pub max_results: usize,
    /// Whether name/keyword matching is case-sensitive
    pub case_sensitive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

impl Settings {
    /// Parse user TOML content merged on top of default.toml.
    pub fn from_toml_str(user_content: &str) -> Result<Self> {
        let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
        let user: toml::Value = toml::from_str(user_content)?;
        merge_toml(&mut base, &user);
        let settings: Settings = base.try_into()?;
        Ok(settings)
    }

    /// Load settings from a file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save settings to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The matcher configuration these settings describe.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_results: self.matching.max_results,
            case_sensitive: self.matching.case_sensitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.matching.max_results, 10);
        assert!(!settings.matching.case_sensitive);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        let loaded: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.matching.max_results, settings.matching.max_results);
    }

    #[test]
    fn test_from_toml_str_overrides() {
        let settings = Settings::from_toml_str(
            r#"
[matching]
max_results = 5
case_sensitive = true
"#,
        )
        .unwrap();
        assert_eq!(settings.matching.max_results, 5);
        assert!(settings.matching.case_sensitive);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[matching]
max_results = 3
"#,
        )
        .unwrap();
        assert_eq!(settings.matching.max_results, 3);
        // Unspecified values come from default.toml.
        assert!(!settings.matching.case_sensitive);
    }

    #[test]
    fn test_empty_override_is_all_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.matching.max_results, 10);
    }

    #[test]
    fn test_invalid_toml_errors() {
        assert!(Settings::from_toml_str("not [valid").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[matching]
max_results = 7
"#
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.matching.max_results, 7);
    }

    #[test]
    fn test_save_to_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker").join("config.toml");

        let mut settings = Settings::default();
        settings.matching.max_results = 6;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.matching.max_results, 6);
    }

    #[test]
    fn test_match_config_conversion() {
        let settings = Settings::from_toml_str(
            r#"
[matching]
max_results = 4
case_sensitive = true
"#,
        )
        .unwrap();
        let config = settings.match_config();
        assert_eq!(config.max_results, 4);
        assert!(config.case_sensitive);
    }
}
