//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Clock presentation (12/24-hour, AM/PM symbols)
//! - The last chosen restore volume and the ring stream maximum
//!
//! Configuration is stored at `~/.config/quiettime/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::selector::{ClockFormat, HourFormat};

/// Clock display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub use_24_hour: bool,
    #[serde(default = "default_am_label")]
    pub am_label: String,
    #[serde(default = "default_pm_label")]
    pub pm_label: String,
}

/// Restore volume configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Last chosen restore volume.
    #[serde(default = "default_volume")]
    pub volume: u32,
    /// Ring stream maximum reported by the host audio facade.
    #[serde(default = "default_max_volume")]
    pub max_volume: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/quiettime/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

fn default_am_label() -> String {
    "AM".into()
}
fn default_pm_label() -> String {
    "PM".into()
}
fn default_volume() -> u32 {
    5
}
fn default_max_volume() -> u32 {
    7
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_24_hour: false,
            am_label: default_am_label(),
            pm_label: default_pm_label(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            max_volume: default_max_volume(),
        }
    }
}

impl DisplayConfig {
    pub fn clock_format(&self) -> ClockFormat {
        ClockFormat {
            hour_format: HourFormat::from_24_hour_pref(self.use_24_hour),
            am_label: self.am_label.clone(),
            pm_label: self.pm_label.clone(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("not a leaf value".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location inside [`data_dir`].
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, keeping the existing type.
    /// The change is only kept in memory; call [`Self::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result violates a constraint.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// The stored volume must fit under the stored maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.audio.volume > self.audio.max_volume {
            return Err(ConfigError::InvalidValue {
                key: "audio.volume".into(),
                message: format!(
                    "{} exceeds audio.max_volume {}",
                    self.audio.volume, self.audio.max_volume
                ),
            });
        }
        Ok(())
    }

    pub fn clock_format(&self) -> ClockFormat {
        self.display.clock_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(!parsed.display.use_24_hour);
        assert_eq!(parsed.audio.volume, 5);
        assert_eq!(parsed.audio.max_volume, 7);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[display]\nuse_24_hour = true\n").unwrap();
        assert!(parsed.display.use_24_hour);
        assert_eq!(parsed.display.am_label, "AM");
        assert_eq!(parsed.audio.volume, 5);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.use_24_hour").as_deref(), Some("false"));
        assert_eq!(cfg.get("audio.volume").as_deref(), Some("5"));
        assert_eq!(cfg.get("display.pm_label").as_deref(), Some("PM"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_bool_number_and_string() {
        let mut cfg = Config::default();
        cfg.set("display.use_24_hour", "true").unwrap();
        cfg.set("audio.volume", "3").unwrap();
        cfg.set("display.am_label", "a.m.").unwrap();
        assert!(cfg.display.use_24_hour);
        assert_eq!(cfg.audio.volume, 3);
        assert_eq!(cfg.display.am_label, "a.m.");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("display.nonexistent_key", "value").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
        assert!(matches!(cfg.set("", "1"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        let err = cfg.set("display.use_24_hour", "not_a_bool").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        let err = cfg.set("audio.volume", "-2").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn set_rejects_volume_above_max_and_keeps_old_value() {
        let mut cfg = Config::default();
        let err = cfg.set("audio.volume", "9").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "audio.volume"));
        assert_eq!(cfg.audio.volume, 5);
    }

    #[test]
    fn clock_format_reflects_display_section() {
        let mut cfg = Config::default();
        assert_eq!(cfg.clock_format(), ClockFormat::default());
        cfg.display.use_24_hour = true;
        assert_eq!(cfg.clock_format().hour_format, HourFormat::TwentyFourHour);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.audio.volume, 5);
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("audio.volume", "2").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.audio.volume, 2);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "display = 3 = 4").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
