use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::ConfigError;

/// Accepted values for [`Config::default_filter`].
pub const FILTER_KEYS: [&str; 3] = ["all", "over", "under"];

/// Stores user-configurable CLI preferences for the budget view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_filter_value")]
    pub default_filter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Account snapshot loaded on startup, if any.
    pub last_snapshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            theme: Theme::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_filter: Self::default_filter_value(),
            last_snapshot: None,
        }
    }
}

impl Config {
    pub fn default_filter_value() -> String {
        "all".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Sets a preference from its textual key and value.
    ///
    /// Keys: `locale`, `currency`, `theme`, `color`, `default_filter`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key.to_ascii_lowercase().as_str() {
            "locale" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.locale = value.to_string();
            }
            "currency" => {
                if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                self.currency = value.to_ascii_uppercase();
            }
            "theme" => self.theme = Theme::parse(value),
            "color" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            "default_filter" => {
                let lowered = value.to_ascii_lowercase();
                if !FILTER_KEYS.contains(&lowered.as_str()) {
                    return Err(invalid());
                }
                self.default_filter = lowered;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Resolves the base directory for configuration files.
    ///
    /// `override_dir` wins, then `~/.budget_view`, then the working directory.
    pub fn resolve_base_dir(override_dir: Option<PathBuf>) -> PathBuf {
        if let Some(path) = override_dir {
            return path;
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budget_view")
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::parse(v.trim()))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Iconic
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}
