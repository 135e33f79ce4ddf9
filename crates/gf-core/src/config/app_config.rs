//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
///
/// Loaded by the infrastructure layer (defaults, TOML file, environment
/// overlay); this is the typed shape the rest of the app consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name of the property, used in notification copy.
    pub property_name: String,

    pub storage: StorageConfig,
    pub push: PushConfig,
    pub mail: MailConfig,
    pub frame: FrameConfig,
    pub reminder: ReminderConfig,
}

/// Durable-storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the persisted JSON documents. `None` = platform default.
    pub data_dir: Option<PathBuf>,
}

/// Push-notification collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Contact-form mail relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub base_url: String,
    pub from: String,
    pub to: String,
}

/// Embedded check-in frame settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Exact-match origin allow-list for inbound frame messages.
    pub allowed_origins: Vec<String>,
    /// Load-error watchdog window.
    pub load_timeout_secs: u64,
    /// Delay before dismissing the frame after `CHECKIN_COMPLETED`.
    pub dismiss_delay_ms: u64,
}

/// Periodic reminder-check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    pub check_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            property_name: "Villa Aurora".to_string(),
            storage: StorageConfig::default(),
            push: PushConfig::default(),
            mail: MailConfig::default(),
            frame: FrameConfig::default(),
            reminder: ReminderConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            base_url: "https://push.guestflow.app".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mail.guestflow.app".to_string(),
            from: "noreply@guestflow.app".to_string(),
            to: "host@guestflow.app".to_string(),
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["https://guest.chekin.com".to_string()],
            load_timeout_secs: 30,
            dismiss_delay_ms: 1500,
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.frame.load_timeout_secs, 30);
        assert_eq!(config.frame.dismiss_delay_ms, 1500);
        assert!(!config.frame.allowed_origins.is_empty());
        assert_eq!(config.reminder.check_interval_secs, 3600);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "property_name": "Casa Sol" }"#).unwrap();
        // serde(default) fills every missing section
        assert_eq!(config.property_name, "Casa Sol");
        assert_eq!(config.push.timeout_secs, 10);
        assert_eq!(config.frame.load_timeout_secs, 30);
    }
}
