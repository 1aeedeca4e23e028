//! Editor configuration
//!
//! Everything has a default, so `Config::from_json("{}")` is valid and a page
//! only needs to spell out what it changes.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activity::DEFAULT_LOG_CAPACITY;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("log_capacity must be at least 1")]
    ZeroLogCapacity,
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub unsupported_alert: String,
    pub saved_as: String,
    pub saved: String,
    pub save_failed: String,
    pub opened: String,
    pub open_failed: String,
    pub supported: String,
    pub not_supported: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            unsupported_alert: "Native File Systemがサポートされてません".to_string(),
            saved_as: "新規保存しました".to_string(),
            saved: "保存しました".to_string(),
            save_failed: "保存できませんでした".to_string(),
            opened: "ファイルを開きました".to_string(),
            open_failed: "ファイルを開けませんでした".to_string(),
            supported: "お使いのブラウザはNative File Systemをサポートしています！".to_string(),
            not_supported: "お使いのブラウザはNative File Systemをサポートしていません..."
                .to_string(),
        }
    }
}

impl Messages {
    /// Startup line reporting whether file system access is available
    pub fn support_status(&self, supported: bool) -> &str {
        if supported {
            &self.supported
        } else {
            &self.not_supported
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Id of the `<textarea>` holding the document
    pub content_element_id: String,
    /// Id of the `<ul>` receiving log lines
    pub log_element_id: String,
    pub log_capacity: usize,
    pub log_level: LevelFilter,
    /// Overrides the startup probe when set
    pub file_system_access: Option<bool>,
    pub messages: Messages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_element_id: "content".to_string(),
            log_element_id: "logList".to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            log_level: LevelFilter::Info,
            file_system_access: None,
            messages: Messages::default(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        Ok(())
    }
}
