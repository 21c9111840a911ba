use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::validation::InputValidator;

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub chat: ChatConfig,
    pub mood: MoodConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
    pub flush_on_exit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub max_message_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    pub summary_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "data/journal".to_string(),
                flush_on_exit: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            chat: ChatConfig {
                max_message_chars: 2000,
            },
            mood: MoodConfig {
                summary_window_days: 7,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to build default configuration: {}", e))?;

        let config = Config::builder()
            // Start with default values
            .add_source(defaults)
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("config").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("MINDHELPER").separator("__"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))?;

        // Validate configuration
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate storage config
        if self.storage.path.trim().is_empty() {
            return Err(anyhow::anyhow!("storage.path cannot be empty"));
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format,
                valid_formats
            ));
        }

        // Validate chat config
        if self.chat.max_message_chars == 0 {
            return Err(anyhow::anyhow!("max_message_chars must be greater than 0"));
        }

        // Validate mood config
        InputValidator::validate_summary_window(self.mood.summary_window_days)?;

        Ok(())
    }

    /// Get journal database path from environment or config
    pub fn get_storage_path(&self) -> String {
        std::env::var("MINDHELPER_DATA").unwrap_or_else(|_| self.storage.path.clone())
    }

    /// Get log level from environment or config
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.path, "data/journal");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.mood.summary_window_days, 7);
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = AppConfig::default();
        config.mood.summary_window_days = 0;
        assert!(config.validate().is_err());
    }
}
