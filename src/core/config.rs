// src/core/config.rs
use log::LevelFilter;
use std::env;

// Configuration for the strength meter service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            default_password_length: 12,
            max_password_length: 128,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid WEB_PORT '{}', using {}", val, config.web_port),
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val,
                    config.default_password_length
                ),
            }
        }

        if let Ok(val) = env::var("MAX_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.max_password_length = length,
                Err(_) => log::warn!(
                    "Invalid MAX_PASSWORD_LENGTH '{}', using {}",
                    val,
                    config.max_password_length
                ),
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping default", level),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_ui_contract() {
        let config = Config::default();
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.web_port, 5000);
        assert!(config.max_password_length >= 20);
    }
}
