use crate::constants::{
    DEFAULT_CHAT_PATH, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_URL, SERVER_URL_ENV,
};
use crate::errors::{ParleyError, ParleyResult};
use log::LevelFilter;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub chat_path: String,
    /// When set, any non-2xx status counts as a delivery failure even if the
    /// body carries a well-formed reply.
    pub reject_error_status: bool,
    pub log_level: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            reject_error_status: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Full URL of the chat endpoint.
    pub fn chat_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.server_url.trim_end_matches('/'),
            self.chat_path
        )
    }

    pub fn level_filter(&self) -> ParleyResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            ParleyError::config_error(format!("Unknown log level: {}", self.log_level))
        })
    }
}

/// Loads the user's config file (creating a default one if missing), then
/// applies environment overrides.
pub fn initialize_config() -> ParleyResult<Config> {
    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;

    apply_server_override(&mut config, env::var(SERVER_URL_ENV).ok());
    validate_config(&config)?;

    Ok(config)
}

pub fn get_config_path() -> ParleyResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ParleyError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("parley").join("config.json"))
}

pub fn load_or_create(config_path: &Path) -> ParleyResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path).map_err(|e| {
            ParleyError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ParleyError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        return Ok(config);
    }

    let config = Config::default();

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ParleyError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)
        .map_err(|e| ParleyError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(config_path, config_str)
        .map_err(|e| ParleyError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

pub fn apply_server_override(config: &mut Config, server_url: Option<String>) {
    if let Some(url) = server_url.filter(|url| !url.trim().is_empty()) {
        config.server_url = url.trim().to_string();
    }
}

pub fn validate_config(config: &Config) -> ParleyResult<()> {
    let url = Url::parse(&config.server_url).map_err(|e| {
        ParleyError::config_error(format!("Invalid server_url '{}': {}", config.server_url, e))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ParleyError::config_error(format!(
            "server_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !config.chat_path.starts_with('/') {
        return Err(ParleyError::config_error("chat_path must start with '/'"));
    }

    config.level_filter()?;

    if config.log_file.trim().is_empty() {
        return Err(ParleyError::config_error("log_file is required"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_url() {
        let mut config = Config::default();
        config.server_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());

        config.server_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_chat_path() {
        let mut config = Config::default();
        config.chat_path = "chat".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = "chatty".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ParleyError::Config(_))
        ));
    }

    #[test]
    fn test_chat_endpoint_joins_without_double_slash() {
        let mut config = Config::default();
        config.server_url = "http://localhost:8080/".to_string();
        assert_eq!(config.chat_endpoint(), "http://localhost:8080/chat");
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_or_create(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "server_url": "https://chat.example.com", "reject_error_status": true }"#,
        )
        .unwrap();

        let config = load_or_create(&path).unwrap();
        assert_eq!(config.server_url, "https://chat.example.com");
        assert!(config.reject_error_status);
        assert_eq!(config.chat_path, DEFAULT_CHAT_PATH);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_or_create(&path), Err(ParleyError::Config(_))));
    }

    #[test]
    fn test_server_override() {
        let mut config = Config::default();
        apply_server_override(&mut config, Some("   ".to_string()));
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);

        apply_server_override(&mut config, Some(" http://10.0.0.2:5000 ".to_string()));
        assert_eq!(config.server_url, "http://10.0.0.2:5000");
    }
}
