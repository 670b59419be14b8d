use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat_client.json";
pub const BASE_URL_ENV: &str = "CHAT_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub chat_path: String,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            chat_path: "/api/chat/".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            window_title: "Eventos Loja".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let mut config = match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    };

    // .env / biến môi trường ghi đè file config
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        if !base_url.trim().is_empty() {
            log::info!("Using {BASE_URL_ENV}={base_url}");
            config.api.base_url = base_url.trim().to_string();
        }
    }

    config
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("event_chat_client_{}_{name}", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(&temp_path("missing.json"));
        assert_eq!(config.api.chat_path, "/api/chat/");
        assert_eq!(config.api.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"api": {"request_timeout_secs": 5}}"#).unwrap();

        let config = load_config(&path);
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.api.chat_path, "/api/chat/");
        assert_eq!(config.window_title, "Eventos Loja");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_json_uses_defaults() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let config = load_config(&path);
        assert_eq!(config.api.chat_path, "/api/chat/");
        assert_eq!(config.window_title, "Eventos Loja");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_path("nested");
        let path = format!("{dir}/config.json");
        let config = AppConfig {
            api: ApiConfig {
                base_url: "http://example.test".to_string(),
                chat_path: "/chat".to_string(),
                request_timeout_secs: 7,
            },
            window_title: "Prueba".to_string(),
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.api.chat_path, "/chat");
        assert_eq!(loaded.api.request_timeout_secs, 7);
        assert_eq!(loaded.window_title, "Prueba");

        fs::remove_dir_all(&dir).ok();
    }
}
