//! 应用配置
//!
//! 优先级从低到高：内置默认值 → ~/.tier-todo/config.toml → TODO_API_URL → --api-url

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{app_dir, load_toml, save_toml};
use crate::error::{Result, TodoError};

/// API 地址的环境变量
pub const API_URL_ENV: &str = "TODO_API_URL";

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时（秒），不填则不设超时
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// 从指定路径加载配置，文件损坏时记录警告并退回默认值
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match load_toml(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        }
    }
}

/// 保存配置（父目录不存在时自动创建）
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}

/// 按优先级确定最终的 API 地址
pub fn resolve_base_url(
    config: &Config,
    env_url: Option<String>,
    cli_url: Option<String>,
) -> Result<String> {
    let url = cli_url
        .or(env_url)
        .unwrap_or_else(|| config.api.base_url.clone());
    let url = url.trim().trim_end_matches('/').to_string();

    if url.is_empty() {
        return Err(TodoError::config("API base URL is empty"));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(TodoError::config(format!(
            "API base URL must start with http:// or https://, got {}",
            url
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.theme.name, "Auto");
        assert!(config.api.timeout().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 5\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.theme.name, "Auto");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "https://todo.example.com/api".to_string();
        config.theme.name = "Nord".to_string();
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_resolve_precedence() {
        let mut config = Config::default();
        config.api.base_url = "http://file:1".to_string();

        assert_eq!(
            resolve_base_url(&config, None, None).unwrap(),
            "http://file:1"
        );
        assert_eq!(
            resolve_base_url(&config, Some("http://env:2".into()), None).unwrap(),
            "http://env:2"
        );
        assert_eq!(
            resolve_base_url(
                &config,
                Some("http://env:2".into()),
                Some("http://cli:3/".into())
            )
            .unwrap(),
            "http://cli:3"
        );
    }

    #[test]
    fn test_resolve_rejects_bad_urls() {
        let config = Config::default();
        assert!(matches!(
            resolve_base_url(&config, Some("  ".into()), None),
            Err(TodoError::Config(_))
        ));
        assert!(matches!(
            resolve_base_url(&config, None, Some("localhost:3000".into())),
            Err(TodoError::Config(_))
        ));
    }
}
