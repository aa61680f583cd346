//! tier-todo 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// tier-todo 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（终端、配置文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 服务端返回非 2xx 状态码
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 网络层错误（连接失败、DNS、读取中断等）
    #[error("{0}")]
    Transport(String),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// tier-todo Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 Status 错误
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// 创建 Transport 错误
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
