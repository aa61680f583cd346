//! tracing 初始化
//!
//! TUI 占用终端，日志写入 ~/.tier-todo/tier-todo.log；命令行子命令写 stderr。

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::storage::ensure_app_dir;

/// 日志输出位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// 追加写入日志文件
    File,
    /// 标准错误输出
    Stderr,
}

impl LogTarget {
    /// 未设置 RUST_LOG 时的默认级别
    fn default_level(&self) -> &'static str {
        match self {
            LogTarget::File => "info",
            // 子命令的 stdout 是给人看的，只输出警告以上
            LogTarget::Stderr => "warn",
        }
    }
}

/// 日志文件路径
pub fn log_path() -> io::Result<PathBuf> {
    Ok(ensure_app_dir()?.join("tier-todo.log"))
}

/// 初始化全局 subscriber（重复调用无副作用）
pub fn init(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_level()));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let file = log_path().and_then(|path| {
                OpenOptions::new().create(true).append(true).open(path)
            });
            match file {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                // 日志文件打不开时静默丢弃，不能往 TUI 上写
                Err(_) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(io::sink)
                        .try_init();
                }
            }
        }
    }
}
