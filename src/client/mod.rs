//! 远端 Todo API 客户端
//!
//! `TodoApi` 是视图与网络之间的接缝：TUI 和 CLI 用 ureq 实现，测试用内存 Mock。
//! 视图只产出 `ApiRequest`，由调用方执行后把 `ApiOutcome` 交回去。

pub mod http;
#[cfg(test)]
pub mod mock;

use crate::error::Result;
use crate::model::{Task, TaskId};

pub use http::HttpTodoApi;

/// 四个远端操作
pub trait TodoApi: Send + Sync {
    /// GET {base}/todos
    fn list(&self) -> Result<Vec<Task>>;
    /// POST {base}/todos
    fn create(&self, title: &str) -> Result<Task>;
    /// PUT {base}/todos/{id}
    fn update(&self, id: &TaskId, completed: bool) -> Result<()>;
    /// DELETE {base}/todos/{id}
    fn delete(&self, id: &TaskId) -> Result<()>;
}

/// 一次待执行的 HTTP 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    List,
    Create { title: String },
    Update { id: TaskId, completed: bool },
    Delete { id: TaskId },
}

impl ApiRequest {
    /// 日志用的简短描述
    pub fn describe(&self) -> String {
        match self {
            ApiRequest::List => "GET /todos".to_string(),
            ApiRequest::Create { .. } => "POST /todos".to_string(),
            ApiRequest::Update { id, completed } => {
                format!("PUT /todos/{} completed={}", id, completed)
            }
            ApiRequest::Delete { id } => format!("DELETE /todos/{}", id),
        }
    }
}

/// HTTP 调用的结果，交回视图处理
#[derive(Debug)]
pub enum ApiOutcome {
    Listed(Result<Vec<Task>>),
    Created(Result<Task>),
    Updated { id: TaskId, result: Result<()> },
    Deleted { id: TaskId, result: Result<()> },
}

impl ApiOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            ApiOutcome::Listed(r) => r.is_ok(),
            ApiOutcome::Created(r) => r.is_ok(),
            ApiOutcome::Updated { result, .. } | ApiOutcome::Deleted { result, .. } => {
                result.is_ok()
            }
        }
    }
}

/// 同步执行一个请求（阻塞直到服务端返回）
pub fn execute(api: &dyn TodoApi, request: ApiRequest) -> ApiOutcome {
    let label = request.describe();
    tracing::debug!(request = %label, "sending request");

    let outcome = match request {
        ApiRequest::List => ApiOutcome::Listed(api.list()),
        ApiRequest::Create { title } => ApiOutcome::Created(api.create(&title)),
        ApiRequest::Update { id, completed } => {
            let result = api.update(&id, completed);
            ApiOutcome::Updated { id, result }
        }
        ApiRequest::Delete { id } => {
            let result = api.delete(&id);
            ApiOutcome::Deleted { id, result }
        }
    };

    tracing::debug!(request = %label, ok = outcome.is_ok(), "request finished");
    outcome
}

// ============================================================================
// Tests
// ============================================================================
