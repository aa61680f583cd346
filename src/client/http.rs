//! 基于 ureq 的阻塞 HTTP 客户端

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::TodoApi;
use crate::error::{Result, TodoError};
use crate::model::{Task, TaskId};

const FETCH_FAILED: &str = "Failed to fetch todos";
const ADD_FAILED: &str = "Failed to add task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

/// 远端 Todo API
pub struct HttpTodoApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTodoApi {
    /// `timeout` 为 None 时不设超时，只靠状态码或连接错误判定失败
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(concat!(
            "tier-todo/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: &TaskId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// 把 ureq 错误映射为 TodoError：非 2xx 统一用操作对应的提示文案
fn map_error(err: ureq::Error, failed: &str) -> TodoError {
    match err {
        ureq::Error::Status(status, _) => {
            tracing::debug!(status, "{}", failed);
            TodoError::status(status, failed)
        }
        ureq::Error::Transport(transport) => TodoError::transport(transport.to_string()),
    }
}

fn read_json<T: DeserializeOwned>(response: ureq::Response) -> Result<T> {
    let body = response.into_string()?;
    Ok(serde_json::from_str(&body)?)
}

impl TodoApi for HttpTodoApi {
    fn list(&self) -> Result<Vec<Task>> {
        let response = self
            .agent
            .get(&self.todos_url())
            .call()
            .map_err(|e| map_error(e, FETCH_FAILED))?;
        read_json(response)
    }

    fn create(&self, title: &str) -> Result<Task> {
        let response = self
            .agent
            .post(&self.todos_url())
            .send_json(json!({ "title": title }))
            .map_err(|e| map_error(e, ADD_FAILED))?;
        read_json(response)
    }

    fn update(&self, id: &TaskId, completed: bool) -> Result<()> {
        self.agent
            .put(&self.todo_url(id))
            .send_json(json!({ "completed": completed }))
            .map_err(|e| map_error(e, UPDATE_FAILED))?;
        Ok(())
    }

    fn delete(&self, id: &TaskId) -> Result<()> {
        self.agent
            .delete(&self.todo_url(id))
            .call()
            .map_err(|e| map_error(e, DELETE_FAILED))?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
