//! 任务列表视图状态
//!
//! 持有任务集合、连通状态和输入框内容。所有操作都不直接发请求，
//! 而是返回要执行的 `ApiRequest`；调用方执行后用 `apply` 交回结果。
//! 只有主循环会修改这里的状态。

use std::collections::VecDeque;

use crate::client::{ApiOutcome, ApiRequest};
use crate::model::{ConnectivityStatus, SystemHealth, Task, TaskId};

/// 任务列表视图
#[derive(Debug, Default)]
pub struct TaskListView {
    /// 显示顺序即插入顺序，新建的在最前
    tasks: Vec<Task>,
    /// 最近一次 list 的结果
    status: ConnectivityStatus,
    /// list 失败时的错误信息（存在时禁用输入）
    error: Option<String>,
    /// list 请求进行中
    loading: bool,
    /// 输入框内容
    input: String,
    /// 待弹出的提示（create / delete 失败）
    alerts: VecDeque<String>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 只读访问 ==========

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// 列表是否显示在界面上：加载中或 list 失败时隐藏，此时不能对任务操作
    pub fn is_list_visible(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    /// list 失败后禁用输入，直到下一次成功的 list
    pub fn is_input_disabled(&self) -> bool {
        self.error.is_some()
    }

    /// 当前输入能否提交
    pub fn can_submit(&self) -> bool {
        !self.is_input_disabled() && !self.input.trim().is_empty()
    }

    pub fn health(&self) -> SystemHealth {
        SystemHealth::derive(self.status, self.error.is_some())
    }

    // ========== 输入框 ==========

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input_char(&mut self, c: char) {
        if !self.is_input_disabled() {
            self.input.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    // ========== 操作 ==========

    /// List：拉取完整列表
    pub fn refresh(&mut self) -> ApiRequest {
        self.loading = true;
        ApiRequest::List
    }

    /// Create：提交输入框内容
    ///
    /// 空白输入或处于错误状态时不发请求。标题按原样提交，不做 trim。
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if !self.can_submit() {
            return None;
        }
        Some(ApiRequest::Create {
            title: self.input.clone(),
        })
    }

    /// Toggle：乐观翻转本地状态，再把新值提交给服务端
    pub fn toggle(&mut self, id: &TaskId, current: bool) -> ApiRequest {
        let completed = !current;
        for task in self.tasks.iter_mut().filter(|t| &t.id == id) {
            task.completed = completed;
        }
        ApiRequest::Update {
            id: id.clone(),
            completed,
        }
    }

    /// Delete：未确认时什么都不做
    pub fn delete(&mut self, id: &TaskId, confirmed: bool) -> Option<ApiRequest> {
        if !confirmed {
            return None;
        }
        Some(ApiRequest::Delete { id: id.clone() })
    }

    /// 处理请求结果，必要时返回后续请求（toggle 失败后的全量同步）
    pub fn apply(&mut self, outcome: ApiOutcome) -> Option<ApiRequest> {
        match outcome {
            ApiOutcome::Listed(Ok(tasks)) => {
                tracing::info!(count = tasks.len(), "todos loaded");
                self.tasks = tasks;
                self.status = ConnectivityStatus::Connected;
                self.error = None;
                self.loading = false;
                None
            }
            ApiOutcome::Listed(Err(err)) => {
                tracing::error!(error = %err, "failed to fetch todos");
                self.status = ConnectivityStatus::Error;
                self.error = Some(err.to_string());
                self.loading = false;
                None
            }
            ApiOutcome::Created(Ok(task)) => {
                // 保持 id 唯一：服务端返回重复 id 时以新记录为准
                self.tasks.retain(|t| t.id != task.id);
                self.tasks.insert(0, task);
                self.input.clear();
                None
            }
            ApiOutcome::Created(Err(err)) => {
                tracing::warn!(error = %err, "failed to add task");
                self.alerts.push_back(err.to_string());
                None
            }
            ApiOutcome::Updated { result: Ok(()), .. } => None,
            ApiOutcome::Updated {
                id,
                result: Err(err),
            } => {
                tracing::warn!(%id, error = %err, "update failed, resyncing with server");
                Some(self.refresh())
            }
            ApiOutcome::Deleted { id, result: Ok(()) } => {
                self.tasks.retain(|t| t.id != id);
                None
            }
            ApiOutcome::Deleted {
                id,
                result: Err(err),
            } => {
                tracing::warn!(%id, error = %err, "failed to delete task");
                self.alerts.push_back(err.to_string());
                None
            }
        }
    }

    /// 取出下一条待显示的提示
    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop_front()
    }
}

// ============================================================================
// Tests
// ============================================================================
