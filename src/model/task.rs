use std::fmt;

use serde::{Deserialize, Serialize};

/// 服务端分配的 Task ID
///
/// 对客户端是不透明的：服务端可能发数字也可能发字符串，
/// 原样保留 JSON 类型，写回 URL 时按字面输出。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Number(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}

/// 单条待办记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    #[cfg(test)]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    /// 复选框图标
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            " "
        }
    }
}
