//! 内存版 Todo API，供测试脚本化服务端行为

use std::sync::Mutex;

use super::TodoApi;
use crate::error::{Result, TodoError};
use crate::model::{Task, TaskId};

#[derive(Debug, Default)]
struct MockState {
    tasks: Vec<Task>,
    next_id: i64,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
    calls: Vec<String>,
}

/// 行为与真实服务端一致的内存 Mock：失败的写操作不会改动服务端数据
#[derive(Debug, Default)]
pub struct MockTodoApi {
    state: Mutex<MockState>,
}

impl MockTodoApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(MockState {
                tasks,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// 下一次 create 分配的 ID
    pub fn set_next_id(&self, id: i64) {
        self.state.lock().unwrap().next_id = id;
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.state.lock().unwrap().fail_update = fail;
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    /// 服务端当前数据快照
    pub fn server_tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    /// 已收到的调用记录
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl TodoApi for MockTodoApi {
    fn list(&self) -> Result<Vec<Task>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list".to_string());
        if state.fail_list {
            return Err(TodoError::status(500, "Failed to fetch todos"));
        }
        Ok(state.tasks.clone())
    }

    fn create(&self, title: &str) -> Result<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("create {}", title));
        if state.fail_create {
            return Err(TodoError::status(500, "Failed to add task"));
        }
        let task = Task::new(state.next_id, title, false);
        state.next_id += 1;
        state.tasks.insert(0, task.clone());
        Ok(task)
    }

    fn update(&self, id: &TaskId, completed: bool) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update {} {}", id, completed));
        if state.fail_update {
            return Err(TodoError::status(500, "Failed to update task"));
        }
        match state.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.completed = completed;
                Ok(())
            }
            None => Err(TodoError::status(404, "Failed to update task")),
        }
    }

    fn delete(&self, id: &TaskId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete {}", id));
        if state.fail_delete {
            return Err(TodoError::status(500, "Failed to delete task"));
        }
        let before = state.tasks.len();
        state.tasks.retain(|t| &t.id != id);
        if state.tasks.len() == before {
            return Err(TodoError::status(404, "Failed to delete task"));
        }
        Ok(())
    }
}
