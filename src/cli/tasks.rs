//! 无界面子命令：list / add / toggle / delete / health
//!
//! 与 TUI 共用 `TaskListView`，只是请求在当前线程同步执行。
//! 每个命令返回是否成功，由 main 转成退出码。

use std::io::{self, BufRead, Write};

use crate::client::{execute, ApiRequest, TodoApi};
use crate::model::Task;
use crate::task_list::TaskListView;

/// 同步驱动视图的会话
struct Headless<'a> {
    api: &'a dyn TodoApi,
    view: TaskListView,
}

impl<'a> Headless<'a> {
    fn new(api: &'a dyn TodoApi) -> Self {
        Self {
            api,
            view: TaskListView::new(),
        }
    }

    /// 执行请求以及它引出的后续请求
    fn run(&mut self, request: ApiRequest) {
        let mut next = Some(request);
        while let Some(request) = next.take() {
            next = self.view.apply(execute(self.api, request));
        }
    }

    /// 拉取列表，返回是否成功
    fn load(&mut self) -> bool {
        let request = self.view.refresh();
        self.run(request);
        self.view.error().is_none()
    }

    /// 按命令行输入查找任务（数字和字符串 ID 都按字面比较）
    fn find(&self, input: &str) -> Option<Task> {
        let input = input.trim();
        self.view
            .tasks()
            .iter()
            .find(|t| t.id.to_string() == input)
            .cloned()
    }

    fn fail_with_error(&self) -> bool {
        if let Some(err) = self.view.error() {
            eprintln!("Error: {}", err);
        }
        false
    }
}

fn task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!("[{}] {}  {}", mark, task.id, task.title)
}

/// `list`：逐行打印任务和连通状态
pub fn list(api: &dyn TodoApi, out: &mut impl Write) -> io::Result<bool> {
    let mut session = Headless::new(api);
    let ok = session.load();

    for task in session.view.tasks() {
        writeln!(out, "{}", task_line(task))?;
    }
    if ok && session.view.tasks().is_empty() {
        writeln!(out, "No tasks yet.")?;
    }
    writeln!(out, "Status: {}", session.view.status().label())?;

    if ok {
        Ok(true)
    } else {
        Ok(session.fail_with_error())
    }
}

/// `add`：多个单词用空格拼成标题
pub fn add(api: &dyn TodoApi, words: &[String], out: &mut impl Write) -> io::Result<bool> {
    let mut session = Headless::new(api);
    session.view.set_input(words.join(" "));

    let Some(request) = session.view.submit() else {
        eprintln!("Error: task title cannot be empty");
        return Ok(false);
    };
    session.run(request);

    if let Some(err) = session.view.take_alert() {
        eprintln!("Error: {}", err);
        return Ok(false);
    }
    match session.view.tasks().first() {
        Some(task) => {
            writeln!(out, "Added {}", task_line(task))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// `toggle`：先拉列表拿到当前状态，再翻转
pub fn toggle(api: &dyn TodoApi, id: &str, out: &mut impl Write) -> io::Result<bool> {
    let mut session = Headless::new(api);
    if !session.load() {
        return Ok(session.fail_with_error());
    }
    let Some(task) = session.find(id) else {
        eprintln!("Error: task {} not found", id);
        return Ok(false);
    };

    let request = session.view.toggle(&task.id, task.completed);
    session.run(request);

    // 失败时视图已经用服务端快照覆盖，状态不会是期望值
    match session.view.find(&task.id) {
        Some(current) if current.completed != task.completed => {
            writeln!(out, "{}", task_line(current))?;
            Ok(true)
        }
        _ => {
            if session.view.error().is_some() {
                return Ok(session.fail_with_error());
            }
            eprintln!("Error: Failed to update task");
            Ok(false)
        }
    }
}

/// `delete`：没有 `--yes` 时从 `input` 读取 y/N 确认
pub fn delete(
    api: &dyn TodoApi,
    id: &str,
    yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut session = Headless::new(api);
    if !session.load() {
        return Ok(session.fail_with_error());
    }
    let Some(task) = session.find(id) else {
        eprintln!("Error: task {} not found", id);
        return Ok(false);
    };

    let confirmed = yes || confirm(&task, input, out)?;
    let Some(request) = session.view.delete(&task.id, confirmed) else {
        writeln!(out, "Cancelled.")?;
        return Ok(true);
    };
    session.run(request);

    if let Some(err) = session.view.take_alert() {
        eprintln!("Error: {}", err);
        return Ok(false);
    }
    writeln!(out, "Deleted {}", task.id)?;
    Ok(true)
}

fn confirm(task: &Task, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(
        out,
        "Are you sure you want to delete \"{}\"? [y/N] ",
        task.title
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `health`：以文本输出三层状态
pub fn health(api: &dyn TodoApi, out: &mut impl Write) -> io::Result<bool> {
    let mut session = Headless::new(api);
    let ok = session.load();

    for row in session.view.health().rows.iter() {
        let mark = if row.ok { "●" } else { "✗" };
        writeln!(out, "{} {:<10} {}", mark, row.label, row.value)?;
    }

    if ok {
        Ok(true)
    } else {
        Ok(session.fail_with_error())
    }
}

// ============================================================================
// Tests
// ============================================================================
