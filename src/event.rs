use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 弹窗按优先级处理：失败提示 > 确认 > 帮助
    if app.dialogs.has_modal() {
        if app.dialogs.alert.is_some() {
            handle_alert_key(app, key);
        } else if app.dialogs.confirm.is_some() {
            handle_confirm_dialog_key(app, key);
        } else {
            handle_help_key(app, key);
        }
        return;
    }

    // 输入框
    if app.dialogs.input_focused {
        handle_input_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 新建任务
        KeyCode::Char('i') | KeyCode::Char('a') => app.focus_input(),

        // 删除（需确认）
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.request_delete_selected()
        }

        // 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),

        // 切换主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 帮助
        KeyCode::Char('?') => app.dialogs.show_help = true,

        _ => {}
    }
}

/// 处理输入框的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.blur_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 处理确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_yes(),

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_dialog_no(),

        _ => {}
    }
}

/// 处理失败提示
fn handle_alert_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
    ) {
        app.dismiss_alert();
    }
}

/// 处理帮助面板
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.dialogs.show_help = false;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{seeded, settle, test_app};
    use crate::model::Task;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(seeded());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app(seeded());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_in_input_does_not_quit() {
        let api = seeded();
        let mut app = test_app(api);
        app.start();
        settle(&mut app);

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "quiz");
        assert!(!app.should_quit);
        assert_eq!(app.view.input(), "quiz");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.input(), "qui");

        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.input_focused);
    }

    #[test]
    fn test_add_task_via_keys() {
        let api = seeded();
        let mut app = test_app(api.clone());
        app.start();
        settle(&mut app);
        api.set_next_id(5);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(app.view.tasks()[0], Task::new(5, "Buy milk", false));
    }

    #[test]
    fn test_blank_enter_sends_nothing() {
        let api = seeded();
        let mut app = test_app(api.clone());
        app.start();
        settle(&mut app);

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(api.calls(), vec!["list"]);
        assert_eq!(app.view.tasks().len(), 2);
    }

    #[test]
    fn test_delete_flow_via_keys() {
        let api = seeded();
        let mut app = test_app(api.clone());
        app.start();
        settle(&mut app);

        // 取消
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        settle(&mut app);
        assert_eq!(app.view.tasks().len(), 2);

        // 确认
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        settle(&mut app);
        assert_eq!(app.view.tasks(), &[Task::new(1, "Water plants", true)]);
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let mut app = test_app(seeded());
        app.dialogs.alert = Some("Failed to add task".into());

        press(&mut app, KeyCode::Char('?'));
        assert!(!app.dialogs.show_help);

        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.alert.is_none());
    }

    #[test]
    fn test_alert_over_help_dismissed_first() {
        let mut app = test_app(seeded());
        press(&mut app, KeyCode::Char('?'));
        app.dialogs.alert = Some("Failed to delete task".into());

        press(&mut app, KeyCode::Esc);
        assert!(app.dialogs.alert.is_none());
        assert!(app.dialogs.show_help);

        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.show_help);
    }

    #[test]
    fn test_keys_ignore_hidden_rows_after_failed_refresh() {
        let api = seeded();
        let mut app = test_app(api.clone());
        app.start();
        settle(&mut app);

        api.fail_list(true);
        press(&mut app, KeyCode::Char('r'));
        settle(&mut app);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        settle(&mut app);

        assert!(app.dialogs.confirm.is_none());
        assert_eq!(api.calls(), vec!["list", "list"]);
        assert_eq!(api.server_tasks().len(), 2);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = test_app(seeded());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.dialogs.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.show_help);
    }

    #[test]
    fn test_space_toggles_selected() {
        let api = seeded();
        let mut app = test_app(api.clone());
        app.start();
        settle(&mut app);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.view.tasks()[1].completed);
        settle(&mut app);
        assert!(!api.server_tasks()[1].completed);
    }
}
