//! 主界面渲染：Header + System Health + Your Tasks + Footer

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    alert_dialog, confirm_dialog, empty_state, footer, header, help_panel, input_bar,
    status_panel, task_list, toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(
        frame,
        header_area,
        &app.base_url,
        app.view.tasks().len(),
        colors,
    );

    let [health_area, tasks_area] = Layout::horizontal([
        Constraint::Length(status_panel::PANEL_WIDTH),
        Constraint::Fill(1),
    ])
    .areas(body_area);

    status_panel::render(
        frame,
        health_area,
        &app.view.health(),
        app.view.status(),
        colors,
    );

    render_tasks_card(frame, tasks_area, app);

    let spinner = toast::spinner_frame();
    footer::render(
        frame,
        footer_area,
        app.dialogs.input_focused,
        app.selected_task().is_some(),
        app.async_ops.in_flight(),
        spinner,
        colors,
    );

    // 渲染 Toast
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 弹窗按优先级叠加
    if let Some(ref confirm) = app.dialogs.confirm {
        confirm_dialog::render(frame, confirm, colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }

    // 失败提示在最上层
    if let Some(ref message) = app.dialogs.alert {
        alert_dialog::render(frame, message, colors);
    }
}

/// Your Tasks 卡片：输入框 + 列表 / 加载中 / 错误
fn render_tasks_card(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.ui.colors;
    let view = &app.view;

    let border_color = if app.dialogs.input_focused {
        colors.highlight
    } else {
        colors.border
    };
    let block = Block::default()
        .title(" Your Tasks ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [_, input_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    input_bar::render(
        frame,
        input_area,
        view.input(),
        app.dialogs.input_focused,
        view.is_input_disabled(),
        colors,
    );

    if view.is_loading() {
        empty_state::render_loading(frame, list_area, toast::spinner_frame(), colors);
    } else if let Some(error) = view.error() {
        empty_state::render_error(frame, list_area, error, colors);
    } else if view.tasks().is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(frame, list_area, view.tasks(), app.ui.selected, colors);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{seeded, settle, test_app};
    use crate::client::mock::MockTodoApi;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buf = terminal.backend().buffer();
        let area = buf.area;
        let mut lines = Vec::new();
        for y in area.y..area.y + area.height {
            let mut line = String::new();
            for x in area.x..area.x + area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_renders_health_and_tasks() {
        let mut app = test_app(seeded());
        app.start();
        settle(&mut app);

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("My 3-Tier App"));
        assert!(screen.contains("System Health"));
        assert!(screen.contains("Frontend"));
        assert!(screen.contains("Online"));
        assert!(screen.contains("Database"));
        assert!(screen.contains("Connected"));
        assert!(screen.contains("Walk dog"));
        assert!(screen.contains("[✓]"));
        assert!(screen.contains("2 tasks"));
    }

    #[test]
    fn test_renders_checking_before_first_load() {
        let app = test_app(seeded());
        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("Checking..."));
    }

    #[test]
    fn test_renders_error_state() {
        let api = seeded();
        api.fail_list(true);
        let mut app = test_app(api);
        app.start();
        settle(&mut app);

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("Unreachable"));
        assert!(screen.contains("Failed to fetch todos"));
        assert!(screen.contains("(disabled)"));
        assert!(!screen.contains("Walk dog"));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = test_app(Arc::new(MockTodoApi::new()));
        app.start();
        settle(&mut app);

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("No tasks yet. Add one above!"));
        assert!(screen.contains("What needs to be done?"));
    }

    #[test]
    fn test_renders_confirm_dialog() {
        let mut app = test_app(seeded());
        app.start();
        settle(&mut app);
        app.request_delete_selected();

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("delete this task?"));
    }

    #[test]
    fn test_renders_alert() {
        let mut app = test_app(seeded());
        app.dialogs.alert = Some("Failed to add task".to_string());

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("Failed to add task"));
        assert!(screen.contains("dismiss"));
    }

    #[test]
    fn test_alert_drawn_above_help() {
        let mut app = test_app(seeded());
        app.dialogs.show_help = true;
        app.dialogs.alert = Some("Failed to delete task".to_string());

        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Failed to delete task"));
        assert!(screen.contains("dismiss"));
    }

    #[test]
    fn test_error_state_hides_stale_rows() {
        let api = seeded();
        let mut app = test_app(Arc::clone(&api));
        app.start();
        settle(&mut app);
        assert!(render_to_string(&app, 100, 24).contains("Walk dog"));

        api.fail_list(true);
        app.refresh();
        settle(&mut app);

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("Failed to fetch todos"));
        assert!(!screen.contains("Walk dog"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = test_app(seeded());
        app.show_toast("Theme: Dark");
        app.dialogs.show_help = true;
        let _ = render_to_string(&app, 10, 4);
    }
}
