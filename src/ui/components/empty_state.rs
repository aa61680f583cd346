use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 列表为空时的提示
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "No tasks yet. Add one above!",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " i ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ];

    render_centered(frame, area, lines);
}

/// list 失败时显示错误信息
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors.error),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " r ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to retry", Style::default().fg(colors.text)),
        ]),
    ];

    render_centered(frame, area, lines);
}

/// 加载中
pub fn render_loading(frame: &mut Frame, area: Rect, spinner: char, colors: &ThemeColors) {
    let lines = vec![Line::from(Span::styled(
        format!("{} Loading tasks...", spinner),
        Style::default().fg(colors.warning),
    ))];

    render_centered(frame, area, lines);
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    // 垂直居中
    let y_offset = area.height.saturating_sub(height) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: height.min(area.height),
    };

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, centered_area);
}
