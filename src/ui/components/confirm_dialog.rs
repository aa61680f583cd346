//! 确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{self, DialogFrame};
use super::truncate;
use crate::model::TaskId;
use crate::theme::ThemeColors;

/// 确认弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmType {
    /// 删除任务
    DeleteTask { id: TaskId, title: String },
}

impl ConfirmType {
    pub fn title(&self) -> &str {
        match self {
            ConfirmType::DeleteTask { .. } => " Delete ",
        }
    }

    pub fn message(&self) -> Vec<Line<'static>> {
        match self {
            ConfirmType::DeleteTask { title, .. } => vec![
                Line::from(format!("Task: {}", truncate(title, 32))),
                Line::from(""),
                Line::from("Are you sure you want to"),
                Line::from("delete this task?"),
            ],
        }
    }
}

/// 渲染确认弹窗
pub fn render(frame: &mut Frame, confirm_type: &ConfirmType, colors: &ThemeColors) {
    let message_lines = confirm_type.message();
    // 标题 + 边框 + 内容 + 提示
    let popup_height = (message_lines.len() as u16) + 5;
    let inner_area = dialog_utils::open(
        frame,
        DialogFrame {
            title: confirm_type.title(),
            accent: colors.warning,
            width: 40,
            height: popup_height,
        },
        colors,
    );

    let [content_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    let styled_lines: Vec<Line> = message_lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();

    let content = Paragraph::new(styled_lines).alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    let hint = Paragraph::new(dialog_utils::hint_line(
        &[("y/Enter", "confirm"), ("n/Esc", "cancel")],
        colors,
    ));
    frame.render_widget(hint, hint_area);
}
