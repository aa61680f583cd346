//! 失败提示弹窗：必须按键关闭

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::dialog_utils::{self, DialogFrame};
use crate::theme::ThemeColors;

const POPUP_WIDTH: u16 = 44;

/// 渲染失败提示
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    // 粗略估算换行后的行数
    let text_width = (POPUP_WIDTH - 4) as usize;
    let lines = message.chars().count().div_ceil(text_width).max(1) as u16;
    let inner_area = dialog_utils::open(
        frame,
        DialogFrame {
            title: " Error ",
            accent: colors.error,
            width: POPUP_WIDTH,
            height: lines + 5,
        },
        colors,
    );

    let [_, content_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let content = Paragraph::new(message)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, content_area);

    let hint = Paragraph::new(dialog_utils::hint_line(&[("Enter", "dismiss")], colors));
    frame.render_widget(hint, hint_area);
}
