//! 新任务输入框

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

const PLACEHOLDER: &str = "What needs to be done?";

/// 渲染输入框
///
/// is_editing: 是否正在输入（显示光标）；disabled: 后端不可达时禁用
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    is_editing: bool,
    disabled: bool,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::styled(" + ", Style::default().fg(colors.highlight))];

    if disabled {
        spans.push(Span::styled(
            format!("{} (disabled)", PLACEHOLDER),
            Style::default().fg(colors.muted),
        ));
    } else if input.is_empty() && !is_editing {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    } else {
        spans.push(Span::styled(input, Style::default().fg(colors.text)));
    }

    // 只在输入模式显示闪烁光标
    if is_editing && !disabled {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(paragraph, area);
}
