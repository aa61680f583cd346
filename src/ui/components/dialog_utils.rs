//! 弹窗共用的外框和提示行

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::theme::ThemeColors;

/// 弹窗外框：标题、强调色、尺寸
pub struct DialogFrame<'a> {
    pub title: &'a str,
    pub accent: Color,
    pub width: u16,
    pub height: u16,
}

/// 在 `area` 中居中放置 width x height，超出时收缩到 area 内
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 清出居中区域并画外框，返回框内可用区域
pub fn open(frame: &mut Frame, spec: DialogFrame<'_>, colors: &ThemeColors) -> Rect {
    let area = centered(frame.area(), spec.width, spec.height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(spec.title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(spec.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(spec.accent))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 底部提示行，`hints` 为 (按键, 说明)
pub fn hint_line(hints: &[(&str, &str)], colors: &ThemeColors) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));
    }
    Line::from(spans).alignment(Alignment::Center)
}
