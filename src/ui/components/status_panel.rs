//! System Health 卡片

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{ConnectivityStatus, SystemHealth};
use crate::theme::ThemeColors;

/// 卡片宽度
pub const PANEL_WIDTH: u16 = 30;

/// 渲染三层健康状态
pub fn render(
    frame: &mut Frame,
    area: Rect,
    health: &SystemHealth,
    status: ConnectivityStatus,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(" System Health ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let label_width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![Line::from("")];

    for row in &health.rows {
        let color = if row.ok {
            colors.ok
        } else if status == ConnectivityStatus::Checking {
            // 首次加载未返回时不算故障
            colors.warning
        } else {
            colors.error
        };
        let dot = if row.ok { "●" } else { "○" };

        let value = format!("{} {}", dot, row.value);
        let padding = label_width.saturating_sub(row.label.len() + value.chars().count());

        lines.push(Line::from(vec![
            Span::styled(format!(" {}", row.label), Style::default().fg(colors.text)),
            Span::raw(" ".repeat(padding)),
            Span::styled(value, Style::default().fg(color)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
