use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：1 (上边框) + 1 (标题) + 1 (副标题)
pub const HEADER_HEIGHT: u16 = 3;

const TITLE: &str = "My 3-Tier App";
const SUBTITLE: &str = "Built with ratatui against a remote todo API";

/// 渲染顶部区域（标题 + API 地址 + 任务数）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    base_url: &str,
    task_count: usize,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, info_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner_area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", SUBTITLE), Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    render_info(frame, info_area, base_url, task_count, colors);
}

fn render_info(
    frame: &mut Frame,
    area: Rect,
    base_url: &str,
    task_count: usize,
    colors: &ThemeColors,
) {
    let left = Span::styled(format!(" {}", base_url), Style::default().fg(colors.text));

    let noun = if task_count == 1 { "task" } else { "tasks" };
    let right = Span::styled(
        format!("{} {} ", task_count, noun),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let total_width = area.width as usize;
    let used_width = left.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), area);
}
