use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
///
/// `pending` 为进行中的请求数，大于 0 时在右侧显示 spinner
pub fn render(
    frame: &mut Frame,
    area: Rect,
    editing: bool,
    has_items: bool,
    pending: usize,
    spinner: char,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(editing, has_items);

    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    if pending > 0 {
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let status = format!("{} syncing ({}) ", spinner, pending);
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width.saturating_sub(used + status.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(status, Style::default().fg(colors.warning)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(editing: bool, has_items: bool) -> Vec<(&'static str, &'static str)> {
    if editing {
        return vec![("Enter", "add"), ("Esc", "done")];
    }
    if has_items {
        vec![
            ("i", "new"),
            ("Space", "toggle"),
            ("d", "delete"),
            ("r", "refresh"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("i", "new"), ("r", "refresh"), ("?", "help"), ("q", "quit")]
    }
}
