use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let title_style = if task.completed {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(format!("[{}]", task.checkbox())).style(Style::default().fg(colors.ok)),
                Cell::from(task.title.clone()).style(title_style),
                Cell::from("✕").style(Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2), // 选择器
        Constraint::Length(4), // 复选框
        Constraint::Fill(1),   // 标题
        Constraint::Length(2), // 删除标记
    ];

    let table = Table::new(rows, widths).row_highlight_style(
        Style::default()
            .bg(colors.bg_secondary)
            .add_modifier(Modifier::BOLD),
    );

    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
