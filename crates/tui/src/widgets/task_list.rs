//! Task list view: one table row per filtered task, with checkboxes.

use chrono::NaiveDate;
use nexus_protocol::{Selection, Task, Variant};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};

use super::task_card::{due_label, priority_color};
use super::{TABLE_HEADER_ROWS, checkbox, empty_message, scroll_offset};

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(3),
    Constraint::Min(20),
    Constraint::Length(8),
    Constraint::Length(10),
    Constraint::Length(12),
    Constraint::Length(13),
    Constraint::Length(13),
];

/// Renders the list view.
///
/// `cursor` indexes `tasks`; `all_selected` drives the header checkbox.
pub fn render_task_list(
    tasks: &[&Task],
    selection: &Selection,
    all_selected: bool,
    cursor: usize,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Tasks ({}) ", tasks.len()));

    if tasks.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        empty_message("No tasks match the current filters", inner, buf);
        return;
    }

    let header = Row::new([
        Cell::from(checkbox(all_selected)),
        Cell::from("Title"),
        Cell::from("Priority"),
        Cell::from("Category"),
        Cell::from("Status"),
        Cell::from("Assignee"),
        Cell::from("Due"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let visible = list_capacity(area);
    let offset = scroll_offset(Some(cursor), tasks.len(), visible);
    let rows = tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, task)| task_row(task, selection.contains(&task.id), i == cursor, today));

    Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .render(area, buf);
}

fn task_row(task: &Task, checked: bool, highlighted: bool, today: NaiveDate) -> Row<'_> {
    let due_style = if task.is_overdue(today) {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let row = Row::new([
        Cell::from(checkbox(checked)),
        Cell::from(task.title.as_str()),
        Cell::from(Line::from(Span::styled(
            task.priority.display_name(),
            Style::default().fg(priority_color(task.priority)),
        ))),
        Cell::from(task.category.display_name()),
        Cell::from(task.status.display_name()),
        Cell::from(task.assignee.as_str()),
        Cell::from(Span::styled(due_label(task), due_style)),
    ]);
    if highlighted {
        row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    } else {
        row
    }
}

/// Number of task rows that fit in `area`.
#[must_use]
pub(crate) fn list_capacity(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2 + TABLE_HEADER_ROWS)).max(1)
}

/// Maps a click at screen row `y` to an index into the list, given the
/// cursor the list was rendered with.
#[must_use]
pub fn list_row_at(len: usize, cursor: usize, area: Rect, y: u16) -> Option<usize> {
    let first = area.y + 1 + TABLE_HEADER_ROWS;
    if y < first || y >= area.bottom().saturating_sub(1) {
        return None;
    }
    let visible = list_capacity(area);
    let index = scroll_offset(Some(cursor), len, visible) + usize::from(y - first);
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use nexus_protocol::Catalog;

    #[test]
    fn rows_show_checkboxes_and_fields() {
        let catalog = Catalog::sample();
        let tasks: Vec<_> = catalog.tasks.iter().collect();
        let mut selection = Selection::default();
        selection.toggle("2");

        let content = render_to_string(110, 14, |area, buf| {
            render_task_list(&tasks, &selection, false, 0, catalog.as_of, area, buf);
        });

        assert!(content.contains("Tasks (8)"));
        assert!(content.contains("Title"));
        assert!(content.contains("[x] Process pending order FX-0003"));
        assert!(content.contains("Urgent"));
    }

    #[test]
    fn header_checkbox_reflects_all_selected() {
        let catalog = Catalog::sample();
        let tasks: Vec<_> = catalog.tasks.iter().take(1).collect();
        let content = render_to_string(110, 8, |area, buf| {
            render_task_list(&tasks, &Selection::default(), true, 0, catalog.as_of, area, buf);
        });
        assert!(content.contains("[x] Title"));
    }

    #[test]
    fn empty_list_shows_message() {
        let catalog = Catalog::sample();
        let content = render_to_string(80, 8, |area, buf| {
            render_task_list(&[], &Selection::default(), false, 0, catalog.as_of, area, buf);
        });
        assert!(content.contains("No tasks match the current filters"));
    }

    #[test]
    fn click_maps_to_row() {
        let area = Rect::new(0, 0, 80, 10);
        // Border, header, margin: first data row at y = 3.
        assert_eq!(list_row_at(8, 0, area, 3), Some(0));
        assert_eq!(list_row_at(8, 0, area, 5), Some(2));
        assert_eq!(list_row_at(8, 0, area, 2), None);
        assert_eq!(list_row_at(2, 0, area, 6), None);
        assert_eq!(list_row_at(8, 0, area, 9), None);
    }
}
