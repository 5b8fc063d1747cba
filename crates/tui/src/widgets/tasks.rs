//! Tasks page: stats cards, filter bar, and the board or list body.

use nexus_protocol::{TaskStats, TaskView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::board::{BoardCursor, render_board};
use super::task_list::render_task_list;
use crate::state::AppState;

/// Areas of the tasks page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TasksRegions {
    pub stats: Rect,
    pub filters: Rect,
    pub body: Rect,
}

impl TasksRegions {
    /// Splits the page area.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let [stats, filters, body] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        Self {
            stats,
            filters,
            body,
        }
    }
}

/// Renders the tasks page for the current state.
pub fn render_tasks_page(state: &AppState, area: Rect, buf: &mut Buffer) {
    let regions = TasksRegions::compute(area);
    let tasks = &state.catalog.tasks;
    let page = &state.tasks;
    let today = state.catalog.as_of;

    render_stats(&TaskStats::compute(tasks, today), regions.stats, buf);
    render_filter_bar(state, regions.filters, buf);

    match page.view {
        TaskView::Board => {
            let columns = page.columns(tasks);
            let cursor = BoardCursor {
                column: page.column(),
                row: page.highlighted(tasks).map(|_| page.row()),
            };
            render_board(&columns, cursor, today, regions.body, buf);
        }
        TaskView::List => {
            let visible = page.visible(tasks);
            render_task_list(
                &visible,
                &page.selection,
                page.all_selected(tasks),
                page.list_row(),
                today,
                regions.body,
                buf,
            );
        }
    }
}

fn render_stats(stats: &TaskStats, area: Rect, buf: &mut Buffer) {
    let cards = [
        ("Total Tasks", stats.total, Color::White),
        ("Completed", stats.completed, Color::Green),
        ("Due Today", stats.due_today, Color::Yellow),
        ("Overdue", stats.overdue, Color::Red),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(*card_area, buf);
    }
}

fn render_filter_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let page = &state.tasks;
    let key = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);
    let search_style = if page.searching {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        value
    };
    let search = if page.filter.search.is_empty() && !page.searching {
        "Search tasks...".to_string()
    } else if page.searching {
        format!("{}▏", page.filter.search)
    } else {
        page.filter.search.to_string()
    };
    let view = match page.view {
        TaskView::Board => "Board",
        TaskView::List => "List",
    };

    Paragraph::new(Line::from(vec![
        Span::styled(" / ", key),
        Span::styled(search, search_style),
        Span::styled("  p ", key),
        Span::styled(page.filter.priority.label("All Priority"), value),
        Span::styled("  c ", key),
        Span::styled(page.filter.category.label("All Category"), value),
        Span::styled("  v ", key),
        Span::styled(view, value),
    ]))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_to_string, sample_state};
    use nexus_protocol::{FilterField, Route};

    #[test]
    fn board_page_shows_stats_filters_and_columns() {
        let state = sample_state(Route::Tasks);
        let content = render_to_string(110, 30, |area, buf| render_tasks_page(&state, area, buf));

        assert!(content.contains("Total Tasks"));
        assert!(content.contains("Search tasks..."));
        assert!(content.contains("All Priority"));
        assert!(content.contains("To Do (3)"));
    }

    #[test]
    fn board_counts_follow_the_filter() {
        let mut state = sample_state(Route::Tasks);
        for ch in "order".chars() {
            state.tasks.input(ch, &state.catalog.tasks);
        }
        let content = render_to_string(110, 30, |area, buf| render_tasks_page(&state, area, buf));

        assert!(content.contains("To Do (1)"));
        assert!(content.contains("In Progress (1)"));
        assert!(content.contains("Review (0)"));
        assert!(content.contains("/ order"));
    }

    #[test]
    fn list_view_renders_table() {
        let mut state = sample_state(Route::Tasks);
        state.tasks.toggle_view();
        state
            .tasks
            .cycle_filter(FilterField::Category, &state.catalog.tasks);
        let content = render_to_string(110, 30, |area, buf| render_tasks_page(&state, area, buf));

        assert!(content.contains("Tasks (2)"));
        assert!(content.contains("List"));
        assert!(content.contains("c Order"));
    }
}
