//! Task card rendering widget.
//!
//! Cards are color-coded by priority; the selected card uses the brighter
//! variant of its color.

use chrono::NaiveDate;
use nexus_protocol::{Task, TaskPriority, Variant, format};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::truncate;

/// Returns the color associated with a task priority.
///
/// # Examples
///
/// ```
/// use nexus_protocol::TaskPriority;
/// use nexus_tui::widgets::priority_color;
/// use ratatui::style::Color;
///
/// assert_eq!(priority_color(TaskPriority::Low), Color::DarkGray);
/// assert_eq!(priority_color(TaskPriority::Urgent), Color::Red);
/// ```
#[must_use]
pub const fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::DarkGray,
        TaskPriority::Medium => Color::Blue,
        TaskPriority::High => Color::Yellow,
        TaskPriority::Urgent => Color::Red,
    }
}

const fn priority_color_bright(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::Gray,
        TaskPriority::Medium => Color::LightBlue,
        TaskPriority::High => Color::LightYellow,
        TaskPriority::Urgent => Color::LightRed,
    }
}

/// Renders a task card to the buffer.
///
/// ```text
/// ╭────────────────────╮
/// │Follow up with Ahmed│
/// │High · Jan 25 · JD  │
/// ╰────────────────────╯
/// ```
///
/// The due date turns red once it has passed `today` for an open task.
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, meta_style) = if is_selected {
        let bright = priority_color_bright(task.priority);
        (
            bright,
            Style::default().fg(bright).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            priority_color(task.priority),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };
    let due_style = if task.is_overdue(today) {
        Style::default().fg(Color::Red)
    } else {
        meta_style
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let due = task.due_date.format("%b %d").to_string();
    let meta = vec![
        Span::styled(task.priority.display_name(), meta_style),
        Span::styled(" · ", meta_style),
        Span::styled(due, due_style),
        Span::styled(" · ", meta_style),
        Span::styled(initials(&task.assignee), meta_style),
    ];

    let content = vec![
        Line::from(Span::styled(truncate(&task.title, inner_width), title_style)),
        Line::from(meta),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// "Sarah Wilson" → "SW".
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Due date as shown in list rows.
pub(crate) fn due_label(task: &Task) -> String {
    format::date(task.due_date)
}
