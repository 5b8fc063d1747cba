//! Widget components for the nexus TUI.
//!
//! Every widget is a pure function that renders state into a buffer, so
//! each one can be tested by rendering into a [`Buffer`] and inspecting
//! the text. Widgets that accept mouse clicks also expose a hit-test
//! function built on the same geometry as their renderer.
//!
//! # Modules
//!
//! - [`header`]: Title bar with the current page and help hint
//! - [`sidebar`]: Navigation list of every route
//! - [`dashboard`]: KPI cards, charts, recent orders, and activity
//! - [`tasks`]: Tasks page, built from [`board`], [`task_list`], and [`task_card`]
//! - [`orders`]: Orders table with status tabs and paging footer
//! - [`customers`]: Customer list with filters
//! - [`customer_detail`]: One customer's insights and history tabs
//! - [`settings`]: Settings modal
//! - [`status_menu`], [`form`], [`help`]: Popups
//! - [`status_bar`]: Footer with keybinding hints and the last status message
//! - [`placeholder`]: Pages that have no screen yet
//!
//! # Priority colors
//!
//! | Priority | Color |
//! |----------|-------|
//! | `Low` | Gray (`Color::DarkGray`) |
//! | `Medium` | Blue (`Color::Blue`) |
//! | `High` | Yellow (`Color::Yellow`) |
//! | `Urgent` | Red (`Color::Red`) |

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub mod board;
pub mod customer_detail;
pub mod customers;
pub mod dashboard;
pub mod form;
pub mod header;
pub mod help;
pub mod orders;
pub mod placeholder;
pub mod settings;
pub mod sidebar;
pub mod status_bar;
pub mod status_menu;
pub mod task_card;
pub mod task_list;
pub mod tasks;

pub use board::render_board;
pub use customer_detail::render_customer_detail;
pub use customers::render_customers_page;
pub use dashboard::render_dashboard;
pub use form::{render_customer_form, render_task_form};
pub use header::render_header;
pub use help::render_help_overlay;
pub use orders::render_orders_page;
pub use placeholder::render_placeholder;
pub use settings::render_settings_panel;
pub use sidebar::render_sidebar;
pub use status_bar::render_status_bar;
pub use status_menu::render_status_menu;
pub use task_card::{priority_color, render_task_card};
pub use task_list::render_task_list;
pub use tasks::render_tasks_page;

/// Rows a bordered table spends on its header and the margin below it.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Truncates a string to `max_width` characters, ending in "..." when cut.
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

/// First item to draw so that `selected` stays visible when only
/// `visible` of `total` items fit.
pub(crate) fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    if selected < visible / 2 {
        0
    } else {
        selected.saturating_sub(visible / 2).min(max_offset)
    }
}

pub(crate) const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Dimmed italic placeholder text, e.g. for empty tables.
pub(crate) fn empty_message(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests;
