//! Status bar rendering widget.
//!
//! The footer shows the keybindings that apply to the current page and,
//! after an action, a one-line status message.

use nexus_protocol::{Route, TaskView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::customers_state::CustomerView;
use crate::state::{AppState, Focus};

type Hint = (&'static str, &'static str);

const SIDEBAR: &[Hint] = &[("↑↓", "Navigate"), ("Enter", "Open"), ("Tab", "Page")];
const TYPING: &[Hint] = &[("Enter", "Done"), ("Esc", "Cancel"), ("Backspace", "Delete")];
const FORM: &[Hint] = &[
    ("Tab", "Next field"),
    ("←→", "Change"),
    ("Enter", "Create"),
    ("Esc", "Cancel"),
];
const NOTE: &[Hint] = &[("Enter", "Save note"), ("Esc", "Cancel"), ("Backspace", "Delete")];
const MENU: &[Hint] = &[("↑↓", "Choose"), ("Enter", "Apply"), ("Esc", "Cancel")];
const BOARD: &[Hint] = &[
    ("←→↑↓", "Navigate"),
    ("Enter", "Move"),
    ("n", "New"),
    ("/", "Search"),
    ("v", "List"),
];
const LIST: &[Hint] = &[
    ("↑↓", "Navigate"),
    ("Space", "Check"),
    ("a", "All"),
    ("Enter", "Move"),
    ("v", "Board"),
];
const ORDERS: &[Hint] = &[
    ("[ ]", "Tab"),
    ("↑↓", "Navigate"),
    ("Space", "Check"),
    ("Enter", "Status"),
];
const CUSTOMERS: &[Hint] = &[
    ("↑↓", "Navigate"),
    ("Enter", "Details"),
    ("n", "New"),
    ("/", "Search"),
    ("d t o s", "Filter"),
];
const CUSTOMER_DETAIL: &[Hint] = &[("[ ]", "Tab"), ("n", "Note"), ("Esc", "Back")];
const DEFAULT: &[Hint] = &[("Tab", "Sidebar"), ("1-0", "Pages")];

/// Hints for whatever currently receives keys.
#[must_use]
pub fn hints_for(state: &AppState) -> &'static [Hint] {
    if state.focus == Focus::Sidebar {
        return SIDEBAR;
    }
    match state.route() {
        Route::Tasks if state.tasks.form.is_some() => FORM,
        Route::Tasks if state.tasks.menu.is_some() => MENU,
        Route::Tasks if state.tasks.searching => TYPING,
        Route::Tasks if state.tasks.view == TaskView::List => LIST,
        Route::Tasks => BOARD,
        Route::Orders if state.orders.menu.is_some() => MENU,
        Route::Orders => ORDERS,
        Route::Customers if state.customers.form.is_some() => FORM,
        Route::Customers if state.customers.note.is_some() => NOTE,
        Route::Customers if state.customers.searching => TYPING,
        Route::Customers => match state.customers.view() {
            CustomerView::List => CUSTOMERS,
            CustomerView::Details(_) => CUSTOMER_DETAIL,
        },
        _ => DEFAULT,
    }
}

/// Renders the status bar for the current state.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │Task 4 moved to Review  |  [ ] Tab  ↑↓ Navigate  ? Help    │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Catalog, Route, TaskView};
/// use nexus_tui::AppState;
/// use nexus_tui::widgets::render_status_bar;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let state = AppState::new(Catalog::sample(), Route::Orders, TaskView::Board, 50);
/// let area = Rect::new(0, 0, 100, 3);
/// let mut buf = Buffer::empty(area);
/// render_status_bar(&state, area, &mut buf);
/// ```
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(message) = &state.status_message {
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled("  |  ", text_style));
    }
    for (key, text) in hints_for(state)
        .iter()
        .chain([&("?", "Help"), &("q", "Quit")])
    {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}  "), text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CustomerForm, TaskForm};
    use crate::test_utils::{render_to_string, sample_state};

    fn render(state: &AppState) -> String {
        render_to_string(120, 3, |area, buf| render_status_bar(state, area, buf))
    }

    #[test]
    fn board_hints() {
        let content = render(&sample_state(Route::Tasks));
        assert!(content.contains("Navigate"));
        assert!(content.contains("v List"));
        assert!(content.contains("? Help"));
    }

    #[test]
    fn form_hints_take_precedence() {
        let mut state = sample_state(Route::Tasks);
        state.tasks.form = Some(TaskForm::new());
        assert_eq!(hints_for(&state), FORM);
    }

    #[test]
    fn sidebar_focus_hints() {
        let mut state = sample_state(Route::Orders);
        state.focus_next();
        assert_eq!(hints_for(&state), SIDEBAR);
    }

    #[test]
    fn customer_detail_hints() {
        let mut state = sample_state(Route::Customers);
        state.customers.open("CUS-001");
        assert_eq!(hints_for(&state), CUSTOMER_DETAIL);

        state.customers.start_note();
        assert_eq!(hints_for(&state), NOTE);
    }

    #[test]
    fn customer_form_hints() {
        let mut state = sample_state(Route::Customers);
        assert!(render(&state).contains("n New"));
        state.customers.form = Some(CustomerForm::new());
        assert_eq!(hints_for(&state), FORM);
    }

    #[test]
    fn message_comes_first() {
        let mut state = sample_state(Route::Orders);
        state.apply_order_status("3", nexus_protocol::OrderStatus::Approved);
        let content = render(&state);
        assert!(content.contains("Order 3 marked Approved  |  [ ] Tab"));
    }
}
