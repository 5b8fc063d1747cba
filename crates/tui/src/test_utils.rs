//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use nexus_protocol::{Catalog, Route, TaskView};

use crate::state::AppState;

/// Converts a ratatui [`Buffer`] to a string, one line per row, with
/// trailing spaces trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Renders with `draw` into a fresh buffer of the given size and returns
/// its text.
pub(crate) fn render_to_string(width: u16, height: u16, draw: impl FnOnce(Rect, &mut Buffer)) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(area, &mut buf);
    buffer_to_string(&buf)
}

/// Application state over the sample catalog, opened on `route`.
#[must_use]
pub(crate) fn sample_state(route: Route) -> AppState {
    AppState::new(Catalog::sample(), route, TaskView::Board, 50)
}
