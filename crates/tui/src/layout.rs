//! Screen regions and shared layout measurements.
//!
//! Rendering and mouse hit-testing both go through [`Regions::compute`] so a
//! click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Width of the sidebar navigation.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Height of each task card on the board: borders plus title and meta lines.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = 16;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this height the header is hidden.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The sidebar plus four board columns of at least 14 characters each.
pub const MIN_WIDTH: u16 = SIDEBAR_WIDTH + 4 * 14;

/// The areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    /// Title bar; empty when hidden.
    pub header: Rect,
    /// Navigation menu.
    pub sidebar: Rect,
    /// The current page.
    pub content: Rect,
    /// Key hints and feedback.
    pub status_bar: Rect,
}

impl Regions {
    /// Splits `area` into header, sidebar, page and status bar.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_tui::layout::{Regions, SIDEBAR_WIDTH};
    /// use ratatui::layout::Rect;
    ///
    /// let regions = Regions::compute(Rect::new(0, 0, 120, 40));
    /// assert_eq!(regions.sidebar.width, SIDEBAR_WIDTH);
    /// assert_eq!(regions.header.height, 3);
    /// assert_eq!(regions.content.x, SIDEBAR_WIDTH);
    /// ```
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let header_height = if area.height >= MIN_HEIGHT_WITH_HEADER {
            HEADER_HEIGHT
        } else {
            0
        };
        let [header, body, status_bar] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);
        Self {
            header,
            sidebar,
            content,
            status_bar,
        }
    }

    /// Returns `true` if `area` is too small to render the interface.
    #[must_use]
    pub fn too_small(area: Rect) -> bool {
        area.width < MIN_WIDTH || area.height < MIN_HEIGHT
    }
}

/// Returns `true` if the point lies inside `rect`.
#[must_use]
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hidden_on_short_terminals() {
        let regions = Regions::compute(Rect::new(0, 0, 100, MIN_HEIGHT));
        assert_eq!(regions.header.height, 0);
        assert_eq!(regions.sidebar.y, 0);
        assert_eq!(regions.status_bar.height, STATUS_BAR_HEIGHT);
    }

    #[test]
    fn regions_tile_the_area() {
        let area = Rect::new(0, 0, 120, 40);
        let regions = Regions::compute(area);
        assert_eq!(regions.sidebar.height, 40 - HEADER_HEIGHT - STATUS_BAR_HEIGHT);
        assert_eq!(regions.content.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(regions.status_bar.y, 37);
    }

    #[test]
    fn too_small_thresholds() {
        assert!(Regions::too_small(Rect::new(0, 0, MIN_WIDTH - 1, 40)));
        assert!(Regions::too_small(Rect::new(0, 0, 120, MIN_HEIGHT - 1)));
        assert!(!Regions::too_small(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(contains(rect, 2, 2));
        assert!(contains(rect, 4, 4));
        assert!(!contains(rect, 5, 2));
    }
}
