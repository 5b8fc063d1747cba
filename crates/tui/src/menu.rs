//! Status menu popup state.
//!
//! The menu lists every status of an entity kind and applies the chosen one
//! to a single entity. It replaces drag-and-drop between board columns.

use nexus_protocol::Variant;

/// An open "change status" menu for one entity.
///
/// # Examples
///
/// ```
/// use nexus_protocol::TaskStatus;
/// use nexus_tui::menu::StatusMenu;
///
/// let mut menu = StatusMenu::new("4", TaskStatus::InProgress);
/// assert_eq!(menu.selected(), TaskStatus::InProgress);
///
/// menu.move_down();
/// assert_eq!(menu.selected(), TaskStatus::Review);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMenu<S> {
    target: String,
    current: S,
    cursor: usize,
}

impl<S: Variant> StatusMenu<S> {
    /// Opens a menu for `target`, highlighting its current status.
    #[must_use]
    pub fn new(target: impl Into<String>, current: S) -> Self {
        Self {
            target: target.into(),
            current,
            cursor: current.position(),
        }
    }

    /// Id of the entity the menu acts on.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The entity's status when the menu was opened.
    #[must_use]
    pub fn current(&self) -> S {
        self.current
    }

    /// Index of the highlighted option.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The highlighted status.
    #[must_use]
    pub fn selected(&self) -> S {
        S::ALL[self.cursor.min(S::ALL.len() - 1)]
    }

    /// Highlights the previous option, wrapping to the last.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(S::ALL.len() - 1);
    }

    /// Highlights the next option, wrapping to the first.
    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % S::ALL.len();
    }

    /// Highlights the option at `index`, if it exists.
    pub fn highlight(&mut self, index: usize) -> bool {
        if index < S::ALL.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_protocol::{OrderStatus, TaskStatus};

    #[test]
    fn opens_on_current_status() {
        let menu = StatusMenu::new("FX-0003", OrderStatus::Pending);
        assert_eq!(menu.cursor(), 0);
        assert_eq!(menu.target(), "FX-0003");
        assert_eq!(menu.current(), OrderStatus::Pending);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut menu = StatusMenu::new("1", TaskStatus::ToDo);
        menu.move_up();
        assert_eq!(menu.selected(), TaskStatus::Completed);
        menu.move_down();
        assert_eq!(menu.selected(), TaskStatus::ToDo);
    }

    #[test]
    fn highlight_rejects_out_of_range() {
        let mut menu = StatusMenu::new("1", TaskStatus::ToDo);
        assert!(menu.highlight(2));
        assert_eq!(menu.selected(), TaskStatus::Review);
        assert!(!menu.highlight(4));
        assert_eq!(menu.selected(), TaskStatus::Review);
    }
}
