//! Multi-select state for list views.
//!
//! A [`Selection`] is a set of entity ids. It is independent of filtering:
//! ids stay selected while hidden by a filter, and only
//! [`Selection::toggle_all`] looks at what is currently visible.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of selected entity ids.
///
/// # Examples
///
/// ```
/// use nexus_protocol::Selection;
///
/// let mut selection = Selection::default();
/// selection.toggle("2");
/// assert!(selection.contains("2"));
/// selection.toggle("2");
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Selects `id` if it is not selected, deselects it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterates over the selected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns `true` if the selection is exactly `visible`.
    ///
    /// This drives the "select all" checkbox: it is checked when every
    /// visible row, and nothing else, is selected.
    #[must_use]
    pub fn covers_exactly<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> bool {
        let visible: BTreeSet<&str> = visible.into_iter().collect();
        visible.len() == self.ids.len() && visible.iter().all(|id| self.ids.contains(*id))
    }

    /// The "select all" checkbox action.
    ///
    /// When the selection already equals the visible ids it is cleared;
    /// otherwise it is replaced by exactly the visible ids. Ids hidden by the
    /// current filter are dropped either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Selection;
    ///
    /// let mut selection = Selection::default();
    /// selection.toggle("9");
    ///
    /// selection.toggle_all(["2", "7"]);
    /// assert_eq!(selection.iter().collect::<Vec<_>>(), ["2", "7"]);
    ///
    /// selection.toggle_all(["2", "7"]);
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: BTreeSet<String> = visible.into_iter().map(str::to_string).collect();
        if visible == self.ids {
            self.ids.clear();
        } else {
            self.ids = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::{TaskFilter, project};
    use crate::task::TaskCategory;

    #[test]
    fn toggle_all_selects_exactly_the_filtered_tasks() {
        let catalog = Catalog::sample();
        let filter = TaskFilter::default().with_category(TaskCategory::Order);
        let visible = project(&catalog.tasks, &filter);

        let mut selection = Selection::default();
        selection.toggle("1");
        selection.toggle_all(visible.iter().map(|t| t.id.as_str()));

        assert_eq!(selection.iter().collect::<Vec<_>>(), ["2", "4"]);
        assert!(selection.covers_exactly(visible.iter().map(|t| t.id.as_str())));
    }

    #[test]
    fn toggle_all_on_partial_selection_fills_it() {
        let mut selection = Selection::default();
        selection.toggle("2");
        selection.toggle_all(["2", "4"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn toggle_all_with_nothing_visible_clears() {
        let mut selection = Selection::default();
        selection.toggle("3");
        selection.toggle_all(Vec::<&str>::new());
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut selection = Selection::default();
        selection.toggle("6");
        // Filtering happens elsewhere; the id is still selected.
        assert!(selection.contains("6"));
        assert!(!selection.covers_exactly(["2"]));
    }
}
