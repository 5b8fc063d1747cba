//! Tasks page state: view mode, filters, cursors, and multi-select.
//!
//! Cursor positions are indexes into the *filtered* view, so every method
//! that moves a cursor takes the catalog's task list and re-projects it.

use nexus_protocol::{
    Choice, FilterField, Selection, StatusColumn, Task, TaskFilter, TaskStatus, TaskView, Variant,
    board::group_by_status, filter::project,
};
use tracing::debug;

use crate::form::TaskForm;
use crate::menu::StatusMenu;

/// State of the tasks page.
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    /// Board or list layout.
    pub view: TaskView,
    /// Active search and selectors.
    pub filter: TaskFilter,
    /// Whether keystrokes go to the search box.
    pub searching: bool,
    /// Checked rows of the list view.
    pub selection: Selection,
    /// Open "change status" menu.
    pub menu: Option<StatusMenu<TaskStatus>>,
    /// Open "New Task" form.
    pub form: Option<TaskForm>,
    column: usize,
    row: usize,
    list_row: usize,
}

impl TasksState {
    /// Creates the page state with the given initial layout.
    #[must_use]
    pub fn new(view: TaskView) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Highlighted board column.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Highlighted card within the board column.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Highlighted row of the list view.
    #[must_use]
    pub fn list_row(&self) -> usize {
        self.list_row
    }

    /// Tasks passing the current filter, in catalog order.
    #[must_use]
    pub fn visible<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        project(tasks, &self.filter)
    }

    /// The four board columns over the filtered tasks.
    #[must_use]
    pub fn columns<'a>(&self, tasks: &'a [Task]) -> Vec<StatusColumn<'a>> {
        group_by_status(&self.visible(tasks))
    }

    /// The task under the cursor in the current layout.
    #[must_use]
    pub fn highlighted<'a>(&self, tasks: &'a [Task]) -> Option<&'a Task> {
        match self.view {
            TaskView::Board => self
                .columns(tasks)
                .get(self.column)
                .and_then(|c| c.tasks.get(self.row).copied()),
            TaskView::List => self.visible(tasks).get(self.list_row).copied(),
        }
    }

    /// Switches between board and list.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        debug!(view = ?self.view, "task view changed");
    }

    /// Moves the board cursor one column left, wrapping around.
    pub fn move_left(&mut self, tasks: &[Task]) {
        if self.view == TaskView::Board {
            self.column = self.column.checked_sub(1).unwrap_or(TaskStatus::ALL.len() - 1);
            self.clamp(tasks);
        }
    }

    /// Moves the board cursor one column right, wrapping around.
    pub fn move_right(&mut self, tasks: &[Task]) {
        if self.view == TaskView::Board {
            self.column = (self.column + 1) % TaskStatus::ALL.len();
            self.clamp(tasks);
        }
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_up(&mut self, tasks: &[Task]) {
        let len = self.current_len(tasks);
        let cursor = self.cursor_mut();
        *cursor = match len {
            0 => 0,
            _ => cursor.checked_sub(1).unwrap_or(len - 1),
        };
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_down(&mut self, tasks: &[Task]) {
        let len = self.current_len(tasks);
        let cursor = self.cursor_mut();
        *cursor = match len {
            0 => 0,
            _ => (*cursor + 1) % len,
        };
    }

    /// Places the board cursor on a card, if it exists.
    pub fn focus_card(&mut self, tasks: &[Task], column: usize, row: usize) -> bool {
        let exists = self
            .columns(tasks)
            .get(column)
            .is_some_and(|c| row < c.len());
        if exists {
            self.column = column;
            self.row = row;
        }
        exists
    }

    /// Places the list cursor on a row, if it exists.
    pub fn focus_row(&mut self, tasks: &[Task], row: usize) -> bool {
        let exists = row < self.visible(tasks).len();
        if exists {
            self.list_row = row;
        }
        exists
    }

    /// Keeps both cursors inside the filtered view.
    pub fn clamp(&mut self, tasks: &[Task]) {
        let columns = self.columns(tasks);
        let column_len = columns.get(self.column).map_or(0, StatusColumn::len);
        self.row = self.row.min(column_len.saturating_sub(1));
        let list_len = self.visible(tasks).len();
        self.list_row = self.list_row.min(list_len.saturating_sub(1));
    }

    /// Types into the search box.
    pub fn input(&mut self, ch: char, tasks: &[Task]) {
        self.filter.search.push(ch);
        debug!(search = %self.filter.search, "task search changed");
        self.clamp(tasks);
    }

    /// Deletes the last search character.
    pub fn backspace(&mut self, tasks: &[Task]) {
        self.filter.search.pop();
        self.clamp(tasks);
    }

    /// Advances the priority or category selector.
    ///
    /// Returns `false` for selectors the tasks page does not have.
    pub fn cycle_filter(&mut self, field: FilterField, tasks: &[Task]) -> bool {
        match field {
            FilterField::Priority => self.filter.priority = self.filter.priority.cycle_variants(),
            FilterField::Category => self.filter.category = self.filter.category.cycle_variants(),
            _ => return false,
        }
        debug!(
            priority = self.filter.priority.label("All Priority"),
            category = self.filter.category.label("All Category"),
            "task filter changed"
        );
        self.clamp(tasks);
        true
    }

    /// Resets search and selectors.
    pub fn clear_filters(&mut self, tasks: &[Task]) {
        self.filter = TaskFilter::default();
        self.searching = false;
        self.clamp(tasks);
    }

    /// Toggles the checkbox of the highlighted list row.
    pub fn toggle_selection(&mut self, tasks: &[Task]) {
        if self.view != TaskView::List {
            return;
        }
        if let Some(task) = self.highlighted(tasks) {
            self.selection.toggle(&task.id);
            debug!(id = %task.id, selected = self.selection.len(), "task selection toggled");
        }
    }

    /// The header checkbox: selects exactly the filtered tasks, or clears
    /// the selection when it already covers them.
    pub fn select_all(&mut self, tasks: &[Task]) {
        let visible = self.visible(tasks);
        self.selection.toggle_all(visible.iter().map(|t| t.id.as_str()));
        debug!(selected = self.selection.len(), "task select all");
    }

    /// Returns `true` when the header checkbox should render checked.
    #[must_use]
    pub fn all_selected(&self, tasks: &[Task]) -> bool {
        let visible = self.visible(tasks);
        !visible.is_empty() && self.selection.covers_exactly(visible.iter().map(|t| t.id.as_str()))
    }

    /// Opens the status menu for the highlighted task.
    pub fn open_menu(&mut self, tasks: &[Task]) -> bool {
        let Some(task) = self.highlighted(tasks) else {
            return false;
        };
        self.menu = Some(StatusMenu::new(task.id.clone(), task.status));
        true
    }

    /// Closes the menu and returns the chosen `(task id, status)`.
    pub fn take_menu_choice(&mut self) -> Option<(String, TaskStatus)> {
        self.menu
            .take()
            .map(|menu| (menu.target().to_string(), menu.selected()))
    }

    /// Returns `true` if either selector is narrowed.
    #[must_use]
    pub fn has_selector(&self) -> bool {
        !matches!(
            (&self.filter.priority, &self.filter.category),
            (Choice::All, Choice::All)
        )
    }

    fn current_len(&self, tasks: &[Task]) -> usize {
        match self.view {
            TaskView::Board => self.columns(tasks).get(self.column).map_or(0, StatusColumn::len),
            TaskView::List => self.visible(tasks).len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.view {
            TaskView::Board => &mut self.row,
            TaskView::List => &mut self.list_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_protocol::{Catalog, TaskCategory};

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn search(state: &mut TasksState, text: &str, tasks: &[Task]) {
        for ch in text.chars() {
            state.input(ch, tasks);
        }
    }

    #[test]
    fn board_cursor_walks_columns_and_cards() {
        let catalog = Catalog::sample();
        let mut state = TasksState::new(TaskView::Board);

        assert_eq!(state.highlighted(&catalog.tasks).unwrap().id, "1");
        state.move_down(&catalog.tasks);
        assert_eq!(state.highlighted(&catalog.tasks).unwrap().id, "3");

        state.move_right(&catalog.tasks);
        // In Progress has two cards, so the row is kept.
        assert_eq!(state.highlighted(&catalog.tasks).unwrap().id, "4");

        state.move_right(&catalog.tasks);
        state.move_right(&catalog.tasks);
        // Completed has one card.
        assert_eq!(state.row(), 0);
        assert_eq!(state.highlighted(&catalog.tasks).unwrap().id, "6");

        state.move_right(&catalog.tasks);
        assert_eq!(state.column(), 0);
    }

    #[test]
    fn search_narrows_the_list_view() {
        let catalog = Catalog::sample();
        let mut state = TasksState::new(TaskView::List);
        state.focus_row(&catalog.tasks, 7);

        search(&mut state, "ORDER", &catalog.tasks);

        assert_eq!(ids(&state.visible(&catalog.tasks)), ["2", "7"]);
        assert_eq!(state.list_row(), 1);
        state.backspace(&catalog.tasks);
        assert_eq!(state.filter.search.as_str(), "ORDE");
    }

    #[test]
    fn category_selector_cycles() {
        let catalog = Catalog::sample();
        let mut state = TasksState::default();

        assert!(state.cycle_filter(FilterField::Category, &catalog.tasks));
        assert_eq!(state.filter.category, Choice::Only(TaskCategory::Order));
        assert_eq!(ids(&state.visible(&catalog.tasks)), ["2", "4"]);
        assert!(state.has_selector());

        assert!(!state.cycle_filter(FilterField::Division, &catalog.tasks));

        state.clear_filters(&catalog.tasks);
        assert!(!state.has_selector());
        assert_eq!(state.visible(&catalog.tasks).len(), 8);
    }

    #[test]
    fn select_all_follows_the_filter() {
        let catalog = Catalog::sample();
        let mut state = TasksState::new(TaskView::List);
        search(&mut state, "order", &catalog.tasks);

        state.select_all(&catalog.tasks);
        let selected: Vec<_> = state.selection.iter().collect();
        assert_eq!(selected, ["2", "7"]);
        assert!(state.all_selected(&catalog.tasks));

        state.select_all(&catalog.tasks);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn toggle_selection_only_in_list_view() {
        let catalog = Catalog::sample();
        let mut state = TasksState::new(TaskView::Board);
        state.toggle_selection(&catalog.tasks);
        assert!(state.selection.is_empty());

        state.toggle_view();
        state.toggle_selection(&catalog.tasks);
        assert!(state.selection.contains("1"));
        assert!(!state.all_selected(&catalog.tasks));
    }

    #[test]
    fn menu_targets_highlighted_task() {
        let catalog = Catalog::sample();
        let mut state = TasksState::default();
        state.move_right(&catalog.tasks);

        assert!(state.open_menu(&catalog.tasks));
        let menu = state.menu.as_mut().unwrap();
        assert_eq!(menu.current(), TaskStatus::InProgress);
        menu.move_down();

        assert_eq!(
            state.take_menu_choice(),
            Some(("2".to_string(), TaskStatus::Review))
        );
        assert!(state.menu.is_none());
    }

    #[test]
    fn menu_needs_a_task() {
        let catalog = Catalog::sample();
        let mut state = TasksState::default();
        search(&mut state, "no such task", &catalog.tasks);
        assert!(!state.open_menu(&catalog.tasks));
        assert!(state.highlighted(&catalog.tasks).is_none());
    }

    #[test]
    fn focus_card_validates_position() {
        let catalog = Catalog::sample();
        let mut state = TasksState::default();
        assert!(state.focus_card(&catalog.tasks, 2, 1));
        assert_eq!(state.highlighted(&catalog.tasks).unwrap().id, "8");
        assert!(!state.focus_card(&catalog.tasks, 3, 1));
        assert_eq!(state.column(), 2);
    }
}
