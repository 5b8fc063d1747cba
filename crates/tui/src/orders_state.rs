//! Orders page state: status tab, cursor, paging, and multi-select.

use nexus_protocol::{
    Choice, Order, OrderFilter, OrderStatus, Selection, Variant, filter::project,
};
use tracing::debug;

use crate::menu::StatusMenu;

/// Number of status tabs, "All Orders" included.
pub const TAB_COUNT: usize = OrderStatus::ALL.len() + 1;

/// State of the orders page.
#[derive(Debug, Clone)]
pub struct OrdersState {
    /// Checked rows.
    pub selection: Selection,
    /// Open "change status" menu.
    pub menu: Option<StatusMenu<OrderStatus>>,
    tab: usize,
    cursor: usize,
    page_size: usize,
}

impl OrdersState {
    /// Creates the page state showing `page_size` rows per page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            selection: Selection::default(),
            menu: None,
            tab: 0,
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    /// Index of the active tab; `0` is "All Orders".
    #[must_use]
    pub fn tab(&self) -> usize {
        self.tab
    }

    /// Highlighted row, as an index into the filtered orders.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The status the active tab filters on.
    #[must_use]
    pub fn status(&self) -> Choice<OrderStatus> {
        match self.tab.checked_sub(1).and_then(OrderStatus::from_position) {
            Some(status) => Choice::Only(status),
            None => Choice::All,
        }
    }

    /// Orders in the active tab.
    #[must_use]
    pub fn visible<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        project(orders, &OrderFilter { status: self.status() })
    }

    /// Zero-based page containing the cursor.
    #[must_use]
    pub fn page(&self) -> usize {
        self.cursor / self.page_size
    }

    /// The rows of the current page with their indexes in the filtered view.
    #[must_use]
    pub fn page_rows<'a>(&self, orders: &'a [Order]) -> Vec<(usize, &'a Order)> {
        let start = self.page() * self.page_size;
        self.visible(orders)
            .into_iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// The order under the cursor.
    #[must_use]
    pub fn highlighted<'a>(&self, orders: &'a [Order]) -> Option<&'a Order> {
        self.visible(orders).get(self.cursor).copied()
    }

    /// Switches to the next tab, wrapping around.
    pub fn next_tab(&mut self, orders: &[Order]) {
        self.set_tab((self.tab + 1) % TAB_COUNT, orders);
    }

    /// Switches to the previous tab, wrapping around.
    pub fn prev_tab(&mut self, orders: &[Order]) {
        self.set_tab(self.tab.checked_sub(1).unwrap_or(TAB_COUNT - 1), orders);
    }

    /// Activates a tab by index; out-of-range indexes are ignored.
    pub fn set_tab(&mut self, tab: usize, orders: &[Order]) {
        if tab >= TAB_COUNT {
            return;
        }
        self.tab = tab;
        self.cursor = 0;
        debug!(tab = self.status().label("All Orders"), "order tab changed");
        self.clamp(orders);
    }

    /// Moves the cursor up, wrapping to the last row.
    pub fn move_up(&mut self, orders: &[Order]) {
        let len = self.visible(orders).len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Moves the cursor down, wrapping to the first row.
    pub fn move_down(&mut self, orders: &[Order]) {
        let len = self.visible(orders).len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Places the cursor on a row of the filtered view, if it exists.
    pub fn focus_row(&mut self, orders: &[Order], row: usize) -> bool {
        let exists = row < self.visible(orders).len();
        if exists {
            self.cursor = row;
        }
        exists
    }

    /// Keeps the cursor inside the filtered view.
    pub fn clamp(&mut self, orders: &[Order]) {
        let len = self.visible(orders).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Toggles the highlighted row's checkbox.
    pub fn toggle_selection(&mut self, orders: &[Order]) {
        if let Some(order) = self.highlighted(orders) {
            self.selection.toggle(&order.id);
            debug!(id = %order.id, selected = self.selection.len(), "order selection toggled");
        }
    }

    /// Selects exactly the orders in the active tab, or clears the
    /// selection when it already covers them.
    pub fn select_all(&mut self, orders: &[Order]) {
        let visible = self.visible(orders);
        self.selection.toggle_all(visible.iter().map(|o| o.id.as_str()));
        debug!(selected = self.selection.len(), "order select all");
    }

    /// Returns `true` when the header checkbox should render checked.
    #[must_use]
    pub fn all_selected(&self, orders: &[Order]) -> bool {
        let visible = self.visible(orders);
        !visible.is_empty() && self.selection.covers_exactly(visible.iter().map(|o| o.id.as_str()))
    }

    /// Opens the status menu for the highlighted order.
    pub fn open_menu(&mut self, orders: &[Order]) -> bool {
        let Some(order) = self.highlighted(orders) else {
            return false;
        };
        self.menu = Some(StatusMenu::new(order.id.clone(), order.status));
        true
    }

    /// Closes the menu and returns the chosen `(order id, status)`.
    pub fn take_menu_choice(&mut self) -> Option<(String, OrderStatus)> {
        self.menu
            .take()
            .map(|menu| (menu.target().to_string(), menu.selected()))
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use nexus_protocol::Catalog;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Up,
        Down,
        NextTab,
        PrevTab,
        Tab(usize),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Up),
            Just(Step::Down),
            Just(Step::NextTab),
            Just(Step::PrevTab),
            (0..TAB_COUNT + 2).prop_map(Step::Tab),
        ]
    }

    proptest! {
        /// The cursor never leaves the active tab and its page always holds
        /// the highlighted row.
        #[test]
        fn cursor_stays_on_current_page(
            page_size in 1usize..6,
            steps in prop::collection::vec(step(), 0..40),
        ) {
            let orders = Catalog::sample().orders;
            let mut state = OrdersState::new(page_size);

            for step in steps {
                match step {
                    Step::Up => state.move_up(&orders),
                    Step::Down => state.move_down(&orders),
                    Step::NextTab => state.next_tab(&orders),
                    Step::PrevTab => state.prev_tab(&orders),
                    Step::Tab(tab) => state.set_tab(tab, &orders),
                }

                prop_assert!(state.tab() < TAB_COUNT);
                let visible = state.visible(&orders);
                if visible.is_empty() {
                    prop_assert_eq!(state.cursor(), 0);
                    prop_assert!(state.page_rows(&orders).is_empty());
                } else {
                    prop_assert!(state.cursor() < visible.len());
                    let rows = state.page_rows(&orders);
                    prop_assert!(rows.len() <= page_size);
                    prop_assert!(rows.iter().any(|(i, _)| *i == state.cursor()));
                }
            }
        }
    }
}
