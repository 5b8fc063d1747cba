//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the entity catalog, the current route, sidebar focus, and each page's
//! own view state.

use nexus_protocol::{
    AccountSettings, Catalog, DashboardData, NAV_ITEMS, OrderStatus, Route, TaskStatus, TaskView,
};
use tracing::{debug, info, warn};

use crate::customers_state::CustomersState;
use crate::form::FormField;
use crate::orders_state::OrdersState;
use crate::tasks_state::TasksState;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the sidebar navigation.
    Sidebar,
    /// Focus is on the current page.
    #[default]
    Content,
}

/// The application state.
///
/// Contains all mutable state for the TUI application: the data being
/// displayed, navigation, and per-page view state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Tasks, orders and customers.
    pub catalog: Catalog,
    /// Dashboard figures.
    pub dashboard: DashboardData,
    /// Plan, team and integrations shown in settings.
    pub account: AccountSettings,
    /// Current focus area.
    pub focus: Focus,
    /// Highlighted sidebar item while the sidebar has focus.
    pub nav_cursor: usize,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// One-line feedback shown in the status bar.
    pub status_message: Option<String>,
    /// Tasks page.
    pub tasks: TasksState,
    /// Orders page.
    pub orders: OrdersState,
    /// Customers page.
    pub customers: CustomersState,
    route: Route,
}

impl AppState {
    /// Creates a new application state showing `route`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::{Catalog, Route, TaskView};
    /// use nexus_tui::AppState;
    ///
    /// let state = AppState::new(Catalog::sample(), Route::Orders, TaskView::Board, 50);
    /// assert_eq!(state.route(), Route::Orders);
    /// assert_eq!(state.nav_cursor, 1);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, route: Route, task_view: TaskView, page_size: usize) -> Self {
        Self {
            catalog,
            dashboard: DashboardData::sample(),
            account: AccountSettings::sample(),
            focus: Focus::default(),
            nav_cursor: route.nav_index(),
            help_visible: false,
            status_message: None,
            tasks: TasksState::new(task_view),
            orders: OrdersState::new(page_size),
            customers: CustomersState::default(),
            route,
        }
    }

    /// The page being shown.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Path of the page being shown, used for sidebar highlighting.
    #[must_use]
    pub fn current_path(&self) -> &'static str {
        self.route.path()
    }

    /// Switches to another page.
    ///
    /// Leaving the customers page closes any open details view.
    pub fn navigate_to(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if self.route == Route::Customers {
            self.customers.back();
            self.customers.searching = false;
        }
        self.tasks.searching = false;
        debug!(from = self.route.path(), to = route.path(), "route changed");
        self.route = route;
        self.nav_cursor = route.nav_index();
        self.status_message = None;
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Moves focus between the sidebar and the page.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content => {
                self.nav_cursor = self.route.nav_index();
                Focus::Sidebar
            }
        };
    }

    /// Moves the sidebar highlight up, wrapping around.
    pub fn sidebar_up(&mut self) {
        self.nav_cursor = self.nav_cursor.checked_sub(1).unwrap_or(NAV_ITEMS.len() - 1);
    }

    /// Moves the sidebar highlight down, wrapping around.
    pub fn sidebar_down(&mut self) {
        self.nav_cursor = (self.nav_cursor + 1) % NAV_ITEMS.len();
    }

    /// Opens the highlighted sidebar item and hands focus to the page.
    pub fn sidebar_select(&mut self) {
        if let Some(route) = NAV_ITEMS.get(self.nav_cursor).copied() {
            self.navigate_to(route);
            self.focus = Focus::Content;
        }
    }

    /// Returns `true` while a text field on the current page has focus.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        match self.route {
            Route::Tasks => self.tasks.searching || self.tasks.form.is_some(),
            Route::Customers => {
                self.customers.searching
                    || self.customers.form.is_some()
                    || self.customers.note.is_some()
            }
            _ => false,
        }
    }

    /// Returns `true` while a popup form covers the current page.
    #[must_use]
    pub fn form_open(&self) -> bool {
        match self.route {
            Route::Tasks => self.tasks.form.is_some(),
            Route::Customers => self.customers.form.is_some(),
            _ => false,
        }
    }

    /// Moves a task to another column.
    ///
    /// An unknown id is logged and leaves everything unchanged.
    pub fn apply_task_status(&mut self, id: &str, status: TaskStatus) {
        match self.catalog.set_task_status(id, status) {
            Ok(previous) => {
                info!(id, from = %previous, to = %status, "task status changed");
                self.status_message = Some(format!("Task {id} moved to {status}"));
                self.tasks.clamp(&self.catalog.tasks);
            }
            Err(err) => warn!(error = %err, "task status change ignored"),
        }
    }

    /// Changes an order's status.
    ///
    /// An unknown id is logged and leaves everything unchanged.
    pub fn apply_order_status(&mut self, id: &str, status: OrderStatus) {
        match self.catalog.set_order_status(id, status) {
            Ok(previous) => {
                info!(id, from = %previous, to = %status, "order status changed");
                self.status_message = Some(format!("Order {id} marked {status}"));
                self.orders.clamp(&self.catalog.orders);
            }
            Err(err) => warn!(error = %err, "order status change ignored"),
        }
    }

    /// Submits the open "New Task" form.
    ///
    /// A rejected draft keeps the form open with the error shown inline.
    pub fn submit_task_form(&mut self) {
        let Some(mut form) = self.tasks.form.take() else {
            return;
        };
        let draft = match form.to_new_task() {
            Ok(draft) => draft,
            Err(err) => {
                debug!(error = %err, "new task rejected");
                form.set_error(FormField::DueDate, err.to_string());
                self.tasks.form = Some(form);
                return;
            }
        };
        match self.catalog.add_task(draft) {
            Ok(task) => {
                self.status_message = Some(format!("Created task {}", task.id));
                self.tasks.clamp(&self.catalog.tasks);
            }
            Err(err) => {
                debug!(error = %err, "new task rejected");
                form.reject(&err);
                self.tasks.form = Some(form);
            }
        }
    }

    /// Submits the open "Add Customer" form and highlights the new row.
    ///
    /// A rejected draft keeps the form open with the error shown inline.
    pub fn submit_customer_form(&mut self) {
        let Some(mut form) = self.customers.form.take() else {
            return;
        };
        match self.catalog.add_customer(form.to_new_customer()) {
            Ok(customer) => {
                let id = customer.id.clone();
                self.status_message = Some(format!("Created customer {id}"));
                self.customers.focus_id(&self.catalog.customers, &id);
            }
            Err(err) => {
                debug!(error = %err, "new customer rejected");
                form.reject(&err);
                self.customers.form = Some(form);
            }
        }
    }

    /// Saves the note being typed on the open customer.
    ///
    /// A blank note is discarded without touching the customer.
    pub fn save_customer_note(&mut self) {
        let Some(note) = self.customers.note.take() else {
            return;
        };
        let Some(id) = self.customers.selected_id().map(str::to_string) else {
            return;
        };
        match self.catalog.add_customer_note(&id, &note) {
            Ok(_) => self.status_message = Some(format!("Saved note on {id}")),
            Err(err) => warn!(error = %err, "customer note discarded"),
        }
    }
}
