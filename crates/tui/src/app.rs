//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::path::PathBuf;

use nexus_config::Config;
use nexus_protocol::{
    Catalog, Message, NAV_ITEMS, OrderStatus, Route, TaskStatus, TaskView, Variant,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget, Wrap},
};
use tracing::{debug, info, warn};

use crate::{
    AppState, Focus,
    customers_state::CustomerView,
    event::{InputMode, event_to_message, poll_event},
    form::TaskForm,
    layout::{MIN_HEIGHT, MIN_WIDTH, Regions, contains},
    menu::StatusMenu,
    settings_state::SettingsState,
    terminal::AppTerminal,
    widgets::{
        board::{BoardCursor, board_hit},
        customer_detail::detail_tab_at,
        customers::customer_row_at,
        orders::{OrdersRegions, order_row_at, order_tab_at},
        render_customer_detail, render_customer_form, render_customers_page, render_dashboard,
        render_header, render_help_overlay, render_orders_page, render_placeholder,
        render_settings_panel, render_sidebar, render_status_bar, render_status_menu,
        render_task_form, render_tasks_page,
        sidebar::sidebar_item_at,
        status_menu::{status_menu_contains, status_menu_item_at},
        task_list::list_row_at,
        tasks::TasksRegions,
    },
};

/// Width of the checkbox column in the task list and orders tables.
const CHECKBOX_WIDTH: u16 = 3;

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Settings panel state, if open.
    settings_state: Option<SettingsState>,
    /// The application configuration.
    config: Config,
    /// Where the settings modal saves to; the user config file if unset.
    config_path: Option<PathBuf>,
}

impl App {
    /// Creates the application over `catalog`, opened on the configured
    /// start page.
    ///
    /// An invalid `ui.start_route` is logged and the dashboard is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_config::Config;
    /// use nexus_protocol::{Catalog, Route};
    /// use nexus_tui::App;
    ///
    /// let app = App::new(Catalog::sample(), Config::default());
    /// assert_eq!(app.state().route(), Route::Dashboard);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let route = config.start_route().unwrap_or_else(|err| {
            warn!(error = %err, "invalid start route, showing the dashboard");
            Route::Dashboard
        });
        Self {
            state: AppState::new(catalog, route, config.ui.task_view, config.ui.page_size),
            should_quit: false,
            last_area: Rect::default(),
            settings_state: None,
            config,
            config_path: None,
        }
    }

    /// Opens on `route` instead of the configured start page.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.state.navigate_to(route);
        self
    }

    /// Saves settings to `path` instead of the user config file.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The open settings modal, if any.
    #[must_use]
    pub fn settings(&self) -> Option<&SettingsState> {
        self.settings_state.as_ref()
    }

    /// Returns whether the settings panel is open.
    #[must_use]
    pub fn is_settings_open(&self) -> bool {
        self.settings_state.is_some()
    }

    /// Returns `true` once a quit was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Which key table applies right now.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match &self.settings_state {
            Some(settings) if settings.is_editing() || settings.is_searching() => {
                InputMode::SettingsEdit
            }
            Some(_) => InputMode::Settings,
            None if !self.state.help_visible && self.state.is_typing() => InputMode::Text,
            None => InputMode::Normal,
        }
    }

    /// Updates the application state based on a message.
    ///
    /// The settings modal takes every message while open. Otherwise the
    /// help overlay swallows the next key, then popups (status menu, task
    /// form, search box) take precedence over the sidebar and the page.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.settings_state.is_some() {
            self.update_settings(msg);
            return;
        }

        if self.state.dismiss_help() {
            return;
        }

        if let Message::ClickAt { column, row } = msg {
            self.handle_click(column, row);
            return;
        }

        if self.update_popups(&msg) {
            return;
        }

        match msg {
            Message::ToggleHelp => {
                self.state.toggle_help();
                return;
            }
            Message::OpenSettings => {
                self.open_settings();
                return;
            }
            Message::FocusNext => {
                self.state.focus_next();
                return;
            }
            Message::GoTo { route } => {
                self.state.navigate_to(route);
                self.state.focus = Focus::Content;
                return;
            }
            _ => {}
        }

        if self.state.focus == Focus::Sidebar {
            match msg {
                Message::NavigateUp => self.state.sidebar_up(),
                Message::NavigateDown => self.state.sidebar_down(),
                Message::Select | Message::NavigateRight => self.state.sidebar_select(),
                Message::Back => self.state.focus = Focus::Content,
                _ => {}
            }
            return;
        }

        match self.state.route() {
            Route::Tasks => self.update_tasks(msg),
            Route::Orders => self.update_orders(msg),
            Route::Customers => self.update_customers(msg),
            _ => {}
        }
    }

    /// Routes `msg` to an open status menu, task form, or search box.
    ///
    /// Returns `true` if one of them consumed it.
    fn update_popups(&mut self, msg: &Message) -> bool {
        let state = &mut self.state;
        match state.route() {
            Route::Tasks if state.tasks.menu.is_some() => {
                if let Some((id, status)) = drive_menu(&mut state.tasks.menu, msg) {
                    state.apply_task_status(&id, status);
                }
                true
            }
            Route::Orders if state.orders.menu.is_some() => {
                if let Some((id, status)) = drive_menu(&mut state.orders.menu, msg) {
                    state.apply_order_status(&id, status);
                }
                true
            }
            Route::Tasks if state.tasks.form.is_some() => {
                if matches!(msg, Message::Select) {
                    state.submit_task_form();
                    return true;
                }
                let Some(form) = state.tasks.form.as_mut() else {
                    return true;
                };
                match msg {
                    Message::Input { ch } => form.input(*ch),
                    Message::Backspace => form.backspace(),
                    Message::NextField | Message::NavigateDown => form.next_field(),
                    Message::NavigateLeft => form.cycle(false),
                    Message::NavigateRight => form.cycle(true),
                    Message::Back => {
                        debug!("new task form cancelled");
                        state.tasks.form = None;
                    }
                    _ => {}
                }
                true
            }
            Route::Tasks if state.tasks.searching => {
                let tasks = &state.catalog.tasks;
                match msg {
                    Message::Input { ch } => state.tasks.input(*ch, tasks),
                    Message::Backspace => state.tasks.backspace(tasks),
                    Message::Select | Message::Back => state.tasks.searching = false,
                    _ => return false,
                }
                true
            }
            Route::Customers if state.customers.form.is_some() => {
                if matches!(msg, Message::Select) {
                    state.submit_customer_form();
                    return true;
                }
                let Some(form) = state.customers.form.as_mut() else {
                    return true;
                };
                match msg {
                    Message::Input { ch } => form.input(*ch),
                    Message::Backspace => form.backspace(),
                    Message::NextField | Message::NavigateDown => form.next_field(),
                    Message::NavigateLeft => form.cycle(false),
                    Message::NavigateRight => form.cycle(true),
                    Message::Back => {
                        debug!("add customer form cancelled");
                        state.customers.form = None;
                    }
                    _ => {}
                }
                true
            }
            Route::Customers if state.customers.note.is_some() => {
                match msg {
                    Message::Select => state.save_customer_note(),
                    Message::Input { ch } => {
                        state.customers.note.get_or_insert_with(String::new).push(*ch);
                    }
                    Message::Backspace => {
                        if let Some(note) = state.customers.note.as_mut() {
                            note.pop();
                        }
                    }
                    Message::Back => state.customers.note = None,
                    _ => {}
                }
                true
            }
            Route::Customers if state.customers.searching => {
                let customers = &state.catalog.customers;
                match msg {
                    Message::Input { ch } => state.customers.input(*ch, customers),
                    Message::Backspace => state.customers.backspace(customers),
                    Message::Select | Message::Back => state.customers.searching = false,
                    _ => return false,
                }
                true
            }
            _ => false,
        }
    }

    fn update_tasks(&mut self, msg: Message) {
        let tasks = &self.state.catalog.tasks;
        let page = &mut self.state.tasks;
        match msg {
            Message::NavigateLeft => page.move_left(tasks),
            Message::NavigateRight => page.move_right(tasks),
            Message::NavigateUp => page.move_up(tasks),
            Message::NavigateDown => page.move_down(tasks),
            Message::Select => {
                page.open_menu(tasks);
            }
            Message::ToggleSelection => page.toggle_selection(tasks),
            Message::SelectAll if page.view == TaskView::List => page.select_all(tasks),
            Message::StartSearch => page.searching = true,
            Message::CycleFilter { field } => {
                page.cycle_filter(field, tasks);
            }
            Message::ClearFilters => page.clear_filters(tasks),
            Message::ToggleView => page.toggle_view(),
            Message::Create => page.form = Some(TaskForm::new()),
            _ => {}
        }
    }

    fn update_orders(&mut self, msg: Message) {
        let orders = &self.state.catalog.orders;
        let page = &mut self.state.orders;
        match msg {
            Message::NavigateUp => page.move_up(orders),
            Message::NavigateDown => page.move_down(orders),
            Message::NavigateLeft | Message::PrevTab => page.prev_tab(orders),
            Message::NavigateRight | Message::NextTab => page.next_tab(orders),
            Message::Select => {
                page.open_menu(orders);
            }
            Message::ToggleSelection => page.toggle_selection(orders),
            Message::SelectAll => page.select_all(orders),
            _ => {}
        }
    }

    fn update_customers(&mut self, msg: Message) {
        let catalog = &self.state.catalog;
        let page = &mut self.state.customers;
        if page.selected_id().is_some() {
            match msg {
                Message::NavigateLeft | Message::PrevTab => page.prev_tab(),
                Message::NavigateRight | Message::NextTab => page.next_tab(),
                Message::Create => {
                    page.start_note();
                }
                Message::Back => {
                    page.back();
                }
                _ => {}
            }
            return;
        }
        match msg {
            Message::NavigateUp => page.move_up(&catalog.customers),
            Message::NavigateDown => page.move_down(&catalog.customers),
            Message::Select => {
                page.open_highlighted(&catalog.customers);
            }
            Message::StartSearch => page.searching = true,
            Message::CycleFilter { field } => {
                page.cycle_filter(field, catalog);
            }
            Message::ClearFilters => page.clear_filters(&catalog.customers),
            Message::Create => {
                page.open_form();
            }
            _ => {}
        }
    }

    fn open_settings(&mut self) {
        debug!("settings opened");
        self.settings_state = Some(SettingsState::new(
            self.config.clone(),
            self.state.account.clone(),
        ));
    }

    /// Handles a message while the settings modal is open.
    fn update_settings(&mut self, msg: Message) {
        let Some(settings) = self.settings_state.as_mut() else {
            return;
        };
        match msg {
            Message::CloseSettings => {
                if let Some(settings) = self.settings_state.take() {
                    let (config, account) = settings.into_parts();
                    self.config = config;
                    self.state.account = account;
                    debug!("settings closed");
                }
            }
            Message::SettingsNextSection => settings.next_section(),
            Message::SettingsPrevSection => settings.prev_section(),
            Message::SettingsNavigate { delta } => settings.navigate(delta),
            Message::SettingsEdit => settings.start_edit(),
            Message::SettingsConfirm if settings.is_searching() => settings.stop_search(),
            Message::SettingsConfirm => settings.confirm_edit(),
            Message::SettingsCancel if settings.is_searching() => settings.stop_search(),
            Message::SettingsCancel => settings.cancel_edit(),
            Message::StartSearch => settings.start_search(),
            Message::Input { ch } => settings.input_char(ch),
            Message::Backspace => settings.backspace(),
            Message::SettingsSave => self.save_settings(),
            _ => {}
        }
    }

    /// Writes the modal's configuration to the config file.
    fn save_settings(&mut self) {
        let Some(settings) = self.settings_state.as_mut() else {
            return;
        };
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => match nexus_config::persistence::default_user_config_path() {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, "no config path to save to");
                    self.state.status_message = Some(format!("Settings not saved: {err}"));
                    return;
                }
            },
        };
        match settings.config().save_to(&path) {
            Ok(()) => {
                settings.mark_saved();
                self.config = settings.config().clone();
                info!(path = %path.display(), "settings saved");
                self.state.status_message = Some(format!("Settings saved to {}", path.display()));
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "failed to save settings");
                self.state.status_message = Some(format!("Settings not saved: {err}"));
            }
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Hit-testing goes through the same geometry the last frame was drawn
    /// with.
    fn handle_click(&mut self, column: u16, row: u16) {
        if Regions::too_small(self.last_area) {
            return;
        }
        let regions = Regions::compute(self.last_area);
        let content = regions.content;

        if self.click_open_menu(content, column, row) {
            return;
        }
        if self.state.form_open() {
            return;
        }

        if contains(regions.sidebar, column, row) {
            if let Some(route) =
                sidebar_item_at(regions.sidebar, row).and_then(|i| NAV_ITEMS.get(i).copied())
            {
                self.state.navigate_to(route);
                self.state.focus = Focus::Content;
            }
            return;
        }
        if !contains(content, column, row) {
            return;
        }
        self.state.focus = Focus::Content;

        match self.state.route() {
            Route::Tasks => self.click_tasks(content, column, row),
            Route::Orders => self.click_orders(content, column, row),
            Route::Customers => self.click_customers(content, column, row),
            _ => {}
        }
    }

    /// Clicks while a status menu is open pick an option or close the menu.
    fn click_open_menu(&mut self, content: Rect, column: u16, row: u16) -> bool {
        let state = &mut self.state;
        match state.route() {
            Route::Tasks if state.tasks.menu.is_some() => {
                if let Some((id, status)) = click_menu(&mut state.tasks.menu, content, column, row)
                {
                    state.apply_task_status(&id, status);
                }
                true
            }
            Route::Orders if state.orders.menu.is_some() => {
                if let Some((id, status)) = click_menu(&mut state.orders.menu, content, column, row)
                {
                    state.apply_order_status(&id, status);
                }
                true
            }
            _ => false,
        }
    }

    /// A card or list row click highlights it and opens its status menu.
    fn click_tasks(&mut self, content: Rect, column: u16, row: u16) {
        let body = TasksRegions::compute(content).body;
        let tasks = &self.state.catalog.tasks;
        let page = &mut self.state.tasks;
        match page.view {
            TaskView::Board => {
                let columns = page.columns(tasks);
                let cursor = BoardCursor {
                    column: page.column(),
                    row: page.highlighted(tasks).map(|_| page.row()),
                };
                let Some((index, card)) = board_hit(&columns, cursor, body, column, row) else {
                    return;
                };
                if let Some(card) = card
                    && page.focus_card(tasks, index, card)
                {
                    page.open_menu(tasks);
                }
            }
            TaskView::List => {
                if is_header_checkbox(body, column, row) {
                    page.select_all(tasks);
                    return;
                }
                let len = page.visible(tasks).len();
                let Some(index) = list_row_at(len, page.list_row(), body, row) else {
                    return;
                };
                if page.focus_row(tasks, index) {
                    if is_checkbox_column(body, column) {
                        page.toggle_selection(tasks);
                    } else {
                        page.open_menu(tasks);
                    }
                }
            }
        }
    }

    fn click_orders(&mut self, content: Rect, column: u16, row: u16) {
        let regions = OrdersRegions::compute(content);
        let orders = &self.state.catalog.orders;
        let page = &mut self.state.orders;

        if row == regions.tabs.y {
            let counts = self.state.catalog.order_tab_counts();
            if let Some(tab) = order_tab_at(&counts, page.tab(), regions.tabs, column) {
                page.set_tab(tab, orders);
            }
            return;
        }
        if is_header_checkbox(regions.table, column, row) {
            page.select_all(orders);
            return;
        }
        let Some(index) = order_row_at(orders, page, content, row) else {
            return;
        };
        if page.focus_row(orders, index) {
            if is_checkbox_column(regions.table, column) {
                page.toggle_selection(orders);
            } else {
                page.open_menu(orders);
            }
        }
    }

    fn click_customers(&mut self, content: Rect, column: u16, row: u16) {
        let customers = &self.state.catalog.customers;
        let page = &mut self.state.customers;
        if page.selected_id().is_some() {
            if let Some(tab) = detail_tab_at(content, column, row) {
                page.set_tab(tab);
            }
            return;
        }
        if let Some(index) = customer_row_at(customers, page, content, row)
            && page.focus_row(customers, index)
        {
            page.open_highlighted(customers);
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum size only a "terminal too small" message is drawn;
    /// on short terminals the header is hidden.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if Regions::too_small(area) {
            render_terminal_too_small(area, frame.buffer_mut());
            return;
        }

        let regions = Regions::compute(area);
        let buf = frame.buffer_mut();
        if regions.header.height > 0 {
            render_header(
                &self.config.business.name,
                self.state.route(),
                regions.header,
                buf,
            );
        }
        let cursor = (self.state.focus == Focus::Sidebar).then_some(self.state.nav_cursor);
        render_sidebar(self.state.current_path(), cursor, regions.sidebar, buf);
        self.render_page(regions.content, buf);
        render_status_bar(&self.state, regions.status_bar, buf);
        self.render_popups(regions.content, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
        if let Some(settings) = &self.settings_state {
            render_settings_panel(settings, area, buf);
        }
    }

    fn render_page(&self, area: Rect, buf: &mut Buffer) {
        let catalog = &self.state.catalog;
        match self.state.route() {
            Route::Dashboard => render_dashboard(&self.state.dashboard, area, buf),
            Route::Tasks => render_tasks_page(&self.state, area, buf),
            Route::Orders => render_orders_page(
                &catalog.orders,
                &catalog.order_tab_counts(),
                &self.state.orders,
                area,
                buf,
            ),
            Route::Customers => match self.state.customers.view() {
                CustomerView::List => {
                    render_customers_page(&catalog.customers, &self.state.customers, area, buf);
                }
                CustomerView::Details(id) => render_customer_detail(
                    catalog.customer(id),
                    catalog.history(id),
                    self.state.customers.tab(),
                    self.state.customers.note.as_deref(),
                    area,
                    buf,
                ),
            },
            route => render_placeholder(route, area, buf),
        }
    }

    fn render_popups(&self, area: Rect, buf: &mut Buffer) {
        match self.state.route() {
            Route::Tasks => {
                if let Some(menu) = &self.state.tasks.menu {
                    let title = format!("Task {}", menu.target());
                    render_status_menu(menu, &title, TaskStatus::action_label, area, buf);
                }
                if let Some(form) = &self.state.tasks.form {
                    render_task_form(form, area, buf);
                }
            }
            Route::Orders => {
                if let Some(menu) = &self.state.orders.menu {
                    let title = self
                        .state
                        .catalog
                        .order(menu.target())
                        .map_or_else(|| format!("Order {}", menu.target()), |o| o.invoice_no.clone());
                    render_status_menu(menu, &title, OrderStatus::display_name, area, buf);
                }
            }
            Route::Customers => {
                if let Some(form) = &self.state.customers.form {
                    render_customer_form(form, area, buf);
                }
            }
            _ => {}
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nexus_config::Config;
    /// use nexus_protocol::Catalog;
    /// use nexus_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Catalog::sample(), Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(route = %self.state.route(), "console started");
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.input_mode())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }
        info!("console stopped");
        Ok(())
    }
}

/// Applies a key to an open status menu; `Select` closes it and returns
/// the chosen `(id, status)`.
fn drive_menu<S: Variant>(menu: &mut Option<StatusMenu<S>>, msg: &Message) -> Option<(String, S)> {
    match msg {
        Message::NavigateUp => {
            if let Some(open) = menu {
                open.move_up();
            }
            None
        }
        Message::NavigateDown => {
            if let Some(open) = menu {
                open.move_down();
            }
            None
        }
        Message::Select => menu
            .take()
            .map(|menu| (menu.target().to_string(), menu.selected())),
        Message::Back => {
            *menu = None;
            None
        }
        _ => None,
    }
}

/// A click on an option picks it; a click outside the popup closes the menu.
fn click_menu<S: Variant>(
    menu: &mut Option<StatusMenu<S>>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<(String, S)> {
    if let Some(index) = status_menu_item_at::<S>(area, column, row)
        && menu.as_mut().is_some_and(|m| m.highlight(index))
    {
        return menu
            .take()
            .map(|menu| (menu.target().to_string(), menu.selected()));
    }
    if !status_menu_contains::<S>(area, column, row) {
        *menu = None;
    }
    None
}

/// Returns `true` for a click on the "select all" checkbox of a table
/// drawn in `table`.
fn is_header_checkbox(table: Rect, column: u16, row: u16) -> bool {
    row == table.y + 1 && is_checkbox_column(table, column)
}

fn is_checkbox_column(table: Rect, column: u16) -> bool {
    column > table.x && column <= table.x + CHECKBOX_WIDTH
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(centered_area, buf);
}
