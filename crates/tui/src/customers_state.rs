//! Customers page state: list filters and the details view.

use nexus_protocol::{Catalog, Customer, CustomerFilter, CustomerId, FilterField, filter::project};
use tracing::debug;

use crate::form::CustomerForm;

/// Which screen of the customers page is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerView {
    /// The filterable table.
    #[default]
    List,
    /// One customer's profile.
    Details(CustomerId),
}

/// Tabs of the customer details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Orders,
    Payments,
    Returns,
    Addresses,
    Activity,
}

impl DetailTab {
    /// All tabs in display order.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Orders,
        Self::Payments,
        Self::Returns,
        Self::Addresses,
        Self::Activity,
    ];

    /// Tab title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Orders => "Orders",
            Self::Payments => "Payments",
            Self::Returns => "Returns",
            Self::Addresses => "Addresses",
            Self::Activity => "Activity",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[self.index().checked_sub(1).unwrap_or(Self::ALL.len() - 1)]
    }
}

/// State of the customers page.
#[derive(Debug, Clone, Default)]
pub struct CustomersState {
    /// Active search and selectors.
    pub filter: CustomerFilter,
    /// Whether keystrokes go to the search box.
    pub searching: bool,
    /// The open "Add Customer" form.
    pub form: Option<CustomerForm>,
    /// Internal note being typed on the details screen.
    pub note: Option<String>,
    view: CustomerView,
    tab: DetailTab,
    cursor: usize,
}

impl CustomersState {
    /// The screen currently shown.
    #[must_use]
    pub fn view(&self) -> &CustomerView {
        &self.view
    }

    /// The selected customer's id while the details screen is open.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match &self.view {
            CustomerView::List => None,
            CustomerView::Details(id) => Some(id),
        }
    }

    /// Active details tab.
    #[must_use]
    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Highlighted row, as an index into the filtered customers.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Customers passing the current filter, in catalog order.
    #[must_use]
    pub fn visible<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        project(customers, &self.filter)
    }

    /// The customer under the cursor.
    #[must_use]
    pub fn highlighted<'a>(&self, customers: &'a [Customer]) -> Option<&'a Customer> {
        self.visible(customers).get(self.cursor).copied()
    }

    /// Opens the details screen for `id` on the Overview tab.
    pub fn open(&mut self, id: impl Into<CustomerId>) {
        let id = id.into();
        debug!(id = %id, "customer details opened");
        self.view = CustomerView::Details(id);
        self.tab = DetailTab::Overview;
        self.searching = false;
        self.note = None;
    }

    /// Opens the details screen for the highlighted customer.
    pub fn open_highlighted(&mut self, customers: &[Customer]) -> bool {
        let Some(id) = self.highlighted(customers).map(|c| c.id.clone()) else {
            return false;
        };
        self.open(id);
        true
    }

    /// Returns to the list, clearing the selected customer and resetting
    /// the details tab.
    ///
    /// Returns `false` if the list was already shown.
    pub fn back(&mut self) -> bool {
        if self.view == CustomerView::List {
            return false;
        }
        self.view = CustomerView::List;
        self.tab = DetailTab::Overview;
        self.note = None;
        true
    }

    /// Opens the "Add Customer" form over the list.
    ///
    /// Returns `false` on the details screen, which has no form.
    pub fn open_form(&mut self) -> bool {
        if self.view != CustomerView::List {
            return false;
        }
        self.searching = false;
        self.form = Some(CustomerForm::new());
        true
    }

    /// Starts typing an internal note for the open customer.
    ///
    /// The note box lives on the Overview tab, so the tab switches there.
    pub fn start_note(&mut self) -> bool {
        if self.selected_id().is_none() {
            return false;
        }
        self.tab = DetailTab::Overview;
        self.note.get_or_insert_with(String::new);
        true
    }

    /// Switches the details screen to `tab`.
    pub fn set_tab(&mut self, tab: DetailTab) {
        if self.selected_id().is_some() {
            self.tab = tab;
        }
    }

    /// Next details tab.
    pub fn next_tab(&mut self) {
        if self.selected_id().is_some() {
            self.tab = self.tab.next();
        }
    }

    /// Previous details tab.
    pub fn prev_tab(&mut self) {
        if self.selected_id().is_some() {
            self.tab = self.tab.prev();
        }
    }

    /// Moves the cursor up, wrapping to the last row.
    pub fn move_up(&mut self, customers: &[Customer]) {
        let len = self.visible(customers).len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Moves the cursor down, wrapping to the first row.
    pub fn move_down(&mut self, customers: &[Customer]) {
        let len = self.visible(customers).len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Places the cursor on a row of the filtered view, if it exists.
    pub fn focus_row(&mut self, customers: &[Customer], row: usize) -> bool {
        let exists = row < self.visible(customers).len();
        if exists {
            self.cursor = row;
        }
        exists
    }

    /// Places the cursor on the customer with `id`, if the filter shows it.
    pub fn focus_id(&mut self, customers: &[Customer], id: &str) -> bool {
        let row = self.visible(customers).iter().position(|c| c.id == id);
        if let Some(row) = row {
            self.cursor = row;
        }
        row.is_some()
    }

    /// Types into the search box.
    pub fn input(&mut self, ch: char, customers: &[Customer]) {
        self.filter.search.push(ch);
        debug!(search = %self.filter.search, "customer search changed");
        self.clamp(customers);
    }

    /// Deletes the last search character.
    pub fn backspace(&mut self, customers: &[Customer]) {
        self.filter.search.pop();
        self.clamp(customers);
    }

    /// Advances one of the list selectors.
    ///
    /// Division and district options are the distinct values present in the
    /// catalog. Returns `false` for selectors this page does not have.
    pub fn cycle_filter(&mut self, field: FilterField, catalog: &Catalog) -> bool {
        match field {
            FilterField::Division => {
                self.filter.division = self.filter.division.cycle(&catalog.divisions());
            }
            FilterField::District => {
                self.filter.district = self.filter.district.cycle(&catalog.districts());
            }
            FilterField::OrderType => {
                self.filter.order_type = self.filter.order_type.cycle_variants();
            }
            FilterField::Status => self.filter.status = self.filter.status.cycle_variants(),
            FilterField::Priority | FilterField::Category => return false,
        }
        debug!(filter = ?self.filter, "customer filter changed");
        self.clamp(&catalog.customers);
        true
    }

    /// Resets search and selectors.
    pub fn clear_filters(&mut self, customers: &[Customer]) {
        self.filter = CustomerFilter::default();
        self.searching = false;
        self.clamp(customers);
    }

    fn clamp(&mut self, customers: &[Customer]) {
        let len = self.visible(customers).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_protocol::{Choice, OrderType};

    fn ids(customers: &[&Customer]) -> Vec<String> {
        customers.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn selecting_a_row_opens_details_and_back_clears_it() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        state.move_down(&catalog.customers);

        assert!(state.open_highlighted(&catalog.customers));
        assert_eq!(state.view(), &CustomerView::Details("CUS-002".into()));
        assert_eq!(state.selected_id(), Some("CUS-002"));

        state.next_tab();
        state.next_tab();
        assert_eq!(state.tab(), DetailTab::Payments);

        assert!(state.back());
        assert_eq!(state.view(), &CustomerView::List);
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.tab(), DetailTab::Overview);
        assert!(!state.back());
    }

    #[test]
    fn tabs_only_move_in_details() {
        let mut state = CustomersState::default();
        state.next_tab();
        assert_eq!(state.tab(), DetailTab::Overview);

        state.open("CUS-001");
        state.prev_tab();
        assert_eq!(state.tab(), DetailTab::Activity);
    }

    #[test]
    fn search_matches_name_or_phone() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        for ch in "01689".chars() {
            state.input(ch, &catalog.customers);
        }
        assert_eq!(ids(&state.visible(&catalog.customers)), ["CUS-008"]);

        state.clear_filters(&catalog.customers);
        for ch in "khan".chars() {
            state.input(ch, &catalog.customers);
        }
        assert_eq!(ids(&state.visible(&catalog.customers)), ["CUS-007"]);
    }

    #[test]
    fn division_cycles_through_present_values() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();

        assert!(state.cycle_filter(FilterField::Division, &catalog));
        assert_eq!(state.filter.division, Choice::Only("Dhaka".to_string()));
        assert!(state.cycle_filter(FilterField::Division, &catalog));
        assert_eq!(ids(&state.visible(&catalog.customers)), ["CUS-002", "CUS-008"]);

        assert!(!state.cycle_filter(FilterField::Priority, &catalog));
    }

    #[test]
    fn order_type_new_means_no_repeat_orders() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        state.cycle_filter(FilterField::OrderType, &catalog);

        assert_eq!(state.filter.order_type, Choice::Only(OrderType::New));
        assert_eq!(ids(&state.visible(&catalog.customers)), ["CUS-005", "CUS-008"]);
    }

    #[test]
    fn form_opens_only_over_the_list() {
        let mut state = CustomersState {
            searching: true,
            ..CustomersState::default()
        };
        assert!(state.open_form());
        assert!(state.form.is_some());
        assert!(!state.searching);

        state.form = None;
        state.open("CUS-001");
        assert!(!state.open_form());
        assert!(state.form.is_none());
    }

    #[test]
    fn note_box_switches_to_overview_and_closes_on_back() {
        let mut state = CustomersState::default();
        assert!(!state.start_note());

        state.open("CUS-003");
        state.set_tab(DetailTab::Returns);
        assert!(state.start_note());
        assert_eq!(state.tab(), DetailTab::Overview);
        assert_eq!(state.note.as_deref(), Some(""));

        state.back();
        assert!(state.note.is_none());
    }

    #[test]
    fn focus_id_finds_the_filtered_row() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        assert!(state.focus_id(&catalog.customers, "CUS-004"));
        assert_eq!(state.cursor(), 3);
        assert!(!state.focus_id(&catalog.customers, "CUS-404"));
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn cursor_is_clamped_after_filtering() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        state.focus_row(&catalog.customers, 7);
        state.cycle_filter(FilterField::Status, &catalog);
        assert_eq!(state.cursor(), state.visible(&catalog.customers).len() - 1);
    }
}
