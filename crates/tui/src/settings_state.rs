//! Settings modal state management.
//!
//! This module provides state management for the settings modal, including
//! section navigation, the section search box, item selection, and edit
//! mode handling for the business fields.

use nexus_config::{Config, Currency};
use nexus_protocol::{AccountSettings, TextQuery};
use tracing::debug;

/// Sections in the settings modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    /// Business profile and invoice settings.
    #[default]
    Business,
    /// Current plan and usage.
    Plan,
    /// Team members and roles.
    Users,
    /// Courier services.
    DeliveryPartners,
    /// Third-party integrations and payment gateways.
    Integrations,
}

impl SettingsSection {
    /// Returns the next section (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Business => Self::Plan,
            Self::Plan => Self::Users,
            Self::Users => Self::DeliveryPartners,
            Self::DeliveryPartners => Self::Integrations,
            Self::Integrations => Self::Business,
        }
    }

    /// Returns the previous section (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Business => Self::Integrations,
            Self::Plan => Self::Business,
            Self::Users => Self::Plan,
            Self::DeliveryPartners => Self::Users,
            Self::Integrations => Self::DeliveryPartners,
        }
    }

    /// Returns the display name for this section.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Business => "Business Settings",
            Self::Plan => "Plan & Subscription",
            Self::Users => "Users & Roles",
            Self::DeliveryPartners => "Delivery Partners",
            Self::Integrations => "Integrations",
        }
    }

    /// Returns all sections in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Business,
            Self::Plan,
            Self::Users,
            Self::DeliveryPartners,
            Self::Integrations,
        ]
    }
}

/// Editable rows of the Business Settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessField {
    Name,
    Currency,
    Timezone,
    Phone,
    Email,
    Address,
    InvoicePrefix,
    InvoiceFooter,
}

impl BusinessField {
    /// All fields in display order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Currency,
        Self::Timezone,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::InvoicePrefix,
        Self::InvoiceFooter,
    ];

    /// Label shown next to the value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Business Name",
            Self::Currency => "Currency",
            Self::Timezone => "Timezone",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::InvoicePrefix => "Invoice Prefix",
            Self::InvoiceFooter => "Invoice Footer",
        }
    }

    /// The field's current value in `config`.
    #[must_use]
    pub fn value(self, config: &Config) -> String {
        let business = &config.business;
        match self {
            Self::Name => business.name.clone(),
            Self::Currency => business.currency.to_string(),
            Self::Timezone => business.timezone.clone(),
            Self::Phone => business.phone.clone(),
            Self::Email => business.email.clone(),
            Self::Address => business.address.clone(),
            Self::InvoicePrefix => business.invoice_prefix.clone(),
            Self::InvoiceFooter => business.invoice_footer.clone(),
        }
    }

    fn slot(self, config: &mut Config) -> Option<&mut String> {
        let business = &mut config.business;
        match self {
            Self::Name => Some(&mut business.name),
            Self::Currency => None,
            Self::Timezone => Some(&mut business.timezone),
            Self::Phone => Some(&mut business.phone),
            Self::Email => Some(&mut business.email),
            Self::Address => Some(&mut business.address),
            Self::InvoicePrefix => Some(&mut business.invoice_prefix),
            Self::InvoiceFooter => Some(&mut business.invoice_footer),
        }
    }
}

/// Edit mode for settings fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Not currently editing.
    #[default]
    None,
    /// Editing a business text field.
    Text {
        /// The field being edited.
        field: BusinessField,
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
}

impl EditMode {
    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the current edit value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text { value, .. } => Some(value),
        }
    }

    /// Returns the cursor position, if in edit mode.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Text { cursor, .. } => Some(*cursor),
        }
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        if let Self::Text { value, cursor, .. } = self {
            value.insert(*cursor, ch);
            *cursor += ch.len_utf8();
        }
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Self::Text { value, cursor, .. } = self
            && *cursor > 0
        {
            let prev_boundary = value[..*cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            value.remove(prev_boundary);
            *cursor = prev_boundary;
        }
    }
}

/// State for the settings modal.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// The configuration being edited.
    config: Config,
    /// Plan, team, couriers and integrations shown read-mostly.
    account: AccountSettings,
    /// Whether the config has unsaved changes.
    dirty: bool,
    /// The currently selected section.
    section: SettingsSection,
    /// The selected item index within the current section.
    selected_item: usize,
    /// The current edit mode.
    edit_mode: EditMode,
    /// Filters the section list by name.
    search: TextQuery,
    /// Whether keystrokes go to the search box.
    searching: bool,
}

impl SettingsState {
    /// Creates a new settings state.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_config::Config;
    /// use nexus_protocol::AccountSettings;
    /// use nexus_tui::settings_state::SettingsState;
    ///
    /// let state = SettingsState::new(Config::default(), AccountSettings::sample());
    /// assert!(!state.is_dirty());
    /// ```
    #[must_use]
    pub fn new(config: Config, account: AccountSettings) -> Self {
        Self {
            config,
            account,
            dirty: false,
            section: SettingsSection::default(),
            selected_item: 0,
            edit_mode: EditMode::None,
            search: TextQuery::default(),
            searching: false,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the account data.
    #[must_use]
    pub fn account(&self) -> &AccountSettings {
        &self.account
    }

    /// Returns whether the configuration has unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the configuration as saved (no longer dirty).
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns the currently selected section.
    #[must_use]
    pub fn section(&self) -> SettingsSection {
        self.section
    }

    /// Returns the selected item index within the current section.
    #[must_use]
    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    /// Returns a reference to the current edit mode.
    #[must_use]
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit_mode
    }

    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_mode.is_editing()
    }

    /// The section search text.
    #[must_use]
    pub fn search(&self) -> &str {
        self.search.as_str()
    }

    /// Returns `true` while typing into the search box.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Sections whose name matches the search box, in order.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<SettingsSection> {
        SettingsSection::all()
            .iter()
            .copied()
            .filter(|s| self.search.matches(s.name()))
            .collect()
    }

    /// Moves to the next matching section.
    pub fn next_section(&mut self) {
        self.step_section(true);
    }

    /// Moves to the previous matching section.
    pub fn prev_section(&mut self) {
        self.step_section(false);
    }

    fn step_section(&mut self, forward: bool) {
        let visible = self.visible_sections();
        if visible.is_empty() {
            return;
        }
        let mut section = self.section;
        loop {
            section = if forward { section.next() } else { section.prev() };
            if visible.contains(&section) {
                break;
            }
        }
        self.section = section;
        self.selected_item = 0;
    }

    /// Starts typing into the search box.
    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// Stops typing; the query stays applied.
    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    /// Navigates within the current section.
    ///
    /// # Arguments
    ///
    /// * `delta` - Direction to navigate (positive = down, negative = up)
    pub fn navigate(&mut self, delta: i32) {
        let item_count = self.item_count();
        if item_count == 0 {
            self.selected_item = 0;
            return;
        }

        let new_idx = if delta > 0 {
            (self.selected_item + delta.unsigned_abs() as usize) % item_count
        } else {
            let abs_delta = delta.unsigned_abs() as usize;
            if abs_delta > self.selected_item {
                item_count - ((abs_delta - self.selected_item) % item_count)
            } else {
                self.selected_item - abs_delta
            }
        };
        self.selected_item = new_idx.min(item_count.saturating_sub(1));
    }

    /// Returns the number of items in the current section.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self.section {
            SettingsSection::Business => BusinessField::ALL.len(),
            SettingsSection::Plan => self.account.plan.usage.len(),
            SettingsSection::Users => self.account.team.len(),
            SettingsSection::DeliveryPartners => self.account.couriers.len(),
            SettingsSection::Integrations => {
                self.account.integrations.len() + self.account.payment_gateways.len()
            }
        }
    }

    /// The business field under the cursor, if the business section is shown.
    #[must_use]
    pub fn selected_field(&self) -> Option<BusinessField> {
        match self.section {
            SettingsSection::Business => BusinessField::ALL.get(self.selected_item).copied(),
            _ => None,
        }
    }

    /// Starts editing the currently selected item.
    ///
    /// Text fields enter edit mode, the currency steps to the next option,
    /// and courier or integration rows toggle.
    pub fn start_edit(&mut self) {
        match self.section {
            SettingsSection::Business => match self.selected_field() {
                Some(BusinessField::Currency) => {
                    self.config.business.currency = self.config.business.currency.next();
                    debug!(currency = ?self.config.business.currency, "currency changed");
                    self.dirty = true;
                }
                Some(field) => {
                    let value = field.value(&self.config);
                    self.edit_mode = EditMode::Text {
                        field,
                        cursor: value.len(),
                        value,
                    };
                }
                None => {}
            },
            SettingsSection::DeliveryPartners | SettingsSection::Integrations => {
                self.toggle_selected();
            }
            SettingsSection::Plan | SettingsSection::Users => {}
        }
    }

    /// Confirms the current edit.
    ///
    /// A blank business name is rejected and leaves the old value.
    pub fn confirm_edit(&mut self) {
        let EditMode::Text { field, value, .. } = std::mem::take(&mut self.edit_mode) else {
            return;
        };
        if field == BusinessField::Name && value.trim().is_empty() {
            debug!("blank business name rejected");
            return;
        }
        if let Some(slot) = field.slot(&mut self.config)
            && *slot != value
        {
            *slot = value;
            self.dirty = true;
        }
    }

    /// Cancels the current edit.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::None;
    }

    /// Toggles the selected courier, integration or payment gateway.
    ///
    /// Toggles live in memory only.
    pub fn toggle_selected(&mut self) {
        let toggle = match self.section {
            SettingsSection::DeliveryPartners => self.account.couriers.get_mut(self.selected_item),
            SettingsSection::Integrations => {
                let integrations = self.account.integrations.len();
                if self.selected_item < integrations {
                    self.account.integrations.get_mut(self.selected_item)
                } else {
                    self.account
                        .payment_gateways
                        .get_mut(self.selected_item - integrations)
                }
            }
            _ => None,
        };
        if let Some(toggle) = toggle {
            toggle.enabled = !toggle.enabled;
            debug!(name = toggle.name, enabled = toggle.enabled, "setting toggled");
        }
    }

    /// Handles character input for the edit field or the search box.
    pub fn input_char(&mut self, ch: char) {
        if self.searching {
            self.search.push(ch);
            self.follow_search();
        } else {
            self.edit_mode.insert_char(ch);
        }
    }

    /// Handles backspace for the edit field or the search box.
    pub fn backspace(&mut self) {
        if self.searching {
            self.search.pop();
            self.follow_search();
        } else {
            self.edit_mode.backspace();
        }
    }

    fn follow_search(&mut self) {
        let visible = self.visible_sections();
        if let Some(first) = visible.first()
            && !visible.contains(&self.section)
        {
            self.section = *first;
            self.selected_item = 0;
        }
    }

    /// Takes the configuration and account data out of this state.
    #[must_use]
    pub fn into_parts(self) -> (Config, AccountSettings) {
        (self.config, self.account)
    }

    /// Returns the currency currently configured.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.config.business.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SettingsState {
        SettingsState::new(Config::default(), AccountSettings::sample())
    }

    fn type_text(state: &mut SettingsState, text: &str) {
        for ch in text.chars() {
            state.input_char(ch);
        }
    }

    #[test]
    fn settings_section_navigation() {
        let mut section = SettingsSection::Business;
        for expected in [
            SettingsSection::Plan,
            SettingsSection::Users,
            SettingsSection::DeliveryPartners,
            SettingsSection::Integrations,
            SettingsSection::Business,
        ] {
            section = section.next();
            assert_eq!(section, expected);
        }
        assert_eq!(section.prev(), SettingsSection::Integrations);
    }

    #[test]
    fn settings_state_new() {
        let state = state();
        assert!(!state.is_dirty());
        assert_eq!(state.section(), SettingsSection::Business);
        assert_eq!(state.selected_item(), 0);
        assert!(!state.is_editing());
        assert_eq!(state.visible_sections().len(), 5);
    }

    #[test]
    fn settings_state_item_count() {
        let mut state = state();
        assert_eq!(state.item_count(), 8);
        state.next_section();
        assert_eq!(state.item_count(), 4);
        state.next_section();
        assert_eq!(state.item_count(), 4);
        state.next_section();
        assert_eq!(state.item_count(), 5);
        state.next_section();
        assert_eq!(state.item_count(), 8);
    }

    #[test]
    fn settings_state_navigate_wraps() {
        let mut state = state();
        state.navigate(-1);
        assert_eq!(state.selected_item(), 7);
        state.navigate(1);
        assert_eq!(state.selected_item(), 0);
        state.navigate(3);
        assert_eq!(state.selected_field(), Some(BusinessField::Phone));
    }

    #[test]
    fn edit_mode_text_input() {
        let mut edit = EditMode::Text {
            field: BusinessField::Phone,
            value: String::new(),
            cursor: 0,
        };

        edit.insert_char('৳');
        edit.insert_char('1');
        assert_eq!(edit.value(), Some("৳1"));
        assert_eq!(edit.cursor(), Some(4));

        edit.backspace();
        edit.backspace();
        assert_eq!(edit.value(), Some(""));
        assert_eq!(edit.cursor(), Some(0));
    }

    #[test]
    fn edit_business_name() {
        let mut state = state();
        state.start_edit();
        assert_eq!(state.edit_mode().value(), Some("Acme Corporation Ltd."));

        while state.edit_mode().value().is_some_and(|v| !v.is_empty()) {
            state.backspace();
        }
        type_text(&mut state, "Nexus Traders");
        state.confirm_edit();

        assert!(!state.is_editing());
        assert!(state.is_dirty());
        assert_eq!(state.config().business.name, "Nexus Traders");
    }

    #[test]
    fn blank_business_name_is_rejected() {
        let mut state = state();
        state.start_edit();
        while state.edit_mode().value().is_some_and(|v| !v.is_empty()) {
            state.backspace();
        }
        type_text(&mut state, "   ");
        state.confirm_edit();

        assert!(!state.is_dirty());
        assert_eq!(state.config().business.name, "Acme Corporation Ltd.");
    }

    #[test]
    fn unchanged_value_is_not_dirty() {
        let mut state = state();
        state.navigate(2);
        state.start_edit();
        state.confirm_edit();
        assert!(!state.is_dirty());
    }

    #[test]
    fn currency_cycles_without_edit_mode() {
        let mut state = state();
        state.navigate(1);
        state.start_edit();
        assert!(!state.is_editing());
        assert_eq!(state.currency(), Currency::Usd);
        assert!(state.is_dirty());
    }

    #[test]
    fn settings_state_cancel_edit() {
        let mut state = state();
        state.start_edit();
        state.input_char('x');
        state.cancel_edit();

        assert!(!state.is_editing());
        assert!(!state.is_dirty());
        assert_eq!(state.config().business.name, "Acme Corporation Ltd.");
    }

    #[test]
    fn toggling_a_courier_does_not_dirty_the_config() {
        let mut state = state();
        state.next_section();
        state.next_section();
        state.next_section();
        state.navigate(2);
        state.start_edit();

        assert!(state.account().couriers[2].enabled);
        assert!(!state.is_dirty());
    }

    #[test]
    fn payment_gateways_follow_integrations() {
        let mut state = state();
        state.prev_section();
        state.navigate(5);
        state.toggle_selected();
        assert!(state.account().payment_gateways[1].enabled);
    }

    #[test]
    fn search_narrows_sections_and_moves_focus() {
        let mut state = state();
        state.start_search();
        type_text(&mut state, "part");

        assert_eq!(state.visible_sections(), [SettingsSection::DeliveryPartners]);
        assert_eq!(state.section(), SettingsSection::DeliveryPartners);

        state.next_section();
        assert_eq!(state.section(), SettingsSection::DeliveryPartners);

        state.stop_search();
        state.input_char('x');
        assert_eq!(state.search(), "part");
    }

    #[test]
    fn search_without_matches_keeps_section() {
        let mut state = state();
        state.start_search();
        type_text(&mut state, "zzz");
        assert!(state.visible_sections().is_empty());
        assert_eq!(state.section(), SettingsSection::Business);
        state.next_section();
        assert_eq!(state.section(), SettingsSection::Business);
    }
}
