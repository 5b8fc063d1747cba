//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state. Most messages are
//! contextual: `Select` opens a status menu on the task board but opens the
//! details screen in the customer list.

use serde::{Deserialize, Serialize};

use crate::filter::FilterField;
use crate::route::Route;

/// Messages that represent user actions in the TUI.
///
/// # Examples
///
/// ```
/// use nexus_protocol::{Message, Route};
///
/// let msg = Message::GoTo { route: Route::Tasks };
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the cursor up.
    NavigateUp,
    /// Move the cursor down.
    NavigateDown,
    /// Move the cursor left (previous column, previous option).
    NavigateLeft,
    /// Move the cursor right (next column, next option).
    NavigateRight,
    /// Activate the highlighted item.
    Select,
    /// Close the innermost popup, leave a details view, or stop typing.
    Back,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Move keyboard focus between the sidebar and the page.
    FocusNext,
    /// Jump to a page.
    GoTo {
        /// Destination.
        route: Route,
    },

    // --- List views ---
    /// Start typing into the page's search box.
    StartSearch,
    /// A typed character while a text field has focus.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last typed character.
    Backspace,
    /// Advance one of the page's enum filters.
    CycleFilter {
        /// Which filter to advance.
        field: FilterField,
    },
    /// Reset every filter on the page.
    ClearFilters,
    /// Switch the task page between board and list.
    ToggleView,
    /// Toggle the highlighted row's checkbox.
    ToggleSelection,
    /// The "select all" checkbox.
    SelectAll,
    /// Next tab (order status, customer details tab).
    NextTab,
    /// Previous tab.
    PrevTab,
    /// Open the page's creation form: a new task on the tasks page, a new
    /// customer in the customer list, a note on a customer's details.
    Create,
    /// Move to the next field of a form.
    NextField,

    // --- Settings messages ---
    /// Open the settings modal.
    OpenSettings,
    /// Close the settings modal.
    CloseSettings,
    /// Move to the next settings section.
    SettingsNextSection,
    /// Move to the previous settings section.
    SettingsPrevSection,
    /// Navigate within the current settings section.
    SettingsNavigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
    /// Start editing the selected setting.
    SettingsEdit,
    /// Confirm the current edit.
    SettingsConfirm,
    /// Cancel the current edit.
    SettingsCancel,
    /// Save settings to file.
    SettingsSave,
}

impl Message {
    /// Returns `true` if this message only moves a cursor or changes page.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::GoTo { .. }
                | Self::FocusNext
                | Self::NextTab
                | Self::PrevTab
                | Self::SettingsNavigate { .. }
                | Self::SettingsNextSection
                | Self::SettingsPrevSection
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a settings-related action.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Message;
    ///
    /// assert!(Message::OpenSettings.is_settings());
    /// assert!(Message::SettingsSave.is_settings());
    /// assert!(!Message::NavigateLeft.is_settings());
    /// ```
    #[must_use]
    pub fn is_settings(&self) -> bool {
        matches!(
            self,
            Self::OpenSettings
                | Self::CloseSettings
                | Self::SettingsNextSection
                | Self::SettingsPrevSection
                | Self::SettingsNavigate { .. }
                | Self::SettingsEdit
                | Self::SettingsConfirm
                | Self::SettingsCancel
                | Self::SettingsSave
        )
    }
}
