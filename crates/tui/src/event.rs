//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which table applies depends on the
//! [`InputMode`] the application is in.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use nexus_protocol::{FilterField, Message, NAV_ITEMS};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key commands.
    #[default]
    Normal,
    /// A search box or form field has focus; characters are typed.
    Text,
    /// The settings modal is open.
    Settings,
    /// A settings field is being edited.
    SettingsEdit,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => match mode {
            InputMode::Normal => key_to_message(*key),
            InputMode::Text => key_to_text_message(*key),
            InputMode::Settings => key_to_settings_message(*key, false),
            InputMode::SettingsEdit => key_to_settings_message(*key, true),
        },
        Event::Mouse(mouse) if mode == InputMode::Normal => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Esc` | Back (close popup, leave details) |
/// | Arrows | Navigate |
/// | `Enter` | Select |
/// | `Space` | Toggle row checkbox |
/// | `Tab` | Switch focus between sidebar and page |
/// | `1`-`9`, `0` | Jump to a sidebar page |
/// | `/` | Search |
/// | `p` `c` | Cycle priority / category filter |
/// | `d` `t` `o` `s` | Cycle division / district / order type / status filter |
/// | `x` | Clear filters |
/// | `v` | Toggle board/list |
/// | `a` | Select all |
/// | `[` `]` | Previous / next tab |
/// | `n` | New task, customer, or note |
/// | `Shift+S` or `,` | Open settings |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    let filter = |field| Some(Message::CycleFilter { field });
    match key.code {
        KeyCode::Esc => Some(Message::Back),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char(' ') => Some(Message::ToggleSelection),
        KeyCode::Tab => Some(Message::FocusNext),

        KeyCode::Char(ch @ '0'..='9') => {
            let index = ch.to_digit(10).map_or(0, |d| (d as usize + 9) % 10);
            NAV_ITEMS.get(index).map(|&route| Message::GoTo { route })
        }

        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('p') => filter(FilterField::Priority),
        KeyCode::Char('c') => filter(FilterField::Category),
        KeyCode::Char('d') => filter(FilterField::Division),
        KeyCode::Char('t') => filter(FilterField::District),
        KeyCode::Char('o') => filter(FilterField::OrderType),
        KeyCode::Char('s') => filter(FilterField::Status),
        KeyCode::Char('x') => Some(Message::ClearFilters),
        KeyCode::Char('v') => Some(Message::ToggleView),
        KeyCode::Char('a') => Some(Message::SelectAll),
        KeyCode::Char(']') => Some(Message::NextTab),
        KeyCode::Char('[') => Some(Message::PrevTab),
        KeyCode::Char('n') => Some(Message::Create),
        KeyCode::Char('S' | ',') => Some(Message::OpenSettings),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('q') => Some(Message::Quit),

        _ => None,
    }
}

/// Converts a key event while a text field has focus.
///
/// Characters are typed; `Enter` submits, `Esc` stops typing, `Tab` moves to
/// the next form field, and arrows step choice fields.
#[must_use]
pub fn key_to_text_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Esc => Some(Message::Back),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

/// Converts a key event to a settings-specific message.
///
/// This function is used while the settings modal is open; no other key
/// table applies until it closes.
///
/// # Key Bindings (Settings Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Left` | Previous section |
/// | `Right` | Next section |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Enter` or `Space` | Edit / toggle |
/// | `/` | Search sections |
/// | `Ctrl+S` or `w` | Save |
/// | `Esc` | Cancel / close |
/// | `Backspace` | Backspace (in edit mode) |
/// | Any char | Input (in edit mode) |
#[must_use]
pub fn key_to_settings_message(key: KeyEvent, is_editing: bool) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    if is_editing {
        return match key.code {
            KeyCode::Enter => Some(Message::SettingsConfirm),
            KeyCode::Esc => Some(Message::SettingsCancel),
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Char(ch) => Some(Message::Input { ch }),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return Some(Message::SettingsSave);
    }

    match key.code {
        KeyCode::Esc => Some(Message::CloseSettings),
        KeyCode::Left => Some(Message::SettingsPrevSection),
        KeyCode::Right => Some(Message::SettingsNextSection),
        KeyCode::Up => Some(Message::SettingsNavigate { delta: -1 }),
        KeyCode::Down => Some(Message::SettingsNavigate { delta: 1 }),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SettingsEdit),
        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('w') => Some(Message::SettingsSave),
        _ => None,
    }
}
