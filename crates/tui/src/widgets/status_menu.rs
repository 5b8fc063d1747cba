//! Status menu popup widget.

use nexus_protocol::Variant;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use crate::layout::contains;
use crate::menu::StatusMenu;

const MENU_WIDTH: u16 = 34;

fn popup_area<S: Variant>(area: Rect) -> Rect {
    let height = u16::try_from(S::ALL.len()).unwrap_or(u16::MAX).saturating_add(2);
    centered_rect(MENU_WIDTH, height, area)
}

/// Renders the menu centered in `area`.
///
/// `label` names each option, e.g. [`nexus_protocol::TaskStatus::action_label`].
/// The entity's current status is marked with a dot.
///
/// ```text
/// ╭ Task 4 ────────────────────────╮
/// │  Move to To Do                 │
/// │› Move to In Progress •         │
/// │  Move to Review                │
/// │  Mark as Completed             │
/// ╰────────────────────────────────╯
/// ```
pub fn render_status_menu<S: Variant>(
    menu: &StatusMenu<S>,
    title: &str,
    label: impl Fn(S) -> &'static str,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup = popup_area::<S>(area);
    Clear.render(popup, buf);

    let lines: Vec<Line> = S::ALL
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let highlighted = i == menu.cursor();
            let style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(if highlighted { "› " } else { "  " }, style),
                Span::styled(label(*status), style),
            ];
            if *status == menu.current() {
                spans.push(Span::styled(" •", Style::default().fg(Color::Green)));
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(popup, buf);
}

/// Maps a click to a menu option, using the popup geometry of
/// [`render_status_menu`].
#[must_use]
pub fn status_menu_item_at<S: Variant>(area: Rect, x: u16, y: u16) -> Option<usize> {
    let popup = popup_area::<S>(area);
    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );
    if !contains(inner, x, y) {
        return None;
    }
    let index = usize::from(y - inner.y);
    (index < S::ALL.len()).then_some(index)
}

/// Returns `true` if `(x, y)` falls inside the popup.
#[must_use]
pub fn status_menu_contains<S: Variant>(area: Rect, x: u16, y: u16) -> bool {
    contains(popup_area::<S>(area), x, y)
}
