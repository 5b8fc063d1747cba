//! Help overlay widget.
//!
//! Lists every keybinding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const HELP_WIDTH: u16 = 46;

/// Renders a centered help overlay displaying all keybindings.
///
/// ```text
/// ╭ Help ──────────────────────────────────────╮
/// │                                            │
/// │  Navigation                                │
/// │  ←→↑↓        Move                          │
/// │  Tab         Switch sidebar / page         │
/// │  ...                                       │
/// │  Press any key to close                    │
/// ╰────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use nexus_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 40);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

const NAVIGATION: &[(&str, &str)] = &[
    ("←→↑↓", "Move"),
    ("Tab", "Switch sidebar / page"),
    ("1-9, 0", "Jump to page"),
    ("[ ]", "Previous / next tab"),
    ("Esc", "Back / close"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("Enter", "Open / change status"),
    ("Space", "Toggle checkbox"),
    ("a", "Select all"),
    ("/", "Search"),
    ("p c d t o s", "Cycle filter"),
    ("x", "Clear filters"),
    ("v", "Board / list view"),
    ("n", "New task / customer / note"),
    ("S", "Settings"),
    ("q, Ctrl+C", "Quit"),
    ("?", "Toggle help"),
];

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let section = |title: &'static str, keys: &[(&'static str, &'static str)]| {
        let mut lines = vec![Line::from(Span::styled(format!("  {title}"), header_style))];
        lines.extend(keys.iter().map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("  {key:<13}"), key_style),
                Span::styled(*text, text_style),
            ])
        }));
        lines
    };

    let mut lines = vec![Line::from("")];
    lines.extend(section("Navigation", NAVIGATION));
    lines.push(Line::from(""));
    lines.extend(section("Actions", ACTIONS));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a centered rectangle within a given area, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        assert_eq!(centered.x, 30);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 12);
        assert_eq!(centered.x, 0);
        assert_eq!(centered.y, 0);
    }

    #[test]
    fn render_help_overlay_creates_output() {
        let content = render_to_string(80, 30, render_help_overlay);

        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Jump to page"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        render_to_string(20, 10, render_help_overlay);
    }

    #[test]
    fn every_action_key_is_listed() {
        let content: String = build_help_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        for (key, _) in NAVIGATION.iter().chain(ACTIONS) {
            assert!(content.contains(key), "missing {key}");
        }
    }
}
