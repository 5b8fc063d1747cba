//! Sidebar navigation widget.

use nexus_protocol::{NAV_ITEMS, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the navigation list.
///
/// The item whose path equals `current_path` is marked active. While the
/// sidebar has focus, `cursor` highlights the item Enter would open.
///
/// ```text
/// ╭ Nexus ERP ─────────╮
/// │▌1 Dashboard        │
/// │ 2 Orders           │
/// │ 3 Tasks            │
/// ```
pub fn render_sidebar(
    current_path: &str,
    cursor: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_color = if cursor.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(Span::styled(
            " Nexus ERP ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let lines: Vec<Line> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, route)| nav_line(*route, i, route.is_active(current_path), cursor == Some(i)))
        .collect();

    Paragraph::new(lines).block(block).render(area, buf);
}

fn nav_line(route: Route, index: usize, active: bool, highlighted: bool) -> Line<'static> {
    let mut style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if route.is_implemented() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    if highlighted {
        style = style.bg(Color::DarkGray);
    }
    let marker = if active { "▌" } else { " " };
    let key = (index + 1) % 10;

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{key} "), Style::default().fg(Color::Yellow)),
        Span::styled(route.label(), style),
    ])
}

/// Maps a click at screen row `y` to a sidebar item index.
#[must_use]
pub fn sidebar_item_at(area: Rect, y: u16) -> Option<usize> {
    let first = area.y + 1;
    if y < first || y >= area.bottom().saturating_sub(1) {
        return None;
    }
    let index = usize::from(y - first);
    (index < NAV_ITEMS.len()).then_some(index)
}
