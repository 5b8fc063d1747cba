//! Header bar widget.

use nexus_protocol::Route;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the header: business name and page on the left, help cue on
/// the right.
///
/// ```text
/// ╭──────────────────────────────────────────────────────────╮
/// │Nexus Store - Orders                      Press ? for help│
/// ╰──────────────────────────────────────────────────────────╯
/// ```
pub fn render_header(business_name: &str, route: Route, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    // "Press ? for help" is 16 cells.
    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

    Paragraph::new(Line::from(vec![
        Span::styled(
            business_name.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(route.label(), Style::default().fg(Color::White)),
    ]))
    .render(title_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right)
    .render(help_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;

    #[test]
    fn shows_business_page_and_help_cue() {
        let content = render_to_string(80, 3, |area, buf| {
            render_header("Nexus Store", Route::Customers, area, buf);
        });
        assert!(content.contains("Nexus Store - Customers"));
        assert!(content.contains("Press ? for help"));
    }
}
