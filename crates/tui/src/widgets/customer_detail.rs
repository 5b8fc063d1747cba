//! Customer details screen: profile card, tab strip, and the active tab.

use nexus_protocol::{Customer, CustomerHistory, CustomerStatus, Variant, format};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs, Widget, Wrap},
};

use super::empty_message;
use super::orders::order_status_color;
use crate::customers_state::DetailTab;

fn regions(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area)
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
}

/// Renders the details of `customer`, or a "Customer not found" pane when
/// the selected id has no match.
///
/// `note_draft` is the internal note being typed, shown on the Overview tab.
pub fn render_customer_detail(
    customer: Option<&Customer>,
    history: Option<&CustomerHistory>,
    tab: DetailTab,
    note_draft: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(customer) = customer else {
        let block = panel("Customer");
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Customer not found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press Esc to return to the list",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(inner, buf);
        return;
    };

    let [profile, tabs, body] = regions(area);
    render_profile(customer, profile, buf);

    Tabs::new(DetailTab::ALL.iter().map(|t| t.label()))
        .select(tab_index(tab))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .render(tabs, buf);

    let block = panel(tab.label());
    let inner = block.inner(body);
    block.render(body, buf);

    match (tab, history) {
        (DetailTab::Overview, _) => {
            let [overview, notes] =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(inner);
            render_overview(customer, history, overview, buf);
            render_notes(customer, note_draft, notes, buf);
        }
        (_, None) => empty_message("No history recorded for this customer", inner, buf),
        (DetailTab::Orders, Some(history)) => render_orders(history, inner, buf),
        (DetailTab::Payments, Some(history)) => render_payments(history, inner, buf),
        (DetailTab::Returns, Some(history)) => render_returns(history, inner, buf),
        (DetailTab::Addresses, Some(history)) => render_addresses(history, inner, buf),
        (DetailTab::Activity, Some(history)) => render_activity(history, inner, buf),
    }
}

fn tab_index(tab: DetailTab) -> usize {
    DetailTab::ALL.iter().position(|t| *t == tab).unwrap_or(0)
}

fn render_profile(customer: &Customer, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let status_color = match customer.status {
        CustomerStatus::Active => Color::Green,
        CustomerStatus::Inactive => Color::DarkGray,
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                customer.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}  ", customer.id), label),
            Span::styled(customer.status.display_name(), Style::default().fg(status_color)),
        ]),
        Line::from(vec![
            Span::styled("Phone ", label),
            Span::styled(customer.phone.clone(), value),
            Span::styled("  Email ", label),
            Span::styled(customer.email.clone().unwrap_or_else(|| "-".into()), value),
        ]),
        Line::from(vec![
            Span::styled("Address ", label),
            Span::styled(
                format!(
                    "{}, {}, {}",
                    customer.address, customer.district, customer.division
                ),
                value,
            ),
        ]),
    ];
    if !customer.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags ", label),
            Span::styled(customer.tags.join(", "), Style::default().fg(Color::Yellow)),
        ]));
    }

    Paragraph::new(lines)
        .block(panel("Customer"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_overview(
    customer: &Customer,
    history: Option<&CustomerHistory>,
    area: Rect,
    buf: &mut Buffer,
) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let field = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<20}"), label),
            Span::styled(text, value),
        ])
    };

    let mut lines = vec![
        field(
            "Total Orders",
            format!("{} ({} repeat)", customer.total_orders, customer.repeat_orders),
        ),
        field("Total Spent", format::taka(customer.total_spent)),
        field("Last Order", format::optional_date(customer.last_order_date)),
    ];
    if let Some(history) = history {
        let insights = &history.insights;
        lines.extend([
            field("Last Order Amount", format::taka(insights.last_order_amount)),
            field("Avg Order Value", format::taka(insights.avg_order_value)),
            field("Order Frequency", insights.order_frequency.clone()),
            field("Return Rate", insights.return_rate.clone()),
            field("Cancel Rate", insights.cancel_rate.clone()),
        ]);
        if let Some(address) = history.default_address() {
            lines.push(field("Default Address", address.address.clone()));
        }
    }
    Paragraph::new(lines).render(area, buf);
}

fn render_notes(customer: &Customer, draft: Option<&str>, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from(Span::styled(
        "Internal Notes",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    let saved: Vec<Line> = customer
        .note_lines()
        .map(|note| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::styled(note.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    if saved.is_empty() {
        lines.push(Line::from(Span::styled(
            "No notes yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend(saved);
    lines.push(Line::from(""));
    lines.push(match draft {
        Some(draft) => Line::from(Span::styled(
            format!("› {draft}▏"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "n  Add a note about this customer...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    });
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn header_row<'a>(titles: impl IntoIterator<Item = &'a str>) -> Row<'a> {
    Row::new(titles)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1)
}

fn render_orders(history: &CustomerHistory, area: Rect, buf: &mut Buffer) {
    let rows = history.orders.iter().map(|order| {
        Row::new([
            Cell::from(order.id.as_str()),
            Cell::from(format::date(order.date)),
            Cell::from(format::taka(order.total)),
            Cell::from(Span::styled(
                order.status.display_name(),
                Style::default().fg(order_status_color(order.status)),
            )),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header_row(["Order", "Date", "Total", "Status"]))
    .render(area, buf);
}

fn render_payments(history: &CustomerHistory, area: Rect, buf: &mut Buffer) {
    let rows = history.payments.iter().map(|payment| {
        Row::new([
            format::date(payment.date),
            format::taka(payment.amount),
            payment.method.clone(),
            payment.reference.clone().unwrap_or_else(|| "-".into()),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header_row(["Date", "Amount", "Method", "Reference"]))
    .render(area, buf);
}

fn render_returns(history: &CustomerHistory, area: Rect, buf: &mut Buffer) {
    if history.returns.is_empty() {
        empty_message("No returns", area, buf);
        return;
    }
    let rows = history.returns.iter().map(|ret| {
        Row::new([
            ret.order_id.clone(),
            ret.reason.clone(),
            format::taka(ret.amount),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(10),
        ],
    )
    .header(header_row(["Order", "Reason", "Amount"]))
    .render(area, buf);
}

fn render_addresses(history: &CustomerHistory, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = history
        .addresses
        .iter()
        .flat_map(|address| {
            let mut title = vec![Span::styled(
                address.label.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )];
            if address.is_default {
                title.push(Span::styled("  ✓ default", Style::default().fg(Color::Green)));
            }
            [
                Line::from(title),
                Line::from(Span::styled(
                    address.address.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ]
        })
        .collect();
    Paragraph::new(lines).render(area, buf);
}

fn render_activity(history: &CustomerHistory, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = history
        .activities
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{:<22}", format::date_time(entry.at)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.action.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" · {}", entry.details), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    Paragraph::new(lines).render(area, buf);
}

/// Maps a click on the tab strip to a tab. Each title is padded by one
/// space on both sides and followed by a one-cell divider.
#[must_use]
pub fn detail_tab_at(area: Rect, x: u16, y: u16) -> Option<DetailTab> {
    let [_, tabs, _] = regions(area);
    if y != tabs.y {
        return None;
    }
    let mut start = tabs.x;
    for tab in DetailTab::ALL {
        let width = u16::try_from(tab.label().len()).unwrap_or(u16::MAX) + 2;
        if x >= start && x < start + width {
            return Some(tab);
        }
        start += width + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use nexus_protocol::Catalog;

    fn render(catalog: &Catalog, id: &str, tab: DetailTab) -> String {
        render_with_draft(catalog, id, tab, None)
    }

    fn render_with_draft(
        catalog: &Catalog,
        id: &str,
        tab: DetailTab,
        draft: Option<&str>,
    ) -> String {
        render_to_string(100, 24, |area, buf| {
            render_customer_detail(
                catalog.customer(id),
                catalog.history(id),
                tab,
                draft,
                area,
                buf,
            );
        })
    }

    #[test]
    fn overview_with_history() {
        let catalog = Catalog::sample();
        let content = render(&catalog, "CUS-001", DetailTab::Overview);

        assert!(content.contains("Ahmed Rahman"));
        assert!(content.contains("ahmed.rahman@email.com"));
        assert!(content.contains("Overview"));
        assert!(content.contains("Activity"));
        assert!(content.contains("Avg Order Value"));
        assert!(content.contains("৳3,033"));
    }

    #[test]
    fn overview_lists_internal_notes() {
        let mut catalog = Catalog::sample();
        catalog
            .add_customer_note("CUS-001", "Asked for invoice copies")
            .expect("known customer");
        let content = render(&catalog, "CUS-001", DetailTab::Overview);

        assert!(content.contains("Internal Notes"));
        assert!(content.contains("• VIP customer, prefers morning delivery"));
        assert!(content.contains("• Asked for invoice copies"));
        assert!(content.contains("Add a note about this customer..."));
    }

    #[test]
    fn note_draft_replaces_the_hint() {
        let catalog = Catalog::sample();
        let content =
            render_with_draft(&catalog, "CUS-002", DetailTab::Overview, Some("Call after 6"));

        assert!(content.contains("No notes yet"));
        assert!(content.contains("› Call after 6▏"));
        assert!(!content.contains("Add a note about this customer..."));
    }

    #[test]
    fn payments_tab() {
        let catalog = Catalog::sample();
        let content = render(&catalog, "CUS-001", DetailTab::Payments);
        assert!(content.contains("TXN892834"));
        assert!(content.contains("COD"));
    }

    #[test]
    fn activity_tab() {
        let catalog = Catalog::sample();
        let content = render(&catalog, "CUS-001", DetailTab::Activity);
        assert!(content.contains("Order delivered · ORD-1021 delivered successfully"));
    }

    #[test]
    fn customer_without_history() {
        let catalog = Catalog::sample();
        let overview = render(&catalog, "CUS-002", DetailTab::Overview);
        assert!(overview.contains("Fatima Begum"));
        assert!(overview.contains("Total Spent"));

        let orders = render(&catalog, "CUS-002", DetailTab::Orders);
        assert!(orders.contains("No history recorded for this customer"));
    }

    #[test]
    fn unknown_customer() {
        let catalog = Catalog::sample();
        let content = render(&catalog, "CUS-404", DetailTab::Overview);
        assert!(content.contains("Customer not found"));
    }

    #[test]
    fn tab_clicks() {
        let area = Rect::new(0, 0, 100, 24);
        // " Overview " spans x 0..10, divider at 10, " Orders " from 11.
        assert_eq!(detail_tab_at(area, 0, 6), Some(DetailTab::Overview));
        assert_eq!(detail_tab_at(area, 9, 6), Some(DetailTab::Overview));
        assert_eq!(detail_tab_at(area, 10, 6), None);
        assert_eq!(detail_tab_at(area, 11, 6), Some(DetailTab::Orders));
        assert_eq!(detail_tab_at(area, 11, 7), None);
    }
}
