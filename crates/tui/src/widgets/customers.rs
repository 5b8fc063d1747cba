//! Customer list page: search, selectors, and the customers table.

use nexus_protocol::{Choice, Customer, CustomerStatus, Variant, format};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::{TABLE_HEADER_ROWS, empty_message, scroll_offset};
use crate::customers_state::CustomersState;

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(8),
    Constraint::Min(16),
    Constraint::Length(15),
    Constraint::Length(11),
    Constraint::Length(8),
    Constraint::Length(11),
    Constraint::Length(13),
    Constraint::Length(9),
];

fn regions(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Renders the customer list.
///
/// ```text
///  / Search name or phone  d All Division  t All District  o All Type  s All Status
/// ╭ Customers (8) ──────────────────────────────────────────────────────────────╮
/// │ID       Name            Phone           District    Orders  Spent   ...     │
/// ```
pub fn render_customers_page(
    customers: &[Customer],
    state: &CustomersState,
    area: Rect,
    buf: &mut Buffer,
) {
    let [filters, table, footer] = regions(area);
    render_filter_bar(state, filters, buf);

    let visible = state.visible(customers);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Customers ({}) ", visible.len()));

    let dim = Style::default().fg(Color::DarkGray);
    if visible.is_empty() {
        let inner = block.inner(table);
        block.render(table, buf);
        empty_message("No customers match the current filters", inner, buf);
        Paragraph::new(Span::styled(format!("Showing 0 of {}", customers.len()), dim))
            .render(footer, buf);
        return;
    }

    let header = Row::new([
        "ID",
        "Name",
        "Phone",
        "District",
        "Orders",
        "Spent",
        "Last Order",
        "Status",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let capacity = capacity(table);
    let offset = scroll_offset(Some(state.cursor()), visible.len(), capacity);
    let rows = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .map(|(i, customer)| customer_row(customer, i == state.cursor()));

    Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .render(table, buf);

    Paragraph::new(Span::styled(
        format!("Showing 1-{} of {}", visible.len(), customers.len()),
        dim,
    ))
    .render(footer, buf);
}

fn customer_row(customer: &Customer, highlighted: bool) -> Row<'_> {
    let status_color = match customer.status {
        CustomerStatus::Active => Color::Green,
        CustomerStatus::Inactive => Color::DarkGray,
    };
    let row = Row::new([
        Cell::from(customer.id.as_str()),
        Cell::from(customer.name.as_str()),
        Cell::from(customer.phone.as_str()),
        Cell::from(customer.district.as_str()),
        Cell::from(format!("{} ({})", customer.total_orders, customer.repeat_orders)),
        Cell::from(format::taka(customer.total_spent)),
        Cell::from(format::optional_date(customer.last_order_date)),
        Cell::from(Span::styled(
            customer.status.display_name(),
            Style::default().fg(status_color),
        )),
    ]);
    if highlighted {
        row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    } else {
        row
    }
}

fn render_filter_bar(state: &CustomersState, area: Rect, buf: &mut Buffer) {
    let key = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);
    let filter = &state.filter;
    let search = if state.searching {
        Span::styled(
            format!("{}▏", filter.search),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else if filter.search.is_empty() {
        Span::styled("Search name or phone", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(filter.search.to_string(), value)
    };
    let named = |choice: &Choice<String>, all: &str| match choice {
        Choice::All => all.to_string(),
        Choice::Only(name) => name.clone(),
    };

    Paragraph::new(Line::from(vec![
        Span::styled(" / ", key),
        search,
        Span::styled("  d ", key),
        Span::styled(named(&filter.division, "All Division"), value),
        Span::styled("  t ", key),
        Span::styled(named(&filter.district, "All District"), value),
        Span::styled("  o ", key),
        Span::styled(filter.order_type.label("All Type"), value),
        Span::styled("  s ", key),
        Span::styled(filter.status.label("All Status"), value),
    ]))
    .render(area, buf);
}

fn capacity(table: Rect) -> usize {
    usize::from(table.height.saturating_sub(2 + TABLE_HEADER_ROWS)).max(1)
}

/// Maps a click at screen row `y` to an index into the filtered customers.
#[must_use]
pub fn customer_row_at(
    customers: &[Customer],
    state: &CustomersState,
    area: Rect,
    y: u16,
) -> Option<usize> {
    let [_, table, _] = regions(area);
    let first = table.y + 1 + TABLE_HEADER_ROWS;
    if y < first || y >= table.bottom().saturating_sub(1) {
        return None;
    }
    let len = state.visible(customers).len();
    let index = scroll_offset(Some(state.cursor()), len, capacity(table)) + usize::from(y - first);
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use nexus_protocol::{Catalog, FilterField};

    fn render(catalog: &Catalog, state: &CustomersState) -> String {
        render_to_string(110, 16, |area, buf| {
            render_customers_page(&catalog.customers, state, area, buf);
        })
    }

    #[test]
    fn lists_every_customer() {
        let catalog = Catalog::sample();
        let content = render(&catalog, &CustomersState::default());

        assert!(content.contains("Customers (8)"));
        assert!(content.contains("Search name or phone"));
        assert!(content.contains("Ahmed Rahman"));
        assert!(content.contains("Salma Khatun"));
        assert!(content.contains("Showing 1-8 of 8"));
    }

    #[test]
    fn division_filter_narrows_table() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        state.cycle_filter(FilterField::Division, &catalog);
        state.cycle_filter(FilterField::Division, &catalog);
        let content = render(&catalog, &state);

        assert!(content.contains("d Chittagong"));
        assert!(content.contains("Customers (2)"));
        assert!(content.contains("Fatima Begum"));
        assert!(!content.contains("Ahmed Rahman"));
        assert!(content.contains("Showing 1-2 of 8"));
    }

    #[test]
    fn empty_result_message() {
        let catalog = Catalog::sample();
        let mut state = CustomersState::default();
        for ch in "nobody".chars() {
            state.input(ch, &catalog.customers);
        }
        let content = render(&catalog, &state);
        assert!(content.contains("No customers match the current filters"));
        assert!(content.contains("Showing 0 of 8"));
    }

    #[test]
    fn click_maps_to_row() {
        let catalog = Catalog::sample();
        let state = CustomersState::default();
        let area = Rect::new(0, 0, 110, 16);
        // Filter bar, border, header, margin.
        assert_eq!(customer_row_at(&catalog.customers, &state, area, 4), Some(0));
        assert_eq!(customer_row_at(&catalog.customers, &state, area, 11), Some(7));
        assert_eq!(customer_row_at(&catalog.customers, &state, area, 3), None);
    }
}
