//! Orders page: status tabs, the orders table, and the paging footer.

use nexus_protocol::{Choice, Order, OrderStatus, Variant, format};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::{TABLE_HEADER_ROWS, checkbox, empty_message, scroll_offset};
use crate::orders_state::OrdersState;

const TAB_DIVIDER: &str = " │ ";

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(3),
    Constraint::Length(8),
    Constraint::Min(16),
    Constraint::Length(14),
    Constraint::Length(14),
    Constraint::Length(10),
    Constraint::Length(20),
    Constraint::Length(12),
];

/// Areas of the orders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdersRegions {
    pub tabs: Rect,
    pub table: Rect,
    pub footer: Rect,
}

impl OrdersRegions {
    /// Splits the page area.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let [tabs, table, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Self { tabs, table, footer }
    }
}

/// Color of an order status label.
#[must_use]
pub const fn order_status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending | OrderStatus::OnHold => Color::Yellow,
        OrderStatus::Approved | OrderStatus::Processing => Color::Blue,
        OrderStatus::ReadyToShip | OrderStatus::InTransit => Color::Cyan,
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Flagged | OrderStatus::Cancelled => Color::Red,
    }
}

fn tab_labels(counts: &[(Choice<OrderStatus>, usize)]) -> Vec<String> {
    counts
        .iter()
        .map(|(status, count)| format!("{} ({count})", status.label("All Orders")))
        .collect()
}

/// Positions of the tabs that fit in `width`, as `(tab index, x offset,
/// label width)`. The strip scrolls so that `active` is always shown.
fn tab_layout(labels: &[String], active: usize, width: u16) -> Vec<(usize, u16, u16)> {
    if labels.is_empty() {
        return Vec::new();
    }
    let widths: Vec<u16> = labels
        .iter()
        .map(|l| u16::try_from(l.chars().count()).unwrap_or(u16::MAX))
        .collect();
    let divider = TAB_DIVIDER.chars().count() as u16;

    let fits = |start: usize| {
        let span: u16 = widths[start..=active.min(widths.len().saturating_sub(1))]
            .iter()
            .fold(0u16, |acc, w| acc.saturating_add(*w).saturating_add(divider));
        span <= width.saturating_add(divider)
    };
    let start = (0..=active.min(labels.len().saturating_sub(1)))
        .find(|start| fits(*start))
        .unwrap_or(active);

    let mut x = 0u16;
    let mut layout = Vec::new();
    for (index, w) in widths.iter().enumerate().skip(start) {
        if x.saturating_add(*w) > width {
            break;
        }
        layout.push((index, x, *w));
        x = x.saturating_add(*w).saturating_add(divider);
    }
    layout
}

fn render_tabs(counts: &[(Choice<OrderStatus>, usize)], active: usize, area: Rect, buf: &mut Buffer) {
    let labels = tab_labels(counts);
    let mut spans = Vec::new();
    for (n, (index, _, _)) in tab_layout(&labels, active, area.width).into_iter().enumerate() {
        if n > 0 {
            spans.push(Span::styled(TAB_DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let style = if index == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(labels[index].clone(), style));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Maps a click on the tab strip to a tab index.
#[must_use]
pub fn order_tab_at(
    counts: &[(Choice<OrderStatus>, usize)],
    active: usize,
    area: Rect,
    x: u16,
) -> Option<usize> {
    let labels = tab_labels(counts);
    let offset = x.checked_sub(area.x)?;
    tab_layout(&labels, active, area.width)
        .into_iter()
        .find(|(_, start, w)| offset >= *start && offset < start + w)
        .map(|(index, _, _)| index)
}

/// Renders the orders page.
///
/// ```text
/// All Orders (4) │ Pending (1) │ On Hold (1) │ Approved (0) │ ...
/// ╭ Orders ─────────────────────────────────────────────────────╮
/// │[ ] Invoice  Customer          Status        Payment   ...   │
/// │                                                             │
/// │[ ] FX-0005  NAHIDUL           Cancelled     Due ৳580  ...   │
/// ╰─────────────────────────────────────────────────────────────╯
/// Showing 1-4 of 4 · Page 1 of 1
/// ```
pub fn render_orders_page(
    orders: &[Order],
    counts: &[(Choice<OrderStatus>, usize)],
    state: &OrdersState,
    area: Rect,
    buf: &mut Buffer,
) {
    let regions = OrdersRegions::compute(area);
    render_tabs(counts, state.tab(), regions.tabs, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Orders ");

    let total = state.visible(orders).len();
    if total == 0 {
        let inner = block.inner(regions.table);
        block.render(regions.table, buf);
        empty_message("No orders in this tab", inner, buf);
        render_footer(state, (0, 0, 0), regions.footer, buf);
        return;
    }

    let page_rows = state.page_rows(orders);
    let offset = table_offset(state, page_rows.len(), regions.table);

    let header = Row::new([
        Cell::from(checkbox(state.all_selected(orders))),
        Cell::from("Invoice"),
        Cell::from("Customer"),
        Cell::from("Status"),
        Cell::from("Payment"),
        Cell::from("Source"),
        Cell::from("Created"),
        Cell::from("Courier"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows = page_rows
        .iter()
        .skip(offset)
        .take(table_capacity(regions.table))
        .map(|(index, order)| {
            order_row(
                order,
                state.selection.contains(&order.id),
                *index == state.cursor(),
            )
        });

    Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .render(regions.table, buf);

    let first = page_rows.first().map_or(0, |(i, _)| i + 1);
    let last = page_rows.last().map_or(0, |(i, _)| i + 1);
    render_footer(state, (first, last, total), regions.footer, buf);
}

fn order_row(order: &Order, checked: bool, highlighted: bool) -> Row<'_> {
    let payment = if order.has_due() {
        Span::styled(
            format!("Due {}", format::taka(order.payment.due_amount)),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("Paid", Style::default().fg(Color::Green))
    };
    let courier = order
        .delivery_partner
        .as_ref()
        .map_or("-", |partner| partner.name.as_str());

    let row = Row::new([
        Cell::from(checkbox(checked)),
        Cell::from(order.invoice_no.as_str()),
        Cell::from(order.customer.name.as_str()),
        Cell::from(Span::styled(
            order.status.display_name(),
            Style::default().fg(order_status_color(order.status)),
        )),
        Cell::from(payment),
        Cell::from(order.source.display_name()),
        Cell::from(format::date_time(order.created_at)),
        Cell::from(courier),
    ]);
    if highlighted {
        row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    } else {
        row
    }
}

/// `range` is `(first, last, total)`, one-based.
fn render_footer(state: &OrdersState, range: (usize, usize, usize), area: Rect, buf: &mut Buffer) {
    let (first, last, total) = range;
    let dim = Style::default().fg(Color::DarkGray);
    let pages = total.div_ceil(state.page_size()).max(1);
    Paragraph::new(Line::from(vec![
        Span::styled(format!("Showing {first}-{last} of {total}"), dim),
        Span::styled(format!(" · Page {} of {pages}", state.page() + 1), dim),
        Span::styled(format!(" · {} selected", state.selection.len()), dim),
    ]))
    .render(area, buf);
}

fn table_capacity(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2 + TABLE_HEADER_ROWS)).max(1)
}

/// First row of the current page drawn, keeping the cursor on screen.
fn table_offset(state: &OrdersState, page_len: usize, table: Rect) -> usize {
    let page_cursor = state.cursor() % state.page_size();
    scroll_offset(Some(page_cursor), page_len, table_capacity(table))
}

/// Maps a click at screen row `y` of the table to an index into the
/// filtered orders.
#[must_use]
pub fn order_row_at(orders: &[Order], state: &OrdersState, area: Rect, y: u16) -> Option<usize> {
    let table = OrdersRegions::compute(area).table;
    let first = table.y + 1 + TABLE_HEADER_ROWS;
    if y < first || y >= table.bottom().saturating_sub(1) {
        return None;
    }
    let page_rows = state.page_rows(orders);
    let offset = table_offset(state, page_rows.len(), table);
    page_rows
        .get(offset + usize::from(y - first))
        .map(|(index, _)| *index)
}
