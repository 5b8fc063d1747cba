//! Dashboard page: KPI cards, sales charts, recent orders, and activity.

use nexus_protocol::{DashboardData, dashboard::MONTHS, format};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Paragraph, Row, Sparkline,
        Table, Widget,
    },
};

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

/// Renders the dashboard.
///
/// ```text
///  Category All Categories · Region All Regions · ...      Export  Share ...
/// ╭────────────╮╭────────────╮╭────────────╮╭────────────╮
/// │Total Rev...││Total Sales ││Customers   ││Units Sold  │
/// ╭ Monthly Sales ($K) ─────────╮╭ Revenue by Category ──╮
/// ╭ Recent Orders ──────────────╮╭ Activity ─────────────╮
/// ```
pub fn render_dashboard(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let [toolbar, kpis, charts, lists] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(area);

    render_toolbar(data, toolbar, buf);
    render_kpis(data, kpis, buf);

    let [sales, categories] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(charts);
    render_sales(data, sales, buf);
    render_categories(data, categories, buf);

    let [orders, feed] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(lists);
    render_recent_orders(data, orders, buf);
    render_activity(data, feed, buf);
}

fn render_toolbar(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let mut filters = Vec::new();
    for (i, filter) in data.filters.iter().enumerate() {
        if i > 0 {
            filters.push(Span::styled(" · ", label));
        }
        filters.push(Span::styled(format!("{} ", filter.label), label));
        filters.push(Span::styled(filter.options.first().copied().unwrap_or("-"), value));
    }
    let actions: Vec<Span> = data
        .actions
        .iter()
        .map(|action| Span::styled(format!(" {action} "), Style::default().fg(Color::Cyan)))
        .collect();
    let actions_width: u16 = actions
        .iter()
        .map(|s| u16::try_from(s.width()).unwrap_or(0))
        .sum();

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(actions_width)]).areas(area);
    Paragraph::new(Line::from(filters)).render(left, buf);
    Paragraph::new(Line::from(actions)).render(right, buf);
}

fn render_kpis(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let count = u32::try_from(data.kpis.len().max(1)).unwrap_or(1);
    let areas = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(area);
    for (kpi, card) in data.kpis.iter().zip(areas.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(kpi.label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                kpi.value,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(kpi.caption, Style::default().fg(Color::Green))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(*card, buf);
    }
}

fn render_sales(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let title = match data.best_month() {
        Some((month, sales)) => format!(
            " Monthly Sales ($K) · {} total · best {month} {} ",
            format::thousands(data.yearly_sales()),
            format::thousands(sales)
        ),
        None => " Monthly Sales ($K) ".to_string(),
    };
    let block = panel(title);
    let inner = block.inner(area);
    block.render(area, buf);

    let [chart, months] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    Sparkline::default()
        .data(data.monthly_sales)
        .style(Style::default().fg(Color::Cyan))
        .render(chart, buf);
    let initials: String = MONTHS.iter().filter_map(|m| m.chars().next()).collect();
    Paragraph::new(Span::styled(initials, Style::default().fg(Color::DarkGray)))
        .render(months, buf);
}

fn render_categories(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let bars: Vec<Bar> = data
        .revenue_by_category
        .iter()
        .map(|(name, share)| {
            Bar::default()
                .value(*share)
                .label(Line::from(*name))
                .text_value(format!("{share}%"))
        })
        .collect();

    BarChart::default()
        .block(panel(" Revenue by Category ".to_string()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .render(area, buf);
}

fn status_color(status: &str) -> Color {
    match status {
        "Completed" => Color::Green,
        "Processing" => Color::Blue,
        "Pending" => Color::Yellow,
        _ => Color::Gray,
    }
}

fn render_recent_orders(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let rows = data.recent_orders.iter().map(|order| {
        Row::new([
            Cell::from(order.id),
            Cell::from(order.customer),
            Cell::from(order.product),
            Cell::from(order.amount),
            Cell::from(Span::styled(
                order.status,
                Style::default().fg(status_color(order.status)),
            )),
            Cell::from(order.date),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(["Order", "Customer", "Product", "Amount", "Status", "Date"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(panel(" Recent Orders ".to_string()))
    .column_spacing(1)
    .render(area, buf);
}

fn render_activity(data: &DashboardData, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = data
        .activity
        .iter()
        .flat_map(|item| {
            [
                Line::from(vec![
                    Span::styled(item.user, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" {} ", item.action)),
                    Span::styled(item.target, Style::default().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(item.time, Style::default().fg(Color::DarkGray))),
            ]
        })
        .collect();
    Paragraph::new(lines)
        .block(panel(" Activity ".to_string()))
        .render(area, buf);
}
