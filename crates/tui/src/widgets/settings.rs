//! Settings panel widget.
//!
//! The settings modal is drawn over the whole screen and shows one section
//! at a time. Sections are listed as tabs across the top and can be
//! narrowed with the search box underneath.

use nexus_protocol::account::{Toggle, Usage};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Widget, Wrap},
};

use super::{checkbox, empty_message, help::centered_rect};
use crate::settings_state::{BusinessField, EditMode, SettingsSection, SettingsState};

/// The width of the settings panel.
const SETTINGS_WIDTH: u16 = 100;

/// The height of the settings panel.
const SETTINGS_HEIGHT: u16 = 24;

/// Width of the label column in the business and plan sections.
const LABEL_WIDTH: usize = 16;

/// Renders the settings panel overlay.
///
/// The panel is centered on screen and displays configuration options
/// organized into sections.
///
/// # Examples
///
/// ```
/// use nexus_config::Config;
/// use nexus_protocol::AccountSettings;
/// use nexus_tui::settings_state::SettingsState;
/// use nexus_tui::widgets::render_settings_panel;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let state = SettingsState::new(Config::default(), AccountSettings::sample());
/// let area = Rect::new(0, 0, 110, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_settings_panel(&state, area, &mut buf);
/// ```
pub fn render_settings_panel(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(SETTINGS_WIDTH, SETTINGS_HEIGHT, area);
    Clear.render(popup_area, buf);

    let mut title = vec![Span::styled(
        " Settings ",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )];
    if state.is_dirty() {
        title.push(Span::styled("● unsaved ", Style::default().fg(Color::Yellow)));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let [tabs, search, _, content, _, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let sections = state.visible_sections();
    render_section_tabs(state, &sections, tabs, buf);
    render_search(state, search, buf);
    if sections.is_empty() {
        empty_message("No settings match the search", content, buf);
    } else {
        render_section_content(state, content, buf);
    }
    render_settings_help(state, help, buf);
}

fn render_section_tabs(
    state: &SettingsState,
    sections: &[SettingsSection],
    area: Rect,
    buf: &mut Buffer,
) {
    let mut spans = Vec::with_capacity(sections.len() * 2);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        let style = if *section == state.section() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(section.name(), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_search(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let text = if state.is_searching() {
        Span::styled(
            format!("{}▏", state.search()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else if state.search().is_empty() {
        Span::styled("Search settings", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.search().to_string(), Style::default().fg(Color::White))
    };
    Paragraph::new(Line::from(vec![
        Span::styled(" / ", Style::default().fg(Color::Yellow)),
        text,
    ]))
    .render(area, buf);
}

fn render_section_content(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    match state.section() {
        SettingsSection::Business => render_business_section(state, area, buf),
        SettingsSection::Plan => render_plan_section(state, area, buf),
        SettingsSection::Users => render_users_section(state, area, buf),
        SettingsSection::DeliveryPartners => render_couriers_section(state, area, buf),
        SettingsSection::Integrations => render_integrations_section(state, area, buf),
    }
}

fn item_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn prefix(selected: bool) -> &'static str {
    if selected { "> " } else { "  " }
}

fn render_business_section(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let config = state.config();
    let label_style = Style::default().fg(Color::Gray);

    let lines: Vec<Line> = BusinessField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == state.selected_item();
            let style = item_style(selected);
            let value = match state.edit_mode() {
                EditMode::Text {
                    field: editing,
                    value,
                    cursor,
                } if editing == field => {
                    let (before, after) = value.split_at((*cursor).min(value.len()));
                    format!("{before}_{after}")
                }
                _ if *field == BusinessField::Currency => {
                    format!("‹ {} ›", state.currency())
                }
                _ => field.value(config),
            };
            Line::from(vec![
                Span::styled(prefix(selected), style),
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                Span::styled(value, style),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_plan_section(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let plan = &state.account().plan;
    let [summary, usage] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("  {}", plan.name),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}/month", plan.price),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}", plan.billing),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {:<LABEL_WIDTH$}", "Next billing"),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(plan.next_billing_date),
        ]),
    ])
    .render(summary, buf);

    let rows = Layout::vertical(plan.usage.iter().map(|_| Constraint::Length(1))).split(usage);
    for (i, (item, row)) in plan.usage.iter().zip(rows.iter()).enumerate() {
        render_usage(item, i == state.selected_item(), *row, buf);
    }
}

fn render_usage(usage: &Usage, selected: bool, area: Rect, buf: &mut Buffer) {
    let style = item_style(selected);
    let [label, meter] = Layout::horizontal([
        Constraint::Length(2 + LABEL_WIDTH as u16),
        Constraint::Min(0),
    ])
    .areas(area);

    Paragraph::new(Line::from(vec![
        Span::styled(prefix(selected), style),
        Span::styled(usage.label, style),
    ]))
    .render(label, buf);

    match usage.limit {
        Some(limit) => Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(usage.percent())
            .label(format!("{} / {} ({}%)", usage.used, limit, usage.percent()))
            .render(meter, buf),
        None => Paragraph::new(Span::styled(
            format!("{} / Unlimited", usage.used),
            Style::default().fg(Color::Green),
        ))
        .render(meter, buf),
    }
}

fn render_users_section(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let account = state.account();
    let mut lines: Vec<Line> = account
        .team
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let selected = i == state.selected_item();
            let style = item_style(selected);
            let mut spans = vec![
                Span::styled(prefix(selected), style),
                Span::styled(format!("{:<18}", member.name), style),
                Span::styled(
                    format!("{:<24}", member.email),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(member.role, Style::default().fg(Color::Cyan)),
            ];
            if member.invited {
                spans.push(Span::styled(
                    "  (invited)",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Roles: ", Style::default().fg(Color::Gray)),
        Span::raw(account.roles.join(" · ")),
    ]));
    Paragraph::new(lines).render(area, buf);
}

fn toggle_line(toggle: &Toggle, selected: bool) -> Line<'static> {
    let style = item_style(selected);
    let state_style = if toggle.enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(prefix(selected), style),
        Span::styled(format!("{} ", checkbox(toggle.enabled)), style),
        Span::styled(format!("{:<20}", toggle.name), style),
        Span::styled(
            if toggle.enabled { "Connected" } else { "Off" },
            state_style,
        ),
    ])
}

fn heading(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))
}

fn render_couriers_section(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let account = state.account();
    let mut lines = vec![heading(format!(
        "  {} of {} couriers active",
        account.active_couriers(),
        account.couriers.len()
    ))];
    lines.extend(
        account
            .couriers
            .iter()
            .enumerate()
            .map(|(i, courier)| toggle_line(courier, i == state.selected_item())),
    );
    Paragraph::new(lines).render(area, buf);
}

fn render_integrations_section(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let account = state.account();
    let offset = account.integrations.len();

    let mut lines = vec![heading("  Integrations".to_string())];
    lines.extend(
        account
            .integrations
            .iter()
            .enumerate()
            .map(|(i, toggle)| toggle_line(toggle, i == state.selected_item())),
    );
    lines.push(Line::from(""));
    lines.push(heading("  Payment Gateways".to_string()));
    lines.extend(
        account
            .payment_gateways
            .iter()
            .enumerate()
            .map(|(i, toggle)| toggle_line(toggle, offset + i == state.selected_item())),
    );
    Paragraph::new(lines).render(area, buf);
}

fn render_settings_help(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let help_text = if state.is_editing() {
        "Enter: confirm | Esc: cancel"
    } else if state.is_searching() {
        "Type to filter sections | Enter/Esc: done"
    } else {
        "←→: sections | ↑↓: navigate | Enter: edit/toggle | /: search | w: save | Esc: close"
    };

    Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}
