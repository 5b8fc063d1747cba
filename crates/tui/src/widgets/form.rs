//! "New Task" and "Add Customer" popup forms.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use crate::form::{CustomerField, CustomerForm, FormField, TaskForm};

const FORM_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 13;

/// One row of a popup form.
struct Row<'a> {
    label: &'static str,
    value: &'a str,
    is_text: bool,
    focused: bool,
}

/// Renders the task form centered in `area`.
///
/// ```text
/// ╭ New Task ──────────────────────────────────────╮
/// │                                                │
/// │› Title        Call supplier▏                   │
/// │  Description                                   │
/// │  Priority     ‹ Medium ›                       │
/// │  Category     ‹ General ›                      │
/// │  Assignee     ‹ John Doe ›                     │
/// │  Due Date                                      │
/// │  Related To                                    │
/// │  Tags                                          │
/// │                                                │
/// │  Tab next field · ←→ change · Enter create     │
/// ╰────────────────────────────────────────────────╯
/// ```
pub fn render_task_form(form: &TaskForm, area: Rect, buf: &mut Buffer) {
    let rows = FormField::ALL.map(|field| Row {
        label: field.label(),
        value: form.value(field),
        is_text: field.is_text(),
        focused: field == form.field(),
    });
    render_form(" New Task ", &rows, form.error(), area, buf);
}

/// Renders the customer form centered in `area`.
pub fn render_customer_form(form: &CustomerForm, area: Rect, buf: &mut Buffer) {
    let rows = CustomerField::ALL.map(|field| Row {
        label: field.label(),
        value: form.value(field),
        is_text: field.is_text(),
        focused: field == form.field(),
    });
    render_form(" Add Customer ", &rows, form.error(), area, buf);
}

fn render_form(title: &str, rows: &[Row<'_>], error: Option<&str>, area: Rect, buf: &mut Buffer) {
    let height = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(5);
    let popup = centered_rect(FORM_WIDTH, height, area);
    Clear.render(popup, buf);

    let label_style = Style::default().fg(Color::Gray);
    let mut lines = vec![Line::from("")];
    for row in rows {
        let value_style = if row.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let value = match (row.is_text, row.focused) {
            (true, true) => format!("{}▏", row.value),
            (true, false) => row.value.to_string(),
            (false, _) => format!("‹ {} ›", row.value),
        };
        lines.push(Line::from(vec![
            Span::styled(if row.focused { "› " } else { "  " }, value_style),
            Span::styled(format!("{:<LABEL_WIDTH$}", row.label), label_style),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(match error {
        Some(error) => Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "  Tab next field · ←→ change · Enter create · Esc cancel",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    });

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;

    #[test]
    fn shows_fields_with_focus() {
        let mut form = TaskForm::new();
        for ch in "Call supplier".chars() {
            form.input(ch);
        }
        let content = render_to_string(80, 18, |area, buf| render_task_form(&form, area, buf));

        assert!(content.contains("New Task"));
        assert!(content.contains("› Title        Call supplier▏"));
        assert!(content.contains("‹ Medium ›"));
        assert!(content.contains("‹ John Doe ›"));
        assert!(content.contains("Due Date"));
        assert!(content.contains("Related To"));
        assert!(content.contains("Tags"));
        assert!(content.contains("Enter create"));
    }

    #[test]
    fn error_replaces_hint() {
        let mut form = TaskForm::new();
        form.set_error(FormField::DueDate, "invalid due date `soon`: expected YYYY-MM-DD");
        let content = render_to_string(80, 18, |area, buf| render_task_form(&form, area, buf));

        assert!(content.contains("expected YYYY-MM-DD"));
        assert!(content.contains("› Due Date     ▏"));
        assert!(!content.contains("Enter create"));
    }

    #[test]
    fn customer_form_lists_locations_as_choices() {
        let mut form = CustomerForm::new();
        "Rina".chars().for_each(|ch| form.input(ch));
        let content =
            render_to_string(80, 18, |area, buf| render_customer_form(&form, area, buf));

        assert!(content.contains("Add Customer"));
        assert!(content.contains("› Name         Rina▏"));
        assert!(content.contains("Phone *"));
        assert!(content.contains("‹ Dhaka ›"));
        assert!(content.contains("Notes"));
    }
}
