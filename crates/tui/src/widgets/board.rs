//! Task board rendering widget.
//!
//! The board shows the four status columns side by side with collapsed
//! borders between neighbours. Hit-testing for mouse clicks uses the same
//! geometry as rendering.

use chrono::NaiveDate;
use nexus_protocol::StatusColumn;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::scroll_offset;
use super::task_card::render_task_card;
use crate::layout::{TASK_CARD_HEIGHT, contains};

/// Position of a column in the horizontal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column: rounded corners on the left, no right border.
    First,
    /// Inner columns: T-connectors on the left, no right border.
    Middle,
    /// Rightmost column: T-connectors on the left, rounded on the right.
    Last,
}

const BORDER_SET_FIRST: border::Set<'static> = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set<'static> = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set<'static> = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

impl ColumnPosition {
    fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 == count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    fn borders(self) -> (Borders, border::Set<'static>) {
        match self {
            Self::First => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
            Self::Middle => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_MIDDLE),
            Self::Last => (Borders::ALL, BORDER_SET_LAST),
        }
    }
}

/// Board cursor: the focused column and, if any, the highlighted card in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    pub column: usize,
    pub row: Option<usize>,
}

fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    let count = u32::try_from(count.max(1)).unwrap_or(1);
    Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

fn column_block(position: ColumnPosition) -> Block<'static> {
    let (borders, set) = position.borders();
    Block::default().borders(borders).border_set(set)
}

/// Renders the status columns with the cursor highlighted.
///
/// ```text
/// ╭To Do (3)──────┬In Progress (2)┬Review (2)─────┬Completed (1)─╮
/// │╭────────────╮ │╭────────────╮ │               │              │
/// ```
pub fn render_board(
    columns: &[StatusColumn<'_>],
    cursor: BoardCursor,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area, columns.len());
    for (i, (column, column_area)) in columns.iter().zip(areas).enumerate() {
        let is_focused = cursor.column == i;
        let prev_focused = i > 0 && cursor.column == i - 1;
        let selected = if is_focused { cursor.row } else { None };
        render_column(
            column,
            is_focused,
            prev_focused,
            selected,
            ColumnPosition::of(i, columns.len()),
            today,
            column_area,
            buf,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn render_column(
    column: &StatusColumn<'_>,
    is_focused: bool,
    prev_focused: bool,
    selected: Option<usize>,
    position: ColumnPosition,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let block = column_block(position)
        .title(Span::styled(column.title(), title_style))
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    // The left edge is shared with the previous column.
    if prev_focused && !is_focused && area.width > 0 {
        let highlight = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight);
            }
        }
    }

    if column.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No tasks",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(inner, buf);
        return;
    }

    for (index, card_area) in visible_cards(column.len(), selected, inner) {
        let is_selected = is_focused && selected == Some(index);
        render_task_card(column.tasks[index], is_selected, today, card_area, buf);
    }
}

/// The cards that fit in `inner`, as `(index in column, area)`.
fn visible_cards(len: usize, selected: Option<usize>, inner: Rect) -> Vec<(usize, Rect)> {
    let fit = (inner.height / TASK_CARD_HEIGHT).max(1) as usize;
    let offset = scroll_offset(selected, len, fit);
    (offset..len.min(offset + fit))
        .enumerate()
        .map(|(slot, index)| {
            let y = inner.y + slot as u16 * TASK_CARD_HEIGHT;
            let height = TASK_CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
            (index, Rect::new(inner.x, y, inner.width, height))
        })
        .collect()
}

/// Maps a click to `(column, card)`; the card is `None` for clicks on a
/// column's header or empty space.
#[must_use]
pub fn board_hit(
    columns: &[StatusColumn<'_>],
    cursor: BoardCursor,
    area: Rect,
    x: u16,
    y: u16,
) -> Option<(usize, Option<usize>)> {
    let areas = column_areas(area, columns.len());
    let (index, column_area) = areas
        .into_iter()
        .enumerate()
        .find(|(_, a)| contains(*a, x, y))?;
    let column = columns.get(index)?;
    let inner = column_block(ColumnPosition::of(index, columns.len())).inner(column_area);
    let selected = if cursor.column == index { cursor.row } else { None };
    let card = visible_cards(column.len(), selected, inner)
        .into_iter()
        .find(|(_, card_area)| contains(*card_area, x, y))
        .map(|(card, _)| card);
    Some((index, card))
}
