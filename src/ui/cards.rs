//! Subject card grid rendering.
//!
//! Lays the sorted subjects out as a grid of bordered cards with selection
//! highlighting.

use crate::api::Subject;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Height of one card including borders.
pub const CARD_HEIGHT: u16 = 6;

/// Render the card grid.
///
/// # Arguments
/// * `subjects` - Subjects in display order
/// * `selected` - Index of the selected subject
/// * `columns` - Cards per row
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each card shows:
/// - Line 1: avatar initial and name (bold)
/// - Line 2: creation date
/// - Line 3: received question count
///
/// Rows that do not fit in `area` are skipped.
pub fn render_cards(
    subjects: &[Subject],
    selected: usize,
    columns: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    let columns = columns.max(1) as usize;
    let rows = subjects.len().div_ceil(columns);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    // Keep the selected card's row on screen
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (slot, row) in (first_row..rows).take(visible_rows).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[slot]);

        for (col, cell) in cells.iter().enumerate() {
            let idx = row * columns + col;
            if let Some(subject) = subjects.get(idx) {
                render_card(subject, idx == selected, *cell, buf);
            }
        }
    }
}

fn render_card(subject: &Subject, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let initial = subject.name.chars().next().unwrap_or('?');
    let name_style = Style::default()
        .fg(if is_selected {
            Color::Yellow
        } else {
            Color::White
        })
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", initial),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(subject.name.as_str(), name_style),
        ]),
        Line::from(Span::styled(
            subject.format_date(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("✉ {}", subject.format_question_count()),
            Style::default().fg(Color::Magenta),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn subject(id: u64, name: &str) -> Subject {
        Subject {
            id,
            name: name.to_string(),
            image_source: None,
            question_count: id * 2,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_all_cards_that_fit() {
        let subjects: Vec<Subject> = (1..=8).map(|i| subject(i, &format!("name{}", i))).collect();
        let area = Rect::new(0, 0, 100, CARD_HEIGHT * 2);
        let mut buf = Buffer::empty(area);
        render_cards(&subjects, 0, 4, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("name1"));
        assert!(text.contains("name8"));
    }

    #[test]
    fn test_scrolls_to_selected_row() {
        let subjects: Vec<Subject> = (1..=6).map(|i| subject(i, &format!("name{}", i))).collect();
        let area = Rect::new(0, 0, 90, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_cards(&subjects, 4, 3, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("name5"));
        assert!(!text.contains("name1"));
    }
}
