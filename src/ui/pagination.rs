//! Pagination control rendering.
//!
//! Displays first/previous arrows, a window of page numbers around the
//! current page, and next/last arrows.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Pages shown in the control.
///
/// # Arguments
/// * `current` - Current page (one-based)
/// * `total` - Total page count
/// * `width` - Maximum number of page buttons
///
/// # Returns
/// * `RangeInclusive<u32>` - Window centred on `current` where possible,
///   shifted to stay inside `1..=total`. `1..=1` when there are no pages.
pub fn page_window(current: u32, total: u32, width: u32) -> RangeInclusive<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);

    let half = width / 2;
    let start = current.saturating_sub(half).max(1);
    let start = start.min(total - width + 1);
    start..=start + width - 1
}

/// Render the pagination control.
///
/// # Arguments
/// * `current` - Current page
/// * `total` - Total page count
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_pagination(current: u32, total: u32, area: Rect, buf: &mut Buffer) {
    let at_start = current <= 1;
    let at_end = current >= total;
    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![
        Span::styled("«", arrow(!at_start)),
        Span::raw(" "),
        Span::styled("‹", arrow(!at_start)),
        Span::raw("  "),
    ];

    for page in page_window(current, total, PAGE_WINDOW) {
        let style = if page == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", page), style));
        spans.push(Span::raw(" "));
    }

    spans.extend([
        Span::raw(" "),
        Span::styled("›", arrow(!at_end)),
        Span::raw(" "),
        Span::styled("»", arrow(!at_end)),
    ]);

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centred() {
        assert_eq!(page_window(5, 10, 5), 3..=7);
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(page_window(1, 10, 5), 1..=5);
        assert_eq!(page_window(2, 10, 5), 1..=5);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(9, 10, 5), 6..=10);
    }

    #[test]
    fn test_window_fewer_pages_than_width() {
        assert_eq!(page_window(2, 3, 5), 1..=3);
        assert_eq!(page_window(1, 0, 5), 1..=1);
    }

    #[test]
    fn test_render_highlights_current() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        render_pagination(2, 3, area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 3 "));
    }
}
