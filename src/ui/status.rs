//! Loading and empty state rendering.

use crate::ui::header::BRAND;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LOADER_DOTS: usize = 3;

/// Dots of the beat loader for a given animation tick.
pub fn loader_frame(tick: u64) -> String {
    let lit = (tick % LOADER_DOTS as u64) as usize;
    (0..LOADER_DOTS)
        .map(|i| if i == lit { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the loading state.
///
/// # Arguments
/// * `tick` - Animation tick
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_loading(tick: u64, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(loader_frame(tick), Style::default().fg(BRAND))),
        Line::from(""),
        Line::from(Span::styled(
            "데이터를 불러오고 있습니다.",
            Style::default().fg(Color::Gray),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Render the empty state.
///
/// # Arguments
/// * `home_enabled` - Whether the main page button can be used
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the message, an empty box and the "go to main page" button.
/// The button is drawn disabled when no home URL is configured.
pub fn render_empty(home_enabled: bool, area: Rect, buf: &mut Buffer) {
    let button_style = if home_enabled {
        Style::default()
            .fg(Color::White)
            .bg(BRAND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✉ 아직 답변자가 없습니다.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("┌───────┐", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("│       │", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("└───────┘", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(" 메인페이지로 이동하기 (Enter) ", button_style)),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
