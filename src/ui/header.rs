//! Header widget rendering.
//!
//! Displays the logo bar with the answer button, the page title and the
//! sort selector.

use crate::api::SortOrder;
use crate::app::ListPage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Brand colour used for the logo and the answer button.
pub const BRAND: Color = Color::Rgb(0x54, 0x2F, 0x1A);

/// Render the navigation bar.
///
/// # Arguments
/// * `area` - Area to render in (2 rows)
/// * `buf` - Buffer to render to
/// * `home_enabled` - Whether navigation targets are configured
///
/// # Details
/// Logo on the left, answer button on the right. Both are dimmed when no
/// home URL is configured.
pub fn render_nav(area: Rect, buf: &mut Buffer, home_enabled: bool) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    block.render(area, buf);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("Open", Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
        Span::styled("Mind", Style::default().fg(BRAND).add_modifier(Modifier::ITALIC)),
    ]));
    logo.render(halves[0], buf);

    let button_style = if home_enabled {
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(vec![
        Span::styled("[ 답변하러 가기 → ]", button_style),
        Span::styled(" (a)", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    button.render(halves[1], buf);
}

/// Render the title line with the sort selector.
///
/// # Arguments
/// * `page` - List page state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows both sort orders side by side and highlights the active one.
pub fn render_title(page: &ListPage, area: Rect, buf: &mut Buffer) {
    let active = page.sort_order();
    let mut spans = vec![
        Span::styled(
            "누구에게 질문할까요?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for (i, order) in [SortOrder::CreatedAt, SortOrder::Name].into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let (text, style) = if order == active {
            (
                format!("▾ {}", order.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (format!("  {}", order.label()), Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(text, style));
    }
    spans.push(Span::styled("  (s)", Style::default().fg(Color::DarkGray)));
    if page.total_count() > 0 {
        spans.push(Span::styled(
            format!("   총 {}명", page.total_count()),
            Style::default().fg(Color::Gray),
        ));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}
