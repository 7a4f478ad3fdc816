//! UI components module.
//!
//! Contains ratatui widgets for displaying the list page.

pub mod cards;
pub mod header;
pub mod pagination;
pub mod status;

use crate::app::{ListPage, RenderState};
use crate::layout::SizeClass;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub use cards::render_cards;
pub use header::{render_nav, render_title};
pub use pagination::render_pagination;
pub use status::{render_empty, render_loading};

/// Per-frame inputs that are not part of the page state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Animation tick for the loader
    pub tick: u64,
    /// Whether navigation buttons have a target
    pub home_enabled: bool,
    /// Current viewport bucket
    pub size_class: SizeClass,
    /// Transient status line
    pub status: Option<&'a str>,
}

/// Render the complete list page.
///
/// # Details
/// Header and title are always shown. The body shows exactly one of the
/// loading, empty or populated views, picked from [`ListPage::render_state`].
pub fn render_ui(f: &mut Frame, page: &ListPage, ctx: ViewContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Length(2), // Title + sort
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_nav(chunks[0], f.buffer_mut(), ctx.home_enabled);
    render_title(page, chunks[1], f.buffer_mut());

    let body = chunks[2];
    match page.render_state() {
        RenderState::Loading => render_loading(ctx.tick, body, f.buffer_mut()),
        RenderState::Empty => render_empty(ctx.home_enabled, body, f.buffer_mut()),
        RenderState::Populated => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(body);
            let sorted = page.sorted_items();
            render_cards(
                &sorted,
                page.selected(),
                ctx.size_class.columns(),
                parts[0],
                f.buffer_mut(),
            );
            render_pagination(
                page.current_page(),
                page.total_pages(),
                parts[1],
                f.buffer_mut(),
            );
        }
    }

    let status_text = ctx.status.unwrap_or(
        "q quit · s sort · ←/→ page · ↑/↓ select · Enter open · r reload · a answer · h home",
    );
    let status = Paragraph::new(Line::from(status_text))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Subject, SubjectPage};
    use crate::app::PageEvent;
    use chrono::{TimeZone, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(page: &ListPage) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                render_ui(
                    f,
                    page,
                    ViewContext {
                        tick: 0,
                        home_enabled: true,
                        size_class: SizeClass::Wide,
                        status: None,
                    },
                )
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_view() {
        let page = ListPage::new();
        assert!(draw(&page).contains("● ○ ○"));
    }

    #[test]
    fn test_empty_view() {
        let mut page = ListPage::new();
        let req = page.handle(PageEvent::Mount).unwrap();
        page.handle(PageEvent::Loaded {
            token: req.token,
            limit: req.query.limit,
            outcome: Ok(SubjectPage::default()),
        });
        assert!(draw(&page).contains("┌───────┐"));
    }

    #[test]
    fn test_populated_view() {
        let mut page = ListPage::new();
        let req = page.handle(PageEvent::Mount).unwrap();
        let subject = Subject {
            id: 1,
            name: "Haneul".to_string(),
            image_source: None,
            question_count: 4,
            created_at: Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap(),
        };
        page.handle(PageEvent::Loaded {
            token: req.token,
            limit: req.query.limit,
            outcome: Ok(SubjectPage {
                count: 1,
                results: Some(vec![subject]),
            }),
        });
        let text = draw(&page);
        assert!(text.contains("Haneul"));
        assert!(text.contains(" 1 "));
    }
}
