//! Subject TUI - terminal front-end for browsing question/answer subjects.
//!
//! Main entry point and event loop for the application.

mod api;
mod app;
mod browser;
mod cli;
mod collate;
mod config;
mod error;
mod fetcher;
mod layout;
mod logging;
mod ui;

use api::SubjectClient;
use app::{ListPage, PageEvent, RenderState};
use browser::{Destination, open_url};
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, window_size,
    },
};
use fetcher::{Fetcher, dispatch};
use layout::{SizeClass, viewport_width_px};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};
use ui::ViewContext;

/// What a key press asks the loop to do.
#[derive(Debug)]
enum Command {
    Quit,
    Page(PageEvent),
    /// Enter: open the selected subject, or go home from the empty view
    Activate,
    Navigate(Destination),
}

/// Main application entry point.
///
/// # Details
/// Loads configuration, installs file logging, sets up the terminal and runs
/// the event loop. The terminal is restored even when the loop fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.base_url, cli.team);

    if config.team.trim().is_empty() {
        let config_path = match cli.config {
            Some(path) => path,
            None => Config::default_config_path()?,
        };
        eprintln!("Error: a team namespace is required.");
        if Config::write_starter(&config_path)? {
            eprintln!("Wrote a starter config to {}.", config_path.display());
        }
        eprintln!("Set \"team\" in {} or pass --team.", config_path.display());
        return Err(anyhow::anyhow!("Team not configured"));
    }

    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), base_url = %config.base_url, team = %config.team, "starting");

    let client = SubjectClient::new(&config)?;
    let (tx, rx) = mpsc::unbounded_channel();
    let mut fetcher = Fetcher::new(Arc::new(client), tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut fetcher, rx, &config).await;
    fetcher.abort_all();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

/// Current viewport width in logical pixels.
fn current_width(columns: u16, config: &Config) -> u32 {
    viewport_width_px(window_size().ok(), columns, config.cell_width_px)
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `fetcher` - Runs fetches in the background
/// * `rx` - Fetch completions
/// * `config` - Configuration
///
/// # Details
/// Drains completed fetches, redraws, then polls for input with a 100 ms
/// timeout so the loader keeps animating.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    fetcher: &mut Fetcher,
    mut rx: UnboundedReceiver<PageEvent>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut page = ListPage::new();
    let mut tick: u64 = 0;
    let mut status: Option<String> = None;

    // The initial size is applied before the first fetch, so only one request goes out.
    let width = current_width(terminal.size()?.width, config);
    let mut size_class = SizeClass::from_width(width);
    page.set_viewport(width);
    dispatch(&mut page, fetcher, PageEvent::Mount);

    loop {
        while let Ok(event) = rx.try_recv() {
            dispatch(&mut page, fetcher, event);
        }

        terminal.draw(|f| {
            ui::render_ui(
                f,
                &page,
                ViewContext {
                    tick,
                    home_enabled: config.home_url().is_some(),
                    size_class,
                    status: status.as_deref(),
                },
            )
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(command) = map_key(key) else {
                        continue;
                    };
                    status = None;
                    match command {
                        Command::Quit => break,
                        Command::Page(event) => dispatch(&mut page, fetcher, event),
                        Command::Activate => {
                            let destination = match page.render_state() {
                                RenderState::Populated => {
                                    page.selected_subject().map(|s| Destination::Subject(s.id))
                                }
                                RenderState::Empty => Some(Destination::Home),
                                RenderState::Loading => None,
                            };
                            if let Some(destination) = destination {
                                status = navigate(config, destination);
                            }
                        }
                        Command::Navigate(destination) => {
                            status = navigate(config, destination);
                        }
                    }
                }
                Event::Resize(columns, _) => {
                    let width = current_width(columns, config);
                    size_class = SizeClass::from_width(width);
                    dispatch(&mut page, fetcher, PageEvent::Resize(width));
                }
                _ => {}
            }
        }
        tick = tick.wrapping_add(1);
    }

    Ok(())
}

/// Map a key press to a loop command.
fn map_key(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('s') | KeyCode::Tab => Command::Page(PageEvent::ToggleSortOrder),
        KeyCode::Left | KeyCode::Char('p') => Command::Page(PageEvent::PrevPage),
        KeyCode::Right | KeyCode::Char('n') => Command::Page(PageEvent::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Command::Page(PageEvent::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Command::Page(PageEvent::LastPage),
        KeyCode::Up | KeyCode::Char('k') => Command::Page(PageEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Command::Page(PageEvent::SelectNext),
        KeyCode::Char('r') => Command::Page(PageEvent::Reload),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Command::Page(PageEvent::SetPage(c.to_digit(10).unwrap_or(1)))
        }
        KeyCode::Enter => Command::Activate,
        KeyCode::Char('a') => Command::Navigate(Destination::Answer),
        KeyCode::Char('h') => Command::Navigate(Destination::Home),
        _ => return None,
    };
    Some(command)
}

/// Open a destination in the browser.
///
/// # Returns
/// * `Option<String>` - Status message to show
fn navigate(config: &Config, destination: Destination) -> Option<String> {
    let Some(home_url) = config.home_url() else {
        return Some("home_url is not configured".to_string());
    };
    let url = destination.url(home_url);
    match open_url(&url) {
        Ok(()) => {
            info!(%url, "opened in browser");
            Some(format!("Opened: {}", url))
        }
        Err(e) => {
            warn!("failed to open {}: {:#}", url, e);
            Some(format!("Failed to open browser: {}", e))
        }
    }
}
