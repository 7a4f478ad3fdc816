//! System browser integration.
//!
//! Opens web front-end pages (home, answer view, subject page) in the user's
//! default browser.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Where a navigation button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Application root
    Home,
    /// Answer view
    Answer,
    /// A subject's question page
    Subject(u64),
}

impl Destination {
    /// Resolve against the web root.
    ///
    /// # Arguments
    /// * `home_url` - Web root without trailing slash
    pub fn url(self, home_url: &str) -> String {
        match self {
            Destination::Home => format!("{}/", home_url),
            Destination::Answer => format!("{}/list", home_url),
            Destination::Subject(id) => format!("{}/post/{}", home_url, id),
        }
    }
}

const NO_ARGS: &[&str] = &[];
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];

/// Platform opener command and its leading arguments.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

/// Open a URL in the default browser.
///
/// # Arguments
/// * `url` - Page to open
///
/// # Details
/// The opener is spawned and not waited on. Its output is discarded so it
/// cannot draw over the TUI.
pub fn open_url(url: &str) -> Result<()> {
    let (program, args) = opener();
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open {} with {}", url, program))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_urls() {
        let root = "https://openmind.example";
        assert_eq!(Destination::Home.url(root), "https://openmind.example/");
        assert_eq!(Destination::Answer.url(root), "https://openmind.example/list");
        assert_eq!(
            Destination::Subject(42).url(root),
            "https://openmind.example/post/42"
        );
    }
}
