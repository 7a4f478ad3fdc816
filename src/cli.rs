use std::path::PathBuf;

use clap::Parser;

/// Browse subjects of a question/answer service in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Config file path (defaults to $XDG_CONFIG_HOME/subject-tui/config.jsonc)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the team namespace
    #[arg(short, long)]
    pub team: Option<String>,
}
