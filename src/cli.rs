//! CLI - Command Line Interface for MovieTUI
//!
//! Every TUI operation is also scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Search the catalog
//! movietui search "batman" --json
//!
//! # Full record and favorites
//! movietui info tt0096895 --full-plot
//! movietui favorite tt0096895
//! movietui favorites
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Upstream had no matching record
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// MovieTUI - terminal movie explorer with favorites
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "movietui",
    version,
    about = "Terminal movie explorer with favorites",
    long_about = "Search the OMDb catalog, browse trending picks, and keep a \
                  durable favorites list.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  movietui                       Launch interactive TUI\n\
                  movietui search \"batman\"       Search the catalog\n\
                  movietui info tt0096895        Show a full record\n\
                  movietui favorite tt0096895    Toggle a favorite"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Fetch the curated trending titles
    #[command(visible_alias = "tr")]
    Trending(TrendingCmd),

    /// Show the full record for a movie
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List favorited movies
    #[command(visible_alias = "favs")]
    Favorites(FavoritesCmd),

    /// Toggle favorite membership for a movie
    #[command(visible_alias = "fav")]
    Favorite(FavoriteCmd),
}

/// Search the catalog by query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Fetch the curated trending titles
#[derive(Args, Debug)]
pub struct TrendingCmd {}

/// Show the full record for a movie
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// IMDb id (e.g., tt0096895)
    #[arg(required = true)]
    pub imdb_id: String,

    /// Fetch the long-form plot
    #[arg(long)]
    pub full_plot: bool,
}

/// List favorited movies
#[derive(Args, Debug)]
pub struct FavoritesCmd {}

/// Toggle favorite membership for a movie
#[derive(Args, Debug)]
pub struct FavoriteCmd {
    /// IMDb id (e.g., tt0096895)
    #[arg(required = true)]
    pub imdb_id: String,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Result of a favorite toggle
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub imdb_id: String,
    pub favorite: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// IMDb ID Validation
// =============================================================================

/// Validate IMDb id format (tt followed by digits)
pub fn validate_imdb_id(id: &str) -> Result<&str, &'static str> {
    if id.starts_with("tt") && id.len() >= 9 && id[2..].chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid IMDb id format (expected tt followed by 7+ digits)")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>([]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from(["movietui", "search", "batman"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Search(cmd)) = cli.command {
            assert_eq!(cmd.query, "batman");
            assert_eq!(cmd.limit, 20); // default
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_info_command() {
        let cli = Cli::parse_from(["movietui", "info", "tt0096895", "--full-plot"]);
        if let Some(Command::Info(cmd)) = cli.command {
            assert_eq!(cmd.imdb_id, "tt0096895");
            assert!(cmd.full_plot);
        } else {
            panic!("Expected Info command");
        }
    }

    #[test]
    fn test_favorite_command() {
        let cli = Cli::parse_from(["movietui", "favorite", "tt0096895"]);
        if let Some(Command::Favorite(cmd)) = cli.command {
            assert_eq!(cmd.imdb_id, "tt0096895");
        } else {
            panic!("Expected Favorite command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["movietui", "--json", "--quiet", "search", "test"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_validate_imdb_id() {
        assert!(validate_imdb_id("tt0096895").is_ok());
        assert!(validate_imdb_id("tt12345678").is_ok());
        assert!(validate_imdb_id("tt12345").is_err()); // too short
        assert!(validate_imdb_id("nm1234567").is_err()); // wrong prefix
        assert!(validate_imdb_id("0096895").is_err()); // no prefix
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }
}
