//! MovieTUI - terminal movie explorer with favorites
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! movietui
//!
//! # CLI mode (for automation)
//! movietui search "batman"
//! movietui info tt0096895 --full-plot
//! movietui favorite tt0096895
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use movietui::api::OmdbClient;
use movietui::app::{App, InputMode, Section};
use movietui::cli::{validate_imdb_id, Cli, Command, ExitCode, Output};
use movietui::commands;
use movietui::config::Config;
use movietui::controller::Controller;
use movietui::favorites::FavoritesStore;
use movietui::logger;
use movietui::ui::{cards, detail, Palette};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; the terminal belongs to the TUI
    let _ = logger::init();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output).await,

        Some(Command::Trending(cmd)) => commands::trending_cmd(cmd, &output).await,

        Some(Command::Info(cmd)) => {
            if let Err(e) = validate_imdb_id(&cmd.imdb_id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::info_cmd(cmd, &output).await
        }

        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd, &output).await,

        Some(Command::Favorite(cmd)) => {
            if let Err(e) = validate_imdb_id(&cmd.imdb_id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::favorite_cmd(cmd, &output).await
        }

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let config = Config::load();
    let client = OmdbClient::new(config.omdb_api_key());
    let favorites_path = FavoritesStore::default_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let favorites = FavoritesStore::open(favorites_path);

    let mut controller = Controller::new(client, favorites, config);

    let mut terminal = init_terminal()?;

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut controller).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
///
/// Single-threaded and cooperative: dispatched actions are awaited in
/// place, so a trending load finishes title by title before the next
/// frame is drawn.
async fn run_event_loop(terminal: &mut Tui, controller: &mut Controller<OmdbClient>) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while controller.app.running {
        terminal.draw(|frame| render_ui(frame, &controller.app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = controller.app.handle_key(key) {
                        controller.dispatch(action).await;
                    }
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to view-specific renderers
fn render_ui(frame: &mut Frame, app: &App) {
    let palette = Palette::for_preference(app.theme);
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(palette.background)),
        area,
    );

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app, &palette);
    render_content(frame, chunks[1], app, &palette);
    render_status_bar(frame, chunks[2], app, &palette);

    // Overlays
    if let Some(ref record) = app.detail {
        let is_favorite = app.favorite_ids.contains(&record.imdb_id);
        detail::render_detail(frame, area, record, is_favorite, &palette);
    }
    if app.about {
        render_about_popup(frame, area, &palette);
    }
    if let Some(ref error) = app.error {
        render_error_popup(frame, area, error, &palette);
    }
}

/// Render the header with logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    // Logo
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "MOVIE",
            ratatui::style::Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            ratatui::style::Style::default()
                .fg(palette.favorite)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    // Search box
    let search_style = if app.input_mode == InputMode::Editing {
        palette.border_focused()
    } else {
        palette.border()
    };

    let search_text = if app.input_mode == InputMode::Editing {
        let query = &app.search.query;
        let cursor = app.search.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Type / to search...".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let search_box = Paragraph::new(search_text)
        .style(if app.input_mode == InputMode::Editing {
            palette.input().fg(palette.primary)
        } else {
            palette.input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(search_style)
                .title(Span::styled(" SEARCH ", palette.title())),
        );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Render the main content area based on the visible section
fn render_content(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    // Loading indicator sits above the section content, not instead of it
    let area = if app.loading.is_loading() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);
        let loading = Paragraph::new(format!("⟳ {}", app.loading.message().unwrap_or("Loading...")))
            .style(palette.loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, chunks[0]);
        chunks[1]
    } else {
        area
    };

    match app.section {
        Section::Home => render_home(frame, area, app, palette),
        Section::Trending => {
            let summaries: Vec<_> = app.trending.movies.iter().map(|m| m.summary()).collect();
            let built = cards::build_cards(&summaries, &app.favorite_ids);
            cards::render_card_list(
                frame,
                area,
                "TRENDING",
                &built,
                app.trending.list.selected,
                "No trending titles loaded",
                palette,
            );
        }
        Section::Favorites => {
            let summaries: Vec<_> = app.favorites.movies.iter().map(|m| m.summary()).collect();
            let built = cards::build_cards(&summaries, &app.favorite_ids);
            cards::render_card_list(
                frame,
                area,
                "FAVORITES",
                &built,
                app.favorites.list.selected,
                "No favorites yet - press v on any movie",
                palette,
            );
        }
    }
}

/// Render home: welcome screen, or search results once a query ran
fn render_home(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if app.search.results.is_empty() && app.search.query.is_empty() {
        render_welcome(frame, area, palette);
        return;
    }

    let built = cards::build_cards(&app.search.results, &app.favorite_ids);
    cards::render_card_list(
        frame,
        area,
        &format!("Search Results for \"{}\"", app.search.query),
        &built,
        app.search.list.selected,
        "No results found",
        palette,
    );
}

/// Render the welcome screen with quick-start keys
fn render_welcome(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .title(Span::styled(" 🎬 MOVIE EXPLORER ", palette.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let keybind = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {}  ", key), palette.keybind()),
            Span::styled(action, palette.dimmed()),
        ])
    };

    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Welcome to ", palette.text()),
            Span::styled(
                "MovieTUI",
                ratatui::style::Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Your gateway to discovering amazing movies",
            palette.dimmed(),
        )),
        Line::from(""),
        Line::from(""),
        keybind("/", "Search for movies"),
        keybind("t", "Trending picks"),
        keybind("f", "Your favorites"),
        keybind("v", "Toggle favorite"),
        keybind("c", "Switch theme"),
        keybind("q", "Quit"),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(help, inner);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            ratatui::style::Style::default()
                .fg(palette.background)
                .bg(palette.primary),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            ratatui::style::Style::default()
                .fg(palette.background)
                .bg(palette.favorite),
        ),
    };

    let section_name = match app.section {
        Section::Home => "HOME",
        Section::Trending => "TRENDING",
        Section::Favorites => "FAVORITES",
    };
    let section_indicator = Span::styled(format!(" {} ", section_name), palette.dimmed());

    let theme_indicator = Span::styled(format!(" {} ", app.theme.indicator()), palette.text());

    let help = Span::styled(
        " q:quit  /:search  h/t/f:sections  v:favorite  c:theme  a:about ",
        palette.dimmed(),
    );

    let status_line = Line::from(vec![
        mode_indicator,
        section_indicator,
        theme_indicator,
        Span::raw(" │ "),
        help,
    ]);

    let status = Paragraph::new(status_line).style(palette.status_bar());
    frame.render_widget(status, area);
}

/// Render the static about overlay
fn render_about_popup(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_width = 58.min(area.width.saturating_sub(4));
    let popup_height = 5;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let about = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Movie Explorer - Your gateway to discovering amazing movies!",
            palette.text(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_focused())
            .title(Span::styled(" ABOUT ", palette.title()))
            .style(ratatui::style::Style::default().bg(palette.surface)),
    );

    frame.render_widget(about, popup_area);
}

/// Render error popup overlay
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str, palette: &Palette) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 5;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let error_block = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(error, palette.error())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(palette.error())
            .title(Span::styled(" ✗ ERROR ", palette.error()))
            .style(ratatui::style::Style::default().bg(palette.surface)),
    );

    frame.render_widget(error_block, popup_area);
}
