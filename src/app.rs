//! App state and input handling
//!
//! Holds the transient view state (visible section, search box, list
//! selections, open detail) and translates keyboard events into user
//! actions for the controller.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{MovieDetail, MovieSummary, ThemePreference};

// =============================================================================
// Sections
// =============================================================================

/// Top-level navigable panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Search box and search results
    #[default]
    Home,
    /// Curated trending titles
    Trending,
    /// Favorited movies
    Favorites,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading indicator state for in-flight operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Selection State (per-view)
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update length (e.g., when new results come in)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        // Clamp selected to valid range
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Search view state (home section)
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Cursor position in query
    pub cursor: usize,
    /// Search results
    pub results: Vec<MovieSummary>,
    /// Results list state
    pub list: ListState,
}

impl SearchState {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.query.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Set results and update list state
    pub fn set_results(&mut self, results: Vec<MovieSummary>) {
        self.list.set_len(results.len());
        self.results = results;
    }

    /// Get currently selected result
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results.get(self.list.selected)
    }
}

/// Trending view state
#[derive(Debug, Clone, Default)]
pub struct TrendingState {
    /// Resolved trending records, in curated-list order minus failures
    pub movies: Vec<MovieDetail>,
    pub list: ListState,
}

impl TrendingState {
    pub fn set_movies(&mut self, movies: Vec<MovieDetail>) {
        self.list.set_len(movies.len());
        self.movies = movies;
    }

    pub fn selected_movie(&self) -> Option<&MovieDetail> {
        self.movies.get(self.list.selected)
    }
}

/// Favorites view state (snapshot of the store)
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub movies: Vec<MovieDetail>,
    pub list: ListState,
}

impl FavoritesState {
    pub fn set_movies(&mut self, movies: Vec<MovieDetail>) {
        self.list.set_len(movies.len());
        self.movies = movies;
    }

    pub fn selected_movie(&self) -> Option<&MovieDetail> {
        self.movies.get(self.list.selected)
    }
}

// =============================================================================
// User Actions
// =============================================================================

/// User intent produced by input handling, executed by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Submit the current search query
    Search,
    /// Switch to a section, running its entry action
    SelectSection(Section),
    /// Open the detail view for a movie
    OpenDetail(String),
    /// Toggle favorite membership for a movie
    ToggleFavorite(String),
    /// Flip between dark and light themes
    ToggleTheme,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Currently visible section
    pub section: Section,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Loading indicator
    pub loading: LoadingState,
    /// Visible error message
    pub error: Option<String>,
    /// About overlay visibility
    pub about: bool,
    /// Active theme
    pub theme: ThemePreference,

    // View-specific states
    pub search: SearchState,
    pub trending: TrendingState,
    pub favorites: FavoritesState,

    /// Snapshot of favorited ids, kept current by the controller
    pub favorite_ids: HashSet<String>,
    /// Open detail record, if any
    pub detail: Option<MovieDetail>,
    /// Id of the movie the detail view was last opened for
    pub current_detail_id: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            section: Section::Home,
            running: true,
            input_mode: InputMode::Normal,
            loading: LoadingState::Idle,
            error: None,
            about: false,
            theme: ThemePreference::Dark,

            search: SearchState::default(),
            trending: TrendingState::default(),
            favorites: FavoritesState::default(),

            favorite_ids: HashSet::new(),
            detail: None,
            current_detail_id: None,
        }
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Focus the search box
    pub fn focus_search(&mut self) {
        self.about = false;
        self.input_mode = InputMode::Editing;
    }

    /// Close the detail overlay
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Id of the movie selected in the visible list
    pub fn selected_id(&self) -> Option<String> {
        match self.section {
            Section::Home => self.search.selected_movie().map(|m| m.imdb_id.clone()),
            Section::Trending => self.trending.selected_movie().map(|m| m.imdb_id.clone()),
            Section::Favorites => self.favorites.selected_movie().map(|m| m.imdb_id.clone()),
        }
    }

    fn active_list(&mut self) -> &mut ListState {
        match self.section {
            Section::Home => &mut self.search.list,
            Section::Trending => &mut self.trending.list,
            Section::Favorites => &mut self.favorites.list,
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a keyboard event, returning an action for the controller
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        // Clear error on any keypress
        self.error = None;

        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                Some(UserAction::Search)
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.search.backspace();
                None
            }
            KeyCode::Delete => {
                self.search.delete();
                None
            }
            KeyCode::Left => {
                self.search.cursor_left();
                None
            }
            KeyCode::Right => {
                self.search.cursor_right();
                None
            }
            KeyCode::Home => {
                self.search.cursor_home();
                None
            }
            KeyCode::End => {
                self.search.cursor_end();
                None
            }
            _ => None,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                None
            }
            KeyCode::Esc => {
                if self.detail.is_some() {
                    self.close_detail();
                } else if self.about {
                    self.about = false;
                }
                None
            }
            KeyCode::Char('a') => {
                // Static informational overlay; no section change
                self.about = !self.about;
                None
            }
            KeyCode::Char('c') => Some(UserAction::ToggleTheme),
            KeyCode::Char('h') | KeyCode::Char('1') => {
                Some(UserAction::SelectSection(Section::Home))
            }
            KeyCode::Char('t') | KeyCode::Char('2') => {
                Some(UserAction::SelectSection(Section::Trending))
            }
            KeyCode::Char('f') | KeyCode::Char('3') => {
                Some(UserAction::SelectSection(Section::Favorites))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.active_list().up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.active_list().down();
                None
            }
            KeyCode::PageUp => {
                self.active_list().page_up(10);
                None
            }
            KeyCode::PageDown => {
                self.active_list().page_down(10);
                None
            }
            KeyCode::Home => {
                self.active_list().first();
                None
            }
            KeyCode::End => {
                self.active_list().last();
                None
            }
            KeyCode::Enter => {
                if self.detail.is_some() {
                    None
                } else {
                    self.selected_id().map(UserAction::OpenDetail)
                }
            }
            KeyCode::Char('v') | KeyCode::Char(' ') => self
                .current_favorite_target()
                .map(UserAction::ToggleFavorite),
            _ => None,
        }
    }

    /// The movie a favorite toggle applies to: the open detail if any,
    /// otherwise the selected list entry
    fn current_favorite_target(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.imdb_id.clone());
        }
        self.selected_id()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
