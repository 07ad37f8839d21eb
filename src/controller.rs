//! View controller
//!
//! Sequences user intents into the query client, the favorites store,
//! and the view state. Owns the only mutable copy of the section and
//! detail-id fields; the renderer only reads the resulting [`App`].

use log::{debug, info, warn};

use crate::api::{MovieLookup, OmdbError};
use crate::app::{App, LoadingState, Section, UserAction};
use crate::config::Config;
use crate::favorites::FavoritesStore;

/// Validation message for an empty search query
const EMPTY_QUERY_MESSAGE: &str = "Please enter a movie name";
/// Generic message for transport and parse failures
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again.";
/// Message when the detail fetch fails
const DETAIL_FAILED_MESSAGE: &str = "Failed to load movie details";
/// Message when resolving a new favorite fails
const FAVORITE_FAILED_MESSAGE: &str = "Failed to add to favorites";

/// Orchestrates the app state against the injected collaborators
pub struct Controller<C: MovieLookup> {
    pub app: App,
    client: C,
    favorites: FavoritesStore,
    config: Config,
}

impl<C: MovieLookup> Controller<C> {
    pub fn new(client: C, favorites: FavoritesStore, config: Config) -> Self {
        let mut app = App::new();
        app.theme = config.theme;
        let mut controller = Self {
            app,
            client,
            favorites,
            config,
        };
        controller.refresh_favorites();
        controller
    }

    /// Execute a user action produced by input handling
    pub async fn dispatch(&mut self, action: UserAction) {
        match action {
            UserAction::Search => self.on_search().await,
            UserAction::SelectSection(section) => self.on_select_section(section).await,
            UserAction::OpenDetail(id) => self.on_open_detail(&id).await,
            UserAction::ToggleFavorite(id) => self.on_toggle_favorite(&id).await,
            UserAction::ToggleTheme => self.on_toggle_theme(),
        }
    }

    /// Run the current search query
    ///
    /// Empty and whitespace-only queries are rejected locally, without a
    /// network call. The loading indicator is cleared on every outcome.
    pub async fn on_search(&mut self) {
        let query = self.app.search.query.trim().to_string();
        if query.is_empty() {
            self.app.error = Some(EMPTY_QUERY_MESSAGE.to_string());
            return;
        }

        self.app.section = Section::Home;
        self.app.error = None;
        self.app.loading = LoadingState::Loading(Some(format!("Searching for \"{}\"...", query)));

        match self.client.search(&query).await {
            Ok(results) => {
                debug!("search \"{}\" returned {} results", query, results.len());
                self.app.search.set_results(results);
            }
            Err(e) => {
                warn!("search \"{}\" failed: {}", query, e);
                self.app.search.set_results(Vec::new());
                self.app.error = Some(user_message(&e));
            }
        }

        self.app.loading = LoadingState::Idle;
    }

    /// Switch to a section and run its entry action
    ///
    /// Re-entering the visible section re-runs the entry action; trending
    /// in particular is re-fetched every time, never cached.
    pub async fn on_select_section(&mut self, section: Section) {
        self.app.section = section;
        match section {
            Section::Home => {}
            Section::Trending => self.load_trending().await,
            Section::Favorites => self.refresh_favorites(),
        }
    }

    /// Fetch the curated trending titles, strictly one at a time
    ///
    /// Failed titles are skipped; the panel shows whatever resolved, in
    /// curated-list order.
    async fn load_trending(&mut self) {
        let titles = self.config.trending_titles();
        let mut movies = Vec::with_capacity(titles.len());
        for title in &titles {
            match self.client.find_by_title(title).await {
                Ok(detail) => movies.push(detail),
                Err(e) => warn!("skipping trending title \"{}\": {}", title, e),
            }
        }
        debug!("trending resolved {}/{} titles", movies.len(), titles.len());
        self.app.trending.set_movies(movies);
    }

    /// Open the detail view for a movie, fetching the full-plot record
    pub async fn on_open_detail(&mut self, id: &str) {
        self.app.current_detail_id = Some(id.to_string());
        self.app.loading = LoadingState::Loading(None);

        match self.client.lookup(id, true).await {
            Ok(detail) => self.app.detail = Some(detail),
            Err(e) => {
                warn!("detail fetch for {} failed: {}", id, e);
                self.app.error = Some(DETAIL_FAILED_MESSAGE.to_string());
            }
        }

        self.app.loading = LoadingState::Idle;
    }

    /// Toggle favorite membership for a movie
    ///
    /// On success the favorites snapshot is refreshed, so every visible
    /// list and an open detail view for this id render the new state.
    pub async fn on_toggle_favorite(&mut self, id: &str) {
        let client = &self.client;
        let result = self
            .favorites
            .toggle(id, |movie_id| async move {
                client.lookup(&movie_id, false).await
            })
            .await;

        match result {
            Ok(()) => self.refresh_favorites(),
            Err(e) => {
                warn!("favorite toggle for {} failed: {}", id, e);
                self.app.error = Some(FAVORITE_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Flip the theme and persist the preference
    pub fn on_toggle_theme(&mut self) {
        self.app.theme = self.app.theme.toggled();
        self.config.theme = self.app.theme;
        if let Err(e) = self.config.save() {
            warn!("could not persist theme preference: {}", e);
        }
        info!("theme switched to {}", self.app.theme);
    }

    /// Rebuild the favorites snapshot the renderer reads
    fn refresh_favorites(&mut self) {
        self.app.favorite_ids = self.favorites.ids();
        self.app.favorites.set_movies(self.favorites.entries().to_vec());
    }
}

/// Map an API error onto the message shown in the error indicator
fn user_message(err: &OmdbError) -> String {
    match err {
        OmdbError::NotFound(msg) => msg.clone(),
        _ => FETCH_FAILED_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_propagates_not_found() {
        let err = OmdbError::NotFound("Too many results.".to_string());
        assert_eq!(user_message(&err), "Too many results.");
    }

    #[test]
    fn test_user_message_generic_for_parse_failures() {
        let err = OmdbError::InvalidResponse("JSON parse error".to_string());
        assert_eq!(user_message(&err), FETCH_FAILED_MESSAGE);
    }
}
