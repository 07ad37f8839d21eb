//! Controller tests
//!
//! Exercises search, section navigation, detail, favorites, and theme
//! handling against a fake lookup client and a temp-file favorites store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_test::assert_ok;
use movietui::api::{MovieLookup, OmdbError};
use movietui::app::{Section, UserAction};
use movietui::config::Config;
use movietui::controller::Controller;
use movietui::favorites::FavoritesStore;
use movietui::models::{MovieDetail, MovieSummary, ThemePreference};

// =============================================================================
// Fake Lookup Client
// =============================================================================

/// Fake catalog that records every call it receives
#[derive(Clone, Default)]
struct FakeLookup {
    calls: Arc<Mutex<Vec<String>>>,
    search_results: Vec<MovieSummary>,
    search_error: Option<String>,
    by_title: HashMap<String, MovieDetail>,
    by_id: HashMap<String, MovieDetail>,
}

impl FakeLookup {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieLookup for FakeLookup {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        self.calls.lock().unwrap().push(format!("search:{}", query));
        if let Some(msg) = &self.search_error {
            return Err(OmdbError::NotFound(msg.clone()));
        }
        Ok(self.search_results.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<MovieDetail, OmdbError> {
        self.calls.lock().unwrap().push(format!("title:{}", title));
        self.by_title
            .get(title)
            .cloned()
            .ok_or_else(|| OmdbError::NotFound("Movie not found!".to_string()))
    }

    async fn lookup(&self, id: &str, full_plot: bool) -> Result<MovieDetail, OmdbError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("lookup:{}:{}", id, full_plot));
        self.by_id
            .get(id)
            .cloned()
            .ok_or_else(|| OmdbError::NotFound("Movie not found!".to_string()))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "1989".to_string(),
        poster: None,
        rating: None,
    }
}

fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "1989".to_string(),
        poster: None,
        rating: Some(7.5),
        genre: None,
        released: None,
        runtime: None,
        director: None,
        language: None,
        actors: None,
        plot: None,
    }
}

fn temp_store(name: &str) -> (FavoritesStore, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "movietui-controller-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    (FavoritesStore::open(&path), path)
}

fn controller_with(
    fake: FakeLookup,
    store_name: &str,
    config: Config,
) -> (Controller<FakeLookup>, PathBuf) {
    let (store, path) = temp_store(store_name);
    (Controller::new(fake, store, config), path)
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_empty_query_is_rejected_without_network() {
    let fake = FakeLookup::default();
    let (mut controller, _path) = controller_with(fake.clone(), "empty-query", Config::default());

    controller.app.search.query = "   ".to_string();
    controller.dispatch(UserAction::Search).await;

    assert_eq!(
        controller.app.error.as_deref(),
        Some("Please enter a movie name")
    );
    assert!(fake.calls().is_empty());
    assert!(!controller.app.loading.is_loading());
}

#[tokio::test]
async fn test_search_success_populates_results() {
    let fake = FakeLookup {
        search_results: vec![summary("tt0096895", "Batman")],
        ..FakeLookup::default()
    };
    let (mut controller, _path) = controller_with(fake.clone(), "search-ok", Config::default());

    controller.app.section = Section::Trending;
    controller.app.search.query = "batman".to_string();
    controller.dispatch(UserAction::Search).await;

    assert_eq!(controller.app.section, Section::Home);
    assert_eq!(controller.app.search.results.len(), 1);
    assert_eq!(controller.app.search.results[0].imdb_id, "tt0096895");
    assert!(controller.app.error.is_none());
    assert!(!controller.app.loading.is_loading());
    assert_eq!(fake.calls(), vec!["search:batman"]);
}

#[tokio::test]
async fn test_search_failure_shows_message_and_clears_results() {
    let fake = FakeLookup {
        search_error: Some("Movie not found!".to_string()),
        ..FakeLookup::default()
    };
    let (mut controller, _path) = controller_with(fake, "search-fail", Config::default());

    controller.app.search.set_results(vec![summary("tt0000001", "Stale")]);
    controller.app.search.query = "zzzzzzz".to_string();
    controller.dispatch(UserAction::Search).await;

    assert_eq!(controller.app.error.as_deref(), Some("Movie not found!"));
    assert!(controller.app.search.results.is_empty());
    assert!(!controller.app.loading.is_loading());
}

// =============================================================================
// Trending
// =============================================================================

fn trending_config(titles: &[&str]) -> Config {
    Config {
        trending: Some(titles.iter().map(|t| t.to_string()).collect()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_trending_skips_failed_titles_in_order() {
    let mut by_title = HashMap::new();
    by_title.insert("First".to_string(), detail("tt0000001", "First"));
    by_title.insert("Third".to_string(), detail("tt0000003", "Third"));

    let fake = FakeLookup {
        by_title,
        ..FakeLookup::default()
    };
    let config = trending_config(&["First", "Second", "Third"]);
    let (mut controller, _path) = controller_with(fake.clone(), "trending-skip", config);

    controller
        .dispatch(UserAction::SelectSection(Section::Trending))
        .await;

    // The failed middle title is skipped; order is preserved
    let titles: Vec<&str> = controller
        .app
        .trending
        .movies
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First", "Third"]);

    // Requests went out one per title, in curated order
    assert_eq!(
        fake.calls(),
        vec!["title:First", "title:Second", "title:Third"]
    );
}

#[tokio::test]
async fn test_reentering_trending_refetches_every_time() {
    let mut by_title = HashMap::new();
    by_title.insert("Only".to_string(), detail("tt0000001", "Only"));

    let fake = FakeLookup {
        by_title,
        ..FakeLookup::default()
    };
    let config = trending_config(&["Only"]);
    let (mut controller, _path) = controller_with(fake.clone(), "trending-refetch", config);

    controller
        .dispatch(UserAction::SelectSection(Section::Trending))
        .await;
    controller
        .dispatch(UserAction::SelectSection(Section::Trending))
        .await;

    // No cache: each entry re-runs the fetch
    assert_eq!(fake.calls(), vec!["title:Only", "title:Only"]);
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn test_open_detail_fetches_full_plot() {
    let mut by_id = HashMap::new();
    by_id.insert("tt0096895".to_string(), detail("tt0096895", "Batman"));

    let fake = FakeLookup {
        by_id,
        ..FakeLookup::default()
    };
    let (mut controller, _path) = controller_with(fake.clone(), "detail-ok", Config::default());

    controller
        .dispatch(UserAction::OpenDetail("tt0096895".to_string()))
        .await;

    assert_eq!(
        controller.app.current_detail_id.as_deref(),
        Some("tt0096895")
    );
    assert_eq!(
        controller.app.detail.as_ref().map(|d| d.title.as_str()),
        Some("Batman")
    );
    assert_eq!(fake.calls(), vec!["lookup:tt0096895:true"]);
    assert!(!controller.app.loading.is_loading());
}

#[tokio::test]
async fn test_open_detail_failure_surfaces_error() {
    let fake = FakeLookup::default();
    let (mut controller, _path) = controller_with(fake, "detail-fail", Config::default());

    controller
        .dispatch(UserAction::OpenDetail("tt9999999".to_string()))
        .await;

    assert!(controller.app.detail.is_none());
    assert_eq!(
        controller.app.error.as_deref(),
        Some("Failed to load movie details")
    );
}

// =============================================================================
// Favorites
// =============================================================================

#[tokio::test]
async fn test_toggle_favorite_adds_then_removes() {
    let mut by_id = HashMap::new();
    by_id.insert("tt0096895".to_string(), detail("tt0096895", "Batman"));

    let fake = FakeLookup {
        by_id,
        ..FakeLookup::default()
    };
    let (mut controller, path) = controller_with(fake.clone(), "fav-toggle", Config::default());

    controller
        .dispatch(UserAction::ToggleFavorite("tt0096895".to_string()))
        .await;
    assert!(controller.app.favorite_ids.contains("tt0096895"));
    assert_eq!(controller.app.favorites.movies.len(), 1);

    // Adding resolved the record without the long plot
    assert_eq!(fake.calls(), vec!["lookup:tt0096895:false"]);

    // Persisted state matches
    let reloaded = FavoritesStore::open(&path);
    assert!(reloaded.contains("tt0096895"));

    controller
        .dispatch(UserAction::ToggleFavorite("tt0096895".to_string()))
        .await;
    assert!(!controller.app.favorite_ids.contains("tt0096895"));
    assert!(controller.app.favorites.movies.is_empty());

    // Removal needed no further lookup
    assert_eq!(fake.calls().len(), 1);

    let reloaded = FavoritesStore::open(&path);
    assert!(!reloaded.contains("tt0096895"));
}

#[tokio::test]
async fn test_toggle_favorite_failure_leaves_snapshot_unchanged() {
    let fake = FakeLookup::default();
    let (mut controller, path) = controller_with(fake, "fav-fail", Config::default());

    controller
        .dispatch(UserAction::ToggleFavorite("tt0000001".to_string()))
        .await;

    assert_eq!(
        controller.app.error.as_deref(),
        Some("Failed to add to favorites")
    );
    assert!(controller.app.favorite_ids.is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_startup_loads_existing_favorites_snapshot() {
    let (mut store, path) = temp_store("fav-startup");
    let result = store
        .toggle("tt0096895", |_| async { Ok(detail("tt0096895", "Batman")) })
        .await;
    tokio_test::assert_ok!(result);
    drop(store);

    let controller = Controller::new(
        FakeLookup::default(),
        FavoritesStore::open(&path),
        Config::default(),
    );

    assert!(controller.app.favorite_ids.contains("tt0096895"));
    assert_eq!(controller.app.favorites.movies.len(), 1);
}

// =============================================================================
// Theme
// =============================================================================

#[tokio::test]
async fn test_toggle_theme_flips_preference() {
    let (mut controller, _path) =
        controller_with(FakeLookup::default(), "theme", Config::default());

    assert_eq!(controller.app.theme, ThemePreference::Dark);
    controller.dispatch(UserAction::ToggleTheme).await;
    assert_eq!(controller.app.theme, ThemePreference::Light);
    controller.dispatch(UserAction::ToggleTheme).await;
    assert_eq!(controller.app.theme, ThemePreference::Dark);
}
