//! MovieTUI - terminal movie explorer with favorites
//!
//! Search the OMDb catalog, browse a curated trending list, and keep a
//! durable favorites list, all from the terminal.
//!
//! # Modules
//!
//! - `models` - Movie records and the persisted theme preference
//! - `api` - OMDb client and the lookup trait the controller depends on
//! - `favorites` - Favorites list mirrored to a JSON file
//! - `config` - Config file, API key resolution, trending titles
//! - `app` - View state and keyboard handling
//! - `controller` - Wires user actions to the client, store, and view state
//! - `ui` - Pure ratatui rendering (cards, detail, palettes)
//! - `cli` / `commands` - Scriptable command surface
//! - `logger` - File logging setup

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod favorites;
pub mod logger;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{MovieLookup, OmdbClient, OmdbError};
pub use app::{App, Section, UserAction};
pub use controller::Controller;
pub use favorites::FavoritesStore;
pub use models::{MovieDetail, MovieSummary, ThemePreference};
