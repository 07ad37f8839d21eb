//! Data structures and types for MovieTUI
//!
//! Shared models used across the application:
//! - **Catalog**: OMDb search summaries and full movie records
//! - **Preferences**: theme selection persisted between sessions

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Models (OMDb)
// =============================================================================

/// Minimal movie record shown in list views
///
/// Identified by the stable IMDb id assigned upstream. Optional fields are
/// `None` when OMDb reports its `"N/A"` sentinel for them; search results
/// never carry a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub rating: Option<f32>,
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(f, "{} ({}) ★ {:.1}", self.title, self.year, rating),
            None => write!(f, "{} ({})", self.title, self.year),
        }
    }
}

/// Full movie record fetched on demand for a single id
///
/// Superset of [`MovieSummary`]; held only for the open detail view and
/// for persisted favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub rating: Option<f32>,
    pub genre: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub director: Option<String>,
    pub language: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
}

impl MovieDetail {
    /// Project down to the summary shape used by card lists
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
            rating: self.rating,
        }
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(f, "{} ({}) ★ {:.1}", self.title, self.year, rating),
            None => write!(f, "{} ({})", self.title, self.year),
        }
    }
}

// =============================================================================
// Preference Models
// =============================================================================

/// Persisted theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Status-bar indicator for the active theme
    pub fn indicator(self) -> &'static str {
        match self {
            ThemePreference::Dark => "🌙",
            ThemePreference::Light => "☀",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Dark => write!(f, "dark"),
            ThemePreference::Light => write!(f, "light"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            poster: Some("https://example.com/batman.jpg".to_string()),
            rating: Some(7.5),
            genre: Some("Action, Adventure".to_string()),
            released: Some("23 Jun 1989".to_string()),
            runtime: Some("126 min".to_string()),
            director: Some("Tim Burton".to_string()),
            language: Some("English".to_string()),
            actors: Some("Michael Keaton, Jack Nicholson".to_string()),
            plot: Some("The Dark Knight of Gotham City.".to_string()),
        }
    }

    #[test]
    fn test_summary_display_with_rating() {
        let summary = MovieSummary {
            imdb_id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            poster: None,
            rating: Some(7.5),
        };
        assert_eq!(summary.to_string(), "Batman (1989) ★ 7.5");
    }

    #[test]
    fn test_summary_display_without_rating() {
        let summary = MovieSummary {
            imdb_id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            poster: None,
            rating: None,
        };
        assert_eq!(summary.to_string(), "Batman (1989)");
    }

    #[test]
    fn test_detail_summary_projection() {
        let detail = sample_detail();
        let summary = detail.summary();
        assert_eq!(summary.imdb_id, detail.imdb_id);
        assert_eq!(summary.title, detail.title);
        assert_eq!(summary.year, detail.year);
        assert_eq!(summary.poster, detail.poster);
        assert_eq!(summary.rating, detail.rating);
    }

    #[test]
    fn test_detail_serde_round_trip() {
        let detail = sample_detail();
        let json = serde_json::to_string(&detail).unwrap();
        let parsed: MovieDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, detail);
    }

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_serde() {
        let json = serde_json::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(json, "\"light\"");

        let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemePreference::Dark);
    }
}
