//! Favorites store
//!
//! Ordered, duplicate-free list of favorited movies mirrored to a JSON
//! file. The file is rewritten after every successful mutation, so disk
//! and memory agree between toggles. A missing or unreadable file loads
//! as an empty list.

use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::api::OmdbError;
use crate::models::MovieDetail;

/// In-memory favorites list backed by a JSON file
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    entries: Vec<MovieDetail>,
}

impl FavoritesStore {
    /// Default favorites file location (under the platform data dir)
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("movietui").join("favorites.json"))
    }

    /// Open the store, loading whatever is currently on disk
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    /// Favorited records in insertion order (newest last)
    pub fn entries(&self) -> &[MovieDetail] {
        &self.entries
    }

    /// Ids of all favorited movies
    pub fn ids(&self) -> HashSet<String> {
        self.entries.iter().map(|m| m.imdb_id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|m| m.imdb_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Toggle membership for `id`
    ///
    /// Removal always succeeds. Adding first resolves the full record via
    /// `resolver`, so a favorite is never stored without a confirmed
    /// upstream entry; when the resolver fails, the list and the file are
    /// left untouched and the error is returned.
    pub async fn toggle<F, Fut>(&mut self, id: &str, resolver: F) -> Result<(), OmdbError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<MovieDetail, OmdbError>>,
    {
        if let Some(idx) = self.entries.iter().position(|m| m.imdb_id == id) {
            let removed = self.entries.remove(idx);
            debug!("removed favorite {} ({})", id, removed.title);
        } else {
            let detail = resolver(id.to_string()).await?;
            debug!("added favorite {} ({})", id, detail.title);
            self.entries.push(detail);
        }
        self.save();
        Ok(())
    }

    /// Rewrite the favorites file from the in-memory list
    fn save(&self) {
        if let Err(e) = self.write_entries() {
            warn!("could not persist favorites to {}: {}", self.path.display(), e);
        }
    }

    fn write_entries(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Vec<MovieDetail> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("discarding unreadable favorites file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
