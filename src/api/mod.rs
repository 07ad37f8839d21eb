//! API clients for external services
//!
//! - OMDb: movie metadata and title search

pub mod omdb;

pub use omdb::{OmdbClient, OmdbError};

use async_trait::async_trait;

use crate::models::{MovieDetail, MovieSummary};

/// Catalog operations the controller depends on
///
/// Lets the controller run against a fake client in tests.
#[async_trait]
pub trait MovieLookup {
    /// Search the catalog by title
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError>;

    /// Fetch the full record whose title matches exactly
    async fn find_by_title(&self, title: &str) -> Result<MovieDetail, OmdbError>;

    /// Fetch the full record for an IMDb id
    async fn lookup(&self, id: &str, full_plot: bool) -> Result<MovieDetail, OmdbError>;
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        OmdbClient::search(self, query).await
    }

    async fn find_by_title(&self, title: &str) -> Result<MovieDetail, OmdbError> {
        OmdbClient::find_by_title(self, title).await
    }

    async fn lookup(&self, id: &str, full_plot: bool) -> Result<MovieDetail, OmdbError> {
        OmdbClient::lookup(self, id, full_plot).await
    }
}
