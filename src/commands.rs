//! CLI Command Handlers
//!
//! Implements the scriptable commands by calling the same components the
//! TUI uses. Each handler takes CLI args and Output, returns ExitCode.

use crate::api::{OmdbClient, OmdbError};
use crate::cli::{
    ExitCode, FavoriteCmd, FavoriteToggled, FavoritesCmd, InfoCmd, Output, SearchCmd, TrendingCmd,
};
use crate::config::Config;
use crate::favorites::FavoritesStore;

fn client_from_config(config: &Config) -> OmdbClient {
    OmdbClient::new(config.omdb_api_key())
}

fn error_code(err: &OmdbError) -> ExitCode {
    if err.is_not_found() {
        ExitCode::NotFound
    } else {
        ExitCode::NetworkError
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    let query = cmd.query.trim();
    if query.is_empty() {
        return output.error("Please enter a movie name", ExitCode::InvalidArgs);
    }

    let config = Config::load();
    let client = client_from_config(&config);

    output.info(format!("Searching for: {}", query));

    match client.search(query).await {
        Ok(mut results) => {
            results.truncate(cmd.limit);
            if let Err(e) = output.print(&results) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = error_code(&e);
            output.error(format!("Search failed: {}", e), code)
        }
    }
}

// =============================================================================
// Trending Command
// =============================================================================

pub async fn trending_cmd(_cmd: TrendingCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = client_from_config(&config);

    output.info("Fetching trending titles...");

    // One request per curated title, in order; failed titles are skipped
    let titles = config.trending_titles();
    let mut movies = Vec::with_capacity(titles.len());
    for title in &titles {
        match client.find_by_title(title).await {
            Ok(detail) => movies.push(detail),
            Err(e) => output.info(format!("Skipping \"{}\": {}", title, e)),
        }
    }

    if let Err(e) = output.print(&movies) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = client_from_config(&config);

    output.info(format!("Getting info for: {}", cmd.imdb_id));

    match client.lookup(&cmd.imdb_id, cmd.full_plot).await {
        Ok(detail) => {
            if let Err(e) = output.print(&detail) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = error_code(&e);
            output.error(format!("Info failed: {}", e), code)
        }
    }
}

// =============================================================================
// Favorites Commands
// =============================================================================

fn open_store(output: &Output) -> Result<FavoritesStore, ExitCode> {
    match FavoritesStore::default_path() {
        Some(path) => Ok(FavoritesStore::open(path)),
        None => Err(output.error("Could not determine data directory", ExitCode::Error)),
    }
}

pub async fn favorites_cmd(_cmd: FavoritesCmd, output: &Output) -> ExitCode {
    let store = match open_store(output) {
        Ok(store) => store,
        Err(code) => return code,
    };

    if let Err(e) = output.print(store.entries()) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

pub async fn favorite_cmd(cmd: FavoriteCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = client_from_config(&config);

    let mut store = match open_store(output) {
        Ok(store) => store,
        Err(code) => return code,
    };

    let result = store
        .toggle(&cmd.imdb_id, |id| async move { client.lookup(&id, false).await })
        .await;

    match result {
        Ok(()) => {
            let toggled = FavoriteToggled {
                imdb_id: cmd.imdb_id.clone(),
                favorite: store.contains(&cmd.imdb_id),
            };
            if let Err(e) = output.print(&toggled) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = error_code(&e);
            output.error(format!("Failed to add to favorites: {}", e), code)
        }
    }
}
