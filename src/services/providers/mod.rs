/// External metadata sources used during enrichment
///
/// Both lookups are pluggable: the movie database answers "which film is this
/// title and what do we know about it", the poster search is a best-effort
/// image source with no contract behind it.
use crate::{
    error::AppResult,
    models::{MovieDetails, MovieMatch},
};

pub mod image_search;
pub mod omdb;

pub use image_search::ImageSearchPoster;
pub use omdb::OmdbProvider;

/// Movie database queried by free-text title
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Search for movies by title
    ///
    /// Returns matches in the service's ranking order. An empty list means the
    /// service answered and found nothing.
    async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieMatch>>;

    /// Fetch plot, year and rating for a match's identifier
    ///
    /// `None` means the service answered but does not know the identifier.
    async fn fetch_details(&self, imdb_id: &str) -> AppResult<Option<MovieDetails>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Best-effort poster image source
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterSearch: Send + Sync {
    /// Returns an image URL for the title, `None` when the page had none
    async fn find_poster(&self, title: &str) -> AppResult<Option<String>>;
}
