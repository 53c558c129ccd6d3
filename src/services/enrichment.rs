use std::sync::Arc;

use crate::{
    models::{
        imdb_link,
        movie::{NOT_AVAILABLE, NO_PLOT},
        Lookup, MovieDetails, MovieMatch, MovieMetadata,
    },
    services::providers::{MovieDatabase, PosterSearch},
};

/// Attaches descriptive metadata to candidate titles.
///
/// Never fails: each lookup outcome is reduced to a [`Lookup`] and missing
/// pieces are replaced by fallback values.
#[derive(Clone)]
pub struct MetadataEnricher {
    movie_db: Arc<dyn MovieDatabase>,
    posters: Arc<dyn PosterSearch>,
}

impl MetadataEnricher {
    pub fn new(movie_db: Arc<dyn MovieDatabase>, posters: Arc<dyn PosterSearch>) -> Self {
        Self { movie_db, posters }
    }

    pub async fn enrich(&self, title: &str) -> MovieMetadata {
        let matched = match self.lookup_match(title).await {
            Lookup::Found(matched) => matched,
            Lookup::NotFound => return MovieMetadata::not_found(title),
            Lookup::Unavailable(reason) => {
                tracing::warn!(title = %title, reason = %reason, "Movie lookup failed");
                return MovieMetadata::unavailable(title);
            }
        };

        let details = match self.lookup_details(&matched).await {
            Lookup::Found(details) => details,
            Lookup::NotFound => {
                tracing::debug!(
                    title = %title,
                    imdb_id = %matched.imdb_id,
                    "Movie database has no details for match"
                );
                MovieDetails::default()
            }
            Lookup::Unavailable(reason) => {
                tracing::warn!(
                    title = %title,
                    imdb_id = %matched.imdb_id,
                    reason = %reason,
                    "Movie details lookup failed"
                );
                return MovieMetadata::unavailable(title);
            }
        };

        let poster = match self.lookup_poster(title).await {
            Lookup::Found(url) => Some(url),
            Lookup::NotFound => None,
            Lookup::Unavailable(reason) => {
                tracing::debug!(title = %title, reason = %reason, "Poster lookup failed");
                None
            }
        };

        MovieMetadata {
            title: title.to_string(),
            poster,
            description: non_blank(details.plot).unwrap_or_else(|| NO_PLOT.to_string()),
            year: non_blank(details.year)
                .or_else(|| non_blank(matched.year.clone()))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            rating: non_blank(details.rating).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            imdb_link: imdb_link(&matched.imdb_id),
        }
    }

    /// Rank-1 search hit; no disambiguation beyond the service's ordering
    async fn lookup_match(&self, title: &str) -> Lookup<MovieMatch> {
        match self.movie_db.search_movies(title).await {
            Ok(matches) => match matches.into_iter().next() {
                Some(first) => Lookup::Found(first),
                None => Lookup::NotFound,
            },
            Err(e) => Lookup::Unavailable(e.to_string()),
        }
    }

    async fn lookup_details(&self, matched: &MovieMatch) -> Lookup<MovieDetails> {
        match self.movie_db.fetch_details(&matched.imdb_id).await {
            Ok(Some(details)) => Lookup::Found(details),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::Unavailable(e.to_string()),
        }
    }

    async fn lookup_poster(&self, title: &str) -> Lookup<String> {
        match self.posters.find_poster(title).await {
            Ok(Some(url)) => Lookup::Found(url),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::Unavailable(e.to_string()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        services::providers::{MockMovieDatabase, MockPosterSearch},
    };

    fn inception() -> MovieMatch {
        MovieMatch {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: Some("2010".to_string()),
        }
    }

    fn enricher(db: MockMovieDatabase, posters: MockPosterSearch) -> MetadataEnricher {
        MetadataEnricher::new(Arc::new(db), Arc::new(posters))
    }

    fn assert_fully_populated(movie: &MovieMetadata) {
        for field in [
            &movie.title,
            &movie.description,
            &movie.year,
            &movie.rating,
            &movie.imdb_link,
        ] {
            assert!(!field.trim().is_empty());
        }
    }

    #[tokio::test]
    async fn test_enrich_successful_match() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .times(1)
            .returning(|_| Ok(vec![inception()]));
        db.expect_fetch_details().times(1).returning(|_| {
            Ok(Some(MovieDetails {
                plot: Some("A thief who steals corporate secrets.".to_string()),
                year: Some("2010".to_string()),
                rating: Some("8.8".to_string()),
            }))
        });

        let mut posters = MockPosterSearch::new();
        posters
            .expect_find_poster()
            .times(1)
            .returning(|_| Ok(Some("https://img.example.com/inception.jpg".to_string())));

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.description, "A thief who steals corporate secrets.");
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.rating, "8.8");
        assert_eq!(movie.imdb_link, "https://www.imdb.com/title/tt1375666/");
        assert_eq!(
            movie.poster.as_deref(),
            Some("https://img.example.com/inception.jpg")
        );
    }

    #[tokio::test]
    async fn test_enrich_no_match_skips_poster_lookup() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies().times(1).returning(|_| Ok(vec![]));
        db.expect_fetch_details().never();

        let mut posters = MockPosterSearch::new();
        posters.expect_find_poster().never();

        let movie = enricher(db, posters).enrich("Nonexistent Film").await;
        assert_eq!(movie, MovieMetadata::not_found("Nonexistent Film"));
        assert_eq!(movie.description, "No description available");
        assert_eq!(movie.year, "N/A");
        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.imdb_link, "#");
        assert_eq!(movie.poster, None);
    }

    #[tokio::test]
    async fn test_enrich_lookup_failure_falls_back() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .returning(|_| Err(AppError::ExternalApi("Request limit reached!".to_string())));

        let mut posters = MockPosterSearch::new();
        posters.expect_find_poster().never();

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_fully_populated(&movie);
        assert_eq!(movie.description, "Information not available");
        assert_eq!(movie.year, "N/A");
        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.imdb_link, "#");
        assert_eq!(movie.poster, None);
    }

    #[tokio::test]
    async fn test_enrich_details_failure_falls_back() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .returning(|_| Ok(vec![inception()]));
        db.expect_fetch_details()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));

        let mut posters = MockPosterSearch::new();
        posters.expect_find_poster().never();

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_eq!(movie, MovieMetadata::unavailable("Inception"));
    }

    #[tokio::test]
    async fn test_poster_failure_does_not_affect_record() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .returning(|_| Ok(vec![inception()]));
        db.expect_fetch_details().returning(|_| {
            Ok(Some(MovieDetails {
                plot: Some("Dreams within dreams.".to_string()),
                year: Some("2010".to_string()),
                rating: Some("8.8".to_string()),
            }))
        });

        let mut posters = MockPosterSearch::new();
        posters
            .expect_find_poster()
            .times(1)
            .returning(|_| Err(AppError::ExternalApi("operation timed out".to_string())));

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_eq!(movie.poster, None);
        assert_eq!(movie.description, "Dreams within dreams.");
        assert_eq!(movie.rating, "8.8");
        assert_eq!(movie.imdb_link, "https://www.imdb.com/title/tt1375666/");
    }

    #[tokio::test]
    async fn test_missing_detail_fields_use_fallbacks() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .returning(|_| Ok(vec![inception()]));
        db.expect_fetch_details()
            .returning(|_| Ok(Some(MovieDetails::default())));

        let mut posters = MockPosterSearch::new();
        posters.expect_find_poster().returning(|_| Ok(None));

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_fully_populated(&movie);
        assert_eq!(movie.description, "No plot available");
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.poster, None);
    }

    #[tokio::test]
    async fn test_unknown_details_keep_match_and_poster() {
        let mut db = MockMovieDatabase::new();
        db.expect_search_movies()
            .times(1)
            .returning(|_| Ok(vec![inception()]));
        db.expect_fetch_details().times(1).returning(|_| Ok(None));

        let mut posters = MockPosterSearch::new();
        posters
            .expect_find_poster()
            .times(1)
            .returning(|_| Ok(Some("https://img.example.com/inception.jpg".to_string())));

        let movie = enricher(db, posters).enrich("Inception").await;
        assert_fully_populated(&movie);
        assert_eq!(movie.description, "No plot available");
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.imdb_link, "https://www.imdb.com/title/tt1375666/");
        assert_eq!(
            movie.poster.as_deref(),
            Some("https://img.example.com/inception.jpg")
        );
    }
}
