#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use moodreel::{
    error::{AppError, AppResult},
    models::{MovieDetails, MovieMatch},
    services::{
        providers::{MovieDatabase, PosterSearch},
        CandidateSelector, EmotionClassifier, MetadataEnricher, RecommendationPipeline,
    },
};

pub fn artifact(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("artifacts")
        .join(name)
}

pub fn demo_classifier() -> EmotionClassifier {
    EmotionClassifier::from_paths(
        &artifact("emotion_model.json"),
        &artifact("vocabulary.json"),
        &artifact("max_length.json"),
    )
}

pub fn demo_selector() -> CandidateSelector {
    CandidateSelector::from_path(&artifact("movies.json"))
}

/// In-memory movie database keyed by exact title
#[derive(Default)]
pub struct FakeMovieDatabase {
    pub known: Vec<(&'static str, &'static str)>,
    /// IDs that search returns but details do not recognize
    pub stale: Vec<&'static str>,
    pub fail: bool,
    pub searches: AtomicUsize,
}

impl FakeMovieDatabase {
    pub fn knowing(known: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            known,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl MovieDatabase for FakeMovieDatabase {
    async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieMatch>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::ExternalApi("connection refused".to_string()));
        }
        Ok(self
            .known
            .iter()
            .filter(|(known, _)| *known == title)
            .map(|(known, id)| MovieMatch {
                imdb_id: id.to_string(),
                title: known.to_string(),
                year: Some("2000".to_string()),
            })
            .collect())
    }

    async fn fetch_details(&self, imdb_id: &str) -> AppResult<Option<MovieDetails>> {
        if self.stale.contains(&imdb_id) {
            return Ok(None);
        }
        Ok(Some(MovieDetails {
            plot: Some(format!("Plot of {}", imdb_id)),
            year: Some("2000".to_string()),
            rating: Some("7.5".to_string()),
        }))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Poster source that counts calls and always times out
#[derive(Default)]
pub struct CountingPosterSearch {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl PosterSearch for CountingPosterSearch {
    async fn find_poster(&self, _title: &str) -> AppResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::ExternalApi("operation timed out".to_string()))
    }
}

pub fn pipeline_with(
    classifier: EmotionClassifier,
    selector: CandidateSelector,
    movie_db: Arc<FakeMovieDatabase>,
    posters: Arc<CountingPosterSearch>,
) -> RecommendationPipeline {
    RecommendationPipeline::new(
        classifier,
        selector,
        MetadataEnricher::new(movie_db, posters),
    )
}
