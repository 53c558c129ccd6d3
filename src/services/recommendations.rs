use futures::stream::{self, StreamExt};

use crate::{
    error::{AppError, AppResult},
    models::{Classification, MoodCluster, MovieMetadata},
    services::{
        candidates::CandidateSelector, classifier::EmotionClassifier, enrichment::MetadataEnricher,
        mood_mapper::to_cluster,
    },
};

/// Emotion and mood detected in a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodAnalysis {
    pub emotion: Classification,
    pub cluster: MoodCluster,
}

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub emotion: Classification,
    pub cluster: MoodCluster,
    /// Enriched candidates in selection order; empty means nothing to recommend
    pub movies: Vec<MovieMetadata>,
}

/// Text in, enriched movie list out.
///
/// Holds only read-only state, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct RecommendationPipeline {
    classifier: EmotionClassifier,
    selector: CandidateSelector,
    enricher: MetadataEnricher,
    concurrency: usize,
}

impl RecommendationPipeline {
    pub fn new(
        classifier: EmotionClassifier,
        selector: CandidateSelector,
        enricher: MetadataEnricher,
    ) -> Self {
        Self {
            classifier,
            selector,
            enricher,
            concurrency: 1,
        }
    }

    /// Enrich up to `concurrency` titles at once. Output order is unchanged.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn classifier(&self) -> &EmotionClassifier {
        &self.classifier
    }

    pub fn selector(&self) -> &CandidateSelector {
        &self.selector
    }

    /// Classifies text and maps it to a cluster without touching the network
    pub fn classify_mood(&self, raw_text: &str) -> AppResult<MoodAnalysis> {
        if raw_text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter some text describing your mood".to_string(),
            ));
        }

        let emotion = self.classifier.classify(raw_text);
        let cluster = to_cluster(emotion.label);

        tracing::info!(
            emotion = %emotion.display(),
            class = emotion.index,
            cluster = %cluster,
            "Mood detected"
        );

        Ok(MoodAnalysis { emotion, cluster })
    }

    pub async fn recommend(&self, raw_text: &str) -> AppResult<Recommendation> {
        let MoodAnalysis { emotion, cluster } = self.classify_mood(raw_text)?;

        let titles = self.selector.select(cluster);
        tracing::info!(
            cluster = %cluster,
            candidates = titles.len(),
            "Candidates selected"
        );

        let movies = self.enrich_all(titles).await;

        Ok(Recommendation {
            emotion,
            cluster,
            movies,
        })
    }

    async fn enrich_all(&self, titles: Vec<String>) -> Vec<MovieMetadata> {
        if self.concurrency <= 1 {
            let mut movies = Vec::with_capacity(titles.len());
            for title in &titles {
                movies.push(self.enricher.enrich(title).await);
            }
            return movies;
        }

        let enricher = &self.enricher;
        stream::iter(titles)
            .map(|title| async move { enricher.enrich(&title).await })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
