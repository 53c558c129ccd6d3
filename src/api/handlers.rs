use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Classification, EmotionLabel, MoodCluster, MovieMetadata},
    services::{mood_mapper::to_cluster, MoodAnalysis},
};

use super::AppState;

/// Prompts offered to users who don't know what to type
pub const SAMPLE_MOODS: [&str; 6] = [
    "I'm feeling great and want to celebrate!",
    "I'm sad and need comfort",
    "I'm angry about everything today",
    "I'm scared and anxious",
    "I'm in love and everything is beautiful",
    "I'm surprised by recent events",
];

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EmotionResponse {
    pub index: usize,
    pub label: Option<EmotionLabel>,
    pub display: String,
}

impl From<Classification> for EmotionResponse {
    fn from(classification: Classification) -> Self {
        Self {
            index: classification.index,
            label: classification.label,
            display: classification.display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub emotion: EmotionResponse,
    pub cluster: MoodCluster,
}

impl From<MoodAnalysis> for ClassifyResponse {
    fn from(analysis: MoodAnalysis) -> Self {
        Self {
            emotion: analysis.emotion.into(),
            cluster: analysis.cluster,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub emotion: EmotionResponse,
    pub cluster: MoodCluster,
    pub movies: Vec<MovieMetadata>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct EmotionCatalogEntry {
    pub index: usize,
    pub label: EmotionLabel,
    pub display: String,
    pub cluster: MoodCluster,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "classifier_loaded": state.pipeline.classifier().is_available(),
            "dataset_loaded": state.pipeline.selector().is_available(),
        })),
    )
}

/// Detect emotion and mood cluster only
pub async fn classify(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<MoodRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    tracing::info!(request_id = %request_id, "Processing classify request");

    let analysis = state.pipeline.classify_mood(&request.text)?;
    Ok(Json(analysis.into()))
}

/// Full pipeline: emotion, cluster, enriched movies
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<MoodRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        text_len = request.text.len(),
        "Processing recommendation request"
    );

    let recommendation = state.pipeline.recommend(&request.text).await?;

    tracing::info!(
        request_id = %request_id,
        movies = recommendation.movies.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse {
        emotion: recommendation.emotion.into(),
        cluster: recommendation.cluster,
        movies: recommendation.movies,
        generated_at: Utc::now(),
    }))
}

/// The six emotion categories and the cluster each maps to
pub async fn list_emotions() -> Json<Vec<EmotionCatalogEntry>> {
    let entries = EmotionLabel::ALL
        .iter()
        .map(|&label| EmotionCatalogEntry {
            index: label.index(),
            label,
            display: label.to_string(),
            cluster: to_cluster(Some(label)),
        })
        .collect();
    Json(entries)
}

pub async fn sample_moods() -> Json<Vec<&'static str>> {
    Json(SAMPLE_MOODS.to_vec())
}
