use std::{sync::Arc, time::Duration};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodreel::{
    api::{create_router, AppState},
    config::Config,
    services::{
        providers::{ImageSearchPoster, OmdbProvider},
        CandidateSelector, EmotionClassifier, MetadataEnricher, RecommendationPipeline,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Missing artifacts degrade the pipeline instead of stopping startup
    let classifier = EmotionClassifier::from_paths(
        &config.model_path,
        &config.vocabulary_path,
        &config.max_length_path,
    );
    let selector = CandidateSelector::from_path(&config.dataset_path);

    let movie_db = OmdbProvider::new(config.omdb_api_key.clone(), config.omdb_api_url.clone());
    let posters = ImageSearchPoster::new(
        config.poster_search_url.clone(),
        Duration::from_secs(config.poster_timeout_secs),
    )
    .context("Failed to build poster search client")?;
    let enricher = MetadataEnricher::new(Arc::new(movie_db), Arc::new(posters));

    let pipeline = RecommendationPipeline::new(classifier, selector, enricher)
        .with_concurrency(config.enrichment_concurrency);

    let app = create_router(AppState::new(pipeline));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
