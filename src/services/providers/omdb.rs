/// OMDb API provider
///
/// Title search and detail lookup against the Open Movie Database.
///
/// API Flow:
/// 1. Search: `/?s=<title>&type=movie` → ranked matches with IMDb IDs
/// 2. Details: `/?i=<imdb id>&plot=short` → plot, year, rating
use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, MovieMatch, OmdbSearchResponse, OmdbTitleResponse},
    services::providers::MovieDatabase,
};
use reqwest::Client as HttpClient;
use tracing::instrument;

/// OMDb's error text for an empty search
const NOT_FOUND_ERROR: &str = "Movie not found!";

/// OMDb's error text for an identifier it does not know
const UNKNOWN_ID_ERROR: &str = "Incorrect IMDb ID.";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("OMDB_API_KEY not set, movie metadata lookups will fall back");
        }

        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("OMDb API key not configured".to_string()))
    }

    async fn get(&self, params: &[(&str, &str)]) -> AppResult<String> {
        let url = format!("{}/", self.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key()?)])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.text().await?)
    }
}

/// Parses a search body. "Movie not found!" is an empty result, not an error.
pub fn parse_search_response(body: &str) -> AppResult<Vec<MovieMatch>> {
    let response: OmdbSearchResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ExternalApi(format!("Failed to parse OMDb search: {}", e)))?;

    if response.response.eq_ignore_ascii_case("true") {
        return Ok(response.search.into_iter().map(MovieMatch::from).collect());
    }

    match response.error.as_deref() {
        Some(NOT_FOUND_ERROR) => Ok(Vec::new()),
        Some(error) => Err(AppError::ExternalApi(format!("OMDb search failed: {}", error))),
        None => Err(AppError::ExternalApi(
            "OMDb search failed without an error message".to_string(),
        )),
    }
}

/// Parses a details body. An unknown identifier is `None`, not an error.
pub fn parse_title_response(body: &str) -> AppResult<Option<MovieDetails>> {
    let response: OmdbTitleResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ExternalApi(format!("Failed to parse OMDb title: {}", e)))?;

    if response.response.eq_ignore_ascii_case("true") {
        return Ok(Some(response.into()));
    }

    match response.error.as_deref() {
        Some(UNKNOWN_ID_ERROR) | Some(NOT_FOUND_ERROR) => Ok(None),
        error => Err(AppError::ExternalApi(format!(
            "OMDb title lookup failed: {}",
            error.unwrap_or("unknown error")
        ))),
    }
}

#[async_trait::async_trait]
impl MovieDatabase for OmdbProvider {
    #[instrument(skip(self))]
    async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieMatch>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search title cannot be empty".to_string(),
            ));
        }

        let body = self.get(&[("s", title), ("type", "movie")]).await?;
        let matches = parse_search_response(&body)?;

        tracing::info!(
            title = %title,
            results = matches.len(),
            provider = self.name(),
            "Movie search completed"
        );

        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn fetch_details(&self, imdb_id: &str) -> AppResult<Option<MovieDetails>> {
        let body = self.get(&[("i", imdb_id), ("plot", "short")]).await?;
        tracing::debug!(imdb_id = %imdb_id, response = %body, "Raw OMDb title response");

        parse_title_response(&body)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
