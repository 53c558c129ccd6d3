/// Poster lookup by scraping a general image-search results page
///
/// Nothing here is a contracted API: the page layout can change at any time,
/// so callers treat every error or empty result as "no poster".
use crate::{
    error::{AppError, AppResult},
    services::providers::PosterSearch,
};
use regex::Regex;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::instrument;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// The first `<img>` on a results page is the search engine's own logo
const SKIPPED_IMAGES: usize = 1;

#[derive(Clone)]
pub struct ImageSearchPoster {
    http_client: HttpClient,
    search_url: String,
    img_src: Regex,
}

impl ImageSearchPoster {
    pub fn new(search_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            search_url,
            img_src: img_src_pattern()?,
        })
    }

    /// Picks the first result image after the page chrome
    pub fn extract_poster(&self, html: &str) -> Option<String> {
        self.img_src
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|src| src.as_str().trim())
            .skip(SKIPPED_IMAGES)
            .find(|src| !src.is_empty())
            .map(|src| src.replace("&amp;", "&"))
    }
}

fn img_src_pattern() -> AppResult<Regex> {
    Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*["']([^"']*)["']"#)
        .map_err(|e| AppError::Internal(format!("Invalid image pattern: {}", e)))
}

/// Query phrase sent to the image search for a title
pub fn poster_query(title: &str) -> String {
    format!("{} movie poster", title.trim())
}

#[async_trait::async_trait]
impl PosterSearch for ImageSearchPoster {
    #[instrument(skip(self))]
    async fn find_poster(&self, title: &str) -> AppResult<Option<String>> {
        let query = poster_query(title);

        let response = self
            .http_client
            .get(&self.search_url)
            .query(&[("q", query.as_str()), ("tbm", "isch")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Image search returned status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let poster = self.extract_poster(&html);

        tracing::debug!(
            title = %title,
            found = poster.is_some(),
            "Poster search completed"
        );

        Ok(poster)
    }
}
