use serde::{Deserialize, Deserializer};

pub mod emotion;
pub mod movie;

pub use emotion::{Classification, EmotionLabel, MoodCluster};
pub use movie::{imdb_link, MovieMetadata, MovieRecord};

/// Outcome of a best-effort external lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The service answered with a usable value
    Found(T),
    /// The service answered but had nothing for the query
    NotFound,
    /// The service could not be reached or returned garbage
    Unavailable(String),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Unavailable(_) => None,
        }
    }
}

/// Rank-ordered search hit from the movie database
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMatch {
    pub imdb_id: String,
    pub title: String,
    pub year: Option<String>,
}

/// Extended fields for a single match
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDetails {
    pub plot: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// OMDb marks missing values with the literal string "N/A"
fn omdb_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != movie::NOT_AVAILABLE
    }))
}

/// Response of `GET /?s=<title>`
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default, deserialize_with = "omdb_optional")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl From<OmdbSearchItem> for MovieMatch {
    fn from(item: OmdbSearchItem) -> Self {
        MovieMatch {
            imdb_id: item.imdb_id,
            title: item.title,
            year: item.year,
        }
    }
}

/// Response of `GET /?i=<imdb id>`
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbTitleResponse {
    #[serde(rename = "Plot", default, deserialize_with = "omdb_optional")]
    pub plot: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "omdb_optional")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "omdb_optional")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl From<OmdbTitleResponse> for MovieDetails {
    fn from(response: OmdbTitleResponse) -> Self {
        MovieDetails {
            plot: response.plot,
            year: response.year,
            rating: response.imdb_rating,
        }
    }
}
