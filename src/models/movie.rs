use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_INFORMATION: &str = "Information not available";
pub const NO_PLOT: &str = "No plot available";
pub const PLACEHOLDER_LINK: &str = "#";

/// One row of the pre-clustered movie dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub cluster: u8,
}

/// Enriched movie as returned to the presentation layer.
///
/// Every field is populated; `poster` is the only one allowed to be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub poster: Option<String>,
    pub description: String,
    pub year: String,
    pub rating: String,
    pub imdb_link: String,
}

impl MovieMetadata {
    /// Record for a title the movie database has no match for
    pub fn not_found(title: &str) -> Self {
        Self::fallback(title, NO_DESCRIPTION)
    }

    /// Record for a title whose lookup failed outright
    pub fn unavailable(title: &str) -> Self {
        Self::fallback(title, NO_INFORMATION)
    }

    fn fallback(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            poster: None,
            description: description.to_string(),
            year: NOT_AVAILABLE.to_string(),
            rating: NOT_AVAILABLE.to_string(),
            imdb_link: PLACEHOLDER_LINK.to_string(),
        }
    }
}

/// Canonical IMDb page for an identifier such as `tt0111161`
pub fn imdb_link(imdb_id: &str) -> String {
    let id = imdb_id.trim_start_matches("tt");
    format!("https://www.imdb.com/title/tt{}/", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_fallback() {
        let movie = MovieMetadata::not_found("Nonexistent Film");
        assert_eq!(movie.title, "Nonexistent Film");
        assert_eq!(movie.description, "No description available");
        assert_eq!(movie.year, "N/A");
        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.imdb_link, "#");
        assert_eq!(movie.poster, None);
    }

    #[test]
    fn test_unavailable_fallback() {
        let movie = MovieMetadata::unavailable("Inception");
        assert_eq!(movie.description, "Information not available");
        assert_eq!(movie.imdb_link, "#");
    }

    #[test]
    fn test_imdb_link_accepts_prefixed_and_bare_ids() {
        assert_eq!(imdb_link("tt1375666"), "https://www.imdb.com/title/tt1375666/");
        assert_eq!(imdb_link("1375666"), "https://www.imdb.com/title/tt1375666/");
    }

    #[test]
    fn test_movie_record_ignores_extra_columns() {
        let json = r#"{"title": "Up", "cluster": 0, "genres": "Animation"}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Up");
        assert_eq!(record.cluster, 0);
    }
}
