use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serialized emotion classifier weights
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Fitted vocabulary encoder (word index)
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: PathBuf,

    /// Padding length the classifier was trained with
    #[serde(default = "default_max_length_path")]
    pub max_length_path: PathBuf,

    /// Movie titles with their pre-computed mood cluster
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// OMDb API key. Without it every metadata lookup falls back.
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Image search results page used for posters
    #[serde(default = "default_poster_search_url")]
    pub poster_search_url: String,

    /// Timeout for a single poster lookup, in seconds
    #[serde(default = "default_poster_timeout_secs")]
    pub poster_timeout_secs: u64,

    /// Number of titles enriched at once (1 = strictly sequential)
    #[serde(default = "default_enrichment_concurrency")]
    pub enrichment_concurrency: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_model_path() -> PathBuf {
    PathBuf::from("artifacts/emotion_model.json")
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("artifacts/vocabulary.json")
}

fn default_max_length_path() -> PathBuf {
    PathBuf::from("artifacts/max_length.json")
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("artifacts/movies.json")
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_poster_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_poster_timeout_secs() -> u64 {
    5
}

fn default_enrichment_concurrency() -> usize {
    1
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter::<_, Config>(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_apply_when_env_is_empty() {
        let config = from_pairs(&[]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.omdb_api_key, None);
        assert_eq!(config.poster_timeout_secs, 5);
        assert_eq!(config.enrichment_concurrency, 1);
        assert_eq!(config.dataset_path, PathBuf::from("artifacts/movies.json"));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_env_overrides() {
        let config = from_pairs(&[
            ("OMDB_API_KEY", "secret"),
            ("PORT", "8080"),
            ("ENRICHMENT_CONCURRENCY", "4"),
            ("MODEL_PATH", "/srv/model.json"),
        ]);
        assert_eq!(config.omdb_api_key.as_deref(), Some("secret"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.enrichment_concurrency, 4);
        assert_eq!(config.model_path, PathBuf::from("/srv/model.json"));
    }
}
