use serde_json::Value;
use std::{path::Path, sync::Arc};

use crate::{
    error::AppResult,
    models::{MoodCluster, MovieRecord},
};

/// Upper bound on titles handed to enrichment per request
pub const MAX_CANDIDATES: usize = 16;

/// Titles offered when the dataset could not be loaded
pub const PLACEHOLDER_TITLES: [&str; 2] = ["Sample Movie 1", "Sample Movie 2"];

/// Pre-clustered movies in their source order
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    records: Vec<MovieRecord>,
}

impl MovieDataset {
    /// Keeps records whose cluster is a known [`MoodCluster`] index
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let total = records.len();
        let records: Vec<MovieRecord> = records
            .into_iter()
            .filter(|record| MoodCluster::from_index(record.cluster).is_some())
            .collect();

        if records.len() < total {
            tracing::warn!(
                skipped = total - records.len(),
                "Dropped movie records with an unknown cluster"
            );
        }

        Self { records }
    }

    /// Loads a JSON array of rows. Malformed rows are skipped, not fatal.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let rows: Vec<Value> = serde_json::from_str(&raw)?;
        let total = rows.len();
        let records: Vec<MovieRecord> = rows.iter().filter_map(record_from_row).collect();

        if records.len() < total {
            tracing::warn!(
                skipped = total - records.len(),
                path = %path.display(),
                "Skipped malformed movie rows"
            );
        }

        let dataset = Self::new(records);

        tracing::info!(
            records = dataset.len(),
            path = %path.display(),
            "Movie dataset loaded"
        );

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}

/// Reads one dataset row, tolerating integral floats such as `1.0` for the cluster
fn record_from_row(row: &Value) -> Option<MovieRecord> {
    let title = row.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let cluster = row.get("cluster")?;
    let cluster = match cluster.as_u64() {
        Some(index) => index,
        None => {
            let value = cluster.as_f64()?;
            if value.fract() != 0.0 || value < 0.0 {
                return None;
            }
            value as u64
        }
    };
    let cluster = MoodCluster::from_index(u8::try_from(cluster).ok()?)?;

    Some(MovieRecord {
        title: title.to_string(),
        cluster: cluster.index(),
    })
}

/// Picks candidate titles for a mood cluster
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    dataset: Option<Arc<MovieDataset>>,
}

impl CandidateSelector {
    pub fn new(dataset: MovieDataset) -> Self {
        Self {
            dataset: Some(Arc::new(dataset)),
        }
    }

    /// Selector without a dataset; always answers with [`PLACEHOLDER_TITLES`]
    pub fn placeholder() -> Self {
        Self { dataset: None }
    }

    /// Loads the dataset from disk, falling back to placeholders on failure
    pub fn from_path(path: &Path) -> Self {
        match MovieDataset::load(path) {
            Ok(dataset) => Self::new(dataset),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Movie dataset unavailable, serving placeholder titles"
                );
                Self::placeholder()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.dataset.is_some()
    }

    /// First [`MAX_CANDIDATES`] titles of `cluster`, in dataset order
    pub fn select(&self, cluster: MoodCluster) -> Vec<String> {
        let Some(dataset) = &self.dataset else {
            return PLACEHOLDER_TITLES.iter().map(|t| t.to_string()).collect();
        };

        dataset
            .records
            .iter()
            .filter(|record| record.cluster == cluster.index())
            .take(MAX_CANDIDATES)
            .map(|record| record.title.clone())
            .collect()
    }
}
