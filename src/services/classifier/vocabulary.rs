use serde::Deserialize;
use std::{collections::HashMap, path::Path};

use crate::error::{AppError, AppResult};

/// Word-to-index encoder fitted alongside the classifier.
///
/// Index 0 is reserved for padding and never assigned to a word.
#[derive(Debug, Clone, Deserialize)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
    #[serde(default)]
    oov_token: Option<String>,
    /// Only indices below this limit are considered known
    #[serde(default)]
    num_words: Option<u32>,
}

impl Vocabulary {
    pub fn new(
        word_index: HashMap<String, u32>,
        oov_token: Option<String>,
        num_words: Option<u32>,
    ) -> AppResult<Self> {
        let vocabulary = Self {
            word_index,
            oov_token,
            num_words,
        };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&raw)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    fn validate(&self) -> AppResult<()> {
        if self.word_index.values().any(|&i| i == 0) {
            return Err(AppError::Artifact(
                "Vocabulary assigns the padding index 0 to a word".to_string(),
            ));
        }
        if let Some(token) = &self.oov_token {
            if !self.word_index.contains_key(token) {
                return Err(AppError::Artifact(format!(
                    "OOV token {:?} missing from word index",
                    token
                )));
            }
        }
        Ok(())
    }

    /// Largest index this encoder can emit
    pub fn max_index(&self) -> u32 {
        self.word_index.values().copied().max().unwrap_or(0)
    }

    /// Largest index [`Vocabulary::encode`] can emit, honoring `num_words`
    pub fn max_encoded_index(&self) -> u32 {
        let known = self
            .word_index
            .values()
            .copied()
            .filter(|&index| self.is_within_limit(index))
            .max()
            .unwrap_or(0);
        known.max(self.oov_index().unwrap_or(0))
    }

    fn oov_index(&self) -> Option<u32> {
        self.oov_token
            .as_ref()
            .and_then(|token| self.word_index.get(token).copied())
    }

    fn is_within_limit(&self, index: u32) -> bool {
        self.num_words.map_or(true, |limit| index < limit)
    }

    /// Encodes whitespace-separated normalized text.
    ///
    /// Unknown words become the OOV index when the encoder has one and are
    /// skipped otherwise.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        text.split_whitespace()
            .filter_map(|word| match self.word_index.get(word) {
                Some(&index) if self.is_within_limit(index) => Some(index),
                _ => self.oov_index(),
            })
            .collect()
    }
}

/// Right-pads with zeros or truncates from the end to exactly `max_length`
pub fn pad_sequence(mut sequence: Vec<u32>, max_length: usize) -> Vec<u32> {
    sequence.resize(max_length, 0);
    sequence
}

/// Reads the padding length persisted next to the model
pub fn load_max_length(path: &Path) -> AppResult<usize> {
    let raw = std::fs::read_to_string(path)?;
    let max_length: usize = serde_json::from_str(raw.trim())?;
    if max_length == 0 {
        return Err(AppError::Artifact(
            "Max sequence length must be positive".to_string(),
        ));
    }
    Ok(max_length)
}
