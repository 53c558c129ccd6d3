use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Pre-trained network mapping a padded index sequence to class probabilities
pub trait SequenceModel: Send + Sync {
    /// Returns one probability per output class
    fn predict(&self, sequence: &[u32]) -> AppResult<Vec<f32>>;

    /// Number of output classes
    fn num_classes(&self) -> usize;
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    /// `input_dim` rows of `num_classes` columns
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

/// Embedding lookup, masked mean pooling, dense softmax head.
///
/// Row 0 of the embedding matrix belongs to the padding index and is
/// excluded from pooling.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingBagModel {
    embedding: Vec<Vec<f32>>,
    dense: DenseLayer,
}

impl EmbeddingBagModel {
    pub fn new(embedding: Vec<Vec<f32>>, dense: DenseLayer) -> AppResult<Self> {
        let model = Self { embedding, dense };
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let model: EmbeddingBagModel = serde_json::from_str(&raw)?;
        model.validate()?;
        Ok(model)
    }

    pub fn vocab_size(&self) -> usize {
        self.embedding.len()
    }

    fn embedding_dim(&self) -> usize {
        self.embedding.first().map_or(0, Vec::len)
    }

    fn validate(&self) -> AppResult<()> {
        let dim = self.embedding_dim();
        if dim == 0 {
            return Err(AppError::Artifact("Embedding matrix is empty".to_string()));
        }
        if self.embedding.iter().any(|row| row.len() != dim) {
            return Err(AppError::Artifact(
                "Embedding rows have inconsistent widths".to_string(),
            ));
        }
        if self.dense.weights.len() != dim {
            return Err(AppError::Artifact(format!(
                "Dense layer expects {} inputs, embedding produces {}",
                self.dense.weights.len(),
                dim
            )));
        }
        let classes = self.dense.bias.len();
        if classes == 0 || self.dense.weights.iter().any(|row| row.len() != classes) {
            return Err(AppError::Artifact(
                "Dense weights do not match bias width".to_string(),
            ));
        }
        Ok(())
    }

    fn pool(&self, sequence: &[u32]) -> AppResult<Vec<f32>> {
        let mut pooled = vec![0.0f32; self.embedding_dim()];
        let mut count = 0usize;

        for &index in sequence.iter().filter(|&&i| i != 0) {
            let row = self.embedding.get(index as usize).ok_or_else(|| {
                AppError::Classification(format!(
                    "Token index {} outside embedding of size {}",
                    index,
                    self.vocab_size()
                ))
            })?;
            for (acc, value) in pooled.iter_mut().zip(row) {
                *acc += value;
            }
            count += 1;
        }

        if count > 0 {
            let n = count as f32;
            pooled.iter_mut().for_each(|v| *v /= n);
        }
        Ok(pooled)
    }
}

impl SequenceModel for EmbeddingBagModel {
    fn predict(&self, sequence: &[u32]) -> AppResult<Vec<f32>> {
        let pooled = self.pool(sequence)?;

        let mut logits = self.dense.bias.clone();
        for (input, weights) in pooled.iter().zip(&self.dense.weights) {
            for (logit, weight) in logits.iter_mut().zip(weights) {
                *logit += input * weight;
            }
        }

        Ok(softmax(&logits))
    }

    fn num_classes(&self) -> usize {
        self.dense.bias.len()
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the highest probability; the lowest index wins ties.
pub fn argmax(probabilities: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &p) in probabilities.iter().enumerate() {
        if p.is_nan() {
            return None;
        }
        match best {
            Some((_, best_p)) if p <= best_p => {}
            _ => best = Some((index, p)),
        }
    }
    best.map(|(index, _)| index)
}
