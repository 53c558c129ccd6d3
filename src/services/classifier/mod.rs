use std::{path::Path, sync::Arc};

use crate::{
    error::{AppError, AppResult},
    models::{Classification, EmotionLabel},
    services::normalizer::normalize,
};

pub mod model;
pub mod vocabulary;

pub use model::{argmax, DenseLayer, EmbeddingBagModel, SequenceModel};
pub use vocabulary::{load_max_length, pad_sequence, Vocabulary};

/// Everything loaded from disk that inference needs, read-only after startup
pub struct ClassifierArtifacts {
    pub model: Box<dyn SequenceModel>,
    pub vocabulary: Vocabulary,
    pub max_length: usize,
}

impl ClassifierArtifacts {
    /// Loads model, vocabulary and padding length. Any failure fails the whole set.
    pub fn load(model_path: &Path, vocabulary_path: &Path, max_length_path: &Path) -> AppResult<Self> {
        let model = EmbeddingBagModel::load(model_path)?;
        let vocabulary = Vocabulary::load(vocabulary_path)?;
        let max_length = load_max_length(max_length_path)?;

        if vocabulary.max_encoded_index() as usize >= model.vocab_size() {
            return Err(AppError::Artifact(format!(
                "Vocabulary index {} exceeds embedding size {}",
                vocabulary.max_encoded_index(),
                model.vocab_size()
            )));
        }

        tracing::info!(
            vocab_size = model.vocab_size(),
            max_length = max_length,
            "Emotion classifier artifacts loaded"
        );

        Ok(Self {
            model: Box::new(model),
            vocabulary,
            max_length,
        })
    }
}

/// Turns free text into one of the six emotion labels.
///
/// Constructed without artifacts it runs degraded and answers every call with
/// [`Classification::unknown`].
#[derive(Clone)]
pub struct EmotionClassifier {
    artifacts: Option<Arc<ClassifierArtifacts>>,
}

impl EmotionClassifier {
    pub fn new(artifacts: ClassifierArtifacts) -> Self {
        Self {
            artifacts: Some(Arc::new(artifacts)),
        }
    }

    pub fn degraded() -> Self {
        Self { artifacts: None }
    }

    /// Builds from artifacts on disk, degrading instead of failing
    pub fn from_paths(model_path: &Path, vocabulary_path: &Path, max_length_path: &Path) -> Self {
        match ClassifierArtifacts::load(model_path, vocabulary_path, max_length_path) {
            Ok(artifacts) => Self::new(artifacts),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    model_path = %model_path.display(),
                    "Classifier artifacts unavailable, emotions will be reported as unknown"
                );
                Self::degraded()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.artifacts.is_some()
    }

    pub fn classify(&self, text: &str) -> Classification {
        let Some(artifacts) = &self.artifacts else {
            return Classification::unknown();
        };

        match Self::infer(artifacts, text) {
            Ok(label) => Classification::from_label(label),
            Err(e) => {
                tracing::error!(error = %e, "Emotion inference failed");
                Classification::unknown()
            }
        }
    }

    fn infer(artifacts: &ClassifierArtifacts, text: &str) -> AppResult<EmotionLabel> {
        let normalized = normalize(text);
        let encoded = artifacts.vocabulary.encode(&normalized);
        let sequence = pad_sequence(encoded, artifacts.max_length);

        let probabilities = artifacts.model.predict(&sequence)?;
        if probabilities.len() != EmotionLabel::COUNT {
            return Err(AppError::Classification(format!(
                "Model produced {} classes, expected {}",
                probabilities.len(),
                EmotionLabel::COUNT
            )));
        }

        let index = argmax(&probabilities).ok_or_else(|| {
            AppError::Classification("Model produced no usable probabilities".to_string())
        })?;

        tracing::debug!(normalized = %normalized, class = index, "Emotion classified");

        EmotionLabel::from_index(index)
            .ok_or_else(|| AppError::Classification(format!("Unknown class index {}", index)))
    }
}
