use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Display form of the degraded classification result
pub const UNKNOWN_EMOTION_DISPLAY: &str = "😊 Unknown";

/// Emotion categories the classifier was trained on.
///
/// The discriminant is the classifier's output class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Sadness = 0,
    Joy = 1,
    Love = 2,
    Anger = 3,
    Fear = 4,
    Surprise = 5,
}

impl EmotionLabel {
    /// All labels in class-index order
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Sadness,
        EmotionLabel::Joy,
        EmotionLabel::Love,
        EmotionLabel::Anger,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
    ];

    /// Number of classifier output classes
    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            EmotionLabel::Sadness => "Sadness",
            EmotionLabel::Joy => "Joy",
            EmotionLabel::Love => "Love",
            EmotionLabel::Anger => "Anger",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Surprise => "Surprise",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            EmotionLabel::Sadness => "😢",
            EmotionLabel::Joy => "😂",
            EmotionLabel::Love => "❤️",
            EmotionLabel::Anger => "😡",
            EmotionLabel::Fear => "😨",
            EmotionLabel::Surprise => "😲",
        }
    }
}

impl Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.name())
    }
}

/// Coarse mood bucket used to pick candidate movies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCluster {
    Positive = 0,
    Negative = 1,
    Neutral = 2,
}

impl MoodCluster {
    pub const ALL: [MoodCluster; 3] = [
        MoodCluster::Positive,
        MoodCluster::Negative,
        MoodCluster::Neutral,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Display for MoodCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoodCluster::Positive => "positive",
            MoodCluster::Negative => "negative",
            MoodCluster::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one classification call.
///
/// `label` is `None` when the classifier runs degraded; `index` is then 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub index: usize,
    pub label: Option<EmotionLabel>,
}

impl Classification {
    /// Sentinel returned when artifacts are missing or inference fails
    pub fn unknown() -> Self {
        Self {
            index: 0,
            label: None,
        }
    }

    pub fn from_label(label: EmotionLabel) -> Self {
        Self {
            index: label.index(),
            label: Some(label),
        }
    }

    pub fn display(&self) -> String {
        match self.label {
            Some(label) => label.to_string(),
            None => UNKNOWN_EMOTION_DISPLAY.to_string(),
        }
    }
}
