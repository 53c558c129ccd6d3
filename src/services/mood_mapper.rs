use crate::models::{EmotionLabel, MoodCluster};

/// Collapses an emotion into the mood cluster movies were grouped by.
///
/// Unknown emotions land in [`MoodCluster::Neutral`].
pub fn to_cluster(label: Option<EmotionLabel>) -> MoodCluster {
    match label {
        Some(EmotionLabel::Joy | EmotionLabel::Love) => MoodCluster::Positive,
        Some(EmotionLabel::Sadness | EmotionLabel::Fear | EmotionLabel::Anger) => {
            MoodCluster::Negative
        }
        Some(EmotionLabel::Surprise) | None => MoodCluster::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_emotions() {
        assert_eq!(to_cluster(Some(EmotionLabel::Joy)), MoodCluster::Positive);
        assert_eq!(to_cluster(Some(EmotionLabel::Love)), MoodCluster::Positive);
    }

    #[test]
    fn test_negative_emotions() {
        assert_eq!(to_cluster(Some(EmotionLabel::Sadness)), MoodCluster::Negative);
        assert_eq!(to_cluster(Some(EmotionLabel::Fear)), MoodCluster::Negative);
        assert_eq!(to_cluster(Some(EmotionLabel::Anger)), MoodCluster::Negative);
    }

    #[test]
    fn test_surprise_and_unknown_are_neutral() {
        assert_eq!(to_cluster(Some(EmotionLabel::Surprise)), MoodCluster::Neutral);
        assert_eq!(to_cluster(None), MoodCluster::Neutral);
    }

    #[test]
    fn test_every_label_maps_to_a_cluster() {
        for label in EmotionLabel::ALL {
            assert!(MoodCluster::ALL.contains(&to_cluster(Some(label))));
        }
    }
}
