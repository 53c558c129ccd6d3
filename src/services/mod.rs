pub mod candidates;
pub mod classifier;
pub mod enrichment;
pub mod mood_mapper;
pub mod normalizer;
pub mod providers;
pub mod recommendations;

pub use candidates::{CandidateSelector, MovieDataset};
pub use classifier::EmotionClassifier;
pub use enrichment::MetadataEnricher;
pub use recommendations::{MoodAnalysis, Recommendation, RecommendationPipeline};
