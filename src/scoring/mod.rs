pub mod mood;
pub mod percentile;
pub mod pipeline;
pub mod summary;

pub use mood::{
    mood_styles, Intensity, Mood, MoodClassifier, MoodStyle, MoodThresholds, OverrideRules,
};
pub use percentile::MetricDistribution;
pub use pipeline::EngagementScorer;
pub use summary::HeatmapSummary;
