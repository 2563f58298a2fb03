use tracing::debug;

use crate::config::ScorerConfig;
use crate::scoring::{MetricDistribution, MoodClassifier};
use crate::{Post, ScoredPost};

#[derive(Debug, Clone, Default)]
pub struct EngagementScorer {
    classifier: MoodClassifier,
}

impl EngagementScorer {
    pub fn new(classifier: MoodClassifier) -> Self {
        Self { classifier }
    }

    pub fn from_config(config: &ScorerConfig) -> Self {
        Self::new(MoodClassifier::new(
            config.thresholds.clone(),
            config.overrides.clone(),
        ))
    }

    /// Ranks every post against the rest of its batch. Output order matches
    /// input order.
    pub fn score(&self, posts: &[Post]) -> Vec<ScoredPost> {
        if posts.is_empty() {
            return Vec::new();
        }

        let likes = MetricDistribution::from_values(posts.iter().map(|post| post.likes));
        let comments = MetricDistribution::from_values(posts.iter().map(|post| post.comments));
        let shares = MetricDistribution::from_values(posts.iter().map(|post| post.shares));

        let scored: Vec<ScoredPost> = posts
            .iter()
            .map(|post| {
                let like_score = likes.percentile_rank(post.likes);
                let comment_score = comments.percentile_rank(post.comments);
                let share_score = shares.percentile_rank(post.shares);
                let engagement_score = (like_score + comment_score + share_score) / 3.0;

                let mood = self.classifier.classify(
                    engagement_score,
                    post.likes,
                    post.comments,
                    post.shares,
                );
                let style = mood.style();
                let total_engagement = post.total_engagement();
                let engagement_rate = post
                    .impressions
                    .filter(|impressions| *impressions > 0)
                    .map(|impressions| total_engagement as f64 / impressions as f64);

                ScoredPost {
                    post: post.clone(),
                    like_score,
                    comment_score,
                    share_score,
                    engagement_score,
                    mood,
                    emoji: style.emoji,
                    color: style.color,
                    intensity: style.intensity,
                    description: style.description,
                    total_engagement,
                    engagement_rate,
                }
            })
            .collect();

        debug!(posts = scored.len(), "scored engagement batch");
        scored
    }
}
