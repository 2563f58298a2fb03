use serde::Serialize;

use crate::scoring::Mood;
use crate::ScoredPost;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapSummary {
    pub average_score: i64,
    pub total_posts: usize,
    pub dominant_mood: Option<Mood>,
    pub mood_counts: Vec<(Mood, usize)>,
}

impl HeatmapSummary {
    pub fn from_scored(posts: &[ScoredPost]) -> Self {
        if posts.is_empty() {
            return Self {
                average_score: 0,
                total_posts: 0,
                dominant_mood: None,
                mood_counts: Vec::new(),
            };
        }

        let total: f64 = posts.iter().map(|post| post.engagement_score).sum();
        let average_score = (total / posts.len() as f64).round() as i64;

        // Kept in first-seen order so ties resolve to the earliest mood.
        let mut mood_counts: Vec<(Mood, usize)> = Vec::new();
        for post in posts {
            match mood_counts.iter_mut().find(|(mood, _)| *mood == post.mood) {
                Some((_, count)) => *count += 1,
                None => mood_counts.push((post.mood, 1)),
            }
        }

        let mut dominant: Option<(Mood, usize)> = None;
        for (mood, count) in &mood_counts {
            if dominant.map_or(true, |(_, best)| *count > best) {
                dominant = Some((*mood, *count));
            }
        }

        Self {
            average_score,
            total_posts: posts.len(),
            dominant_mood: dominant.map(|(mood, _)| mood),
            mood_counts,
        }
    }

    pub fn count_for(&self, mood: Mood) -> usize {
        self.mood_counts
            .iter()
            .find(|(candidate, _)| *candidate == mood)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
