pub mod config;
pub mod error;
pub mod input;
pub mod sample;
pub mod scoring;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ScorerConfig;
use crate::scoring::{EngagementScorer, Intensity, Mood};

pub use crate::error::{HeatmapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Facebook,
    #[default]
    Other,
}

impl Platform {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "instagram" | "ig" => Some(Platform::Instagram),
            "tiktok" | "tt" => Some(Platform::Tiktok),
            "youtube" | "yt" => Some(Platform::Youtube),
            "facebook" | "fb" => Some(Platform::Facebook),
            "other" => Some(Platform::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Other => "other",
        }
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .and_then(Platform::from_str)
            .unwrap_or(Platform::Other))
    }
}

/// A post as supplied by the caller. Only the three counts feed the scorer;
/// everything else passes through to the output untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "input::lenient_id")]
    pub id: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default, deserialize_with = "input::coalesce_count")]
    pub likes: u64,
    #[serde(default, deserialize_with = "input::coalesce_count")]
    pub comments: u64,
    #[serde(default, deserialize_with = "input::coalesce_count")]
    pub shares: u64,
    #[serde(default, deserialize_with = "input::coalesce_optional_count")]
    pub impressions: Option<u64>,
    #[serde(
        default,
        alias = "createdAt",
        alias = "timestamp",
        deserialize_with = "input::lenient_timestamp"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        platform: Platform,
        likes: u64,
        comments: u64,
        shares: u64,
    ) -> Self {
        Self {
            id: id.into(),
            platform,
            likes,
            comments,
            shares,
            impressions: None,
            created_at: DateTime::<Utc>::default(),
            title: None,
            content: None,
        }
    }

    pub fn total_engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredPost {
    #[serde(flatten)]
    pub post: Post,
    pub like_score: f64,
    pub comment_score: f64,
    pub share_score: f64,
    pub engagement_score: f64,
    pub mood: Mood,
    pub emoji: &'static str,
    pub color: &'static str,
    pub intensity: Intensity,
    pub description: &'static str,
    pub total_engagement: u64,
    pub engagement_rate: Option<f64>,
}

/// Scores a batch with the default mood ladder.
pub fn score_posts(posts: &[Post]) -> Vec<ScoredPost> {
    score_posts_with_config(posts, &ScorerConfig::default())
}

pub fn score_posts_with_config(posts: &[Post], config: &ScorerConfig) -> Vec<ScoredPost> {
    EngagementScorer::from_config(config).score(posts)
}

/// Newest first. Presentation ordering only; scores are unaffected.
pub fn sort_timeline(posts: &mut [ScoredPost]) {
    posts.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
