use serde::{Deserialize, Serialize};

use engagement_heatmap::input::assign_missing_ids;
use engagement_heatmap::scoring::{mood_styles, HeatmapSummary, MoodStyle, MoodThresholds};
use engagement_heatmap::{sort_timeline, HeatmapError, Platform, Post, ScoredPost};

#[derive(Debug, Deserialize)]
pub struct ApiHeatmapRequest {
    #[serde(default)]
    pub posts: Vec<Post>,
    pub order: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOrder {
    Input,
    Timeline,
}

impl ApiHeatmapRequest {
    /// Applies the platform filter before scoring; the filtered set is the batch.
    pub fn into_batch(self) -> Result<(Vec<Post>, ViewOrder), HeatmapError> {
        let order = match self.order.as_deref().map(|value| value.trim().to_lowercase()) {
            None => ViewOrder::Input,
            Some(value) if value.is_empty() || value == "input" => ViewOrder::Input,
            Some(value) if value == "timeline" => ViewOrder::Timeline,
            Some(value) => {
                return Err(HeatmapError::InvalidArgument(format!(
                    "invalid order: {}",
                    value
                )))
            }
        };

        let mut posts = self.posts;
        if let Some(platform) = self.platform.as_deref().filter(|value| !value.trim().is_empty()) {
            let platform = Platform::from_str(platform).ok_or_else(|| {
                HeatmapError::InvalidArgument(format!("invalid platform: {}", platform))
            })?;
            posts.retain(|post| post.platform == platform);
        }
        assign_missing_ids(&mut posts);
        Ok((posts, order))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiHeatmapResponse {
    pub posts: Vec<ScoredPost>,
    pub summary: HeatmapSummary,
}

impl ApiHeatmapResponse {
    pub fn from_scored(mut posts: Vec<ScoredPost>, order: ViewOrder) -> Self {
        let summary = HeatmapSummary::from_scored(&posts);
        if order == ViewOrder::Timeline {
            sort_timeline(&mut posts);
        }
        Self { posts, summary }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiMoodLegend {
    pub thresholds: MoodThresholds,
    pub moods: &'static [MoodStyle],
}

impl ApiMoodLegend {
    pub fn new(thresholds: MoodThresholds) -> Self {
        Self {
            thresholds,
            moods: mood_styles(),
        }
    }
}
