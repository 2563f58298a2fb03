use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Viral,
    Loved,
    Good,
    Neutral,
    Quiet,
    Buzzing,
    Trending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodStyle {
    pub mood: Mood,
    pub emoji: &'static str,
    pub color: &'static str,
    pub intensity: Intensity,
    pub description: &'static str,
}

const MOOD_STYLES: [MoodStyle; 7] = [
    MoodStyle {
        mood: Mood::Viral,
        emoji: "🔥",
        color: "bg-red-500",
        intensity: Intensity::High,
        description: "Exceptional engagement across the board",
    },
    MoodStyle {
        mood: Mood::Loved,
        emoji: "❤️",
        color: "bg-pink-500",
        intensity: Intensity::High,
        description: "Strong audience appreciation",
    },
    MoodStyle {
        mood: Mood::Good,
        emoji: "😊",
        color: "bg-green-500",
        intensity: Intensity::Medium,
        description: "Solid, healthy engagement",
    },
    MoodStyle {
        mood: Mood::Neutral,
        emoji: "😐",
        color: "bg-yellow-400",
        intensity: Intensity::Low,
        description: "Average engagement for this batch",
    },
    MoodStyle {
        mood: Mood::Quiet,
        emoji: "😴",
        color: "bg-gray-400",
        intensity: Intensity::Low,
        description: "Below-average engagement",
    },
    MoodStyle {
        mood: Mood::Buzzing,
        emoji: "💬",
        color: "bg-purple-500",
        intensity: Intensity::High,
        description: "Sparking lots of conversation",
    },
    MoodStyle {
        mood: Mood::Trending,
        emoji: "📈",
        color: "bg-blue-500",
        intensity: Intensity::High,
        description: "Being shared widely",
    },
];

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Viral => "Viral",
            Mood::Loved => "Loved",
            Mood::Good => "Good",
            Mood::Neutral => "Neutral",
            Mood::Quiet => "Quiet",
            Mood::Buzzing => "Buzzing",
            Mood::Trending => "Trending",
        }
    }

    pub fn style(self) -> &'static MoodStyle {
        let index = match self {
            Mood::Viral => 0,
            Mood::Loved => 1,
            Mood::Good => 2,
            Mood::Neutral => 3,
            Mood::Quiet => 4,
            Mood::Buzzing => 5,
            Mood::Trending => 6,
        };
        &MOOD_STYLES[index]
    }

    pub fn intensity(self) -> Intensity {
        self.style().intensity
    }
}

pub fn mood_styles() -> &'static [MoodStyle] {
    &MOOD_STYLES
}

/// Lower bounds of the score ladder, checked top down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoodThresholds {
    pub viral: f64,
    pub loved: f64,
    pub good: f64,
    pub neutral: f64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            viral: 80.0,
            loved: 60.0,
            good: 40.0,
            neutral: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverrideRules {
    pub buzzing_comment_ratio: f64,
    pub buzzing_min_comments: u64,
    pub trending_share_ratio: f64,
    pub trending_min_shares: u64,
}

impl Default for OverrideRules {
    fn default() -> Self {
        Self {
            buzzing_comment_ratio: 0.5,
            buzzing_min_comments: 10,
            trending_share_ratio: 0.3,
            trending_min_shares: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoodClassifier {
    thresholds: MoodThresholds,
    overrides: OverrideRules,
}

impl MoodClassifier {
    pub fn new(thresholds: MoodThresholds, overrides: OverrideRules) -> Self {
        Self {
            thresholds,
            overrides,
        }
    }

    pub fn ladder_mood(&self, engagement_score: f64) -> Mood {
        let t = &self.thresholds;
        if engagement_score >= t.viral {
            Mood::Viral
        } else if engagement_score >= t.loved {
            Mood::Loved
        } else if engagement_score >= t.good {
            Mood::Good
        } else if engagement_score >= t.neutral {
            Mood::Neutral
        } else {
            Mood::Quiet
        }
    }

    /// Comment-heavy posts read as Buzzing, share-heavy ones as Trending.
    /// Buzzing wins when both patterns match.
    pub fn pattern_override(&self, likes: u64, comments: u64, shares: u64) -> Option<Mood> {
        let rules = &self.overrides;
        let likes = likes as f64;
        if comments as f64 > likes * rules.buzzing_comment_ratio
            && comments > rules.buzzing_min_comments
        {
            return Some(Mood::Buzzing);
        }
        if shares as f64 > likes * rules.trending_share_ratio
            && shares > rules.trending_min_shares
        {
            return Some(Mood::Trending);
        }
        None
    }

    pub fn classify(&self, engagement_score: f64, likes: u64, comments: u64, shares: u64) -> Mood {
        self.pattern_override(likes, comments, shares)
            .unwrap_or_else(|| self.ladder_mood(engagement_score))
    }
}
