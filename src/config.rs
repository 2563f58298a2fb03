use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{HeatmapError, Result};
use crate::scoring::{MoodThresholds, OverrideRules};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScorerConfig {
    pub thresholds: MoodThresholds,
    pub overrides: OverrideRules,
}

impl ScorerConfig {
    /// Reads the explicit path, else `$HEATMAP_CONFIG_PATH`, else
    /// `config/heatmap.toml`. A missing file falls back to defaults.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_toml(&std::fs::read_to_string(path)?)?,
            _ => ScorerConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let ladder = [t.viral, t.loved, t.good, t.neutral];
        if ladder.iter().any(|value| !value.is_finite()) {
            return Err(HeatmapError::InvalidConfig(
                "mood thresholds must be finite".to_string(),
            ));
        }
        if ladder.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(HeatmapError::InvalidConfig(format!(
                "mood thresholds must descend: viral {} >= loved {} >= good {} >= neutral {}",
                t.viral, t.loved, t.good, t.neutral
            )));
        }

        let rules = &self.overrides;
        let ratios = [rules.buzzing_comment_ratio, rules.trending_share_ratio];
        if ratios.iter().any(|ratio| !ratio.is_finite() || *ratio < 0.0) {
            return Err(HeatmapError::InvalidConfig(
                "override ratios must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        let targets = [
            ("HEATMAP_VIRAL_THRESHOLD", &mut self.thresholds.viral),
            ("HEATMAP_LOVED_THRESHOLD", &mut self.thresholds.loved),
            ("HEATMAP_GOOD_THRESHOLD", &mut self.thresholds.good),
            ("HEATMAP_NEUTRAL_THRESHOLD", &mut self.thresholds.neutral),
        ];
        for (key, target) in targets {
            if let Ok(raw) = env::var(key) {
                if let Ok(value) = raw.trim().parse::<f64>() {
                    *target = value;
                }
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("HEATMAP_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/heatmap.toml")))
}
