// File: crates/trend-core/src/config.rs
// Summary: TOML chart configuration with defaults for every field.
//
// ```toml
// duration_ms = 3000
// threshold = 0.3
// theme = "dark"
//
// [frame]
// width = 900
// height = 500
// padding = 80
// max_value = 5
//
// [style]
// point_radius = 10
// ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TrendError};
use crate::scene::SceneStyle;
use crate::theme::{self, Theme};
use crate::types::{ChartFrame, CHART_THRESHOLD, DURATION_MS};
use crate::visibility::Threshold;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub frame: ChartFrame,

    #[serde(default)]
    pub style: SceneStyle,

    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_duration_ms() -> u64 {
    DURATION_MS
}

fn default_threshold() -> f64 {
    CHART_THRESHOLD
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            frame: ChartFrame::default(),
            style: SceneStyle::default(),
            duration_ms: default_duration_ms(),
            threshold: default_threshold(),
            theme: default_theme(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ChartConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| TrendError::ConfigIo { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    /// Check every field that has a contract.
    pub fn validate(&self) -> Result<()> {
        self.frame.validate()?;
        self.threshold()?;
        if self.duration_ms == 0 {
            return Err(TrendError::InvalidDuration);
        }
        Ok(())
    }

    pub fn threshold(&self) -> Result<Threshold> {
        Threshold::new(self.threshold)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Resolve the theme name; unknown names fall back to light.
    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
