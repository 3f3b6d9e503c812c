use crate::ui::core::FontMetrics;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub blink_interval_ms: u64,
    /// Left padding between the view edge and the start of every line.
    pub text_origin_x: f64,
    pub tab_size: u8,
    pub font: FontMetrics,
    pub colors: ViewColors,
}

/// Colors as `#rrggbb` / `#rrggbbaa` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewColors {
    pub selection_focused: String,
    pub selection_unfocused: String,
    pub caret: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: 1000,
            text_origin_x: 0.0,
            tab_size: 4,
            font: FontMetrics::default(),
            colors: ViewColors::default(),
        }
    }
}

impl Default for ViewColors {
    fn default() -> Self {
        Self {
            selection_focused: "#b3d7ff".to_string(),
            selection_unfocused: "#dcdcdc".to_string(),
            caret: "#000000".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms.max(1))
    }
}
