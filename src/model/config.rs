use serde::{Deserialize, Serialize};

use crate::core::Axis;

use super::TimeRange;

/// Timeline-wide layout inputs shared by every lane and the ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Axis along which time runs.
    #[serde(default)]
    pub axis: Axis,
    /// Overall visible range shared by all lanes and the ruler.
    pub range: TimeRange,
    /// Zoom factor multiplying the natural viewport extent to produce the
    /// scrollable content extent. 1.0 fits the viewport exactly.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Whether the layout reserves per-lane control-panel slots.
    #[serde(default)]
    pub control_panel: bool,
}

impl TimelineConfig {
    /// Config at scale 1.0 with no control panel.
    pub fn new(axis: Axis, range: TimeRange) -> Self {
        Self {
            axis,
            range,
            scale: default_scale(),
            control_panel: false,
        }
    }

    /// Set the zoom factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Reserve per-lane control-panel slots in the layout.
    pub fn with_control_panel(mut self) -> Self {
        self.control_panel = true;
        self
    }
}

fn default_scale() -> f64 {
    1.0
}
