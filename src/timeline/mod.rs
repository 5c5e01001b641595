//! Timeline components
//!
//! This module contains the Dioxus layer over the layout engine:
//! - TimelineView: scroll container composing ruler, lane rows, and panel
//! - TimelineRuler: ruler band with tick marks and labels
//! - LaneRow: one lane's item boxes
//! - LanePanel: per-lane control-panel slots
//!
//! None of these compute geometry beyond converting a box center to a CSS
//! corner; everything else comes from `crate::core`.

mod control_panel;
mod lane_row;
mod panel;
mod ruler;

pub use control_panel::{LanePanel, PanelRenderArgs};
pub use lane_row::{ItemRenderArgs, LaneRow};
pub use panel::TimelineView;
pub use ruler::TimelineRuler;

use crate::constants::{MAX_SCALE, MIN_SCALE};

/// Clamp a zoom factor to the window the widget renders comfortably.
/// Hosts driving zoom controls call this before storing a new scale.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scale_bounds() {
        assert_eq!(clamp_scale(0.0), MIN_SCALE);
        assert_eq!(clamp_scale(3.5), 3.5);
        assert_eq!(clamp_scale(1e9), MAX_SCALE);
    }
}
