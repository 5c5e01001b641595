//! Lane-based timeline visualization widget for Dioxus.
//!
//! The crate is split into three layers:
//! - `model`: plain data describing a timeline (ranges, items, lanes, config)
//! - `core`: the pure layout engine mapping time ranges to pixel geometry
//! - `timeline`: Dioxus components that render the computed geometry
//!
//! The `core` layer never touches Dioxus. Any host that can supply a
//! viewport size and timeline data can drive it directly and consume the
//! resulting `(size, position)` pairs and ruler labels itself.

pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod timeline;

pub use crate::core::{
    control_panel_slot_extent, layout, place_item, Axis, AxisScale, GridPlacement, ItemPlacement,
    LaneLayout, LayoutResult, Placement, Point, Size,
};
pub use crate::error::LayoutError;
pub use crate::model::{Identified, Item, Lane, Ranged, TimeRange, TimelineConfig, TimelineLane};
pub use crate::timeline::{clamp_scale, LanePanel, LaneRow, TimelineRuler, TimelineView};
