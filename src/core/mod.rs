//! Pure layout engine
//!
//! Everything in here is synchronous, allocation-light arithmetic with no
//! Dioxus dependency: grid interval selection for the ruler, per-item
//! placement, and the orchestrator composing both into a full layout.

mod axis_scale;
mod engine;
mod geometry;
mod item_placement;

pub use axis_scale::AxisScale;
pub use engine::{
    control_panel_slot_extent, layout, GridPlacement, ItemPlacement, LaneLayout, LayoutResult,
};
pub use geometry::{Axis, Placement, Point, Size};
pub use item_placement::place_item;
