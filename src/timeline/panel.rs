use dioxus::prelude::*;
use tracing::warn;

use crate::constants::{
    BG_BASE, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, PANEL_THICKNESS_PX, RULER_THICKNESS_PX,
};
use crate::core::{layout, Axis, ItemPlacement, Size};
use crate::model::{Lane, TimeRange, TimelineConfig};

use super::control_panel::{LanePanel, PanelRenderArgs};
use super::lane_row::{ItemRenderArgs, LaneRow};
use super::ruler::TimelineRuler;

/// Main timeline widget.
///
/// The host supplies the measured viewport (`width` × `height`) plus the
/// timeline data; everything visible is recomputed from those inputs on
/// every render. Layout structure:
///
/// ```text
/// ┌────────────────┬─────────────────────────────────────┐
/// │ [Corner]       │ [Ruler band, sticky]                │
/// ├────────────────┼─────────────────────────────────────┤
/// │ [Panel slots]  │ [Lane rows inside scaled content]   │
/// │                │ ↔ scrolls along the active axis     │
/// └────────────────┴─────────────────────────────────────┘
/// ```
///
/// (Transposed when the axis is vertical.) On a malformed configuration
/// the component logs a warning and renders nothing; recovery policy
/// belongs to the host.
#[component]
pub fn TimelineView(
    axis: Axis,
    range: TimeRange,
    scale: f64,
    lanes: Vec<Lane>,
    width: f64,
    height: f64,
    #[props(default)] control_panel: bool,
    render_item: Option<Callback<ItemRenderArgs, Element>>,
    render_axis_label: Option<Callback<f64, Element>>,
    render_control_panel: Option<Callback<PanelRenderArgs, Element>>,
) -> Element {
    let config = TimelineConfig {
        axis,
        range,
        scale: super::clamp_scale(scale),
        control_panel,
    };

    // The ruler band is carved out of the viewport before lanes divide the
    // remaining cross dimension.
    let lane_area = match axis {
        Axis::Horizontal => Size::new(width, (height - RULER_THICKNESS_PX).max(0.0)),
        Axis::Vertical => Size::new((width - RULER_THICKNESS_PX).max(0.0), height),
    };

    let result = match layout(&config, &lanes, lane_area) {
        Ok(result) => result,
        Err(err) => {
            warn!(%err, "timeline layout failed, rendering nothing");
            return rsx! {};
        }
    };

    // Lane rows take the same cross slot the panel uses so the two columns
    // stay in register.
    let lane_slot = result.control_panel_slot.unwrap_or_else(|| {
        if lanes.is_empty() {
            0.0
        } else {
            lane_area.across(axis) / lanes.len() as f64
        }
    });
    let content_active = result.content_extent.along(axis);

    let outer_style = match axis {
        Axis::Horizontal => format!(
            "display: flex; flex-direction: row; width: {width}px; height: {height}px; background-color: {BG_BASE}; overflow: hidden;"
        ),
        Axis::Vertical => format!(
            "display: flex; flex-direction: column; width: {width}px; height: {height}px; background-color: {BG_BASE}; overflow: hidden;"
        ),
    };
    let panel_style = match axis {
        Axis::Horizontal => format!(
            "width: {PANEL_THICKNESS_PX}px; min-width: {PANEL_THICKNESS_PX}px; flex-shrink: 0; display: flex; flex-direction: column; background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT}; z-index: 20;"
        ),
        Axis::Vertical => format!(
            "height: {PANEL_THICKNESS_PX}px; min-height: {PANEL_THICKNESS_PX}px; flex-shrink: 0; display: flex; flex-direction: row; background-color: {BG_ELEVATED}; border-bottom: 1px solid {BORDER_DEFAULT}; z-index: 20;"
        ),
    };
    let corner_style = match axis {
        Axis::Horizontal => format!(
            "height: {RULER_THICKNESS_PX}px; flex-shrink: 0; border-bottom: 1px solid {BORDER_DEFAULT}; background-color: {BG_ELEVATED};"
        ),
        Axis::Vertical => format!(
            "width: {RULER_THICKNESS_PX}px; flex-shrink: 0; border-right: 1px solid {BORDER_DEFAULT}; background-color: {BG_ELEVATED};"
        ),
    };
    let content_style = match axis {
        Axis::Horizontal => format!(
            "min-width: {content_active}px; display: flex; flex-direction: column; position: relative;"
        ),
        Axis::Vertical => format!(
            "min-height: {content_active}px; display: flex; flex-direction: row; position: relative;"
        ),
    };
    let ruler_band_style = match axis {
        Axis::Horizontal => format!(
            "height: {RULER_THICKNESS_PX}px; min-height: {RULER_THICKNESS_PX}px; position: sticky; top: 0; z-index: 15; background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};"
        ),
        Axis::Vertical => format!(
            "width: {RULER_THICKNESS_PX}px; min-width: {RULER_THICKNESS_PX}px; position: sticky; left: 0; z-index: 15; background-color: {BG_SURFACE}; border-right: 1px solid {BORDER_DEFAULT};"
        ),
    };
    let lanes_style = match axis {
        Axis::Horizontal => "display: flex; flex-direction: column; position: relative; flex: 1;",
        Axis::Vertical => "display: flex; flex-direction: row; position: relative; flex: 1;",
    };

    let rows: Vec<(Lane, Vec<ItemPlacement>)> = lanes
        .iter()
        .cloned()
        .zip(result.lanes.iter().map(|lane| lane.items.clone()))
        .collect();

    rsx! {
        div {
            style: "{outer_style}",

            // Control-panel block: corner spacer aligned with the ruler
            // band, then one slot per lane.
            if control_panel {
                div {
                    style: "{panel_style}",
                    div { style: "{corner_style}" }
                    LanePanel {
                        lanes: lanes.clone(),
                        axis: axis,
                        slot_extent: lane_slot,
                        render_control_panel: render_control_panel,
                    }
                }
            }

            // Scroll area: the inner content box is sized to the scaled
            // extent, which is what makes the zoom factor scrollable.
            div {
                style: "flex: 1; overflow: auto; position: relative;",
                div {
                    style: "{content_style}",

                    div {
                        style: "{ruler_band_style}",
                        TimelineRuler {
                            grids: result.grids.clone(),
                            axis: axis,
                            render_axis_label: render_axis_label,
                        }
                    }

                    div {
                        style: "{lanes_style}",
                        for (lane, placements) in rows {
                            LaneRow {
                                key: "{lane.id}",
                                lane: lane,
                                placements: placements,
                                axis: axis,
                                thickness: lane_slot,
                                render_item: render_item,
                            }
                        }
                    }
                }
            }
        }
    }
}
