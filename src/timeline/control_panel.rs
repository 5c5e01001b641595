use dioxus::prelude::*;

use crate::constants::{ACCENT_DEFAULT, BORDER_SUBTLE, TEXT_SECONDARY};
use crate::core::Axis;
use crate::model::Lane;

/// Arguments handed to a custom control-panel slot renderer.
#[derive(Clone, PartialEq)]
pub struct PanelRenderArgs {
    /// The lane this slot controls.
    pub lane: Lane,
    /// Cross-axis extent of the slot.
    pub slot_extent: f64,
}

/// Control-panel slots, one per lane, dividing the cross dimension evenly.
/// The default slot shows the lane's accent and name, like a track-label
/// sidebar; hosts that need real controls supply `render_control_panel`.
#[component]
pub fn LanePanel(
    lanes: Vec<Lane>,
    axis: Axis,
    slot_extent: f64,
    render_control_panel: Option<Callback<PanelRenderArgs, Element>>,
) -> Element {
    rsx! {
        for lane in lanes.iter() {
            {
                let slot_style = match axis {
                    Axis::Horizontal => format!(
                        "height: {slot_extent}px; min-height: {slot_extent}px; display: flex; align-items: center; gap: 10px; padding: 0 12px; border-bottom: 1px solid {BORDER_SUBTLE}; overflow: hidden;"
                    ),
                    Axis::Vertical => format!(
                        "width: {slot_extent}px; min-width: {slot_extent}px; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 10px; padding: 12px 0; border-right: 1px solid {BORDER_SUBTLE}; overflow: hidden;"
                    ),
                };
                let accent = lane
                    .color
                    .clone()
                    .unwrap_or_else(|| ACCENT_DEFAULT.to_string());
                let content: Element = match render_control_panel {
                    Some(renderer) => renderer.call(PanelRenderArgs {
                        lane: lane.clone(),
                        slot_extent,
                    }),
                    None => rsx! {
                        div {
                            style: "width: 3px; height: 16px; border-radius: 2px; background-color: {accent}; flex-shrink: 0;",
                        }
                        span {
                            style: "font-size: 12px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                            "{lane.name}"
                        }
                    },
                };
                rsx! {
                    div {
                        key: "{lane.id}",
                        style: "{slot_style}",
                        {content}
                    }
                }
            }
        }
    }
}
