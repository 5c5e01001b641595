use dioxus::prelude::*;

use crate::constants::{
    ACCENT_DEFAULT, BG_ELEVATED, BORDER_SUBTLE, MIN_ITEM_EXTENT_PX, TEXT_SECONDARY,
};
use crate::core::{Axis, ItemPlacement};
use crate::model::Lane;

/// Arguments handed to a custom item renderer.
#[derive(Clone, PartialEq)]
pub struct ItemRenderArgs {
    /// The item being rendered.
    pub item: crate::model::Item,
    /// Geometry computed for the item inside the scaled content box.
    pub placement: crate::core::Placement,
    /// Accent color inherited from the lane.
    pub accent: String,
}

/// One lane's content band.
///
/// Items are absolutely positioned at their computed geometry; the band
/// itself takes the cross-axis slot the panel sizing assigned to the lane.
#[component]
pub fn LaneRow(
    lane: Lane,
    placements: Vec<ItemPlacement>,
    axis: Axis,
    thickness: f64,
    render_item: Option<Callback<ItemRenderArgs, Element>>,
) -> Element {
    let accent = lane
        .color
        .clone()
        .unwrap_or_else(|| ACCENT_DEFAULT.to_string());

    let band_style = match axis {
        Axis::Horizontal => format!(
            "height: {thickness}px; min-height: {thickness}px; border-bottom: 1px solid {BORDER_SUBTLE}; position: relative; flex-shrink: 0;"
        ),
        Axis::Vertical => format!(
            "width: {thickness}px; min-width: {thickness}px; border-right: 1px solid {BORDER_SUBTLE}; position: relative; flex-shrink: 0;"
        ),
    };

    rsx! {
        div {
            style: "{band_style}",

            for (item, placed) in lane.items.iter().zip(placements.iter()) {
                {
                    let origin = placed.placement.origin();
                    // Active-axis extent comes from the placement; the cross
                    // extent is the band thickness minus a 2px inset.
                    let inset_cross = (thickness - 4.0).max(0.0);
                    let (left, top, box_width, box_height) = match axis {
                        Axis::Horizontal => (
                            origin.x,
                            2.0,
                            placed.placement.size.width.max(MIN_ITEM_EXTENT_PX),
                            inset_cross,
                        ),
                        Axis::Vertical => (
                            2.0,
                            origin.y,
                            inset_cross,
                            placed.placement.size.height.max(MIN_ITEM_EXTENT_PX),
                        ),
                    };

                    let chrome = if render_item.is_some() {
                        String::new()
                    } else {
                        format!(
                            "background-color: {BG_ELEVATED}; border: 1px solid {accent}; border-radius: 4px; display: flex; align-items: center; padding: 0 6px; overflow: hidden;"
                        )
                    };
                    let box_style = format!(
                        "position: absolute; left: {left}px; top: {top}px; width: {box_width}px; height: {box_height}px; user-select: none; {chrome}"
                    );

                    let content: Element = match render_item {
                        Some(renderer) => renderer.call(ItemRenderArgs {
                            item: item.clone(),
                            placement: placed.placement,
                            accent: accent.clone(),
                        }),
                        None => {
                            let label = item.label.clone().unwrap_or_default();
                            rsx! {
                                div {
                                    style: "width: 3px; height: 60%; border-radius: 2px; background-color: {accent}; flex-shrink: 0; margin-right: 6px;",
                                }
                                span {
                                    style: "font-size: 10px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                    "{label}"
                                }
                            }
                        }
                    };

                    rsx! {
                        div {
                            key: "{item.id}",
                            style: "{box_style}",
                            {content}
                        }
                    }
                }
            }
        }
    }
}
