use tracing::debug;
use uuid::Uuid;

use crate::error::LayoutError;
use crate::model::{Identified, Ranged, TimelineConfig, TimelineLane};

use super::{place_item, Axis, AxisScale, Placement, Size};

/// One positioned ruler grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    /// Timeline value at the grid's leading edge; what the ruler labels.
    pub label: f64,
    /// Geometry of the grid cell.
    pub placement: Placement,
}

/// One positioned item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    /// Identity of the placed item.
    pub item_id: Uuid,
    /// Geometry of the item box inside the scaled content viewport.
    pub placement: Placement,
}

/// All item placements for one lane, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneLayout {
    /// Identity of the lane.
    pub lane_id: Uuid,
    /// Item placements in the lane's display order.
    pub items: Vec<ItemPlacement>,
}

/// Full geometry for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Size a scroll container must give its content to honor the zoom
    /// factor: the active axis is scaled, the cross axis passes through.
    pub content_extent: Size,
    /// Per-lane item placements, in lane order.
    pub lanes: Vec<LaneLayout>,
    /// Ruler grid placements, in grid order.
    pub grids: Vec<GridPlacement>,
    /// Cross-axis extent of one control-panel slot, when the config
    /// requested a panel.
    pub control_panel_slot: Option<f64>,
}

/// Compute the full timeline geometry for one viewport.
///
/// Stateless: the host re-runs this whenever axis, range, scale, lane
/// data, or viewport size changes. Items are placed against the scaled
/// content box (so a full-range item spans the whole scrollable content),
/// while grid placement scales internally from the natural viewport; both
/// therefore agree on where any timeline value lands.
pub fn layout<L: TimelineLane>(
    config: &TimelineConfig,
    lanes: &[L],
    viewport: Size,
) -> Result<LayoutResult, LayoutError> {
    let axis = config.axis;
    let ruler = AxisScale::new(config.range, config.scale)?;

    let content_extent = match axis {
        Axis::Horizontal => Size::new(viewport.width * config.scale, viewport.height),
        Axis::Vertical => Size::new(viewport.width, viewport.height * config.scale),
    };

    let mut lane_layouts = Vec::with_capacity(lanes.len());
    for lane in lanes {
        let mut items = Vec::with_capacity(lane.items().len());
        for item in lane.items() {
            let placement = place_item(config.range, item.range(), content_extent, axis)?;
            items.push(ItemPlacement {
                item_id: item.id(),
                placement,
            });
        }
        lane_layouts.push(LaneLayout {
            lane_id: lane.id(),
            items,
        });
    }

    let grids = (0..ruler.number_of_grids())
        .map(|grid| GridPlacement {
            label: ruler.grid_label(grid),
            placement: ruler.place_grid(grid, viewport, axis),
        })
        .collect::<Vec<_>>();

    let control_panel_slot = if config.control_panel {
        Some(control_panel_slot_extent(viewport, axis, lanes.len())?)
    } else {
        None
    };

    debug!(
        lanes = lane_layouts.len(),
        items = lane_layouts.iter().map(|l| l.items.len()).sum::<usize>(),
        grids = grids.len(),
        "timeline layout pass"
    );

    Ok(LayoutResult {
        content_extent,
        lanes: lane_layouts,
        grids,
        control_panel_slot,
    })
}

/// Cross-axis extent of one per-lane control-panel slot.
pub fn control_panel_slot_extent(
    viewport: Size,
    axis: Axis,
    lane_count: usize,
) -> Result<f64, LayoutError> {
    if lane_count == 0 {
        return Err(LayoutError::EmptyTimeline);
    }
    Ok(viewport.across(axis) / lane_count as f64)
}
