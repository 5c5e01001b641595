use crate::error::LayoutError;
use crate::model::TimeRange;

use super::{Axis, Placement, Size};

/// Place one item's range inside a viewport.
///
/// Geometry is a fraction of the viewport passed in; the zoom factor never
/// appears here because items live inside a content box the orchestrator
/// has already scaled. Items reaching outside `timeline_range` are not
/// clipped and simply place (partially) off-viewport.
///
/// A zero-magnitude `item_range` is legal and produces a zero-extent box;
/// a non-positive `timeline_range` magnitude is `InvalidRange`.
pub fn place_item(
    timeline_range: TimeRange,
    item_range: TimeRange,
    viewport: Size,
    axis: Axis,
) -> Result<Placement, LayoutError> {
    let timeline_magnitude = timeline_range.require_positive()?;
    let active = viewport.along(axis);
    let extent = active * item_range.magnitude() / timeline_magnitude;
    let center =
        (item_range.lower - timeline_range.lower) * active / timeline_magnitude + extent / 2.0;
    Ok(Placement::on_axis(
        axis,
        extent,
        center,
        viewport.across(axis),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    const EPSILON: f64 = 1e-9;

    fn range(lower: f64, upper: f64) -> TimeRange {
        TimeRange::new(lower, upper).unwrap()
    }

    #[test]
    fn test_tail_item_in_ten_unit_timeline() {
        // Item [7, 10) in timeline [0, 10) on a 100x50 viewport:
        // 30px wide, centered at x = 85.
        let placement = place_item(
            range(0.0, 10.0),
            range(7.0, 10.0),
            Size::new(100.0, 50.0),
            Axis::Horizontal,
        )
        .unwrap();
        assert!((placement.size.width - 30.0).abs() < EPSILON);
        assert!((placement.size.height - 50.0).abs() < EPSILON);
        assert!((placement.position.x - 85.0).abs() < EPSILON);
        assert!((placement.position.y - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_full_range_item_fills_viewport() {
        let placement = place_item(
            range(0.0, 10.0),
            range(0.0, 10.0),
            Size::new(100.0, 50.0),
            Axis::Horizontal,
        )
        .unwrap();
        assert_eq!(placement.size, Size::new(100.0, 50.0));
        assert_eq!(placement.position, Point::new(50.0, 25.0));
    }

    #[test]
    fn test_vertical_axis_swaps_dimensions() {
        let placement = place_item(
            range(0.0, 10.0),
            range(7.0, 10.0),
            Size::new(50.0, 100.0),
            Axis::Vertical,
        )
        .unwrap();
        assert!((placement.size.height - 30.0).abs() < EPSILON);
        assert!((placement.size.width - 50.0).abs() < EPSILON);
        assert!((placement.position.y - 85.0).abs() < EPSILON);
        assert!((placement.position.x - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_instant_item_is_legal() {
        let placement = place_item(
            range(0.0, 10.0),
            range(4.0, 4.0),
            Size::new(100.0, 50.0),
            Axis::Horizontal,
        )
        .unwrap();
        assert_eq!(placement.size.width, 0.0);
        assert!((placement.position.x - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_timeline_is_rejected() {
        let err = place_item(
            range(5.0, 5.0),
            range(0.0, 1.0),
            Size::new(100.0, 50.0),
            Axis::Horizontal,
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidRange {
                lower: 5.0,
                upper: 5.0
            }
        );
    }

    #[test]
    fn test_out_of_range_item_is_not_clipped() {
        // Item entirely past the visible window places off-viewport.
        let placement = place_item(
            range(0.0, 10.0),
            range(12.0, 14.0),
            Size::new(100.0, 50.0),
            Axis::Horizontal,
        )
        .unwrap();
        assert!((placement.position.x - 130.0).abs() < EPSILON);
        assert!((placement.size.width - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_placement_preserves_item_order() {
        let timeline = range(0.0, 100.0);
        let viewport = Size::new(800.0, 36.0);
        let earlier = place_item(timeline, range(10.0, 20.0), viewport, Axis::Horizontal).unwrap();
        let later = place_item(timeline, range(20.0, 45.0), viewport, Axis::Horizontal).unwrap();
        assert!(earlier.position.x < later.position.x);
    }
}
