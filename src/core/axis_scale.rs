use crate::error::LayoutError;
use crate::model::TimeRange;

use super::{Axis, Placement, Size};

/// Grid interval selection for the ruler.
///
/// Derived from a range and zoom factor and never mutated; when either
/// input changes, the host constructs a fresh value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    range: TimeRange,
    scale: f64,
    interval: f64,
    number_of_grids: usize,
}

impl AxisScale {
    /// Choose a grid interval covering `range`.
    ///
    /// The interval is the power of ten two orders below the digit count of
    /// the range magnitude, which lands the tick spacing between 1/10th and
    /// 1/100th of the visible span. Deliberately simpler than a full
    /// 1/2/5 nice-number ladder.
    pub fn new(range: TimeRange, scale: f64) -> Result<Self, LayoutError> {
        let magnitude = range.require_positive()?;
        let digits = decimal_digit_count(magnitude.trunc());
        let interval = 10f64.powi(digits as i32 - 2);
        let number_of_grids = (magnitude / interval).ceil() as usize;
        Ok(Self {
            range,
            scale,
            interval,
            number_of_grids,
        })
    }

    /// The range this scale was derived from.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// The zoom factor this scale was derived from.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Grid spacing in timeline units.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Count of grids covering the range; at least 1 for any valid range.
    pub fn number_of_grids(&self) -> usize {
        self.number_of_grids
    }

    /// Timeline value at the leading edge of grid `grid`.
    pub fn grid_label(&self, grid: usize) -> f64 {
        self.range.lower + grid as f64 * self.interval
    }

    /// Geometry of grid `grid` inside `viewport` along `axis`.
    ///
    /// Grid extents are multiplied by the zoom factor here; the host is
    /// expected to size the scroll content to the scaled extent so the
    /// ruler and the lane content stay in register.
    pub fn place_grid(&self, grid: usize, viewport: Size, axis: Axis) -> Placement {
        let fraction = self.interval / self.range.magnitude();
        let extent = fraction * viewport.along(axis) * self.scale;
        let center = grid as f64 * fraction * viewport.along(axis) * self.scale + extent / 2.0;
        Placement::on_axis(axis, extent, center, viewport.across(axis))
    }
}

/// Digit count of the integer part of a non-negative value; 0 counts as
/// one digit, matching `numberOfDecimalDigits` semantics for sub-unit
/// magnitudes.
fn decimal_digit_count(truncated: f64) -> u32 {
    let mut n = truncated as u64;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn range(lower: f64, upper: f64) -> TimeRange {
        TimeRange::new(lower, upper).unwrap()
    }

    #[test]
    fn test_ten_unit_range_uses_unit_interval() {
        let scale = AxisScale::new(range(0.0, 10.0), 1.0).unwrap();
        assert!((scale.interval() - 1.0).abs() < EPSILON);
        assert_eq!(scale.number_of_grids(), 10);
    }

    #[test]
    fn test_interval_tracks_magnitude_digits() {
        // 90 units -> two digits -> interval 1
        let scale = AxisScale::new(range(10.0, 100.0), 1.0).unwrap();
        assert!((scale.interval() - 1.0).abs() < EPSILON);
        assert_eq!(scale.number_of_grids(), 90);

        // 1500 units -> four digits -> interval 100
        let scale = AxisScale::new(range(0.0, 1500.0), 1.0).unwrap();
        assert!((scale.interval() - 100.0).abs() < EPSILON);
        assert_eq!(scale.number_of_grids(), 15);
    }

    #[test]
    fn test_sub_unit_magnitude() {
        // Magnitude 0.5 truncates to 0, which counts as one digit.
        let scale = AxisScale::new(range(0.0, 0.5), 1.0).unwrap();
        assert!((scale.interval() - 0.1).abs() < EPSILON);
        assert_eq!(scale.number_of_grids(), 5);
    }

    #[test]
    fn test_grid_count_is_at_least_one() {
        let scale = AxisScale::new(range(0.0, 0.05), 1.0).unwrap();
        assert!(scale.number_of_grids() >= 1);
        let magnitude = scale.range().magnitude();
        assert_eq!(
            scale.number_of_grids(),
            (magnitude / scale.interval()).ceil() as usize
        );
    }

    #[test]
    fn test_degenerate_range_is_rejected() {
        let err = AxisScale::new(range(5.0, 5.0), 1.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidRange {
                lower: 5.0,
                upper: 5.0
            }
        );
    }

    #[test]
    fn test_grid_label_starts_at_lower_bound() {
        let scale = AxisScale::new(range(30.0, 90.0), 1.0).unwrap();
        assert!((scale.grid_label(0) - 30.0).abs() < EPSILON);
        assert!((scale.grid_label(3) - 33.0).abs() < EPSILON);
    }

    #[test]
    fn test_place_grid_geometry() {
        let scale = AxisScale::new(range(0.0, 10.0), 1.0).unwrap();
        let viewport = Size::new(100.0, 50.0);

        // Each grid is 1/10 of the 100px viewport at scale 1.
        let first = scale.place_grid(0, viewport, Axis::Horizontal);
        assert!((first.size.width - 10.0).abs() < EPSILON);
        assert!((first.size.height - 50.0).abs() < EPSILON);
        assert!((first.position.x - 5.0).abs() < EPSILON);
        assert!((first.position.y - 25.0).abs() < EPSILON);

        let fourth = scale.place_grid(3, viewport, Axis::Horizontal);
        assert!((fourth.position.x - 35.0).abs() < EPSILON);
    }

    #[test]
    fn test_place_grid_applies_zoom() {
        let scale = AxisScale::new(range(0.0, 10.0), 2.0).unwrap();
        let viewport = Size::new(100.0, 50.0);
        let grid = scale.place_grid(1, viewport, Axis::Horizontal);
        assert!((grid.size.width - 20.0).abs() < EPSILON);
        assert!((grid.position.x - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_grid_positions_are_non_decreasing() {
        let scale = AxisScale::new(range(0.0, 73.0), 1.5).unwrap();
        let viewport = Size::new(640.0, 480.0);
        let mut previous = f64::NEG_INFINITY;
        for grid in 0..scale.number_of_grids() {
            let position = scale
                .place_grid(grid, viewport, Axis::Vertical)
                .position
                .along(Axis::Vertical);
            assert!(position >= previous);
            previous = position;
        }
    }
}
