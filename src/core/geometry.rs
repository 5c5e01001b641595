use serde::{Deserialize, Serialize};

/// Orientation of the timeline's primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Time runs left to right; lanes stack top to bottom.
    #[default]
    Horizontal,
    /// Time runs top to bottom; lanes stack left to right.
    Vertical,
}

/// Width × height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimension along the active axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Dimension across the active axis.
    pub fn across(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }
}

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the active axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Computed box geometry: a size plus the position of the box center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Box size.
    pub size: Size,
    /// Center of the box in viewport coordinates.
    pub position: Point,
}

impl Placement {
    /// Assemble a placement from an active-axis extent and center plus the
    /// full cross-axis dimension. The cross axis is always centered.
    pub(crate) fn on_axis(axis: Axis, extent: f64, center: f64, cross: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                size: Size::new(extent, cross),
                position: Point::new(center, cross / 2.0),
            },
            Axis::Vertical => Self {
                size: Size::new(cross, extent),
                position: Point::new(cross / 2.0, center),
            },
        }
    }

    /// Top-left corner, for hosts that position boxes by corner (CSS
    /// `left`/`top`) rather than by center.
    pub fn origin(&self) -> Point {
        Point::new(
            self.position.x - self.size.width / 2.0,
            self.position.y - self.size.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_along_across() {
        let size = Size::new(100.0, 50.0);
        assert_eq!(size.along(Axis::Horizontal), 100.0);
        assert_eq!(size.across(Axis::Horizontal), 50.0);
        assert_eq!(size.along(Axis::Vertical), 50.0);
        assert_eq!(size.across(Axis::Vertical), 100.0);
    }

    #[test]
    fn test_on_axis_centers_cross_dimension() {
        let horizontal = Placement::on_axis(Axis::Horizontal, 30.0, 85.0, 50.0);
        assert_eq!(horizontal.size, Size::new(30.0, 50.0));
        assert_eq!(horizontal.position, Point::new(85.0, 25.0));

        let vertical = Placement::on_axis(Axis::Vertical, 30.0, 85.0, 50.0);
        assert_eq!(vertical.size, Size::new(50.0, 30.0));
        assert_eq!(vertical.position, Point::new(25.0, 85.0));
    }

    #[test]
    fn test_origin_from_center() {
        let placement = Placement::on_axis(Axis::Horizontal, 30.0, 85.0, 50.0);
        assert_eq!(placement.origin(), Point::new(70.0, 0.0));
    }
}
