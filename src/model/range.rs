use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Half-open interval `[lower, upper)` on the timeline axis.
///
/// Bounds are plain `f64` coordinates: seconds, samples, or any other
/// continuous unit the host picks. A zero-magnitude range is representable
/// because instantaneous items use one; the geometry functions reject
/// non-positive magnitudes wherever the range is used as a denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
}

impl TimeRange {
    /// Create a range, rejecting inverted bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, LayoutError> {
        if upper < lower {
            return Err(LayoutError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// `upper - lower`.
    pub fn magnitude(&self) -> f64 {
        self.upper - self.lower
    }

    /// True when the range covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.magnitude() == 0.0
    }

    /// True when `at` falls inside `[lower, upper)`.
    pub fn contains(&self, at: f64) -> bool {
        at >= self.lower && at < self.upper
    }

    /// The magnitude, or `InvalidRange` unless it is strictly positive.
    pub(crate) fn require_positive(&self) -> Result<f64, LayoutError> {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            Ok(magnitude)
        } else {
            Err(LayoutError::InvalidRange {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}
