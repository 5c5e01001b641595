use thiserror::Error;

/// Errors produced by the layout engine.
///
/// Geometry functions return these synchronously instead of letting a bad
/// denominator propagate as NaN through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// A timeline range with non-positive magnitude was supplied where a
    /// positive magnitude is required.
    #[error("invalid timeline range [{lower}, {upper}): magnitude must be positive")]
    InvalidRange {
        /// Lower bound of the offending range.
        lower: f64,
        /// Upper bound of the offending range.
        upper: f64,
    },
    /// Control-panel slot sizing was requested for a timeline with no lanes.
    #[error("timeline has no lanes to size control-panel slots for")]
    EmptyTimeline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::InvalidRange {
            lower: 5.0,
            upper: 5.0,
        };
        assert!(err.to_string().contains("[5, 5)"));
        assert!(LayoutError::EmptyTimeline.to_string().contains("no lanes"));
    }
}
