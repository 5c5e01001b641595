//! Shared UI constants such as colors and timeline sizing.
//! The default renderings in `timeline` draw exclusively from this palette;
//! hosts that supply their own render callbacks can ignore it.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_DIM: &str = "#52525b";

/// Accent used for lanes that don't declare their own color.
pub const ACCENT_DEFAULT: &str = "#3b82f6";

/// Thickness of the ruler band across the active axis.
pub const RULER_THICKNESS_PX: f64 = 24.0;
/// Thickness of the control-panel column (or row, on a vertical axis).
pub const PANEL_THICKNESS_PX: f64 = 140.0;
/// Smallest visual extent of an item box in the default rendering.
/// Zero-magnitude items are legal and would otherwise be invisible.
pub const MIN_ITEM_EXTENT_PX: f64 = 2.0;

/// Scale clamp bounds for hosts driving zoom controls.
pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 64.0;
