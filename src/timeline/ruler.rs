use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, TEXT_DIM};
use crate::core::{Axis, GridPlacement};

/// Ruler band with tick marks and labels
/// All elements use pointer-events: none so clicks pass through to the
/// band, where hosts may attach their own handlers.
#[component]
pub fn TimelineRuler(
    grids: Vec<GridPlacement>,
    axis: Axis,
    render_axis_label: Option<Callback<f64, Element>>,
) -> Element {
    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            for (index, grid) in grids.iter().enumerate() {
                {
                    let leading =
                        grid.placement.position.along(axis) - grid.placement.size.along(axis) / 2.0;
                    let tick_style = match axis {
                        Axis::Horizontal => format!(
                            "position: absolute; left: {leading}px; bottom: 0; width: 1px; height: 10px; background-color: {BORDER_STRONG}; pointer-events: none;"
                        ),
                        Axis::Vertical => format!(
                            "position: absolute; top: {leading}px; right: 0; height: 1px; width: 10px; background-color: {BORDER_STRONG}; pointer-events: none;"
                        ),
                    };
                    let label_style = match axis {
                        Axis::Horizontal => format!(
                            "position: absolute; left: {}px; top: 3px; font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none;",
                            leading + 4.0
                        ),
                        Axis::Vertical => format!(
                            "position: absolute; top: {}px; left: 3px; font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none;",
                            leading + 4.0
                        ),
                    };
                    let label: Element = match render_axis_label {
                        Some(renderer) => renderer.call(grid.label),
                        None => {
                            let text = format_grid_label(grid.label);
                            rsx! { "{text}" }
                        }
                    };
                    rsx! {
                        div {
                            key: "grid-{index}",
                            div { style: "{tick_style}" }
                            div { style: "{label_style}", {label} }
                        }
                    }
                }
            }
        }
    }
}

/// Default tick label: integral values render bare, fractional values keep
/// two decimals so sub-unit intervals stay readable.
fn format_grid_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grid_label() {
        assert_eq!(format_grid_label(0.0), "0");
        assert_eq!(format_grid_label(33.0), "33");
        assert_eq!(format_grid_label(0.30000000000000004), "0.30");
        assert_eq!(format_grid_label(-2.5), "-2.50");
    }
}
