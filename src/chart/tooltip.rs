//! Tooltip placement next to the focused point

use serde::{Deserialize, Serialize};

/// Horizontal gap between the cursor and the tooltip
pub const TOOLTIP_OFFSET: f64 = 8.0;

/// Minimum distance kept from the chart's left and top edges
pub const TOOLTIP_EDGE_MARGIN: f64 = 4.0;

/// How far above the cursor point the tooltip's top edge sits
pub const TOOLTIP_RISE: f64 = 28.0;

/// Top-left corner of a tooltip box in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipPlacement {
    /// Place a tooltip of `tooltip_width` beside the cursor at (`cx`, `cy`)
    ///
    /// Goes right of the cursor unless that would overflow `chart_width`, then
    /// flips left. Always sits above the cursor, clamped to the top margin.
    pub fn beside(cx: f64, cy: f64, tooltip_width: f64, chart_width: f64) -> Self {
        let left = if cx + TOOLTIP_OFFSET + tooltip_width > chart_width {
            (cx - TOOLTIP_OFFSET - tooltip_width).max(TOOLTIP_EDGE_MARGIN)
        } else {
            (cx + TOOLTIP_OFFSET).max(TOOLTIP_EDGE_MARGIN)
        };

        Self {
            left,
            top: (cy - TOOLTIP_RISE).max(TOOLTIP_EDGE_MARGIN),
        }
    }

    /// True when the tooltip was flipped to the left of the cursor
    pub fn is_left_of(&self, cx: f64) -> bool {
        self.left < cx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_right_of_cursor() {
        let tip = TooltipPlacement::beside(100.0, 120.0, 80.0, 400.0);
        assert_eq!(tip, TooltipPlacement { left: 108.0, top: 92.0 });
        assert!(!tip.is_left_of(100.0));
    }

    #[test]
    fn test_flips_left_near_right_edge() {
        let tip = TooltipPlacement::beside(350.0, 120.0, 80.0, 400.0);
        assert_eq!(tip.left, 262.0);
        assert!(tip.is_left_of(350.0));

        // exactly fitting stays on the right
        let fits = TooltipPlacement::beside(312.0, 120.0, 80.0, 400.0);
        assert_eq!(fits.left, 320.0);
    }

    #[test]
    fn test_clamps_to_edges() {
        let tip = TooltipPlacement::beside(50.0, 10.0, 300.0, 320.0);
        assert_eq!(tip.left, TOOLTIP_EDGE_MARGIN);
        assert_eq!(tip.top, TOOLTIP_EDGE_MARGIN);
    }
}
