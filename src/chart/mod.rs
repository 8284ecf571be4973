//! Interactive line chart: geometry, hit-testing, focus and SVG output

mod layout;
mod tooltip;
mod focus;
mod render;

pub use layout::{layout, value_bounds, ChartError, ChartGeometry, GRID_LINES};
pub use tooltip::TooltipPlacement;
pub use focus::{Focus, FocusChange, FocusState, FocusTracker, PointerEvent};
pub use render::{render_svg, ChartStyle, FocusOverlay, Rgba};
