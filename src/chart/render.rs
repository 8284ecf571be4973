//! SVG rendering of a laid-out chart

use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontFamily,
};
use plotters_svg::SVGBackend;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use super::focus::Focus;
use super::layout::{ChartError, ChartGeometry};
use super::tooltip::TooltipPlacement;

/// Tooltip font size in px
const TOOLTIP_FONT_SIZE: f64 = 12.0;

/// Approximate glyph advance for the tooltip font, used in place of text measurement
const TOOLTIP_CHAR_WIDTH: f64 = 7.0;

const TOOLTIP_PAD_X: f64 = 6.0;
const TOOLTIP_PAD_Y: f64 = 2.0;

/// Length of each cursor dash and of the gap after it
const CURSOR_DASH: i32 = 4;

const CURSOR_RADIUS: u32 = 4;
const LINE_WIDTH: u32 = 2;

/// Color with opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl From<Rgba> for BackendColor {
    fn from(color: Rgba) -> Self {
        BackendColor {
            alpha: color.a,
            rgb: (color.r, color.g, color.b),
        }
    }
}

/// Colors for the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub stroke: Rgba,

    /// Area fill under the line; no area is drawn when unset
    pub fill: Option<Rgba>,

    pub cursor_color: Rgba,
    pub background: Rgba,
    pub grid_color: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl ChartStyle {
    /// Blue line with translucent fill, as on the projection screen
    pub fn projection() -> Self {
        Self {
            stroke: Rgba::rgb(0x3b, 0x82, 0xf6),
            fill: Some(Rgba::rgb(0x3b, 0x82, 0xf6).with_alpha(0.15)),
            ..Self::default()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke: Rgba::rgb(0x25, 0x63, 0xeb),
            fill: None,
            cursor_color: Rgba::rgb(0x11, 0x18, 0x27),
            background: Rgba::rgb(0xff, 0xff, 0xff),
            grid_color: Rgba::rgb(0xe5, 0xe7, 0xeb),
            tooltip_background: Rgba::rgb(0x11, 0x18, 0x27),
            tooltip_text: Rgba::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Focused point plus the text to show in its tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct FocusOverlay {
    pub focus: Focus,
    pub text: String,
}

impl FocusOverlay {
    /// Estimated rendered width of the tooltip box
    pub fn tooltip_width(&self) -> f64 {
        text_width(&self.text) + 2.0 * TOOLTIP_PAD_X
    }

    pub fn tooltip_height(&self) -> f64 {
        TOOLTIP_FONT_SIZE + 2.0 * TOOLTIP_PAD_Y + 4.0
    }

    pub fn placement(&self, chart_width: f64) -> TooltipPlacement {
        TooltipPlacement::beside(self.focus.x, self.focus.y, self.tooltip_width(), chart_width)
    }
}

fn text_width(text: &str) -> f64 {
    text.chars().count() as f64 * TOOLTIP_CHAR_WIDTH
}

struct Stroke {
    color: Rgba,
    width: u32,
}

impl Stroke {
    fn new(color: Rgba, width: u32) -> Self {
        Self { color, width }
    }
}

impl BackendStyle for Stroke {
    fn color(&self) -> BackendColor {
        self.color.into()
    }

    fn stroke_width(&self) -> u32 {
        self.width
    }
}

/// Tooltip text style with estimated metrics
///
/// Vector backends write the text element themselves; glyph rasterisation is
/// not provided.
struct TooltipFont {
    color: Rgba,
}

impl BackendTextStyle for TooltipFont {
    type FontError = Infallible;

    fn color(&self) -> BackendColor {
        self.color.into()
    }

    fn size(&self) -> f64 {
        TOOLTIP_FONT_SIZE
    }

    fn family(&self) -> FontFamily<'_> {
        FontFamily::SansSerif
    }

    fn layout_box(&self, text: &str) -> Result<((i32, i32), (i32, i32)), Self::FontError> {
        Ok(((0, 0), (px(text_width(text)), px(TOOLTIP_FONT_SIZE))))
    }

    fn draw<E, DrawFunc: FnMut(i32, i32, BackendColor) -> Result<(), E>>(
        &self,
        _text: &str,
        _pos: BackendCoord,
        _draw: DrawFunc,
    ) -> Result<Result<(), E>, Self::FontError> {
        Ok(Ok(()))
    }
}

fn px(value: f64) -> i32 {
    value.round() as i32
}

/// Render the chart as a standalone SVG document
pub fn render_svg(
    geometry: &ChartGeometry,
    style: &ChartStyle,
    overlay: Option<&FocusOverlay>,
) -> Result<String, ChartError> {
    let size = (geometry.width.round() as u32, geometry.height.round() as u32);
    let mut buffer = String::new();
    {
        let mut backend = SVGBackend::with_string(&mut buffer, size);
        draw_chart(&mut backend, geometry, style, overlay)
            .and_then(|_| backend.present())
            .map_err(|e| ChartError::Render(e.to_string()))?;
    }
    Ok(buffer)
}

fn draw_chart<DB: DrawingBackend>(
    backend: &mut DB,
    geometry: &ChartGeometry,
    style: &ChartStyle,
    overlay: Option<&FocusOverlay>,
) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    let (width, height) = backend.get_size();
    let left = px(geometry.padding);
    let right = px(geometry.width - geometry.padding);
    let bottom = px(geometry.baseline());

    backend.draw_rect(
        (0, 0),
        (width as i32, height as i32),
        &Stroke::new(style.background, 1),
        true,
    )?;

    let grid = Stroke::new(style.grid_color, 1);
    for y in geometry.grid_lines() {
        backend.draw_line((left, px(y)), (right, px(y)), &grid)?;
    }

    let line: Vec<BackendCoord> = geometry.points.iter().map(|&(x, y)| (px(x), px(y))).collect();
    if let Some(fill) = style.fill {
        let mut area = line.clone();
        area.push((right, bottom));
        area.push((left, bottom));
        backend.fill_polygon(area, &Stroke::new(fill, 1))?;
    }
    backend.draw_path(line, &Stroke::new(style.stroke, LINE_WIDTH))?;

    if let Some(overlay) = overlay {
        draw_focus(backend, geometry, style, overlay)?;
    }
    Ok(())
}

fn draw_focus<DB: DrawingBackend>(
    backend: &mut DB,
    geometry: &ChartGeometry,
    style: &ChartStyle,
    overlay: &FocusOverlay,
) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    let Focus { x, y, .. } = overlay.focus;
    let cursor = Stroke::new(style.cursor_color, 1);
    let cursor_x = px(x);
    let bottom = px(geometry.baseline());

    let mut dash_top = px(geometry.padding);
    while dash_top < bottom {
        let dash_bottom = (dash_top + CURSOR_DASH).min(bottom);
        backend.draw_line((cursor_x, dash_top), (cursor_x, dash_bottom), &cursor)?;
        dash_top += 2 * CURSOR_DASH;
    }
    backend.draw_circle((cursor_x, px(y)), CURSOR_RADIUS, &cursor, true)?;

    let tip = overlay.placement(geometry.width);
    backend.draw_rect(
        (px(tip.left), px(tip.top)),
        (
            px(tip.left + overlay.tooltip_width()),
            px(tip.top + overlay.tooltip_height()),
        ),
        &Stroke::new(style.tooltip_background, 1),
        true,
    )?;
    backend.draw_text(
        &overlay.text,
        &TooltipFont { color: style.tooltip_text },
        (px(tip.left + TOOLTIP_PAD_X), px(tip.top + TOOLTIP_PAD_Y)),
    )
}
