//! Needle gauges: [`Dial`] and [`Compass`]
//!
//! Both gauges remember the angle of the needle currently on screen. A value
//! change erases that needle by redrawing it in the face color with a wider
//! stroke, repaints the static decoration the erase may have clipped, then
//! draws the new needle. Only the gauge's bounding square is flushed.
//!
//! Angles come in two conventions:
//!
//! - Raster degrees: 0 points right and angles grow clockwise, since screen
//!   `y` grows downward. All trigonometry here uses raster degrees.
//! - Gauge degrees: 0 points up (north) and angles grow clockwise. A gauge
//!   angle `a` is raster angle `a - 90`.

pub mod compass;
pub mod dial;

pub use compass::Compass;
pub use dial::Dial;

use core::f32::consts::PI;
use core::fmt::Write;
use micromath::F32Ext;

use crate::surface::{Surface, with_line_thickness};
use crate::ui::font::{Font, HAlign, VAlign};
use crate::ui::styling::Color;

pub use crate::config::DEFAULT_STEP_DELAY_MS;

/// Stroke width of gauge needles.
pub const NEEDLE_THICKNESS: u32 = 3;

/// Extra width of the erase stroke over the needle stroke.
const ERASE_MARGIN: u32 = 2;

/// Point at `radius` from the center along a raster angle, rounded to pixels.
pub fn point_on_circle(cx: i32, cy: i32, radius: f32, raster_deg: f32) -> (i32, i32) {
    let rad = raster_deg * (PI / 180.0);
    let x = cx as f32 + radius * rad.cos();
    let y = cy as f32 + radius * rad.sin();
    (x.round() as i32, y.round() as i32)
}

/// Normalize into `[0, 360)`.
pub fn wrap_degrees(deg: f32) -> f32 {
    let mut wrapped = deg % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed rotation in `[-180, 180)` taking `from` to `to` the short way round.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap_degrees(to - from + 180.0) - 180.0
}

/// One straight needle segment from the hub outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Needle {
    pub raster_deg: f32,
    pub length: f32,
    pub color: Color,
}

impl Needle {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, cx: i32, cy: i32) -> Result<(), S::Error> {
        self.stroke(surface, cx, cy, self.color, NEEDLE_THICKNESS)
    }

    /// Paint over the needle in `bg` with a stroke wider than `draw` uses.
    pub fn erase<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cx: i32,
        cy: i32,
        bg: Color,
    ) -> Result<(), S::Error> {
        self.stroke(surface, cx, cy, bg, NEEDLE_THICKNESS + ERASE_MARGIN)
    }

    fn stroke<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cx: i32,
        cy: i32,
        color: Color,
        thickness: u32,
    ) -> Result<(), S::Error> {
        let (tip_x, tip_y) = point_on_circle(cx, cy, self.length, self.raster_deg);
        with_line_thickness(surface, thickness, |s| s.line(cx, cy, tip_x, tip_y, color))
    }
}

/// Radial tick between two radii.
pub(crate) fn draw_tick<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    raster_deg: f32,
    inner: f32,
    outer: f32,
    color: Color,
) -> Result<(), S::Error> {
    let (x0, y0) = point_on_circle(cx, cy, inner, raster_deg);
    let (x1, y1) = point_on_circle(cx, cy, outer, raster_deg);
    surface.line(x0, y0, x1, y1, color)
}

/// Draw `text` centered on the point at `radius` along `raster_deg`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_radial_text<S: Surface + ?Sized>(
    surface: &mut S,
    font: &Font,
    cx: i32,
    cy: i32,
    radius: f32,
    raster_deg: f32,
    text: &str,
    color: Color,
) -> Result<(), S::Error> {
    let (px, py) = point_on_circle(cx, cy, radius, raster_deg);
    font.draw_text_aligned(
        surface,
        px,
        py,
        0,
        0,
        text,
        color,
        HAlign::Center,
        VAlign::Middle,
        None,
    )
}

/// Short tick label: integers print without decimals.
pub(crate) fn format_value(value: f32) -> heapless::String<12> {
    let mut text = heapless::String::new();
    let rounded = value.round();
    if (value - rounded).abs() < 0.05 {
        write!(text, "{}", rounded as i32).ok();
    } else {
        write!(text, "{:.1}", value).ok();
    }
    text
}
