//! The raster primitive surface widgets draw on
//!
//! A [`Surface`] is an addressable color framebuffer with a handful of
//! primitives and a flush operation. Hardware drivers implement it directly;
//! [`FrameBuffer`](crate::FrameBuffer) implements it in RAM.
//!
//! Line thickness is global mutable state on the surface. Widgets that need a
//! different thickness go through [`with_line_thickness`], which restores the
//! previous value afterwards.

use core::fmt::Debug;

use crate::ui::styling::Color;

/// Primitive drawing capabilities consumed by every widget.
///
/// Coordinates are signed so shapes may start off-screen; implementations clip.
/// Sizes of zero draw nothing.
pub trait Surface {
    type Error: Debug;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Paint the whole surface.
    fn fill(&mut self, color: Color) -> Result<(), Self::Error>;

    fn pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error>;

    /// 1px `border` outline, interior painted only when `fill` is given.
    fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error>;

    /// Line at the current thickness.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color)
    -> Result<(), Self::Error>;

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error>;

    /// Built-in fixed-cell text, `size` multiplies an 8x8 cell.
    ///
    /// `bg == None` leaves the pixels around glyph strokes untouched.
    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        bg: Option<Color>,
        size: u8,
    ) -> Result<(), Self::Error>;

    /// Clamped by implementations to `1..=20`.
    fn set_line_thickness(&mut self, px: u32);

    fn line_thickness(&self) -> u32;

    /// Push a rectangle of the framebuffer to the panel.
    fn update_region(&mut self, x: i32, y: i32, width: u32, height: u32)
    -> Result<(), Self::Error>;

    /// Push the whole framebuffer to the panel.
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Filled rectangle without a distinct border.
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.rect(x, y, width, height, color, Some(color))
    }
}

/// Run `draw` with the surface's line thickness temporarily set to `px`.
///
/// The previous thickness is restored even when `draw` fails.
pub fn with_line_thickness<S, T, F>(surface: &mut S, px: u32, draw: F) -> Result<T, S::Error>
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> Result<T, S::Error>,
{
    let saved = surface.line_thickness();
    surface.set_line_thickness(px);
    let result = draw(surface);
    surface.set_line_thickness(saved);
    result
}
