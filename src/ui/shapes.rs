//! Filled shapes composed from surface primitives

use micromath::F32Ext;

use crate::surface::Surface;
use crate::ui::styling::Color;

/// A rounded rectangle painted from rects and circles.
///
/// The fill is one full-height center strip `width - 2r` wide, two side
/// strips `r` wide covering the straight part of the left and right edges,
/// and four filled corner circles. No per-pixel distance tests are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    radius: u32,
}

impl RoundedRect {
    /// `radius` is reduced so the corner circles fit inside the rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32, radius: u32) -> Self {
        let max_radius = width.min(height).saturating_sub(1) / 2;
        Self {
            x,
            y,
            width,
            height,
            radius: radius.min(max_radius),
        }
    }

    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Same rectangle shrunk by `by` on every side, radius shrunk to match.
    pub fn inset(&self, by: u32) -> Self {
        Self::new(
            self.x + by as i32,
            self.y + by as i32,
            self.width.saturating_sub(by * 2),
            self.height.saturating_sub(by * 2),
            self.radius.saturating_sub(by),
        )
    }

    pub fn fill<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) -> Result<(), S::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let r = self.radius;
        if r == 0 {
            return surface.fill_rect(self.x, self.y, self.width, self.height, color);
        }

        let ri = r as i32;
        let right = self.x + self.width as i32 - 1;
        let bottom = self.y + self.height as i32 - 1;

        // Center strip, full height
        surface.fill_rect(self.x + ri, self.y, self.width - 2 * r, self.height, color)?;

        // Side strips between the corners
        let side_h = self.height - 2 * r;
        if side_h > 0 {
            surface.fill_rect(self.x, self.y + ri, r, side_h, color)?;
            surface.fill_rect(right - ri + 1, self.y + ri, r, side_h, color)?;
        }

        for (cx, cy) in [
            (self.x + ri, self.y + ri),
            (right - ri, self.y + ri),
            (self.x + ri, bottom - ri),
            (right - ri, bottom - ri),
        ] {
            surface.circle(cx, cy, r, color, Some(color))?;
        }
        Ok(())
    }

    /// Horizontal inset of row `row` (0 = top edge) from the straight sides.
    ///
    /// Rows within `radius` of the top follow the corner arc,
    /// `r - sqrt(r^2 - (r - row)^2)`; lower rows are not inset.
    pub fn row_inset(&self, row: u32) -> u32 {
        let r = self.radius;
        if row >= r {
            return 0;
        }
        let dy = (r - row) as f32;
        let rf = r as f32;
        let dx = (rf * rf - dy * dy).max(0.0).sqrt();
        (rf - dx) as u32
    }
}
