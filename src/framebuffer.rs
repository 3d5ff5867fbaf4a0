//! RAM-backed framebuffer surface with flush-region tracking.
//!
//! All widget drawing can target this buffer instead of a hardware panel.
//! `update_region` and `show` only record which rectangle is due; `flush`
//! later copies that rectangle to any `DrawTarget` in a single
//! `fill_contiguous` call.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder, ascii::FONT_5X8};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text, TextStyleBuilder};
use log::debug;

use crate::config::{MAX_LINE_THICKNESS, UiConfig};
use crate::surface::Surface;
use crate::ui::core::DirtyRegion;
use crate::ui::styling::Color;

/// 5x8 glyphs in an 8x8 cell, the unit the `size` multiplier scales.
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 3,
    ..FONT_5X8
};

/// In-memory surface implementing both [`Surface`] and `DrawTarget<Color = Rgb888>`.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    thickness: u32,
    max_thickness: u32,
    pending: DirtyRegion,
}

impl FrameBuffer {
    /// Allocate a framebuffer filled with black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; width as usize * height as usize],
            thickness: 1,
            max_thickness: MAX_LINE_THICKNESS,
            pending: DirtyRegion::default(),
        }
    }

    /// Framebuffer whose line thickness ceiling comes from `config`.
    pub fn with_config(width: u32, height: u32, config: &UiConfig) -> Self {
        Self::new(width, height).with_max_thickness(config.line_thickness_max)
    }

    /// Cap `set_line_thickness` at `px`, itself kept within `1..=20`.
    pub fn with_max_thickness(mut self, px: u32) -> Self {
        self.max_thickness = px.clamp(1, MAX_LINE_THICKNESS);
        self.thickness = self.thickness.min(self.max_thickness);
        self
    }

    pub fn max_thickness(&self) -> u32 {
        self.max_thickness
    }

    /// Color at `(x, y)`, `None` off-screen.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx].into())
    }

    /// Rectangle that the next `flush` will copy.
    pub fn pending_region(&self) -> Option<Rectangle> {
        self.pending.is_dirty().then_some(self.pending.bounds)
    }

    /// Copy the pending region to a display, then reset the pending state.
    ///
    /// If nothing was marked since the last flush, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let Some(area) = self.pending.take() else {
            return Ok(());
        };

        debug!(
            "Flushing {}x{} region at ({}, {})",
            area.size.width, area.size.height, area.top_left.x, area.top_left.y
        );

        // Borrow the pixel slice so the closure captures a shared reference
        let pixels = &self.pixels;
        let stride = self.width as usize;
        let x0 = area.top_left.x as usize;
        let width = area.size.width as usize;
        let y0 = area.top_left.y as usize;
        let pixel_iter = (y0..y0 + area.size.height as usize).flat_map(move |y| {
            let row_start = y * stride + x0;
            pixels[row_start..row_start + width]
                .iter()
                .map(|&c| D::Color::from(c))
        });

        display.fill_contiguous(&area, pixel_iter)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    fn full_frame(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.height))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.full_frame());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        for y in area.top_left.y..=bottom_right.y {
            let row = y as usize * self.width as usize;
            let start = row + area.top_left.x as usize;
            let end = row + bottom_right.x as usize;
            self.pixels[start..=end].fill(color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

/// Draws each source pixel as a `scale x scale` block anchored at `origin`.
struct ScaledTarget<'a> {
    inner: &'a mut FrameBuffer,
    origin: Point,
    scale: u32,
}

impl OriginDimensions for ScaledTarget<'_> {
    fn size(&self) -> Size {
        self.inner.size()
    }
}

impl DrawTarget for ScaledTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let s = self.scale as i32;
        for Pixel(coord, color) in pixels {
            let offset = coord - self.origin;
            let top_left = self.origin + Point::new(offset.x * s, offset.y * s);
            self.inner
                .fill_solid(&Rectangle::new(top_left, Size::new_equal(self.scale)), color)?;
        }
        Ok(())
    }
}

impl Surface for FrameBuffer {
    type Error = Infallible;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Color) -> Result<(), Self::Error> {
        self.clear(color.into())
    }

    fn pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error> {
        self.set_pixel(x, y, color.into());
        Ok(())
    }

    fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error> {
        let mut style = PrimitiveStyleBuilder::new()
            .stroke_color(Rgb888::from(border))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside);
        if let Some(fill) = fill {
            style = style.fill_color(Rgb888::from(fill));
        }
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(style.build())
            .draw(self)
    }

    fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Self::Error> {
        let thickness = self.thickness;
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::from(color), thickness))
            .draw(self)
    }

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error> {
        if radius == 0 {
            return Ok(());
        }
        let mut style = PrimitiveStyleBuilder::new()
            .stroke_color(Rgb888::from(border))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside);
        if let Some(fill) = fill {
            style = style.fill_color(Rgb888::from(fill));
        }
        Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(style.build())
            .draw(self)
    }

    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        bg: Option<Color>,
        size: u8,
    ) -> Result<(), Self::Error> {
        let mut character_style = MonoTextStyleBuilder::new()
            .font(&CELL_FONT)
            .text_color(Rgb888::from(color));
        if let Some(bg) = bg {
            character_style = character_style.background_color(Rgb888::from(bg));
        }
        let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();
        let origin = Point::new(x, y);

        let mut target = ScaledTarget {
            inner: self,
            origin,
            scale: u32::from(size.max(1)),
        };
        Text::with_text_style(text, origin, character_style.build(), text_style)
            .draw(&mut target)?;
        Ok(())
    }

    fn set_line_thickness(&mut self, px: u32) {
        self.thickness = px.clamp(1, self.max_thickness);
    }

    fn line_thickness(&self) -> u32 {
        self.thickness
    }

    fn update_region(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error> {
        let area = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .intersection(&self.full_frame());
        self.pending.expand_to_include(area);
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        let full = self.full_frame();
        self.pending.expand_to_include(full);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::{BLUE, RED, WHITE};

    fn count(fb: &FrameBuffer, color: Color) -> usize {
        let mut n = 0;
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.pixel_at(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_rect_border_and_fill() {
        let mut fb = FrameBuffer::new(20, 20);
        fb.rect(2, 2, 5, 4, RED, Some(BLUE)).unwrap();

        assert_eq!(fb.pixel_at(2, 2), Some(RED));
        assert_eq!(fb.pixel_at(6, 5), Some(RED));
        assert_eq!(fb.pixel_at(3, 3), Some(BLUE));
        assert_eq!(fb.pixel_at(7, 2), Some(Color::default()));
        assert_eq!(count(&fb, RED), 14);
        assert_eq!(count(&fb, BLUE), 6);
    }

    #[test]
    fn test_rect_without_fill_keeps_interior() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.fill(WHITE).unwrap();
        fb.rect(0, 0, 5, 5, RED, None).unwrap();
        assert_eq!(fb.pixel_at(2, 2), Some(WHITE));
    }

    #[test]
    fn test_zero_size_shapes_draw_nothing() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.rect(1, 1, 0, 5, RED, Some(RED)).unwrap();
        fb.circle(5, 5, 0, RED, Some(RED)).unwrap();
        assert_eq!(count(&fb, RED), 0);
    }

    #[test]
    fn test_line_thickness_is_clamped() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.set_line_thickness(0);
        assert_eq!(fb.line_thickness(), 1);
        fb.set_line_thickness(99);
        assert_eq!(fb.line_thickness(), 20);
    }

    #[test]
    fn test_configured_thickness_ceiling() {
        let config = UiConfig {
            line_thickness_max: 4,
            ..UiConfig::default()
        };
        let mut fb = FrameBuffer::with_config(10, 10, &config);
        assert_eq!(fb.max_thickness(), 4);
        fb.set_line_thickness(9);
        assert_eq!(fb.line_thickness(), 4);

        let fb = FrameBuffer::new(10, 10).with_max_thickness(50);
        assert_eq!(fb.max_thickness(), 20);
    }

    #[test]
    fn test_clipped_drawing_does_not_panic() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.rect(-5, -5, 30, 30, RED, Some(BLUE)).unwrap();
        fb.circle(9, 9, 6, RED, Some(BLUE)).unwrap();
        fb.text(8, 8, "Hi", WHITE, Some(RED), 3).unwrap();
        assert_eq!(fb.pixel_at(0, 0), Some(BLUE));
    }

    #[test]
    fn test_text_scales_cell() {
        let mut fb = FrameBuffer::new(64, 32);
        fb.text(0, 0, "A", WHITE, Some(BLUE), 2).unwrap();
        // Glyph cell doubled in both directions, nothing past the 16px cell
        assert!(count(&fb, WHITE) + count(&fb, BLUE) >= 10 * 16);
        assert!(count(&fb, WHITE) > 0);
        assert_eq!(fb.pixel_at(16, 0), Some(Color::default()));
        assert_eq!(fb.pixel_at(0, 16), Some(Color::default()));
    }

    #[test]
    fn test_update_region_accumulates_until_flush() {
        let mut fb = FrameBuffer::new(50, 50);
        fb.update_region(10, 10, 5, 5).unwrap();
        fb.update_region(30, 5, 10, 2).unwrap();
        assert_eq!(
            fb.pending_region(),
            Some(Rectangle::new(Point::new(10, 5), Size::new(30, 10)))
        );

        let mut panel = FrameBuffer::new(50, 50);
        fb.flush(&mut panel).unwrap();
        assert_eq!(fb.pending_region(), None);

        fb.show().unwrap();
        assert_eq!(
            fb.pending_region(),
            Some(Rectangle::new(Point::zero(), Size::new(50, 50)))
        );
    }

    #[test]
    fn test_flush_copies_only_pending_region() {
        let mut fb = FrameBuffer::new(20, 20);
        fb.fill(RED).unwrap();
        fb.update_region(0, 0, 4, 4).unwrap();

        let mut panel = FrameBuffer::new(20, 20);
        fb.flush(&mut panel).unwrap();

        assert_eq!(panel.pixel_at(3, 3), Some(RED));
        assert_eq!(panel.pixel_at(4, 4), Some(Color::default()));
    }
}
