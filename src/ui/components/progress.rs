// src/ui/components/progress.rs
//! Horizontal progress bar

use alloc::boxed::Box;
use core::fmt::Write;

use crate::surface::Surface;
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::{Font, HAlign, VAlign};
use crate::ui::styling::{BLACK, BTN_PRIMARY, Color, GRAY_DARK, GRAY_LIGHT, WHITE};

/// Gap between the border and the fill on every side.
const FILL_INSET: u32 = 2;

/// Bordered bar filled in proportion to `value` within `[min, max]`.
pub struct ProgressBar {
    base: WidgetBase,
    min: f32,
    max: f32,
    value: f32,
    fg: Color,
    bg: Color,
    border: Color,
    show_percent: bool,
    font: Font,
    on_change: Option<ChangeCallback<Self, f32>>,
}

impl ProgressBar {
    /// Range 0..=100, starting empty.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            min: 0.0,
            max: 100.0,
            value: 0.0,
            fg: BTN_PRIMARY,
            bg: GRAY_LIGHT,
            border: GRAY_DARK,
            show_percent: false,
            font: Font::default(),
            on_change: None,
        }
    }

    /// Swapped bounds are reordered. The value is reset to the new minimum.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min.min(max);
        self.max = max.max(min);
        self.value = self.min;
        self
    }

    pub fn with_colors(mut self, fg: Color, bg: Color, border: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self.border = border;
        self
    }

    /// Overlay `NN%` centered on the bar.
    pub fn with_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Self, f32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Fraction filled, `0.0..=1.0`. A zero-width range reports the midpoint.
    pub fn progress(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Width of the filled part in pixels.
    pub fn fill_width(&self) -> u32 {
        let track = self.base.width.saturating_sub(FILL_INSET * 2);
        (track as f32 * self.progress()) as u32
    }

    /// Clamp `value` into range, then redraw if it changed. NaN is ignored.
    pub fn set_value<S: Surface>(&mut self, surface: &mut S, value: f32) -> Result<bool, S::Error> {
        if value.is_nan() {
            return Ok(false);
        }
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return Ok(false);
        }
        self.value = value;
        self.draw(surface)?;
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, value);
            self.on_change = Some(callback);
        }
        Ok(true)
    }
}

impl Widget for ProgressBar {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        let WidgetBase {
            x, y, width, height, ..
        } = self.base;

        surface.rect(x, y, width, height, self.border, Some(self.bg))?;

        let fill = self.fill_width();
        let fill_h = height.saturating_sub(FILL_INSET * 2);
        if fill > 0 && fill_h > 0 {
            let inset = FILL_INSET as i32;
            surface.fill_rect(x + inset, y + inset, fill, fill_h, self.fg)?;
        }

        if self.show_percent {
            let mut text: heapless::String<8> = heapless::String::new();
            write!(text, "{}%", (self.progress() * 100.0) as u32).ok();
            let color = if fill > width / 2 { WHITE } else { BLACK };
            self.font.draw_text_aligned(
                surface,
                x,
                y,
                width,
                height,
                &text,
                color,
                HAlign::Center,
                VAlign::Middle,
                None,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};

    #[test]
    fn test_value_is_clamped() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut bar = ProgressBar::new(0, 0, 104, 20);

        assert!(bar.set_value(&mut surface, 150.0).unwrap());
        assert_eq!(bar.value(), 100.0);
        assert!(bar.set_value(&mut surface, -3.0).unwrap());
        assert_eq!(bar.value(), 0.0);
        assert!(!bar.set_value(&mut surface, f32::NAN).unwrap());
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_clamped_equal_value_is_noop() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut bar = ProgressBar::new(0, 0, 104, 20);
        bar.set_value(&mut surface, 100.0).unwrap();
        surface.clear_log();

        assert!(!bar.set_value(&mut surface, 250.0).unwrap());
        assert!(surface.regions.is_empty());
    }

    #[test]
    fn test_fill_geometry() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut bar = ProgressBar::new(10, 10, 104, 20);
        bar.set_value(&mut surface, 25.0).unwrap();

        assert_eq!(bar.fill_width(), 25);
        assert!(surface.calls.contains(&Call::Rect {
            x: 12,
            y: 12,
            w: 25,
            h: 16,
            border: BTN_PRIMARY,
            fill: Some(BTN_PRIMARY)
        }));
    }

    #[test]
    fn test_zero_range_draws_midpoint() {
        let bar = ProgressBar::new(0, 0, 104, 20).with_range(5.0, 5.0);
        assert_eq!(bar.progress(), 0.5);
        assert_eq!(bar.fill_width(), 50);
    }

    #[test]
    fn test_percent_text_contrast() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut bar = ProgressBar::new(0, 0, 104, 20).with_percent(true);

        bar.set_value(&mut surface, 40.0).unwrap();
        assert!(surface.calls.iter().any(
            |c| matches!(c, Call::Text { text, color, .. } if text == "40%" && *color == BLACK)
        ));

        surface.clear_log();
        bar.set_value(&mut surface, 75.0).unwrap();
        assert!(surface.calls.iter().any(
            |c| matches!(c, Call::Text { text, color, .. } if text == "75%" && *color == WHITE)
        ));
    }
}
