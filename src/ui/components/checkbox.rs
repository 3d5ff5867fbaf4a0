// src/ui/components/checkbox.rs
//! Square checkbox with an optional text label

use alloc::boxed::Box;
use alloc::string::String;

use crate::surface::Surface;
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::Font;
use crate::ui::styling::{BLACK, BTN_PRIMARY, Color, GRAY, GRAY_DARK, WHITE};

/// Gap between the box and its label.
const LABEL_GAP: u32 = 8;

pub const DEFAULT_BOX_SIZE: u32 = 20;

pub struct CheckBox {
    base: WidgetBase,
    size: u32,
    checked: bool,
    color: Color,
    bg: Color,
    label: String,
    font: Font,
    on_change: Option<ChangeCallback<Self, bool>>,
}

impl CheckBox {
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        Self {
            base: WidgetBase::new(x, y, size, size),
            size,
            checked: false,
            color: BTN_PRIMARY,
            bg: WHITE,
            label: String::new(),
            font: Font::default(),
            on_change: None,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Color of the check mark.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.into();
        self.fit_to_label();
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self.fit_to_label();
        self
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Self, bool) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn box_size(&self) -> u32 {
        self.size
    }

    pub fn toggle<S: Surface>(&mut self, surface: &mut S) -> Result<bool, S::Error> {
        self.set_checked(surface, !self.checked)
    }

    pub fn set_checked<S: Surface>(&mut self, surface: &mut S, checked: bool) -> Result<bool, S::Error> {
        if self.checked == checked {
            return Ok(false);
        }
        self.checked = checked;
        self.draw(surface)?;
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, checked);
            self.on_change = Some(callback);
        }
        Ok(true)
    }

    /// Replace the label and re-measure width (and height for bitmap fonts).
    ///
    /// When the label shrinks the old footprint is flushed as well. Pixels
    /// behind the old tail are not cleared; the owner repaints its background.
    pub fn set_label<S: Surface>(&mut self, surface: &mut S, label: &str) -> Result<bool, S::Error> {
        if self.label == label {
            return Ok(false);
        }
        let old = self.base;
        self.label.clear();
        self.label.push_str(label);
        self.fit_to_label();

        self.draw(surface)?;
        if old.width > self.base.width || old.height > self.base.height {
            old.invalidate(surface)?;
        }
        self.invalidate(surface)?;
        Ok(true)
    }

    fn fit_to_label(&mut self) {
        if self.label.is_empty() {
            self.base.width = self.size;
            self.base.height = self.size;
            return;
        }
        self.base.width = self.size + LABEL_GAP + self.font.text_width(&self.label);
        self.base.height = match self.font {
            Font::Fixed(_) => self.size,
            Font::Bitmap(_) => self.size.max(self.font.text_height(&self.label)),
        };
    }
}

impl Widget for CheckBox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Only the box resizes; the label keeps its measured width.
    fn set_bounds(&mut self, x: i32, y: i32, _width: u32, height: u32) {
        self.base.x = x;
        self.base.y = y;
        self.size = height;
        self.fit_to_label();
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        let (x, y, size) = (self.base.x, self.base.y, self.size);

        let border = if self.base.enabled { GRAY_DARK } else { GRAY };
        surface.rect(x, y, size, size, border, Some(self.bg))?;

        if self.checked {
            let mark = if self.base.enabled { self.color } else { GRAY };
            let margin = (size / 5) as i32;
            let far = size as i32 - margin;
            surface.line(x + margin, y + margin, x + far, y + far, mark)?;
            surface.line(x + far, y + margin, x + margin, y + far, mark)?;
        }

        if !self.label.is_empty() {
            let text_h = self.font.text_height(&self.label) as i32;
            let label_x = x + (size + LABEL_GAP) as i32;
            let label_y = y + (size as i32 - text_h).div_euclid(2);
            self.font
                .draw_text(surface, label_x, label_y, &self.label, BLACK, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;
    use crate::ui::font::tests::TEST_FONT;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::font::FONT_SMALL;

    #[test]
    fn test_toggle_draws_cross() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut cb = CheckBox::new(10, 10, 20);

        assert!(cb.toggle(&mut surface).unwrap());
        assert!(cb.is_checked());
        let lines: alloc::vec::Vec<_> = surface.lines().cloned().collect();
        assert_eq!(lines.len(), 2);
        assert!(matches!(
            lines[0],
            Call::Line {
                x0: 14,
                y0: 14,
                x1: 26,
                y1: 26,
                ..
            }
        ));
        assert_eq!(surface.regions, [(10, 10, 20, 20)]);
    }

    #[test]
    fn test_set_checked_same_state_is_noop() {
        let mut surface = RecordingSurface::new(320, 240);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut cb = CheckBox::new(0, 0, 20)
            .with_checked(true)
            .with_on_change(move |_, _| counter.set(counter.get() + 1));

        assert!(!cb.set_checked(&mut surface, true).unwrap());
        assert!(surface.calls.is_empty());
        assert!(cb.set_checked(&mut surface, false).unwrap());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_label_sets_width() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut cb = CheckBox::new(0, 0, 20)
            .with_font(Font::fixed(FONT_SMALL))
            .with_label("Wifi");
        assert_eq!(cb.base().width, 20 + 8 + 32);

        cb.set_label(&mut surface, "Bluetooth").unwrap();
        assert_eq!(cb.base().width, 20 + 8 + 72);

        surface.clear_log();
        cb.set_label(&mut surface, "BT").unwrap();
        assert_eq!(cb.base().width, 20 + 8 + 16);
        assert_eq!(surface.regions, [(0, 0, 100, 20), (0, 0, 44, 20)]);
    }

    #[test]
    fn test_bitmap_label_grows_height() {
        static TALL: crate::ui::font::BitmapFont = crate::ui::font::BitmapFont::new(30, &[]);
        let cb = CheckBox::new(0, 0, 20)
            .with_font(Font::Bitmap(&TALL))
            .with_label("x");
        assert_eq!(cb.base().height, 30);

        let cb = CheckBox::new(0, 0, 20)
            .with_font(Font::Bitmap(&TEST_FONT))
            .with_label("Ai");
        assert_eq!(cb.base().height, 20);
        assert_eq!(cb.base().width, 20 + 8 + 14);
    }

    #[test]
    fn test_disabled_box_is_gray() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut cb = CheckBox::new(0, 0, 20).with_checked(true);
        cb.set_enabled(false);
        cb.draw(&mut surface).unwrap();

        assert!(matches!(surface.calls[0], Call::Rect { border: GRAY, .. }));
        assert!(surface
            .lines()
            .all(|c| matches!(c, Call::Line { color: GRAY, .. })));
    }
}
