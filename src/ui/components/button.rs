// src/ui/components/button.rs
//! Flat button with optional top sheen

use alloc::boxed::Box;
use alloc::string::String;

use crate::surface::{Surface, with_line_thickness};
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::{Font, HAlign, VAlign};
use crate::ui::styling::colors::{DISABLED_FACE, sheen_alpha};
use crate::ui::styling::{BTN_PRIMARY, Color, WHITE, blend, darken};

/// Face darkening while pressed.
const PRESSED_FACTOR: f32 = 0.7;

/// Border darkening when no explicit border color is set.
const BORDER_FACTOR: f32 = 0.6;

/// Blend strength at the top row of a sheen band.
pub const DEFAULT_SHEEN_STRENGTH: f32 = 0.6;

/// Flat rectangular button.
///
/// # Examples
///
/// ```ignore
/// let mut play = Button::new(10, 10, 120, 40, "Play")
///     .with_color(BTN_SUCCESS)
///     .with_sheen(DEFAULT_SHEEN_STRENGTH)
///     .with_on_change(|_, pressed| log::info!("pressed: {}", pressed));
/// play.draw(&mut fb)?;
/// play.invalidate(&mut fb)?;
/// play.set_pressed(&mut fb, true)?;
/// ```
pub struct Button {
    base: WidgetBase,
    text: String,
    color: Color,
    text_color: Color,
    border_color: Option<Color>,
    pressed: bool,
    sheen: Option<f32>,
    font: Font,
    on_change: Option<ChangeCallback<Self, bool>>,
}

impl Button {
    pub fn new(x: i32, y: i32, width: u32, height: u32, text: &str) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            text: text.into(),
            color: BTN_PRIMARY,
            text_color: WHITE,
            border_color: None,
            pressed: false,
            sheen: None,
            font: Font::default(),
            on_change: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Highlight band over the upper half of the face.
    pub fn with_sheen(mut self, strength: f32) -> Self {
        self.sheen = Some(strength);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Self, bool) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Face color for the current state. Disabled wins over pressed.
    pub fn face_color(&self) -> Color {
        if !self.base.enabled {
            DISABLED_FACE
        } else if self.pressed {
            darken(self.color, PRESSED_FACTOR)
        } else {
            self.color
        }
    }

    pub fn set_pressed<S: Surface>(&mut self, surface: &mut S, pressed: bool) -> Result<bool, S::Error> {
        if self.pressed == pressed {
            return Ok(false);
        }
        self.pressed = pressed;
        self.draw(surface)?;
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, pressed);
            self.on_change = Some(callback);
        }
        Ok(true)
    }

    pub fn set_text<S: Surface>(&mut self, surface: &mut S, text: &str) -> Result<bool, S::Error> {
        if self.text == text {
            return Ok(false);
        }
        self.text.clear();
        self.text.push_str(text);
        self.draw(surface)?;
        self.invalidate(surface)?;
        Ok(true)
    }

    fn draw_sheen<S: Surface>(&self, surface: &mut S, face: Color, strength: f32) -> Result<(), S::Error> {
        let WidgetBase {
            x, y, width, height, ..
        } = self.base;
        if width < 3 || height < 3 {
            return Ok(());
        }
        let band = (height - 2) / 2;
        let left = x + 1;
        let right = x + width as i32 - 2;

        with_line_thickness(surface, 1, |surface| {
            for row in 0..band {
                let shade = blend(face, WHITE, sheen_alpha(row, band, strength));
                let line_y = y + 1 + row as i32;
                surface.line(left, line_y, right, line_y, shade)?;
            }
            Ok(())
        })
    }
}

impl Widget for Button {
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

        let face = self.face_color();
        let border = self
            .border_color
            .unwrap_or_else(|| darken(self.color, BORDER_FACTOR));
        surface.rect(x, y, width, height, border, Some(face))?;

        if let Some(strength) = self.sheen
            && self.base.enabled
            && !self.pressed
        {
            self.draw_sheen(surface, face, strength)?;
        }

        self.font.draw_text_aligned(
            surface,
            x,
            y,
            width,
            height,
            &self.text,
            self.text_color,
            HAlign::Center,
            VAlign::Middle,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::styling::GRAY;

    fn face_of(surface: &RecordingSurface) -> Option<Color> {
        surface.calls.iter().find_map(|c| match c {
            Call::Rect { fill, .. } => *fill,
            _ => None,
        })
    }

    #[test]
    fn test_pressed_darkens_face() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut button = Button::new(0, 0, 100, 40, "Go");

        assert!(button.set_pressed(&mut surface, true).unwrap());
        assert_eq!(face_of(&surface), Some(darken(BTN_PRIMARY, 0.7)));
        assert_eq!(surface.regions, [(0, 0, 100, 40)]);
    }

    #[test]
    fn test_disabled_overrides_pressed() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut button = Button::new(0, 0, 100, 40, "Go").with_color(Color::new(0x123456));
        button.set_enabled(false);
        button.set_pressed(&mut surface, true).unwrap();
        assert_eq!(face_of(&surface), Some(GRAY));
    }

    #[test]
    fn test_set_pressed_same_state_is_noop() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut button = Button::new(0, 0, 100, 40, "Go");
        assert!(!button.set_pressed(&mut surface, false).unwrap());
        assert!(surface.calls.is_empty());
        assert!(surface.regions.is_empty());
    }

    #[test]
    fn test_callback_sees_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut surface = RecordingSurface::new(320, 240);
        let mut button = Button::new(0, 0, 100, 40, "Go")
            .with_on_change(move |b, pressed| sink.borrow_mut().push((b.is_pressed(), pressed)));

        button.set_pressed(&mut surface, true).unwrap();
        button.set_pressed(&mut surface, true).unwrap();
        button.set_pressed(&mut surface, false).unwrap();

        assert_eq!(*seen.borrow(), [(true, true), (false, false)]);
    }

    #[test]
    fn test_sheen_fades_toward_face() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut button = Button::new(0, 0, 60, 22, "").with_sheen(0.6);
        button.draw(&mut surface).unwrap();

        let shades: Vec<Color> = surface
            .lines()
            .map(|c| match c {
                Call::Line { color, thickness, .. } => {
                    assert_eq!(*thickness, 1);
                    *color
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(shades.len(), 10);
        assert_eq!(shades[0], blend(BTN_PRIMARY, WHITE, 0.6));
        assert!(shades[9].b() <= shades[0].b());

        // No sheen while pressed
        surface.clear_log();
        button.set_pressed(&mut surface, true).unwrap();
        assert_eq!(surface.lines().count(), 0);
    }
}
