// src/ui/components/button3d.rs
//! Rounded, beveled button with raised and sunken states

use alloc::boxed::Box;
use alloc::string::String;

use crate::surface::{Surface, with_line_thickness};
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::{Font, HAlign, VAlign};
use crate::ui::shapes::RoundedRect;
use crate::ui::styling::colors::{DISABLED_FACE, sheen_alpha};
use crate::ui::styling::{BTN_PRIMARY, Color, WHITE, blend, darken, lighten};

use super::button::DEFAULT_SHEEN_STRENGTH;

/// Bevel thickness in pixels
const BEVEL: u32 = 2;

const DEFAULT_CORNER_RADIUS: u32 = 6;

/// Bevel and face colors for one visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BevelShades {
    pub top: Color,
    pub bottom: Color,
    pub face: Color,
    /// Text shift down and right, in pixels
    pub text_offset: i32,
}

impl BevelShades {
    pub fn raised(base: Color) -> Self {
        Self {
            top: lighten(base, 1.3),
            bottom: darken(base, 0.6),
            face: base,
            text_offset: 0,
        }
    }

    pub fn sunken(base: Color) -> Self {
        Self {
            top: darken(base, 0.5),
            bottom: lighten(base, 1.2),
            face: darken(base, 0.8),
            text_offset: 1,
        }
    }
}

/// Button drawn with a light top-left and dark bottom-right bevel.
///
/// The rounded outline composes [`RoundedRect`] fills: the whole outline in
/// the bottom color, the outline shifted up-left in the top color, then the
/// face inset by the bevel width. A sheen band fades from white at the top
/// of the face and follows the rounded corners.
pub struct Button3D {
    base: WidgetBase,
    text: String,
    color: Color,
    text_color: Color,
    pressed: bool,
    radius: u32,
    sheen: Option<f32>,
    font: Font,
    on_change: Option<ChangeCallback<Self, bool>>,
}

impl Button3D {
    pub fn new(x: i32, y: i32, width: u32, height: u32, text: &str) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            text: text.into(),
            color: BTN_PRIMARY,
            text_color: WHITE,
            pressed: false,
            radius: DEFAULT_CORNER_RADIUS,
            sheen: Some(DEFAULT_SHEEN_STRENGTH),
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

    /// 0 gives square corners.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_sheen(mut self, strength: Option<f32>) -> Self {
        self.sheen = strength;
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

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Shading for the current state. Disabled draws raised gray regardless of `pressed`.
    pub fn shades(&self) -> BevelShades {
        if !self.base.enabled {
            BevelShades::raised(DISABLED_FACE)
        } else if self.pressed {
            BevelShades::sunken(self.color)
        } else {
            BevelShades::raised(self.color)
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

    fn outline(&self) -> RoundedRect {
        let WidgetBase {
            x, y, width, height, ..
        } = self.base;
        RoundedRect::new(x, y, width, height, self.radius)
    }

    fn draw_sheen<S: Surface>(
        &self,
        surface: &mut S,
        face: RoundedRect,
        color: Color,
        strength: f32,
    ) -> Result<(), S::Error> {
        let band = face.height / 3;
        with_line_thickness(surface, 1, |surface| {
            for row in 0..band {
                let inset = face.row_inset(row);
                if inset * 2 >= face.width {
                    continue;
                }
                let shade = blend(color, WHITE, sheen_alpha(row, band, strength));
                let line_y = face.y + row as i32;
                let left = face.x + inset as i32;
                let right = face.x + (face.width - inset) as i32 - 1;
                surface.line(left, line_y, right, line_y, shade)?;
            }
            Ok(())
        })
    }
}

impl Widget for Button3D {
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
        let shades = self.shades();
        let outline = self.outline();

        outline.fill(surface, shades.bottom)?;
        RoundedRect::new(
            outline.x,
            outline.y,
            outline.width.saturating_sub(BEVEL),
            outline.height.saturating_sub(BEVEL),
            outline.radius(),
        )
        .fill(surface, shades.top)?;

        let face = outline.inset(BEVEL);
        face.fill(surface, shades.face)?;

        if let Some(strength) = self.sheen
            && self.base.enabled
            && !self.pressed
        {
            self.draw_sheen(surface, face, shades.face, strength)?;
        }

        let offset = shades.text_offset;
        self.font.draw_text_aligned(
            surface,
            self.base.x + offset,
            self.base.y + offset,
            self.base.width,
            self.base.height,
            &self.text,
            self.text_color,
            HAlign::Center,
            VAlign::Middle,
            None,
        )
    }
}
