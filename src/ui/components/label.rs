// src/ui/components/label.rs
//! Static text label

use alloc::string::String;

use crate::surface::Surface;
use crate::ui::core::{Widget, WidgetBase};
use crate::ui::font::{Font, HAlign, VAlign};
use crate::ui::styling::{BLACK, Color};

/// Single- or multi-line text.
///
/// By default the label sizes itself to its text and re-measures on every
/// `set_text`, so callers centering or right-aligning it always see the
/// current width. `with_box` pins the size instead and aligns the text
/// inside it.
pub struct Label {
    base: WidgetBase,
    text: String,
    color: Color,
    bg: Option<Color>,
    h_align: HAlign,
    v_align: VAlign,
    font: Font,
    auto_size: bool,
}

impl Label {
    pub fn new(x: i32, y: i32, text: &str) -> Self {
        let mut label = Self {
            base: WidgetBase::new(x, y, 0, 0),
            text: text.into(),
            color: BLACK,
            bg: None,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            font: Font::default(),
            auto_size: true,
        };
        label.fit_to_text();
        label
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Paint the label's box in `bg` before drawing text.
    pub fn with_background(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self.fit_to_text();
        self
    }

    pub fn with_alignment(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    /// Fix the label's size; text is aligned inside this box.
    pub fn with_box(mut self, width: u32, height: u32) -> Self {
        self.auto_size = false;
        self.base.width = width;
        self.base.height = height;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the text, redraw and flush.
    ///
    /// With a background set, the old box is cleared first so a shorter text
    /// leaves nothing behind. Returns `false` if the text is unchanged.
    pub fn set_text<S: Surface>(&mut self, surface: &mut S, text: &str) -> Result<bool, S::Error> {
        if self.text == text {
            return Ok(false);
        }

        let old = self.base;
        if let Some(bg) = self.bg
            && old.visible
        {
            surface.fill_rect(old.x, old.y, old.width, old.height, bg)?;
            old.invalidate(surface)?;
        }

        self.text.clear();
        self.text.push_str(text);
        self.fit_to_text();

        self.draw(surface)?;
        self.invalidate(surface)?;
        Ok(true)
    }

    fn fit_to_text(&mut self) {
        if self.auto_size {
            self.base.width = self.font.text_width(&self.text);
            self.base.height = self.font.text_height(&self.text);
        }
    }
}

impl Widget for Label {
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
            x,
            y,
            width,
            height,
            ..
        } = self.base;

        if let Some(bg) = self.bg {
            surface.fill_rect(x, y, width, height, bg)?;
        }
        self.font.draw_text_aligned(
            surface,
            x,
            y,
            width,
            height,
            &self.text,
            self.color,
            self.h_align,
            self.v_align,
            None,
        )
    }
}
