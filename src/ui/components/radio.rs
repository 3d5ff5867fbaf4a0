// src/ui/components/radio.rs
//! Radio buttons and the group that keeps one of them selected

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::surface::Surface;
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::Font;
use crate::ui::styling::{BLACK, BTN_PRIMARY, Color, GRAY, GRAY_DARK, WHITE};

const LABEL_GAP: u32 = 8;

/// Ring-to-dot gap when selected.
const DOT_INSET: u32 = 4;

/// Circular option button, positioned by its center.
///
/// On its own a radio button selects locally. Put it in a [`RadioGroup`]
/// to get mutual exclusion.
pub struct RadioButton {
    base: WidgetBase,
    cx: i32,
    cy: i32,
    radius: u32,
    selected: bool,
    color: Color,
    bg: Color,
    label: String,
    font: Font,
    on_change: Option<ChangeCallback<Self, bool>>,
}

impl RadioButton {
    pub fn new(cx: i32, cy: i32, radius: u32) -> Self {
        let r = radius as i32;
        let diameter = radius * 2 + 1;
        Self {
            base: WidgetBase::new(cx - r, cy - r, diameter, diameter),
            cx,
            cy,
            radius,
            selected: false,
            color: BTN_PRIMARY,
            bg: WHITE,
            label: String::new(),
            font: Font::default(),
            on_change: None,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Color of the inner dot.
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

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn center(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pixel span of the ring, center row and column included.
    fn diameter(&self) -> u32 {
        self.radius * 2 + 1
    }

    /// Select this button only. Groups use [`RadioGroup::select`].
    pub fn select<S: Surface>(&mut self, surface: &mut S) -> Result<bool, S::Error> {
        self.set_selected(surface, true)
    }

    pub fn deselect<S: Surface>(&mut self, surface: &mut S) -> Result<bool, S::Error> {
        self.set_selected(surface, false)
    }

    pub fn set_selected<S: Surface>(&mut self, surface: &mut S, selected: bool) -> Result<bool, S::Error> {
        if self.selected == selected {
            return Ok(false);
        }
        self.selected = selected;
        self.draw(surface)?;
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, selected);
            self.on_change = Some(callback);
        }
        Ok(true)
    }

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
        let diameter = self.diameter();
        if self.label.is_empty() {
            self.base.width = diameter;
            self.base.height = diameter;
            return;
        }
        self.base.width = diameter + LABEL_GAP + self.font.text_width(&self.label);
        self.base.height = match self.font {
            Font::Fixed(_) => diameter,
            Font::Bitmap(_) => diameter.max(self.font.text_height(&self.label)),
        };
    }
}

impl Widget for RadioButton {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let r = self.radius as i32;
        self.base.x = x;
        self.base.y = y;
        self.cx = x + r;
        self.cy = y + r;
    }

    /// The circle keeps its radius; only the origin moves.
    fn set_bounds(&mut self, x: i32, y: i32, _width: u32, _height: u32) {
        self.set_position(x, y);
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        let enabled = self.base.enabled;

        let border = if enabled { GRAY_DARK } else { GRAY };
        surface.circle(self.cx, self.cy, self.radius, border, Some(self.bg))?;

        if self.selected {
            let dot = if enabled { self.color } else { GRAY };
            let inner = self.radius.saturating_sub(DOT_INSET).max(1);
            surface.circle(self.cx, self.cy, inner, dot, Some(dot))?;
        }

        if !self.label.is_empty() {
            let text_h = self.font.text_height(&self.label) as i32;
            let label_x = self.base.x + (self.diameter() + LABEL_GAP) as i32;
            let label_y = self.cy - text_h.div_euclid(2);
            self.font
                .draw_text(surface, label_x, label_y, &self.label, BLACK, None)?;
        }
        Ok(())
    }
}

/// Owned set of radio buttons with at most one selected.
#[derive(Default)]
pub struct RadioGroup {
    buttons: Vec<RadioButton>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member and return its index.
    ///
    /// A member added already selected takes the selection; earlier members
    /// are cleared without drawing since nothing is on screen yet.
    pub fn add(&mut self, button: RadioButton) -> usize {
        if button.selected {
            for other in &mut self.buttons {
                other.selected = false;
            }
        }
        self.buttons.push(button);
        self.buttons.len() - 1
    }

    /// Deselect and redraw every other member, then select `index`.
    ///
    /// Returns `false` if `index` is out of range or already selected.
    pub fn select<S: Surface>(&mut self, surface: &mut S, index: usize) -> Result<bool, S::Error> {
        match self.buttons.get(index) {
            Some(button) if !button.selected => {}
            _ => return Ok(false),
        }
        for (i, other) in self.buttons.iter_mut().enumerate() {
            if i != index {
                other.deselect(surface)?;
            }
        }
        self.buttons[index].select(surface)
    }

    pub fn selected(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.selected)
    }

    pub fn get(&self, index: usize) -> Option<&RadioButton> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadioButton> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn draw_all<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        for button in &mut self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }

    pub fn invalidate_all<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for button in &self.buttons {
            button.invalidate(surface)?;
        }
        Ok(())
    }

    /// First visible, enabled member under the point.
    pub fn find_at(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.contains(x, y) && b.is_visible() && b.is_enabled())
    }
}
