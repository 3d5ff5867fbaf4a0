// src/ui/components/panel.rs
//! Background panel that can own child elements

use alloc::vec::Vec;

use crate::surface::Surface;
use crate::ui::core::{Widget, WidgetBase};
use crate::ui::elements::Element;
use crate::ui::styling::{Color, GRAY_DARK, GRAY_LIGHT};

/// Filled rectangle, optionally bordered, drawn beneath its children.
///
/// Child coordinates are absolute; the panel does not lay them out.
pub struct Panel {
    base: WidgetBase,
    bg: Color,
    border: Option<Color>,
    children: Vec<Element>,
}

impl Panel {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            bg: GRAY_LIGHT,
            border: Some(GRAY_DARK),
            children: Vec::new(),
        }
    }

    pub fn with_background(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// `None` draws the panel without a distinct border.
    pub fn with_border(mut self, border: Option<Color>) -> Self {
        self.border = border;
        self
    }

    pub fn background(&self) -> Color {
        self.bg
    }

    /// Returns the child's index.
    pub fn add_child(&mut self, child: impl Into<Element>) -> usize {
        self.children.push(child.into());
        self.children.len() - 1
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Topmost visible, enabled child containing the point.
    pub fn child_at(&self, x: i32, y: i32) -> Option<usize> {
        self.children
            .iter()
            .rposition(|c| c.contains(x, y) && c.is_visible() && c.is_enabled())
    }
}

impl Widget for Panel {
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
        surface.rect(x, y, width, height, self.border.unwrap_or(self.bg), Some(self.bg))?;

        for child in &mut self.children {
            child.draw(surface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::components::Label;

    #[test]
    fn test_border_and_borderless() {
        let mut surface = RecordingSurface::new(320, 240);
        Panel::new(0, 0, 50, 30).draw(&mut surface).unwrap();
        Panel::new(0, 0, 50, 30)
            .with_border(None)
            .draw(&mut surface)
            .unwrap();

        assert_eq!(
            surface.calls,
            [
                Call::Rect {
                    x: 0,
                    y: 0,
                    w: 50,
                    h: 30,
                    border: GRAY_DARK,
                    fill: Some(GRAY_LIGHT)
                },
                Call::Rect {
                    x: 0,
                    y: 0,
                    w: 50,
                    h: 30,
                    border: GRAY_LIGHT,
                    fill: Some(GRAY_LIGHT)
                },
            ]
        );
    }

    #[test]
    fn test_children_drawn_on_top() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut panel = Panel::new(0, 0, 200, 100);
        let idx = panel.add_child(Label::new(10, 10, "child"));
        assert_eq!(idx, 0);

        panel.draw(&mut surface).unwrap();
        assert!(matches!(surface.calls[0], Call::Rect { .. }));
        assert_eq!(surface.texts(), ["child"]);
        assert_eq!(panel.child_at(12, 12), Some(0));
        assert_eq!(panel.child_at(190, 90), None);
    }
}
