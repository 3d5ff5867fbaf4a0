// src/ui/layouts/hbox.rs
//! Horizontal box layout with stretch factors

use alloc::vec::Vec;
use log::debug;

use crate::surface::Surface;
use crate::ui::core::{Widget, WidgetBase};
use crate::ui::elements::Element;

/// Child element with its stretch factor
struct Slot {
    element: Element,
    stretch: u32,
}

/// Arranges children left to right, sharing the width by stretch factor.
///
/// The spacing between children is taken off the width first; what remains
/// is split in proportion to each child's stretch, in insertion order, and
/// rounding leftovers go to the last child. Every child gets the full
/// height. Layout runs again on each `add` and on every resize.
///
/// # Examples
/// ```ignore
/// let mut toolbar = HBoxLayout::new(0, 0, 320, 40).with_spacing(4);
/// toolbar.add(Button::new(0, 0, 0, 0, "Back"), 1);
/// toolbar.add(Label::new(0, 0, "Title"), 3);
/// toolbar.add(Button::new(0, 0, 0, 0, "Menu"), 1);
/// toolbar.draw(&mut fb)?;
/// ```
pub struct HBoxLayout {
    base: WidgetBase,
    spacing: u32,
    children: Vec<Slot>,
}

impl HBoxLayout {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            spacing: 0,
            children: Vec::new(),
        }
    }

    /// Gap between neighbouring children in pixels.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self.layout();
        self
    }

    /// Append a child and re-run layout. A stretch of 0 counts as 1.
    pub fn add(&mut self, child: impl Into<Element>, stretch: u32) -> usize {
        self.children.push(Slot {
            element: child.into(),
            stretch: stretch.max(1),
        });
        self.layout();
        self.children.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.children.get(index).map(|slot| &slot.element)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index).map(|slot| &mut slot.element)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Recalculate bounds for all children
    fn layout(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let gaps = self.children.len().saturating_sub(1) as u32;
        let available = self.base.width.saturating_sub(self.spacing * gaps);
        let total_stretch: u32 = self.children.iter().map(|slot| slot.stretch).sum();

        debug!(
            "hbox layout: {} children, {}px available",
            self.children.len(),
            available
        );

        let last = self.children.len() - 1;
        let mut current_x = self.base.x;
        let mut used = 0u32;
        for (i, slot) in self.children.iter_mut().enumerate() {
            let width = if i == last {
                available - used
            } else {
                (available as u64 * slot.stretch as u64 / total_stretch as u64) as u32
            };
            slot.element
                .set_bounds(current_x, self.base.y, width, self.base.height);
            used += width;
            current_x += (width + self.spacing) as i32;
        }
    }
}

impl Widget for HBoxLayout {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.base.x = x;
        self.base.y = y;
        self.layout();
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.base.x = x;
        self.base.y = y;
        self.base.width = width;
        self.base.height = height;
        self.layout();
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        for slot in &mut self.children {
            slot.element.draw(surface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::{Button, Label};

    fn bounds(layout: &HBoxLayout, i: usize) -> (i32, i32, u32, u32) {
        let b = layout.get(i).map(|e| *e.base()).unwrap();
        (b.x, b.y, b.width, b.height)
    }

    #[test]
    fn test_equal_stretch_splits_evenly() {
        let mut layout = HBoxLayout::new(10, 20, 300, 40).with_spacing(10);
        layout.add(Button::new(0, 0, 0, 0, "A"), 1);
        layout.add(Button::new(0, 0, 0, 0, "B"), 1);
        layout.add(Button::new(0, 0, 0, 0, "C"), 1);

        assert_eq!(bounds(&layout, 0), (10, 20, 93, 40));
        assert_eq!(bounds(&layout, 1), (113, 20, 93, 40));
        // Rounding remainder lands on the last child
        assert_eq!(bounds(&layout, 2), (216, 20, 94, 40));
    }

    #[test]
    fn test_proportional_stretch() {
        let mut layout = HBoxLayout::new(0, 0, 400, 30);
        layout.add(Label::new(0, 0, "a"), 1);
        layout.add(Label::new(0, 0, "b"), 3);
        assert_eq!(bounds(&layout, 0), (0, 0, 100, 30));
        assert_eq!(bounds(&layout, 1), (100, 0, 300, 30));
    }

    #[test]
    fn test_relayout_on_every_add() {
        let mut layout = HBoxLayout::new(0, 0, 200, 30);
        layout.add(Element::spacer(0, 0), 1);
        assert_eq!(bounds(&layout, 0), (0, 0, 200, 30));

        layout.add(Element::spacer(0, 0), 1);
        assert_eq!(bounds(&layout, 0), (0, 0, 100, 30));
        assert_eq!(bounds(&layout, 1), (100, 0, 100, 30));
    }

    #[test]
    fn test_zero_stretch_counts_as_one() {
        let mut layout = HBoxLayout::new(0, 0, 100, 10);
        layout.add(Element::spacer(0, 0), 0);
        layout.add(Element::spacer(0, 0), 1);
        assert_eq!(bounds(&layout, 0), (0, 0, 50, 10));
    }

    #[test]
    fn test_spacing_wider_than_box() {
        let mut layout = HBoxLayout::new(0, 0, 10, 10).with_spacing(20);
        layout.add(Element::spacer(0, 0), 1);
        layout.add(Element::spacer(0, 0), 1);
        assert_eq!(bounds(&layout, 0).2, 0);
        assert_eq!(bounds(&layout, 1).2, 0);
    }

    #[test]
    fn test_resize_relays_out() {
        let mut layout = HBoxLayout::new(0, 0, 100, 10);
        layout.add(Element::spacer(0, 0), 1);
        layout.set_bounds(5, 5, 60, 20);
        assert_eq!(bounds(&layout, 0), (5, 5, 60, 20));
    }
}
