// src/ui/components/button_group.rs
//! Ordered set of buttons sharing hit-testing

use alloc::vec::Vec;

use crate::surface::Surface;
use crate::ui::core::Widget;
use crate::ui::elements::Element;

/// Buttons (or any elements) drawn and hit-tested together.
///
/// Resolving a touch to an action is left to the caller; `find_at` only
/// reports which member was hit.
#[derive(Default)]
pub struct ButtonGroup {
    members: Vec<Element>,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the member's index.
    pub fn add(&mut self, button: impl Into<Element>) -> usize {
        self.members.push(button.into());
        self.members.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.members.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.members.iter()
    }

    pub fn draw_all<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        for member in &mut self.members {
            member.draw(surface)?;
        }
        Ok(())
    }

    pub fn invalidate_all<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for member in &self.members {
            member.invalidate(surface)?;
        }
        Ok(())
    }

    /// First visible, enabled member containing the point, in insertion order.
    pub fn find_at(&self, x: i32, y: i32) -> Option<usize> {
        self.members
            .iter()
            .position(|m| m.contains(x, y) && m.is_visible() && m.is_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use crate::ui::components::{Button, Button3D};

    fn row() -> ButtonGroup {
        let mut group = ButtonGroup::new();
        group.add(Button::new(0, 0, 50, 30, "A"));
        group.add(Button3D::new(60, 0, 50, 30, "B"));
        group.add(Button::new(40, 0, 50, 30, "C"));
        group
    }

    #[test]
    fn test_find_at_first_match_wins() {
        let group = row();
        assert_eq!(group.find_at(10, 10), Some(0));
        assert_eq!(group.find_at(45, 10), Some(0));
        assert_eq!(group.find_at(65, 10), Some(1));
        assert_eq!(group.find_at(200, 10), None);
    }

    #[test]
    fn test_find_at_skips_hidden_and_disabled() {
        let mut group = row();
        if let Some(first) = group.get_mut(0) {
            first.set_visible(false);
        }
        assert_eq!(group.find_at(45, 10), Some(2));

        if let Some(third) = group.get_mut(2) {
            third.set_enabled(false);
        }
        assert_eq!(group.find_at(45, 10), None);
    }

    #[test]
    fn test_draw_and_invalidate_all() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut group = row();
        group.draw_all(&mut surface).unwrap();
        assert_eq!(surface.texts(), ["A", "B", "C"]);

        group.invalidate_all(&mut surface).unwrap();
        assert_eq!(
            surface.regions,
            [(0, 0, 50, 30), (60, 0, 50, 30), (40, 0, 50, 30)]
        );
    }
}
