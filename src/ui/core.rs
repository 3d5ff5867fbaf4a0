// src/ui/core.rs
//! Core widget traits and shared widget state

use alloc::boxed::Box;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::Surface;

/// Listener invoked synchronously after a state change has been redrawn.
///
/// Receives the widget and the new value.
pub type ChangeCallback<W, V> = Box<dyn FnMut(&W, V)>;

/// Geometry and flags every widget carries.
///
/// `contains` is half-open: `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetBase {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub visible: bool,
    pub enabled: bool,
}

impl WidgetBase {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            visible: true,
            enabled: true,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && (x as i64) < self.x as i64 + self.width as i64
            && (y as i64) < self.y as i64 + self.height as i64
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x, self.y),
            Size::new(self.width, self.height),
        )
    }

    /// Flush exactly this rectangle. Hidden widgets flush nothing.
    pub fn invalidate<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.visible {
            surface.update_region(self.x, self.y, self.width, self.height)?;
        }
        Ok(())
    }
}

/// A drawable, hit-testable UI element.
///
/// `draw` paints the full current state and is idempotent; it does not flush.
/// Callers follow it with [`Widget::invalidate`] once they are done batching.
///
/// The trait is generic over the surface, so it is not object-safe.
/// Heterogeneous collections use [`Element`](crate::ui::Element).
pub trait Widget {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error>;

    fn contains(&self, x: i32, y: i32) -> bool {
        self.base().contains(x, y)
    }

    fn invalidate<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.base().invalidate(surface)
    }

    fn bounds(&self) -> Rectangle {
        self.base().bounds()
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn is_enabled(&self) -> bool {
        self.base().enabled
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    /// Takes effect on the next `draw`.
    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().enabled = enabled;
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let base = self.base_mut();
        base.x = x;
        base.y = y;
    }

    /// Move and resize, as layouts do. Widgets with derived geometry override this.
    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let base = self.base_mut();
        base.x = x;
        base.y = y;
        base.width = width;
        base.height = height;
    }
}

/// Dirty region tracking for batched flushes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl Default for DirtyRegion {
    fn default() -> Self {
        Self {
            bounds: Rectangle::zero(),
            is_dirty: false,
        }
    }
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if other.size.width == 0 || other.size.height == 0 {
            return;
        }
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            // Calculate the bounding box that includes both rectangles
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }

    /// Take the pending bounds, leaving the region clean.
    pub fn take(&mut self) -> Option<Rectangle> {
        if self.is_dirty {
            self.is_dirty = false;
            Some(self.bounds)
        } else {
            None
        }
    }
}
