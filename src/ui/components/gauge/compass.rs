// src/ui/components/gauge/compass.rs
//! Compass rose with a two-tone heading needle

use alloc::boxed::Box;
use embedded_hal::delay::DelayNs;
use log::warn;

use super::{Needle, draw_radial_text, draw_tick, shortest_arc, wrap_degrees};
use crate::config::{DEFAULT_STEP_DELAY_MS, UiConfig};
use crate::surface::{Surface, with_line_thickness};
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::{FONT_SMALL, Font};
use crate::ui::styling::{BLACK, Color, GRAY, GRAY_DARK, RED, WHITE};

const TICK_STEP_DEG: u32 = 30;
const CARDINALS: [(&str, f32); 4] = [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)];
const RIM_GAP: f32 = 2.0;

/// Heading display: 0 is north (up), headings grow clockwise.
pub struct Compass {
    base: WidgetBase,
    cx: i32,
    cy: i32,
    radius: u32,
    heading: f32,
    last_angle: Option<f32>,
    face: Color,
    rim: Color,
    tick_color: Color,
    north_color: Color,
    tail_color: Color,
    font: Font,
    step_delay_ms: u32,
    on_change: Option<ChangeCallback<Self, f32>>,
}

impl Compass {
    pub fn new(cx: i32, cy: i32, radius: u32) -> Self {
        let r = radius as i32;
        Self {
            base: WidgetBase::new(cx - r, cy - r, radius * 2 + 1, radius * 2 + 1),
            cx,
            cy,
            radius,
            heading: 0.0,
            last_angle: None,
            face: WHITE,
            rim: GRAY_DARK,
            tick_color: BLACK,
            north_color: RED,
            tail_color: GRAY,
            font: Font::fixed(FONT_SMALL),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            on_change: None,
        }
    }

    pub fn with_colors(mut self, face: Color, rim: Color, ticks: Color) -> Self {
        self.face = face;
        self.rim = rim;
        self.tick_color = ticks;
        self
    }

    pub fn with_needle_colors(mut self, north: Color, tail: Color) -> Self {
        self.north_color = north;
        self.tail_color = tail;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Pause between steps of [`rotate`](Self::rotate).
    pub fn with_step_delay(mut self, delay_ms: u32) -> Self {
        self.step_delay_ms = delay_ms;
        self
    }

    /// Take the step delay and label font size from `config`.
    pub fn with_config(self, config: &UiConfig) -> Self {
        self.with_step_delay(config.animation_step_delay_ms)
            .with_font(config.font())
    }

    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Self, f32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Current heading in `[0, 360)`.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Raster angle of the north tip: 0 is right, clockwise.
    pub fn screen_angle(&self) -> f32 {
        wrap_degrees(self.heading - 90.0)
    }

    pub fn last_angle(&self) -> Option<f32> {
        self.last_angle
    }

    /// Wrap `heading` into `[0, 360)` and redraw the needle if it moved.
    pub fn set_heading<S: Surface>(&mut self, surface: &mut S, heading: f32) -> Result<bool, S::Error> {
        if !heading.is_finite() {
            return Ok(false);
        }
        let heading = wrap_degrees(heading);
        if heading == self.heading {
            return Ok(false);
        }
        self.heading = heading;

        if !self.base.visible {
            self.last_angle = None;
        } else if let Some(previous) = self.last_angle {
            for needle in self.needles(previous) {
                needle.erase(surface, self.cx, self.cy, self.face)?;
            }
            self.draw_rose(surface)?;
            self.draw_needle(surface)?;
        } else {
            self.draw(surface)?;
        }
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, heading);
            self.on_change = Some(callback);
        }
        Ok(true)
    }

    /// Turn to `target` along the shorter arc in `steps` increments,
    /// sleeping `delay_ms` between them.
    pub fn rotate_to<S: Surface, D: DelayNs>(
        &mut self,
        surface: &mut S,
        target: f32,
        steps: u32,
        delay: &mut D,
        delay_ms: u32,
    ) -> Result<(), S::Error> {
        if !target.is_finite() {
            return Ok(());
        }
        if steps == 0 {
            warn!("compass rotation with zero steps, jumping to {}", target);
            self.set_heading(surface, target)?;
            return Ok(());
        }

        let start = self.heading;
        let arc = shortest_arc(start, wrap_degrees(target));
        for i in 0..=steps {
            let heading = if i == steps {
                target
            } else {
                start + arc * i as f32 / steps as f32
            };
            self.set_heading(surface, heading)?;
            if i < steps {
                delay.delay_ms(delay_ms);
            }
        }
        Ok(())
    }

    /// [`rotate_to`](Self::rotate_to) with the compass's own step delay.
    pub fn rotate<S: Surface, D: DelayNs>(
        &mut self,
        surface: &mut S,
        target: f32,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), S::Error> {
        let delay_ms = self.step_delay_ms;
        self.rotate_to(surface, target, steps, delay, delay_ms)
    }

    /// North pointer and the tail opposite it.
    fn needles(&self, screen_angle: f32) -> [Needle; 2] {
        let r = self.radius as f32;
        [
            Needle {
                raster_deg: screen_angle,
                length: r * 0.7,
                color: self.north_color,
            },
            Needle {
                raster_deg: screen_angle + 180.0,
                length: r * 0.4,
                color: self.tail_color,
            },
        ]
    }

    fn draw_rose<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let outer = self.radius as f32 - RIM_GAP;
        let major_len = (self.radius as f32 / 6.0).max(4.0);

        with_line_thickness(surface, 1, |s| {
            for deg in (0..360).step_by(TICK_STEP_DEG as usize) {
                let len = if deg % 90 == 0 { major_len } else { major_len / 2.0 };
                let raster = deg as f32 - 90.0;
                draw_tick(s, self.cx, self.cy, raster, outer - len, outer, self.tick_color)?;
            }
            Ok(())
        })?;

        let letter_radius = outer - major_len - 2.0 - self.font.line_height() as f32 / 2.0;
        for (letter, heading) in CARDINALS {
            let color = if letter == "N" { self.north_color } else { self.tick_color };
            draw_radial_text(
                surface,
                &self.font,
                self.cx,
                self.cy,
                letter_radius,
                heading - 90.0,
                letter,
                color,
            )?;
        }
        Ok(())
    }

    fn draw_needle<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let angle = self.screen_angle();
        // Tail first so the north tip wins at the hub
        let [north, tail] = self.needles(angle);
        tail.draw(surface, self.cx, self.cy)?;
        north.draw(surface, self.cx, self.cy)?;
        let hub = (self.radius / 12).max(3);
        surface.circle(self.cx, self.cy, hub, self.tick_color, Some(self.tick_color))?;
        self.last_angle = Some(angle);
        Ok(())
    }
}

impl Widget for Compass {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let radius = width.min(height).saturating_sub(1) / 2;
        self.radius = radius;
        self.cx = x + radius as i32;
        self.cy = y + radius as i32;
        self.base.x = x;
        self.base.y = y;
        self.base.width = radius * 2 + 1;
        self.base.height = radius * 2 + 1;
        self.last_angle = None;
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let size = self.base.width;
        self.set_bounds(x, y, size, size);
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        surface.circle(self.cx, self.cy, self.radius, self.rim, Some(self.face))?;
        self.draw_rose(surface)?;
        self.draw_needle(surface)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::testing::{CountingDelay, RecordingSurface};

    #[test]
    fn test_east_maps_to_raster_right() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut compass = Compass::new(100, 100, 50);
        assert_eq!(compass.screen_angle(), 270.0);

        compass.set_heading(&mut surface, 90.0).unwrap();
        assert_eq!(compass.screen_angle(), 0.0);
    }

    #[test]
    fn test_heading_wraps() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut compass = Compass::new(100, 100, 50);
        compass.set_heading(&mut surface, 450.0).unwrap();
        assert_eq!(compass.heading(), 90.0);
        compass.set_heading(&mut surface, -30.0).unwrap();
        assert_eq!(compass.heading(), 330.0);

        surface.clear_log();
        assert!(!compass.set_heading(&mut surface, 690.0).unwrap());
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_cardinal_letters_drawn() {
        let mut surface = RecordingSurface::new(320, 240);
        Compass::new(100, 100, 50).draw(&mut surface).unwrap();
        assert_eq!(surface.texts(), ["N", "E", "S", "W"]);
    }

    #[test]
    fn test_rotate_takes_short_way() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut delay = CountingDelay::default();
        let mut compass = Compass::new(100, 100, 50);
        compass.set_heading(&mut surface, 350.0).unwrap();

        let seen = alloc::rc::Rc::new(core::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut compass = compass.with_on_change(move |_, h| sink.borrow_mut().push(h));
        compass
            .rotate_to(&mut surface, 10.0, 2, &mut delay, 15)
            .unwrap();

        assert_eq!(*seen.borrow(), [0.0, 10.0]);
        assert_eq!(delay.total_ms, 30);
    }

    #[test]
    fn test_rotate_uses_configured_delay() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut delay = CountingDelay::default();
        let config = UiConfig {
            animation_step_delay_ms: 5,
            ..UiConfig::default()
        };
        let mut compass = Compass::new(100, 100, 50).with_config(&config);
        compass.rotate(&mut surface, 90.0, 4, &mut delay).unwrap();
        assert_eq!(compass.heading(), 90.0);
        assert_eq!(delay.calls, 4);
        assert_eq!(delay.total_ms, 20);
    }

    #[test]
    fn test_erase_leaves_no_stale_pixels() {
        let mut moved = FrameBuffer::new(81, 81);
        let mut compass = Compass::new(40, 40, 40);
        compass.draw(&mut moved).unwrap();
        compass.set_heading(&mut moved, 90.0).unwrap();

        let mut fresh = FrameBuffer::new(81, 81);
        let mut reference = Compass::new(40, 40, 40);
        reference.set_heading(&mut fresh, 90.0).unwrap();

        for y in 0..81 {
            for x in 0..81 {
                assert_eq!(moved.pixel_at(x, y), fresh.pixel_at(x, y), "pixel ({x}, {y})");
            }
        }
    }
}
