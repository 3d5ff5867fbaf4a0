// src/ui/components/gauge/dial.rs
//! Round dial with a value needle

use alloc::boxed::Box;
use embedded_hal::delay::DelayNs;
use log::warn;

use super::{Needle, draw_radial_text, draw_tick, format_value};
use crate::config::{DEFAULT_STEP_DELAY_MS, UiConfig};
use crate::surface::{Surface, with_line_thickness};
use crate::ui::core::{ChangeCallback, Widget, WidgetBase};
use crate::ui::font::{FONT_SMALL, Font};
use crate::ui::styling::{BLACK, Color, GRAY_DARK, RED, WHITE};

const DEFAULT_START_ANGLE: f32 = -135.0;
const DEFAULT_END_ANGLE: f32 = 135.0;
const DEFAULT_MAJOR_TICKS: u32 = 5;
const DEFAULT_MINOR_TICKS: u32 = 4;

/// Gap between the rim and the outer end of the ticks.
const RIM_GAP: f32 = 2.0;

/// Analog dial mapping `[min, max]` onto a sweep of gauge angles.
///
/// Gauge angles put 0 at the top and grow clockwise; the default sweep runs
/// from -135 to 135, leaving the gap at the bottom.
///
/// # Examples
///
/// ```ignore
/// let mut speed = Dial::new(120, 120, 80).with_range(0.0, 200.0);
/// speed.draw(&mut fb)?;
/// speed.invalidate(&mut fb)?;
/// speed.animate_to(&mut fb, 140.0, 10, &mut delay, DEFAULT_STEP_DELAY_MS)?;
/// ```
pub struct Dial {
    base: WidgetBase,
    cx: i32,
    cy: i32,
    radius: u32,
    min: f32,
    max: f32,
    start_angle: f32,
    end_angle: f32,
    value: f32,
    last_angle: Option<f32>,
    major_ticks: u32,
    minor_ticks: u32,
    show_labels: bool,
    face: Color,
    rim: Color,
    tick_color: Color,
    needle_color: Color,
    font: Font,
    step_delay_ms: u32,
    on_change: Option<ChangeCallback<Self, f32>>,
}

impl Dial {
    pub fn new(cx: i32, cy: i32, radius: u32) -> Self {
        Self {
            base: square_around(cx, cy, radius),
            cx,
            cy,
            radius,
            min: 0.0,
            max: 100.0,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            value: 0.0,
            last_angle: None,
            major_ticks: DEFAULT_MAJOR_TICKS,
            minor_ticks: DEFAULT_MINOR_TICKS,
            show_labels: true,
            face: WHITE,
            rim: GRAY_DARK,
            tick_color: BLACK,
            needle_color: RED,
            font: Font::fixed(FONT_SMALL),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            on_change: None,
        }
    }

    /// Swapped bounds are reordered; the value is clamped into the new range.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min.min(max);
        self.max = max.max(min);
        self.value = self.value.clamp(self.min, self.max);
        self
    }

    /// Gauge angles (0 = up, clockwise) of the minimum and maximum.
    pub fn with_angles(mut self, start: f32, end: f32) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    /// `major` labelled intervals, each split into `minor` steps. 0 hides them.
    pub fn with_ticks(mut self, major: u32, minor: u32) -> Self {
        self.major_ticks = major;
        self.minor_ticks = minor;
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn with_colors(mut self, face: Color, rim: Color, ticks: Color, needle: Color) -> Self {
        self.face = face;
        self.rim = rim;
        self.tick_color = ticks;
        self.needle_color = needle;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Pause between steps of [`animate`](Self::animate).
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

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Gauge angle for `value`, clamped to the range. A zero-width range
    /// points at the middle of the sweep.
    pub fn angle_for(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        let fraction = if span > 0.0 {
            (value.clamp(self.min, self.max) - self.min) / span
        } else {
            0.5
        };
        self.start_angle + fraction * (self.end_angle - self.start_angle)
    }

    /// Gauge angle of the current value.
    pub fn angle(&self) -> f32 {
        self.angle_for(self.value)
    }

    /// Angle of the needle on screen, `None` until the dial is drawn.
    pub fn last_angle(&self) -> Option<f32> {
        self.last_angle
    }

    /// Clamp, then move the needle with the erase-and-redraw protocol.
    ///
    /// An undrawn dial gets a full draw instead. Returns `false` for NaN or
    /// an unchanged value.
    pub fn set_value<S: Surface>(&mut self, surface: &mut S, value: f32) -> Result<bool, S::Error> {
        if value.is_nan() {
            return Ok(false);
        }
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return Ok(false);
        }
        self.value = value;

        if !self.base.visible {
            self.last_angle = None;
        } else if let Some(previous) = self.last_angle {
            self.needle(previous)
                .erase(surface, self.cx, self.cy, self.face)?;
            self.draw_scale(surface)?;
            self.draw_needle(surface)?;
        } else {
            self.draw(surface)?;
        }
        self.invalidate(surface)?;

        if let Some(mut callback) = self.on_change.take() {
            callback(self, value);
            self.on_change = Some(callback);
        }
        Ok(true)
    }

    /// Step the needle to `target` over `steps` increments, sleeping
    /// `delay_ms` between them. Blocks for `steps * delay_ms`.
    pub fn animate_to<S: Surface, D: DelayNs>(
        &mut self,
        surface: &mut S,
        target: f32,
        steps: u32,
        delay: &mut D,
        delay_ms: u32,
    ) -> Result<(), S::Error> {
        if target.is_nan() {
            return Ok(());
        }
        let target = target.clamp(self.min, self.max);
        if steps == 0 {
            warn!("dial animation with zero steps, jumping to {}", target);
            self.set_value(surface, target)?;
            return Ok(());
        }

        let start = self.value;
        for i in 0..=steps {
            let value = if i == steps {
                target
            } else {
                start + (target - start) * i as f32 / steps as f32
            };
            self.set_value(surface, value)?;
            if i < steps {
                delay.delay_ms(delay_ms);
            }
        }
        Ok(())
    }

    /// [`animate_to`](Self::animate_to) with the dial's own step delay.
    pub fn animate<S: Surface, D: DelayNs>(
        &mut self,
        surface: &mut S,
        target: f32,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), S::Error> {
        let delay_ms = self.step_delay_ms;
        self.animate_to(surface, target, steps, delay, delay_ms)
    }

    fn needle(&self, angle: f32) -> Needle {
        Needle {
            raster_deg: angle - 90.0,
            length: self.radius as f32 * 0.75,
            color: self.needle_color,
        }
    }

    fn hub_radius(&self) -> u32 {
        (self.radius / 12).max(3)
    }

    fn major_length(&self) -> f32 {
        (self.radius as f32 / 8.0).max(4.0)
    }

    /// Ticks and labels.
    fn draw_scale<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.major_ticks == 0 {
            return Ok(());
        }
        let outer = self.radius as f32 - RIM_GAP;
        let major_len = self.major_length();
        let minor_len = major_len / 2.0;
        let steps = self.major_ticks * self.minor_ticks.max(1);
        let sweep = self.end_angle - self.start_angle;

        with_line_thickness(surface, 1, |s| {
            for i in 0..=steps {
                let angle = self.start_angle + sweep * i as f32 / steps as f32 - 90.0;
                let is_major = i % self.minor_ticks.max(1) == 0;
                let len = if is_major { major_len } else { minor_len };
                draw_tick(s, self.cx, self.cy, angle, outer - len, outer, self.tick_color)?;
            }
            Ok(())
        })?;

        if !self.show_labels {
            return Ok(());
        }
        let label_radius = outer - major_len - 2.0 - self.font.line_height() as f32;
        for i in 0..=self.major_ticks {
            let fraction = i as f32 / self.major_ticks as f32;
            let value = self.min + (self.max - self.min) * fraction;
            let angle = self.start_angle + sweep * fraction - 90.0;
            let text = format_value(value);
            draw_radial_text(
                surface,
                &self.font,
                self.cx,
                self.cy,
                label_radius,
                angle,
                &text,
                self.tick_color,
            )?;
        }
        Ok(())
    }

    fn draw_needle<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let angle = self.angle();
        self.needle(angle).draw(surface, self.cx, self.cy)?;
        let hub = self.hub_radius();
        surface.circle(self.cx, self.cy, hub, self.needle_color, Some(self.needle_color))?;
        self.last_angle = Some(angle);
        Ok(())
    }
}

/// Bounding square of a circle as rasterized: `2r + 1` pixels across.
fn square_around(cx: i32, cy: i32, radius: u32) -> WidgetBase {
    let r = radius as i32;
    WidgetBase::new(cx - r, cy - r, radius * 2 + 1, radius * 2 + 1)
}

impl Widget for Dial {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Fit the largest circle into the box, anchored at its top-left corner.
    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let radius = width.min(height).saturating_sub(1) / 2;
        let WidgetBase { visible, enabled, .. } = self.base;
        self.radius = radius;
        self.cx = x + radius as i32;
        self.cy = y + radius as i32;
        self.base = WidgetBase {
            visible,
            enabled,
            ..square_around(self.cx, self.cy, radius)
        };
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
        self.draw_scale(surface)?;
        self.draw_needle(surface)
    }
}
