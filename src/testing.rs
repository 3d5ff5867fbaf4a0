//! Test doubles shared by the unit tests.

use alloc::string::String;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::surface::Surface;
use crate::ui::styling::Color;

/// One primitive call as seen by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fill(Color),
    Pixel(i32, i32, Color),
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        border: Color,
        fill: Option<Color>,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        thickness: u32,
    },
    Circle {
        cx: i32,
        cy: i32,
        r: u32,
        border: Color,
        fill: Option<Color>,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
        bg: Option<Color>,
        size: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFault;

/// Records every primitive instead of rasterizing.
pub struct RecordingSurface {
    width: u32,
    height: u32,
    thickness: u32,
    pub calls: Vec<Call>,
    pub regions: Vec<(i32, i32, u32, u32)>,
    pub shows: usize,
    /// Make the next primitive return an error.
    pub fail_next: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            thickness: 1,
            calls: Vec::new(),
            regions: Vec::new(),
            shows: 0,
            fail_next: false,
        }
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
        self.regions.clear();
        self.shows = 0;
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(|c| matches!(c, Call::Line { .. }))
    }

    fn record(&mut self, call: Call) -> Result<(), SurfaceFault> {
        if core::mem::take(&mut self.fail_next) {
            return Err(SurfaceFault);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Error = SurfaceFault;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Color) -> Result<(), Self::Error> {
        self.record(Call::Fill(color))
    }

    fn pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error> {
        self.record(Call::Pixel(x, y, color))
    }

    fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error> {
        self.record(Call::Rect {
            x,
            y,
            w,
            h,
            border,
            fill,
        })
    }

    fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Self::Error> {
        let thickness = self.thickness;
        self.record(Call::Line {
            x0,
            y0,
            x1,
            y1,
            color,
            thickness,
        })
    }

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: u32,
        border: Color,
        fill: Option<Color>,
    ) -> Result<(), Self::Error> {
        self.record(Call::Circle {
            cx,
            cy,
            r,
            border,
            fill,
        })
    }

    fn text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        bg: Option<Color>,
        size: u8,
    ) -> Result<(), Self::Error> {
        self.record(Call::Text {
            x,
            y,
            text: text.into(),
            color,
            bg,
            size,
        })
    }

    fn set_line_thickness(&mut self, px: u32) {
        self.thickness = px.clamp(1, 20);
    }

    fn line_thickness(&self) -> u32 {
        self.thickness
    }

    fn update_region(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<(), Self::Error> {
        self.regions.push((x, y, w, h));
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shows += 1;
        Ok(())
    }
}

/// Delay that only counts what it was asked to wait.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_ms: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ms += ns / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
