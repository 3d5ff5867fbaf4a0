// src/ui/components/chart.rs
//! Scrolling line chart
//!
//! Samples are kept in a ring of fixed capacity. While the buffer is filling
//! and the vertical scale holds still, each new sample only adds one line
//! segment. Once the buffer scrolls, or an auto scale has to grow, every
//! point moves and the chart is repainted in full.

use alloc::collections::VecDeque;
use log::debug;
use micromath::F32Ext;

use crate::surface::{Surface, with_line_thickness};
use crate::ui::core::{Widget, WidgetBase};
use crate::ui::styling::{BLACK, Color, GRAY_DARK, GREEN};

/// Smallest number of samples a chart holds.
pub const MIN_CAPACITY: usize = 2;

/// Half-height of the band an auto scale uses for flat data.
const FLAT_PADDING: f32 = 1.0;

/// Vertical scaling of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Fit the current samples.
    Auto,
    /// Fixed bounds; samples outside are pinned to the edge.
    Fixed { min: f32, max: f32 },
}

/// What `add_point` repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Only the newest segment.
    Incremental,
    /// Background, grid and every segment.
    Full,
    /// Nothing: the chart is hidden or the sample was not finite.
    Skipped,
}

pub struct LineChart {
    base: WidgetBase,
    capacity: usize,
    points: VecDeque<f32>,
    scale: AxisScale,
    line_color: Color,
    bg: Color,
    border: Option<Color>,
    grid: Option<(u32, Color)>,
    drawn_range: Option<(f32, f32)>,
}

impl LineChart {
    /// `capacity` below [`MIN_CAPACITY`] is raised to it.
    pub fn new(x: i32, y: i32, width: u32, height: u32, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            base: WidgetBase::new(x, y, width, height),
            capacity,
            points: VecDeque::with_capacity(capacity),
            scale: AxisScale::Auto,
            line_color: GREEN,
            bg: BLACK,
            border: Some(GRAY_DARK),
            grid: None,
            drawn_range: None,
        }
    }

    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_colors(mut self, line: Color, bg: Color) -> Self {
        self.line_color = line;
        self.bg = bg;
        self
    }

    pub fn with_border(mut self, border: Option<Color>) -> Self {
        self.border = border;
        self
    }

    /// `lines` evenly spaced horizontal grid lines.
    pub fn with_grid(mut self, lines: u32, color: Color) -> Self {
        self.grid = (lines > 0).then_some((lines, color));
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn points(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertical bounds the samples are currently scaled to.
    pub fn value_range(&self) -> (f32, f32) {
        match self.scale {
            AxisScale::Fixed { min, max } => (min.min(max), max.max(min)),
            AxisScale::Auto => {
                let mut iter = self.points.iter().copied();
                let Some(first) = iter.next() else {
                    return (0.0, FLAT_PADDING);
                };
                let (lo, hi) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                if hi - lo < f32::EPSILON {
                    (lo - FLAT_PADDING, hi + FLAT_PADDING)
                } else {
                    (lo, hi)
                }
            }
        }
    }

    /// Append a sample, dropping the oldest once full, and repaint.
    pub fn add_point<S: Surface>(&mut self, surface: &mut S, value: f32) -> Result<Redraw, S::Error> {
        if !value.is_finite() {
            return Ok(Redraw::Skipped);
        }
        let scrolled = self.points.len() == self.capacity;
        if scrolled {
            self.points.pop_front();
        }
        self.points.push_back(value);

        if !self.base.visible {
            self.drawn_range = None;
            return Ok(Redraw::Skipped);
        }

        let range = self.value_range();
        if scrolled || self.drawn_range != Some(range) {
            debug!(
                "chart full redraw: scrolled={} range={:?}",
                scrolled, range
            );
            self.draw(surface)?;
            self.invalidate(surface)?;
            return Ok(Redraw::Full);
        }

        let n = self.points.len();
        if n >= 2 {
            let (x0, y0) = self.plot_point(n - 2, self.points[n - 2], range);
            let (x1, y1) = self.plot_point(n - 1, value, range);
            let color = self.line_color;
            with_line_thickness(surface, 1, |s| s.line(x0, y0, x1, y1, color))?;
        }
        self.invalidate(surface)?;
        Ok(Redraw::Incremental)
    }

    /// Drop every sample and repaint the empty chart.
    pub fn clear<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.points.clear();
        self.draw(surface)?;
        self.invalidate(surface)
    }

    /// Plot rectangle inside the 1px frame: `(x, y, width, height)`.
    fn plot_area(&self) -> (i32, i32, u32, u32) {
        (
            self.base.x + 1,
            self.base.y + 1,
            self.base.width.saturating_sub(2),
            self.base.height.saturating_sub(2),
        )
    }

    fn plot_point(&self, index: usize, value: f32, (lo, hi): (f32, f32)) -> (i32, i32) {
        let (px, py, pw, ph) = self.plot_area();
        let span_x = pw.saturating_sub(1) as f32;
        let span_y = ph.saturating_sub(1) as f32;

        let x = px as f32 + span_x * index as f32 / (self.capacity - 1) as f32;
        let span = hi - lo;
        // A collapsed fixed scale plots on the middle row
        let fraction = if span > 0.0 {
            ((value - lo) / span).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let y = py as f32 + span_y * (1.0 - fraction);
        (x.round() as i32, y.round() as i32)
    }
}

impl Widget for LineChart {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.base.x = x;
        self.base.y = y;
        self.base.width = width;
        self.base.height = height;
        self.drawn_range = None;
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.base.visible {
            return Ok(());
        }
        let WidgetBase {
            x, y, width, height, ..
        } = self.base;
        surface.rect(x, y, width, height, self.border.unwrap_or(self.bg), Some(self.bg))?;

        let range = self.value_range();
        let (px, py, pw, ph) = self.plot_area();
        let points = &self.points;
        let line_color = self.line_color;
        let grid = self.grid;

        with_line_thickness(surface, 1, |s| {
            if let Some((lines, color)) = grid
                && pw > 0
            {
                for k in 1..=lines {
                    let gy = py + (ph * k / (lines + 1)) as i32;
                    s.line(px, gy, px + pw as i32 - 1, gy, color)?;
                }
            }
            let mut previous = None;
            for (i, &value) in points.iter().enumerate() {
                let point = self.plot_point(i, value, range);
                if let Some((x0, y0)) = previous {
                    s.line(x0, y0, point.0, point.1, line_color)?;
                }
                previous = Some(point);
            }
            Ok(())
        })?;

        self.drawn_range = Some(range);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::styling::GRAY;

    fn fixed_chart(capacity: usize) -> LineChart {
        // Plot area is 101x101 starting at (1, 1)
        LineChart::new(0, 0, 103, 103, capacity)
            .with_scale(AxisScale::Fixed { min: 0.0, max: 100.0 })
    }

    #[test]
    fn test_first_point_draws_in_full() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart = fixed_chart(5);
        assert_eq!(chart.add_point(&mut surface, 10.0).unwrap(), Redraw::Full);
        assert_eq!(chart.add_point(&mut surface, 20.0).unwrap(), Redraw::Incremental);
    }

    #[test]
    fn test_incremental_segment_position() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart = fixed_chart(5);
        chart.add_point(&mut surface, 0.0).unwrap();
        surface.clear_log();

        chart.add_point(&mut surface, 100.0).unwrap();
        assert_eq!(
            surface.calls,
            [Call::Line {
                x0: 1,
                y0: 101,
                x1: 26,
                y1: 1,
                color: GREEN,
                thickness: 1
            }]
        );
        assert_eq!(surface.regions, [(0, 0, 103, 103)]);
    }

    #[test]
    fn test_scrolling_forces_full_redraw() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart = fixed_chart(3);
        for v in [1.0, 2.0, 3.0] {
            chart.add_point(&mut surface, v).unwrap();
        }
        assert_eq!(chart.add_point(&mut surface, 4.0).unwrap(), Redraw::Full);
        assert_eq!(chart.points().collect::<alloc::vec::Vec<_>>(), [2.0, 3.0, 4.0]);
        assert_eq!(chart.len(), 3);
    }

    #[test]
    fn test_auto_range_growth_forces_full_redraw() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart = LineChart::new(0, 0, 100, 50, 10);

        assert_eq!(chart.add_point(&mut surface, 5.0).unwrap(), Redraw::Full);
        assert_eq!(chart.value_range(), (4.0, 6.0));
        assert_eq!(chart.add_point(&mut surface, 10.0).unwrap(), Redraw::Full);
        assert_eq!(chart.add_point(&mut surface, 7.0).unwrap(), Redraw::Incremental);
    }

    #[test]
    fn test_out_of_range_samples_are_pinned() {
        let chart = fixed_chart(5);
        assert_eq!(chart.plot_point(0, 250.0, (0.0, 100.0)), (1, 1));
        assert_eq!(chart.plot_point(4, -5.0, (0.0, 100.0)), (101, 101));
    }

    #[test]
    fn test_grid_and_skips() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart = fixed_chart(5).with_grid(3, GRAY);
        chart.draw(&mut surface).unwrap();
        let grid_rows: alloc::vec::Vec<i32> = surface
            .lines()
            .map(|c| match c {
                Call::Line { y0, .. } => *y0,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(grid_rows, [1 + 25, 1 + 50, 1 + 75]);

        assert_eq!(chart.add_point(&mut surface, f32::NAN).unwrap(), Redraw::Skipped);
        chart.set_visible(false);
        assert_eq!(chart.add_point(&mut surface, 1.0).unwrap(), Redraw::Skipped);
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn test_collapsed_fixed_scale_stays_inside_plot() {
        let mut surface = RecordingSurface::new(320, 240);
        let mut chart =
            LineChart::new(10, 100, 50, 50, 4).with_scale(AxisScale::Fixed { min: 5.0, max: 5.0 });
        chart.add_point(&mut surface, 5.0).unwrap();
        surface.clear_log();
        assert_eq!(chart.add_point(&mut surface, 5.0).unwrap(), Redraw::Incremental);

        let segment = surface.lines().next().cloned();
        let Some(Call::Line { y0, y1, .. }) = segment else {
            panic!("expected one segment, got {:?}", surface.calls);
        };
        assert_eq!(y0, y1);
        assert!((101..149).contains(&y0), "segment row {y0} outside plot");
        assert_eq!(chart.plot_point(0, 9.0, (5.0, 5.0)).1, y0);
    }

    #[test]
    fn test_capacity_floor() {
        assert_eq!(LineChart::new(0, 0, 10, 10, 0).capacity(), MIN_CAPACITY);
    }
}
