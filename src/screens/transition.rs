// src/screens/transition.rs
//! How the old screen is cleared before the next one is drawn

use crate::screens::Screen;
use crate::surface::Surface;

/// Prepares the surface for `to`. The manager draws the screen and flushes
/// the whole frame afterwards.
pub trait Transition {
    fn run<S: Surface>(&mut self, surface: &mut S, to: &Screen) -> Result<(), S::Error>;
}

/// Fill the whole surface with the next screen's background.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClearTransition;

impl Transition for ClearTransition {
    fn run<S: Surface>(&mut self, surface: &mut S, to: &Screen) -> Result<(), S::Error> {
        surface.fill(to.background())
    }
}

/// Paint the next background in vertical bands from left to right,
/// flushing each band as it lands.
#[derive(Debug, Clone, Copy)]
pub struct WipeTransition {
    bands: u32,
}

impl WipeTransition {
    /// At least one band is always used.
    pub fn new(bands: u32) -> Self {
        Self {
            bands: bands.max(1),
        }
    }

    pub fn bands(&self) -> u32 {
        self.bands
    }
}

impl Default for WipeTransition {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Transition for WipeTransition {
    fn run<S: Surface>(&mut self, surface: &mut S, to: &Screen) -> Result<(), S::Error> {
        let (width, height) = (surface.width(), surface.height());
        let band_width = width.div_ceil(self.bands).max(1);
        let color = to.background();

        let mut x = 0;
        while x < width {
            let w = band_width.min(width - x);
            surface.fill_rect(x as i32, 0, w, height, color)?;
            surface.update_region(x as i32, 0, w, height)?;
            x += w;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::styling::{BLUE, WHITE};

    #[test]
    fn test_clear_fills_with_target_background() {
        let mut surface = RecordingSurface::new(100, 50);
        let screen = Screen::new("a").with_background(BLUE);
        ClearTransition.run(&mut surface, &screen).unwrap();
        assert_eq!(surface.calls, [Call::Fill(BLUE)]);
    }

    #[test]
    fn test_wipe_flushes_bands_left_to_right() {
        let mut surface = RecordingSurface::new(100, 50);
        let screen = Screen::new("a").with_background(WHITE);
        WipeTransition::new(4).run(&mut surface, &screen).unwrap();

        assert_eq!(
            surface.regions,
            [(0, 0, 25, 50), (25, 0, 25, 50), (50, 0, 25, 50), (75, 0, 25, 50)]
        );
        assert_eq!(surface.calls.len(), 4);
        assert!(surface.calls.iter().all(|c| matches!(
            c,
            Call::Rect { fill: Some(WHITE), h: 50, .. }
        )));
    }

    #[test]
    fn test_wipe_last_band_takes_remainder() {
        let mut surface = RecordingSurface::new(10, 5);
        let screen = Screen::new("a");
        WipeTransition::new(3).run(&mut surface, &screen).unwrap();
        assert_eq!(surface.regions, [(0, 0, 4, 5), (4, 0, 4, 5), (8, 0, 2, 5)]);
    }

    #[test]
    fn test_zero_bands_becomes_one() {
        assert_eq!(WipeTransition::new(0).bands(), 1);
    }
}
