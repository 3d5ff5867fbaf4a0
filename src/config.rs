use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ui::styling::Theme;

/// Default number of screen names kept for `go_back`.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Default pause between gauge animation steps.
pub const DEFAULT_STEP_DELAY_MS: u32 = 20;

/// Largest line thickness a surface accepts.
pub const MAX_LINE_THICKNESS: u32 = 20;

/// Toolkit-wide settings.
///
/// Everything has a working default, so a deserialized config only needs to
/// name the fields it changes.
///
/// # Examples
///
/// ```ignore
/// let config = UiConfig {
///     max_history: 4,
///     ..UiConfig::default()
/// };
/// config.validate()?;
/// let screens: ScreenManager = ScreenManager::with_config(&config);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub max_history: usize,
    pub animation_step_delay_ms: u32,
    /// Fixed-font size multiplier used when widgets are built from this config.
    pub font_size: u8,
    pub line_thickness_max: u32,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            animation_step_delay_ms: DEFAULT_STEP_DELAY_MS,
            font_size: 2,
            line_thickness_max: MAX_LINE_THICKNESS,
            theme: Theme::default(),
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::ZeroHistory);
        }
        if !(1..=4).contains(&self.font_size) {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        if !(1..=MAX_LINE_THICKNESS).contains(&self.line_thickness_max) {
            return Err(ConfigError::InvalidLineThickness(self.line_thickness_max));
        }
        Ok(())
    }

    /// Fixed font matching `font_size`.
    pub fn font(&self) -> crate::ui::font::Font {
        crate::ui::font::Font::fixed(self.font_size)
    }
}
