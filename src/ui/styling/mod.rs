//! Styling system for widgets
//!
//! - [`colors`] - packed RGB colors, shading arithmetic and palette constants
//! - [`theme`] - the palette bundle widgets and dialogs draw from
//!
//! # Examples
//!
//! ```ignore
//! use pixelkit::ui::styling::*;
//!
//! let face = Theme::default().primary;
//! let pressed = darken(face, 0.7);
//! let highlight = blend(face, WHITE, 0.5);
//! ```

pub mod colors;
pub mod theme;

pub use colors::{
    BLACK, BLUE, BTN_DANGER, BTN_DEFAULT, BTN_PRIMARY, BTN_SUCCESS, BTN_WARNING, CYAN, Color,
    GRAY, GRAY_DARK, GRAY_LIGHT, GRAY_LIGHTER, GREEN, MAGENTA, ORANGE, PURPLE, RED, WHITE,
    YELLOW, blend, darken, lighten,
};
pub use theme::{ButtonVariant, Theme};
