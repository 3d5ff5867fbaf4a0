//! Retained-state widget toolkit for small embedded pixel displays.
//!
//! Widgets are plain data plus a `draw` routine that composes primitive
//! calls on a [`Surface`]. Callers flush the touched rectangle themselves via
//! `invalidate`, so several widgets can be drawn before one display update.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod screens;
pub mod surface;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use config::UiConfig;
pub use error::{ConfigError, ScreenError};
pub use framebuffer::FrameBuffer;
pub use screens::{ClearTransition, Screen, ScreenManager, Transition, WipeTransition};
pub use surface::{Surface, with_line_thickness};
pub use ui::styling::Color;
