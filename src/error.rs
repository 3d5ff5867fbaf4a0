//! Error types surfaced to toolkit callers

use alloc::string::String;
use thiserror_no_std::Error;

/// Failures reported by [`ScreenManager`](crate::screens::ScreenManager).
///
/// `E` is the error type of the surface the manager draws on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScreenError<E: core::fmt::Debug> {
    #[error("No screen registered under name '{0}'")]
    UnknownScreen(String),
    #[error("Surface error: {0:?}")]
    Surface(E),
}

/// Rejected [`UiConfig`](crate::config::UiConfig) values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("History depth must be at least 1")]
    ZeroHistory,
    #[error("Font size {0} outside supported range 1..=4")]
    InvalidFontSize(u8),
    #[error("Line thickness ceiling {0} outside supported range 1..=20")]
    InvalidLineThickness(u32),
}
