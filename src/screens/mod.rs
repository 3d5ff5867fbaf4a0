// src/screens/mod.rs
//! Full-screen views and navigation between them
//!
//! A [`Screen`] owns the elements of one view. The [`ScreenManager`] keeps
//! the registry, runs lifecycle hooks and remembers where the user came from
//! so `go_back` can retrace the path.

pub mod manager;
pub mod screen;
pub mod transition;

pub use manager::ScreenManager;
pub use screen::{Screen, ScreenHook};
pub use transition::{ClearTransition, Transition, WipeTransition};
