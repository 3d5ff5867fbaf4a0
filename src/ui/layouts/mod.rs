// src/ui/layouts/mod.rs
//! Layout components for arranging UI elements

pub mod hbox;

pub use hbox::HBoxLayout;
