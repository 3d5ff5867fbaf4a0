// src/ui/mod.rs
//! Widgets, layout, text and styling
//!
//! - [`core`]: the [`Widget`] trait and shared geometry
//! - [`components`]: concrete widgets, from labels to gauges and charts
//! - [`elements`]: the [`Element`] enum for heterogeneous widget lists
//! - [`layouts`]: automatic positioning of child elements
//! - [`dialog`]: modal message boxes built from 3D buttons
//! - [`font`]: font metrics and glyph blitting
//! - [`styling`]: colors, color arithmetic and the theme

pub mod components;
pub mod core;
pub mod dialog;
pub mod elements;
pub mod font;
pub mod layouts;
pub mod shapes;
pub mod styling;

pub use components::{
    AxisScale, Button, Button3D, ButtonGroup, CheckBox, Compass, Dial, Label, LineChart, Panel,
    ProgressBar, RadioButton, RadioGroup, Redraw,
};
pub use self::core::{ChangeCallback, DirtyRegion, Widget, WidgetBase};
pub use dialog::{
    Dialog, DialogButton, DialogKind, DialogResult, show_dialog, show_dialog_themed,
    show_dialog_with_config, show_ok_cancel_dialog, show_ok_dialog, show_yes_no_cancel_dialog,
    show_yes_no_dialog,
};
pub use elements::Element;
pub use font::{BitmapFont, FixedFont, Font, FontAsset, HAlign, TextCursor, VAlign, Writer};
pub use layouts::HBoxLayout;
pub use shapes::RoundedRect;
pub use styling::{ButtonVariant, Color, Theme};
