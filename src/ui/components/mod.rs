// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod button3d;
pub mod button_group;
pub mod chart;
pub mod checkbox;
pub mod gauge;
pub mod label;
pub mod panel;
pub mod progress;
pub mod radio;

pub use button::Button;
pub use button_group::ButtonGroup;
pub use button3d::{BevelShades, Button3D};
pub use chart::{AxisScale, LineChart, Redraw};
pub use checkbox::CheckBox;
pub use gauge::{Compass, Dial};
pub use label::Label;
pub use panel::Panel;
pub use progress::ProgressBar;
pub use radio::{RadioButton, RadioGroup};
