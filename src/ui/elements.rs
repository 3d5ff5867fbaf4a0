// src/ui/elements.rs
//! Concrete UI element enum.
//!
//! Screens, panels, layouts and button groups need to own heterogeneous
//! widgets *without* trait objects. [`Widget::draw`] is generic over the
//! surface, which makes the trait not object-safe; this enum is the
//! pragmatic alternative and dispatches to each built-in widget.

use crate::surface::Surface;
use crate::ui::components::{
    Button, Button3D, CheckBox, Compass, Dial, Label, LineChart, Panel, ProgressBar, RadioButton,
};
use crate::ui::core::{Widget, WidgetBase};
use crate::ui::layouts::HBoxLayout;

/// A concrete, layout-friendly UI element.
pub enum Element {
    Label(Label),
    Button(Button),
    Button3D(Button3D),
    Panel(Panel),
    ProgressBar(ProgressBar),
    CheckBox(CheckBox),
    RadioButton(RadioButton),
    Dial(Dial),
    Compass(Compass),
    LineChart(LineChart),
    HBox(HBoxLayout),
    /// Takes up room in a layout and draws nothing.
    Spacer(WidgetBase),
}

macro_rules! dispatch {
    ($self:expr, $w:ident => $body:expr, $spacer:ident => $spacer_body:expr) => {
        match $self {
            Element::Label($w) => $body,
            Element::Button($w) => $body,
            Element::Button3D($w) => $body,
            Element::Panel($w) => $body,
            Element::ProgressBar($w) => $body,
            Element::CheckBox($w) => $body,
            Element::RadioButton($w) => $body,
            Element::Dial($w) => $body,
            Element::Compass($w) => $body,
            Element::LineChart($w) => $body,
            Element::HBox($w) => $body,
            Element::Spacer($spacer) => $spacer_body,
        }
    };
}

impl Element {
    /// Convenience constructor: spacer with a preferred size.
    pub fn spacer(width: u32, height: u32) -> Self {
        Self::Spacer(WidgetBase::new(0, 0, width, height))
    }
}

impl Widget for Element {
    fn base(&self) -> &WidgetBase {
        dispatch!(self, w => w.base(), base => base)
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        dispatch!(self, w => w.base_mut(), base => base)
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        dispatch!(self, w => w.draw(surface), _spacer => Ok(()))
    }

    fn set_position(&mut self, x: i32, y: i32) {
        dispatch!(self, w => w.set_position(x, y), base => {
            base.x = x;
            base.y = y;
        })
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: u32, height: u32) {
        dispatch!(self, w => w.set_bounds(x, y, width, height), base => {
            *base = WidgetBase {
                x,
                y,
                width,
                height,
                ..*base
            };
        })
    }
}

macro_rules! element_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(widget: $ty) -> Self {
                    Element::$variant(widget)
                }
            }
        )*
    };
}

element_from!(
    Label(Label),
    Button(Button),
    Button3D(Button3D),
    Panel(Panel),
    ProgressBar(ProgressBar),
    CheckBox(CheckBox),
    RadioButton(RadioButton),
    Dial(Dial),
    Compass(Compass),
    LineChart(LineChart),
    HBox(HBoxLayout),
);
