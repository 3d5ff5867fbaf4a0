// src/screens/screen.rs
//! A named set of elements drawn together

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::surface::Surface;
use crate::ui::core::Widget;
use crate::ui::elements::Element;
use crate::ui::styling::{Color, Theme};

/// Lifecycle hook run on a screen as it becomes (or stops being) current.
pub type ScreenHook = Box<dyn FnMut(&mut Screen)>;

/// One full-screen view.
///
/// # Examples
/// ```ignore
/// let mut home = Screen::new("home").with_background(WHITE);
/// home.add(Label::new(10, 10, "Weather"));
/// home.add(Button::new(10, 200, 100, 40, "Settings"));
/// manager.register(home);
/// ```
pub struct Screen {
    name: String,
    background: Color,
    elements: Vec<Element>,
    on_enter: Option<ScreenHook>,
    on_exit: Option<ScreenHook>,
}

impl Screen {
    /// Screen with the default theme's background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Theme::default().screen_background,
            elements: Vec::new(),
            on_enter: None,
            on_exit: None,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Take the background from `theme`.
    pub fn with_theme(self, theme: &Theme) -> Self {
        self.with_background(theme.screen_background)
    }

    /// Runs after the screen has been drawn and flushed.
    pub fn with_on_enter(mut self, hook: impl FnMut(&mut Screen) + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Runs before the next screen replaces this one.
    pub fn with_on_exit(mut self, hook: impl FnMut(&mut Screen) + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Append an element, returning its index.
    pub fn add(&mut self, element: impl Into<Element>) -> usize {
        self.elements.push(element.into());
        self.elements.len() - 1
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the topmost visible, enabled element containing the point.
    pub fn element_at(&self, x: i32, y: i32) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|e| e.is_visible() && e.is_enabled() && e.contains(x, y))
    }

    /// Draw every element in insertion order. The background is not
    /// painted here; that is the transition's job.
    pub fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        for element in &mut self.elements {
            element.draw(surface)?;
        }
        Ok(())
    }

    pub(crate) fn enter(&mut self) {
        if let Some(mut hook) = self.on_enter.take() {
            hook(self);
            self.on_enter = Some(hook);
        }
    }

    pub(crate) fn exit(&mut self) {
        if let Some(mut hook) = self.on_exit.take() {
            hook(self);
            self.on_exit = Some(hook);
        }
    }
}
