// src/ui/dialog.rs
//! Modal message dialogs
//!
//! A dialog is drawn centered on the surface over whatever is already there.
//! Dropping it does not restore the screen underneath; the caller redraws
//! its screen once the user has answered. Which button was touched is
//! resolved by the caller through [`Dialog::button_at`].

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use crate::config::UiConfig;
use crate::surface::Surface;
use crate::ui::components::Button3D;
use crate::ui::core::Widget;
use crate::ui::font::{FONT_SMALL, Font, HAlign, VAlign};
use crate::ui::styling::{ButtonVariant, Theme};

// ============================================================================
// Geometry
// ============================================================================

pub const DEFAULT_WIDTH: u32 = 280;
pub const DEFAULT_HEIGHT: u32 = 160;
const YES_NO_WIDTH: u32 = 260;
const YES_NO_CANCEL_WIDTH: u32 = 300;

const TITLE_BAR_HEIGHT: u32 = 30;
const SHADOW_OFFSET: u32 = 4;
const TITLE_DOT_RADIUS: u32 = 3;
const TITLE_DOT_X: i32 = 15;
const TITLE_TEXT_X: i32 = 25;
const MESSAGE_MARGIN: i32 = 10;

const BUTTON_WIDTH: u32 = 80;
const BUTTON_WIDTH_NARROW: u32 = 70;
const BUTTON_HEIGHT: u32 = 35;
const BUTTON_SPACING: u32 = 10;
const BUTTON_BOTTOM_MARGIN: u32 = 15;

// ============================================================================
// Kinds and results
// ============================================================================

/// Answer a dialog button stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Cancel,
    Yes,
    No,
}

/// Button set of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

type ButtonSpec = (&'static str, DialogResult, ButtonVariant);

impl DialogKind {
    fn width(self) -> u32 {
        match self {
            DialogKind::Ok | DialogKind::OkCancel => DEFAULT_WIDTH,
            DialogKind::YesNo => YES_NO_WIDTH,
            DialogKind::YesNoCancel => YES_NO_CANCEL_WIDTH,
        }
    }

    fn button_width(self) -> u32 {
        match self {
            DialogKind::YesNoCancel => BUTTON_WIDTH_NARROW,
            _ => BUTTON_WIDTH,
        }
    }

    fn buttons(self) -> &'static [ButtonSpec] {
        match self {
            DialogKind::Ok => &[("OK", DialogResult::Ok, ButtonVariant::Primary)],
            DialogKind::OkCancel => &[
                ("OK", DialogResult::Ok, ButtonVariant::Success),
                ("Cancel", DialogResult::Cancel, ButtonVariant::Danger),
            ],
            DialogKind::YesNo => &[
                ("Yes", DialogResult::Yes, ButtonVariant::Success),
                ("No", DialogResult::No, ButtonVariant::Warning),
            ],
            DialogKind::YesNoCancel => &[
                ("Yes", DialogResult::Yes, ButtonVariant::Success),
                ("No", DialogResult::No, ButtonVariant::Warning),
                ("Cancel", DialogResult::Cancel, ButtonVariant::Danger),
            ],
        }
    }

    /// Lay out a dialog of this kind centered on `surface` without drawing it.
    pub fn build<S: Surface + ?Sized>(
        self,
        surface: &S,
        title: &str,
        message: &str,
        theme: &Theme,
    ) -> Dialog {
        self.build_with_font(surface, title, message, theme, Font::fixed(FONT_SMALL))
    }

    /// [`build`](Self::build) with `font` for the title, message and buttons.
    pub fn build_with_font<S: Surface + ?Sized>(
        self,
        surface: &S,
        title: &str,
        message: &str,
        theme: &Theme,
        font: Font,
    ) -> Dialog {
        let mut dialog = Dialog::new(surface, title, message, self.width(), DEFAULT_HEIGHT)
            .with_theme(*theme)
            .with_font(font);

        let specs = self.buttons();
        let count = specs.len() as u32;
        let width = self.button_width();
        let total = width * count + BUTTON_SPACING * (count - 1);
        let start_x = dialog.x + (dialog.width as i32 - total as i32).div_euclid(2);
        let y = dialog.y + (dialog.height - BUTTON_HEIGHT - BUTTON_BOTTOM_MARGIN) as i32;

        for (i, &(text, result, variant)) in specs.iter().enumerate() {
            let x = start_x + ((width + BUTTON_SPACING) * i as u32) as i32;
            let button = Button3D::new(x, y, width, BUTTON_HEIGHT, text)
                .with_color(variant.face(theme))
                .with_text_color(theme.text_on_face)
                .with_font(dialog.font);
            dialog.buttons.push(DialogButton { result, button });
        }
        dialog
    }
}

// ============================================================================
// Dialog
// ============================================================================

/// A dialog button and the answer it represents.
pub struct DialogButton {
    pub result: DialogResult,
    pub button: Button3D,
}

pub struct Dialog {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
    theme: Theme,
    font: Font,
}

impl Dialog {
    /// Empty dialog of the given size centered on `surface`.
    pub fn new<S: Surface + ?Sized>(
        surface: &S,
        title: &str,
        message: &str,
        width: u32,
        height: u32,
    ) -> Self {
        let x = (surface.width() as i32 - width as i32).div_euclid(2);
        let y = (surface.height() as i32 - height as i32).div_euclid(2);
        Self {
            x,
            y,
            width,
            height,
            title: title.into(),
            message: message.into(),
            buttons: Vec::new(),
            theme: Theme::default(),
            font: Font::fixed(FONT_SMALL),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Drop shadow, body, title bar and the title and message text.
    pub fn draw_frame<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let Theme {
            gray_dark,
            gray_light,
            dialog_title_bar,
            text_on_face,
            text,
            ..
        } = self.theme;
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let shadow = SHADOW_OFFSET as i32;

        surface.rect(x + shadow, y + shadow, w, h, gray_dark, Some(gray_dark))?;
        surface.rect(x, y, w, h, gray_dark, Some(gray_light))?;
        surface.rect(x, y, w, TITLE_BAR_HEIGHT, gray_dark, Some(dialog_title_bar))?;

        let bar_mid = y + (TITLE_BAR_HEIGHT / 2) as i32;
        surface.circle(
            x + TITLE_DOT_X,
            bar_mid,
            TITLE_DOT_RADIUS,
            text_on_face,
            Some(text_on_face),
        )?;

        self.font.draw_text_aligned(
            surface,
            x + TITLE_TEXT_X,
            y,
            w.saturating_sub(TITLE_TEXT_X as u32),
            TITLE_BAR_HEIGHT,
            &self.title,
            text_on_face,
            HAlign::Left,
            VAlign::Middle,
            None,
        )?;
        self.font.draw_text(
            surface,
            x + MESSAGE_MARGIN,
            y + TITLE_BAR_HEIGHT as i32 + MESSAGE_MARGIN,
            &self.message,
            text,
            None,
        )
    }

    pub fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.draw_frame(surface)?;
        for entry in &mut self.buttons {
            entry.button.draw(surface)?;
        }
        Ok(())
    }

    /// Flush the dialog including its shadow.
    pub fn invalidate<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.update_region(
            self.x,
            self.y,
            self.width + SHADOW_OFFSET,
            self.height + SHADOW_OFFSET,
        )
    }

    /// Draw and flush.
    pub fn show<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.draw(surface)?;
        self.invalidate(surface)
    }

    /// Answer of the first visible, enabled button under the point.
    pub fn button_at(&self, x: i32, y: i32) -> Option<DialogResult> {
        self.buttons
            .iter()
            .find(|b| b.button.contains(x, y) && b.button.is_visible() && b.button.is_enabled())
            .map(|b| b.result)
    }

    pub fn button_mut(&mut self, result: DialogResult) -> Option<&mut Button3D> {
        self.buttons
            .iter_mut()
            .find(|b| b.result == result)
            .map(|b| &mut b.button)
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Build, draw and flush a dialog of `kind` with the default theme.
pub fn show_dialog<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
    kind: DialogKind,
) -> Result<Dialog, S::Error> {
    show_dialog_themed(surface, title, message, kind, &Theme::default())
}

/// Build, draw and flush a dialog of `kind` colored from `theme`.
pub fn show_dialog_themed<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
    kind: DialogKind,
    theme: &Theme,
) -> Result<Dialog, S::Error> {
    let dialog = kind.build(surface, title, message, theme);
    present(surface, dialog, kind)
}

/// Dialog using the theme and font size of `config`.
pub fn show_dialog_with_config<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
    kind: DialogKind,
    config: &UiConfig,
) -> Result<Dialog, S::Error> {
    let dialog = kind.build_with_font(surface, title, message, &config.theme, config.font());
    present(surface, dialog, kind)
}

fn present<S: Surface>(
    surface: &mut S,
    mut dialog: Dialog,
    kind: DialogKind,
) -> Result<Dialog, S::Error> {
    debug!(
        "dialog {:?} '{}' at ({}, {}) {}x{}",
        kind, dialog.title, dialog.x, dialog.y, dialog.width, dialog.height
    );
    dialog.show(surface)?;
    Ok(dialog)
}

pub fn show_ok_dialog<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
) -> Result<Dialog, S::Error> {
    show_dialog(surface, title, message, DialogKind::Ok)
}

pub fn show_ok_cancel_dialog<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
) -> Result<Dialog, S::Error> {
    show_dialog(surface, title, message, DialogKind::OkCancel)
}

pub fn show_yes_no_dialog<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
) -> Result<Dialog, S::Error> {
    show_dialog(surface, title, message, DialogKind::YesNo)
}

pub fn show_yes_no_cancel_dialog<S: Surface>(
    surface: &mut S,
    title: &str,
    message: &str,
) -> Result<Dialog, S::Error> {
    show_dialog(surface, title, message, DialogKind::YesNoCancel)
}
