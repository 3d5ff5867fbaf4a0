//! Toolkit palette
//!
//! Groups the face, gray-ramp and text colors widgets fall back to when the
//! caller does not pick explicit colors.

use serde::{Deserialize, Serialize};

use super::colors::{self, Color};

// ============================================================================
// Theme
// ============================================================================

/// Palette shared by widgets, dialogs and screens.
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::default();
/// let ok = Button3D::new(10, 10, 80, 35, "OK")
///     .with_color(ButtonVariant::Success.face(&theme));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    pub gray_dark: Color,
    pub gray: Color,
    pub gray_light: Color,

    /// Text drawn on colored button faces
    pub text_on_face: Color,
    /// Text drawn on light panels and dialog bodies
    pub text: Color,

    pub dialog_title_bar: Color,
    /// Fill a screen starts from before its elements are drawn
    pub screen_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: colors::BTN_PRIMARY,
            success: colors::BTN_SUCCESS,
            warning: colors::BTN_WARNING,
            danger: colors::BTN_DANGER,
            gray_dark: colors::GRAY_DARK,
            gray: colors::GRAY,
            gray_light: colors::GRAY_LIGHT,
            text_on_face: colors::WHITE,
            text: colors::BLACK,
            dialog_title_bar: colors::BTN_PRIMARY,
            screen_background: colors::BLACK,
        }
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Semantic button role, resolved to a face color through a [`Theme`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    /// Neutral gray face
    Neutral,
}

impl ButtonVariant {
    pub fn face(self, theme: &Theme) -> Color {
        match self {
            ButtonVariant::Primary => theme.primary,
            ButtonVariant::Success => theme.success,
            ButtonVariant::Warning => theme.warning,
            ButtonVariant::Danger => theme.danger,
            ButtonVariant::Neutral => theme.gray,
        }
    }
}
