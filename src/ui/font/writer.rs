//! Pixel-by-pixel bitmap text rendering
//!
//! The cursor is explicit state owned by the caller, so two writers never
//! share a position by accident.

use log::trace;

use super::FontAsset;
use crate::surface::Surface;
use crate::ui::styling::Color;

/// Advance used for characters the font has no glyph for.
pub const DEFAULT_GLYPH_WIDTH: u32 = 8;

/// Blank columns after each glyph.
pub const GLYPH_SPACING: u32 = 1;

/// Blank rows between lines.
pub const LINE_GAP: u32 = 2;

/// Pixel position of the next glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCursor {
    pub row: i32,
    pub col: i32,
    left_margin: i32,
}

impl TextCursor {
    /// Cursor at (`row`, `col`) whose newlines return to column 0.
    pub const fn new(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            left_margin: 0,
        }
    }

    /// Cursor whose newlines return to its starting column.
    pub const fn anchored(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            left_margin: col,
        }
    }

    pub fn set_position(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
    }

    pub const fn left_margin(&self) -> i32 {
        self.left_margin
    }

    fn advance(&mut self, glyph_width: u32) {
        self.col += (glyph_width + GLYPH_SPACING) as i32;
    }

    fn newline(&mut self, line_height: u32) {
        self.col = self.left_margin;
        self.row += (line_height + LINE_GAP) as i32;
    }
}

/// Renders strings from a [`FontAsset`] at a [`TextCursor`].
///
/// Set glyph bits are always plotted, even when the color is black. Unset
/// bits are plotted only when a background is configured; otherwise the
/// existing pixels show through.
///
/// # Examples
///
/// ```ignore
/// let mut cursor = TextCursor::new(10, 4);
/// Writer::new(&MY_FONT, WHITE)
///     .with_background(Some(BLACK))
///     .write_str(&mut fb, &mut cursor, "Line 1\nLine 2")?;
/// ```
pub struct Writer<'f> {
    font: &'f dyn FontAsset,
    color: Color,
    bg: Option<Color>,
    invert: bool,
}

impl<'f> Writer<'f> {
    pub fn new(font: &'f dyn FontAsset, color: Color) -> Self {
        Self {
            font,
            color,
            bg: None,
            invert: false,
        }
    }

    pub fn with_background(mut self, bg: Option<Color>) -> Self {
        self.bg = bg;
        self
    }

    /// Swap set and unset glyph bits.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn write_str<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cursor: &mut TextCursor,
        text: &str,
    ) -> Result<(), S::Error> {
        for ch in text.chars() {
            self.write_char(surface, cursor, ch)?;
        }
        Ok(())
    }

    pub fn write_char<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cursor: &mut TextCursor,
        ch: char,
    ) -> Result<(), S::Error> {
        if ch == '\n' {
            cursor.newline(self.font.height());
            return Ok(());
        }

        let Some(glyph) = self.font.glyph(ch) else {
            trace!("No glyph for {:?}, advancing {}px", ch, DEFAULT_GLYPH_WIDTH);
            cursor.advance(DEFAULT_GLYPH_WIDTH);
            return Ok(());
        };

        for row in 0..glyph.height {
            for col in 0..glyph.width {
                // Bytes missing from a short bitmap leave the pixel alone
                let Some(bit) = glyph.bit(row, col) else {
                    continue;
                };
                let on = bit != self.invert;

                let x = cursor.col + col as i32;
                let y = cursor.row + row as i32;
                if on {
                    surface.pixel(x, y, self.color)?;
                } else if let Some(bg) = self.bg {
                    surface.pixel(x, y, bg)?;
                }
            }
        }

        cursor.advance(glyph.width);
        Ok(())
    }

    pub fn measure_width(&self, text: &str) -> u32 {
        measure_width(self.font, text)
    }
}

/// Pixel width of `text` laid out by a [`Writer`].
///
/// Each glyph contributes its width plus one spacing column, minus the
/// trailing column. Multi-line text measures its widest line; `""` is 0.
pub fn measure_width(font: &dyn FontAsset, text: &str) -> u32 {
    text.split('\n')
        .map(|line| {
            let advance: u32 = line
                .chars()
                .map(|ch| {
                    font.glyph(ch).map_or(DEFAULT_GLYPH_WIDTH, |g| g.width) + GLYPH_SPACING
                })
                .sum();
            advance.saturating_sub(GLYPH_SPACING)
        })
        .max()
        .unwrap_or(0)
}
