//! Fonts and text placement
//!
//! Two interchangeable font kinds back every text-bearing widget:
//!
//! - [`FixedFont`]: the surface's built-in 8x8 cell text scaled by an integer
//!   size multiplier.
//! - Bitmap assets implementing [`FontAsset`]: variable-width glyphs packed
//!   most-significant-bit first with every row padded to a whole byte,
//!   rendered pixel by pixel through a [`Writer`].
//!
//! [`Font`] wraps either kind and provides measurement plus aligned drawing.

pub mod writer;

pub use writer::{TextCursor, Writer, measure_width};

use crate::surface::Surface;
use crate::ui::styling::Color;

pub const FONT_SMALL: u8 = 1;
pub const FONT_MEDIUM: u8 = 2;
pub const FONT_LARGE: u8 = 3;

/// Side of the unscaled fixed-font cell.
const FIXED_CELL_PX: u32 = 8;

/// One glyph of a bitmap font.
///
/// `bitmap` holds `height` rows of `width.div_ceil(8)` bytes each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub bitmap: &'a [u8],
    pub height: u32,
    pub width: u32,
}

impl Glyph<'_> {
    pub const fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Bit at (`row`, `col`), MSB first within each padded row. `None` when
    /// the bitmap is too short to hold that byte.
    pub fn bit(&self, row: u32, col: u32) -> Option<bool> {
        let index = row as usize * self.bytes_per_row() + (col / 8) as usize;
        self.bitmap
            .get(index)
            .map(|byte| (byte >> (7 - col % 8)) & 1 == 1)
    }

    /// Whether the pixel at (`row`, `col`) is set. Out-of-range bytes read as unset.
    pub fn is_set(&self, row: u32, col: u32) -> bool {
        self.bit(row, col).unwrap_or(false)
    }
}

/// A bitmap font source.
///
/// Missing glyphs are reported as `None`; callers fall back to a default
/// advance instead of failing.
pub trait FontAsset {
    /// Line height in pixels
    fn height(&self) -> u32;

    fn glyph(&self, ch: char) -> Option<Glyph<'_>>;
}

/// Glyph table entry for [`BitmapFont`].
#[derive(Debug, Clone, Copy)]
pub struct BitmapGlyph {
    pub ch: char,
    pub width: u32,
    pub bitmap: &'static [u8],
}

/// Font backed by a static glyph table, as emitted by font converters.
///
/// # Examples
///
/// ```ignore
/// static GLYPHS: [BitmapGlyph; 1] = [BitmapGlyph {
///     ch: '|',
///     width: 1,
///     bitmap: &[0x80, 0x80, 0x80],
/// }];
/// static BAR: BitmapFont = BitmapFont::new(3, &GLYPHS);
/// let label = Label::new(0, 0, "|||").with_font(Font::Bitmap(&BAR));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    height: u32,
    glyphs: &'static [BitmapGlyph],
}

impl BitmapFont {
    pub const fn new(height: u32, glyphs: &'static [BitmapGlyph]) -> Self {
        Self { height, glyphs }
    }
}

impl FontAsset for BitmapFont {
    fn height(&self) -> u32 {
        self.height
    }

    fn glyph(&self, ch: char) -> Option<Glyph<'_>> {
        self.glyphs.iter().find(|g| g.ch == ch).map(|g| Glyph {
            bitmap: g.bitmap,
            height: self.height,
            width: g.width,
        })
    }
}

/// Built-in fixed-cell font, `8 * size` pixels square per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFont {
    size: u8,
}

impl Default for FixedFont {
    fn default() -> Self {
        Self::new(FONT_MEDIUM)
    }
}

impl FixedFont {
    /// `size` below 1 is raised to 1.
    pub const fn new(size: u8) -> Self {
        Self {
            size: if size == 0 { 1 } else { size },
        }
    }

    pub const fn size(&self) -> u8 {
        self.size
    }

    pub const fn char_width(&self) -> u32 {
        FIXED_CELL_PX * self.size as u32
    }

    pub const fn char_height(&self) -> u32 {
        FIXED_CELL_PX * self.size as u32
    }
}

/// Horizontal placement inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Font held by a widget.
#[derive(Clone, Copy)]
pub enum Font {
    Fixed(FixedFont),
    Bitmap(&'static dyn FontAsset),
}

impl Default for Font {
    fn default() -> Self {
        Font::Fixed(FixedFont::default())
    }
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Font::Fixed(font) => f.debug_tuple("Fixed").field(font).finish(),
            Font::Bitmap(font) => f.debug_tuple("Bitmap").field(&font.height()).finish(),
        }
    }
}

impl Font {
    pub const fn fixed(size: u8) -> Self {
        Font::Fixed(FixedFont::new(size))
    }

    /// Pixel width of the widest line of `text`.
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            Font::Fixed(font) => {
                let widest = text.split('\n').map(|l| l.chars().count()).max();
                widest.unwrap_or(0) as u32 * font.char_width()
            }
            Font::Bitmap(font) => measure_width(*font, text),
        }
    }

    /// Pixel height of one line.
    pub fn line_height(&self) -> u32 {
        match self {
            Font::Fixed(font) => font.char_height(),
            Font::Bitmap(font) => font.height(),
        }
    }

    /// Pixel height of `text`, counting every line.
    pub fn text_height(&self, text: &str) -> u32 {
        let lines = text.split('\n').count() as u32;
        match self {
            Font::Fixed(font) => font.char_height() * lines,
            Font::Bitmap(font) => {
                font.height() * lines + writer::LINE_GAP * lines.saturating_sub(1)
            }
        }
    }

    pub fn draw_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        bg: Option<Color>,
    ) -> Result<(), S::Error> {
        match self {
            Font::Fixed(font) => surface.text(x, y, text, color, bg, font.size()),
            Font::Bitmap(font) => {
                let mut cursor = TextCursor::anchored(y, x);
                Writer::new(*font, color)
                    .with_background(bg)
                    .write_str(surface, &mut cursor, text)
            }
        }
    }

    /// Draw `text` aligned inside the box `(x, y, width, height)`.
    ///
    /// Text larger than the box starts before its edge rather than being clipped.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_aligned<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        text: &str,
        color: Color,
        h_align: HAlign,
        v_align: VAlign,
        bg: Option<Color>,
    ) -> Result<(), S::Error> {
        let (text_x, text_y) = self.aligned_origin(x, y, width, height, text, h_align, v_align);
        self.draw_text(surface, text_x, text_y, text, color, bg)
    }

    /// Top-left corner `draw_text_aligned` would use.
    #[allow(clippy::too_many_arguments)]
    pub fn aligned_origin(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        text: &str,
        h_align: HAlign,
        v_align: VAlign,
    ) -> (i32, i32) {
        let spare_w = width as i32 - self.text_width(text) as i32;
        let spare_h = height as i32 - self.text_height(text) as i32;

        let text_x = match h_align {
            HAlign::Left => x,
            HAlign::Center => x + spare_w.div_euclid(2),
            HAlign::Right => x + spare_w,
        };
        let text_y = match v_align {
            VAlign::Top => y,
            VAlign::Middle => y + spare_h.div_euclid(2),
            VAlign::Bottom => y + spare_h,
        };
        (text_x, text_y)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::testing::{Call, RecordingSurface};
    use crate::ui::styling::colors::WHITE;

    /// Two-row test font: 'A' is 10px wide, 'i' is 3px wide.
    pub(crate) static TEST_GLYPHS: [BitmapGlyph; 2] = [
        BitmapGlyph {
            ch: 'A',
            width: 10,
            bitmap: &[0b1000_0000, 0b0100_0000, 0b0000_0000, 0b1000_0000],
        },
        BitmapGlyph {
            ch: 'i',
            width: 3,
            bitmap: &[0b0100_0000, 0b1110_0000],
        },
    ];
    pub(crate) static TEST_FONT: BitmapFont = BitmapFont::new(2, &TEST_GLYPHS);

    #[test]
    fn test_fixed_metrics() {
        let font = FixedFont::new(FONT_LARGE);
        assert_eq!(font.char_width(), 24);
        assert_eq!(font.char_height(), 24);
        assert_eq!(FixedFont::new(0).size(), 1);

        let font = Font::fixed(FONT_MEDIUM);
        assert_eq!(font.text_width("Hello"), 80);
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("ab\nabcd"), 64);
        assert_eq!(font.text_height("ab\nabcd"), 32);
    }

    #[test]
    fn test_glyph_bits_are_msb_first_and_row_padded() {
        let glyph = TEST_FONT.glyph('A').unwrap();
        assert_eq!(glyph.bytes_per_row(), 2);
        assert!(glyph.is_set(0, 0));
        assert!(glyph.is_set(0, 9));
        assert!(!glyph.is_set(0, 8));
        assert!(glyph.is_set(1, 8));
        assert!(!glyph.is_set(5, 0));
        assert!(TEST_FONT.glyph('Z').is_none());
    }

    #[test]
    fn test_aligned_center_middle() {
        let mut surface = RecordingSurface::new(320, 240);
        let font = Font::fixed(FONT_MEDIUM);
        font.draw_text_aligned(
            &mut surface,
            10,
            20,
            100,
            40,
            "OK",
            WHITE,
            HAlign::Center,
            VAlign::Middle,
            None,
        )
        .unwrap();

        assert_eq!(
            surface.calls,
            [Call::Text {
                x: 10 + (100 - 32) / 2,
                y: 20 + (40 - 16) / 2,
                text: "OK".into(),
                color: WHITE,
                bg: None,
                size: 2,
            }]
        );
    }

    #[test]
    fn test_aligned_right_bottom_and_oversized() {
        let font = Font::fixed(FONT_SMALL);
        assert_eq!(
            font.aligned_origin(0, 0, 50, 20, "abc", HAlign::Right, VAlign::Bottom),
            (26, 12)
        );
        // Wider than the box: centered text starts left of it
        assert_eq!(
            font.aligned_origin(0, 0, 10, 8, "abc", HAlign::Center, VAlign::Top),
            (-7, 0)
        );
    }

    #[test]
    fn test_bitmap_font_metrics() {
        let font = Font::Bitmap(&TEST_FONT);
        assert_eq!(font.text_width("Ai"), 10 + 1 + 3);
        assert_eq!(font.line_height(), 2);
        assert_eq!(font.text_height("A\ni"), 2 + 2 + 2);
    }
}
