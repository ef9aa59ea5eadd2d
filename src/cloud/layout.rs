// Greedy row-packing layout for the word cloud.
//
// Words are laid out left to right in ranked order, starting at (100, 100)
// with a 60px font that shrinks by one pixel on every even index until it
// reaches 15px. A word that would run past `width - 250` wraps to a new row.
// There is no vertical limit: rows past the bottom edge are clipped by the
// renderer.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{Result, WordCloudError};
use crate::frequency::table::FrequencyTable;

pub const DEFAULT_CANVAS_WIDTH: u32 = 1800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1200;

/// Cursor position of the first word and of every wrapped row.
pub const ORIGIN_X: i32 = 100;
pub const ORIGIN_Y: i32 = 100;

pub const START_FONT_SIZE: u32 = 60;
pub const MIN_FONT_SIZE: u32 = 15;

/// Horizontal gap after each word, and vertical gap between rows.
const SPACING: i32 = 30;
/// Margin kept free on the right-hand side of the canvas.
const RIGHT_MARGIN: i32 = 250;

/// One of the three type faces a word can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    SansBold,
    SerifItalic,
    MonoPlain,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [
        FontStyle::SansBold,
        FontStyle::SerifItalic,
        FontStyle::MonoPlain,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The nine ink colors a word can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InkColor {
    Black,
    Blue,
    Cyan,
    DarkGray,
    Green,
    Magenta,
    Orange,
    Pink,
    Red,
}

impl InkColor {
    pub const ALL: [InkColor; 9] = [
        InkColor::Black,
        InkColor::Blue,
        InkColor::Cyan,
        InkColor::DarkGray,
        InkColor::Green,
        InkColor::Magenta,
        InkColor::Orange,
        InkColor::Pink,
        InkColor::Red,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            InkColor::Black => [0, 0, 0],
            InkColor::Blue => [0, 0, 255],
            InkColor::Cyan => [0, 255, 255],
            InkColor::DarkGray => [64, 64, 64],
            InkColor::Green => [0, 255, 0],
            InkColor::Magenta => [255, 0, 255],
            InkColor::Orange => [255, 200, 0],
            InkColor::Pink => [255, 175, 175],
            InkColor::Red => [255, 0, 0],
        }
    }
}

/// Where and how to draw a single word. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawInstruction {
    pub word: String,
    pub rank: usize,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub style: FontStyle,
    pub color: InkColor,
}

/// Canvas geometry the layout packs words into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudLayout {
    pub width: u32,
    pub height: u32,
}

impl Default for CloudLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CloudLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Lay out the top `count` words of a sorted table.
    pub fn render<R: Rng + ?Sized>(
        &self,
        table: &FrequencyTable,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<DrawInstruction>> {
        let ranked = table.ranked()?;
        if count > ranked.len() {
            return Err(WordCloudError::NotEnoughWords {
                requested: count,
                available: ranked.len(),
            });
        }

        let words: Vec<&str> = ranked[..count].iter().map(|(w, _)| w.as_str()).collect();
        Ok(self.place(&words, rng))
    }

    /// Place `words` (already in ranked order) on the canvas.
    pub fn place<R: Rng + ?Sized>(&self, words: &[&str], rng: &mut R) -> Vec<DrawInstruction> {
        // Cursor math runs in i64 and saturates: a word has no length limit
        let row_limit = i64::from(self.width) - i64::from(RIGHT_MARGIN);
        let mut x = i64::from(ORIGIN_X);
        let mut y = i64::from(ORIGIN_Y);
        let mut font_size = START_FONT_SIZE;
        let mut placed = Vec::with_capacity(words.len());

        for (rank, word) in words.iter().enumerate() {
            if font_size > MIN_FONT_SIZE && rank % 2 == 0 {
                font_size -= 1;
            }

            // Both palettes are non-empty constants
            let style = *FontStyle::ALL.choose(rng).unwrap_or(&FontStyle::SansBold);
            let color = *InkColor::ALL.choose(rng).unwrap_or(&InkColor::Black);

            let word_space = i64::try_from(word.len())
                .unwrap_or(i64::MAX)
                .saturating_mul(i64::from(font_size))
                .saturating_add(i64::from(SPACING));

            // A word that overflows an empty row stays put rather than
            // leaving a blank row behind it
            if x.saturating_add(word_space) > row_limit && x > i64::from(ORIGIN_X) {
                x = i64::from(ORIGIN_X);
                y = y.saturating_add(i64::from(font_size) + i64::from(SPACING));
            }

            placed.push(DrawInstruction {
                word: word.to_string(),
                rank,
                x: clamp_coord(x),
                y: clamp_coord(y),
                font_size,
                style,
                color,
            });
            x = x.saturating_add(word_space);
        }

        placed
    }
}

fn clamp_coord(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_first_word_at_origin() {
        let layout = CloudLayout::default();
        let mut rng = StdRng::seed_from_u64(7);
        let placed = layout.place(&["alpha", "beta", "gamma", "delta"], &mut rng);

        assert_eq!(placed.len(), 4);
        assert_eq!((placed[0].x, placed[0].y), (100, 100));
        assert_eq!(placed[0].font_size, 59);
        // 100 + 5 * 59 + 30
        assert_eq!(placed[1].x, 425);
        assert_eq!(placed[1].font_size, 59);
        assert_eq!(placed[2].font_size, 58);
    }

    #[test]
    fn test_wrap_resets_x_and_advances_y() {
        // Narrow canvas: row limit is 600 - 250 = 350
        let layout = CloudLayout::new(600, 400);
        let mut rng = StdRng::seed_from_u64(1);
        let placed = layout.place(&["abc", "abc", "abc"], &mut rng);

        // word 0: size 59, space 207 → x 100..307
        assert_eq!((placed[0].x, placed[0].y), (100, 100));
        // word 1: size 59, 307 + 207 > 350 → wrap, y = 100 + 59 + 30
        assert_eq!((placed[1].x, placed[1].y), (100, 189));
        // word 2: size 58, space 204, 307 + 204 > 350 → wrap again
        assert_eq!((placed[2].x, placed[2].y), (100, 277));
    }

    #[test]
    fn test_oversized_first_word_not_wrapped() {
        let layout = CloudLayout::new(600, 400);
        let mut rng = StdRng::seed_from_u64(3);
        let placed = layout.place(&["extraordinarily"], &mut rng);
        assert_eq!((placed[0].x, placed[0].y), (100, 100));
    }

    #[test]
    fn test_very_long_word_does_not_overflow_cursor() {
        let layout = CloudLayout::default();
        let mut rng = StdRng::seed_from_u64(5);
        let long = "a".repeat(40_000_000);
        let placed = layout.place(&[long.as_str(), "tail"], &mut rng);

        assert_eq!((placed[0].x, placed[0].y), (100, 100));
        // The cursor ran far past the row limit, so the next word wraps
        assert_eq!((placed[1].x, placed[1].y), (100, 189));
    }

    #[test]
    fn test_font_floor() {
        let layout = CloudLayout::default();
        let mut rng = StdRng::seed_from_u64(11);
        let words = vec!["w"; 120];
        let placed = layout.place(&words, &mut rng);
        assert_eq!(placed.last().map(|p| p.font_size), Some(MIN_FONT_SIZE));
        assert!(placed.iter().all(|p| p.font_size >= MIN_FONT_SIZE));
    }

    #[test]
    fn test_palette_indices_in_range() {
        let layout = CloudLayout::default();
        let mut rng = StdRng::seed_from_u64(99);
        let placed = layout.place(&["a", "b", "c", "d", "e", "f"], &mut rng);
        for p in placed {
            assert!(p.style.index() < 3);
            assert!(p.color.index() < 9);
        }
    }
}
