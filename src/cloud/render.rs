// Rasterizer for laid-out words.
//
// Draws each instruction onto a transparent RGBA canvas using the 8x8 ASCII
// bitmap font, scaled up to the instruction's font size, and encodes the
// result as PNG. Glyph cells are `font_size` pixels square and sit on the
// baseline at `y`, so a word occupies `len * font_size` pixels across, the
// same width the layout budgets for it.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use super::layout::{DrawInstruction, FontStyle};
use crate::error::Result;

const GLYPH_CELLS: u32 = 8;

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at (x, y), or None when outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Draw every instruction in order. Later words paint over earlier ones.
    pub fn draw_all(&mut self, instructions: &[DrawInstruction]) {
        for instruction in instructions {
            self.draw_string(instruction);
        }
    }

    /// Draw one word. Pixels that fall off the canvas are clipped.
    pub fn draw_string(&mut self, instruction: &DrawInstruction) {
        let size = instruction.font_size.max(GLYPH_CELLS);
        let [r, g, b] = instruction.color.rgb();
        let ink = Rgba([r, g, b, 255]);

        let top = instruction.y.saturating_sub(size as i32);
        let mut pen_x = instruction.x;

        for ch in instruction.word.chars() {
            // Everything from here on lands right of the canvas
            if pen_x >= self.width() as i32 {
                break;
            }
            if let Some(glyph) = BASIC_FONTS.get(ch) {
                self.draw_glyph(&glyph, pen_x, top, size, instruction.style, ink);
            }
            pen_x = pen_x.saturating_add(size as i32);
        }
    }

    fn draw_glyph(
        &mut self,
        glyph: &[u8; 8],
        left: i32,
        top: i32,
        size: u32,
        style: FontStyle,
        ink: Rgba<u8>,
    ) {
        let cell = (size / GLYPH_CELLS) as i32;
        let bold_offset = (cell / 2).max(1);

        for (row, bits) in glyph.iter().enumerate() {
            // Italic shears each row right by its distance from the baseline
            let shear = match style {
                FontStyle::SerifItalic => (GLYPH_CELLS as i32 - 1 - row as i32) * cell / 3,
                _ => 0,
            };

            for col in 0..GLYPH_CELLS {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = left + col as i32 * cell + shear;
                let py = top + row as i32 * cell;
                self.fill_block(px, py, cell, ink);
                if style == FontStyle::SansBold {
                    self.fill_block(px + bold_offset, py, cell, ink);
                }
            }
        }
    }

    fn fill_block(&mut self, x: i32, y: i32, side: i32, ink: Rgba<u8>) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        for dy in 0..side {
            for dx in 0..side {
                let (px, py) = (x + dx, y + dy);
                if px >= 0 && py >= 0 && px < w && py < h {
                    self.image.put_pixel(px as u32, py as u32, ink);
                }
            }
        }
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}

/// Rasterize `instructions` onto a fresh canvas and return PNG bytes.
pub fn render_png(width: u32, height: u32, instructions: &[DrawInstruction]) -> Result<Vec<u8>> {
    let mut canvas = Canvas::new(width, height);
    canvas.draw_all(instructions);
    canvas.encode_png()
}
