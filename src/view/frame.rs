//! Frame abstraction for drawing primitives
//!
//! A small, safe API over the pixel buffer so rendering code never indexes
//! the buffer directly.

use fontdue::Font;

use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing clipped drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds drawing is silently clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// A buffer smaller than width*height shrinks the usable height.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (ARGB, alpha in the high byte)
    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect_px(x, y, w, h, color);
        }

        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            for px in x0..x1 {
                let idx = row_start + px;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Blend a single pixel (bounds-checked)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
        }
    }

    /// Read a single pixel (0 when out of bounds)
    #[inline]
    #[allow(dead_code)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Dim the entire frame with translucent black
    pub fn dim(&mut self, alpha: u8) {
        let (w, h) = (self.width, self.height);
        self.blend_rect_px(0, 0, w, h, (alpha as u32) << 24);
    }

    /// Draw a rectangle with a 1px opaque border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        self.blend_rect_px(x, y, w, h, fill_color);

        let border = border_color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, border);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, border);
        self.fill_rect_px(x, y, 1, h, border);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, border);
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Glyphs are placed on a fixed monospace grid so screen columns always line
/// up with `char_width`.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
        }
    }

    /// Draw text with its top-left corner at (x, y), stopping at `max_x`
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let max_x = frame.width();
        self.draw_clipped(frame, x, y, text, color, max_x);
    }

    /// Draw text, skipping glyphs that would start at or past `max_x`
    pub fn draw_clipped(
        &mut self,
        frame: &mut Frame,
        x: usize,
        y: usize,
        text: &str,
        color: u32,
        max_x: usize,
    ) {
        let baseline = y as f32 + self.ascent;

        for (i, ch) in text.chars().enumerate() {
            let origin_x = x as f32 + i as f32 * self.char_width;
            if origin_x >= max_x as f32 {
                break;
            }
            if ch.is_whitespace() {
                continue;
            }

            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let coverage = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if coverage == 0 {
                        continue;
                    }
                    let px = origin_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 && (px as usize) < max_x {
                        frame.blend_pixel(
                            px as usize,
                            py as usize,
                            color,
                            coverage as f32 / 255.0,
                        );
                    }
                }
            }
        }
    }
}
