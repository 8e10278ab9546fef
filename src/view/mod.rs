//! View module - software rendering of the editor window
//!
//! Draws the text area, the cursor, the status bar and the search prompt into
//! a back buffer, then presents it through softbuffer.

pub mod frame;
pub mod geometry;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use notepad::model::{text_start_x, AppModel};
use notepad::EditorConfig;

use geometry::ModalLayout;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Monospace fonts tried in order when no `font_path` is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Load the configured font, or the first usable system monospace font
fn load_font(configured: Option<&Path>) -> Result<Font> {
    if let Some(path) = configured {
        return read_font(path);
    }

    for candidate in SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from) {
        if !candidate.is_file() {
            continue;
        }
        match read_font(&candidate) {
            Ok(font) => {
                tracing::debug!("Using font {}", candidate.display());
                return Ok(font);
            }
            Err(e) => tracing::warn!("{:#}", e),
        }
    }

    Err(anyhow!(
        "No monospace font found; set font_path in the config file"
    ))
}

fn read_font(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't preserve buffer contents between frames, so we
    /// draw into our own buffer and copy it over on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &EditorConfig,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font = load_font(config.font_path.as_deref())?;

        // Points to pixels, then to physical pixels
        let font_size = config.font_size * 4.0 / 3.0 * scale_factor as f32;

        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;

        let (metrics, _) = font.rasterize('M', font_size);
        let char_width = metrics.advance_width.max(1.0);

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil().max(1.0) as usize
    }

    /// Convert a click position to a document (line, column)
    pub fn pixel_to_cursor(&self, x: f64, y: f64, model: &AppModel) -> (usize, usize) {
        geometry::pixel_to_cursor(x, y, self.char_width, self.line_height() as f64, model)
    }

    pub fn is_in_status_bar(&self, y: f64) -> bool {
        geometry::is_in_status_bar(y, self.height, self.line_height())
    }

    /// Whether a point lies inside the search prompt box
    pub fn is_in_modal(&self, x: f64, y: f64) -> bool {
        ModalLayout::compute(self.width as usize, self.height as usize, self.line_height())
            .contains(x, y)
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        let line_height = self.line_height();
        let (width_usize, height_usize) = (width as usize, height as usize);

        let mut frame = Frame::new(&mut self.back_buffer, width_usize, height_usize);
        let mut painter = TextPainter::new(
            &self.font,
            &mut self.glyph_cache,
            self.font_size,
            self.line_metrics.ascent,
            self.char_width,
        );

        frame.clear(model.theme.editor.background.to_argb_u32());
        Self::render_text_area(&mut frame, &mut painter, model, line_height, self.char_width);
        Self::render_status_bar(&mut frame, &mut painter, model, line_height, self.char_width);
        Self::render_modal(&mut frame, &mut painter, model, line_height, self.char_width);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }

    fn render_text_area(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        line_height: usize,
        char_width: f32,
    ) {
        let fg = model.theme.editor.foreground.to_argb_u32();
        let text_x = text_start_x().round() as usize;
        let text_bottom = frame
            .height()
            .saturating_sub(geometry::status_bar_height(line_height));
        let viewport = &model.editor.viewport;
        let tab_width = model.config.tab_width;

        for (row, line_idx) in viewport
            .visible_range(model.document.line_count())
            .enumerate()
        {
            let y = row * line_height;
            if y + line_height > text_bottom {
                break;
            }
            let Some(line) = model.document.get_line(line_idx) else {
                break;
            };
            let expanded = geometry::expand_tabs_for_display(&line, tab_width);
            let visible: String = expanded.chars().skip(viewport.left_column).collect();
            painter.draw(frame, text_x, y, &visible, fg);
        }

        if !model.ui.cursor_visible || model.ui.has_modal() {
            return;
        }

        let cursor = &model.editor.cursor;
        if cursor.line < viewport.top_line {
            return;
        }
        let row = cursor.line - viewport.top_line;
        let y = row * line_height;
        if y + line_height > text_bottom {
            return;
        }
        let line = model.document.get_line(cursor.line).unwrap_or_default();
        let visual_col = geometry::char_col_to_visual_col(&line, cursor.column, tab_width);
        let Some(screen_col) = visual_col.checked_sub(viewport.left_column) else {
            return;
        };
        let x = text_x + (screen_col as f32 * char_width).round() as usize;
        frame.fill_rect_px(
            x,
            y,
            2,
            line_height,
            model.theme.editor.cursor_color.to_argb_u32(),
        );
    }

    fn render_status_bar(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        line_height: usize,
        char_width: f32,
    ) {
        let window_width = frame.width();
        let status_bar_bg = model.theme.status_bar.background.to_argb_u32();
        let status_bar_fg = model.theme.status_bar.foreground.to_argb_u32();
        let status_bar_h = geometry::status_bar_height(line_height);
        let status_y = frame.height().saturating_sub(status_bar_h);

        frame.fill_rect_px(0, status_y, window_width, status_bar_h, status_bar_bg);

        let available_chars = (window_width as f32 / char_width).floor() as usize;
        let layout = model.ui.status_bar.layout(available_chars);

        for seg in layout.left.iter().chain(&layout.right) {
            let x_px = (seg.x as f32 * char_width).round() as usize;
            painter.draw(frame, x_px, status_y, &seg.text, status_bar_fg);
        }

        let separator_color = model
            .theme
            .status_bar
            .foreground
            .with_alpha(100)
            .to_argb_u32();
        for &sep_char_x in &layout.separator_positions {
            let x_px = (sep_char_x as f32 * char_width).round() as usize;
            frame.blend_rect_px(x_px, status_y, 1, status_bar_h, separator_color);
        }
    }

    /// Search prompt: dimmed background, centered box, title and query field
    fn render_modal(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        line_height: usize,
        char_width: f32,
    ) {
        let Some(modal) = &model.ui.active_modal else {
            return;
        };
        let overlay = &model.theme.overlay;

        frame.dim(100);

        let layout = ModalLayout::compute(frame.width(), frame.height(), line_height);
        frame.draw_bordered_rect(
            layout.x,
            layout.y,
            layout.width,
            layout.height,
            overlay.background.to_argb_u32(),
            overlay.border.to_argb_u32(),
        );

        let fg = overlay.foreground.to_argb_u32();
        let inner_x = layout.x + geometry::MODAL_PAD;
        let inner_width = layout.width.saturating_sub(2 * geometry::MODAL_PAD);
        painter.draw(frame, inner_x, layout.title_y, modal.title(), fg);

        frame.fill_rect_px(
            inner_x,
            layout.input_y,
            inner_width,
            layout.input_height,
            overlay.input_background.to_argb_u32(),
        );

        // Keep the end of a long query in view
        let field_x = inner_x + 4;
        let field_chars = ((inner_width.saturating_sub(8)) as f32 / char_width) as usize;
        let input = modal.input();
        let shown_len = input.chars().count();
        let skip = (shown_len + 1).saturating_sub(field_chars);
        let shown: String = input.chars().skip(skip).collect();
        let text_y = layout.input_y + 4;
        painter.draw_clipped(frame, field_x, text_y, &shown, fg, inner_x + inner_width);

        if model.ui.cursor_visible {
            let caret_x =
                field_x + ((shown_len - skip) as f32 * char_width).round() as usize;
            frame.fill_rect_px(
                caret_x,
                text_y,
                2,
                line_height,
                model.theme.editor.cursor_color.to_argb_u32(),
            );
        }
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}
