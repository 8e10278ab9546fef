//! Geometry helpers shared by rendering and hit-testing
//!
//! Pure functions: no font, no surface, easy to test.

use std::borrow::Cow;

use notepad::model::{text_start_x, AppModel};

/// Status bar height in pixels
#[inline]
pub fn status_bar_height(line_height: usize) -> usize {
    line_height
}

/// Whether a y-coordinate falls inside the status bar
pub fn is_in_status_bar(y: f64, window_height: u32, line_height: usize) -> bool {
    let status_bar_top = window_height as f64 - status_bar_height(line_height) as f64;
    y >= status_bar_top
}

// ============================================================================
// Tab Expansion
// ============================================================================

/// Expand tab characters to spaces for display.
///
/// Returns `Cow::Borrowed` if no tabs are present (zero allocation).
pub fn expand_tabs_for_display(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }

    let tab_width = tab_width.max(1);
    let mut result = String::with_capacity(text.len() * 2);
    let mut visual_col = 0;

    for ch in text.chars() {
        if ch == '\t' {
            let spaces = tab_width - (visual_col % tab_width);
            result.extend(std::iter::repeat(' ').take(spaces));
            visual_col += spaces;
        } else {
            result.push(ch);
            visual_col += 1;
        }
    }

    Cow::Owned(result)
}

/// Convert a character column index to a visual (screen) column position.
pub fn char_col_to_visual_col(text: &str, char_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut visual_col = 0;
    for ch in text.chars().take(char_col) {
        if ch == '\t' {
            visual_col += tab_width - (visual_col % tab_width);
        } else {
            visual_col += 1;
        }
    }
    visual_col
}

/// Convert a visual (screen) column position to a character column index.
///
/// A position inside a tab's expansion maps to the tab itself. Past the end of
/// the line maps to the line length.
pub fn visual_col_to_char_col(text: &str, visual_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut current_visual = 0;
    let mut char_col = 0;

    for ch in text.chars() {
        let width = if ch == '\t' {
            tab_width - (current_visual % tab_width)
        } else {
            1
        };
        if current_visual + width > visual_col {
            return char_col;
        }
        current_visual += width;
        char_col += 1;
    }

    char_col
}

// ============================================================================
// Hit-testing
// ============================================================================

/// Convert a click position in the text area to a (line, column) cursor position
pub fn pixel_to_cursor(
    x: f64,
    y: f64,
    char_width: f32,
    line_height: f64,
    model: &AppModel,
) -> (usize, usize) {
    let text_x = text_start_x().round() as f64;
    let viewport = &model.editor.viewport;

    let visual_line = (y.max(0.0) / line_height.max(1.0)).floor() as usize;
    let line = (viewport.top_line + visual_line).min(model.document.line_count().saturating_sub(1));

    let visual_col = ((x - text_x).max(0.0) / char_width.max(1.0) as f64).round() as usize
        + viewport.left_column;
    let text = model.document.get_line(line).unwrap_or_default();
    let column = visual_col_to_char_col(&text, visual_col, model.config.tab_width);

    (line, column)
}

// ============================================================================
// Search Prompt Geometry
// ============================================================================

/// Outer padding inside the prompt border
pub const MODAL_PAD: usize = 12;

/// Position of the search prompt and its parts, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub title_y: usize,
    pub input_y: usize,
    pub input_height: usize,
}

impl ModalLayout {
    /// Centered horizontally, near the top of the window
    pub fn compute(window_width: usize, window_height: usize, line_height: usize) -> Self {
        let width = (window_width * 4 / 5).min(420).max(1);
        let input_height = line_height + 8;
        let height = MODAL_PAD + line_height + MODAL_PAD / 2 + input_height + MODAL_PAD;
        let x = window_width.saturating_sub(width) / 2;
        let y = (window_height / 4).min(100);

        Self {
            x,
            y,
            width,
            height,
            title_y: y + MODAL_PAD,
            input_y: y + MODAL_PAD + line_height + MODAL_PAD / 2,
            input_height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && x < (self.x + self.width) as f64
            && y >= self.y as f64
            && y < (self.y + self.height) as f64
    }
}
