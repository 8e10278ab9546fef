//! Editor state - cursor and viewport of the scrollable text area

use super::document::Document;

/// Cursor position in the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
    /// Desired column for vertical movement (preserves position when moving through short lines)
    pub desired_column: Option<usize>,
}

impl Cursor {
    /// Create a cursor at a specific position
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }
}

/// Viewport - which part of the document is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    /// Range of document lines currently on screen
    pub fn visible_range(&self, total_lines: usize) -> std::ops::Range<usize> {
        let start = self.top_line.min(total_lines);
        let end = (self.top_line + self.visible_lines).min(total_lines);
        start..end
    }
}

/// Horizontal margin (in columns) kept between the cursor and the viewport edge
const HORIZONTAL_MARGIN: usize = 4;

/// Editor state - the single cursor and the viewport over the document
#[derive(Debug, Clone)]
pub struct EditorState {
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Lines of context kept above/below the cursor when scrolling
    pub scroll_padding: usize,
}

impl EditorState {
    /// Create an editor with the cursor at the origin
    pub fn with_viewport(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            cursor: Cursor::default(),
            viewport: Viewport::new(visible_lines, visible_columns),
            scroll_padding: 1,
        }
    }

    /// Update viewport dimensions
    pub fn resize_viewport(&mut self, visible_lines: usize, visible_columns: usize) {
        self.viewport.visible_lines = visible_lines;
        self.viewport.visible_columns = visible_columns;
    }

    /// Move cursor and viewport back to the start of the document
    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
        self.viewport.top_line = 0;
        self.viewport.left_column = 0;
    }

    /// Get buffer offset of the cursor
    pub fn cursor_offset(&self, document: &Document) -> usize {
        document.cursor_to_offset(self.cursor.line, self.cursor.column)
    }

    /// Place the cursor at a buffer offset
    pub fn set_cursor_from_offset(&mut self, document: &Document, offset: usize) {
        let (line, column) = document.offset_to_cursor(offset);
        self.cursor = Cursor::at(line, column);
    }

    /// Clamp the cursor into the document (after external buffer changes)
    pub fn clamp_cursor(&mut self, document: &Document) {
        let last_line = document.line_count().saturating_sub(1);
        self.cursor.line = self.cursor.line.min(last_line);
        self.cursor.column = self.cursor.column.min(document.line_length(self.cursor.line));
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn move_left(&mut self, document: &Document) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = document.line_length(self.cursor.line);
        }
        self.cursor.desired_column = None;
    }

    pub fn move_right(&mut self, document: &Document) {
        let line_len = document.line_length(self.cursor.line);
        if self.cursor.column < line_len {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < document.line_count() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.cursor.desired_column = None;
    }

    /// Move vertically by `delta` lines, keeping the desired column
    pub fn move_vertical(&mut self, document: &Document, delta: isize) {
        let last_line = document.line_count().saturating_sub(1);
        let target = if delta < 0 {
            self.cursor.line.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor.line + delta as usize).min(last_line)
        };

        let desired = self.cursor.desired_column.unwrap_or(self.cursor.column);
        self.cursor.line = target;
        self.cursor.column = desired.min(document.line_length(target));
        self.cursor.desired_column = Some(desired);
    }

    pub fn move_line_start(&mut self) {
        self.cursor.column = 0;
        self.cursor.desired_column = None;
    }

    pub fn move_line_end(&mut self, document: &Document) {
        self.cursor.column = document.line_length(self.cursor.line);
        self.cursor.desired_column = None;
    }

    pub fn move_document_start(&mut self) {
        self.cursor = Cursor::default();
    }

    pub fn move_document_end(&mut self, document: &Document) {
        let last_line = document.line_count().saturating_sub(1);
        self.cursor = Cursor::at(last_line, document.line_length(last_line));
    }

    /// Number of lines a page movement covers
    pub fn page_size(&self) -> usize {
        self.viewport.visible_lines.saturating_sub(1).max(1)
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Scroll the viewport by `delta` lines without moving the cursor
    pub fn scroll_lines(&mut self, document: &Document, delta: i32) {
        let max_top = document
            .line_count()
            .saturating_sub(self.viewport.visible_lines);
        let top = self.viewport.top_line as i64 + delta as i64;
        self.viewport.top_line = top.clamp(0, max_top as i64) as usize;
    }

    /// Ensure the cursor is visible within the viewport with padding (minimal scroll)
    pub fn ensure_cursor_visible(&mut self, document: &Document) {
        let padding = self.scroll_padding;
        let total_lines = document.line_count();
        let line = self.cursor.line;

        if total_lines > self.viewport.visible_lines && self.viewport.visible_lines > 0 {
            let max_top = total_lines.saturating_sub(self.viewport.visible_lines);

            let safe_top = self.viewport.top_line + padding;
            let safe_bottom = self.viewport.top_line
                + self
                    .viewport
                    .visible_lines
                    .saturating_sub(padding)
                    .saturating_sub(1);

            if line < safe_top {
                self.viewport.top_line = line.saturating_sub(padding).min(max_top);
            } else if line > safe_bottom {
                self.viewport.top_line = (line + padding + 1)
                    .saturating_sub(self.viewport.visible_lines)
                    .min(max_top);
            }
        } else {
            self.viewport.top_line = 0;
        }

        let column = self.cursor.column;
        let left_safe = self.viewport.left_column.saturating_add(HORIZONTAL_MARGIN);
        let right_safe = self
            .viewport
            .left_column
            .saturating_add(self.viewport.visible_columns)
            .saturating_sub(HORIZONTAL_MARGIN);

        if column < left_safe {
            self.viewport.left_column = column.saturating_sub(HORIZONTAL_MARGIN);
        } else if column >= right_safe {
            self.viewport.left_column = column
                .saturating_add(HORIZONTAL_MARGIN)
                .saturating_add(1)
                .saturating_sub(self.viewport.visible_columns);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::with_text(text)
    }

    #[test]
    fn test_move_left_wraps_to_previous_line() {
        let d = doc("ab\ncd");
        let mut editor = EditorState::with_viewport(10, 80);
        editor.cursor = Cursor::at(1, 0);
        editor.move_left(&d);
        assert_eq!(editor.cursor, Cursor::at(0, 2));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let d = doc("ab\ncd");
        let mut editor = EditorState::with_viewport(10, 80);
        editor.cursor = Cursor::at(0, 2);
        editor.move_right(&d);
        assert_eq!(editor.cursor, Cursor::at(1, 0));
    }

    #[test]
    fn test_vertical_move_keeps_desired_column() {
        let d = doc("long line\nx\nanother long");
        let mut editor = EditorState::with_viewport(10, 80);
        editor.cursor = Cursor::at(0, 7);

        editor.move_vertical(&d, 1);
        assert_eq!((editor.cursor.line, editor.cursor.column), (1, 1));

        editor.move_vertical(&d, 1);
        assert_eq!((editor.cursor.line, editor.cursor.column), (2, 7));
    }

    #[test]
    fn test_vertical_move_clamps_to_document() {
        let d = doc("a\nb");
        let mut editor = EditorState::with_viewport(10, 80);
        editor.move_vertical(&d, -5);
        assert_eq!(editor.cursor.line, 0);
        editor.move_vertical(&d, 50);
        assert_eq!(editor.cursor.line, 1);
    }

    #[test]
    fn test_ensure_cursor_visible_scrolls_down() {
        let d = doc(&"line\n".repeat(100));
        let mut editor = EditorState::with_viewport(10, 80);
        editor.cursor = Cursor::at(50, 0);
        editor.ensure_cursor_visible(&d);

        let range = editor.viewport.visible_range(d.line_count());
        assert!(range.contains(&50));
        assert_eq!(editor.viewport.top_line, 50 + 1 + 1 - 10);
    }

    #[test]
    fn test_scroll_lines_clamps() {
        let d = doc(&"line\n".repeat(20));
        let mut editor = EditorState::with_viewport(10, 80);
        editor.scroll_lines(&d, -3);
        assert_eq!(editor.viewport.top_line, 0);
        editor.scroll_lines(&d, 500);
        assert_eq!(editor.viewport.top_line, d.line_count() - 10);
    }

    #[test]
    fn test_clamp_cursor_after_shrink() {
        let d = doc("short");
        let mut editor = EditorState::with_viewport(10, 80);
        editor.cursor = Cursor::at(9, 40);
        editor.clamp_cursor(&d);
        assert_eq!(editor.cursor, Cursor::at(0, 5));
    }
}
