//! Document model - the text buffer and its backing file

use ropey::Rope;
use std::path::{Path, PathBuf};

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None until the first load or save-as)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has changes not yet written to `file_path`
    pub is_modified: bool,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty, clean document without a path
    pub fn new() -> Self {
        Self {
            buffer: Rope::new(),
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Create a clean document with initial text and no path
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    // =========================================================================
    // Document state contract
    // =========================================================================

    /// The backing file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Replace the stored path (no validation)
    pub fn set_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    /// The full buffer contents
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Replace the whole buffer. This is an edit: the document becomes dirty.
    pub fn set_content(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.touch();
    }

    /// Replace buffer and path with freshly loaded file contents (clean)
    pub fn load(&mut self, path: PathBuf, text: &str) {
        self.buffer = Rope::from_str(text);
        self.file_path = Some(path);
        self.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Empty the buffer and forget the path (clean)
    pub fn clear(&mut self) {
        self.buffer = Rope::new();
        self.file_path = None;
        self.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Record a successful write of `revision` to `path`.
    ///
    /// The dirty flag is only cleared when nothing was edited after the
    /// write was issued.
    pub fn mark_saved(&mut self, path: PathBuf, revision: u64) {
        self.file_path = Some(path);
        if self.revision == revision {
            self.is_modified = false;
        }
    }

    /// Case-insensitive substring containment check against the whole buffer
    pub fn contains_ignore_case(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        self.content()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert a character at a char offset
    pub fn insert_char(&mut self, offset: usize, ch: char) {
        let offset = offset.min(self.buffer.len_chars());
        self.buffer.insert_char(offset, ch);
        self.touch();
    }

    /// Insert text at a char offset, normalizing line endings.
    /// Returns the number of chars inserted.
    pub fn insert_text(&mut self, offset: usize, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let offset = offset.min(self.buffer.len_chars());
        let text = crate::file_io::normalize_line_endings(text);
        self.buffer.insert(offset, &text);
        self.touch();
        text.chars().count()
    }

    /// Remove the chars in `start..end` (clamped to the buffer)
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let len = self.buffer.len_chars();
        let end = end.min(len);
        if start >= end {
            return;
        }
        self.buffer.remove(start..end);
        self.touch();
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    // =========================================================================
    // Line helpers for the view and cursor movement
    // =========================================================================

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by index without its trailing newline
    pub fn get_line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.buffer.len_lines() {
            let line = self.buffer.line(line_idx).to_string();
            Some(line.strip_suffix('\n').unwrap_or(&line).to_string())
        } else {
            None
        }
    }

    /// Get the length of a line (excluding newline character)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx < self.buffer.len_lines() {
            let line = self.buffer.line(line_idx);
            let len = line.len_chars();
            if len > 0 && line.char(len - 1) == '\n' {
                len - 1
            } else {
                len
            }
        } else {
            0
        }
    }

    /// Convert a (line, column) position to a buffer offset
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a buffer offset to (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
