//! Status bar model - segments and layout
//!
//! The left side carries the file path label, the right side cursor and
//! line information.

use std::time::{Duration, Instant};

/// Label shown in place of the path while the document has no backing file
pub const NO_PATH_LABEL: &str = "[No Name]";

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Full path of the current file
    FilePath,
    /// Modified indicator ("*")
    ModifiedIndicator,
    /// Transient status messages (e.g., "Saved: /tmp/a.txt")
    StatusMessage,
    /// Cursor position (e.g., "Ln 42, Col 15")
    CursorPosition,
    /// Total line count (e.g., "1234 Ln")
    LineCount,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        match self {
            SegmentContent::Empty => 0,
            SegmentContent::Text(s) => s.chars().count(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FilePath | SegmentId::ModifiedIndicator | SegmentId::StatusMessage => {
                SegmentPosition::Left
            }
            SegmentId::CursorPosition | SegmentId::LineCount => SegmentPosition::Right,
        };

        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FilePath,
                    SegmentContent::Text(NO_PATH_LABEL.into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Ln 1, Col 1".into()),
                ),
                StatusSegment::new(SegmentId::LineCount, SegmentContent::Text("1 Ln".into())),
            ],
            separator_spacing: 2,
            padding: 2,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Display text of a segment ("" when hidden)
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    /// Width in character units
    pub width: usize,
    pub text: String,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    pub left: Vec<RenderedSegment>,
    pub right: Vec<RenderedSegment>,
    /// X positions of separator lines (in character units)
    pub separator_positions: Vec<usize>,
}

impl StatusBar {
    /// Calculate the layout for rendering
    ///
    /// `available_width` is the total width in character units.
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut left_segments = Vec::new();
        let mut right_segments = Vec::new();
        let mut separator_positions = Vec::new();

        let mut left_x = self.padding;
        let mut prev_segment_end: Option<usize> = None;

        for seg in self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Left && !s.content.is_empty())
        {
            if let Some(prev_end) = prev_segment_end {
                left_x = prev_end + self.separator_spacing;
            }

            let width = seg.content.char_width();
            left_segments.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            prev_segment_end = Some(left_x + width);
        }

        // Right segments are placed from the right edge, backwards
        let mut right_x = available_width.saturating_sub(self.padding);
        let mut prev_segment_start: Option<usize> = None;

        let right_segs: Vec<_> = self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Right && !s.content.is_empty())
            .collect();

        for seg in right_segs.iter().rev() {
            let width = seg.content.char_width();

            if let Some(prev_start) = prev_segment_start {
                separator_positions.push(prev_start.saturating_sub(self.separator_spacing / 2));
                right_x = prev_start.saturating_sub(self.separator_spacing);
            }

            right_x = right_x.saturating_sub(width);
            right_segments.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            prev_segment_start = Some(right_x);
        }

        right_segments.reverse();
        separator_positions.reverse();

        StatusBarLayout {
            left: left_segments,
            right: right_segments,
            separator_positions,
        }
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current document/editor state
pub fn sync_status_bar(model: &mut AppModel) {
    let path_label = model
        .document
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| NO_PATH_LABEL.to_string());

    let modified = if model.document.is_modified {
        SegmentContent::Text("*".to_string())
    } else {
        SegmentContent::Empty
    };

    let message = model
        .ui
        .status_message()
        .map(|m| SegmentContent::Text(m.to_string()))
        .unwrap_or(SegmentContent::Empty);

    let cursor = model.editor.cursor;
    let cursor_text = format!("Ln {}, Col {}", cursor.line + 1, cursor.column + 1);
    let line_text = format!("{} Ln", model.document.line_count());

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::FilePath, SegmentContent::Text(path_label));
    bar.update_segment(SegmentId::ModifiedIndicator, modified);
    bar.update_segment(SegmentId::StatusMessage, message);
    bar.update_segment(SegmentId::CursorPosition, SegmentContent::Text(cursor_text));
    bar.update_segment(SegmentId::LineCount, SegmentContent::Text(line_text));
}
