//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod session;
pub mod status_bar;
pub mod ui;

pub use document::Document;
pub use editor::{Cursor, EditorState, Viewport};
pub use session::{Awaiting, PendingAction, SaveOrigin, Session};
pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage, NO_PATH_LABEL,
};
pub use ui::{ModalId, ModalState, SearchState, UiState};

use crate::config::EditorConfig;
use crate::theme::Theme;

/// Padding between the window edge and the text (pixels)
pub const TEXT_AREA_PADDING_PX: f32 = 6.0;

/// Calculate the x-coordinate where text content begins
#[inline]
pub fn text_start_x() -> f32 {
    TEXT_AREA_PADDING_PX
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// Cursor and viewport of the text area
    pub editor: EditorState,
    /// UI state (status bar, cursor blink, modal)
    pub ui: UiState,
    /// Where the session controller is suspended, if anywhere
    pub session: Session,
    /// Colors
    pub theme: Theme,
    /// Loaded editor configuration
    pub config: EditorConfig,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
}

impl AppModel {
    /// Create an application model with an empty, clean document
    pub fn new(window_width: u32, window_height: u32, config: EditorConfig) -> Self {
        let line_height = 20;
        let char_width: f32 = 10.0; // Corrected by the renderer with actual font metrics

        let (visible_lines, visible_columns) =
            viewport_size(window_width, window_height, line_height, char_width);

        let mut model = Self {
            document: Document::new(),
            editor: EditorState::with_viewport(visible_lines, visible_columns),
            ui: UiState::new(),
            session: Session::default(),
            theme: config.theme.clone(),
            config,
            window_size: (window_width, window_height),
            line_height,
            char_width,
        };
        sync_status_bar(&mut model);
        model
    }

    /// Update viewport dimensions after window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.recompute_viewport();
    }

    /// Update font metrics from the renderer
    pub fn set_font_metrics(&mut self, char_width: f32, line_height: usize) {
        self.char_width = char_width;
        self.line_height = line_height.max(1);
        self.recompute_viewport();
    }

    fn recompute_viewport(&mut self) {
        let (lines, columns) = viewport_size(
            self.window_size.0,
            self.window_size.1,
            self.line_height,
            self.char_width,
        );
        self.editor.resize_viewport(lines, columns);
        self.editor.ensure_cursor_visible(&self.document);
    }

    /// Ensure cursor is visible in viewport (minimal scroll)
    pub fn ensure_cursor_visible(&mut self) {
        self.editor.ensure_cursor_visible(&self.document);
    }

    /// Buffer offset of the cursor
    pub fn cursor_offset(&self) -> usize {
        self.editor.cursor_offset(&self.document)
    }
}

/// Lines and columns that fit the text area (window minus status bar)
fn viewport_size(width: u32, height: u32, line_height: usize, char_width: f32) -> (usize, usize) {
    let text_x = text_start_x().round();
    let visible_columns = ((width as f32 - text_x) / char_width.max(1.0)).floor().max(0.0) as usize;
    let status_bar_height = line_height;
    let visible_lines = (height as usize).saturating_sub(status_bar_height) / line_height.max(1);
    (visible_lines, visible_columns)
}
