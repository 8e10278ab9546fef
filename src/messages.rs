//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

pub use crate::commands::ConfirmAnswer;
use crate::file_io::FileError;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Insert a block of text at cursor (paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
}

/// Modal-specific messages (search term prompt)
#[derive(Debug, Clone)]
pub enum ModalMsg {
    /// Insert character into modal input
    InsertChar(char),
    /// Delete character from modal input (backspace)
    DeleteBackward,
    /// Confirm the modal action (Enter)
    Confirm,
    /// Close the modal without acting (Escape)
    Close,
}

/// UI-specific messages (status bar, cursor blink, modals)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Toggle cursor blink state
    BlinkCursor,
    /// Drop the status bar message once it expired
    ExpireTransientMessage,
    /// Modal messages
    Modal(ModalMsg),
}

/// Application-level messages: user actions and the answers of dialogs and I/O
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),

    // === User actions ===
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    Search,
    Quit,
    /// Load a file given on the command line
    LoadFile(PathBuf),

    // === Dialog and I/O results ===
    /// Open picker returned a path (or None if cancelled)
    OpenDialogResult { path: Option<PathBuf> },
    /// Save picker returned a path (or None if cancelled)
    SaveDialogResult { path: Option<PathBuf> },
    /// Answer to the outstanding confirmation prompt
    ConfirmResult(ConfirmAnswer),
    /// File read finished
    FileLoaded {
        path: PathBuf,
        result: Result<String, FileError>,
    },
    /// File write finished
    SaveCompleted {
        path: PathBuf,
        result: Result<(), FileError>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// UI messages (status, animation, modal)
    Ui(UiMsg),
    /// App messages (file actions, dialogs, window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    /// Create a modal message
    pub fn modal(msg: ModalMsg) -> Self {
        Msg::Ui(UiMsg::Modal(msg))
    }
}
