//! UI state - status bar, cursor blink, and the search input modal

use super::status_bar::{StatusBar, TransientMessage};
use std::time::{Duration, Instant};

// ============================================================================
// Modal System
// ============================================================================

/// Identifies which modal is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Search term prompt (Ctrl+F)
    Search,
}

/// State for the search term prompt
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text typed so far
    pub query: String,
}

impl SearchState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Union of all modal states
#[derive(Debug, Clone)]
pub enum ModalState {
    Search(SearchState),
}

impl ModalState {
    /// Get the modal ID for this state
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::Search(_) => ModalId::Search,
        }
    }

    /// Title drawn above the input field
    pub fn title(&self) -> &'static str {
        match self {
            ModalState::Search(_) => "Search word",
        }
    }

    /// Current input text
    pub fn input(&self) -> &str {
        match self {
            ModalState::Search(state) => &state.query,
        }
    }
}

/// UI state - status messages, cursor animation and modals
#[derive(Debug, Clone)]
pub struct UiState {
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Whether the cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
}

/// How long transient status messages stay visible
pub const TRANSIENT_MESSAGE_DURATION: Duration = Duration::from_secs(4);

impl UiState {
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
            transient_message: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            active_modal: None,
        }
    }

    /// Check if a modal is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Open a modal
    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    /// Close the active modal
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }

    /// Show a short-lived message in the status bar
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(
            message,
            TRANSIENT_MESSAGE_DURATION,
        ));
    }

    /// Text of the current status message, if it has not expired
    pub fn status_message(&self) -> Option<&str> {
        self.transient_message
            .as_ref()
            .filter(|m| !m.is_expired())
            .map(|m| m.text.as_str())
    }

    /// Drop the transient message once it expired.
    /// Returns true if something was cleared (needs redraw)
    pub fn expire_transient_message(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(|m| m.is_expired())
        {
            self.transient_message = None;
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
