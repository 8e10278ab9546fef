//! Session state - where the controller is suspended while a dialog or file
//! operation is outstanding.
//!
//! Only one suspension point exists at a time. Result messages that do not
//! match it are dropped, and user actions arriving while one is outstanding
//! are ignored.

use std::path::PathBuf;

/// An action that discards the buffer and therefore runs the close-guard first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    New,
    Open,
    Exit,
}

/// Which save action started a write (selects the failure message)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrigin {
    /// Save to the document's existing path
    Save,
    /// Save to a freshly picked path
    SaveAs,
}

/// The outstanding suspension point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Awaiting {
    /// "Save changes before closing?" is on screen
    CloseGuard { then: PendingAction },
    /// The save picker is on screen
    SavePath { then: Option<PendingAction> },
    /// "Overwrite existing file?" is on screen
    Overwrite {
        path: PathBuf,
        then: Option<PendingAction>,
    },
    /// A write is in flight
    Write {
        path: PathBuf,
        origin: SaveOrigin,
        revision: u64,
        then: Option<PendingAction>,
    },
    /// The open picker is on screen
    OpenPath,
    /// A read is in flight
    Read { path: PathBuf },
}

/// Controller session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub awaiting: Option<Awaiting>,
}

impl Session {
    /// Whether the controller is idle and can accept a new user action
    pub fn is_idle(&self) -> bool {
        self.awaiting.is_none()
    }

    /// Suspend on `awaiting`
    pub fn suspend(&mut self, awaiting: Awaiting) {
        tracing::debug!(target: "session", ?awaiting, "suspend");
        self.awaiting = Some(awaiting);
    }

    /// Take the suspension point, leaving the session idle
    pub fn resume(&mut self) -> Option<Awaiting> {
        self.awaiting.take()
    }

    /// Take the suspension point only if it satisfies `matches`.
    /// A non-matching suspension point stays in place.
    pub fn resume_if(&mut self, matches: impl FnOnce(&Awaiting) -> bool) -> Option<Awaiting> {
        if self.awaiting.as_ref().is_some_and(matches) {
            self.awaiting.take()
        } else {
            None
        }
    }
}
