//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{update_app, CHANGES_SAVED, SAVE_AS_FAILED, SAVE_FAILED};
pub use document::update_document;
pub use editor::update_editor;
pub use ui::{update_ui, TEXT_FOUND, TEXT_NOT_FOUND};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after state and logs diffs for debugging.
/// Filters out noisy messages like BlinkCursor from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Ui(UiMsg::BlinkCursor) | Msg::Ui(UiMsg::ExpireTransientMessage)
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = StateSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&StateSnapshot::from_model(model)) {
        debug!(target: "state", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// File contents are left out so large buffers do not end up in the log.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, DocumentMsg};

    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(DocumentMsg::InsertText(text)) => {
            format!("Document::InsertText({} chars)", text.chars().count())
        }
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(AppMsg::FileLoaded { path, result }) => format!(
            "App::FileLoaded({}, {})",
            path.display(),
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
