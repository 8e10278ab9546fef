//! Logging setup and debug snapshots of controller state
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug,message=debug` - scoped filtering
//! - `RUST_LOG=notepad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/notepad/logs/notepad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, Awaiting};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "notepad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the state a message can change, for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub cursor: (usize, usize),
    pub is_modified: bool,
    pub has_path: bool,
    pub awaiting: Option<Awaiting>,
}

impl StateSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            cursor: (model.editor.cursor.line, model.editor.cursor.column),
            is_modified: model.document.is_modified,
            has_path: model.document.path().is_some(),
            awaiting: model.session.awaiting.clone(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.cursor.0, self.cursor.1, other.cursor.0, other.cursor.1
            ));
        }
        if self.is_modified != other.is_modified {
            let status = if other.is_modified { "dirty" } else { "clean" };
            changes.push(format!("document {}", status));
        }
        if self.has_path != other.has_path {
            changes.push(format!("path set: {}", other.has_path));
        }
        if self.awaiting != other.awaiting {
            changes.push(format!("awaiting: {:?}", other.awaiting));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
