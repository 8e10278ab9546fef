//! Notepad - minimal Elm-style text editor
//!
//! This crate provides the core types and logic for a single-document text
//! editor implementing the Elm Architecture pattern. The windowing runtime
//! lives in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod effects;
pub mod file_io;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use effects::{Dialogs, Effects, FilePicker};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
