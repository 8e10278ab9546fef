//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to message mapping
//! - `dialogs` - Native file pickers and message boxes

pub mod app;
pub mod dialogs;
pub mod input;

pub use app::App;
