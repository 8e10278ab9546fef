//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::messages::{AppMsg, Msg};

/// A minimal text editor
#[derive(Parser, Debug)]
#[command(name = "notepad", version, about = "A minimal text editor")]
pub struct CliArgs {
    /// File to open at startup
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl CliArgs {
    /// Validate the arguments and produce the messages to run at startup
    pub fn into_startup_messages(self) -> Result<Vec<Msg>, String> {
        match self.path {
            None => Ok(Vec::new()),
            Some(path) if path.is_dir() => {
                Err(format!("{} is a directory, not a file", path.display()))
            }
            Some(path) => {
                let path = std::path::absolute(&path)
                    .map_err(|e| format!("{}: {}", path.display(), e))?;
                Ok(vec![Msg::App(AppMsg::LoadFile(path))])
            }
        }
    }
}
