//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::messages::{AppMsg, Msg};

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a user-invokable command (menu item or shortcut)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // File operations
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,

    // Edit operations
    Search,

    // Application
    Quit,
}

/// Menu a command is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Edit,
}

impl Menu {
    pub fn label(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
        }
    }
}

/// Keyboard shortcut: the primary modifier (Ctrl, Cmd on macOS) plus a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub shift: bool,
}

/// A command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub menu: Menu,
    pub shortcut: Option<Shortcut>,
}

/// Static registry of all available commands, in menu order
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::NewFile,
        label: "New",
        menu: Menu::File,
        shortcut: Some(Shortcut {
            key: 'n',
            shift: false,
        }),
    },
    CommandDef {
        id: CommandId::OpenFile,
        label: "Open",
        menu: Menu::File,
        shortcut: Some(Shortcut {
            key: 'o',
            shift: false,
        }),
    },
    CommandDef {
        id: CommandId::SaveFile,
        label: "Save",
        menu: Menu::File,
        shortcut: Some(Shortcut {
            key: 's',
            shift: false,
        }),
    },
    CommandDef {
        id: CommandId::SaveFileAs,
        label: "Save as...",
        menu: Menu::File,
        shortcut: Some(Shortcut {
            key: 's',
            shift: true,
        }),
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Exit",
        menu: Menu::File,
        shortcut: Some(Shortcut {
            key: 'q',
            shift: false,
        }),
    },
    CommandDef {
        id: CommandId::Search,
        label: "Search",
        menu: Menu::Edit,
        shortcut: Some(Shortcut {
            key: 'f',
            shift: false,
        }),
    },
];

impl CommandId {
    /// Convert this command to the message that triggers it
    pub fn to_msg(self) -> Msg {
        let app = match self {
            CommandId::NewFile => AppMsg::NewFile,
            CommandId::OpenFile => AppMsg::OpenFile,
            CommandId::SaveFile => AppMsg::SaveFile,
            CommandId::SaveFileAs => AppMsg::SaveFileAs,
            CommandId::Search => AppMsg::Search,
            CommandId::Quit => AppMsg::Quit,
        };
        Msg::App(app)
    }
}

impl CommandDef {
    /// Human readable shortcut, e.g. "Ctrl+Shift+S"
    pub fn shortcut_label(&self) -> Option<String> {
        let shortcut = self.shortcut?;
        let primary = if cfg!(target_os = "macos") {
            "Cmd"
        } else {
            "Ctrl"
        };
        let shift = if shortcut.shift { "Shift+" } else { "" };
        Some(format!(
            "{}+{}{}",
            primary,
            shift,
            shortcut.key.to_ascii_uppercase()
        ))
    }
}

/// Find the command bound to primary-modifier + `key` (case-insensitive)
pub fn command_for_shortcut(key: char, shift: bool) -> Option<CommandId> {
    let key = key.to_ascii_lowercase();
    COMMANDS
        .iter()
        .find(|cmd| cmd.shortcut == Some(Shortcut { key, shift }))
        .map(|cmd| cmd.id)
}

/// Commands listed under `menu`, in registry order
pub fn commands_in_menu(menu: Menu) -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(move |cmd| cmd.menu == menu)
}

// ============================================================================
// Dialog payloads
// ============================================================================

/// A yes/no/cancel question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Close-guard: the buffer has unsaved changes
    SaveChanges,
    /// Save-As target already exists
    Overwrite { path: PathBuf },
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::SaveChanges => "Unsaved changes",
            Prompt::Overwrite { .. } => "Overwrite file",
        }
    }

    pub fn text(&self) -> String {
        match self {
            Prompt::SaveChanges => {
                "Do you want to save the changes before closing the file?".to_string()
            }
            Prompt::Overwrite { path } => format!(
                "You are going to overwrite the selected file.\n{}\nDo you want to save the changes?",
                path.display()
            ),
        }
    }

    /// Whether the dialog offers a cancel button in addition to yes/no
    pub fn allows_cancel(&self) -> bool {
        matches!(self, Prompt::SaveChanges)
    }
}

/// The user's answer to a [`Prompt`]. A dismissed dialog answers `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Yes,
    No,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message shown to the user in a modal notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Show the open file picker; answers with `AppMsg::OpenDialogResult`
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: Option<PathBuf>,
    },
    /// Show the save file picker; answers with `AppMsg::SaveDialogResult`
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },
    /// Ask a question; answers with `AppMsg::ConfirmResult`
    Confirm(Prompt),
    /// Show a message; no answer
    Notify(Notice),
    /// Read a file; answers with `AppMsg::FileLoaded`
    ReadFile { path: PathBuf },
    /// Write a file; answers with `AppMsg::SaveCompleted`
    WriteFile { path: PathBuf, content: String },
    /// Request application exit
    Quit,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening away `Cmd::None`
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
