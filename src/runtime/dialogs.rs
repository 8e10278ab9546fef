//! Native dialogs (using rfd)
//!
//! Blocking implementations of the injected dialog capabilities. Each call
//! returns only once the user answered, which keeps a single dialog on
//! screen at a time.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use winit::window::Window;

use notepad::commands::{ConfirmAnswer, Notice, Prompt, Severity};
use notepad::{Dialogs, FilePicker};

/// File picker backed by the platform's open/save dialogs
#[derive(Default)]
pub struct RfdPicker {
    parent: Option<Rc<Window>>,
}

/// Message boxes backed by the platform's dialogs
#[derive(Default)]
pub struct RfdDialogs {
    parent: Option<Rc<Window>>,
}

impl RfdPicker {
    pub fn set_parent(&mut self, window: Rc<Window>) {
        self.parent = Some(window);
    }

    fn dialog(&self) -> FileDialog {
        let dlg = FileDialog::new();
        match &self.parent {
            Some(window) => dlg.set_parent(&**window),
            None => dlg,
        }
    }
}

impl RfdDialogs {
    pub fn set_parent(&mut self, window: Rc<Window>) {
        self.parent = Some(window);
    }

    fn dialog(&self) -> MessageDialog {
        let dlg = MessageDialog::new();
        match &self.parent {
            Some(window) => dlg.set_parent(&**window),
            None => dlg,
        }
    }
}

impl FilePicker for RfdPicker {
    fn choose_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dlg = self.dialog();
        if let Some(dir) = start_dir {
            dlg = dlg.set_directory(dir);
        }
        dlg.pick_file()
    }

    fn choose_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        let mut dlg = self.dialog();
        if let Some(path) = suggested {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                dlg = dlg.set_directory(dir);
            }
            if let Some(name) = path.file_name() {
                dlg = dlg.set_file_name(name.to_string_lossy());
            }
        }
        dlg.save_file()
    }
}

impl Dialogs for RfdDialogs {
    fn confirm(&mut self, prompt: &Prompt) -> ConfirmAnswer {
        let buttons = if prompt.allows_cancel() {
            MessageButtons::YesNoCancel
        } else {
            MessageButtons::YesNo
        };

        let result = self
            .dialog()
            .set_level(MessageLevel::Warning)
            .set_title(prompt.title())
            .set_description(prompt.text())
            .set_buttons(buttons)
            .show();

        match result {
            MessageDialogResult::Yes => ConfirmAnswer::Yes,
            MessageDialogResult::No => ConfirmAnswer::No,
            _ => ConfirmAnswer::Cancel,
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let (level, title) = match notice.severity {
            Severity::Info => (MessageLevel::Info, "Information"),
            Severity::Warning => (MessageLevel::Warning, "Warning"),
            Severity::Error => (MessageLevel::Error, "Error"),
        };

        self.dialog()
            .set_level(level)
            .set_title(title)
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
