//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use notepad::commands::{ConfirmAnswer, Notice, Prompt};
use notepad::config::EditorConfig;
use notepad::effects::{self, Effects, Outcome};
use notepad::messages::{AppMsg, Msg};
use notepad::model::{AppModel, Cursor, Document, Viewport};
use notepad::{Dialogs, FilePicker};

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(800, 600, EditorConfig::default());
    model.document = Document::with_text(text);
    model.editor.cursor = Cursor::at(line, column);
    model.editor.viewport = Viewport::new(25, 80);
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.buffer.to_string()
}

// ============================================================================
// Scripted dialogs
// ============================================================================

/// File picker answering from a script; an exhausted script cancels
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    /// Start directories passed to `choose_open`
    pub open_calls: Vec<Option<PathBuf>>,
    /// Suggested paths passed to `choose_save`
    pub save_calls: Vec<Option<PathBuf>>,
}

impl ScriptedPicker {
    pub fn open(mut self, path: Option<&Path>) -> Self {
        self.open_answers.push_back(path.map(Path::to_path_buf));
        self
    }

    pub fn save(mut self, path: Option<&Path>) -> Self {
        self.save_answers.push_back(path.map(Path::to_path_buf));
        self
    }
}

impl FilePicker for ScriptedPicker {
    fn choose_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_calls.push(start_dir.map(Path::to_path_buf));
        self.open_answers.pop_front().flatten()
    }

    fn choose_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        self.save_calls.push(suggested.map(Path::to_path_buf));
        self.save_answers.pop_front().flatten()
    }
}

/// Confirmation dialogs answering from a script; an exhausted script cancels
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub answers: VecDeque<ConfirmAnswer>,
    pub prompts: Vec<Prompt>,
    pub notices: Vec<Notice>,
}

impl ScriptedDialogs {
    pub fn answer(mut self, answer: ConfirmAnswer) -> Self {
        self.answers.push_back(answer);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, prompt: &Prompt) -> ConfirmAnswer {
        self.prompts.push(prompt.clone());
        self.answers.pop_front().unwrap_or(ConfirmAnswer::Cancel)
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

pub type Scripted = Effects<ScriptedPicker, ScriptedDialogs>;

/// Effects with nothing scripted: every dialog cancels
pub fn scripted() -> Scripted {
    Effects::new(ScriptedPicker::default(), ScriptedDialogs::default())
}

pub fn with_script(picker: ScriptedPicker, dialogs: ScriptedDialogs) -> Scripted {
    Effects::new(picker, dialogs)
}

/// Run an app message to completion against the scripted effects
pub fn run_app(model: &mut AppModel, msg: AppMsg, effects: &mut Scripted) -> Outcome {
    effects::run(model, Msg::App(msg), effects)
}

/// Type `text` into the document at the cursor
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        let msg = if ch == '\n' {
            Msg::Document(notepad::messages::DocumentMsg::InsertNewline)
        } else {
            Msg::insert_char(ch)
        };
        notepad::update::update(model, msg);
    }
}
