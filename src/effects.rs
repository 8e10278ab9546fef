//! Side-effect execution
//!
//! Dialogs are injected capabilities: the binary implements [`FilePicker`] and
//! [`Dialogs`] with native dialogs, tests with scripted fakes. Each dialog
//! command blocks until answered and its answer is fed back into `update` as
//! a message, so only one dialog can ever be on screen.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::commands::{Cmd, ConfirmAnswer, Notice, Prompt};
use crate::file_io;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// Path selection (native file picker)
pub trait FilePicker {
    /// Ask for a file to open; `None` when cancelled
    fn choose_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    /// Ask for a file to save to; `None` when cancelled
    fn choose_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;
}

/// Confirmation and message dialogs
pub trait Dialogs {
    /// Ask a question. A dismissed dialog answers [`ConfirmAnswer::Cancel`].
    fn confirm(&mut self, prompt: &Prompt) -> ConfirmAnswer;
    /// Show a message and wait for the user to dismiss it
    fn notify(&mut self, notice: &Notice);
}

/// What the runtime has to do after a message was fully processed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub redraw: bool,
    pub quit: bool,
}

/// Executes commands against the filesystem and the injected dialogs
pub struct Effects<P, D> {
    pub picker: P,
    pub dialogs: D,
}

impl<P: FilePicker, D: Dialogs> Effects<P, D> {
    pub fn new(picker: P, dialogs: D) -> Self {
        Self { picker, dialogs }
    }

    /// Perform one command synchronously, returning the messages it produced
    pub fn perform(&mut self, cmd: Cmd, outcome: &mut Outcome) -> Vec<Msg> {
        let mut messages = Vec::new();
        self.perform_into(cmd, outcome, &mut messages);
        messages
    }

    fn perform_into(&mut self, cmd: Cmd, outcome: &mut Outcome, messages: &mut Vec<Msg>) {
        if outcome.quit {
            return;
        }

        match cmd {
            Cmd::None => {}
            Cmd::Redraw => outcome.redraw = true,

            Cmd::ShowOpenFileDialog { start_dir } => {
                let path = self.picker.choose_open(start_dir.as_deref());
                messages.push(Msg::App(AppMsg::OpenDialogResult { path }));
            }

            Cmd::ShowSaveFileDialog { suggested_path } => {
                let path = self.picker.choose_save(suggested_path.as_deref());
                messages.push(Msg::App(AppMsg::SaveDialogResult { path }));
            }

            Cmd::Confirm(prompt) => {
                let answer = self.dialogs.confirm(&prompt);
                tracing::debug!(?prompt, ?answer, "confirm");
                messages.push(Msg::App(AppMsg::ConfirmResult(answer)));
            }

            Cmd::Notify(notice) => self.dialogs.notify(&notice),

            Cmd::ReadFile { path } => {
                let result = file_io::read_all(&path);
                messages.push(Msg::App(AppMsg::FileLoaded { path, result }));
            }

            Cmd::WriteFile { path, content } => {
                let result = file_io::write_all(&path, &content);
                messages.push(Msg::App(AppMsg::SaveCompleted { path, result }));
            }

            Cmd::Quit => outcome.quit = true,

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.perform_into(cmd, outcome, messages);
                }
            }
        }
    }
}

/// Process `msg` and every message its side effects produce, until the
/// application is idle again or quits.
pub fn run<P: FilePicker, D: Dialogs>(
    model: &mut AppModel,
    msg: Msg,
    effects: &mut Effects<P, D>,
) -> Outcome {
    let mut outcome = Outcome::default();
    let mut queue = VecDeque::from([msg]);

    while let Some(msg) = queue.pop_front() {
        if let Some(cmd) = update(model, msg) {
            queue.extend(effects.perform(cmd, &mut outcome));
        }
        if outcome.quit {
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    struct NoPicker;

    impl FilePicker for NoPicker {
        fn choose_open(&mut self, _: Option<&Path>) -> Option<PathBuf> {
            None
        }
        fn choose_save(&mut self, _: Option<&Path>) -> Option<PathBuf> {
            None
        }
    }

    #[derive(Default)]
    struct Recorder {
        notices: Vec<Notice>,
    }

    impl Dialogs for Recorder {
        fn confirm(&mut self, _: &Prompt) -> ConfirmAnswer {
            ConfirmAnswer::Cancel
        }
        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    #[test]
    fn test_batch_runs_in_order_and_stops_at_quit() {
        let mut effects = Effects::new(NoPicker, Recorder::default());
        let mut outcome = Outcome::default();

        let messages = effects.perform(
            Cmd::Batch(vec![
                Cmd::Notify(Notice::info("first")),
                Cmd::Quit,
                Cmd::Notify(Notice::info("never")),
            ]),
            &mut outcome,
        );

        assert!(messages.is_empty());
        assert!(outcome.quit);
        assert_eq!(effects.dialogs.notices, vec![Notice::info("first")]);
    }

    #[test]
    fn test_cancelled_open_leaves_model_idle() {
        let mut model = AppModel::new(600, 900, EditorConfig::default());
        let mut effects = Effects::new(NoPicker, Recorder::default());

        let outcome = run(&mut model, Msg::App(AppMsg::OpenFile), &mut effects);

        assert!(model.session.is_idle());
        assert!(!outcome.quit);
        assert!(effects.dialogs.notices.is_empty());
    }
}
