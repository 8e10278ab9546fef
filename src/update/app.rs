//! App message handlers - the session controller
//!
//! User actions start here and either finish immediately or suspend the
//! session on a dialog or file operation. The answer arrives as another
//! `AppMsg` and resumes the action where it left off.

use std::path::PathBuf;

use crate::commands::{Cmd, ConfirmAnswer, Notice, Prompt};
use crate::file_io::{self, FileError};
use crate::messages::AppMsg;
use crate::model::{AppModel, Awaiting, ModalState, PendingAction, SaveOrigin, SearchState};

/// Notice shown after a close-guard save went through
pub const CHANGES_SAVED: &str = "The changes have been saved.";
/// Notice shown when writing to the document's own path fails
pub const SAVE_FAILED: &str = "The file could not be saved.";
/// Notice shown when writing to a picked path fails
pub const SAVE_AS_FAILED: &str = "There was an error processing the file.";

/// Handle app messages (file actions, dialog answers, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::NewFile => begin_action(model, "new").and_then(|m| guard(m, PendingAction::New)),
        AppMsg::OpenFile => begin_action(model, "open").and_then(|m| guard(m, PendingAction::Open)),
        AppMsg::Quit => begin_action(model, "quit").and_then(|m| guard(m, PendingAction::Exit)),
        AppMsg::SaveFile => begin_action(model, "save").and_then(|m| save(m, None)),
        AppMsg::SaveFileAs => begin_action(model, "save as").and_then(|m| save_as(m, None)),

        AppMsg::Search => {
            let model = begin_action(model, "search")?;
            model
                .ui
                .open_modal(ModalState::Search(SearchState::default()));
            Some(Cmd::Redraw)
        }

        AppMsg::LoadFile(path) => {
            let model = begin_action(model, "load")?;
            if model.document.is_modified {
                tracing::warn!(path = %path.display(), "load ignored: unsaved changes");
                return None;
            }
            Some(read(model, path))
        }

        AppMsg::OpenDialogResult { path } => {
            model
                .session
                .resume_if(|a| matches!(a, Awaiting::OpenPath))
                .or_else(|| ignored("OpenDialogResult"))?;
            match path {
                Some(path) => Some(read(model, path)),
                None => {
                    tracing::debug!(target: "session", "open cancelled");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::SaveDialogResult { path } => {
            let Some(Awaiting::SavePath { then }) = model
                .session
                .resume_if(|a| matches!(a, Awaiting::SavePath { .. }))
            else {
                return ignored("SaveDialogResult");
            };
            match path {
                Some(path) if file_io::is_existing_file(&path) => {
                    model.session.suspend(Awaiting::Overwrite {
                        path: path.clone(),
                        then,
                    });
                    Some(Cmd::Confirm(Prompt::Overwrite { path }))
                }
                Some(path) => Some(write(model, path, SaveOrigin::SaveAs, then)),
                None => {
                    tracing::debug!(target: "session", ?then, "save cancelled");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::ConfirmResult(answer) => on_confirm(model, answer),

        AppMsg::FileLoaded { path, result } => {
            model
                .session
                .resume_if(|a| matches!(a, Awaiting::Read { path: p } if *p == path))
                .or_else(|| ignored("FileLoaded"))?;
            Some(on_file_loaded(model, path, result))
        }

        AppMsg::SaveCompleted { path, result } => {
            let Some(Awaiting::Write {
                origin,
                revision,
                then,
                ..
            }) = model
                .session
                .resume_if(|a| matches!(a, Awaiting::Write { path: p, .. } if *p == path))
            else {
                return ignored("SaveCompleted");
            };
            Some(on_save_completed(
                model, path, result, origin, revision, then,
            ))
        }
    }
}

/// Gate for user actions: only one dialog or file operation at a time.
/// Closes the search prompt so the action gets the window to itself.
fn begin_action<'a>(model: &'a mut AppModel, action: &str) -> Option<&'a mut AppModel> {
    if !model.session.is_idle() {
        tracing::debug!(
            target: "session",
            action,
            awaiting = ?model.session.awaiting,
            "action ignored while suspended"
        );
        return None;
    }
    model.ui.close_modal();
    Some(model)
}

fn ignored<T>(msg: &str) -> Option<T> {
    tracing::debug!(target: "session", msg, "result does not match suspension point");
    None
}

/// Run the close-guard before an action that discards the buffer
fn guard(model: &mut AppModel, then: PendingAction) -> Option<Cmd> {
    if model.document.is_modified {
        model.session.suspend(Awaiting::CloseGuard { then });
        Some(Cmd::Confirm(Prompt::SaveChanges))
    } else {
        run_pending(model, then)
    }
}

/// Carry out an action once the buffer may be discarded
fn run_pending(model: &mut AppModel, action: PendingAction) -> Option<Cmd> {
    match action {
        PendingAction::New => {
            model.document.clear();
            model.editor.reset();
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }
        PendingAction::Open => {
            model.session.suspend(Awaiting::OpenPath);
            let start_dir = model
                .document
                .path()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf());
            Some(Cmd::ShowOpenFileDialog { start_dir })
        }
        PendingAction::Exit => {
            tracing::info!("exit requested");
            Some(Cmd::Quit)
        }
    }
}

fn on_confirm(model: &mut AppModel, answer: ConfirmAnswer) -> Option<Cmd> {
    match model.session.resume() {
        Some(Awaiting::CloseGuard { then }) => match answer {
            ConfirmAnswer::Yes => save(model, Some(then)),
            ConfirmAnswer::No => run_pending(model, then),
            ConfirmAnswer::Cancel => {
                tracing::debug!(target: "session", ?then, "close-guard cancelled");
                Some(Cmd::Redraw)
            }
        },
        Some(Awaiting::Overwrite { path, then }) => match answer {
            ConfirmAnswer::Yes => Some(write(model, path, SaveOrigin::SaveAs, then)),
            ConfirmAnswer::No | ConfirmAnswer::Cancel => {
                tracing::debug!(target: "session", path = %path.display(), "overwrite declined");
                Some(Cmd::Redraw)
            }
        },
        other => {
            model.session.awaiting = other;
            ignored("ConfirmResult")
        }
    }
}

/// Save to the document's path, or pick one if it has none
fn save(model: &mut AppModel, then: Option<PendingAction>) -> Option<Cmd> {
    match model.document.file_path.clone() {
        Some(path) => Some(write(model, path, SaveOrigin::Save, then)),
        None => save_as(model, then),
    }
}

fn save_as(model: &mut AppModel, then: Option<PendingAction>) -> Option<Cmd> {
    model.session.suspend(Awaiting::SavePath { then });
    Some(Cmd::ShowSaveFileDialog {
        suggested_path: model.document.file_path.clone(),
    })
}

fn write(
    model: &mut AppModel,
    path: PathBuf,
    origin: SaveOrigin,
    then: Option<PendingAction>,
) -> Cmd {
    let revision = model.document.revision;
    model.session.suspend(Awaiting::Write {
        path: path.clone(),
        origin,
        revision,
        then,
    });
    Cmd::WriteFile {
        path,
        content: model.document.content(),
    }
}

fn read(model: &mut AppModel, path: PathBuf) -> Cmd {
    model.session.suspend(Awaiting::Read { path: path.clone() });
    Cmd::ReadFile { path }
}

fn on_file_loaded(model: &mut AppModel, path: PathBuf, result: Result<String, FileError>) -> Cmd {
    match result {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded file");
            model.ui.set_status(format!("Loaded: {}", path.display()));
            model.document.load(path, &content);
            model.editor.reset();
            model.ui.reset_cursor_blink();
            Cmd::Redraw
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load file");
            Cmd::Notify(Notice::error(e.user_message()))
        }
    }
}

fn on_save_completed(
    model: &mut AppModel,
    path: PathBuf,
    result: Result<(), FileError>,
    origin: SaveOrigin,
    revision: u64,
    then: Option<PendingAction>,
) -> Cmd {
    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), "saved file");
            model.ui.set_status(format!("Saved: {}", path.display()));
            model.document.mark_saved(path, revision);

            match then {
                Some(action) => Cmd::batch(vec![
                    Cmd::Notify(Notice::info(CHANGES_SAVED)),
                    run_pending(model, action).into(),
                ]),
                None => Cmd::Redraw,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to save file");
            let message = match origin {
                SaveOrigin::Save => SAVE_FAILED,
                SaveOrigin::SaveAs => SAVE_AS_FAILED,
            };
            Cmd::Notify(Notice::error(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    fn model_with(text: &str) -> AppModel {
        let mut model = AppModel::new(600, 900, EditorConfig::default());
        if !text.is_empty() {
            model.document.set_content(text);
        }
        model
    }

    #[test]
    fn test_new_on_clean_document_skips_guard() {
        let mut model = model_with("");
        let cmd = update_app(&mut model, AppMsg::NewFile);
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(model.session.is_idle());
    }

    #[test]
    fn test_new_on_dirty_document_asks() {
        let mut model = model_with("text");
        let cmd = update_app(&mut model, AppMsg::NewFile);
        assert_eq!(cmd, Some(Cmd::Confirm(Prompt::SaveChanges)));
        assert_eq!(
            model.session.awaiting,
            Some(Awaiting::CloseGuard {
                then: PendingAction::New
            })
        );
    }

    #[test]
    fn test_actions_ignored_while_suspended() {
        let mut model = model_with("text");
        update_app(&mut model, AppMsg::NewFile);

        assert_eq!(update_app(&mut model, AppMsg::OpenFile), None);
        assert_eq!(update_app(&mut model, AppMsg::SaveFileAs), None);
        assert!(matches!(
            model.session.awaiting,
            Some(Awaiting::CloseGuard { .. })
        ));
    }

    #[test]
    fn test_mismatched_result_is_dropped() {
        let mut model = model_with("");
        update_app(&mut model, AppMsg::OpenFile);

        let cmd = update_app(
            &mut model,
            AppMsg::SaveDialogResult {
                path: Some(PathBuf::from("/tmp/x.txt")),
            },
        );
        assert_eq!(cmd, None);
        assert_eq!(model.session.awaiting, Some(Awaiting::OpenPath));
    }

    #[test]
    fn test_save_with_path_writes_directly() {
        let mut model = model_with("");
        model.document.load(PathBuf::from("/tmp/a.txt"), "abc");
        model.document.insert_char(3, 'd');

        let cmd = update_app(&mut model, AppMsg::SaveFile);
        assert_eq!(
            cmd,
            Some(Cmd::WriteFile {
                path: PathBuf::from("/tmp/a.txt"),
                content: "abcd".to_string(),
            })
        );
    }

    #[test]
    fn test_save_failure_message_depends_on_origin() {
        let mut model = model_with("");
        model.document.load(PathBuf::from("/tmp/a.txt"), "abc");
        update_app(&mut model, AppMsg::SaveFile);

        let cmd = update_app(
            &mut model,
            AppMsg::SaveCompleted {
                path: PathBuf::from("/tmp/a.txt"),
                result: Err(FileError::WriteFailure("denied".into())),
            },
        );
        assert_eq!(cmd, Some(Cmd::Notify(Notice::error(SAVE_FAILED))));
        assert!(model.session.is_idle());
    }

    #[test]
    fn test_search_opens_modal() {
        let mut model = model_with("");
        update_app(&mut model, AppMsg::Search);
        assert!(matches!(
            model.ui.active_modal,
            Some(ModalState::Search(_))
        ));
    }

    #[test]
    fn test_quit_on_clean_document() {
        let mut model = model_with("");
        assert_eq!(update_app(&mut model, AppMsg::Quit), Some(Cmd::Quit));
    }
}
