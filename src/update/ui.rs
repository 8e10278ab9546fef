//! UI message handlers (cursor blink, transient messages, search prompt)

use std::time::Duration;

use crate::commands::{Cmd, Notice};
use crate::messages::{ModalMsg, UiMsg};
use crate::model::{AppModel, ModalState};

/// Notice shown when the search term occurs in the buffer
pub const TEXT_FOUND: &str = "The text has been found in the file.";
/// Notice shown when it does not
pub const TEXT_NOT_FOUND: &str = "The text could not be found in the file.";

/// Handle UI messages (cursor blink, status expiry, modals)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink(Duration::from_millis(500)) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::ExpireTransientMessage => model
            .ui
            .expire_transient_message()
            .then_some(Cmd::Redraw),

        UiMsg::Modal(modal_msg) => update_modal(model, modal_msg),
    }
}

/// Handle modal-specific messages
fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    let Some(ModalState::Search(state)) = model.ui.active_modal.as_mut() else {
        return None;
    };

    match msg {
        ModalMsg::InsertChar(ch) => {
            state.query.push(ch);
            Some(Cmd::Redraw)
        }

        ModalMsg::DeleteBackward => {
            state.query.pop();
            Some(Cmd::Redraw)
        }

        ModalMsg::Close => {
            model.ui.close_modal();
            Some(Cmd::Redraw)
        }

        ModalMsg::Confirm => {
            let query = std::mem::take(&mut state.query);
            model.ui.close_modal();

            if query.is_empty() {
                return Some(Cmd::Redraw);
            }

            let found = model.document.contains_ignore_case(&query);
            tracing::debug!(query = %query, found, "search");
            let notice = if found {
                Notice::info(TEXT_FOUND)
            } else {
                Notice::warning(TEXT_NOT_FOUND)
            };
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::Notify(notice)]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::model::SearchState;

    fn model_with_search(text: &str, query: &str) -> AppModel {
        let mut model = AppModel::new(600, 900, EditorConfig::default());
        model.document.set_content(text);
        model
            .ui
            .open_modal(ModalState::Search(SearchState::with_query(query)));
        model
    }

    #[test]
    fn test_typing_into_search_prompt() {
        let mut model = model_with_search("", "");
        update_ui(&mut model, UiMsg::Modal(ModalMsg::InsertChar('a')));
        update_ui(&mut model, UiMsg::Modal(ModalMsg::InsertChar('b')));
        update_ui(&mut model, UiMsg::Modal(ModalMsg::DeleteBackward));

        assert_eq!(model.ui.active_modal.as_ref().map(|m| m.input()), Some("a"));
    }

    #[test]
    fn test_confirm_found() {
        let mut model = model_with_search("say hello world", "HELLO");
        let cmd = update_ui(&mut model, UiMsg::Modal(ModalMsg::Confirm));

        assert_eq!(
            cmd,
            Some(Cmd::Batch(vec![
                Cmd::Redraw,
                Cmd::Notify(Notice::info(TEXT_FOUND))
            ]))
        );
        assert!(!model.ui.has_modal());
    }

    #[test]
    fn test_confirm_empty_query_is_silent() {
        let mut model = model_with_search("text", "");
        let cmd = update_ui(&mut model, UiMsg::Modal(ModalMsg::Confirm));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!model.ui.has_modal());
    }

    #[test]
    fn test_modal_messages_without_modal_are_ignored() {
        let mut model = AppModel::new(600, 900, EditorConfig::default());
        assert_eq!(update_ui(&mut model, UiMsg::Modal(ModalMsg::Confirm)), None);
    }

    #[test]
    fn test_search_leaves_document_untouched() {
        let mut model = model_with_search("abc", "zzz");
        let revision = model.document.revision;
        update_ui(&mut model, UiMsg::Modal(ModalMsg::Confirm));
        assert_eq!(model.document.revision, revision);
    }
}
