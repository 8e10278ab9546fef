//! Document update functions for text editing

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let offset = model.cursor_offset();

    let new_offset = match msg {
        DocumentMsg::InsertChar(ch) => {
            model.document.insert_char(offset, ch);
            offset + 1
        }

        DocumentMsg::InsertNewline => {
            model.document.insert_char(offset, '\n');
            offset + 1
        }

        DocumentMsg::InsertText(text) => {
            let inserted = model.document.insert_text(offset, &text);
            if inserted == 0 {
                return None;
            }
            offset + inserted
        }

        DocumentMsg::DeleteBackward => {
            if offset == 0 {
                return None;
            }
            model.document.delete_range(offset - 1, offset);
            offset - 1
        }

        DocumentMsg::DeleteForward => {
            if offset >= model.document.buffer.len_chars() {
                return None;
            }
            model.document.delete_range(offset, offset + 1);
            offset
        }
    };

    model
        .editor
        .set_cursor_from_offset(&model.document, new_offset);
    model.ensure_cursor_visible();
    model.ui.reset_cursor_blink();
    Some(Cmd::Redraw)
}
