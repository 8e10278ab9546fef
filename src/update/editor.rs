//! Editor update functions for cursor movement and scrolling

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, viewport scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let doc = &model.document;
    let editor = &mut model.editor;

    match msg {
        EditorMsg::MoveCursor(direction) => match direction {
            Direction::Up => editor.move_vertical(doc, -1),
            Direction::Down => editor.move_vertical(doc, 1),
            Direction::Left => editor.move_left(doc),
            Direction::Right => editor.move_right(doc),
        },

        EditorMsg::MoveCursorLineStart => editor.move_line_start(),
        EditorMsg::MoveCursorLineEnd => editor.move_line_end(doc),
        EditorMsg::MoveCursorDocumentStart => editor.move_document_start(),
        EditorMsg::MoveCursorDocumentEnd => editor.move_document_end(doc),

        EditorMsg::PageUp => {
            let jump = editor.page_size();
            editor.move_vertical(doc, -(jump as isize));
            editor.viewport.top_line = editor.viewport.top_line.saturating_sub(jump);
        }

        EditorMsg::PageDown => {
            let jump = editor.page_size();
            editor.move_vertical(doc, jump as isize);
            editor.scroll_lines(doc, jump as i32);
        }

        EditorMsg::SetCursorPosition { line, column } => {
            editor.cursor.line = line;
            editor.cursor.column = column;
            editor.cursor.desired_column = None;
            editor.clamp_cursor(doc);
        }

        EditorMsg::Scroll(delta) => {
            // Scrolling moves only the viewport
            let before = editor.viewport.top_line;
            editor.scroll_lines(doc, delta);
            return (editor.viewport.top_line != before).then_some(Cmd::Redraw);
        }
    }

    model.ensure_cursor_visible();
    model.ui.reset_cursor_blink();
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::model::{Cursor, Document};

    fn model_with(text: &str, visible_lines: usize) -> AppModel {
        let mut model = AppModel::new(600, 900, EditorConfig::default());
        model.document = Document::with_text(text);
        model.editor.resize_viewport(visible_lines, 80);
        model
    }

    #[test]
    fn test_page_down_keeps_cursor_visible() {
        let mut model = model_with(&"x\n".repeat(100), 10);
        update_editor(&mut model, EditorMsg::PageDown);

        assert_eq!(model.editor.cursor.line, 9);
        let range = model.editor.viewport.visible_range(model.document.line_count());
        assert!(range.contains(&model.editor.cursor.line));
    }

    #[test]
    fn test_page_up_at_top_stays() {
        let mut model = model_with(&"x\n".repeat(100), 10);
        update_editor(&mut model, EditorMsg::PageUp);
        assert_eq!(model.editor.cursor, Cursor::default());
        assert_eq!(model.editor.viewport.top_line, 0);
    }

    #[test]
    fn test_scroll_does_not_move_cursor() {
        let mut model = model_with(&"x\n".repeat(100), 10);
        let cmd = update_editor(&mut model, EditorMsg::Scroll(5));

        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(model.editor.viewport.top_line, 5);
        assert_eq!(model.editor.cursor.line, 0);
    }

    #[test]
    fn test_scroll_on_short_document_is_noop() {
        let mut model = model_with("one line", 10);
        assert_eq!(update_editor(&mut model, EditorMsg::Scroll(3)), None);
    }

    #[test]
    fn test_set_cursor_position_is_clamped() {
        let mut model = model_with("ab\ncd", 10);
        update_editor(
            &mut model,
            EditorMsg::SetCursorPosition {
                line: 7,
                column: 7,
            },
        );
        assert_eq!(model.editor.cursor, Cursor::at(1, 2));
    }
}
