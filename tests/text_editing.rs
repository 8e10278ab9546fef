//! Text editing tests - insert, delete, paste

mod common;

use common::{buffer_to_string, test_model};
use notepad::messages::{DocumentMsg, Msg};
use notepad::update::update;

// ========================================================================
// InsertChar tests
// ========================================================================

#[test]
fn test_insert_char_at_start() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "Xhello");
    assert_eq!(model.editor.cursor.column, 1);
    assert_eq!(model.editor.cursor.line, 0);
}

#[test]
fn test_insert_char_at_middle() {
    let mut model = test_model("hello", 0, 2);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "heXllo");
    assert_eq!(model.editor.cursor.column, 3);
}

#[test]
fn test_insert_char_on_second_line() {
    let mut model = test_model("ab\ncd", 1, 1);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "ab\ncXd");
    assert_eq!((model.editor.cursor.line, model.editor.cursor.column), (1, 2));
}

#[test]
fn test_insert_marks_document_modified() {
    let mut model = test_model("hello", 0, 0);
    assert!(!model.document.is_modified);
    update(&mut model, Msg::insert_char('!'));
    assert!(model.document.is_modified);
}

// ========================================================================
// Newline tests
// ========================================================================

#[test]
fn test_insert_newline_splits_line() {
    let mut model = test_model("hello world", 0, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(buffer_to_string(&model), "hello\n world");
    assert_eq!((model.editor.cursor.line, model.editor.cursor.column), (1, 0));
}

// ========================================================================
// Delete tests
// ========================================================================

#[test]
fn test_backspace_joins_lines() {
    let mut model = test_model("ab\ncd", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "abcd");
    assert_eq!((model.editor.cursor.line, model.editor.cursor.column), (0, 2));
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut model = test_model("abc", 0, 0);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert!(cmd.is_none());
    assert_eq!(buffer_to_string(&model), "abc");
    assert!(!model.document.is_modified);
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut model = test_model("abc", 0, 3);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert!(cmd.is_none());
    assert!(!model.document.is_modified);
}

#[test]
fn test_delete_forward_removes_char_under_cursor() {
    let mut model = test_model("abc", 0, 1);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "ac");
    assert_eq!(model.editor.cursor.column, 1);
}

// ========================================================================
// Paste tests
// ========================================================================

#[test]
fn test_paste_multiline_text() {
    let mut model = test_model("[]", 0, 1);
    update(
        &mut model,
        Msg::Document(DocumentMsg::InsertText("one\r\ntwo".to_string())),
    );

    assert_eq!(buffer_to_string(&model), "[one\ntwo]");
    assert_eq!((model.editor.cursor.line, model.editor.cursor.column), (1, 3));
}

#[test]
fn test_paste_empty_text_is_noop() {
    let mut model = test_model("abc", 0, 1);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::InsertText(String::new())));

    assert!(cmd.is_none());
    assert!(!model.document.is_modified);
}
