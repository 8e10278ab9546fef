//! Keyboard input handling
//!
//! Maps winit key events to messages. Shortcuts come from the command
//! registry; everything else is editing and navigation. While the search
//! prompt is open it captures all keys.

use winit::keyboard::{Key, NamedKey};

use notepad::commands::command_for_shortcut;
use notepad::messages::{Direction, DocumentMsg, EditorMsg, ModalMsg, Msg};
use notepad::model::AppModel;

/// Result of translating one key press
#[derive(Debug)]
pub enum KeyInput {
    /// Messages to run through the update loop, in order
    Messages(Vec<Msg>),
    /// Paste from the system clipboard
    Paste,
    Ignored,
}

impl From<Msg> for KeyInput {
    fn from(msg: Msg) -> Self {
        KeyInput::Messages(vec![msg])
    }
}

/// Pressed modifier keys
#[derive(Debug, Default, Clone, Copy)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub logo: bool,
}

impl Modifiers {
    /// Ctrl, or Cmd on macOS
    pub fn primary(&self) -> bool {
        if cfg!(target_os = "macos") {
            self.logo
        } else {
            self.ctrl
        }
    }
}

pub fn handle_key(model: &AppModel, key: &Key, mods: Modifiers) -> KeyInput {
    if model.ui.has_modal() {
        return handle_modal_key(key, mods);
    }

    if mods.primary() {
        if let Key::Character(s) = key {
            let mut chars = s.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                if ch.eq_ignore_ascii_case(&'v') && !mods.shift {
                    return KeyInput::Paste;
                }
                return match command_for_shortcut(ch, mods.shift) {
                    Some(id) => id.to_msg().into(),
                    None => KeyInput::Ignored,
                };
            }
        }
    }

    let editor = |msg: EditorMsg| -> KeyInput { Msg::Editor(msg).into() };
    let document = |msg: DocumentMsg| -> KeyInput { Msg::Document(msg).into() };

    match key {
        Key::Named(NamedKey::ArrowUp) => editor(EditorMsg::MoveCursor(Direction::Up)),
        Key::Named(NamedKey::ArrowDown) => editor(EditorMsg::MoveCursor(Direction::Down)),
        Key::Named(NamedKey::ArrowLeft) if mods.logo => editor(EditorMsg::MoveCursorLineStart),
        Key::Named(NamedKey::ArrowRight) if mods.logo => editor(EditorMsg::MoveCursorLineEnd),
        Key::Named(NamedKey::ArrowLeft) => editor(EditorMsg::MoveCursor(Direction::Left)),
        Key::Named(NamedKey::ArrowRight) => editor(EditorMsg::MoveCursor(Direction::Right)),

        Key::Named(NamedKey::Home) if mods.ctrl => editor(EditorMsg::MoveCursorDocumentStart),
        Key::Named(NamedKey::End) if mods.ctrl => editor(EditorMsg::MoveCursorDocumentEnd),
        Key::Named(NamedKey::Home) => editor(EditorMsg::MoveCursorLineStart),
        Key::Named(NamedKey::End) => editor(EditorMsg::MoveCursorLineEnd),
        Key::Named(NamedKey::PageUp) => editor(EditorMsg::PageUp),
        Key::Named(NamedKey::PageDown) => editor(EditorMsg::PageDown),

        Key::Named(NamedKey::Enter) => document(DocumentMsg::InsertNewline),
        Key::Named(NamedKey::Backspace) => document(DocumentMsg::DeleteBackward),
        Key::Named(NamedKey::Delete) => document(DocumentMsg::DeleteForward),
        Key::Named(NamedKey::Tab) => {
            document(DocumentMsg::InsertText(" ".repeat(model.config.tab_width)))
        }

        Key::Named(NamedKey::Space) if !(mods.ctrl || mods.logo) => {
            document(DocumentMsg::InsertChar(' '))
        }
        Key::Character(s) if !(mods.ctrl || mods.logo) => KeyInput::Messages(
            s.chars()
                .map(|ch| Msg::Document(DocumentMsg::InsertChar(ch)))
                .collect(),
        ),

        _ => KeyInput::Ignored,
    }
}

/// Keys while the search prompt is open
fn handle_modal_key(key: &Key, mods: Modifiers) -> KeyInput {
    match key {
        Key::Named(NamedKey::Escape) => Msg::modal(ModalMsg::Close).into(),
        Key::Named(NamedKey::Enter) => Msg::modal(ModalMsg::Confirm).into(),
        Key::Named(NamedKey::Backspace) => Msg::modal(ModalMsg::DeleteBackward).into(),
        Key::Named(NamedKey::Space) if !(mods.ctrl || mods.logo) => {
            Msg::modal(ModalMsg::InsertChar(' ')).into()
        }
        Key::Character(s) if !(mods.ctrl || mods.logo) => KeyInput::Messages(
            s.chars()
                .map(|ch| Msg::modal(ModalMsg::InsertChar(ch)))
                .collect(),
        ),
        _ => KeyInput::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notepad::messages::{AppMsg, UiMsg};
    use notepad::model::{ModalState, SearchState};
    use notepad::EditorConfig;

    fn model() -> AppModel {
        AppModel::new(600, 900, EditorConfig::default())
    }

    fn primary() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers {
                logo: true,
                ..Default::default()
            }
        } else {
            Modifiers {
                ctrl: true,
                ..Default::default()
            }
        }
    }

    #[test]
    fn test_shortcuts_map_to_commands() {
        let model = model();
        let save_as = Modifiers {
            shift: true,
            ..primary()
        };

        assert!(matches!(
            handle_key(&model, &Key::Character("s".into()), primary()),
            KeyInput::Messages(ref m) if matches!(m.as_slice(), [Msg::App(AppMsg::SaveFile)])
        ));
        assert!(matches!(
            handle_key(&model, &Key::Character("S".into()), save_as),
            KeyInput::Messages(ref m) if matches!(m.as_slice(), [Msg::App(AppMsg::SaveFileAs)])
        ));
        assert!(matches!(
            handle_key(&model, &Key::Character("v".into()), primary()),
            KeyInput::Paste
        ));
    }

    #[test]
    fn test_typing_inserts_characters() {
        let input = handle_key(&model(), &Key::Character("ab".into()), Modifiers::default());
        let KeyInput::Messages(msgs) = input else {
            panic!("expected messages");
        };
        assert_eq!(msgs.len(), 2);
        assert!(matches!(msgs[0], Msg::Document(DocumentMsg::InsertChar('a'))));
    }

    #[test]
    fn test_tab_inserts_spaces() {
        let input = handle_key(&model(), &Key::Named(NamedKey::Tab), Modifiers::default());
        assert!(matches!(
            input,
            KeyInput::Messages(ref m)
                if matches!(m.as_slice(), [Msg::Document(DocumentMsg::InsertText(t))] if t == "    ")
        ));
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut model = model();
        model
            .ui
            .open_modal(ModalState::Search(SearchState::default()));

        assert!(matches!(
            handle_key(&model, &Key::Character("x".into()), Modifiers::default()),
            KeyInput::Messages(ref m)
                if matches!(m.as_slice(), [Msg::Ui(UiMsg::Modal(ModalMsg::InsertChar('x')))])
        ));
        assert!(matches!(
            handle_key(&model, &Key::Named(NamedKey::ArrowUp), Modifiers::default()),
            KeyInput::Ignored
        ));
        // Shortcuts are swallowed while the prompt is open
        assert!(matches!(
            handle_key(&model, &Key::Character("s".into()), primary()),
            KeyInput::Ignored
        ));
    }
}
