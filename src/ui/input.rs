use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::{FieldDescriptor, FieldType};
use crate::ui::form::{FocusTarget, FormIntent};

/// Action to take after processing a key event.
#[derive(Debug, Clone)]
pub enum KeyAction {
    /// Nothing to do.
    None,
    Dispatch(FormIntent),
    Submit,
    Quit,
}

pub fn map_key(key: KeyEvent, focus: Option<FocusTarget<'_>>) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.code == KeyCode::Esc || is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return KeyAction::Quit;
    }
    if is_ctrl_char(key, 's') {
        return KeyAction::Submit;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => return KeyAction::Dispatch(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return KeyAction::Dispatch(FormIntent::FocusPrev),
        _ => {}
    }

    match focus {
        None => KeyAction::None,
        Some(FocusTarget::Submit) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Submit,
            _ => KeyAction::None,
        },
        Some(FocusTarget::Field(field)) => map_field_key(key, field),
    }
}

fn map_field_key(key: KeyEvent, field: &FieldDescriptor) -> KeyAction {
    let name = field.name.clone();
    match &field.kind {
        FieldType::Component => KeyAction::None,
        FieldType::Checkbox => match key.code {
            KeyCode::Char(' ') => KeyAction::Dispatch(FormIntent::Toggle { name }),
            KeyCode::Enter => KeyAction::Dispatch(FormIntent::FocusNext),
            _ => KeyAction::None,
        },
        FieldType::Select => match key.code {
            KeyCode::Left => KeyAction::Dispatch(FormIntent::CycleOption {
                name,
                forward: false,
            }),
            KeyCode::Right | KeyCode::Char(' ') => {
                KeyAction::Dispatch(FormIntent::CycleOption {
                    name,
                    forward: true,
                })
            }
            KeyCode::Enter => KeyAction::Dispatch(FormIntent::FocusNext),
            _ => KeyAction::None,
        },
        FieldType::TextArea | FieldType::Text | FieldType::Other(_) => {
            let multiline =
                field.kind == FieldType::TextArea || field.multiline || field.rows.is_some();
            match key.code {
                KeyCode::Enter if multiline => {
                    KeyAction::Dispatch(FormIntent::Insert { name, ch: '\n' })
                }
                KeyCode::Enter => KeyAction::Dispatch(FormIntent::FocusNext),
                KeyCode::Backspace => KeyAction::Dispatch(FormIntent::DeleteBack { name }),
                KeyCode::Char(ch) if !has_ctrl_or_alt(key) => {
                    KeyAction::Dispatch(FormIntent::Insert { name, ch })
                }
                _ => KeyAction::None,
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
}

fn has_ctrl_or_alt(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn escape_and_ctrl_q_quit() {
        assert!(matches!(map_key(press(KeyCode::Esc), None), KeyAction::Quit));
        assert!(matches!(map_key(ctrl('q'), None), KeyAction::Quit));
    }

    #[test]
    fn ctrl_s_submits_from_any_field() {
        let field = FieldDescriptor::new("name", FieldType::Text);
        assert!(matches!(
            map_key(ctrl('s'), Some(FocusTarget::Field(&field))),
            KeyAction::Submit
        ));
    }

    #[test]
    fn typing_inserts_into_text_fields() {
        let field = FieldDescriptor::new("name", FieldType::Other("email".into()));
        let action = map_key(press(KeyCode::Char('a')), Some(FocusTarget::Field(&field)));
        assert!(matches!(
            action,
            KeyAction::Dispatch(FormIntent::Insert { ch: 'a', .. })
        ));
    }

    #[test]
    fn enter_depends_on_field_kind() {
        let area = FieldDescriptor::new("bio", FieldType::TextArea);
        assert!(matches!(
            map_key(press(KeyCode::Enter), Some(FocusTarget::Field(&area))),
            KeyAction::Dispatch(FormIntent::Insert { ch: '\n', .. })
        ));
        let text = FieldDescriptor::new("name", FieldType::Text);
        assert!(matches!(
            map_key(press(KeyCode::Enter), Some(FocusTarget::Field(&text))),
            KeyAction::Dispatch(FormIntent::FocusNext)
        ));
        assert!(matches!(
            map_key(press(KeyCode::Enter), Some(FocusTarget::Submit)),
            KeyAction::Submit
        ));
    }

    #[test]
    fn space_toggles_checkbox() {
        let field = FieldDescriptor::new("subscribe", FieldType::Checkbox);
        assert!(matches!(
            map_key(press(KeyCode::Char(' ')), Some(FocusTarget::Field(&field))),
            KeyAction::Dispatch(FormIntent::Toggle { .. })
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Esc);
        key.kind = KeyEventKind::Release;
        assert!(matches!(map_key(key, None), KeyAction::None));
    }
}
