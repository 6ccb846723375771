use super::*;
use crate::core::event::KeyCode;
use crate::kernel::services::ports::CodeAreaConfig;
use crate::kernel::{CodeAreaError, DocId};

fn area() -> CodeArea {
    CodeArea::headless(CodeAreaConfig::default())
}

fn type_str(area: &mut CodeArea, keymap: &KeybindingService, text: &str) {
    for ch in text.chars() {
        let key = if ch == '\n' {
            Key::simple(KeyCode::Enter)
        } else {
            Key::simple(KeyCode::Char(ch))
        };
        let _ = area.handle_key(keymap, key);
    }
}

#[test]
fn typing_updates_title_and_marks_modified() {
    let keymap = KeybindingService::new();
    let mut area = area();
    let id = area.new_document();

    let (changed, effects) = area.handle_key(&keymap, Key::simple(KeyCode::Char('p')));
    assert!(changed);
    assert_eq!(
        effects,
        vec![
            Effect::TitleChanged {
                id,
                title: "p".to_string(),
            },
            Effect::MarkModified,
        ]
    );
    assert!(area.is_modified());

    type_str(&mut area, &keymap, "rint(1)");
    assert_eq!(area.selector().titles(), vec!["print(1)"]);
}

#[test]
fn typing_a_definition_shows_signature() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.new_document();

    type_str(&mut area, &keymap, "def star(n):");
    assert_eq!(area.current_title(), Some("star(n)"));
    assert_eq!(area.selector().titles(), vec!["star(n)"]);
}

#[test]
fn enter_after_colon_indents() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.new_document();

    type_str(&mut area, &keymap, "def f():\nfor i in range(3):\nforward(i)\n");
    assert_eq!(
        area.surface().text(),
        "def f():\n    for i in range(3):\n        forward(i)\n        "
    );
}

#[test]
fn enter_at_line_start_does_not_indent() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.add("    x = 1");

    let _ = area.handle_key(&keymap, Key::simple(KeyCode::Enter));
    assert_eq!(area.surface().text(), "\n    x = 1");
}

#[test]
fn auto_indent_can_be_disabled() {
    let keymap = KeybindingService::new();
    let config = CodeAreaConfig {
        auto_indent: false,
        ..CodeAreaConfig::default()
    };
    let mut area = CodeArea::headless(config);
    area.new_document();

    type_str(&mut area, &keymap, "if x:\ny");
    assert_eq!(area.surface().text(), "if x:\ny");
}

#[test]
fn ctrl_arrows_reorder_without_editing() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.add("a");
    area.add("b");

    let (changed, effects) = area.handle_key(&keymap, Key::ctrl(KeyCode::Up));
    assert!(changed);
    assert!(effects.is_empty());
    assert_eq!(area.selector().titles(), vec!["b", "a"]);
    assert_eq!(area.surface().text(), "b");
    assert!(!area.is_modified());

    let (changed, _) = area.handle_key(&keymap, Key::ctrl(KeyCode::Up));
    assert!(!changed);

    let (changed, _) = area.handle_key(&keymap, Key::ctrl(KeyCode::Down));
    assert!(changed);
    assert_eq!(area.selector().titles(), vec!["a", "b"]);
}

#[test]
fn ctrl_shift_arrows_reorder_like_ctrl_arrows() {
    use crate::core::event::KeyModifiers;

    let keymap = KeybindingService::new();
    let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    let mut area = area();
    area.add("a");
    area.add("b");

    let (changed, _) = area.handle_key(&keymap, Key::new(KeyCode::Up, ctrl_shift));
    assert!(changed);
    assert_eq!(area.selector().titles(), vec!["b", "a"]);
    assert_eq!(area.surface().text(), "b");

    let (changed, _) = area.handle_key(&keymap, Key::new(KeyCode::Down, ctrl_shift));
    assert!(changed);
    assert_eq!(area.selector().titles(), vec!["a", "b"]);
    assert!(!area.is_modified());
}

#[test]
fn backspace_at_start_changes_nothing() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.add("print(1)");

    let (changed, effects) = area.handle_key(&keymap, Key::simple(KeyCode::Backspace));
    assert!(!changed);
    assert!(effects.is_empty());
    assert!(!area.is_modified());
}

#[test]
fn backspace_back_to_empty_shows_placeholder() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.new_document();

    type_str(&mut area, &keymap, "ab");
    let _ = area.handle_key(&keymap, Key::simple(KeyCode::Backspace));
    let _ = area.handle_key(&keymap, Key::simple(KeyCode::Backspace));
    assert_eq!(area.surface().text(), "");
    assert_eq!(area.selector().titles(), vec!["Untitled"]);
}

#[test]
fn typing_without_document_creates_one() {
    let keymap = KeybindingService::new();
    let mut area = area();

    let (changed, _) = area.handle_key(&keymap, Key::simple(KeyCode::Char('x')));
    assert!(changed);
    assert_eq!(area.len(), 1);
    assert_eq!(area.selector().titles(), vec!["x"]);
}

#[test]
fn unbound_control_keys_are_ignored() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.new_document();

    let (changed, effects) = area.handle_key(&keymap, Key::ctrl(KeyCode::Char('q')));
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(area.surface().text(), "");
}

#[test]
fn ctrl_n_opens_new_document() {
    let keymap = KeybindingService::new();
    let mut area = area();
    area.add("a");

    let (changed, _) = area.handle_key(&keymap, Key::ctrl(KeyCode::Char('n')));
    assert!(changed);
    assert_eq!(area.selector().titles(), vec!["a", "Untitled"]);
}

#[test]
fn dispatch_drives_document_operations() {
    let mut area = area();
    let (changed, _) = area
        .dispatch_action(CodeAreaAction::Add {
            text: "def a():".to_string(),
        })
        .unwrap();
    assert!(changed);
    let first = area.current_id().unwrap();
    area.dispatch_action(CodeAreaAction::NewDocument).unwrap();

    let (changed, effects) = area
        .dispatch_action(CodeAreaAction::SetTitle {
            text: "print(2)".to_string(),
        })
        .unwrap();
    assert!(changed);
    assert_eq!(effects.len(), 1);

    area.dispatch_action(CodeAreaAction::SwitchTo { id: first }).unwrap();
    assert_eq!(area.surface().text(), "def a():");
    let (changed, _) = area.dispatch_action(CodeAreaAction::Demote).unwrap();
    assert!(changed);
    assert_eq!(area.selector().titles(), vec!["print(2)", "a()"]);

    let (changed, _) = area
        .dispatch_action(CodeAreaAction::SelectLine { line: 1 })
        .unwrap();
    assert!(changed);
    assert_eq!(area.surface().selection(), Some((0, 8)));

    area.dispatch_action(CodeAreaAction::Clear).unwrap();
    assert!(area.is_empty());
}

#[test]
fn dispatch_switch_to_unknown_id_fails() {
    let mut area = area();
    area.new_document();
    let missing = DocId::generate();
    assert_eq!(
        area.dispatch_action(CodeAreaAction::SwitchTo { id: missing }),
        Err(CodeAreaError::NotFound(missing))
    );
}

#[test]
fn dispatch_command_types_text() {
    let mut area = area();
    area.new_document();
    let (changed, effects) = area
        .dispatch_action(CodeAreaAction::Command(Command::InsertChar('x')))
        .unwrap();
    assert!(changed);
    assert!(effects.contains(&Effect::MarkModified));

    let (changed, _) = area
        .dispatch_action(CodeAreaAction::Command(Command::Custom("run".to_string())))
        .unwrap();
    assert!(!changed);
}
