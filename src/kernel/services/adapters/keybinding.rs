//! Keymap: key -> command, with user rules layered over the defaults.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::{KeybindingRule, Settings};
use rustc_hash::FxHashMap;

const MODIFIERS: &[(&str, KeyModifiers)] = &[
    ("ctrl", KeyModifiers::CONTROL),
    ("control", KeyModifiers::CONTROL),
    ("shift", KeyModifiers::SHIFT),
    ("alt", KeyModifiers::ALT),
    ("option", KeyModifiers::ALT),
    ("super", KeyModifiers::SUPER),
    ("meta", KeyModifiers::SUPER),
    ("cmd", KeyModifiers::SUPER),
];

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("tab", KeyCode::Tab),
    ("esc", KeyCode::Esc),
    ("escape", KeyCode::Esc),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("del", KeyCode::Delete),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("space", KeyCode::Char(' ')),
];

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

/// Parses `"ctrl+shift+up"` style strings. The last non-modifier part is the
/// key; an uppercase letter implies Shift.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_name = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match lookup(MODIFIERS, part) {
            Some(modifier) => modifiers |= modifier,
            None => key_name = Some(part),
        }
    }

    let key_name = key_name?;
    let code = lookup(NAMED_KEYS, key_name)
        .or_else(|| function_key(key_name))
        .or_else(|| single_char(key_name))?;
    Some(Key::new(code, modifiers).fold_uppercase())
}

fn function_key(name: &str) -> Option<KeyCode> {
    let digits = name.strip_prefix('f').or_else(|| name.strip_prefix('F'))?;
    digits.parse::<u8>().ok().map(KeyCode::F)
}

fn single_char(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(KeyCode::Char(ch)),
        _ => None,
    }
}

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self::with_rules(&settings.keybindings)
    }

    /// Defaults plus `rules`. Rules with an unparsable key are skipped.
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, command = %rule.command, "invalid keybinding");
                continue;
            };
            service.bind(key, Command::from_name(&rule.command));
        }
        service
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.bindings
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    // Reordering accepts Shift as well, so Ctrl+Shift+arrow behaves the same.
    let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    bindings.insert(Key::ctrl(KeyCode::Up), Command::PromoteDocument);
    bindings.insert(Key::new(KeyCode::Up, ctrl_shift), Command::PromoteDocument);
    bindings.insert(Key::ctrl(KeyCode::Down), Command::DemoteDocument);
    bindings.insert(Key::new(KeyCode::Down, ctrl_shift), Command::DemoteDocument);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewDocument);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
