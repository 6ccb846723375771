pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Rewrites an uppercase letter as its lowercase key plus Shift.
    pub fn fold_uppercase(self) -> Self {
        match self.code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => Self::new(
                KeyCode::Char(ch.to_ascii_lowercase()),
                self.modifiers | KeyModifiers::SHIFT,
            ),
            _ => self,
        }
    }

    /// Character typed by this key, if it carries no command modifier.
    pub fn typed_char(&self) -> Option<char> {
        let KeyCode::Char(ch) = self.code else {
            return None;
        };
        if self
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return None;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            Some(ch.to_ascii_uppercase())
        } else {
            Some(ch)
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers).fold_uppercase()
    }
}
