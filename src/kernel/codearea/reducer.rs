use crate::core::{Command, Key};
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::{Selector, TextSurface};
use crate::kernel::Effect;

use super::action::CodeAreaAction;
use super::error::Result;
use super::lines::{first_line, newline_indent};
use super::state::CodeArea;

impl<S: TextSurface, L: Selector> CodeArea<S, L> {
    pub fn dispatch_action(&mut self, action: CodeAreaAction) -> Result<(bool, Vec<Effect>)> {
        let outcome = match action {
            CodeAreaAction::NewDocument => {
                self.new_document();
                (true, Vec::new())
            }
            CodeAreaAction::SwitchTo { id } => {
                self.switch_to(id)?;
                (true, Vec::new())
            }
            CodeAreaAction::Add { text } => {
                self.add(&text);
                (true, Vec::new())
            }
            CodeAreaAction::SaveCurrent => {
                self.save_current();
                (false, Vec::new())
            }
            CodeAreaAction::Promote => (self.promote(), Vec::new()),
            CodeAreaAction::Demote => (self.demote(), Vec::new()),
            CodeAreaAction::SetTitle { text } => {
                let effects = self.sync_title(&text).into_iter().collect::<Vec<_>>();
                (!effects.is_empty(), effects)
            }
            CodeAreaAction::Clear => {
                self.clear();
                (true, Vec::new())
            }
            CodeAreaAction::SelectLine { line } => (self.select_line(line), Vec::new()),
            CodeAreaAction::Command(command) => self.apply_command(command),
        };
        Ok(outcome)
    }

    /// Resolves `key` through `keymap`; unbound printable keys are typed.
    pub fn handle_key(&mut self, keymap: &KeybindingService, key: Key) -> (bool, Vec<Effect>) {
        let command = match keymap.resolve(&key) {
            Some(command) => command.clone(),
            None => match key.typed_char() {
                Some(ch) => Command::InsertChar(ch),
                None => return (false, Vec::new()),
            },
        };
        self.apply_command(command)
    }

    pub fn apply_command(&mut self, command: Command) -> (bool, Vec<Effect>) {
        match command {
            Command::NewDocument => {
                self.new_document();
                (true, Vec::new())
            }
            Command::SaveCurrent => {
                self.save_current();
                (false, Vec::new())
            }
            Command::PromoteDocument => (self.promote(), Vec::new()),
            Command::DemoteDocument => (self.demote(), Vec::new()),
            Command::InsertChar(ch) => self.edit(|surface| {
                let mut buf = [0u8; 4];
                surface.insert_text(ch.encode_utf8(&mut buf));
                true
            }),
            Command::InsertNewline => self.insert_newline(),
            Command::DeleteBackward => self.edit(|surface| surface.delete_backward()),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled command");
                (false, Vec::new())
            }
        }
    }

    fn insert_newline(&mut self) -> (bool, Vec<Effect>) {
        let indent_width = self.config.indent_width;
        let auto_indent = self.config.auto_indent;
        self.edit(|surface| {
            let lead = if auto_indent {
                newline_indent(&surface.text(), surface.cursor_position(), indent_width)
            } else {
                0
            };
            let mut text = String::with_capacity(lead + 1);
            text.push('\n');
            text.extend(std::iter::repeat(' ').take(lead));
            surface.insert_text(&text);
            true
        })
    }

    /// Runs a buffer edit, then keeps the title and modified flag in step.
    fn edit(&mut self, apply: impl FnOnce(&mut S) -> bool) -> (bool, Vec<Effect>) {
        if self.current_id().is_none() {
            self.new_document();
        }

        let changed = apply(&mut self.surface);
        if !changed {
            return (false, Vec::new());
        }

        let mut effects = Vec::new();
        let text = self.surface.text();
        if let Some(effect) = self.sync_title(first_line(&text)) {
            effects.push(effect);
        }
        if self.surface.is_modified() {
            self.modified = true;
            effects.push(Effect::MarkModified);
        }
        (true, effects)
    }

    fn sync_title(&mut self, text: &str) -> Option<Effect> {
        if !self.set_title(text) {
            return None;
        }
        let id = self.current_id()?;
        let title = self.current_title()?.to_string();
        Some(Effect::TitleChanged { id, title })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/codearea/reducer.rs"]
mod tests;
