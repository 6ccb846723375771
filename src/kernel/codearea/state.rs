use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::kernel::services::ports::{CodeAreaConfig, Selector, TextSurface};
use crate::models::{SelectorList, TextBuffer};

use super::error::{CodeAreaError, Result};
use super::lines::{first_line, line_char_range};
use super::title::derive_title;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(Uuid);

impl DocId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub text: String,
}

/// Several documents edited through one text surface.
///
/// The surface holds a working copy of the current document only; every
/// operation that changes which document is current, or where it sits in the
/// selector, flushes that copy back into the table first.
pub struct CodeArea<S = TextBuffer, L = SelectorList> {
    pub(super) config: CodeAreaConfig,
    pub(super) surface: S,
    pub(super) selector: L,
    documents: FxHashMap<DocId, String>,
    current: Option<DocId>,
    title: Option<String>,
    pub(super) modified: bool,
}

impl std::fmt::Debug for CodeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeArea")
            .field("current", &self.current)
            .field("title", &self.title)
            .field("documents", &self.documents.len())
            .field("selector", &self.selector.titles())
            .field("modified", &self.modified)
            .finish()
    }
}

impl CodeArea<TextBuffer, SelectorList> {
    pub fn headless(config: CodeAreaConfig) -> Self {
        Self::new(TextBuffer::new(), SelectorList::new(), config)
    }
}

impl<S: TextSurface, L: Selector> CodeArea<S, L> {
    /// Starts with no documents; the first `new_document` or `add` creates one.
    pub fn new(surface: S, selector: L, config: CodeAreaConfig) -> Self {
        Self {
            config,
            surface,
            selector,
            documents: FxHashMap::default(),
            current: None,
            title: None,
            modified: false,
        }
    }

    pub fn config(&self) -> &CodeAreaConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn selector(&self) -> &L {
        &self.selector
    }

    pub fn current_id(&self) -> Option<DocId> {
        self.current
    }

    pub fn current_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Stored text of `id`. For the current document this is the text as of
    /// the last flush, not the live surface.
    pub fn text_of(&self, id: DocId) -> Option<&str> {
        self.documents.get(&id).map(String::as_str)
    }

    /// Unsaved changes across all documents, as tracked for the host.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    pub fn save_current(&mut self) {
        if let Some(id) = self.current {
            self.documents.insert(id, self.surface.text());
        }
    }

    pub fn new_document(&mut self) -> DocId {
        self.save_current();
        self.surface.set_text("");

        let id = DocId::generate();
        let index = self.selector.count();
        self.selector.insert(index, "", id);
        self.documents.insert(id, String::new());
        self.selector.set_current_index(index);
        self.current = Some(id);
        self.title = None;
        self.set_title("");

        tracing::debug!(doc = %id, index, "new document");
        id
    }

    pub fn switch_to(&mut self, id: DocId) -> Result<()> {
        self.save_current();
        let Some(text) = self.documents.get(&id).cloned() else {
            tracing::warn!(doc = %id, "switch to unknown document");
            return Err(CodeAreaError::NotFound(id));
        };

        self.current = Some(id);
        self.surface.set_text(&text);
        self.title = match self.selector.position(id) {
            Some(index) => {
                self.selector.set_current_index(index);
                self.selector.title(index)
            }
            None => None,
        };
        self.set_title(first_line(&text));

        tracing::debug!(doc = %id, "switched document");
        Ok(())
    }

    pub fn add(&mut self, text: &str) -> DocId {
        let id = self.new_document();
        self.surface.set_text(text);
        self.set_title(first_line(text));
        self.save_current();
        id
    }

    /// Moves the selected document one place up. No-op on the first entry.
    pub fn promote(&mut self) -> bool {
        self.save_current();
        let Some(index) = self.selector.current_index() else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.move_entry(index, index - 1)
    }

    /// Moves the selected document one place down. No-op on the last entry.
    pub fn demote(&mut self) -> bool {
        self.save_current();
        let Some(index) = self.selector.current_index() else {
            return false;
        };
        if index + 1 >= self.selector.count() {
            return false;
        }
        self.move_entry(index, index + 1)
    }

    fn move_entry(&mut self, from: usize, to: usize) -> bool {
        let Some(entry) = self.selector.remove(from) else {
            return false;
        };
        self.selector.insert(to, &entry.title, entry.id);
        self.selector.set_current_index(to);
        tracing::debug!(doc = %entry.id, from, to, "moved document");
        true
    }

    /// Re-derives the current document's title from `text`. The selector is
    /// touched only when the title actually changes.
    pub fn set_title(&mut self, text: &str) -> bool {
        let title = derive_title(text, &self.config.untitled_title);
        if self.title.as_deref() == Some(title.as_str()) {
            return false;
        }

        if let Some(index) = self.current.and_then(|id| self.selector.position(id)) {
            self.selector.set_text(index, &title);
        }
        self.title = Some(title);
        true
    }

    pub fn clear(&mut self) {
        self.surface.set_text("");
        self.documents.clear();
        self.selector.clear();
        self.current = None;
        self.title = None;
        tracing::debug!("cleared documents");
    }

    /// Selects 1-based `line` of the current document.
    pub fn select_line(&mut self, line: usize) -> bool {
        if self.current.is_none() {
            return false;
        }
        let (start, end) = line_char_range(&self.surface.text(), line);
        self.surface.set_selection(start, end);
        true
    }

    /// Every document in selector order, after flushing the surface.
    pub fn documents(&mut self) -> Vec<Document> {
        self.save_current();
        (0..self.selector.count())
            .filter_map(|index| {
                let id = self.selector.id(index)?;
                let text = self.documents.get(&id)?.clone();
                Some(Document {
                    id,
                    title: self.selector.title(index).unwrap_or_default(),
                    text,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/codearea/state.rs"]
mod tests;
