//! In-memory document selector: ordered entries plus the selected index.

use crate::kernel::codearea::DocId;
use crate::kernel::services::ports::{Selector, SelectorEntry};

#[derive(Debug, Clone, Default)]
pub struct SelectorList {
    entries: Vec<SelectorEntry>,
    current: Option<usize>,
}

impl SelectorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn ids(&self) -> Vec<DocId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

impl Selector for SelectorList {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, index: usize, title: &str, id: DocId) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, SelectorEntry::new(title, id));
        // The selected entry stays selected; an empty list selects its first entry.
        self.current = match self.current {
            Some(current) if current >= index => Some(current + 1),
            Some(current) => Some(current),
            None => Some(index),
        };
    }

    fn remove(&mut self, index: usize) -> Option<SelectorEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.current = match self.current {
            _ if self.entries.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) => Some(current.min(self.entries.len() - 1)),
            None => None,
        };
        Some(entry)
    }

    fn set_text(&mut self, index: usize, title: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        if entry.title == title {
            return false;
        }
        entry.title = title.to_string();
        true
    }

    fn title(&self, index: usize) -> Option<String> {
        self.entries.get(index).map(|e| e.title.clone())
    }

    fn id(&self, index: usize) -> Option<DocId> {
        self.entries.get(index).map(|e| e.id)
    }

    fn current_index(&self) -> Option<usize> {
        self.current
    }

    fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || self.current == Some(index) {
            return false;
        }
        self.current = Some(index);
        true
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selector.rs"]
mod tests;
