//! Ordered list of `(title, id)` entries shown to the user.

use crate::kernel::codearea::DocId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub title: String,
    pub id: DocId,
}

impl SelectorEntry {
    pub fn new(title: impl Into<String>, id: DocId) -> Self {
        Self {
            title: title.into(),
            id,
        }
    }
}

pub trait Selector {
    fn count(&self) -> usize;

    /// Inserts before `index`; an index past the end appends.
    fn insert(&mut self, index: usize, title: &str, id: DocId);

    fn remove(&mut self, index: usize) -> Option<SelectorEntry>;

    fn set_text(&mut self, index: usize, title: &str) -> bool;

    fn title(&self, index: usize) -> Option<String>;

    fn id(&self, index: usize) -> Option<DocId>;

    fn current_index(&self) -> Option<usize>;

    fn set_current_index(&mut self, index: usize) -> bool;

    fn clear(&mut self);

    fn position(&self, id: DocId) -> Option<usize> {
        (0..self.count()).find(|&idx| self.id(idx) == Some(id))
    }
}
