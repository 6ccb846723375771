//! Data models backing the code area's collaborators.

pub mod selection;
pub mod selector;
pub mod text_buffer;

pub use selection::Selection;
pub use selector::SelectorList;
pub use text_buffer::TextBuffer;
