//! Multi-document code area: document table, selector sync and key handling.

mod action;
mod error;
mod lines;
mod reducer;
mod state;
mod title;

pub use action::CodeAreaAction;
pub use error::{CodeAreaError, Result};
pub use lines::{first_line, line_char_range, newline_indent};
pub use state::{CodeArea, DocId, Document};
pub use title::derive_title;
