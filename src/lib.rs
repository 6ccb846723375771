//! codearea - headless multi-document code editing core
//!
//! Modules:
//! - core: key events and semantic commands
//! - models: in-memory text buffer and document selector
//! - kernel: the code area itself, plus service ports and adapters

pub mod core;
pub mod kernel;
pub mod models;
