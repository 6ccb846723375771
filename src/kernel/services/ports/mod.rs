//! Service ports: traits + data contracts.

pub mod config;
pub mod selector;
pub mod settings;
pub mod surface;

pub use config::CodeAreaConfig;
pub use selector::{Selector, SelectorEntry};
pub use settings::{KeybindingRule, Settings};
pub use surface::TextSurface;
