use serde::{Deserialize, Serialize};

pub const DEFAULT_UNTITLED_TITLE: &str = "Untitled";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeAreaConfig {
    /// Extra indent added after a line ending in `:`.
    pub indent_width: usize,
    pub auto_indent: bool,
    pub untitled_title: String,
}

impl Default for CodeAreaConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            auto_indent: true,
            untitled_title: DEFAULT_UNTITLED_TITLE.to_string(),
        }
    }
}
