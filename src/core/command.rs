//! Semantic commands, independent of the keys bound to them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Editing ====================
    InsertChar(char),
    InsertNewline,
    DeleteBackward,

    // ==================== Documents ====================
    NewDocument,
    SaveCurrent,
    PromoteDocument,
    DemoteDocument,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::DeleteBackward => "deleteBackward",
            Command::NewDocument => "newDocument",
            Command::SaveCurrent => "saveCurrent",
            Command::PromoteDocument => "promoteDocument",
            Command::DemoteDocument => "demoteDocument",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]. `insertChar` has no payload to parse and
    /// falls through to `Custom` like any unknown name.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "insertNewline" => Command::InsertNewline,
            "deleteBackward" => Command::DeleteBackward,
            "newDocument" => Command::NewDocument,
            "saveCurrent" => Command::SaveCurrent,
            "promoteDocument" => Command::PromoteDocument,
            "demoteDocument" => Command::DemoteDocument,
            other => Command::Custom(other.to_string()),
        }
    }
}
