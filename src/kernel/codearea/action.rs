use crate::core::Command;

use super::DocId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeAreaAction {
    NewDocument,
    SwitchTo { id: DocId },
    Add { text: String },
    SaveCurrent,
    Promote,
    Demote,
    SetTitle { text: String },
    Clear,
    SelectLine { line: usize },
    Command(Command),
}
