use crate::kernel::codearea::DocId;

/// Side effects the host shell applies after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The current document gained unsaved edits.
    MarkModified,
    TitleChanged { id: DocId, title: String },
}
