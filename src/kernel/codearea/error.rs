use super::DocId;

pub type Result<T> = std::result::Result<T, CodeAreaError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeAreaError {
    NotFound(DocId),
}

impl std::fmt::Display for CodeAreaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeAreaError::NotFound(id) => write!(f, "Document not found: {}", id),
        }
    }
}

impl std::error::Error for CodeAreaError {}
