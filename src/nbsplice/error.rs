use crate::reference::CellRef;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NbspliceError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Cell not found: {0}")]
    CellNotFound(CellRef),

    #[error("Notebook not found: {}", .0.display())]
    NotebookNotFound(PathBuf),

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NbspliceError>;
