//! Cell references: how a user points at a cell.
//!
//! A reference is either a position in a cell sequence or the `metadata.id`
//! of a cell. Command-line tokens are converted exactly once, at the edge:
//! a token made only of ASCII digits is a position, anything else is an id.
//! Past that point the two cases are never confused.

use crate::error::{NbspliceError, Result};
use crate::model::Cell;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellRef {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellRef::Index(i) => write!(f, "index {}", i),
            CellRef::Id(id) => write!(f, "id \"{}\"", id),
        }
    }
}

impl FromStr for CellRef {
    type Err = NbspliceError;

    fn from_str(s: &str) -> Result<Self> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse()
                .map(CellRef::Index)
                .map_err(|_| NbspliceError::Usage(format!("Cell index too large: {}", s)));
        }
        Ok(CellRef::Id(s.to_string()))
    }
}

impl From<usize> for CellRef {
    fn from(index: usize) -> Self {
        CellRef::Index(index)
    }
}

impl From<&str> for CellRef {
    fn from(id: &str) -> Self {
        CellRef::Id(id.to_string())
    }
}

impl CellRef {
    /// Whether this reference names the cell at `index`.
    pub fn matches(&self, index: usize, cell: &Cell) -> bool {
        match self {
            CellRef::Index(i) => *i == index,
            CellRef::Id(id) => cell.id() == Some(id.as_str()),
        }
    }
}

/// Resolves a reference to a position in `cells`.
///
/// Indexes past the end of the sequence are rejected rather than clamped.
pub fn resolve(cells: &[Cell], reference: &CellRef) -> Result<usize> {
    let found = match reference {
        CellRef::Index(i) => (*i < cells.len()).then_some(*i),
        CellRef::Id(id) => cells.iter().position(|c| c.id() == Some(id.as_str())),
    };
    tracing::debug!(%reference, ?found, len = cells.len(), "resolving cell reference");
    found.ok_or_else(|| NbspliceError::CellNotFound(reference.clone()))
}

/// Parses a list of user tokens into references.
pub fn parse_refs<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<CellRef>> {
    inputs.iter().map(|s| CellRef::from_str(s.as_ref())).collect()
}
