//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every nbsplice operation, whatever the UI.
//!
//! It:
//! - **Normalizes inputs**: raw tokens become [`CellRef`]s, flag sets become a
//!   single [`Selection`] and [`Placement`]
//! - **Dispatches** to the command functions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Usage errors are raised here, before any notebook is loaded.
//!
//! `NbspliceApi<S: NotebookStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::reference::parse_refs;
use crate::store::NotebookStore;
use std::path::Path;
use std::str::FromStr;

pub struct NbspliceApi<S: NotebookStore> {
    store: S,
}

impl<S: NotebookStore> NbspliceApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn merge(
        &mut self,
        source: &Path,
        dest: &Path,
        selection: &Selection,
        placement: &Placement,
    ) -> Result<commands::CmdResult> {
        commands::merge::run(&mut self.store, source, dest, selection, placement)
    }

    /// Like [`merge`](Self::merge), starting from flag-style inputs.
    pub fn merge_flags(
        &mut self,
        source: &Path,
        dest: &Path,
        selection: SelectionFlags,
        placement: PlacementFlags,
    ) -> Result<commands::CmdResult> {
        let selection = selection.into_selection()?;
        let placement = placement.into_placement()?;
        self.merge(source, dest, &selection, &placement)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Parses one user token into a reference.
pub fn parse_ref(input: &str) -> Result<CellRef> {
    CellRef::from_str(input)
}

/// Parses an optional user token into a reference.
pub fn parse_opt_ref(input: Option<&str>) -> Result<Option<CellRef>> {
    input.map(parse_ref).transpose()
}

/// Parses a list of user tokens; an absent or empty list yields `None`.
pub fn parse_ref_list<I: AsRef<str>>(inputs: Option<&[I]>) -> Result<Option<Vec<CellRef>>> {
    match inputs {
        Some(inputs) if !inputs.is_empty() => parse_refs(inputs).map(Some),
        _ => Ok(None),
    }
}

pub use crate::commands::insert::{Placement, PlacementFlags};
pub use crate::commands::select::{Selection, SelectionFlags};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::reference::CellRef;
