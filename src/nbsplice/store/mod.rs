//! # Storage Layer
//!
//! Notebooks are read and written whole. The [`NotebookStore`] trait keeps the
//! merge pipeline independent of where documents live:
//!
//! - [`fs::FileStore`]: JSON files on disk, pretty printed on save
//! - [`memory::InMemoryStore`]: a path-keyed map, used by tests
//!
//! A store is only written to once per merge, after every other step has
//! succeeded, so a failed run leaves the destination as it was.

use crate::error::Result;
use crate::model::Notebook;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait NotebookStore {
    /// Load the notebook at `path`.
    fn load(&self, path: &Path) -> Result<Notebook>;

    /// Write `notebook` to `path`, replacing whatever is there.
    fn save(&mut self, path: &Path, notebook: &Notebook) -> Result<()>;
}
