use super::NotebookStore;
use crate::error::{NbspliceError, Result};
use crate::model::Notebook;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notebooks: HashMap<PathBuf, Notebook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notebook(mut self, path: impl Into<PathBuf>, notebook: Notebook) -> Self {
        self.notebooks.insert(path.into(), notebook);
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Notebook> {
        self.notebooks.get(path.as_ref())
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl NotebookStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<Notebook> {
        self.notebooks
            .get(path)
            .cloned()
            .ok_or_else(|| NbspliceError::NotebookNotFound(path.to_path_buf()))
    }

    fn save(&mut self, path: &Path, notebook: &Notebook) -> Result<()> {
        self.notebooks.insert(path.to_path_buf(), notebook.clone());
        self.saves += 1;
        Ok(())
    }
}
