use super::NotebookStore;
use crate::config::NbspliceConfig;
use crate::error::{NbspliceError, Result};
use crate::model::Notebook;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub struct FileStore {
    indent: String,
    trailing_newline: bool,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self::from_config(&NbspliceConfig::default())
    }

    pub fn from_config(config: &NbspliceConfig) -> Self {
        Self {
            indent: " ".repeat(config.indent),
            trailing_newline: config.trailing_newline,
        }
    }

    fn parse_error(path: &Path, message: impl Into<String>) -> NbspliceError {
        NbspliceError::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    fn render(&self, notebook: &Notebook) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        notebook.serialize(&mut ser)?;
        if self.trailing_newline {
            buf.push(b'\n');
        }
        Ok(buf)
    }
}

impl NotebookStore for FileStore {
    fn load(&self, path: &Path) -> Result<Notebook> {
        if !path.exists() {
            return Err(NbspliceError::NotebookNotFound(path.to_path_buf()));
        }
        let content = fs::read(path)?;
        let value: Value =
            serde_json::from_slice(&content).map_err(|e| Self::parse_error(path, e.to_string()))?;
        let notebook = Notebook::from_value(value).map_err(|e| Self::parse_error(path, e))?;
        tracing::info!(path = %path.display(), cells = notebook.cells().len(), "loaded notebook");
        Ok(notebook)
    }

    fn save(&mut self, path: &Path, notebook: &Notebook) -> Result<()> {
        let content = self.render(notebook)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), cells = notebook.cells().len(), "saved notebook");
        Ok(())
    }
}
