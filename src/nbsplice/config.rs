use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INDENT: usize = 2;

/// Configuration for nbsplice, stored in `config.json` in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NbspliceConfig {
    /// Spaces per level when writing the destination notebook
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// End the written file with a newline
    #[serde(default)]
    pub trailing_newline: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for NbspliceConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            trailing_newline: false,
        }
    }
}

impl NbspliceConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NbspliceConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }
}
