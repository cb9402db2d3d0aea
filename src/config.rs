//=====================================================
// File: config.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai interpreter configuration
// Objective: Load optional TOML settings from an explicit path or the user's
//            config directory and fall back to defaults when absent
//=====================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::interpreter::eval::DEFAULT_MAX_DEPTH;

const CONFIG_DIR: &str = "bhanai";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Maximum expression nesting before evaluation is refused.
    pub max_depth: usize,
    /// Print the completion line after a successful run.
    pub completion_message: bool,
    /// Tracing filter used when neither `BHANAI_LOG` nor `RUST_LOG` is set.
    pub log_filter: Option<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            completion_message: true,
            log_filter: None,
        }
    }
}

impl InterpreterConfig {
    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?;
        let config: Self = toml::from_str(&data)
            .with_context(|| format!("parsing configuration {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}


//=====================================================
// End of file
//=====================================================
