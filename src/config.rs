//! Editor configuration, read from a JSON file.

use crate::error::{EditorError, Result};
use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_FOOTER_TEXT: &str = " Toy Editor  -  Ctrl-Q to quit  -  Ctrl-S to save";

/// Serializable color: `[r, g, b]`, one of the eight terminal color names
/// such as `"blue"`, or `"reset"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Rgb(u8, u8, u8),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Builtin theme name ("classic", "dark")
    pub theme: String,

    /// Text shown in the footer bar
    pub footer_text: String,

    /// Re-classify only the rows touched by an edit instead of the whole document
    pub incremental_highlight: bool,

    /// Per-tag foreground overrides applied on top of the theme
    pub syntax: HashMap<Tag, ColorDef>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            incremental_highlight: false,
            syntax: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EditorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| EditorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `explicit` if given, failing loudly; otherwise try `fallback`,
    /// falling back to defaults when it is absent or broken.
    pub fn load_or_default(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        let Some(path) = fallback.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Ok(Self::default())
            }
        }
    }
}
