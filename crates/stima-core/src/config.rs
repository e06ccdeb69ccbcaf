use std::fs;
use std::path::{Path, PathBuf};

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::category::CategoryDef;
use crate::error::{Result, StimaError};

/// Environment variable naming a table config file
pub const TABLE_ENV: &str = "STIMA_TABLE";

const TABLE_FILE: &str = "table.toml";
const APP_DIR: &str = "stima";

/// Table override file
///
/// ```toml
/// [[category]]
/// key = "Contributo scarso"
/// color = "magenta"
/// patterns = ["ridott(a|e|o|i)", "scars(a|e|o|i)"]
/// help = ["ridott*", "scars*"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryConfigEntry>,
}

/// A single category entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfigEntry {
    /// Display label; replaces the builtin category with the same key
    pub key: String,
    /// Color name, as understood by `colored` ("red", "bright blue", ...)
    pub color: String,
    /// Regex bodies, compiled behind `(?i)\s`
    pub patterns: Vec<String>,
    /// Descriptors for explain output (default: the pattern bodies)
    #[serde(default)]
    pub help: Option<Vec<String>>,
}

impl TableConfig {
    /// Load a table config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| StimaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| StimaError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve which table file to use, if any
    ///
    /// Explicit path (CLI or `STIMA_TABLE`) wins; otherwise
    /// `<config_dir>/stima/table.toml` is used when it exists.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }

        if let Ok(path) = std::env::var(TABLE_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(TABLE_FILE))
            .filter(|p| p.exists())
    }

    /// Convert entries into category definitions
    pub fn to_defs(&self) -> Result<Vec<CategoryDef>> {
        self.categories.iter().map(CategoryConfigEntry::to_def).collect()
    }
}

impl CategoryConfigEntry {
    fn to_def(&self) -> Result<CategoryDef> {
        let color: Color = self
            .color
            .parse()
            .map_err(|_| StimaError::InvalidColor {
                key: self.key.clone(),
                color: self.color.clone(),
            })?;

        let help = self
            .help
            .clone()
            .unwrap_or_else(|| self.patterns.clone());

        Ok(CategoryDef {
            key: self.key.clone(),
            color,
            patterns: self.patterns.clone(),
            help,
        })
    }
}
