//! The normalized script document the converter produces.

use crate::kind::NodeKind;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Placeholder script name, overwritten by the root node's second label line.
pub const DEFAULT_NAME: &str = "untitled";

/// Placeholder version, overwritten by a `version` node's second label line.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A named table of free-form string attributes, declared once per document
/// by a `role` node and keyed by its mandatory `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(flatten)]
    pub attributes: AHashMap<String, String>,
}

/// A content-bearing node retained in the script tree.
///
/// `children` holds uuids, not resolved entities; references are one level
/// deep and resolution is left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub uuid: String,
    pub kind: NodeKind,
    pub payload: Vec<String>,
    pub children: Vec<String>,
}

/// The converted script: a named, versioned document with a role table and
/// a tree of entities anchored at `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptDocument {
    pub name: String,
    pub version: String,
    pub roles: AHashMap<String, Role>,
    pub entities: AHashMap<String, Entity>,
    pub root: Option<String>,
}

impl Default for ScriptDocument {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            roles: AHashMap::new(),
            entities: AHashMap::new(),
            root: None,
        }
    }
}

impl ScriptDocument {
    /// Serializes the document as formatted JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the document as formatted JSON to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
