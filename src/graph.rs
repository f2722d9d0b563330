//! The raw graph document model, matching the JSON format the visual editor
//! exports. Fields the converter does not use (geometry, styling) are
//! ignored during deserialization.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The entity `type` tag the converter accepts. Everything else is rejected
/// during classification.
pub const TEXT_NODE_TYPE: &str = "core:text_node";

/// One exported graph file: the node list plus the directed edge list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub entities: Vec<RawEntity>,
    #[serde(default)]
    pub associations: Vec<RawAssociation>,
}

/// A raw node as the editor wrote it: a type tag, a uuid, and a
/// newline-delimited label whose first line names the node kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub uuid: String,
    pub text: String,
}

/// A directed edge between two node uuids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAssociation {
    pub source: String,
    pub target: String,
}

impl GraphDocument {
    /// Parses a graph document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::JsonParse(e.to_string()))
    }

    /// Reads and parses a graph document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
