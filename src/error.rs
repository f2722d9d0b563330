use crate::kind::NodeKind;
use thiserror::Error;

/// Errors that can occur while converting a graph document into a script.
///
/// Every variant carries enough context (keyword, uuid, or label content) to
/// locate the faulty node in the source document. Any of these aborts the
/// conversion of the current document; no partial script is produced.
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParse(String),

    #[error("Unexpected entity type '{entity_type}' on node '{uuid}' (label: {text:?})")]
    UnexpectedEntityType {
        entity_type: String,
        uuid: String,
        text: String,
    },

    #[error("Unknown node kind '{keyword}' on node '{uuid}' (label: {text:?})")]
    UnknownNodeKind {
        keyword: String,
        uuid: String,
        text: String,
    },

    #[error("Role node '{uuid}' is malformed: {message}")]
    RoleParameter { uuid: String, message: String },

    #[error("Node kind '{kind}' on node '{uuid}' has no classification rule")]
    UnhandledKind { kind: NodeKind, uuid: String },

    #[error("Association references unknown source node '{source_uuid}' (target was '{target}')")]
    UnknownAssociationSource { source_uuid: String, target: String },

    #[error("Root node '{uuid}' must have exactly one child, but has {count}")]
    RootChildCount { uuid: String, count: usize },

    #[error("Node '{source_uuid}' references child '{target}', which is not an entity in this document")]
    DanglingChildReference { source_uuid: String, target: String },
}
