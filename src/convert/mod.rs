use crate::error::ConvertError;
use crate::graph::GraphDocument;
use crate::script::ScriptDocument;

mod assemble;
mod classify;
mod validate;

use assemble::assemble;
use classify::{NodeEffect, classify};
use validate::validate;

/// Converts one graph document into a script document.
///
/// The conversion runs in three ordered passes over the document:
/// classification (every node, in input order), assembly (every
/// association), and validation. A failure in any pass aborts the
/// conversion; no partial document is produced.
pub struct Converter {
    graph: GraphDocument,
    strict_references: bool,
}

/// Builder for a [`Converter`], used to opt into non-default behavior.
pub struct ConverterBuilder {
    graph: GraphDocument,
    strict_references: bool,
}

impl ConverterBuilder {
    pub fn new(graph: GraphDocument) -> Self {
        Self {
            graph,
            strict_references: false,
        }
    }

    /// Fail the conversion when a child reference does not resolve to an
    /// entity in the document, instead of leaving it for the consumer.
    pub fn with_strict_references(mut self) -> Self {
        self.strict_references = true;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            graph: self.graph,
            strict_references: self.strict_references,
        }
    }
}

impl Converter {
    pub fn builder(graph: GraphDocument) -> ConverterBuilder {
        ConverterBuilder::new(graph)
    }

    /// Creates a converter with default behavior.
    pub fn new(graph: GraphDocument) -> Self {
        Self::builder(graph).build()
    }

    /// Parses a graph document from JSON text and creates a converter for it.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(Self::new(GraphDocument::from_json(json)?))
    }

    /// Runs the full classify → assemble → validate pipeline.
    pub fn convert(self) -> Result<ScriptDocument, ConvertError> {
        let mut document = ScriptDocument::default();

        for raw in &self.graph.entities {
            for effect in classify(raw)? {
                apply(&mut document, effect);
            }
        }

        assemble(&mut document.entities, &self.graph.associations)?;
        validate(&document.entities, self.strict_references)?;

        Ok(document)
    }
}

/// Merges one classification effect into the accumulating document.
///
/// Duplicate role ids and repeated version or root nodes overwrite earlier
/// values; the last node in input order wins.
fn apply(document: &mut ScriptDocument, effect: NodeEffect) {
    match effect {
        NodeEffect::SetVersion(version) => document.version = version,
        NodeEffect::DefineRole(role) => {
            document.roles.insert(role.id.clone(), role);
        }
        NodeEffect::InsertEntity(entity) => {
            document.entities.insert(entity.uuid.clone(), entity);
        }
        NodeEffect::MarkRoot { uuid, name } => {
            document.root = Some(uuid);
            if let Some(name) = name {
                document.name = name;
            }
        }
    }
}
