//! # Kyakuhon - Node-Graph to Script Converter
//!
//! **Kyakuhon** converts visual node-graph documents, as exported by a
//! node-graph editor, into normalized dialogue script documents: a named,
//! versioned script with a role table and a tree of content entities rooted
//! at one designated node.
//!
//! ## Core Workflow
//!
//! The converter operates on a canonical [`graph::GraphDocument`] and runs a
//! single-pass pipeline over it:
//!
//! 1.  **Load Your Graph**: Parse an editor export with
//!     [`graph::GraphDocument::from_json`] (or `from_file`).
//! 2.  **Classify**: Each node's label is split into lines; the first line
//!     names its [`kind::NodeKind`], the rest are kind-specific payload
//!     (role attributes, a version string, or raw content lines).
//! 3.  **Assemble**: Each association attaches its target uuid as a child of
//!     its source entity, in input order.
//! 4.  **Validate**: The root entity must have exactly one child. Strict
//!     reference checking is available as an opt-in.
//!
//! Conversion is fail-fast: the first malformed node or edge aborts the
//! document with a [`error::ConvertError`] naming the offending node, and no
//! partial output is produced.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kyakuhon::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("path/to/graph.json")?;
//!     let graph = GraphDocument::from_json(&json)?;
//!
//!     let script = Converter::builder(graph)
//!         .with_strict_references()
//!         .build()
//!         .convert()?;
//!
//!     println!("Converted '{}' (version {})", script.name, script.version);
//!     println!("  -> {} roles, {} entities", script.roles.len(), script.entities.len());
//!
//!     script.save("path/to/script.json")?;
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod error;
pub mod graph;
pub mod kind;
pub mod options;
pub mod prelude;
pub mod script;
