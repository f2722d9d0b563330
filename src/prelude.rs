//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kyakuhon
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kyakuhon::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = GraphDocument::from_file("path/to/graph.json")?;
//! let script = Converter::new(graph).convert()?;
//! println!("Converted script: {}", script.name);
//! # Ok(())
//! # }
//! ```

// Core conversion pipeline
pub use crate::convert::{Converter, ConverterBuilder};

// Input and output document models
pub use crate::graph::{GraphDocument, RawAssociation, RawEntity, TEXT_NODE_TYPE};
pub use crate::script::{DEFAULT_NAME, DEFAULT_VERSION, Entity, Role, ScriptDocument};

// Node kind registry
pub use crate::kind::NodeKind;

// Batch conversion options
pub use crate::options::Options;

// Error types
pub use crate::error::ConvertError;

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
