//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the blockprint crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use blockprint::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = GraphDocument::from_file("path/to/graph.json")?.into_graph()?;
//! let compiler = Compiler::builder().build();
//! println!("{}", compiler.compile(&graph));
//! # Ok(())
//! # }
//! ```

// Node catalog
pub use crate::catalog::{Catalog, Category, NodeTypeDefinition, PinKind, catalog};

// Graph model and save format
pub use crate::document::{GraphDocument, IntoGraph, Viewport};
pub use crate::graph::{Connection, Graph, NodeId, NodeInstance, Position};

// Compilation
pub use crate::compiler::{
    CommandSynthesizer, Compiler, CompilerBuilder, NodeContext, Resolver, ValueProducer, compile,
};

// Change classification
pub use crate::changes::{ChangeAnalysis, ChangeDetail, ChangeKind, analyze_changes, requires_warning};

// Error types
pub use crate::error::{DocumentError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
