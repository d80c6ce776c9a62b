//! The JSON save format and its conversion back into a [`Graph`](crate::graph::Graph).

mod conversion;
mod format;

pub use conversion::IntoGraph;
pub use format::*;

pub const TRACING_TARGET: &str = "blockprint::document";
