use crate::catalog::PinKind;
use crate::graph::NodeId;
use thiserror::Error;

/// Errors raised by editing operations on a [`Graph`](crate::graph::Graph).
///
/// Compilation itself never fails; these only surface when a caller tries to
/// place or wire nodes in a way the editor would refuse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node type '{0}' is not registered in the catalog")]
    UnknownNodeType(String),

    #[error("Node {0} does not exist in the graph")]
    NodeNotFound(NodeId),

    #[error("Node {node_id} ('{type_tag}') has no {side} pin named '{pin_name}'")]
    PinNotFound {
        node_id: NodeId,
        type_tag: String,
        pin_name: String,
        side: &'static str,
    },

    #[error("Node {0} cannot be connected to itself")]
    SelfConnection(NodeId),

    #[error("Cannot connect a {from} pin to a {to} pin")]
    KindMismatch { from: PinKind, to: PinKind },
}

/// Errors that can occur while reading or writing a saved graph document.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse graph document JSON: {0}")]
    JsonParseError(String),

    #[error("Graph document version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Graph document I/O failed for '{path}': {message}")]
    Io { path: String, message: String },
}
