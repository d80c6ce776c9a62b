use super::NodeId;
use crate::catalog::PinKind;
use serde::{Deserialize, Serialize};

/// A directed edge from an output pin to an input pin.
///
/// `kind` mirrors the kind of the source pin, which always equals the kind
/// of the destination pin for connections accepted by the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_pin: String,
    pub to_node: NodeId,
    pub to_pin: String,
    pub kind: PinKind,
}

impl Connection {
    pub fn is_exec(&self) -> bool {
        self.kind.is_exec()
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    pub fn leaves(&self, node_id: NodeId, pin: &str) -> bool {
        self.from_node == node_id && self.from_pin == pin
    }

    pub fn enters(&self, node_id: NodeId, pin: &str) -> bool {
        self.to_node == node_id && self.to_pin == pin
    }
}
