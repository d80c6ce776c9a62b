//! In-memory node graph: an arena of node instances keyed by [`NodeId`] and
//! the connections between their pins.
//!
//! Connections reference nodes by id only, so execution cycles in the graph
//! never turn into ownership cycles. Node insertion order is preserved
//! because the compiler visits entry nodes in that order.

use crate::catalog::{NodeTypeDefinition, PinKind, catalog};
use crate::error::GraphError;
use ahash::AHashMap;
use serde_json::Value;

mod connection;
mod node;

pub use connection::*;
pub use node::*;

pub const TRACING_TARGET: &str = "blockprint::graph";

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: AHashMap<NodeId, NodeInstance>,
    order: Vec<NodeId>,
    connections: Vec<Connection>,
    next_id: u32,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new node of `type_tag`, with its properties seeded from the
    /// catalog defaults.
    pub fn add_node(&mut self, type_tag: &str, position: Position) -> Result<NodeId, GraphError> {
        let def = catalog()
            .get(type_tag)
            .ok_or_else(|| GraphError::UnknownNodeType(type_tag.to_string()))?;

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes
            .insert(id, NodeInstance::from_definition(id, def, position));
        self.order.push(id);
        Ok(id)
    }

    /// Removes a node and every connection touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<NodeInstance> {
        let node = self.nodes.remove(&id)?;
        self.order.retain(|n| *n != id);
        self.connections.retain(|c| !c.touches(id));
        tracing::debug!(
            target: TRACING_TARGET,
            node = %id,
            type_tag = %node.type_tag,
            "removed node and its connections"
        );
        Some(node)
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeInstance> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeInstance> {
        self.nodes.get_mut(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeInstance> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The catalog definition of a node's type.
    pub fn definition(&self, id: NodeId) -> Option<&'static NodeTypeDefinition> {
        self.nodes.get(&id).and_then(|n| catalog().get(&n.type_tag))
    }

    pub fn set_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.properties.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.position = position;
        Ok(())
    }

    /// Connects an output pin to an input pin.
    ///
    /// Both pins must exist on the correct side and share a kind. An input
    /// accepts a single connection, so any existing connection into
    /// `to_pin` is replaced.
    pub fn connect(
        &mut self,
        from: NodeId,
        from_pin: &str,
        to: NodeId,
        to_pin: &str,
    ) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfConnection(from));
        }
        let source = self.pin_of(from, from_pin, Side::Output)?;
        let target = self.pin_of(to, to_pin, Side::Input)?;
        if source != target {
            return Err(GraphError::KindMismatch {
                from: source,
                to: target,
            });
        }

        self.connections.retain(|c| !c.enters(to, to_pin));
        self.connections.push(Connection {
            from_node: from,
            from_pin: from_pin.to_string(),
            to_node: to,
            to_pin: to_pin.to_string(),
            kind: source,
        });
        Ok(())
    }

    /// Removes the connection feeding `to_pin`, if any.
    pub fn disconnect(&mut self, to: NodeId, to_pin: &str) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.enters(to, to_pin))?;
        Some(self.connections.remove(index))
    }

    /// The connection feeding an input pin.
    ///
    /// Editor-facing query over the live graph. Compilation indexes the
    /// connections once per pass instead.
    pub fn inbound(&self, to: NodeId, to_pin: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.enters(to, to_pin))
    }

    /// Whether anything drives `id` through an execution pin, i.e. whether
    /// the editor should draw it as part of a chain rather than a root.
    pub fn has_inbound_exec(&self, id: NodeId) -> bool {
        self.connections
            .iter()
            .any(|c| c.to_node == id && c.is_exec())
    }

    fn pin_of(&self, id: NodeId, pin: &str, side: Side) -> Result<PinKind, GraphError> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        let def = catalog()
            .get(&node.type_tag)
            .ok_or_else(|| GraphError::UnknownNodeType(node.type_tag.clone()))?;
        let found = match side {
            Side::Input => def.input_pin(pin),
            Side::Output => def.output_pin(pin),
        };
        found.map(|p| p.kind).ok_or_else(|| GraphError::PinNotFound {
            node_id: id,
            type_tag: node.type_tag.clone(),
            pin_name: pin.to_string(),
            side: side.label(),
        })
    }
}

#[derive(Clone, Copy)]
enum Side {
    Input,
    Output,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Input => "input",
            Side::Output => "output",
        }
    }
}
