use crate::graph::{Connection, Graph, NodeId};
use ahash::AHashMap;

/// Per-compile lookup tables over the connection list.
///
/// Built once per pass so that traversal and resolution do not rescan every
/// connection for each pin they touch.
pub struct Routing<'g> {
    inbound: AHashMap<NodeId, Vec<&'g Connection>>,
    outbound: AHashMap<NodeId, Vec<&'g Connection>>,
}

impl<'g> Routing<'g> {
    pub fn build(graph: &'g Graph) -> Self {
        Self::from_connections(graph.connections())
    }

    /// Indexes a raw connection list without the graph's one-inbound rule.
    pub(crate) fn from_connections(connections: &'g [Connection]) -> Self {
        let mut inbound: AHashMap<NodeId, Vec<&'g Connection>> = AHashMap::new();
        let mut outbound: AHashMap<NodeId, Vec<&'g Connection>> = AHashMap::new();
        for connection in connections {
            inbound.entry(connection.to_node).or_default().push(connection);
            outbound
                .entry(connection.from_node)
                .or_default()
                .push(connection);
        }
        Self { inbound, outbound }
    }

    /// The connection feeding `pin` on `node`.
    pub fn inbound(&self, node: NodeId, pin: &str) -> Option<&'g Connection> {
        self.inbound
            .get(&node)?
            .iter()
            .copied()
            .find(|c| c.enters(node, pin))
    }

    /// The first connection leaving `pin` on `node`, in connection order.
    pub fn outgoing(&self, node: NodeId, pin: &str) -> Option<&'g Connection> {
        self.outbound
            .get(&node)?
            .iter()
            .copied()
            .find(|c| c.leaves(node, pin))
    }

    /// The first execution connection leaving `node` through any pin.
    pub fn next_exec(&self, node: NodeId) -> Option<&'g Connection> {
        self.outbound
            .get(&node)?
            .iter()
            .copied()
            .find(|c| c.is_exec())
    }

    pub fn has_inbound_exec(&self, node: NodeId) -> bool {
        self.inbound
            .get(&node)
            .is_some_and(|conns| conns.iter().any(|c| c.is_exec()))
    }
}
