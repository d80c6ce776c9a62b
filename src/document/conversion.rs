use super::TRACING_TARGET;
use super::format::GraphDocument;
use crate::error::DocumentError;
use crate::graph::{Graph, NodeId, Position};
use ahash::AHashMap;

/// A trait for data models that can be turned into a blockprint [`Graph`].
///
/// [`GraphDocument`] implements it for the native save format. Implement it
/// on your own structs to feed graphs from another editor or file format
/// into the compiler.
///
/// # Example
///
/// ```rust,no_run
/// use blockprint::prelude::*;
/// use blockprint::error::DocumentError;
///
/// // 1. Describe your own format.
/// struct Line { player: String, item: String }
/// struct GiftList { lines: Vec<Line> }
///
/// // 2. Map it onto nodes and connections.
/// impl IntoGraph for GiftList {
///     fn into_graph(self) -> std::result::Result<Graph, DocumentError> {
///         let mut graph = Graph::new();
///         let mut previous = graph.add_node("chat_command", Position::default()).ok();
///         for line in self.lines {
///             let give = graph.add_node("give", Position::default()).ok();
///             if let (Some(from), Some(give)) = (previous, give) {
///                 let _ = graph.connect(from, "Exec", give, "Exec");
///                 let _ = graph.set_property(give, "target", line.player);
///                 let _ = graph.set_property(give, "item", line.item);
///             }
///             previous = give;
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and builds the graph it describes.
    fn into_graph(self) -> Result<Graph, DocumentError>;
}

impl IntoGraph for GraphDocument {
    /// Rebuilds the graph, dropping what the catalog cannot place.
    ///
    /// Nodes of unknown types and connections whose nodes or pins cannot be
    /// resolved (or whose pin kinds disagree) are skipped with a warning.
    /// Saved property values are laid over the type's defaults.
    fn into_graph(self) -> Result<Graph, DocumentError> {
        let mut graph = Graph::new();
        let mut ids: AHashMap<u32, NodeId> = AHashMap::with_capacity(self.nodes.len());

        for record in self.nodes {
            let id = match graph.add_node(&record.type_tag, Position::new(record.x, record.y)) {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!(target: TRACING_TARGET, node = record.id, %err, "dropping node");
                    continue;
                }
            };
            if let Some(node) = graph.node_mut(id) {
                node.properties.extend(record.data);
            }
            ids.insert(record.id, id);
        }

        let mut dropped = 0usize;
        for record in self.connections {
            let (Some(&from), Some(&to)) = (ids.get(&record.from_node_id), ids.get(&record.to_node_id))
            else {
                tracing::warn!(
                    target: TRACING_TARGET,
                    from = record.from_node_id,
                    to = record.to_node_id,
                    "dropping connection to a missing node"
                );
                dropped += 1;
                continue;
            };
            if let Err(err) = graph.connect(from, &record.from_pin_name, to, &record.to_pin_name) {
                tracing::warn!(target: TRACING_TARGET, %err, "dropping connection");
                dropped += 1;
            }
        }

        tracing::debug!(
            target: TRACING_TARGET,
            nodes = graph.len(),
            connections = graph.connections().len(),
            dropped,
            "restored graph document"
        );
        Ok(graph)
    }
}
