use crate::error::DocumentError;
use crate::graph::{Graph, NodeId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The only save format version this crate reads and writes.
pub const DOCUMENT_VERSION: u32 = 1;

/// Editor camera state. Stored so a document reopens where it was left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

fn default_zoom() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub from_node_id: u32,
    pub from_pin_name: String,
    pub to_node_id: u32,
    pub to_pin_name: String,
    /// Pin kind as written by the editor. Informational; the catalog decides
    /// the kind again on load.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// The versioned JSON save format of a graph.
///
/// Node ids in a document are positions in the node list, so they are
/// dense and independent of the ids the graph used in memory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphDocument {
    pub version: u32,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

impl GraphDocument {
    /// Snapshots a graph with the default viewport.
    pub fn from_graph(graph: &Graph) -> Self {
        Self::from_graph_with_viewport(graph, Viewport::default())
    }

    pub fn from_graph_with_viewport(graph: &Graph, viewport: Viewport) -> Self {
        let index_of: AHashMap<NodeId, u32> = graph
            .node_ids()
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index as u32))
            .collect();

        let nodes = graph
            .nodes()
            .enumerate()
            .map(|(index, node)| NodeRecord {
                id: index as u32,
                type_tag: node.type_tag.clone(),
                x: node.position.x,
                y: node.position.y,
                data: node.properties.clone(),
            })
            .collect();

        let connections = graph
            .connections()
            .iter()
            .filter_map(|c| {
                Some(ConnectionRecord {
                    from_node_id: *index_of.get(&c.from_node)?,
                    from_pin_name: c.from_pin.clone(),
                    to_node_id: *index_of.get(&c.to_node)?,
                    to_pin_name: c.to_pin.clone(),
                    kind: c.kind.to_string(),
                })
            })
            .collect();

        Self {
            version: DOCUMENT_VERSION,
            viewport,
            nodes,
            connections,
        }
    }

    /// Parses a document, rejecting versions other than [`DOCUMENT_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: GraphDocument = serde_json::from_str(json)
            .map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        if document.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: document.version,
                expected: DOCUMENT_VERSION,
            });
        }
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Loads a document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| DocumentError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
