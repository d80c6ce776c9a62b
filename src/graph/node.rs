use crate::catalog::NodeTypeDefinition;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stable identity of a node inside one [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Editor placement. Presentation only; never read by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A placed occurrence of a node type together with its property values.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInstance {
    pub id: NodeId,
    pub type_tag: String,
    pub position: Position,
    pub properties: Map<String, Value>,
}

impl NodeInstance {
    pub(crate) fn from_definition(id: NodeId, def: &NodeTypeDefinition, position: Position) -> Self {
        Self {
            id,
            type_tag: def.type_tag.to_string(),
            position,
            properties: def.default_properties(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// The property rendered as command text; absent properties are empty.
    pub fn property_text(&self, name: &str) -> String {
        self.properties.get(name).map(value_to_text).unwrap_or_default()
    }

    /// Interprets the property as a checkbox.
    pub fn property_flag(&self, name: &str) -> bool {
        match self.properties.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        }
    }

    /// Interprets the property as a number, accepting numeric strings.
    pub fn property_number(&self, name: &str) -> Option<f64> {
        match self.properties.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Renders a stored property value the way it appears inside a command.
///
/// Whole floating point numbers print without a fractional part, so a count
/// typed as `3.0` still produces `3`.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
