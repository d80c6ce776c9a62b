use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The palette group a node type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Execution,
    Command,
    Selector,
    Data,
    Logic,
}

impl Category {
    /// All categories in palette order.
    pub const ALL: [Category; 5] = [
        Category::Execution,
        Category::Command,
        Category::Selector,
        Category::Data,
        Category::Logic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Execution => "Execution",
            Category::Command => "Commands",
            Category::Selector => "Selectors",
            Category::Data => "Data",
            Category::Logic => "Logic",
        }
    }
}

/// What flows through a pin: execution control or one of the data kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinKind {
    Exec,
    String,
    Number,
    Selector,
    Position,
    Item,
    Nbt,
}

impl PinKind {
    pub fn is_exec(self) -> bool {
        matches!(self, PinKind::Exec)
    }
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PinKind::Exec => "exec",
            PinKind::String => "string",
            PinKind::Number => "number",
            PinKind::Selector => "selector",
            PinKind::Position => "position",
            PinKind::Item => "item",
            PinKind::Nbt => "nbt",
        };
        f.write_str(name)
    }
}

/// A named, typed attachment point declared by a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDefinition {
    pub name: &'static str,
    pub kind: PinKind,
}

/// How a property is edited. The compiler only cares about the stored value,
/// but the kind carries the editor constraints (options, numeric range).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    Text,
    TextArea,
    Number { min: Option<i64>, max: Option<i64> },
    Checkbox,
    Select(&'static [&'static str]),
    Item,
    Block,
    Entity,
    Attribute,
}

/// A configurable property declared by a node type, with its default value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: PropertyKind,
    pub default: Value,
}

impl PropertyDefinition {
    pub fn text(name: &'static str, label: &'static str, default: &str) -> Self {
        Self::with_kind(name, label, PropertyKind::Text, Value::from(default))
    }

    pub fn text_area(name: &'static str, label: &'static str, default: &str) -> Self {
        Self::with_kind(name, label, PropertyKind::TextArea, Value::from(default))
    }

    pub fn number(name: &'static str, label: &'static str, default: i64) -> Self {
        let kind = PropertyKind::Number {
            min: None,
            max: None,
        };
        Self::with_kind(name, label, kind, Value::from(default))
    }

    pub fn checkbox(name: &'static str, label: &'static str, default: bool) -> Self {
        Self::with_kind(name, label, PropertyKind::Checkbox, Value::from(default))
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &str,
    ) -> Self {
        Self::with_kind(name, label, PropertyKind::Select(options), Value::from(default))
    }

    /// A text property backed by one of the editor's asset pickers.
    pub fn asset(name: &'static str, label: &'static str, kind: PropertyKind, default: &str) -> Self {
        Self::with_kind(name, label, kind, Value::from(default))
    }

    /// Restricts a number property to an inclusive range.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        if let PropertyKind::Number { .. } = self.kind {
            self.kind = PropertyKind::Number {
                min: Some(min),
                max: Some(max),
            };
        }
        self
    }

    fn with_kind(name: &'static str, label: &'static str, kind: PropertyKind, default: Value) -> Self {
        Self {
            name,
            label,
            kind,
            default,
        }
    }
}

/// The immutable description of a node type: its pins, properties and role.
#[derive(Debug, Clone)]
pub struct NodeTypeDefinition {
    pub type_tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Execution anchors (command blocks, chat) start a compile traversal
    /// when nothing drives their `Exec` input.
    pub entry: bool,
    pub inputs: Vec<PinDefinition>,
    pub outputs: Vec<PinDefinition>,
    pub properties: Vec<PropertyDefinition>,
    /// Output pin on which the node hands out its own synthesized command.
    pub value_output: Option<&'static str>,
}

impl NodeTypeDefinition {
    pub fn new(type_tag: &'static str, title: &'static str, category: Category) -> Self {
        Self {
            type_tag,
            title,
            description: "",
            category,
            entry: false,
            inputs: Vec::new(),
            outputs: Vec::new(),
            properties: Vec::new(),
            value_output: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn entry(mut self) -> Self {
        self.entry = true;
        self
    }

    pub fn input(mut self, name: &'static str, kind: PinKind) -> Self {
        self.inputs.push(PinDefinition { name, kind });
        self
    }

    pub fn output(mut self, name: &'static str, kind: PinKind) -> Self {
        self.outputs.push(PinDefinition { name, kind });
        self
    }

    pub fn property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Declares `pin` as the output carrying this node's command as a string.
    pub fn value_output(mut self, pin: &'static str) -> Self {
        self.value_output = Some(pin);
        self
    }

    pub fn input_pin(&self, name: &str) -> Option<&PinDefinition> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output_pin(&self, name: &str) -> Option<&PinDefinition> {
        self.outputs.iter().find(|p| p.name == name)
    }

    pub fn property_definition(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Fresh property values for a new instance, seeded from the declared defaults.
    pub fn default_properties(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|p| (p.name.to_string(), p.default.clone()))
            .collect()
    }

    pub fn is_command(&self) -> bool {
        self.category == Category::Command
    }
}
