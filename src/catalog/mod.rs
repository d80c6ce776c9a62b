//! The static registry of node types the editor can place.
//!
//! The catalog is built once, on first access, and never mutated afterwards.
//! Graph editing validates against it and the compiler uses it to decide a
//! node's role (entry anchor, command, data source, control construct).

use ahash::AHashMap;
use once_cell::sync::Lazy;

mod builtin;
pub mod definition;

pub use definition::*;

/// Type tags of the built-in node types.
pub mod types {
    pub const COMMAND_BLOCK: &str = "command_block";
    pub const CHAT_COMMAND: &str = "chat_command";
    pub const SEQUENCE: &str = "sequence";

    pub const GIVE: &str = "give";
    pub const SUMMON: &str = "summon";
    pub const EXECUTE: &str = "execute";
    pub const SAY: &str = "say";
    pub const TELLRAW: &str = "tellraw";
    pub const EFFECT: &str = "effect";
    pub const TELEPORT: &str = "teleport";
    pub const SETBLOCK: &str = "setblock";
    pub const FILL: &str = "fill";
    pub const KILL: &str = "kill";
    pub const CUSTOM: &str = "custom";
    pub const GAMEMODE: &str = "gamemode";
    pub const TIME: &str = "time";
    pub const WEATHER: &str = "weather";
    pub const TICK: &str = "tick";
    pub const RIDE: &str = "ride";
    pub const DAMAGE: &str = "damage";
    pub const ATTRIBUTE: &str = "attribute";

    pub const SELECTOR: &str = "selector";
    pub const POSITION: &str = "position";
    pub const NBT: &str = "nbt";
    pub const ITEM_STACK: &str = "item_stack";
    pub const TEXT: &str = "text";
    pub const NUMBER: &str = "number";

    pub const IF_CONDITION: &str = "if_condition";
    pub const LOOP: &str = "loop";
    pub const VARIABLE_GET: &str = "variable_get";
    pub const VARIABLE_SET: &str = "variable_set";
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Returns the process-wide built-in catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Ordered collection of node type definitions, indexed by type tag.
pub struct Catalog {
    definitions: Vec<NodeTypeDefinition>,
    index: AHashMap<&'static str, usize>,
}

/// One palette entry: what the editor lists for a placeable node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub type_tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The node types of a single category, as shown in the editor's palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteCategory {
    pub category: Category,
    pub label: &'static str,
    pub entries: Vec<PaletteEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_definitions(builtin::builtin_definitions())
    }

    /// Builds a catalog from arbitrary definitions. Later duplicates of a
    /// type tag shadow earlier ones in lookups.
    pub fn from_definitions(definitions: Vec<NodeTypeDefinition>) -> Self {
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.type_tag, i))
            .collect();
        Self { definitions, index }
    }

    pub fn get(&self, type_tag: &str) -> Option<&NodeTypeDefinition> {
        self.index.get(type_tag).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.index.contains_key(type_tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeTypeDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Groups the definitions by category, in palette order. Categories
    /// without any node type are left out.
    pub fn palette(&self) -> Vec<PaletteCategory> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let entries: Vec<PaletteEntry> = self
                    .definitions
                    .iter()
                    .filter(|def| def.category == category)
                    .map(|def| PaletteEntry {
                        type_tag: def.type_tag,
                        title: def.title,
                        description: def.description,
                    })
                    .collect();
                (!entries.is_empty()).then(|| PaletteCategory {
                    category,
                    label: category.label(),
                    entries,
                })
            })
            .collect()
    }
}
