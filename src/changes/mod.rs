//! Classifies the difference between two command dumps.
//!
//! An external text editor and the node graph describe the same commands.
//! When the text changes, the caller needs to know whether the graph can be
//! patched in place (only values moved) or has to be rebuilt (the shape of
//! at least one command changed).

mod parser;
mod tokenizer;

pub use parser::{ParsedCommand, Section, parse_command, parse_commands};
pub use tokenizer::tokenize;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const TRACING_TARGET: &str = "blockprint::changes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The texts are identical.
    None,
    /// Commands were added, removed or reshaped.
    Structural,
    /// Same commands with the same shapes; only values differ.
    ValueOnly,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::None => "none",
            ChangeKind::Structural => "structural",
            ChangeKind::ValueOnly => "value_only",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ChangeDetail {
    CommandCountChanged {
        old_count: usize,
        new_count: usize,
    },
    StructureChanged {
        index: usize,
        old: String,
        new: String,
    },
    ValuesChanged {
        index: usize,
        old_values: BTreeMap<String, String>,
        new_values: BTreeMap<String, String>,
    },
}

impl fmt::Display for ChangeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDetail::CommandCountChanged {
                old_count,
                new_count,
            } => write!(f, "command count changed: {} -> {}", old_count, new_count),
            ChangeDetail::StructureChanged { index, old, new } => {
                write!(f, "#{} structure changed: {} -> {}", index, old, new)
            }
            ChangeDetail::ValuesChanged {
                index,
                old_values,
                new_values,
            } => {
                write!(f, "#{} values changed:", index)?;
                for (field, new) in new_values {
                    let old = old_values.get(field).map(String::as_str).unwrap_or("");
                    if old != new {
                        write!(f, " {}: '{}' -> '{}'", field, old, new)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeAnalysis {
    pub kind: ChangeKind,
    pub changes: Vec<ChangeDetail>,
}

/// Compares two command dumps line by line.
pub fn analyze_changes(old: &str, new: &str) -> ChangeAnalysis {
    if old == new {
        return ChangeAnalysis {
            kind: ChangeKind::None,
            changes: Vec::new(),
        };
    }

    let old_commands = parse_commands(old);
    let new_commands = parse_commands(new);
    if old_commands.len() != new_commands.len() {
        tracing::debug!(
            target: TRACING_TARGET,
            old = old_commands.len(),
            new = new_commands.len(),
            "command count changed"
        );
        return ChangeAnalysis {
            kind: ChangeKind::Structural,
            changes: vec![ChangeDetail::CommandCountChanged {
                old_count: old_commands.len(),
                new_count: new_commands.len(),
            }],
        };
    }

    let mut changes = Vec::new();
    let mut structural = false;
    for (index, (before, after)) in old_commands.into_iter().zip(new_commands).enumerate() {
        if before.structure != after.structure {
            structural = true;
            changes.push(ChangeDetail::StructureChanged {
                index,
                old: before.structure,
                new: after.structure,
            });
        } else if before.raw != after.raw {
            changes.push(ChangeDetail::ValuesChanged {
                index,
                old_values: before.values,
                new_values: after.values,
            });
        }
    }

    let kind = if structural {
        ChangeKind::Structural
    } else {
        ChangeKind::ValueOnly
    };
    tracing::debug!(target: TRACING_TARGET, %kind, changes = changes.len(), "analyzed changes");
    ChangeAnalysis { kind, changes }
}

/// Whether syncing `new` into the graph would discard layout, i.e. the
/// change is structural.
pub fn requires_warning(old: &str, new: &str) -> bool {
    analyze_changes(old, new).kind == ChangeKind::Structural
}
