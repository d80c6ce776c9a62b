//! # Blockprint - Command Block Graph Compiler
//!
//! **Blockprint** turns a visual node graph of Minecraft commands into the
//! linear list of commands a command-block contraption (or a chat session)
//! runs. Execution edges decide the order, data edges carry selectors,
//! positions, items and text into the commands that use them.
//!
//! ## Core Workflow
//!
//! 1.  **Build or Load a Graph**: Place nodes with [`Graph::add_node`](graph::Graph::add_node)
//!     and wire them with [`Graph::connect`](graph::Graph::connect), or load a saved
//!     [`GraphDocument`](document::GraphDocument) and turn it into a graph with [`IntoGraph`](document::IntoGraph).
//! 2.  **Compile**: Use a [`Compiler`](compiler::Compiler) (or the `compile` shortcut) to walk the
//!     graph from its entry nodes and emit one line per command.
//! 3.  **Sync**: When the emitted text is edited elsewhere, [`analyze_changes`](changes::analyze_changes)
//!     tells whether the edit only changed values or reshaped the commands.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blockprint::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = Graph::new();
//!     let chat = graph.add_node("chat_command", Position::new(0.0, 0.0))?;
//!     let give = graph.add_node("give", Position::new(240.0, 0.0))?;
//!     let player = graph.add_node("selector", Position::new(0.0, 160.0))?;
//!
//!     graph.set_property(player, "base", "@p")?;
//!     graph.connect(chat, "Exec", give, "Exec")?;
//!     graph.connect(player, "Selector", give, "Target")?;
//!
//!     let commands = compile(&graph);
//!     println!("{}", commands);
//!     // # In chat
//!     // give @p minecraft:diamond 1
//!
//!     let edited = commands.replace("diamond", "emerald");
//!     let analysis = analyze_changes(&commands, &edited);
//!     assert_eq!(analysis.kind, ChangeKind::ValueOnly);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod changes;
pub mod compiler;
pub mod document;
pub mod error;
pub mod graph;
pub mod prelude;
