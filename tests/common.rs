//! Common test utilities for building graphs.
use blockprint::prelude::*;

/// Places a node at the origin, panicking on unknown types.
#[allow(dead_code)]
pub fn add(graph: &mut Graph, type_tag: &str) -> NodeId {
    graph
        .add_node(type_tag, Position::default())
        .expect("node type should be in the catalog")
}

/// Connects two pins, panicking when the graph refuses.
#[allow(dead_code)]
pub fn wire(graph: &mut Graph, from: NodeId, from_pin: &str, to: NodeId, to_pin: &str) {
    graph
        .connect(from, from_pin, to, to_pin)
        .expect("connection should be accepted");
}

/// Chains `to` after `from` on the `Exec` pins.
#[allow(dead_code)]
pub fn then(graph: &mut Graph, from: NodeId, to: NodeId) {
    wire(graph, from, "Exec", to, "Exec");
}

#[allow(dead_code)]
pub fn set(graph: &mut Graph, node: NodeId, name: &str, value: impl Into<serde_json::Value>) {
    graph
        .set_property(node, name, value)
        .expect("node should exist");
}

/// A `say` node with the given message.
#[allow(dead_code)]
pub fn say(graph: &mut Graph, message: &str) -> NodeId {
    let node = add(graph, "say");
    set(graph, node, "message", message);
    node
}

/// Chat anchor -> give, with a selector feeding the target.
///
/// Compiles to `# In chat` / `give @p minecraft:diamond 1`.
#[allow(dead_code)]
pub fn create_chat_give_graph() -> Graph {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let give = add(&mut graph, "give");
    let player = add(&mut graph, "selector");
    set(&mut graph, player, "base", "@p");
    then(&mut graph, chat, give);
    wire(&mut graph, player, "Selector", give, "Target");
    graph
}

/// A graph touching every control construct and several data nodes.
#[allow(dead_code)]
pub fn create_mixed_graph() -> Graph {
    let mut graph = Graph::new();

    let block = add(&mut graph, "command_block");
    let sequence = add(&mut graph, "sequence");
    let first = say(&mut graph, "first");
    let looped = add(&mut graph, "loop");
    set(&mut graph, looped, "iterations", 2);
    let body = add(&mut graph, "kill");
    let zombies = add(&mut graph, "selector");
    set(&mut graph, zombies, "base", "@e");
    set(&mut graph, zombies, "type", "minecraft:zombie");
    set(&mut graph, zombies, "limit", 3);
    let done = say(&mut graph, "done");

    then(&mut graph, block, sequence);
    wire(&mut graph, sequence, "Then 0", first, "Exec");
    wire(&mut graph, sequence, "Then 1", looped, "Exec");
    wire(&mut graph, looped, "Loop Body", body, "Exec");
    wire(&mut graph, zombies, "Selector", body, "Target");
    wire(&mut graph, looped, "Completed", done, "Exec");

    let chat = add(&mut graph, "chat_command");
    let summon = add(&mut graph, "summon");
    let spot = add(&mut graph, "position");
    set(&mut graph, spot, "x", 10);
    set(&mut graph, spot, "y", 64);
    set(&mut graph, spot, "z", -3);
    set(&mut graph, spot, "type", "Absolute");
    let nbt = add(&mut graph, "nbt");
    set(&mut graph, nbt, "data", "{NoAI:1b}");
    then(&mut graph, chat, summon);
    wire(&mut graph, spot, "Position", summon, "Position");
    wire(&mut graph, nbt, "NBT", summon, "NBT");

    graph
}

/// Lines of the compiled output, with anchor comments split out.
#[allow(dead_code)]
pub fn compiled_lines(graph: &Graph) -> Vec<String> {
    compile(graph).lines().map(str::to_string).collect()
}

/// Routes library logs to the test output. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
