//! Tests for graph editing and the node catalog.
mod common;
use blockprint::catalog::{PropertyKind, types};
use blockprint::prelude::*;
use common::*;

#[test]
fn test_add_node_seeds_defaults() {
    let mut graph = Graph::new();
    let give = add(&mut graph, "give");
    let node = graph.node(give).unwrap();
    assert_eq!(node.type_tag, "give");
    assert_eq!(node.property_text("item"), "minecraft:diamond");
    assert_eq!(node.property_number("count"), Some(1.0));
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.add_node("teleport_pad", Position::default()),
        Err(GraphError::UnknownNodeType("teleport_pad".to_string()))
    );
    assert!(graph.is_empty());
}

#[test]
fn test_instances_have_independent_properties() {
    let mut graph = Graph::new();
    let a = say(&mut graph, "first");
    let b = add(&mut graph, "say");
    assert_eq!(graph.node(a).unwrap().property_text("message"), "first");
    assert_eq!(graph.node(b).unwrap().property_text("message"), "Hello World!");
}

#[test]
fn test_connect_validation() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let give = add(&mut graph, "give");
    let count = add(&mut graph, "number");

    assert_eq!(
        graph.connect(give, "Exec", give, "Exec"),
        Err(GraphError::SelfConnection(give))
    );
    assert!(matches!(
        graph.connect(chat, "Target", give, "Exec"),
        Err(GraphError::PinNotFound { side: "output", .. })
    ));
    assert!(matches!(
        graph.connect(chat, "Exec", give, "Command"),
        Err(GraphError::PinNotFound { side: "input", .. })
    ));
    assert_eq!(
        graph.connect(count, "Number", give, "Target"),
        Err(GraphError::KindMismatch {
            from: PinKind::Number,
            to: PinKind::Selector,
        })
    );
    assert_eq!(
        graph.connect(chat, "Exec", give, "Count"),
        Err(GraphError::KindMismatch {
            from: PinKind::Exec,
            to: PinKind::Number,
        })
    );
    assert_eq!(
        graph.connect(NodeId(99), "Exec", give, "Exec"),
        Err(GraphError::NodeNotFound(NodeId(99)))
    );
    assert!(graph.connections().is_empty());

    assert!(graph.connect(count, "Number", give, "Count").is_ok());
    let connection = graph.inbound(give, "Count").unwrap();
    assert_eq!(connection.kind, PinKind::Number);
    assert_eq!(connection.from_node, count);
}

#[test]
fn test_new_connection_replaces_existing_input() {
    let mut graph = Graph::new();
    let give = add(&mut graph, "give");
    let first = add(&mut graph, "selector");
    let second = add(&mut graph, "selector");
    wire(&mut graph, first, "Selector", give, "Target");
    wire(&mut graph, second, "Selector", give, "Target");

    assert_eq!(graph.connections().len(), 1);
    assert_eq!(graph.inbound(give, "Target").unwrap().from_node, second);
}

#[test]
fn test_outputs_fan_out() {
    let mut graph = Graph::new();
    let selector = add(&mut graph, "selector");
    let give = add(&mut graph, "give");
    let kill = add(&mut graph, "kill");
    wire(&mut graph, selector, "Selector", give, "Target");
    wire(&mut graph, selector, "Selector", kill, "Target");
    assert_eq!(graph.connections().len(), 2);
}

#[test]
fn test_disconnect_and_remove_node() {
    let mut graph = create_chat_give_graph();
    let give = NodeId(1);
    assert!(graph.has_inbound_exec(give));

    let removed = graph.disconnect(give, "Exec").unwrap();
    assert_eq!(removed.from_node, NodeId(0));
    assert!(!graph.has_inbound_exec(give));
    assert!(graph.disconnect(give, "Exec").is_none());

    let node = graph.remove_node(give).unwrap();
    assert_eq!(node.type_tag, "give");
    assert!(graph.connections().is_empty());
    assert_eq!(graph.len(), 2);
    assert!(graph.remove_node(give).is_none());
}

#[test]
fn test_ids_are_not_reused() {
    let mut graph = Graph::new();
    let first = add(&mut graph, "say");
    graph.remove_node(first);
    let second = add(&mut graph, "say");
    assert_ne!(first, second);
}

#[test]
fn test_node_order_is_insertion_order() {
    let mut graph = Graph::new();
    let a = add(&mut graph, "say");
    let b = add(&mut graph, "kill");
    let c = add(&mut graph, "give");
    graph.remove_node(b);
    let d = add(&mut graph, "time");
    let order: Vec<NodeId> = graph.nodes().map(|n| n.id).collect();
    assert_eq!(order, vec![a, c, d]);
    assert_eq!(graph.node_ids(), &[a, c, d]);
}

#[test]
fn test_property_and_position_edits() {
    let mut graph = Graph::new();
    let time = add(&mut graph, "time");
    graph.set_property(time, "value", "night").unwrap();
    graph.move_node(time, Position::new(12.0, -4.0)).unwrap();

    let node = graph.node(time).unwrap();
    assert_eq!(node.property_text("value"), "night");
    assert_eq!(node.position, Position::new(12.0, -4.0));
    assert_eq!(
        graph.set_property(NodeId(9), "value", 1),
        Err(GraphError::NodeNotFound(NodeId(9)))
    );
}

#[test]
fn test_catalog_covers_every_type() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 31);
    for tag in [
        types::COMMAND_BLOCK,
        types::CHAT_COMMAND,
        types::SEQUENCE,
        types::ATTRIBUTE,
        types::ITEM_STACK,
        types::VARIABLE_SET,
    ] {
        assert!(catalog.contains(tag), "{}", tag);
    }
    assert!(catalog.get("teleport_pad").is_none());
}

#[test]
fn test_catalog_roles() {
    let catalog = catalog();
    let entries: Vec<&str> = catalog.iter().filter(|d| d.entry).map(|d| d.type_tag).collect();
    assert_eq!(entries, vec!["command_block", "chat_command"]);

    for def in catalog.iter() {
        if def.is_command() {
            assert_eq!(def.value_output, Some("Command"), "{}", def.type_tag);
            assert!(def.output_pin("Command").is_some());
        } else {
            assert_eq!(def.value_output, None, "{}", def.type_tag);
        }
    }

    let sequence = catalog.get(types::SEQUENCE).unwrap();
    let outputs: Vec<&str> = sequence.outputs.iter().map(|p| p.name).collect();
    assert_eq!(outputs, vec!["Then 0", "Then 1", "Then 2"]);

    let iterations = catalog
        .get(types::LOOP)
        .and_then(|def| def.property_definition("iterations"))
        .unwrap();
    assert_eq!(
        iterations.kind,
        PropertyKind::Number {
            min: Some(1),
            max: Some(100)
        }
    );
}

#[test]
fn test_palette_groups_by_category() {
    let palette = catalog().palette();
    let labels: Vec<&str> = palette.iter().map(|group| group.label).collect();
    assert_eq!(labels, vec!["Execution", "Commands", "Selectors", "Data", "Logic"]);

    let execution: Vec<&str> = palette[0].entries.iter().map(|e| e.type_tag).collect();
    assert_eq!(execution, vec!["command_block", "chat_command", "sequence"]);
    assert_eq!(palette[1].entries.len(), 18);

    let total: usize = palette.iter().map(|group| group.entries.len()).sum();
    assert_eq!(total, catalog().len());
}
