//! End-to-end compilation tests: graph in, command text out.
mod common;
use blockprint::compiler::{MAX_LOOP_ITERATIONS, NodeContext, clamp_iterations};
use blockprint::prelude::*;
use common::*;

#[test]
fn test_chat_anchor_give() {
    let graph = create_chat_give_graph();
    assert_eq!(
        compiled_lines(&graph),
        vec!["# In chat", "give @p minecraft:diamond 1"]
    );
}

#[test]
fn test_empty_graph_compiles_to_nothing() {
    assert_eq!(compile(&Graph::new()), "");
}

#[test]
fn test_graph_without_entries_compiles_to_nothing() {
    let mut graph = Graph::new();
    let first = say(&mut graph, "orphan");
    let second = add(&mut graph, "kill");
    then(&mut graph, first, second);
    assert_eq!(compile(&graph), "");
}

#[test]
fn test_command_block_settings() {
    let mut graph = Graph::new();
    let block = add(&mut graph, "command_block");
    set(&mut graph, block, "blockType", "Impulse");
    set(&mut graph, block, "conditional", true);
    set(&mut graph, block, "needsRedstone", true);
    set(&mut graph, block, "command", "say armed");

    assert_eq!(compiled_lines(&graph), vec!["# Command block", "[ICN] say armed"]);
}

#[test]
fn test_chained_command_block_is_chain_type() {
    let mut graph = Graph::new();
    let head = add(&mut graph, "command_block");
    let chained = add(&mut graph, "command_block");
    set(&mut graph, chained, "blockType", "Repeating");
    set(&mut graph, chained, "command", "say second");
    then(&mut graph, head, chained);

    assert_eq!(
        compiled_lines(&graph),
        vec!["# Command block", "[RUA]", "# Command block", "[CUA] say second"]
    );
}

#[test]
fn test_command_node_as_value() {
    let mut graph = Graph::new();
    let block = add(&mut graph, "command_block");
    let greeting = say(&mut graph, "hello");
    wire(&mut graph, greeting, "Command", block, "Command");

    // The say node is only a value source; it is not on the execution path.
    assert_eq!(compiled_lines(&graph), vec!["# Command block", "[RUA] say hello"]);
}

#[test]
fn test_execute_wraps_run_command() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let execute = add(&mut graph, "execute");
    let players = add(&mut graph, "selector");
    let inner = say(&mut graph, "hi");
    set(&mut graph, execute, "positioned", "~ ~1 ~");
    then(&mut graph, chat, execute);
    wire(&mut graph, players, "Selector", execute, "As");
    wire(&mut graph, inner, "Command", execute, "Run");

    assert_eq!(
        compiled_lines(&graph),
        vec!["# In chat", "execute as @a positioned ~ ~1 ~ run say hi"]
    );
}

#[test]
fn test_execute_without_run_emits_nothing() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let execute = add(&mut graph, "execute");
    let after = say(&mut graph, "after");
    then(&mut graph, chat, execute);
    then(&mut graph, execute, after);

    assert_eq!(compiled_lines(&graph), vec!["# In chat", "say after"]);
}

#[test]
fn test_command_defaults() {
    let cases: Vec<(&str, Vec<(&str, serde_json::Value)>, &str)> = vec![
        ("kill", vec![], "kill @e"),
        ("summon", vec![], "summon minecraft:pig ~ ~ ~"),
        ("tellraw", vec![("text", "\"hi\"".into())], "tellraw @a \"hi\""),
        ("teleport", vec![("x", "1".into()), ("y", "2".into())], "tp @s 1 2 ~"),
        ("effect", vec![], "effect give @s minecraft:speed 30 0"),
        ("effect", vec![("action", "clear".into())], "effect clear @s minecraft:speed"),
        ("setblock", vec![], "setblock ~ ~ ~ minecraft:stone replace"),
        ("fill", vec![], "fill minecraft:stone replace minecraft:air"),
        ("fill", vec![("mode", "hollow".into())], "fill minecraft:stone hollow"),
        ("gamemode", vec![], "gamemode creative @s"),
        ("time", vec![], "time set day"),
        ("time", vec![("value", "".into())], "time set 1000"),
        ("time", vec![("action", "query".into()), ("value", "".into())], "time query"),
        ("weather", vec![], "weather clear"),
        ("weather", vec![("type", "rain".into()), ("duration", 600.into())], "weather rain 600"),
        ("tick", vec![], "tick freeze"),
        ("tick", vec![("action", "rate".into()), ("value", "40".into())], "tick rate 40"),
        ("ride", vec![], "ride @s mount @e[limit=1,sort=nearest]"),
        ("ride", vec![("action", "dismount".into())], "ride @s dismount"),
        ("damage", vec![], "damage @s 1 minecraft:generic"),
        ("damage", vec![("attacker", "@p".into())], "damage @s 1 minecraft:generic by @p"),
        ("custom", vec![], "say Hello"),
    ];

    for (type_tag, properties, expected) in cases {
        let mut graph = Graph::new();
        let chat = add(&mut graph, "chat_command");
        let node = add(&mut graph, type_tag);
        for (name, value) in properties {
            set(&mut graph, node, name, value);
        }
        then(&mut graph, chat, node);
        assert_eq!(
            compiled_lines(&graph),
            vec!["# In chat", expected],
            "unexpected output for {}",
            type_tag
        );
    }
}

#[test]
fn test_attribute_forms() {
    let cases = [
        ("get", "attribute @s generic.max_health get"),
        ("base_get", "attribute @s generic.max_health base get"),
        ("base_set", "attribute @s generic.max_health base set 0"),
        (
            "modifier_add",
            "attribute @s generic.max_health modifier add 0-0-0-0-0 modification 0 add",
        ),
        ("modifier_remove", "attribute @s generic.max_health modifier remove 0-0-0-0-0"),
        (
            "modifier_value_get",
            "attribute @s generic.max_health modifier value get 0-0-0-0-0",
        ),
    ];

    for (action, expected) in cases {
        let mut graph = Graph::new();
        let chat = add(&mut graph, "chat_command");
        let node = add(&mut graph, "attribute");
        set(&mut graph, node, "action", action);
        then(&mut graph, chat, node);
        assert_eq!(compiled_lines(&graph), vec!["# In chat", expected]);
    }
}

#[test]
fn test_unknown_attribute_action_emits_nothing() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let node = add(&mut graph, "attribute");
    set(&mut graph, node, "action", "explode");
    then(&mut graph, chat, node);
    assert_eq!(compiled_lines(&graph), vec!["# In chat"]);
}

#[test]
fn test_loop_iteration_clamping() {
    for (requested, expected) in [(-5, 1), (0, 1), (1, 1), (100, 100), (101, 100), (1000, 100)] {
        let mut graph = Graph::new();
        let chat = add(&mut graph, "chat_command");
        let looped = add(&mut graph, "loop");
        set(&mut graph, looped, "iterations", requested);
        then(&mut graph, chat, looped);

        let markers = compiled_lines(&graph)
            .iter()
            .filter(|line| line.starts_with("# Loop Iteration"))
            .count();
        assert_eq!(markers, expected, "iterations = {}", requested);
    }
}

#[test]
fn test_clamp_iterations() {
    assert_eq!(clamp_iterations(-5.0), 1);
    assert_eq!(clamp_iterations(2.9), 2);
    assert_eq!(clamp_iterations(f64::NAN), 1);
    assert_eq!(clamp_iterations(f64::INFINITY), 1);
    assert_eq!(clamp_iterations(1e9), MAX_LOOP_ITERATIONS);
}

#[test]
fn test_loop_unrolls_body_then_completes() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let looped = add(&mut graph, "loop");
    set(&mut graph, looped, "iterations", 3);
    let body = say(&mut graph, "tick");
    let done = say(&mut graph, "done");
    then(&mut graph, chat, looped);
    wire(&mut graph, looped, "Loop Body", body, "Exec");
    wire(&mut graph, looped, "Completed", done, "Exec");

    assert_eq!(
        compiled_lines(&graph),
        vec![
            "# In chat",
            "# Loop Iteration 1/3",
            "say tick",
            "# Loop Iteration 2/3",
            "say tick",
            "# Loop Iteration 3/3",
            "say tick",
            "say done",
        ]
    );
}

#[test]
fn test_loop_count_from_connected_number() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let looped = add(&mut graph, "loop");
    let count = add(&mut graph, "number");
    set(&mut graph, count, "value", 2);
    then(&mut graph, chat, looped);
    wire(&mut graph, count, "Number", looped, "Count");

    assert_eq!(
        compiled_lines(&graph),
        vec!["# In chat", "# Loop Iteration 1/2", "# Loop Iteration 2/2"]
    );
}

#[test]
fn test_sequence_follows_declared_order() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let sequence = add(&mut graph, "sequence");
    let a = say(&mut graph, "a");
    let b = say(&mut graph, "b");
    let c = say(&mut graph, "c");
    then(&mut graph, chat, sequence);
    // Connected out of order on purpose.
    wire(&mut graph, sequence, "Then 2", c, "Exec");
    wire(&mut graph, sequence, "Then 0", a, "Exec");
    wire(&mut graph, sequence, "Then 1", b, "Exec");

    assert_eq!(
        compiled_lines(&graph),
        vec!["# In chat", "say a", "say b", "say c"]
    );
}

#[test]
fn test_if_condition_comments() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let branch = add(&mut graph, "if_condition");
    set(&mut graph, branch, "condition", "@p[tag=vip]");
    let yes = say(&mut graph, "yes");
    let no = say(&mut graph, "no");
    then(&mut graph, chat, branch);
    wire(&mut graph, branch, "True", yes, "Exec");
    wire(&mut graph, branch, "False", no, "Exec");

    assert_eq!(
        compiled_lines(&graph),
        vec![
            "# In chat",
            "# If if entity @p[tag=vip] THEN:",
            "say yes",
            "# Else / False:",
            "say no",
        ]
    );
}

#[test]
fn test_if_condition_without_true_branch() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let branch = add(&mut graph, "if_condition");
    let no = say(&mut graph, "no");
    then(&mut graph, chat, branch);
    wire(&mut graph, branch, "False", no, "Exec");

    assert_eq!(
        compiled_lines(&graph),
        vec!["# In chat", "# Else / False:", "say no"]
    );
}

#[test]
fn test_closing_an_exec_loop_detaches_the_chain() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let ping = say(&mut graph, "ping");
    let pong = say(&mut graph, "pong");
    then(&mut graph, chat, ping);
    then(&mut graph, ping, pong);
    then(&mut graph, pong, ping);

    // The back edge replaces the anchor's edge into `ping`.
    assert_eq!(graph.inbound(ping, "Exec").unwrap().from_node, pong);
    assert!(!graph.connections().iter().any(|c| c.from_node == chat));
    assert_eq!(compiled_lines(&graph), vec!["# In chat"]);
}

#[test]
fn test_data_cycle_resolves_to_empty() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let a = say(&mut graph, "a");
    let b = say(&mut graph, "b");
    then(&mut graph, chat, a);
    wire(&mut graph, b, "Command", a, "Message");
    wire(&mut graph, a, "Command", b, "Message");

    assert_eq!(compiled_lines(&graph), vec!["# In chat", "say say"]);
}

#[test]
fn test_entries_follow_insertion_order() {
    init_tracing();
    let graph = create_mixed_graph();
    assert_eq!(
        compiled_lines(&graph),
        vec![
            "# Command block",
            "[RUA]",
            "say first",
            "# Loop Iteration 1/2",
            "kill @e[type=minecraft:zombie,limit=3]",
            "# Loop Iteration 2/2",
            "kill @e[type=minecraft:zombie,limit=3]",
            "say done",
            "# In chat",
            "summon minecraft:pig 10 64 -3 {NoAI:1b}",
        ]
    );
}

#[test]
fn test_compilation_is_deterministic() {
    let graph = create_mixed_graph();
    let compiler = Compiler::new();
    assert_eq!(compiler.compile(&graph), compiler.compile(&graph));
    assert_eq!(compiler.compile(&graph), compile(&graph));
}

#[test]
fn test_compile_lines_keep_anchor_entries_whole() {
    let graph = create_chat_give_graph();
    let lines = Compiler::new().compile_lines(&graph);
    assert_eq!(lines, vec!["# In chat", "give @p minecraft:diamond 1"]);

    let mut graph = Graph::new();
    let block = add(&mut graph, "command_block");
    set(&mut graph, block, "command", "say x");
    let lines = Compiler::new().compile_lines(&graph);
    assert_eq!(lines, vec!["# Command block\n[RUA] say x"]);
}

struct ShoutSynthesizer;

impl CommandSynthesizer for ShoutSynthesizer {
    fn node_type(&self) -> &str {
        "say"
    }

    fn synthesize(&self, ctx: &NodeContext<'_>) -> String {
        format!("say {}!", ctx.input("Message").to_uppercase())
    }
}

struct QuotedText;

impl ValueProducer for QuotedText {
    fn node_type(&self) -> &str {
        "text"
    }

    fn produce(&self, ctx: &NodeContext<'_>, _pin: &str) -> String {
        format!("\"{}\"", ctx.property("value"))
    }
}

#[test]
fn test_builder_overrides_node_behavior() {
    let mut graph = Graph::new();
    let chat = add(&mut graph, "chat_command");
    let shout = add(&mut graph, "say");
    let text = add(&mut graph, "text");
    set(&mut graph, text, "value", "hi");
    then(&mut graph, chat, shout);
    wire(&mut graph, text, "String", shout, "Message");

    let compiler = Compiler::builder()
        .with_synthesizer(Box::new(ShoutSynthesizer))
        .with_value_producer(Box::new(QuotedText))
        .build();
    assert_eq!(compiler.compile(&graph), "# In chat\nsay \"HI\"!");

    // The default compiler is unaffected.
    assert_eq!(compile(&graph), "# In chat\nsay hi");
}
