use blockprint::catalog::types;
use blockprint::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A CLI tool to generate random graph documents for the blockprint compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of entry chains to generate
    #[arg(long, default_value_t = 4)]
    chains: usize,

    /// The number of nodes following each entry
    #[arg(long, default_value_t = 12)]
    length: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

const SIMPLE_COMMANDS: [&str; 9] = [
    types::GIVE,
    types::SAY,
    types::KILL,
    types::SUMMON,
    types::TELLRAW,
    types::EFFECT,
    types::TIME,
    types::WEATHER,
    types::SETBLOCK,
];

const TARGETED_COMMANDS: [&str; 4] = [types::GIVE, types::KILL, types::TELLRAW, types::EFFECT];

const SELECTOR_BASES: [&str; 4] = ["@a", "@p", "@e", "@s"];

/// Where the next node of a chain attaches.
type Cursor = (NodeId, &'static str);

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating graph ({} chain(s) of {} node(s))...",
        cli.chains, cli.length
    );

    let mut graph = Graph::new();
    for chain in 0..cli.chains {
        generate_chain(&mut graph, &mut rng, chain, cli.length)?;
    }

    GraphDocument::from_graph(&graph).save(&cli.output)?;
    println!(
        "Successfully generated {} node(s) and {} connection(s) into '{}'",
        graph.len(),
        graph.connections().len(),
        cli.output
    );
    Ok(())
}

fn generate_chain(
    graph: &mut Graph,
    rng: &mut StdRng,
    chain: usize,
    length: usize,
) -> Result<()> {
    let row = chain as f64 * 320.0;
    let anchor_type = if rng.random_bool(0.5) {
        types::CHAT_COMMAND
    } else {
        types::COMMAND_BLOCK
    };
    let anchor = graph.add_node(anchor_type, Position::new(0.0, row))?;
    let mut cursor: Cursor = (anchor, "Exec");

    for step in 1..=length {
        let position = Position::new(step as f64 * 240.0, row);
        let roll = rng.random_range(0..10_u32);
        cursor = match roll {
            0 => add_loop(graph, rng, cursor, position)?,
            1 => add_sequence(graph, rng, cursor, position)?,
            _ => {
                let node = add_command(graph, rng, position)?;
                graph.connect(cursor.0, cursor.1, node, "Exec")?;
                (node, "Exec")
            }
        };
    }
    println!("-> Generated chain {} from a '{}' anchor.", chain, anchor_type);
    Ok(())
}

fn add_command(graph: &mut Graph, rng: &mut StdRng, position: Position) -> Result<NodeId> {
    let type_tag = SIMPLE_COMMANDS[rng.random_range(0..SIMPLE_COMMANDS.len())];
    let node = graph.add_node(type_tag, position)?;

    match type_tag {
        types::GIVE => graph.set_property(node, "count", rng.random_range(1..=64_u32))?,
        types::SAY => graph.set_property(node, "message", format!("Step {}", node.0))?,
        types::EFFECT => graph.set_property(node, "duration", rng.random_range(5..=120_u32))?,
        _ => {}
    }

    if TARGETED_COMMANDS.contains(&type_tag) && rng.random_bool(0.4) {
        let selector = graph.add_node(
            types::SELECTOR,
            Position::new(position.x, position.y + 140.0),
        )?;
        let base = SELECTOR_BASES[rng.random_range(0..SELECTOR_BASES.len())];
        graph.set_property(selector, "base", base)?;
        if rng.random_bool(0.5) {
            graph.set_property(selector, "limit", rng.random_range(1..=5_u32))?;
        }
        graph.connect(selector, "Selector", node, "Target")?;
    }
    Ok(node)
}

fn add_loop(
    graph: &mut Graph,
    rng: &mut StdRng,
    cursor: Cursor,
    position: Position,
) -> Result<Cursor> {
    let node = graph.add_node(types::LOOP, position)?;
    graph.set_property(node, "iterations", rng.random_range(1..=8_u32))?;
    graph.connect(cursor.0, cursor.1, node, "Exec")?;

    let body = add_command(graph, rng, Position::new(position.x, position.y - 140.0))?;
    graph.connect(node, "Loop Body", body, "Exec")?;
    Ok((node, "Completed"))
}

fn add_sequence(
    graph: &mut Graph,
    rng: &mut StdRng,
    cursor: Cursor,
    position: Position,
) -> Result<Cursor> {
    let node = graph.add_node(types::SEQUENCE, position)?;
    graph.connect(cursor.0, cursor.1, node, "Exec")?;

    for (offset, pin) in ["Then 0", "Then 1"].into_iter().enumerate() {
        let branch = add_command(
            graph,
            rng,
            Position::new(position.x, position.y - 140.0 * (offset as f64 + 1.0)),
        )?;
        graph.connect(node, pin, branch, "Exec")?;
    }
    Ok((node, "Then 2"))
}
