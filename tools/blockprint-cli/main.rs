use blockprint::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::time::Instant;
use tracing::Level;

/// Compiles blockprint graphs and compares command dumps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a saved graph document into command text
    Compile {
        /// Path to the graph document JSON file
        graph_path: String,
        /// Write the commands to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Classify the change between two command dumps
    Diff {
        old_path: String,
        new_path: String,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the node types grouped as in the editor palette
    Catalog,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Compile { graph_path, output } => run_compile(&graph_path, output.as_deref()),
        Command::Diff {
            old_path,
            new_path,
            json,
        } => run_diff(&old_path, &new_path, json),
        Command::Catalog => print_catalog(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compile(graph_path: &str, output: Option<&str>) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let load_start = Instant::now();
    let graph = GraphDocument::from_file(graph_path)
        .and_then(|document| document.into_graph())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 2. Compilation ---
    let compile_start = Instant::now();
    let compiler = Compiler::new();
    let commands = compiler.compile(&graph);
    let compile_duration = compile_start.elapsed();

    // --- 3. Output ---
    match output {
        Some(path) => {
            fs::write(path, &commands).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!("Wrote {} line(s) to '{}'", commands.lines().count(), path);
        }
        None => println!("{}", commands),
    }

    eprintln!("\n--- Performance Summary ---");
    eprintln!("Nodes / Connections:  {} / {}", graph.len(), graph.connections().len());
    eprintln!("Graph Loading:        {:?}", load_duration);
    eprintln!("Compilation:          {:?}", compile_duration);
    eprintln!("-----------------------------");
    eprintln!("Total Execution:      {:?}", total_start.elapsed());
}

fn run_diff(old_path: &str, new_path: &str, json: bool) {
    let read = |path: &str| {
        fs::read_to_string(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)))
    };
    let old = read(old_path);
    let new = read(new_path);

    let analysis = analyze_changes(&old, &new);
    if json {
        let rendered = serde_json::to_string_pretty(&analysis)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render analysis: {}", e)));
        println!("{}", rendered);
        return;
    }

    println!("Change: {}", analysis.kind);
    for change in &analysis.changes {
        println!("  -> {}", change);
    }
    if analysis.kind == ChangeKind::Structural {
        println!("Syncing this edit rebuilds the graph nodes.");
    }
}

fn print_catalog() {
    for group in catalog().palette() {
        println!("{}", group.label);
        for entry in group.entries {
            println!("  {:<16} {:<20} {}", entry.type_tag, entry.title, entry.description);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
