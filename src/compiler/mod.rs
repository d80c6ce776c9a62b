use crate::catalog::catalog;
use crate::graph::{Graph, NodeId};
use ahash::AHashMap;

mod resolver;
mod routing;
pub mod synthesis;
mod traversal;
pub mod values;

pub use resolver::{NodeContext, Resolver};
pub use synthesis::CommandSynthesizer;
pub use traversal::{MAX_LOOP_ITERATIONS, clamp_iterations};
pub use values::ValueProducer;

use synthesis::register_default_synthesizers;
use traversal::ExecWalker;
use values::register_default_producers;

pub const TRACING_TARGET: &str = "blockprint::compiler";

/// Translates a [`Graph`] into the ordered command text it describes.
///
/// A compiler holds the per-type synthesizers and value producers and is
/// otherwise stateless; one instance can compile any number of graphs, and
/// compilation never mutates the graph or fails.
pub struct Compiler {
    synthesizers: AHashMap<String, Box<dyn CommandSynthesizer>>,
    producers: AHashMap<String, Box<dyn ValueProducer>>,
}

pub struct CompilerBuilder {
    synthesizers: AHashMap<String, Box<dyn CommandSynthesizer>>,
    producers: AHashMap<String, Box<dyn ValueProducer>>,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        let mut synthesizers: AHashMap<String, Box<dyn CommandSynthesizer>> = AHashMap::new();
        register_default_synthesizers(&mut synthesizers);
        let mut producers: AHashMap<String, Box<dyn ValueProducer>> = AHashMap::new();
        register_default_producers(&mut producers);
        Self {
            synthesizers,
            producers,
        }
    }

    /// Registers a synthesizer, replacing any existing one for its node type.
    pub fn with_synthesizer(mut self, synthesizer: Box<dyn CommandSynthesizer>) -> Self {
        self.synthesizers
            .insert(synthesizer.node_type().to_string(), synthesizer);
        self
    }

    /// Registers a value producer, replacing any existing one for its node type.
    pub fn with_value_producer(mut self, producer: Box<dyn ValueProducer>) -> Self {
        self.producers
            .insert(producer.node_type().to_string(), producer);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            synthesizers: self.synthesizers,
            producers: self.producers,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A compiler with the built-in synthesizers and producers.
    pub fn new() -> Self {
        CompilerBuilder::new().build()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Compiles the graph to newline-joined command text.
    pub fn compile(&self, graph: &Graph) -> String {
        self.compile_lines(graph).join("\n")
    }

    /// Compiles the graph to its command lines, in emission order.
    ///
    /// Anchors emit a comment line and their command as one entry, so an
    /// entry may itself contain a newline.
    pub fn compile_lines(&self, graph: &Graph) -> Vec<String> {
        let resolver = self.resolver(graph);
        let entries: Vec<NodeId> = graph
            .nodes()
            .filter(|node| {
                catalog().get(&node.type_tag).is_some_and(|def| def.entry)
                    && !resolver.routing().has_inbound_exec(node.id)
            })
            .map(|node| node.id)
            .collect();

        let mut walker = ExecWalker::new(&resolver);
        for entry in &entries {
            walker.walk_entry(*entry);
        }
        let commands = walker.into_commands();

        tracing::debug!(
            target: TRACING_TARGET,
            nodes = graph.len(),
            entries = entries.len(),
            commands = commands.len(),
            "compiled graph"
        );
        commands
    }

    /// A value resolver over `graph` using this compiler's registries.
    pub fn resolver<'a>(&'a self, graph: &'a Graph) -> Resolver<'a> {
        Resolver::new(graph, self)
    }

    fn synthesizer(&self, type_tag: &str) -> Option<&dyn CommandSynthesizer> {
        self.synthesizers.get(type_tag).map(|s| s.as_ref())
    }

    fn producer(&self, type_tag: &str) -> Option<&dyn ValueProducer> {
        self.producers.get(type_tag).map(|p| p.as_ref())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles `graph` with the built-in node behavior.
pub fn compile(graph: &Graph) -> String {
    Compiler::new().compile(graph)
}
