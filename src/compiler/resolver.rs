use super::Compiler;
use super::routing::Routing;
use crate::catalog::catalog;
use crate::graph::{Graph, NodeId, NodeInstance};
use ahash::AHashSet;
use std::cell::RefCell;

/// Resolves the value flowing into a pin for one graph snapshot.
///
/// A connected input takes the value of the upstream output; an unconnected
/// input falls back to the node's own property under the lower-cased pin
/// name. Missing nodes, pins and properties resolve to the empty string.
pub struct Resolver<'a> {
    graph: &'a Graph,
    compiler: &'a Compiler,
    routing: Routing<'a>,
    // Nodes whose value is currently being produced, to cut data-flow cycles.
    in_progress: RefCell<AHashSet<NodeId>>,
}

impl<'a> Resolver<'a> {
    pub(super) fn new(graph: &'a Graph, compiler: &'a Compiler) -> Self {
        Self {
            graph,
            compiler,
            routing: Routing::build(graph),
            in_progress: RefCell::new(AHashSet::new()),
        }
    }

    #[cfg(test)]
    pub(super) fn with_routing(
        graph: &'a Graph,
        compiler: &'a Compiler,
        routing: Routing<'a>,
    ) -> Self {
        Self {
            graph,
            compiler,
            routing,
            in_progress: RefCell::new(AHashSet::new()),
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub(super) fn routing(&self) -> &Routing<'a> {
        &self.routing
    }

    /// The effective value of input `pin` on `node`.
    pub fn resolve(&self, node: NodeId, pin: &str) -> String {
        let Some(instance) = self.graph.node(node) else {
            return String::new();
        };
        match self.routing.inbound(node, pin) {
            Some(connection) => self.output_value(connection.from_node, &connection.from_pin),
            None => instance.property_text(&pin.to_lowercase()),
        }
    }

    /// The value a node hands out on its output `pin`.
    ///
    /// Nodes that declare `pin` as their command-value output are compiled
    /// in place and yield the command they would emit.
    pub fn output_value(&self, node: NodeId, pin: &str) -> String {
        let Some(instance) = self.graph.node(node) else {
            return String::new();
        };
        let emits_command = catalog()
            .get(&instance.type_tag)
            .is_some_and(|def| def.value_output == Some(pin));
        if emits_command {
            return self.synthesize(node);
        }

        self.guarded(node, || match self.compiler.producer(&instance.type_tag) {
            Some(producer) => producer.produce(&NodeContext::new(instance, self), pin),
            None => instance.property_text("value"),
        })
    }

    /// The command text a node emits, or an empty string for node types
    /// without a synthesizer.
    pub fn synthesize(&self, node: NodeId) -> String {
        let Some(instance) = self.graph.node(node) else {
            return String::new();
        };
        self.guarded(node, || {
            self.compiler
                .synthesizer(&instance.type_tag)
                .map(|s| s.synthesize(&NodeContext::new(instance, self)))
                .unwrap_or_default()
        })
    }

    fn guarded(&self, node: NodeId, produce: impl FnOnce() -> String) -> String {
        if !self.in_progress.borrow_mut().insert(node) {
            tracing::trace!(
                target: super::TRACING_TARGET,
                node = %node,
                "data-flow cycle, resolving to empty"
            );
            return String::new();
        }
        let value = produce();
        self.in_progress.borrow_mut().remove(&node);
        value
    }
}

/// The view of a single node handed to synthesizers and value producers.
pub struct NodeContext<'a> {
    node: &'a NodeInstance,
    resolver: &'a Resolver<'a>,
}

impl<'a> NodeContext<'a> {
    pub fn new(node: &'a NodeInstance, resolver: &'a Resolver<'a>) -> Self {
        Self { node, resolver }
    }

    pub fn node(&self) -> &NodeInstance {
        self.node
    }

    pub fn resolver(&self) -> &Resolver<'a> {
        self.resolver
    }

    /// Resolved value of an input pin (connection first, then property).
    pub fn input(&self, pin: &str) -> String {
        self.resolver.resolve(self.node.id, pin)
    }

    /// Like [`input`](Self::input), with `default` standing in for an empty value.
    pub fn input_or(&self, pin: &str, default: &str) -> String {
        or_default(self.input(pin), default)
    }

    pub fn property(&self, name: &str) -> String {
        self.node.property_text(name)
    }

    pub fn property_or(&self, name: &str, default: &str) -> String {
        or_default(self.property(name), default)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.node.property_flag(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.node.property_number(name)
    }

    /// Whether another node drives this node's execution input.
    pub fn has_inbound_exec(&self) -> bool {
        self.resolver.routing().has_inbound_exec(self.node.id)
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
