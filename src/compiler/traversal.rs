use super::TRACING_TARGET;
use super::resolver::Resolver;
use crate::catalog::{catalog, types};
use crate::graph::{NodeId, NodeInstance};
use ahash::AHashSet;

/// Upper bound on loop unrolling per loop node.
pub const MAX_LOOP_ITERATIONS: usize = 100;

/// Clamps a requested loop count to `1..=MAX_LOOP_ITERATIONS`, truncating
/// fractions. Non-finite requests count as a single iteration.
pub fn clamp_iterations(requested: f64) -> usize {
    if !requested.is_finite() || requested < 1.0 {
        return 1;
    }
    (requested.trunc() as usize).min(MAX_LOOP_ITERATIONS)
}

/// Depth-first walk over the execution edges, collecting command lines.
pub(super) struct ExecWalker<'r, 'a> {
    resolver: &'r Resolver<'a>,
    commands: Vec<String>,
}

impl<'r, 'a> ExecWalker<'r, 'a> {
    pub(super) fn new(resolver: &'r Resolver<'a>) -> Self {
        Self {
            resolver,
            commands: Vec::new(),
        }
    }

    pub(super) fn into_commands(self) -> Vec<String> {
        self.commands
    }

    /// Walks one entry segment with a visited set of its own.
    pub(super) fn walk_entry(&mut self, entry: NodeId) {
        let mut visited = AHashSet::new();
        self.walk(entry, &mut visited);
    }

    fn walk(&mut self, id: NodeId, visited: &mut AHashSet<NodeId>) {
        let Some(node) = self.resolver.graph().node(id) else {
            return;
        };

        // Loops skip the visited check; unrolling revisits them.
        if node.type_tag == types::LOOP {
            self.walk_loop(node, visited);
            return;
        }
        if !visited.insert(id) {
            return;
        }

        match node.type_tag.as_str() {
            types::IF_CONDITION => self.walk_condition(node, visited),
            types::SEQUENCE => self.walk_sequence(node, visited),
            _ => {
                let command = self.resolver.synthesize(id);
                if !command.is_empty() {
                    tracing::trace!(target: TRACING_TARGET, node = %id, %command, "emit");
                    self.commands.push(command);
                }
                let resolver = self.resolver;
                if let Some(next) = resolver.routing().next_exec(id) {
                    self.walk(next.to_node, visited);
                }
            }
        }
    }

    fn walk_loop(&mut self, node: &NodeInstance, visited: &mut AHashSet<NodeId>) {
        let resolver = self.resolver;
        let total = self.loop_iterations(node);
        let body = resolver.routing().outgoing(node.id, "Loop Body").map(|c| c.to_node);

        for i in 1..=total {
            self.commands.push(format!("# Loop Iteration {}/{}", i, total));
            if let Some(body) = body {
                self.walk(body, &mut AHashSet::new());
            }
        }

        if let Some(completed) = resolver.routing().outgoing(node.id, "Completed") {
            self.walk(completed.to_node, visited);
        }
    }

    fn loop_iterations(&self, node: &NodeInstance) -> usize {
        let connected = self.resolver.resolve(node.id, "Count");
        let requested = if connected.trim().is_empty() {
            node.property_number("iterations")
        } else {
            connected.trim().parse::<f64>().ok()
        }
        .unwrap_or(1.0);
        let total = clamp_iterations(requested);
        if total as f64 != requested.trunc() {
            tracing::debug!(
                target: TRACING_TARGET,
                node = %node.id,
                requested,
                total,
                "loop count clamped"
            );
        }
        total
    }

    fn walk_condition(&mut self, node: &NodeInstance, visited: &mut AHashSet<NodeId>) {
        let resolver = self.resolver;
        if let Some(branch) = resolver.routing().outgoing(node.id, "True") {
            let condition = resolver.resolve(node.id, "Condition");
            self.commands.push(format!(
                "# If {} {} THEN:",
                node.property_text("conditionType"),
                condition
            ));
            self.walk(branch.to_node, visited);
        }
        if let Some(branch) = resolver.routing().outgoing(node.id, "False") {
            self.commands.push("# Else / False:".to_string());
            self.walk(branch.to_node, visited);
        }
    }

    fn walk_sequence(&mut self, node: &NodeInstance, visited: &mut AHashSet<NodeId>) {
        let resolver = self.resolver;
        let Some(def) = catalog().get(&node.type_tag) else {
            return;
        };
        for pin in def.outputs.iter().filter(|p| p.kind.is_exec()) {
            if let Some(branch) = resolver.routing().outgoing(node.id, pin.name) {
                self.walk(branch.to_node, visited);
            }
        }
    }
}
