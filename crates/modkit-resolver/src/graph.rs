//! Requirement graph construction and traversal views.
//!
//! [`ModGraph`] is a read-only view over a mod set, built independently of
//! resolution so it can render diagnostic trees even for sets that fail
//! validation. The ordering walk does not run on this graph; it iterates
//! declared requirement lists directly.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use modkit_core::constraint::VersionConstraint;
use modkit_core::definition::ModDefinition;
use modkit_core::version::ModVersion;

/// A mod as it appears in graph views.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ModNode {
    pub id: String,
    pub version: ModVersion,
}

impl ModNode {
    /// Case-insensitive lookup key.
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl fmt::Display for ModNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.id, self.version)
    }
}

/// Edge label: the constraint declared on the requirement, if any.
#[derive(Debug, Clone)]
pub struct RequireEdge {
    pub constraint: Option<VersionConstraint>,
}

/// The requirement graph of a mod set, backed by petgraph.
pub struct ModGraph {
    graph: DiGraph<ModNode, RequireEdge>,
    /// Lookup from lowercased identifier to node index.
    index: HashMap<String, NodeIndex>,
}

impl ModGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Build the graph for a whole mod set.
    ///
    /// Requirements pointing at mods that are not in the set get no edge;
    /// the validator reports those separately.
    pub fn build(defs: &[ModDefinition]) -> Self {
        let mut graph = Self::new();
        for def in defs {
            graph.add_node(ModNode {
                id: def.id.clone(),
                version: def.version,
            });
        }
        for def in defs {
            let Some(from) = graph.find(&def.id) else {
                continue;
            };
            for req in &def.requires {
                if let Some(to) = graph.find(&req.id) {
                    graph.add_edge(
                        from,
                        to,
                        RequireEdge {
                            constraint: req.constraint,
                        },
                    );
                }
            }
        }
        graph
    }

    /// Add or retrieve a node. If the key already exists, returns the existing index.
    pub fn add_node(&mut self, node: ModNode) -> NodeIndex {
        let key = node.key();
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(node);
        self.index.insert(key, idx);
        idx
    }

    /// Add a requirement edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: RequireEdge) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, edge);
        }
    }

    /// Look up a node by identifier, ignoring case.
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(&id.to_lowercase()).copied()
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &ModNode {
        &self.graph[idx]
    }

    /// Direct requirements of a node, in declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &RequireEdge)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
            .collect();
        // petgraph iterates edges newest-first; restore insertion order.
        deps.reverse();
        deps
    }

    /// Reverse requirements (who requires this node), in insertion order.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &RequireEdge)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight()))
            .collect();
        deps.reverse();
        deps
    }

    /// Nodes that no other mod requires, in insertion order.
    ///
    /// Falls back to every node when the whole set is cyclic and there is
    /// no natural entry point.
    pub fn roots(&self) -> Vec<NodeIndex> {
        let roots: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();
        if roots.is_empty() {
            self.graph.node_indices().collect()
        } else {
            roots
        }
    }

    /// Print the requirement tree of the whole set to a string.
    ///
    /// Every mod nothing depends on becomes a top-level entry; shared
    /// requirements reappear under each branch, cycles are cut.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let mut visited = HashSet::new();

        for root in self.roots() {
            let node = &self.graph[root];
            output.push_str(&format!("{node}\n"));

            visited.insert(root);
            let deps = self.dependencies_of(root);
            let count = deps.len();
            for (i, (child, _)) in deps.iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, *child, "", is_last, 1, max_depth, &mut visited);
            }
            visited.remove(&root);
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, (child, _)) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Find a requirement chain from some top-level mod down to `target_id`.
    ///
    /// Returns the first chain found, walking roots in insertion order. A
    /// mod nothing requires yields a chain of just itself.
    pub fn find_path(&self, target_id: &str) -> Option<Vec<&ModNode>> {
        let target = self.find(target_id)?;
        for root in self.roots() {
            let mut path = Vec::new();
            let mut visited = HashSet::new();
            if self.dfs_path(root, target, &mut path, &mut visited) {
                return Some(path.iter().map(|&idx| &self.graph[idx]).collect());
            }
        }
        None
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for (child, _) in self.dependencies_of(current) {
            if self.dfs_path(child, target, path, visited) {
                return true;
            }
        }
        path.pop();
        visited.remove(&current);
        false
    }

    /// Print the inverted tree for one mod: everything that requires it,
    /// directly or transitively. Edges carry the declared constraint.
    pub fn print_dependents(&self, target_id: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(target_id) else {
            return output;
        };

        let node = &self.graph[idx];
        output.push_str(&format!("{node}\n"));

        let mut visited = HashSet::new();
        visited.insert(idx);

        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, edge)) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_dependents_subtree(&mut output, *dep_idx, edge, "", is_last, &mut visited);
        }

        output
    }

    fn print_dependents_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        edge: &RequireEdge,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        match &edge.constraint {
            Some(constraint) => {
                output.push_str(&format!("{prefix}{connector}{node} (requires {constraint})\n"));
            }
            None => output.push_str(&format!("{prefix}{connector}{node}\n")),
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, edge)) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_dependents_subtree(output, *dep_idx, edge, &child_prefix, is_last, visited);
        }

        visited.remove(&idx);
    }

    /// Number of mods in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModGraph {
    fn default() -> Self {
        Self::new()
    }
}
