use petgraph::{graph::NodeIndex, Directed, Graph};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use crate::parsers::{Declaration, DeclarationKind};

/// Where a function-like declaration lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub kind: DeclarationKind,
    pub file_path: PathBuf,
    pub line_number: usize,
}

/// Name-keyed call graph accumulated over one analysis run.
///
/// Names are matched by plain string equality. A later definition with the
/// same name replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    definitions: BTreeMap<String, Definition>,
    calls: BTreeMap<String, BTreeSet<String>>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, declaration: Declaration) {
        let Declaration {
            name,
            kind,
            file_path,
            line_number,
            calls,
        } = declaration;

        self.definitions.insert(
            name.clone(),
            Definition {
                kind,
                file_path,
                line_number,
            },
        );

        // Callers without calls are never stored, and do not clear an earlier set.
        if !calls.is_empty() {
            self.calls.insert(name, calls);
        }
    }

    pub fn definitions(&self) -> &BTreeMap<String, Definition> {
        &self.definitions
    }

    pub fn calls(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.calls
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn caller_count(&self) -> usize {
        self.calls.len()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Caller/callee pairs whose callee is a known definition
    pub fn resolved_edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.calls.iter().flat_map(move |(caller, callees)| {
            callees
                .iter()
                .filter(move |callee| self.is_defined(callee))
                .map(move |callee| (caller.as_str(), callee.as_str()))
        })
    }

    /// Directed graph holding one node per definition and one edge per resolved call.
    pub fn to_dependency_graph(&self) -> DependencyGraph {
        let mut builder = GraphBuilder::new();

        for (name, definition) in &self.definitions {
            builder.add_node(FunctionNode {
                name: name.clone(),
                file_path: definition.file_path.clone(),
                line_number: definition.line_number,
            });
        }

        for (caller, callees) in &self.calls {
            for callee in callees {
                // Unknown callees (library calls, `this.x`) are dropped here
                builder.add_edge(CallEdge::new(caller.clone(), callee.clone()));
            }
        }

        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct FunctionNode {
    pub name: String,
    pub file_path: PathBuf,
    pub line_number: usize,
}

#[derive(Debug, Clone)]
pub struct CallEdge {
    pub caller: String,
    pub callee: String,
}

impl CallEdge {
    pub fn new(caller: String, callee: String) -> Self {
        Self { caller, callee }
    }
}

pub type DependencyGraph = Graph<FunctionNode, CallEdge, Directed>;

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: FunctionNode) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&node.name) {
            self.graph[index] = node;
            return index;
        }
        let name = node.name.clone();
        let index = self.graph.add_node(node);
        self.node_map.insert(name, index);
        index
    }

    pub fn add_edge(&mut self, edge: CallEdge) -> Option<petgraph::graph::EdgeIndex> {
        let source_idx = self.node_map.get(&edge.caller)?;
        let target_idx = self.node_map.get(&edge.callee)?;
        Some(self.graph.add_edge(*source_idx, *target_idx, edge))
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
