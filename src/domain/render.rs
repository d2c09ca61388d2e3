//! Render model handed to exporters.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::callgraph::{CallEdge, CallGraph, NodeId};

/// A node as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub id: NodeId,
    /// Unescaped label, `fn name(params) -> ret`.
    pub label: String,
}

/// Modules with their ordered nodes plus the ordered edge set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderModel {
    /// Sorted by module path; nodes within a module in discovery order.
    pub modules: BTreeMap<String, Vec<RenderNode>>,
    /// Sorted by (caller, callee) identity strings.
    pub edges: BTreeSet<CallEdge>,
}

impl RenderModel {
    pub fn node_count(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }
}

impl From<&CallGraph> for RenderModel {
    fn from(graph: &CallGraph) -> Self {
        let modules = graph
            .corpus
            .modules()
            .map(|(path, funcs)| {
                let nodes = funcs
                    .into_iter()
                    .map(|f| RenderNode {
                        id: f.id.clone(),
                        label: f.label(),
                    })
                    .collect();
                (path.to_string(), nodes)
            })
            .collect();

        RenderModel {
            modules,
            edges: graph.edges.clone(),
        }
    }
}
