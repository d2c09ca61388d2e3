// Call graph structures for fnchart.
// Function nodes, the name index used for call resolution, and call edges.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::domain::extract::{signature_label, FunctionSpan};
use crate::domain::source::SourceUnit;

/// Opaque node identity, `n0`, `n1`, ... in discovery order.
///
/// Ordering is by the identity string, so `n10` sorts before `n2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        NodeId(format!("n{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free function discovered in one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    pub id: NodeId,
    pub module_path: String,
    pub name: String,
    pub params: String,
    pub ret: Option<String>,
    pub body: String,
}

impl FunctionNode {
    pub fn label(&self) -> String {
        signature_label(&self.name, &self.params, self.ret.as_deref())
    }
}

/// Directed caller -> callee pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallEdge {
    pub caller: NodeId,
    pub callee: NodeId,
}

impl CallEdge {
    pub fn new(caller: NodeId, callee: NodeId) -> Self {
        Self { caller, callee }
    }
}

/// Simple function name -> every identity declaring that name, across modules.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    by_name: BTreeMap<String, Vec<NodeId>>,
}

impl NameIndex {
    pub fn build(functions: &[FunctionNode]) -> Self {
        let mut index = NameIndex::default();
        for func in functions {
            index
                .by_name
                .entry(func.name.clone())
                .or_default()
                .push(func.id.clone());
        }
        index
    }

    /// Identities declaring `name`; empty when the name is unknown.
    pub fn lookup(&self, name: &str) -> &[NodeId] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Every function of one run, grouped by module, with identities assigned.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    /// Module path -> indices into `functions`, in discovery order.
    modules: BTreeMap<String, Vec<usize>>,
    functions: Vec<FunctionNode>,
}

impl Corpus {
    /// Assign identities to extraction results in the order given.
    ///
    /// Every module appears, including those that contributed no functions.
    pub fn from_extracted<I>(extracted: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<FunctionSpan>)>,
    {
        let mut corpus = Corpus::default();
        for (module_path, spans) in extracted {
            let slots = corpus.modules.entry(module_path.clone()).or_default();
            for span in spans {
                let index = corpus.functions.len();
                corpus.functions.push(FunctionNode {
                    id: NodeId::from_index(index),
                    module_path: module_path.clone(),
                    name: span.name,
                    params: span.params,
                    ret: span.ret,
                    body: span.body,
                });
                slots.push(index);
            }
        }
        corpus
    }

    /// Convenience for callers holding source units: extracts sequentially.
    pub fn from_sources(sources: &[SourceUnit]) -> Self {
        Self::from_extracted(sources.iter().map(|unit| {
            (
                unit.module_path.clone(),
                crate::domain::extract::extract_functions(&unit.text),
            )
        }))
    }

    pub fn functions(&self) -> &[FunctionNode] {
        &self.functions
    }

    /// Module paths in lexicographic order with their functions in discovery order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, Vec<&FunctionNode>)> {
        self.modules.iter().map(move |(path, slots)| {
            (
                path.as_str(),
                slots.iter().map(|&i| &self.functions[i]).collect(),
            )
        })
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn name_index(&self) -> NameIndex {
        NameIndex::build(&self.functions)
    }
}

/// The finished graph: corpus plus resolved, ordered edges.
#[derive(Debug, Clone)]
pub struct CallGraph {
    pub corpus: Corpus,
    pub edges: BTreeSet<CallEdge>,
}

impl CallGraph {
    pub fn new(corpus: Corpus, edges: BTreeSet<CallEdge>) -> Self {
        Self { corpus, edges }
    }
}

#[cfg(test)]
impl CallGraph {
    /// Callees of `caller`, in edge order.
    pub fn callees(&self, caller: &NodeId) -> Vec<&NodeId> {
        self.edges
            .iter()
            .filter(|e| &e.caller == caller)
            .map(|e| &e.callee)
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&FunctionNode> {
        self.corpus
            .functions()
            .iter()
            .filter(|f| f.name == name)
            .collect()
    }
}
