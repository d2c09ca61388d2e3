//! Approximate call-edge resolution.
//!
//! Every `identifier(` in a body is looked up by simple name. A hit links the
//! caller to *all* functions declaring that name, so same-named functions in
//! different modules all become callees. Names missing from the index
//! (std, external crates, tuple structs, macros shaped like calls) are ignored.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::domain::callgraph::{CallEdge, FunctionNode, NameIndex};

/// Identifier immediately followed by `(`. Keywords are not special.
static CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\(").unwrap());

/// Simple names that appear in call position in `body`, in textual order.
pub fn call_sites(body: &str) -> impl Iterator<Item = &str> {
    CALL_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Resolve every function's calls against `index`. Self-edges are dropped.
pub fn resolve_calls(functions: &[FunctionNode], index: &NameIndex) -> BTreeSet<CallEdge> {
    let mut edges = BTreeSet::new();
    for func in functions {
        for name in call_sites(&func.body) {
            for callee in index.lookup(name) {
                if *callee != func.id {
                    edges.insert(CallEdge::new(func.id.clone(), callee.clone()));
                }
            }
        }
    }
    edges
}
