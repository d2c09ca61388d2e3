// Infrastructure implementations for fnchart.

use std::collections::BTreeSet;

use crate::domain::callgraph::{CallEdge, FunctionNode, NameIndex};
use crate::domain::extract::{extract_functions, FunctionSpan};
use crate::domain::resolve::resolve_calls;
use crate::ports::{CallEdgeResolver, DefinitionExtractor};

pub mod project_loader;

pub use project_loader::{LoadError, ProjectLoader};

/// Header regex plus naive brace counting.
pub struct RegexDefinitionExtractor;
impl DefinitionExtractor for RegexDefinitionExtractor {
    fn extract(&self, text: &str) -> Vec<FunctionSpan> {
        extract_functions(text)
    }
}

/// Name-matched call edges; every same-named candidate is a callee.
pub struct LexicalCallResolver;
impl CallEdgeResolver for LexicalCallResolver {
    fn resolve(&self, functions: &[FunctionNode], index: &NameIndex) -> BTreeSet<CallEdge> {
        resolve_calls(functions, index)
    }
}
