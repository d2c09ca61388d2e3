use std::collections::BTreeSet;
use std::io::Write;

use crate::domain::callgraph::{CallEdge, FunctionNode, NameIndex};
use crate::domain::extract::FunctionSpan;
use crate::domain::render::RenderModel;

pub mod flowchart_exporter;

/// Finds function definitions in one source text.
/// Called from worker threads, one file per call.
pub trait DefinitionExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<FunctionSpan>;
}

/// Links callers to callees once every module has been extracted.
pub trait CallEdgeResolver {
    fn resolve(&self, functions: &[FunctionNode], index: &NameIndex) -> BTreeSet<CallEdge>;
}

pub trait OutputExporter {
    fn export(&self, model: &RenderModel, out: &mut dyn Write) -> std::io::Result<()>;
}
