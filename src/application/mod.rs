use std::io::Write;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::callgraph::{CallGraph, Corpus};
use crate::domain::extract::FunctionSpan;
use crate::domain::render::RenderModel;
use crate::domain::source::SourceUnit;
use crate::ports::{CallEdgeResolver, DefinitionExtractor, OutputExporter};

pub struct AnalyzeUsecase<'a> {
    pub extractor: &'a dyn DefinitionExtractor,
    pub resolver: &'a dyn CallEdgeResolver,
    pub exporter: &'a dyn OutputExporter,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Extract every unit, then resolve calls over the whole corpus.
    ///
    /// Extraction runs per file in parallel; identities are assigned after the
    /// join, in the order of `sources`.
    pub fn build_graph(&self, sources: &[SourceUnit]) -> CallGraph {
        let extractor = self.extractor;
        let extracted: Vec<(String, Vec<FunctionSpan>)> = sources
            .par_iter()
            .map(|unit| (unit.module_path.clone(), extractor.extract(&unit.text)))
            .collect();

        let corpus = Corpus::from_extracted(extracted);
        let index = corpus.name_index();
        if index.is_empty() {
            debug!("No function definitions found; output has module groups only");
        }
        debug!(
            "Extracted {} functions ({} distinct names) from {} modules",
            corpus.functions().len(),
            index.len(),
            corpus.module_count()
        );

        let edges = self.resolver.resolve(corpus.functions(), &index);
        info!(
            "Call graph: {} functions, {} edges",
            corpus.functions().len(),
            edges.len()
        );

        CallGraph::new(corpus, edges)
    }

    pub fn run(&self, sources: &[SourceUnit], out: &mut dyn Write) -> Result<RenderModel> {
        let graph = self.build_graph(sources);
        let model = RenderModel::from(&graph);
        debug!(
            "Rendering {} nodes in {} subgraphs",
            model.node_count(),
            model.modules.len()
        );
        self.exporter
            .export(&model, out)
            .context("Failed to write flowchart")?;
        Ok(model)
    }
}
