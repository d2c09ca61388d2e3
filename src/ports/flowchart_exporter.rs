//! Mermaid Flowchart Exporter
//!
//! Exports a RenderModel as a Mermaid `flowchart LR` with one subgraph per module.

use std::io::{Result, Write};

use crate::domain::render::RenderModel;
use crate::ports::OutputExporter;

pub struct MermaidExporter;

impl MermaidExporter {
    /// Convert a RenderModel to Mermaid text, one statement per line.
    pub fn to_mermaid(model: &RenderModel) -> String {
        let mut lines = Vec::new();

        lines.push("flowchart LR".to_string());

        // Empty modules still get an opened and closed subgraph
        for (module, nodes) in &model.modules {
            lines.push(format!("  subgraph {}", module));
            for node in nodes {
                lines.push(format!(
                    "    {}[\"{}\"]",
                    node.id,
                    Self::escape_label(&node.label)
                ));
            }
            lines.push("  end".to_string());
        }

        for edge in &model.edges {
            lines.push(format!("  {} --> {}", edge.caller, edge.callee));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn escape_label(label: &str) -> String {
        label.replace('"', "\\\"")
    }
}

impl OutputExporter for MermaidExporter {
    fn export(&self, model: &RenderModel, out: &mut dyn Write) -> Result<()> {
        out.write_all(Self::to_mermaid(model).as_bytes())?;
        out.flush()
    }
}
