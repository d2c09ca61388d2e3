// Domain layer: source units, extraction, call resolution, render model.

pub mod callgraph;
pub mod extract;
pub mod render;
pub mod resolve;
pub mod source;
