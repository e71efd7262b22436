//! Record forms of a matrix: edge list, cell list, and the node-link
//! structure embedded into the rendered page.

use serde::Serialize;

/// One matrix cell in edge-list ("vector") form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// One matrix cell in heat-grid form: `variable` is the row label,
/// `group` the column label. Field names match what the grid template
/// consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellRecord {
    pub group: String,
    pub variable: String,
    pub value: f64,
}

/// A node of the node-link embedding, colored by its cluster id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: String,
    pub cluster: i64,
}

/// A link of the node-link embedding. `source`/`target` are positional
/// node indices, not labels, so duplicate labels cannot collapse edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// The combined nodes+links document inlined into the node-link page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}
