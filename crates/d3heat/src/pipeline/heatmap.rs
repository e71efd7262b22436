//! Node-link adjacency pipeline: clustered heatmap.

use tracing::{debug, info, warn};

use super::{open_in_browser, warn_on_duplicate_labels};
use crate::cluster::{validate_labels, ClusterModel, KMeans};
use crate::config::HeatmapConfig;
use crate::errors::HeatmapError;
use crate::output;
use crate::render::{self, RenderContext, HEATMAP_ASSETS};
use crate::transform;
use crate::types::{DataMatrix, GraphData, GraphLink, GraphNode, OutputArtifacts};

/// Render `matrix` as a clustered node-link heatmap.
///
/// `clust` supplies one cluster label per column; when `None`, the built-in
/// [`KMeans`] collaborator is fitted on the raw column vectors exactly once.
pub fn heatmap(
    matrix: &DataMatrix,
    clust: Option<&[i64]>,
    config: &HeatmapConfig,
) -> Result<OutputArtifacts, HeatmapError> {
    heatmap_with_model(matrix, clust, &KMeans::default(), config)
}

/// [`heatmap`] with an explicit clustering collaborator.
///
/// The model is consulted only when `clust` is `None`; a supplied label
/// vector always wins.
pub fn heatmap_with_model(
    matrix: &DataMatrix,
    clust: Option<&[i64]>,
    model: &dyn ClusterModel,
    config: &HeatmapConfig,
) -> Result<OutputArtifacts, HeatmapError> {
    crate::logging::init(config.verbose);
    warn_on_duplicate_labels(matrix);
    if !matrix.is_square() {
        warn!(
            rows = matrix.n_rows(),
            cols = matrix.n_cols(),
            "node-link view expects a square adjacency matrix"
        );
    }

    // Rescale so the maximum equals vmax; None leaves values untouched.
    let scaled;
    let matrix = match config.vmax {
        Some(vmax) => {
            scaled = transform::rescale(matrix, vmax, false);
            &scaled
        }
        None => matrix,
    };

    let resolved = output::resolve(config.path.as_deref())?;
    HEATMAP_ASSETS.copy_companions(&resolved.directory)?;

    let edges = transform::matrix_to_edges(matrix);
    let csv_path = resolved.csv_path();
    output::write_edges_csv(&csv_path, &edges)?;

    let labels: Vec<i64> = match clust {
        Some(labels) => {
            validate_labels(labels, matrix.n_cols())?;
            labels.to_vec()
        }
        None => {
            debug!("no cluster labels supplied, fitting collaborator");
            model.fit(&matrix.column_vectors())?
        }
    };

    let graph = build_graph(matrix, &labels);
    let data = serde_json::to_string_pretty(&graph).map_err(crate::errors::RenderError::from)?;

    let mut ctx = RenderContext::new();
    ctx.insert("TITLE", &config.title)
        .insert("DESCRIPTION", config.effective_description())
        .insert("WIDTH", config.width)
        .insert("WIDTH_DROPDOWN", config.width + 200)
        .insert("HEIGHT", config.height)
        .insert("STROKE", &config.stroke)
        .insert("DATA_PATH", &resolved.filename)
        .insert("DATA_COMES_HERE", data);

    let document = render::substitute(HEATMAP_ASSETS.template, &ctx)?;
    render::assets::write_html(&resolved.path, &document)?;
    info!(path = %resolved.path.display(), "heatmap written");

    if config.showfig {
        open_in_browser(&resolved.path);
    }

    Ok(OutputArtifacts {
        filename: resolved.filename,
        directory: resolved.directory,
        path: resolved.path,
        csv_path,
    })
}

/// Build the embedded nodes+links document.
///
/// Nodes come from the column labels; links address nodes by position
/// (row index, column index), so repeated labels stay distinct nodes
/// instead of collapsing onto the first occurrence.
fn build_graph(matrix: &DataMatrix, labels: &[i64]) -> GraphData {
    let nodes = matrix
        .col_labels()
        .iter()
        .zip(labels)
        .map(|(name, &cluster)| GraphNode {
            name: name.clone(),
            cluster,
        })
        .collect();

    let mut links = Vec::with_capacity(matrix.n_rows() * matrix.n_cols());
    for i in 0..matrix.n_rows() {
        for j in 0..matrix.n_cols() {
            links.push(GraphLink {
                source: i,
                target: j,
                value: matrix.get(i, j),
            });
        }
    }

    GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn square() -> DataMatrix {
        DataMatrix::new(
            labels(&["a", "b", "c"]),
            labels(&["a", "b", "c"]),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .unwrap()
    }

    #[test]
    fn graph_nodes_carry_cluster_labels_positionally() {
        let graph = build_graph(&square(), &[2, 0, 1]);
        let clusters: Vec<i64> = graph.nodes.iter().map(|n| n.cluster).collect();
        assert_eq!(clusters, vec![2, 0, 1]);
        assert_eq!(graph.nodes[0].name, "a");
    }

    #[test]
    fn graph_links_are_positional_row_major() {
        let graph = build_graph(&square(), &[0, 0, 0]);
        assert_eq!(graph.links.len(), 9);
        assert_eq!(
            (graph.links[1].source, graph.links[1].target, graph.links[1].value),
            (0, 1, 2.0)
        );
        assert_eq!(
            (graph.links[8].source, graph.links[8].target, graph.links[8].value),
            (2, 2, 9.0)
        );
    }

    #[test]
    fn duplicate_labels_stay_distinct_nodes() {
        let m = DataMatrix::new(
            labels(&["a", "a"]),
            labels(&["a", "a"]),
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        let graph = build_graph(&m, &[0, 1]);
        assert_eq!(graph.nodes.len(), 2);
        // Both "a" nodes are addressed by index, not by label.
        assert_eq!(graph.links[3].source, 1);
        assert_eq!(graph.links[3].target, 1);
    }
}
