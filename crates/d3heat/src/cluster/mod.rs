//! Clustering seam for the node-link pipeline.
//!
//! The pipeline treats clustering as an opaque collaborator: raw column
//! vectors in, one integer label per column out. Callers can hand in any
//! [`ClusterModel`] implementation (or precomputed labels and skip
//! clustering entirely); [`KMeans`] is the built-in default.

pub mod kmeans;

pub use kmeans::KMeans;

use crate::errors::ClusterError;

/// An opaque clustering collaborator.
///
/// `columns` holds one feature vector per matrix column; the result carries
/// one cluster label per column, same order.
pub trait ClusterModel {
    fn fit(&self, columns: &[Vec<f64>]) -> Result<Vec<i64>, ClusterError>;
}

/// Check a caller-supplied label vector against the column count.
pub fn validate_labels(labels: &[i64], n_cols: usize) -> Result<(), ClusterError> {
    if labels.len() != n_cols {
        return Err(ClusterError::LabelCount {
            expected: n_cols,
            got: labels.len(),
        });
    }
    Ok(())
}
