//! Deterministic k-means over column vectors.
//!
//! Farthest-first seeding instead of random init keeps runs reproducible
//! without a randomness dependency, which matters because cluster ids end
//! up baked into rendered output that tests compare against.

use tracing::debug;

use super::ClusterModel;
use crate::errors::ClusterError;

/// Built-in k-means collaborator.
///
/// `k = None` picks `max(1, round(sqrt(n / 2)))`, capped at the number of
/// columns.
#[derive(Debug, Clone)]
pub struct KMeans {
    pub k: Option<usize>,
    pub max_iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            k: None,
            max_iterations: 50,
        }
    }
}

impl KMeans {
    pub fn with_k(k: usize) -> Self {
        Self {
            k: Some(k),
            ..Self::default()
        }
    }

    fn effective_k(&self, n: usize) -> usize {
        let k = self
            .k
            .unwrap_or_else(|| ((n as f64 / 2.0).sqrt().round() as usize).max(1));
        k.clamp(1, n)
    }
}

impl ClusterModel for KMeans {
    fn fit(&self, columns: &[Vec<f64>]) -> Result<Vec<i64>, ClusterError> {
        let n = columns.len();
        if n == 0 {
            return Err(ClusterError::Degenerate("no columns to cluster".into()));
        }
        let dim = columns[0].len();
        if columns.iter().any(|c| c.len() != dim) {
            return Err(ClusterError::Degenerate(
                "column vectors have differing lengths".into(),
            ));
        }

        let k = self.effective_k(n);
        debug!(n, k, "k-means clustering columns");

        let mut centroids = seed_farthest_first(columns, k);
        let mut assignments = vec![0usize; n];

        for _iteration in 0..self.max_iterations {
            let mut changed = false;
            for (i, col) in columns.iter().enumerate() {
                let nearest = nearest_centroid(col, &centroids);
                if nearest != assignments[i] {
                    assignments[i] = nearest;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            recompute_centroids(columns, &assignments, &mut centroids);
        }

        Ok(assignments.into_iter().map(|a| a as i64).collect())
    }
}

/// First centroid is column 0; each next centroid is the column farthest
/// from all chosen so far.
fn seed_farthest_first(columns: &[Vec<f64>], k: usize) -> Vec<Vec<f64>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(columns[0].clone());
    while centroids.len() < k {
        let mut best_idx = 0;
        let mut best_dist = -1.0;
        for (i, col) in columns.iter().enumerate() {
            let min_dist = centroids
                .iter()
                .map(|c| squared_distance(col, c))
                .fold(f64::MAX, f64::min);
            if min_dist > best_dist {
                best_dist = min_dist;
                best_idx = i;
            }
        }
        centroids.push(columns[best_idx].clone());
    }
    centroids
}

fn nearest_centroid(col: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::MAX;
    for (c, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(col, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = c;
        }
    }
    best
}

fn recompute_centroids(columns: &[Vec<f64>], assignments: &[usize], centroids: &mut [Vec<f64>]) {
    let dim = columns[0].len();
    for (c, centroid) in centroids.iter_mut().enumerate() {
        let members: Vec<&Vec<f64>> = assignments
            .iter()
            .zip(columns)
            .filter(|(&a, _)| a == c)
            .map(|(_, col)| col)
            .collect();
        if members.is_empty() {
            continue; // Keep the old centroid for empty clusters
        }
        for d in 0..dim {
            centroid[d] = members.iter().map(|m| m[d]).sum::<f64>() / members.len() as f64;
        }
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_obvious_clusters() {
        let columns = vec![
            vec![0.0, 0.1],
            vec![0.1, 0.0],
            vec![10.0, 10.1],
            vec![10.1, 10.0],
        ];
        let labels = KMeans::with_k(2).fit(&columns).unwrap();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn auto_k_single_column() {
        let labels = KMeans::default().fit(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(labels, vec![0]);
    }

    #[test]
    fn deterministic_across_runs() {
        let columns: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64, (i * i) as f64]).collect();
        let model = KMeans::with_k(3);
        assert_eq!(model.fit(&columns).unwrap(), model.fit(&columns).unwrap());
    }

    #[test]
    fn empty_input_is_degenerate() {
        assert!(matches!(
            KMeans::default().fit(&[]),
            Err(ClusterError::Degenerate(_))
        ));
    }

    #[test]
    fn ragged_input_is_degenerate() {
        assert!(matches!(
            KMeans::default().fit(&[vec![1.0], vec![1.0, 2.0]]),
            Err(ClusterError::Degenerate(_))
        ));
    }
}
