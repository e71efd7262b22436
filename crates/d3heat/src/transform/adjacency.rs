//! Adjacency matrix <-> edge list ("vector form") conversion.

use crate::types::{CellRecord, DataMatrix, EdgeRecord};

/// Flatten a labeled matrix into its edge list.
///
/// Emits exactly `rows x cols` records in row-major order: every
/// `(rows[i], cols[j], value[i][j])` triple, including zero and NaN cells.
/// Label uniqueness is not required here; filtering and deduplication are
/// the caller's concern.
pub fn matrix_to_edges(matrix: &DataMatrix) -> Vec<EdgeRecord> {
    let mut edges = Vec::with_capacity(matrix.n_rows() * matrix.n_cols());
    for (i, source) in matrix.row_labels().iter().enumerate() {
        for (j, target) in matrix.col_labels().iter().enumerate() {
            edges.push(EdgeRecord {
                source: source.clone(),
                target: target.clone(),
                weight: matrix.get(i, j),
            });
        }
    }
    edges
}

/// Flatten a labeled matrix into heat-grid cell records, row-major.
///
/// Same traversal as [`matrix_to_edges`] with the field names the grid
/// template consumes: `variable` = row label, `group` = column label.
pub fn matrix_to_cells(matrix: &DataMatrix) -> Vec<CellRecord> {
    let mut cells = Vec::with_capacity(matrix.n_rows() * matrix.n_cols());
    for (i, variable) in matrix.row_labels().iter().enumerate() {
        for (j, group) in matrix.col_labels().iter().enumerate() {
            cells.push(CellRecord {
                group: group.clone(),
                variable: variable.clone(),
                value: matrix.get(i, j),
            });
        }
    }
    cells
}

/// Pivot an edge list back into a labeled matrix.
///
/// Unique sources become rows and unique targets become columns, both in
/// first-seen order. Unobserved (source, target) combinations fill with 0.
/// When the same pair occurs twice the last weight wins.
pub fn edges_to_matrix(edges: &[EdgeRecord]) -> DataMatrix {
    let mut rows: Vec<String> = Vec::new();
    let mut cols: Vec<String> = Vec::new();
    let mut row_index = std::collections::HashMap::new();
    let mut col_index = std::collections::HashMap::new();

    for edge in edges {
        if !row_index.contains_key(edge.source.as_str()) {
            row_index.insert(edge.source.clone(), rows.len());
            rows.push(edge.source.clone());
        }
        if !col_index.contains_key(edge.target.as_str()) {
            col_index.insert(edge.target.clone(), cols.len());
            cols.push(edge.target.clone());
        }
    }

    let mut values = vec![0.0; rows.len() * cols.len()];
    for edge in edges {
        let i = row_index[edge.source.as_str()];
        let j = col_index[edge.target.as_str()];
        values[i * cols.len() + j] = edge.weight;
    }

    // Shape is dense by construction, so this cannot fail.
    DataMatrix::new(rows, cols, values).unwrap_or_else(|_| unreachable!())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> DataMatrix {
        DataMatrix::new(
            labels(&["a", "b", "c"]),
            labels(&["a", "b", "c"]),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .unwrap()
    }

    #[test]
    fn row_major_enumeration() {
        let edges = matrix_to_edges(&sample());
        assert_eq!(edges.len(), 9);
        assert_eq!(
            (edges[0].source.as_str(), edges[0].target.as_str(), edges[0].weight),
            ("a", "a", 1.0)
        );
        assert_eq!(
            (edges[1].source.as_str(), edges[1].target.as_str(), edges[1].weight),
            ("a", "b", 2.0)
        );
        assert_eq!(
            (edges[3].source.as_str(), edges[3].target.as_str(), edges[3].weight),
            ("b", "a", 4.0)
        );
        assert_eq!(
            (edges[8].source.as_str(), edges[8].target.as_str(), edges[8].weight),
            ("c", "c", 9.0)
        );
    }

    #[test]
    fn round_trip_reconstructs_table() {
        let m = sample();
        let back = edges_to_matrix(&matrix_to_edges(&m));
        assert_eq!(back, m);
    }

    #[test]
    fn round_trip_rectangular() {
        let m = DataMatrix::new(
            labels(&["r1", "r2"]),
            labels(&["c1", "c2", "c3"]),
            vec![1.0, 0.0, 2.0, 0.0, 3.0, 4.0],
        )
        .unwrap();
        assert_eq!(edges_to_matrix(&matrix_to_edges(&m)), m);
    }

    #[test]
    fn sparse_pivot_fills_zero() {
        let edges = vec![
            EdgeRecord { source: "a".into(), target: "x".into(), weight: 5.0 },
            EdgeRecord { source: "b".into(), target: "y".into(), weight: 7.0 },
        ];
        let m = edges_to_matrix(&edges);
        assert_eq!(m.get(0, 0), 5.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.get(1, 1), 7.0);
    }

    #[test]
    fn cells_use_grid_field_names() {
        let cells = matrix_to_cells(&sample());
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[1].variable, "a");
        assert_eq!(cells[1].group, "b");
        assert_eq!(cells[1].value, 2.0);
    }
}
