//! Labeled 2-D numeric table.

use crate::errors::MatrixError;

/// A row-major 2-D numeric table with row and column labels.
///
/// Row and column labels should be unique for correct downstream behavior.
/// Uniqueness is deliberately NOT enforced here: the pipelines warn on
/// duplicates instead of rejecting them, because rendering should degrade
/// rather than hard-fail on imperfect input.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    values: Vec<f64>,
}

impl DataMatrix {
    /// Build a matrix from row-major values.
    ///
    /// Fails with [`MatrixError::Shape`] when the value count does not equal
    /// `rows.len() * cols.len()`.
    pub fn new(
        rows: Vec<String>,
        cols: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        if values.len() != rows.len() * cols.len() {
            return Err(MatrixError::Shape {
                rows: rows.len(),
                cols: cols.len(),
                values: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Build a matrix from nested per-row vectors.
    pub fn from_rows(
        rows: Vec<String>,
        cols: Vec<String>,
        data: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        let width = cols.len();
        let mut values = Vec::with_capacity(rows.len() * width);
        for (i, row) in data.into_iter().enumerate() {
            if row.len() != width {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            values.extend(row);
        }
        Self::new(rows, cols, values)
    }

    /// Deterministic example dataset: integers in 0..10, labeled "r0..", "c0..".
    ///
    /// `seed` drives a small xorshift generator so demos and tests are
    /// reproducible without a randomness dependency.
    pub fn example(rows: usize, cols: usize, seed: u64) -> Self {
        let mut state = seed | 1;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10) as f64
        };
        let values = (0..rows * cols).map(|_| next()).collect();
        Self {
            rows: (0..rows).map(|i| format!("r{i}")).collect(),
            cols: (0..cols).map(|j| format!("c{j}")).collect(),
            values,
        }
    }

    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    pub fn col_labels(&self) -> &[String] {
        &self.cols
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.cols.len()
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.cols.len()
    }

    /// Cell value at (row, col). Panics on out-of-range indices, like slice
    /// indexing; all internal callers iterate within bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols.len() + col]
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One owned feature vector per column. Used as clustering input.
    pub fn column_vectors(&self) -> Vec<Vec<f64>> {
        (0..self.n_cols())
            .map(|j| (0..self.n_rows()).map(|i| self.get(i, j)).collect())
            .collect()
    }

    /// Apply `f` to every value, keeping labels.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Largest finite value across the whole table, skipping NaN.
    /// `None` for an empty or all-NaN table.
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Smallest finite value across the whole table, skipping NaN.
    pub fn min(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }

    pub fn has_duplicate_row_labels(&self) -> bool {
        has_duplicates(&self.rows)
    }

    pub fn has_duplicate_col_labels(&self) -> bool {
        has_duplicates(&self.cols)
    }
}

fn has_duplicates(labels: &[String]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(labels.len());
    labels.iter().any(|l| !seen.insert(l.as_str()))
}
