//! Linear value rescaling with a rescale-or-pass-through policy.

use tracing::{debug, warn};

use crate::types::DataMatrix;

/// Rescale every value so the table maximum equals `vmax`:
/// `x' = x / max * vmax`, with `max` taken over the whole table.
///
/// Rescale-or-pass-through: when the table has no usable maximum (empty,
/// all-NaN, or an all-zero table that would divide by zero) the input is
/// returned unchanged with a warning. Visualization should degrade on bad
/// input, not hard-fail, so this never errors.
pub fn rescale(matrix: &DataMatrix, vmax: f64, round: bool) -> DataMatrix {
    let max = match matrix.max() {
        Some(m) if m != 0.0 => m,
        _ => {
            warn!("rescaling not possible, returning values unchanged");
            return matrix.clone();
        }
    };

    debug!(max, vmax, "rescaling values");
    let factor = vmax / max;
    matrix.map_values(|v| {
        let scaled = v * factor;
        if round { scaled.round() } else { scaled }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maximum_becomes_vmax() {
        let m = DataMatrix::new(
            labels(&["a", "b"]),
            labels(&["x", "y"]),
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        let scaled = rescale(&m, 100.0, false);
        assert_eq!(scaled.max(), Some(100.0));
        // Uniform factor: every value scaled by vmax / max = 25.
        assert_eq!(scaled.values(), &[25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn rounding_snaps_to_integers() {
        let m = DataMatrix::new(labels(&["a"]), labels(&["x", "y"]), vec![1.0, 3.0]).unwrap();
        let scaled = rescale(&m, 10.0, true);
        assert_eq!(scaled.values(), &[3.0, 10.0]);
    }

    #[test]
    fn all_zero_passes_through() {
        let m = DataMatrix::new(labels(&["a"]), labels(&["x", "y"]), vec![0.0, 0.0]).unwrap();
        let scaled = rescale(&m, 9.0, false);
        assert_eq!(scaled, m);
    }

    #[test]
    fn all_nan_passes_through() {
        let m =
            DataMatrix::new(labels(&["a"]), labels(&["x"]), vec![f64::NAN]).unwrap();
        let scaled = rescale(&m, 9.0, false);
        assert!(scaled.values()[0].is_nan());
        assert_eq!(scaled.row_labels(), m.row_labels());
    }

    #[test]
    fn negative_values_keep_uniform_factor() {
        let m = DataMatrix::new(
            labels(&["a"]),
            labels(&["x", "y"]),
            vec![-2.0, 4.0],
        )
        .unwrap();
        let scaled = rescale(&m, 8.0, false);
        assert_eq!(scaled.values(), &[-4.0, 8.0]);
    }
}
