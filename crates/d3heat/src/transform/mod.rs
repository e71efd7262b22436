//! Matrix transforms: adjacency-matrix <-> edge-list conversion and value
//! rescaling.

pub mod adjacency;
pub mod scale;

pub use adjacency::{edges_to_matrix, matrix_to_cells, matrix_to_edges};
pub use scale::rescale;
