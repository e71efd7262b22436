//! Core data types: the labeled matrix, its edge/cell record forms,
//! the node-link embedding structure, color schemes, and output artifacts.

pub mod artifacts;
pub mod color_scheme;
pub mod matrix;
pub mod records;

pub use artifacts::OutputArtifacts;
pub use color_scheme::{ColorScheme, SchemeKind, UnknownScheme};
pub use matrix::DataMatrix;
pub use records::{CellRecord, EdgeRecord, GraphData, GraphLink, GraphNode};
