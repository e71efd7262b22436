//! Output-side concerns: resolving where artifacts land and writing the
//! diagnostic CSV.

pub mod csv;
pub mod path;

pub use csv::{write_cells_csv, write_edges_csv};
pub use path::{resolve, ResolvedPath};
