//! d3heat — interactive heatmaps rendered to self-contained HTML.
//!
//! Takes a labeled 2-D numeric table and embeds it, together with its
//! rendering parameters, into a static browser-side template. The result is
//! written to disk next to the companion script assets so the page works when
//! opened directly from the filesystem, with no server and no network access.
//!
//! Two entry points:
//!
//! - [`pipeline::heatmap`] — node-link adjacency view, nodes colored by
//!   cluster label (caller-supplied or computed by a [`cluster::ClusterModel`]).
//! - [`pipeline::matrix`] — plain heat grid with a configurable color domain
//!   and a named d3 color scheme.
//!
//! ```no_run
//! use d3heat::{DataMatrix, MatrixConfig, pipeline};
//!
//! let m = DataMatrix::example(6, 20, 42);
//! let out = pipeline::matrix(&m, &MatrixConfig::default())?;
//! println!("written to {}", out.path.display());
//! # Ok::<(), d3heat::HeatmapError>(())
//! ```

pub mod cluster;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod transform;
pub mod types;

pub use config::{HeatmapConfig, MatrixConfig};
pub use errors::HeatmapError;
pub use types::{ColorScheme, DataMatrix, OutputArtifacts, SchemeKind};
