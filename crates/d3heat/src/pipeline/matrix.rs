//! Heat-grid pipeline: plain matrix view with a color domain and scheme.

use tracing::info;

use super::{open_in_browser, warn_on_duplicate_labels};
use crate::config::MatrixConfig;
use crate::errors::HeatmapError;
use crate::output;
use crate::render::{self, RenderContext, MATRIX_ASSETS};
use crate::transform;
use crate::types::{DataMatrix, OutputArtifacts};

/// Value ceiling used when `scale` is on: values are rescaled to 0-100 and
/// rounded, which makes the color steps discrete.
const SCALE_VMAX: f64 = 100.0;

/// Render `matrix` as a heat grid.
pub fn matrix(
    matrix: &DataMatrix,
    config: &MatrixConfig,
) -> Result<OutputArtifacts, HeatmapError> {
    crate::logging::init(config.verbose);
    warn_on_duplicate_labels(matrix);

    let scaled;
    let matrix = if config.scale {
        scaled = transform::rescale(matrix, SCALE_VMAX, true);
        &scaled
    } else {
        if config.vmin.is_some() && config.vmax.is_some() {
            info!("data not scaled; unset vmin/vmax to span the data range");
        }
        matrix
    };

    // Color domain defaults to the (possibly rescaled) data range.
    let vmin = config.vmin.or_else(|| matrix.min()).unwrap_or(0.0);
    let vmax = config.vmax.or_else(|| matrix.max()).unwrap_or(0.0);
    info!(vmin, vmax, cmap = %config.cmap, "color domain");

    let resolved = output::resolve(config.path.as_deref())?;
    MATRIX_ASSETS.copy_companions(&resolved.directory)?;

    let cells = transform::matrix_to_cells(matrix);
    let csv_path = resolved.csv_path();
    output::write_cells_csv(&csv_path, &cells)?;

    let data = serde_json::to_string_pretty(&cells).map_err(crate::errors::RenderError::from)?;

    let mut ctx = RenderContext::new();
    ctx.insert("TITLE", &config.title)
        .insert("DESCRIPTION", &config.description)
        .insert("WIDTH", config.width)
        .insert("HEIGHT", config.height)
        .insert("VMIN", vmin)
        .insert("VMAX", vmax)
        .insert("FONTSIZE_X", config.fontsize)
        .insert("FONTSIZE_Y", config.fontsize)
        .insert("STROKE", &config.stroke)
        .insert("CMAP", config.cmap.as_d3_name())
        .insert("CMAP_TYPE", config.cmap.kind().as_d3_scale())
        .insert("DATA_PATH", &resolved.filename)
        .insert("DATA_COMES_HERE", data);

    let document = render::substitute(MATRIX_ASSETS.template, &ctx)?;
    render::assets::write_html(&resolved.path, &document)?;
    info!(path = %resolved.path.display(), "matrix written");

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
