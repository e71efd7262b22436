//! Diagnostic CSV of the edge-list form.
//!
//! Written next to the HTML on every run. The rendered page never reads it
//! (data is inlined into the document); it exists so the embedded data can
//! be inspected or post-processed with ordinary tooling.

use std::io::Write;
use std::path::Path;

use crate::errors::RenderError;
use crate::types::{CellRecord, EdgeRecord};

/// Write the node-link edge list as `source,target,weight`.
pub fn write_edges_csv(path: &Path, edges: &[EdgeRecord]) -> Result<(), RenderError> {
    let mut out = String::from("source,target,weight\n");
    for edge in edges {
        out.push_str(&format!(
            "{},{},{}\n",
            quote(&edge.source),
            quote(&edge.target),
            edge.weight
        ));
    }
    write_file(path, &out)
}

/// Write the heat-grid cell list as `variable,group,value`.
pub fn write_cells_csv(path: &Path, cells: &[CellRecord]) -> Result<(), RenderError> {
    let mut out = String::from("variable,group,value\n");
    for cell in cells {
        out.push_str(&format!(
            "{},{},{}\n",
            quote(&cell.variable),
            quote(&cell.group),
            cell.value
        ));
    }
    write_file(path, &out)
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    let mut file =
        std::fs::File::create(path).map_err(|e| RenderError::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| RenderError::io(path, e))
}

/// RFC 4180 quoting: only fields containing a comma, quote, or newline are
/// wrapped, with inner quotes doubled.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_unquoted() {
        assert_eq!(quote("abc"), "abc");
    }

    #[test]
    fn special_fields_are_quoted_and_escaped() {
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn edges_csv_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("edges.csv");
        let edges = vec![
            EdgeRecord { source: "a".into(), target: "b".into(), weight: 2.0 },
            EdgeRecord { source: "x,y".into(), target: "z".into(), weight: 0.5 },
        ];
        write_edges_csv(&path, &edges).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "source,target,weight\na,b,2\n\"x,y\",z,0.5\n");
    }

    #[test]
    fn cells_csv_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cells.csv");
        let cells = vec![CellRecord {
            group: "g".into(),
            variable: "v".into(),
            value: 3.0,
        }];
        write_cells_csv(&path, &cells).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "variable,group,value\nv,g,3\n");
    }
}
