//! Report loading: raw JSON bytes to typed spec records.

use crate::error::{ConvertError, Result};
use crate::types::report::{LeafNodeType, SpecPath, SpecReport, SuiteReport};
use std::path::Path;

/// Reads and decodes the report at `path`.
pub fn load_reports(path: &Path) -> Result<Vec<SpecPath>> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read report");
    parse_reports(&bytes)
}

/// Decodes a report document and flattens its suites into spec paths,
/// keeping document order. The first leaf of an unsupported kind aborts
/// the whole decode.
pub fn parse_reports(bytes: &[u8]) -> Result<Vec<SpecPath>> {
    let suites: Vec<SuiteReport> = serde_json::from_slice(bytes)?;
    let specs = suites
        .into_iter()
        .flat_map(|suite| suite.spec_reports)
        .map(spec_path)
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(specs = specs.len(), "decoded spec reports");
    Ok(specs)
}

fn spec_path(spec: SpecReport) -> Result<SpecPath> {
    let label = leaf_label(&spec)?;
    Ok(SpecPath {
        containers: spec.container_hierarchy_texts,
        leaf_label: label,
    })
}

/// Composite label of a leaf: kind tag, one space, leaf text.
fn leaf_label(spec: &SpecReport) -> Result<String> {
    Ok(format!("{} {}", leaf_tag(&spec.leaf_node_type)?, spec.leaf_node_text))
}

// Only `It` leaves are understood.
fn leaf_tag(kind: &LeafNodeType) -> Result<&'static str> {
    match kind {
        LeafNodeType::It => Ok("it"),
        LeafNodeType::Unsupported(name) => Err(ConvertError::UnsupportedLeafNode(name.clone())),
    }
}
