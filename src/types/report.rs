//! Typed view of the Ginkgo `--json-report` document.
//!
//! Only the fields needed to rebuild the spec hierarchy are decoded; every
//! other field in the report is ignored.

use serde::{Deserialize, Deserializer};

/// One suite run, the top-level element of the report array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteReport {
    #[serde(rename = "SpecReports", default, deserialize_with = "null_as_empty")]
    pub spec_reports: Vec<SpecReport>,
}

/// One executed spec together with the containers that enclose it.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecReport {
    /// Container texts, outermost first.
    #[serde(
        rename = "ContainerHierarchyTexts",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub container_hierarchy_texts: Vec<String>,
    #[serde(rename = "LeafNodeType")]
    pub leaf_node_type: LeafNodeType,
    #[serde(rename = "LeafNodeText", default)]
    pub leaf_node_text: String,
}

/// A spec reduced to what the outline needs: its container path and the
/// composite label of its leaf (`"it should render"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPath {
    pub containers: Vec<String>,
    pub leaf_label: String,
}

impl SpecPath {
    /// Containers followed by the leaf label, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.containers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf_label.as_str()))
    }
}

/// Kind of the innermost node of a spec.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LeafNodeType {
    It,
    Unsupported(String),
}

impl From<String> for LeafNodeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "It" => Self::It,
            _ => Self::Unsupported(value),
        }
    }
}

// Go encodes empty slices as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
