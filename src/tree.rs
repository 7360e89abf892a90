//! Spec hierarchy built from flat container paths.
//!
//! Nodes live in a single arena and refer to their children by index, so
//! building, walking and dropping the tree never recurse, however deep the
//! container nesting is.

use crate::types::report::SpecPath;
use indexmap::IndexMap;

/// Index of a node in its [`Hierarchy`].
pub type NodeId = usize;

/// A container or leaf in the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyNode {
    label: String,
    /// Children by label, in first-insertion order.
    children: IndexMap<String, NodeId>,
}

impl HierarchyNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The outline tree. Node 0 is the unlabeled synthetic root, which is never
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![HierarchyNode::default()],
        }
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id]
    }

    /// Children of `id`, in render order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id].children.values().copied()
    }

    /// Number of nodes, excluding the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Walks `path` from the root, creating missing children on the way, and
    /// returns the node the path ends at. Inserting an existing path is a
    /// no-op.
    pub fn insert_path<'a, I>(&mut self, path: I) -> NodeId
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = Self::ROOT;
        for segment in path {
            current = match self.nodes[current].children.get(segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(HierarchyNode {
                        label: segment.to_string(),
                        children: IndexMap::new(),
                    });
                    self.nodes[current]
                        .children
                        .insert(segment.to_string(), child);
                    child
                }
            };
        }
        current
    }
}

/// Builds the outline for `specs`: each spec contributes its container path
/// followed by its leaf label.
pub fn build_hierarchy(specs: &[SpecPath]) -> Hierarchy {
    let mut tree = Hierarchy::new();
    for spec in specs {
        tracing::debug!(
            depth = spec.containers.len(),
            leaf = %spec.leaf_label,
            "inserting spec path"
        );
        tree.insert_path(spec.segments());
    }
    tracing::info!(nodes = tree.node_count(), "built spec hierarchy");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(containers: &[&str], text: &str) -> SpecPath {
        SpecPath {
            containers: containers.iter().map(|c| c.to_string()).collect(),
            leaf_label: format!("it {text}"),
        }
    }

    fn child(tree: &Hierarchy, parent: NodeId, label: &str) -> Option<NodeId> {
        tree.children(parent)
            .find(|&id| tree.node(id).label() == label)
    }

    fn labels(tree: &Hierarchy, id: NodeId) -> Vec<&str> {
        tree.children(id).map(|c| tree.node(c).label()).collect()
    }

    #[test]
    fn shared_prefix_is_stored_once() {
        let tree = build_hierarchy(&[spec(&["Widget"], "A"), spec(&["Widget"], "B")]);
        assert_eq!(labels(&tree, Hierarchy::ROOT), ["Widget"]);
        let widget = child(&tree, Hierarchy::ROOT, "Widget").expect("Widget should exist");
        assert_eq!(labels(&tree, widget), ["it A", "it B"]);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn duplicate_paths_collapse() {
        let tree = build_hierarchy(&[spec(&["a", "b"], "x"), spec(&["a", "b"], "x")]);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn empty_containers_attach_leaf_to_root() {
        let tree = build_hierarchy(&[spec(&[], "top")]);
        assert_eq!(labels(&tree, Hierarchy::ROOT), ["it top"]);
        let top = child(&tree, Hierarchy::ROOT, "it top").expect("leaf should exist");
        assert!(tree.node(top).is_leaf());
    }

    #[test]
    fn children_keep_first_insertion_order() {
        let tree = build_hierarchy(&[spec(&["z"], "1"), spec(&["a"], "2"), spec(&["z", "m"], "3")]);
        assert_eq!(labels(&tree, Hierarchy::ROOT), ["z", "a"]);
        let z = child(&tree, Hierarchy::ROOT, "z").expect("z should exist");
        assert_eq!(labels(&tree, z), ["it 1", "m"]);
    }

    #[test]
    fn group_named_like_a_leaf_shares_its_node() {
        let tree = build_hierarchy(&[spec(&[], "x"), spec(&["it x"], "y")]);
        assert_eq!(labels(&tree, Hierarchy::ROOT), ["it x"]);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn insert_path_returns_existing_node_for_known_path() {
        let mut tree = Hierarchy::new();
        let first = tree.insert_path(["a", "b"]);
        let second = tree.insert_path(["a", "b"]);
        assert_eq!(first, second);
        assert_eq!(tree.insert_path([]), Hierarchy::ROOT);
    }

    #[test]
    fn very_deep_nesting_builds_and_drops_on_a_small_stack() {
        let depth = 150_000;
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let containers: Vec<String> = (0..depth).map(|i| format!("g{i}")).collect();
                let tree = build_hierarchy(&[SpecPath {
                    containers,
                    leaf_label: "it bottom".to_string(),
                }]);
                let count = tree.node_count();
                drop(tree);
                count
            })
            .expect("thread should spawn");
        assert_eq!(handle.join().expect("thread should not overflow"), depth + 1);
    }
}
