use crate::tree::{Hierarchy, NodeId};
use crate::types::config::{RenderConfig, DEFAULT_INDENT_WIDTH};

const BULLET: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level, at least 1.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            indent_width: config.indent_width,
        }
    }
}

/// Renders every descendant of the root as a nested bullet list. The root
/// itself is not part of the output.
pub fn to_markdown(tree: &Hierarchy, options: &RenderOptions) -> String {
    let mut output = String::new();
    for child in tree.children(Hierarchy::ROOT) {
        render_node(tree, child, 0, options, &mut output);
    }
    output
}

/// Writes `node` at `level` followed by its subtree, pre-order.
pub fn render_node(
    tree: &Hierarchy,
    node: NodeId,
    level: usize,
    options: &RenderOptions,
    output: &mut String,
) {
    let mut pending: Vec<(NodeId, usize)> = vec![(node, level)];
    while let Some((id, level)) = pending.pop() {
        let current = tree.node(id);
        output.push_str(&" ".repeat(level * options.indent_width));
        output.push_str(BULLET);
        output.push(' ');
        output.push_str(current.label());
        output.push('\n');
        if current.is_leaf() {
            continue;
        }
        // Reversed so the first child is popped first.
        let start = pending.len();
        pending.extend(tree.children(id).map(|child| (child, level + 1)));
        pending[start..].reverse();
    }
}
