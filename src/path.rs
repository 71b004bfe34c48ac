//! The ordered, duplicate-free selection sequence built up during one drag.

use crate::geometry::NodeId;

/// Ordered sequence of selected nodes with no duplicates.
///
/// Insertion order is first-touch order: re-pushing an already-present node
/// is a no-op, so the path only grows through unvisited nodes and is never
/// reordered. Mutated only by the state machine during an active drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternPath {
    nodes: Vec<NodeId>,
}

impl PatternPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node unless it is already in the path.
    ///
    /// Returns `true` if the node was appended.
    pub fn push(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.nodes.push(id);
        true
    }

    /// Check whether a node is already in the path.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Remove all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node has been selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The selected nodes in selection order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The most recently selected node.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Iterator over the selected nodes in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    /// Render the path as a printable value for an `n`×`n` grid.
    pub fn value(&self, n: u32) -> String {
        format_value(&self.nodes, n)
    }
}

/// Render an ordered node sequence as dash-joined 1-based digits,
/// e.g. `"1-5-9-3-7"` on a 3×3 grid.
pub fn format_value(nodes: &[NodeId], n: u32) -> String {
    let digits: Vec<String> = nodes.iter().map(|id| id.digit(n).to_string()).collect();
    digits.join("-")
}
