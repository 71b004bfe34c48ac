//! Grid geometry: node identities and derived pixel centers.
//!
//! The geometry provider turns a viewport size into an N×N lattice of node
//! centers plus a shared hit radius. Geometry is computed once per viewport
//! size and treated as immutable afterwards; the state machine recomputes it
//! only between drags.

use std::fmt;

use crate::hit_test::{find_node_at, NodeGeometry};

/// Identity of one selectable grid node: zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub row: u32,
    pub col: u32,
}

impl NodeId {
    /// Create a node identity from zero-based row/column coordinates.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major linear index within an `n`×`n` grid.
    pub fn index(&self, n: u32) -> u32 {
        self.row * n + self.col
    }

    /// User-facing digit: 1-based row-major index, matching the classic
    /// 3×3 lock numbering (1..9, top-left to bottom-right).
    pub fn digit(&self, n: u32) -> u32 {
        self.index(n) + 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One node of the grid: identity plus derived pixel center.
///
/// Immutable once the grid is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridNode {
    pub id: NodeId,
    pub cx: f32,
    pub cy: f32,
}

impl NodeGeometry for GridNode {
    fn id(&self) -> NodeId {
        self.id
    }
    fn center(&self) -> (f32, f32) {
        (self.cx, self.cy)
    }
}

/// The N×N node lattice for one viewport size.
///
/// Owns all nodes in row-major order; nodes have no independent lifecycle.
/// Degenerate input (non-positive or non-finite viewport, zero grid size)
/// yields an empty grid rather than NaN centers, so hit testing degrades to
/// "no node ever selected".
#[derive(Debug, Clone, PartialEq)]
pub struct PatternGrid {
    size: u32,
    side: f32,
    hit_radius: f32,
    nodes: Vec<GridNode>,
}

impl PatternGrid {
    /// Compute an `n`×`n` grid for a square viewport.
    ///
    /// Node (i, j) for i, j in 1..=n is centered at
    /// `(side / (n + 1) * j, side / (n + 1) * i)`; the hit radius is fixed
    /// per grid, never recomputed per node. Deterministic for equal inputs.
    pub fn compute(viewport: f32, n: u32, hit_radius: f32) -> Self {
        if !viewport.is_finite() || viewport <= 0.0 || n == 0 || !hit_radius.is_finite() {
            return Self::empty(n, hit_radius);
        }

        let step = viewport / (n + 1) as f32;
        let mut nodes = Vec::with_capacity((n * n) as usize);
        for row in 0..n {
            for col in 0..n {
                nodes.push(GridNode {
                    id: NodeId::new(row, col),
                    cx: step * (col + 1) as f32,
                    cy: step * (row + 1) as f32,
                });
            }
        }

        Self {
            size: n,
            side: viewport,
            hit_radius,
            nodes,
        }
    }

    /// Compute a grid from independent width/height bounds, using the
    /// smaller of the two for a square layout.
    pub fn compute_from_bounds(width: f32, height: f32, n: u32, hit_radius: f32) -> Self {
        Self::compute(width.min(height), n, hit_radius)
    }

    /// An empty grid: no nodes, zero side length. Hit tests always miss.
    pub fn empty(n: u32, hit_radius: f32) -> Self {
        Self {
            size: n,
            side: 0.0,
            hit_radius: if hit_radius.is_finite() { hit_radius } else { 0.0 },
            nodes: Vec::new(),
        }
    }

    /// Grid size N (the grid holds N² nodes, or none if degenerate).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The square side length this grid was computed for.
    pub fn side(&self) -> f32 {
        self.side
    }

    /// The shared hit radius.
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// True when the grid holds no usable nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the node containing the given point, if any.
    pub fn node_at(&self, x: f32, y: f32) -> Option<NodeId> {
        find_node_at(x, y, self.nodes.iter().copied(), self.hit_radius)
    }

    /// Pixel center of a node, if it belongs to this grid.
    pub fn center_of(&self, id: NodeId) -> Option<(f32, f32)> {
        if id.row >= self.size || id.col >= self.size {
            return None;
        }
        self.nodes
            .get(id.index(self.size) as usize)
            .map(|node| (node.cx, node.cy))
    }
}
