//! Pure projection of engine state into an ordered list of draw instructions.
//!
//! The projector never mutates anything: the color of every circle is
//! classified fresh per node (`Selected` iff the node is in the path), so
//! there is no shared paint state whose ordering could leak between nodes.
//! Instruction order is significant: later instructions paint over earlier
//! ones at shared boundaries.

use crate::geometry::PatternGrid;
use crate::path::PatternPath;

/// Color classification for a node circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorState {
    /// Node is not part of the current path.
    Normal,
    /// Node is part of the current path.
    Selected,
}

/// One draw instruction for the host's paint surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        state: ColorState,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

impl DrawOp {
    /// True for circle instructions.
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawOp::Circle { .. })
    }

    /// True for line instructions.
    pub fn is_line(&self) -> bool {
        matches!(self, DrawOp::Line { .. })
    }
}

/// Project grid and path state into a draw list.
///
/// Emits, in order:
/// 1. one circle per grid node, row-major, `Selected` iff the node is in
///    `path`;
/// 2. one line per consecutive path pair, in path order (A→B, B→C, …);
/// 3. one trailing line from the last path node to `pointer` iff `trailing`
///    is set (the pointer is currently over no node) and the path is
///    non-empty.
///
/// An empty path yields circles only.
pub fn project(
    grid: &PatternGrid,
    path: &PatternPath,
    pointer: Option<(f32, f32)>,
    trailing: bool,
) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(grid.nodes().len() + path.len() + 1);

    for node in grid.nodes() {
        let state = if path.contains(node.id) {
            ColorState::Selected
        } else {
            ColorState::Normal
        };
        ops.push(DrawOp::Circle {
            cx: node.cx,
            cy: node.cy,
            radius: grid.hit_radius(),
            state,
        });
    }

    for pair in path.nodes().windows(2) {
        if let (Some((x1, y1)), Some((x2, y2))) = (grid.center_of(pair[0]), grid.center_of(pair[1]))
        {
            ops.push(DrawOp::Line { x1, y1, x2, y2 });
        }
    }

    if trailing {
        let anchor = path.last().and_then(|id| grid.center_of(id));
        if let (Some((x1, y1)), Some((x2, y2))) = (anchor, pointer) {
            ops.push(DrawOp::Line { x1, y1, x2, y2 });
        }
    }

    ops
}
