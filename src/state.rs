//! The pattern state machine: drag lifecycle, node selection, finalization.
//!
//! [`PatternEngine`] owns the grid geometry and the current path and consumes
//! the pointer event stream (down/move/up, plus host-initiated cancel). All
//! pointer coordinates are valid input; the only failure mode is the semantic
//! rejection of too-short patterns, reported as a [`PatternOutcome`], never
//! as an error.

use std::fmt;

use crate::geometry::{NodeId, PatternGrid};
use crate::path::PatternPath;
use crate::render::{project, DrawOp};

/// Default grid size N (N×N nodes).
pub const DEFAULT_GRID_SIZE: u32 = 3;
/// Default node hit radius in logical units.
pub const DEFAULT_HIT_RADIUS: f32 = 15.0;
/// Default minimum number of nodes for an accepted pattern.
pub const DEFAULT_MIN_PATTERN_LEN: usize = 5;

/// Engine configuration, consumed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Grid size N; the grid holds N² nodes (default: 3).
    pub grid_size: u32,
    /// Node hit radius in logical units (default: 15.0).
    pub hit_radius: f32,
    /// Minimum path length for an accepted pattern (default: 5).
    ///
    /// Values below 2 are treated as 2: a single tap is never accepted.
    pub min_pattern_len: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            hit_radius: DEFAULT_HIT_RADIUS,
            min_pattern_len: DEFAULT_MIN_PATTERN_LEN,
        }
    }
}

/// Drag lifecycle phase.
///
/// Finalization is transient: `pointer_up` classifies the path and returns
/// to `Idle` within the same call, so no drag is ever left permanently
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Active,
}

/// Why a finalized pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer nodes were selected than the configured minimum.
    TooShort { len: usize, min: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooShort { len, min } => {
                write!(f, "pattern too short: {} nodes selected, need at least {}", len, min)
            }
        }
    }
}

/// Finalize verdict for one completed drag.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternOutcome {
    /// The ordered node sequence of an accepted pattern.
    Accepted(Vec<NodeId>),
    /// The pattern was discarded.
    Rejected(RejectReason),
}

impl PatternOutcome {
    /// True for accepted patterns.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PatternOutcome::Accepted(_))
    }
}

/// The gesture-pattern input engine.
///
/// Explicitly constructed state, no globals: independent instances never
/// cross-contaminate. Single-threaded by design; wrap in `Rc<RefCell<_>>`
/// for sharing across UI callbacks (see
/// [`PatternLockController`](crate::controller::PatternLockController)).
#[derive(Debug, Clone)]
pub struct PatternEngine {
    config: PatternConfig,
    grid: PatternGrid,
    path: PatternPath,
    phase: DragPhase,
    pointer: Option<(f32, f32)>,
    off_node: bool,
    pending_viewport: Option<f32>,
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new(PatternConfig::default())
    }
}

impl PatternEngine {
    /// Create an engine with an empty grid; call [`set_viewport`] once the
    /// host knows its size.
    ///
    /// [`set_viewport`]: PatternEngine::set_viewport
    pub fn new(config: PatternConfig) -> Self {
        Self {
            config,
            grid: PatternGrid::empty(config.grid_size, config.hit_radius),
            path: PatternPath::new(),
            phase: DragPhase::Idle,
            pointer: None,
            off_node: false,
            pending_viewport: None,
        }
    }

    /// Create an engine with geometry computed for a square viewport.
    pub fn with_viewport(config: PatternConfig, viewport: f32) -> Self {
        let mut engine = Self::new(config);
        engine.set_viewport(viewport);
        engine
    }

    /// Update the viewport size.
    ///
    /// Geometry is immutable for the duration of a drag: while a drag is
    /// active the new size is stashed and applied at the next pointer-down.
    pub fn set_viewport(&mut self, size: f32) {
        if self.phase == DragPhase::Active {
            self.pending_viewport = Some(size);
        } else {
            self.grid = PatternGrid::compute(size, self.config.grid_size, self.config.hit_radius);
            self.pending_viewport = None;
        }
    }

    /// Update the viewport from independent width/height bounds; the smaller
    /// side wins (square layout).
    pub fn set_viewport_bounds(&mut self, width: f32, height: f32) {
        self.set_viewport(width.min(height));
    }

    /// The engine configuration.
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// The current grid geometry.
    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    /// The current path.
    pub fn path(&self) -> &PatternPath {
        &self.path
    }

    /// The current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The last recorded pointer coordinate, while a drag is active.
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// True while the pointer is dragging with no node under it.
    pub fn moving_without_node(&self) -> bool {
        self.off_node
    }

    /// Return to `Idle` with an empty path, discarding any drag in progress.
    ///
    /// A deferred viewport resize is applied immediately.
    pub fn reset(&mut self) {
        self.path.clear();
        self.phase = DragPhase::Idle;
        self.pointer = None;
        self.off_node = false;
        if let Some(size) = self.pending_viewport.take() {
            self.grid = PatternGrid::compute(size, self.config.grid_size, self.config.hit_radius);
        }
    }

    /// Pointer-down: begin a fresh drag.
    ///
    /// Valid from any phase. Clears the path, applies any deferred resize,
    /// and hit-tests the down coordinate; a hit anchors the path, a miss
    /// starts the drag in the moving-without-node state.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if let Some(size) = self.pending_viewport.take() {
            self.grid = PatternGrid::compute(size, self.config.grid_size, self.config.hit_radius);
        }
        self.phase = DragPhase::Active;
        self.path.clear();
        self.off_node = false;
        self.touch(x, y);
    }

    /// Pointer-move: extend the drag.
    ///
    /// Ignored unless a drag is active. The pointer coordinate is recorded
    /// unconditionally (the trailing-segment render needs it even when no
    /// node is added); the path grows only through nodes not yet visited.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.phase != DragPhase::Active {
            return;
        }
        self.touch(x, y);
    }

    /// Pointer-up: finalize the drag.
    ///
    /// Returns `None` when no drag was active or no node was ever selected
    /// (an empty drag is a no-op, not a rejection). Otherwise classifies the
    /// path against the configured minimum length and returns to `Idle`.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<PatternOutcome> {
        if self.phase != DragPhase::Active {
            return None;
        }
        // Same hit-test-and-append as a move, for down/move/up symmetry; a
        // continuous drag has already captured every node via moves.
        self.touch(x, y);
        self.finalize()
    }

    /// Cancel the drag (pointer-capture loss or host-side interruption).
    ///
    /// Equivalent to a pointer-up at the last recorded coordinate and
    /// follows the same finalize rules, so no drag stays active.
    pub fn cancel(&mut self) -> Option<PatternOutcome> {
        if self.phase != DragPhase::Active {
            return None;
        }
        match self.pointer {
            Some((x, y)) => self.pointer_up(x, y),
            None => self.finalize(),
        }
    }

    /// Project the current state into draw instructions.
    ///
    /// The trailing segment is emitted only while dragging off-node with a
    /// non-empty path.
    pub fn draw_list(&self) -> Vec<DrawOp> {
        let trailing = self.phase == DragPhase::Active && self.off_node;
        project(&self.grid, &self.path, self.pointer, trailing)
    }

    /// Record the pointer and run the shared hit-test-and-append step.
    fn touch(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
        match self.grid.node_at(x, y) {
            Some(id) => {
                self.off_node = false;
                self.path.push(id);
            }
            None => self.off_node = true,
        }
    }

    fn finalize(&mut self) -> Option<PatternOutcome> {
        self.phase = DragPhase::Idle;
        self.pointer = None;
        self.off_node = false;

        let min = self.config.min_pattern_len.max(2);
        let len = self.path.len();
        let outcome = match len {
            0 => None,
            _ if len >= min => Some(PatternOutcome::Accepted(self.path.nodes().to_vec())),
            _ => {
                // Too short: discard. Accepted paths are retained so the host
                // keeps rendering the pattern until the next drag begins.
                self.path.clear();
                Some(PatternOutcome::Rejected(RejectReason::TooShort { len, min }))
            }
        };

        if let Some(size) = self.pending_viewport.take() {
            self.grid = PatternGrid::compute(size, self.config.grid_size, self.config.hit_radius);
        }

        outcome
    }
}
