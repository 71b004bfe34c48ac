//! # Slint Pattern Lock Library
//!
//! A Slint helper library for building gesture grid-pattern ("pattern lock")
//! inputs: the user drags a pointer across an N×N grid of nodes and the
//! engine records which nodes were traversed, in order, producing an ordered,
//! duplicate-free pattern that is accepted or rejected at release.
//!
//! ## Features
//!
//! - **Toolkit-Free Core** - Geometry, hit testing, the drag state machine,
//!   and draw-list projection are plain Rust with no UI types
//! - **Explicit State** - No globals; independent engine instances never
//!   cross-contaminate
//! - **Pure Rendering** - State projects into an ordered draw-instruction
//!   list; circle colors are classified fresh per node
//! - **Slint Bridge** - A clonable controller wires pointer callbacks,
//!   host notifications, and `VecModel` synchronization
//!
//! ## Quick Start
//!
//! ```
//! use slint_pattern_lock::{PatternConfig, PatternEngine, PatternOutcome};
//!
//! let mut engine = PatternEngine::with_viewport(PatternConfig::default(), 400.0);
//!
//! engine.pointer_down(100.0, 100.0);
//! engine.pointer_move(200.0, 200.0);
//! engine.pointer_move(300.0, 300.0);
//! engine.pointer_move(200.0, 100.0);
//! engine.pointer_move(100.0, 200.0);
//!
//! match engine.pointer_up(100.0, 200.0) {
//!     Some(PatternOutcome::Accepted(nodes)) => assert_eq!(nodes.len(), 5),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Core Components
//!
//! - [`PatternGrid`] - N×N node geometry derived from the viewport size
//! - [`find_node_at`] - Hit-test a pointer coordinate against node centers
//! - [`PatternPath`] - The ordered, duplicate-free selection sequence
//! - [`PatternEngine`] - The drag/idle lifecycle and finalize rules
//! - [`project`] - Pure projection of state into circle/line instructions
//! - [`PatternLockController`] - Slint-facing wiring and model sync

pub mod geometry;
pub mod path;
pub mod state;
pub mod render;
pub mod controller;

pub use geometry::{GridNode, NodeId, PatternGrid};
pub use hit_test::{find_node_at, NodeGeometry, SimpleNodeGeometry};
pub use path::{format_value, PatternPath};
pub use state::{
    DragPhase, PatternConfig, PatternEngine, PatternOutcome, RejectReason, DEFAULT_GRID_SIZE,
    DEFAULT_HIT_RADIUS, DEFAULT_MIN_PATTERN_LEN,
};
pub use render::{project, ColorState, DrawOp};
pub use controller::{
    CircleItem, LineItem, PatternLockController, NORMAL_COLOR, SELECTED_COLOR,
};
