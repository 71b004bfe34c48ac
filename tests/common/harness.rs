//! Test harness for driving a pattern lock controller.
//!
//! Provides a complete controller setup with callback tracking and helper
//! methods for simulating drags through node centers, including intermediate
//! pointer samples between nodes the way a real pointer stream delivers them.

#![allow(dead_code)]

use super::CallbackTracker;
use slint_pattern_lock::{NodeId, PatternConfig, PatternLockController, PatternOutcome};

/// Default square viewport used by the harness (centers at 100/200/300).
pub const VIEWPORT: f32 = 400.0;

/// Test harness wiring a [`PatternLockController`] to a [`CallbackTracker`].
pub struct PatternHarness {
    pub ctrl: PatternLockController,
    pub tracker: CallbackTracker,
}

impl PatternHarness {
    /// Create a harness with the default configuration and viewport.
    pub fn new() -> Self {
        Self::with_config(PatternConfig::default())
    }

    /// Create a harness with an explicit configuration.
    pub fn with_config(config: PatternConfig) -> Self {
        let ctrl = PatternLockController::with_config(config);
        ctrl.handle_viewport_changed(VIEWPORT, VIEWPORT);

        let tracker = CallbackTracker::new();
        ctrl.on_drag_started({
            let starts = tracker.drag_started.clone();
            move |started| starts.borrow_mut().push(started)
        });
        ctrl.on_pattern_result({
            let results = tracker.pattern_results.clone();
            move |outcome, value| {
                results
                    .borrow_mut()
                    .push((outcome.is_accepted(), value.to_string()))
            }
        });

        Self { ctrl, tracker }
    }

    /// Pixel center of a grid node.
    pub fn center(&self, row: u32, col: u32) -> (f32, f32) {
        self.ctrl
            .engine()
            .borrow()
            .grid()
            .center_of(NodeId::new(row, col))
            .expect("node should exist in the harness grid")
    }

    /// Simulate a full drag through the given nodes: down on the first
    /// center, moves through the rest with a midpoint sample between each
    /// pair, up on the last center.
    pub fn drag(&self, nodes: &[(u32, u32)]) -> Option<PatternOutcome> {
        let (mut x, mut y) = self.center(nodes[0].0, nodes[0].1);
        self.ctrl.handle_pointer_down(x, y);

        for &(row, col) in &nodes[1..] {
            let (nx, ny) = self.center(row, col);
            // Midpoint sample, as a real pointer stream would deliver
            self.ctrl
                .handle_pointer_move((x + nx) / 2.0, (y + ny) / 2.0);
            self.ctrl.handle_pointer_move(nx, ny);
            x = nx;
            y = ny;
        }

        self.ctrl.handle_pointer_up(x, y)
    }

    /// Simulate a drag that ends with a release away from any node.
    pub fn drag_release_off_node(
        &self,
        nodes: &[(u32, u32)],
        release: (f32, f32),
    ) -> Option<PatternOutcome> {
        let (x, y) = self.center(nodes[0].0, nodes[0].1);
        self.ctrl.handle_pointer_down(x, y);
        for &(row, col) in &nodes[1..] {
            let (x, y) = self.center(row, col);
            self.ctrl.handle_pointer_move(x, y);
        }
        self.ctrl.handle_pointer_up(release.0, release.1)
    }

    /// The path currently held by the engine, as (row, col) pairs.
    pub fn path(&self) -> Vec<(u32, u32)> {
        self.ctrl
            .engine()
            .borrow()
            .path()
            .nodes()
            .iter()
            .map(|id| (id.row, id.col))
            .collect()
    }
}

impl Default for PatternHarness {
    fn default() -> Self {
        Self::new()
    }
}
