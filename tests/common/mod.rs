//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use std::cell::RefCell;
use std::rc::Rc;

/// Tracks host notification invocations for testing.
///
/// Each field records calls to the corresponding notification with their
/// arguments.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// (started,) per drag-started notification
    pub drag_started: Rc<RefCell<Vec<bool>>>,
    /// (accepted, value) per pattern-result notification
    pub pattern_results: Rc<RefCell<Vec<(bool, String)>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.drag_started.borrow_mut().clear();
        self.pattern_results.borrow_mut().clear();
    }

    /// Number of drag-started notifications recorded.
    pub fn starts(&self) -> usize {
        self.drag_started.borrow().len()
    }

    /// Number of pattern-result notifications recorded.
    pub fn results(&self) -> usize {
        self.pattern_results.borrow().len()
    }

    /// The most recent pattern-result notification, if any.
    pub fn last_result(&self) -> Option<(bool, String)> {
        self.pattern_results.borrow().last().cloned()
    }
}
