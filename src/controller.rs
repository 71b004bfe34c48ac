//! High-level controller for pattern lock applications.
//!
//! The [`PatternLockController`] reduces boilerplate by managing the engine,
//! host notifications, and draw-list model synchronization in one place.
//!
//! # Example
//!
//! ```ignore
//! use slint_pattern_lock::PatternLockController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = PatternLockController::new();
//!     let w = window.as_weak();
//!
//!     // Feed the draw models to the UI
//!     window.set_circles(ctrl.circles_model());
//!     window.set_lines(ctrl.lines_model());
//!
//!     // Pointer events - controller handles the logic
//!     window.on_pattern_pointer_down(ctrl.pointer_down_callback());
//!     window.on_pattern_pointer_move(ctrl.pointer_move_callback());
//!     window.on_pattern_pointer_up(ctrl.pointer_up_callback());
//!     window.on_pattern_area_resized(ctrl.viewport_changed_callback());
//!
//!     // Host notifications
//!     ctrl.on_drag_started({
//!         let w = w.clone();
//!         move |_| {
//!             if let Some(w) = w.upgrade() {
//!                 w.set_hint("draw your pattern".into());
//!             }
//!         }
//!     });
//!     ctrl.on_pattern_result({
//!         let w = w.clone();
//!         move |outcome, value| {
//!             if let Some(w) = w.upgrade() {
//!                 if outcome.is_accepted() {
//!                     w.set_hint(value);
//!                 } else {
//!                     w.set_hint("at least 5 nodes".into());
//!                 }
//!             }
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::path::format_value;
use crate::render::{ColorState, DrawOp};
use crate::state::{PatternConfig, PatternEngine, PatternOutcome};
use slint::{Color, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Default color for unselected node circles (the reference palette).
pub const NORMAL_COLOR: Color = Color::from_argb_encoded(0xFF70_DBDB);
/// Default color for selected circles and path lines.
pub const SELECTED_COLOR: Color = Color::from_argb_encoded(0xFFC0_C0C0);

/// Row data for one node circle, pushed to the host's circle model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleItem {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub color: Color,
    pub selected: bool,
}

/// Row data for one path (or trailing) line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineItem {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: Color,
}

type DragStartedFn = Box<dyn Fn(bool)>;
type PatternResultFn = Box<dyn Fn(&PatternOutcome, SharedString)>;

/// Controller that owns a [`PatternEngine`] and keeps Slint models in sync.
///
/// This provides a high-level API that handles:
/// - Pointer event routing (down/move/up/cancel, viewport resize)
/// - Host notifications (`on_drag_started`, `on_pattern_result`)
/// - Draw-list synchronization into circle/line `VecModel`s after every
///   state mutation (request-repaint-on-change)
/// - The normal/selected color pair
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct PatternLockController {
    engine: Rc<RefCell<PatternEngine>>,
    circles: Rc<VecModel<CircleItem>>,
    lines: Rc<VecModel<LineItem>>,
    normal_color: Rc<RefCell<Color>>,
    selected_color: Rc<RefCell<Color>>,
    drag_started: Rc<RefCell<Option<DragStartedFn>>>,
    pattern_result: Rc<RefCell<Option<PatternResultFn>>>,
}

impl Default for PatternLockController {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLockController {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PatternConfig::default())
    }

    /// Create a controller with an explicit configuration.
    pub fn with_config(config: PatternConfig) -> Self {
        let ctrl = Self {
            engine: Rc::new(RefCell::new(PatternEngine::new(config))),
            circles: Rc::new(VecModel::default()),
            lines: Rc::new(VecModel::default()),
            normal_color: Rc::new(RefCell::new(NORMAL_COLOR)),
            selected_color: Rc::new(RefCell::new(SELECTED_COLOR)),
            drag_started: Rc::new(RefCell::new(None)),
            pattern_result: Rc::new(RefCell::new(None)),
        };
        ctrl.resync_models();
        ctrl
    }

    /// Get access to the engine.
    pub fn engine(&self) -> Rc<RefCell<PatternEngine>> {
        self.engine.clone()
    }

    /// The circle model to hand to the UI (one row per grid node, row-major).
    pub fn circles_model(&self) -> ModelRc<CircleItem> {
        ModelRc::from(self.circles.clone())
    }

    /// The line model to hand to the UI (path segments, then the optional
    /// trailing segment).
    pub fn lines_model(&self) -> ModelRc<LineItem> {
        ModelRc::from(self.lines.clone())
    }

    /// Set the normal/selected color pair (defaults: [`NORMAL_COLOR`],
    /// [`SELECTED_COLOR`]).
    pub fn set_colors(&self, normal: Color, selected: Color) {
        *self.normal_color.borrow_mut() = normal;
        *self.selected_color.borrow_mut() = selected;
        self.resync_models();
    }

    /// Register the drag-started notification, fired once per pointer-down
    /// with `true`.
    pub fn on_drag_started(&self, f: impl Fn(bool) + 'static) {
        *self.drag_started.borrow_mut() = Some(Box::new(f));
    }

    /// Register the finalize notification, fired once per pointer-up or
    /// cancel that classified a non-empty path.
    ///
    /// For accepted patterns the second argument carries the value rendering
    /// (dash-joined 1-based node digits, e.g. `"1-5-9-3-7"`); for rejected
    /// ones it is empty.
    pub fn on_pattern_result(&self, f: impl Fn(&PatternOutcome, SharedString) + 'static) {
        *self.pattern_result.borrow_mut() = Some(Box::new(f));
    }

    // === Callback factories ===

    /// Returns a callback for the UI's pointer-down event.
    pub fn pointer_down_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_down(x, y)
    }

    /// Returns a callback for the UI's pointer-move event.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_move(x, y)
    }

    /// Returns a callback for the UI's pointer-up event.
    pub fn pointer_up_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| {
            ctrl.handle_pointer_up(x, y);
        }
    }

    /// Returns a callback for the UI's resize event `(width, height)`.
    pub fn viewport_changed_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |w, h| ctrl.handle_viewport_changed(w, h)
    }

    // === Direct handlers ===

    /// Handle pointer-down: start a drag and notify the host.
    pub fn handle_pointer_down(&self, x: f32, y: f32) {
        self.engine.borrow_mut().pointer_down(x, y);
        if let Some(f) = self.drag_started.borrow().as_ref() {
            f(true);
        }
        self.resync_models();
    }

    /// Handle pointer-move: extend the drag.
    pub fn handle_pointer_move(&self, x: f32, y: f32) {
        self.engine.borrow_mut().pointer_move(x, y);
        self.resync_models();
    }

    /// Handle pointer-up: finalize the drag and notify the host.
    pub fn handle_pointer_up(&self, x: f32, y: f32) -> Option<PatternOutcome> {
        let outcome = self.engine.borrow_mut().pointer_up(x, y);
        self.report(outcome)
    }

    /// Cancel a drag in progress (pointer-capture loss); follows the same
    /// finalize rules as pointer-up.
    pub fn cancel(&self) -> Option<PatternOutcome> {
        let outcome = self.engine.borrow_mut().cancel();
        self.report(outcome)
    }

    /// Handle a resize of the pattern area. Applied immediately while idle,
    /// deferred to the next drag otherwise.
    pub fn handle_viewport_changed(&self, width: f32, height: f32) {
        self.engine.borrow_mut().set_viewport_bounds(width, height);
        self.resync_models();
    }

    /// The accepted-value rendering for an outcome, empty for rejections.
    pub fn value_string(&self, outcome: &PatternOutcome) -> SharedString {
        match outcome {
            PatternOutcome::Accepted(nodes) => {
                let n = self.engine.borrow().config().grid_size;
                SharedString::from(format_value(nodes, n))
            }
            PatternOutcome::Rejected(_) => SharedString::default(),
        }
    }

    fn report(&self, outcome: Option<PatternOutcome>) -> Option<PatternOutcome> {
        if let Some(ref outcome) = outcome {
            let value = self.value_string(outcome);
            if let Some(f) = self.pattern_result.borrow().as_ref() {
                f(outcome, value);
            }
        }
        self.resync_models();
        outcome
    }

    /// Rebuild the circle/line rows from the engine's draw list and diff
    /// them into the models row by row.
    fn resync_models(&self) {
        let normal = *self.normal_color.borrow();
        let selected = *self.selected_color.borrow();

        let mut circles = Vec::new();
        let mut lines = Vec::new();
        for op in self.engine.borrow().draw_list() {
            match op {
                DrawOp::Circle { cx, cy, radius, state } => circles.push(CircleItem {
                    cx,
                    cy,
                    radius,
                    color: if state == ColorState::Selected { selected } else { normal },
                    selected: state == ColorState::Selected,
                }),
                DrawOp::Line { x1, y1, x2, y2 } => lines.push(LineItem {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: selected,
                }),
            }
        }

        sync_rows(&self.circles, &circles);
        sync_rows(&self.lines, &lines);
    }
}

/// Update existing rows in place, append new ones, drop extras.
fn sync_rows<T: Clone + PartialEq + 'static>(model: &VecModel<T>, rows: &[T]) {
    for (i, row) in rows.iter().enumerate() {
        if i < model.row_count() {
            if model.row_data(i).as_ref() != Some(row) {
                model.set_row_data(i, row.clone());
            }
        } else {
            model.push(row.clone());
        }
    }
    while model.row_count() > rows.len() {
        model.remove(rows.len());
    }
}
