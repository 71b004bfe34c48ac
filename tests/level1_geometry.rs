//! Level 1: Geometry Tests
//!
//! Tests grid computation, degenerate viewports, and the reflexivity of
//! hit testing over computed node centers.

use slint_pattern_lock::{find_node_at, NodeId, PatternGrid};

#[test]
fn test_grid_has_n_squared_nodes() {
    for n in 1..=6u32 {
        let grid = PatternGrid::compute(600.0, n, 15.0);
        assert_eq!(grid.nodes().len(), (n * n) as usize);
    }
}

#[test]
fn test_centers_are_evenly_spaced() {
    let grid = PatternGrid::compute(400.0, 3, 15.0);
    // Step = 400 / 4 = 100
    for node in grid.nodes() {
        assert_eq!(node.cx, 100.0 * (node.id.col + 1) as f32);
        assert_eq!(node.cy, 100.0 * (node.id.row + 1) as f32);
    }
}

#[test]
fn test_recompute_is_deterministic() {
    let a = PatternGrid::compute(333.3, 3, 15.0);
    let b = PatternGrid::compute(333.3, 3, 15.0);
    assert_eq!(a, b);
    assert_eq!(a.nodes(), b.nodes());
}

#[test]
fn test_hit_test_reflexive_over_all_centers() {
    for &viewport in &[120.0f32, 400.0, 1080.0] {
        let grid = PatternGrid::compute(viewport, 3, 15.0);
        for node in grid.nodes() {
            assert_eq!(
                grid.node_at(node.cx, node.cy),
                Some(node.id),
                "center of {} must hit-test to itself at viewport {}",
                node.id,
                viewport
            );
        }
    }
}

#[test]
fn test_row_major_tie_break_with_pathological_radius() {
    // Radius larger than the node spacing: every point is inside several
    // radii, and the first node in row-major order must win.
    let grid = PatternGrid::compute(400.0, 3, 250.0);
    assert_eq!(grid.node_at(200.0, 200.0), Some(NodeId::new(0, 0)));
}

#[test]
fn test_degenerate_viewports_yield_empty_grids() {
    for &viewport in &[0.0f32, -50.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let grid = PatternGrid::compute(viewport, 3, 15.0);
        assert!(grid.is_empty(), "viewport {:?} must yield an empty grid", viewport);
        assert_eq!(grid.node_at(100.0, 100.0), None);
    }
}

#[test]
fn test_bounds_reduction_matches_square_compute() {
    let from_bounds = PatternGrid::compute_from_bounds(540.0, 960.0, 3, 15.0);
    let square = PatternGrid::compute(540.0, 3, 15.0);
    assert_eq!(from_bounds, square);
}

#[test]
fn test_generic_hit_test_over_grid_nodes() {
    let grid = PatternGrid::compute(400.0, 3, 15.0);
    let hit = find_node_at(300.0, 300.0, grid.nodes().iter().copied(), grid.hit_radius());
    assert_eq!(hit, Some(NodeId::new(2, 2)));
}
