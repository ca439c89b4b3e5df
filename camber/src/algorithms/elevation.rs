//! Elevation pipeline: derives the chain of elevated polygons from the
//! base control polygon and the requested level.
//!
//! The chain is a pure function of (base, level); a single base-point
//! change invalidates everything, so there is no incremental update —
//! every call discards and recomputes the whole history.

use crate::geometry::bezier::elevate_degree;
use crate::model::Point;

/// Apply `elevate_degree` exactly `level` times, collecting each
/// intermediate polygon in order. history[0] is the base elevated once;
/// the last entry carries `base.len() + level` points. A degenerate base
/// (< 2 points) yields an empty history regardless of level.
pub fn build_history(base: &[Point], level: u32) -> Vec<Vec<Point>> {
    let mut history: Vec<Vec<Point>> = Vec::with_capacity(level as usize);
    if base.len() < 2 {
        return history;
    }
    for _ in 0..level {
        let next = elevate_degree(history.last().map_or(base, |p| p.as_slice()));
        history.push(next);
    }
    history
}
