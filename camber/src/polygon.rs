//! Point set management: default layouts and count changes for the
//! control polygon. Order is significant (it defines the parametrization
//! direction) and is never re-sorted here.

use crate::geometry::math::dist_sq;
use crate::model::{Point, MAX_POINTS, MIN_POINTS};

/// Deterministic default layout: `count` points evenly interpolated
/// along a diagonal band of the surface, lower-left toward upper-right.
pub fn default_fanout(count: usize, width: f32, height: f32) -> Vec<Point> {
    let count = count.clamp(MIN_POINTS, MAX_POINTS);
    let mut pts = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / (count - 1) as f32;
        pts.push(Point {
            x: width * (0.1 + 0.8 * t),
            y: height * (0.8 - 0.6 * t),
        });
    }
    pts
}

/// Insert the midpoint of the currently-longest segment (by squared
/// length). Spreads grown points across the polygon instead of
/// clustering them at one end. No-op below 2 points.
pub fn insert_at_longest_segment(points: &mut Vec<Point>) {
    if points.len() < 2 {
        return;
    }
    let mut best_idx = 0;
    let mut max_len_sq = 0.0f32;
    for i in 0..points.len() - 1 {
        let len_sq = dist_sq(points[i], points[i + 1]);
        if len_sq > max_len_sq {
            max_len_sq = len_sq;
            best_idx = i;
        }
    }
    let mid = Point::midpoint(points[best_idx], points[best_idx + 1]);
    points.insert(best_idx + 1, mid);
}

/// Bring the polygon to exactly `target` points (clamped to [2,16]).
/// Shrinking truncates trailing points; this is the documented policy,
/// deterministic rather than geometrically optimal. Growing inserts at
/// the longest segment; a polygon that has collapsed below 2 points is
/// replaced wholesale with a fresh default fan-out.
pub fn resize(points: &mut Vec<Point>, target: usize, width: f32, height: f32) {
    let n = target.clamp(MIN_POINTS, MAX_POINTS);
    if n == points.len() {
        return;
    }
    if n < points.len() {
        points.truncate(n);
        return;
    }
    while points.len() < n {
        if points.len() < 2 {
            *points = default_fanout(n, width, height);
            break;
        }
        insert_at_longest_segment(points);
    }
}
