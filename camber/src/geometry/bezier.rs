//! Bézier curve evaluation and degree elevation.
//!
//! Polygons are ordered control-point slices; degree = length - 1.
//! All callers guarantee a length of at least 2 (shorter polygons
//! define no curve and are filtered upstream).

use crate::model::Point;

/// Evaluate the curve at parameter t ∈ [0,1] by repeated linear
/// interpolation (de Casteljau). Exact at the endpoints: t <= 0 and
/// t >= 1 return the first and last control point without any
/// floating-point accumulation.
pub fn eval(polygon: &[Point], t: f32) -> Point {
    debug_assert!(polygon.len() >= 2);
    if t <= 0.0 {
        return polygon[0];
    }
    if t >= 1.0 {
        return polygon[polygon.len() - 1];
    }
    let mut scratch = polygon.to_vec();
    eval_with(&mut scratch, polygon, t)
}

/// Allocation-free evaluation reusing a caller-owned scratch buffer.
/// `scratch` must be at least as long as `polygon`; its contents are
/// overwritten. This is the per-frame hot path during drags.
pub fn eval_with(scratch: &mut [Point], polygon: &[Point], t: f32) -> Point {
    debug_assert!(polygon.len() >= 2);
    debug_assert!(scratch.len() >= polygon.len());
    let n = polygon.len();
    if t <= 0.0 {
        return polygon[0];
    }
    if t >= 1.0 {
        return polygon[n - 1];
    }
    scratch[..n].copy_from_slice(polygon);
    for round in 1..n {
        for i in 0..n - round {
            scratch[i] = Point::lerp(scratch[i], scratch[i + 1], t);
        }
    }
    scratch[0]
}

/// Degree elevation: a degree-n polygon (n+1 points) becomes a
/// degree-(n+1) polygon (n+2 points) describing the identical curve.
/// Endpoints are kept; interior point i is the convex combination
/// α·old[i-1] + (1-α)·old[i] with α = i/(n+1).
pub fn elevate_degree(polygon: &[Point]) -> Vec<Point> {
    let n = polygon.len().saturating_sub(1);
    if n < 1 {
        return polygon.to_vec();
    }
    let mut elevated = Vec::with_capacity(n + 2);
    elevated.push(polygon[0]);
    for i in 1..=n {
        let alpha = i as f32 / (n + 1) as f32;
        let prev = polygon[i - 1];
        let cur = polygon[i];
        elevated.push(Point {
            x: alpha * prev.x + (1.0 - alpha) * cur.x,
            y: alpha * prev.y + (1.0 - alpha) * cur.y,
        });
    }
    elevated.push(polygon[n]);
    elevated
}

/// Number of straight-line segments used to approximate a curve of the
/// given polygon length.
pub fn sample_segments(point_count: usize) -> usize {
    (point_count * 40).max(40)
}

/// Uniformly sample the curve into `out` (cleared first), producing
/// `segments + 1` points from t = 0 to t = 1 inclusive.
pub fn sample_into(polygon: &[Point], segments: usize, out: &mut Vec<Point>) {
    out.clear();
    if polygon.len() < 2 || segments == 0 {
        return;
    }
    let mut scratch = vec![Point::ZERO; polygon.len()];
    out.reserve(segments + 1);
    for s in 0..=segments {
        let t = s as f32 / segments as f32;
        out.push(eval_with(&mut scratch, polygon, t));
    }
}
