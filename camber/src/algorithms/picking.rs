use crate::geometry::math::dist_sq;
use crate::model::Point;

/// Index of the first control point within `radius` of `probe`, or None.
/// Squared-distance compare; ties between overlapping points resolve to
/// the lowest index, so ordering matters for coincident points.
pub fn nearest_point_index(points: &[Point], probe: Point, radius: f32) -> Option<usize> {
    let r2 = radius * radius;
    points.iter().position(|&p| dist_sq(p, probe) <= r2)
}
