use crate::model::Point;

/// Squared Euclidean distance. Comparison only; never shown to the user,
/// so the root extraction is skipped.
#[inline]
pub fn dist_sq(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}
