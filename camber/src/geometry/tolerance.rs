// Centralized tolerances and helpers for robust geometry

pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold (px)
pub const EPS_CURVE: f32 = 1e-2;          // curve comparison slack in pixel space

#[inline] pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }
#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
