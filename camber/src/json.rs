use crate::controller::PointerPhase;
use crate::model::{Point, MAX_ELEVATION_LEVEL, MAX_POINTS, MIN_POINTS};
use crate::Editor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    points: Vec<Point>,
    elevation_level: u32,
    show_base: bool,
    show_elevated: bool,
}

pub fn to_json_impl(ed: &Editor) -> Value {
    let snap = Snapshot {
        points: ed.points.clone(),
        elevation_level: ed.level,
        show_base: ed.show_base,
        show_elevated: ed.show_elevated,
    };
    serde_json::to_value(&snap).unwrap_or(Value::Null)
}

/// Restore a snapshot. Everything is clamped on the way in; malformed
/// input leaves the editor untouched and returns false.
pub fn from_json_impl(ed: &mut Editor, v: Value) -> bool {
    let snap: Snapshot = match serde_json::from_value(v) {
        Ok(s) => s,
        Err(_) => return false,
    };
    if snap.points.len() < MIN_POINTS || snap.points.len() > MAX_POINTS {
        return false;
    }
    if snap.points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return false;
    }
    let clamped: Vec<Point> = snap
        .points
        .into_iter()
        .map(|p| ed.clamp_to_surface(p))
        .collect();
    ed.points = clamped;
    ed.level = snap.elevation_level.min(MAX_ELEVATION_LEVEL);
    ed.show_base = snap.show_base;
    ed.show_elevated = snap.show_elevated;
    // The restored polygon has nothing to do with whatever the pointer
    // was touching; an in-flight hover or drag must not survive it.
    ed.pointer = PointerPhase::Idle;
    ed.rebuild();
    ed.bump();
    true
}
