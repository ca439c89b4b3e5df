//! Panel text and control states consumed verbatim by the host UI.

use serde::Serialize;

use crate::model::Point;
use crate::Editor;

/// Textual listing of control points, one per line, index order.
pub fn coordinates_text(points: &[Point]) -> String {
    let lines: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("P{}: ({:.1}, {:.1})", i, p.x, p.y))
        .collect();
    lines.join("\n")
}

/// Human-readable status line describing the base degree and the
/// elevation chain.
pub fn elevation_info(base_degree: usize, steps: usize) -> String {
    if steps == 0 {
        format!(
            "Base degree: {}. Use the slider to pick an elevation level.",
            base_degree
        )
    } else {
        format!(
            "Base degree: {}. Elevations: {}. Current degree: {}.",
            base_degree,
            steps,
            base_degree + steps
        )
    }
}

/// Enabled/disabled flags and captions for the host's controls, plus the
/// current values the host should sync its sliders to.
#[derive(Clone, Debug, Serialize)]
pub struct PanelState {
    pub point_count: u32,
    pub elevation_level: u32,
    pub elevation_enabled: bool,
    pub elevated_toggle_enabled: bool,
    pub base_toggle_caption: String,
    pub elevated_toggle_caption: String,
    pub status: String,
}

pub fn panel_state(ed: &Editor) -> PanelState {
    let can_elevate = ed.points().len() >= 2;
    let has_elevations = !ed.history().is_empty();
    PanelState {
        point_count: ed.points().len() as u32,
        elevation_level: ed.elevation_level(),
        elevation_enabled: can_elevate,
        elevated_toggle_enabled: can_elevate && has_elevations,
        base_toggle_caption: if ed.show_base() {
            "Hide base curve".to_string()
        } else {
            "Show base curve".to_string()
        },
        elevated_toggle_caption: if ed.show_elevated() {
            "Hide elevated curve".to_string()
        } else {
            "Show elevated curve".to_string()
        },
        status: elevation_info(ed.base_degree(), ed.history().len()),
    }
}
