//! Interaction controller: a state machine over Idle / Hovering /
//! Dragging, translating pointer and control input into point-set
//! mutations. Free of rendering concerns; it only reports what kind of
//! refresh the host should perform.

use crate::algorithms::picking::nearest_point_index;
use crate::model::{Page, Point, HOVER_RADIUS, PRESS_RADIUS};
use crate::Editor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    Hovering(usize),
    Dragging(usize),
}

impl PointerPhase {
    pub fn hover_index(&self) -> Option<usize> {
        match *self {
            PointerPhase::Hovering(i) => Some(i),
            _ => None,
        }
    }

    pub fn dragging_index(&self) -> Option<usize> {
        match *self {
            PointerPhase::Dragging(i) => Some(i),
            _ => None,
        }
    }
}

/// Inputs the core reacts to. Pointer coordinates are already in canvas
/// pixel space (the boundary applies the surface-to-pixel transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerCancel,
    PointerLeave,
    SetPointCount(u32),
    SetElevationLevel(u32),
    ResetPoints,
    ToggleBase,
    ToggleElevated,
    SetPage(Page),
}

/// What the host should refresh after an input was applied.
/// `Canvas` redraws the surface only; `Full` also refreshes the
/// coordinate readout and control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderRequest {
    None,
    Canvas,
    Full,
}

pub(crate) fn apply_impl(ed: &mut Editor, input: Input) -> RenderRequest {
    match input {
        Input::PointerDown { x, y } => pointer_down(ed, x, y),
        Input::PointerMove { x, y } => pointer_move(ed, x, y),
        Input::PointerUp | Input::PointerCancel => pointer_up(ed),
        Input::PointerLeave => pointer_leave(ed),
        Input::SetPointCount(n) => {
            ed.resize_points(n as usize);
            RenderRequest::Full
        }
        Input::SetElevationLevel(level) => {
            ed.set_elevation_level(level);
            RenderRequest::Full
        }
        Input::ResetPoints => {
            ed.reset_points();
            RenderRequest::Full
        }
        Input::ToggleBase => {
            ed.show_base = !ed.show_base;
            RenderRequest::Full
        }
        Input::ToggleElevated => {
            ed.show_elevated = !ed.show_elevated;
            RenderRequest::Full
        }
        Input::SetPage(page) => {
            ed.page = page;
            if page.hosts_surface() {
                RenderRequest::Full
            } else {
                RenderRequest::None
            }
        }
    }
}

fn pointer_down(ed: &mut Editor, x: f32, y: f32) -> RenderRequest {
    if !x.is_finite() || !y.is_finite() {
        return RenderRequest::None;
    }
    let probe = Point::new(x, y);
    match nearest_point_index(&ed.points, probe, PRESS_RADIUS) {
        Some(i) => ed.pointer = PointerPhase::Dragging(i),
        // A miss still clears any stale drag or hover state.
        None => ed.pointer = PointerPhase::Idle,
    }
    RenderRequest::Canvas
}

fn pointer_move(ed: &mut Editor, x: f32, y: f32) -> RenderRequest {
    if !x.is_finite() || !y.is_finite() {
        return RenderRequest::None;
    }
    let probe = Point::new(x, y);
    if let PointerPhase::Dragging(i) = ed.pointer {
        if i >= ed.points.len() {
            return RenderRequest::None;
        }
        // The only per-frame hot path: one point moves, the whole
        // elevation chain is rebuilt before anything renders.
        ed.points[i] = ed.clamp_to_surface(probe);
        ed.rebuild();
        ed.bump();
        return RenderRequest::Full;
    }
    let next = match nearest_point_index(&ed.points, probe, HOVER_RADIUS) {
        Some(i) => PointerPhase::Hovering(i),
        None => PointerPhase::Idle,
    };
    if next != ed.pointer {
        ed.pointer = next;
        RenderRequest::Canvas
    } else {
        RenderRequest::None
    }
}

fn pointer_up(ed: &mut Editor) -> RenderRequest {
    if ed.pointer.dragging_index().is_some() {
        ed.pointer = PointerPhase::Idle;
        RenderRequest::Full
    } else {
        RenderRequest::None
    }
}

fn pointer_leave(ed: &mut Editor) -> RenderRequest {
    match ed.pointer {
        PointerPhase::Dragging(_) => {
            ed.pointer = PointerPhase::Idle;
            RenderRequest::Full
        }
        PointerPhase::Hovering(_) => {
            ed.pointer = PointerPhase::Idle;
            RenderRequest::Canvas
        }
        PointerPhase::Idle => RenderRequest::None,
    }
}
