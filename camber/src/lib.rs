pub mod model;
pub mod polygon;
pub mod controller;
pub mod scene;
pub mod ui;
pub mod geometry {
    pub mod bezier;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod elevation;
    pub mod picking;
}
mod json;

use controller::{Input, PointerPhase, RenderRequest};
use geometry::tolerance::clamp;
use model::{Page, Point, DEFAULT_HEIGHT, DEFAULT_POINT_COUNT, DEFAULT_WIDTH, MAX_ELEVATION_LEVEL};

/// The shared state record: control polygon, derived elevation history,
/// view toggles and transient interaction state. There are no module
/// singletons; callers own an Editor and thread it explicitly.
///
/// Every mutation goes through `apply`, which performs
/// mutate -> rebuild -> version bump as one step, so the elevation
/// history can never be observed out of sync with the polygon.
pub struct Editor {
    pub(crate) points: Vec<Point>,
    pub(crate) history: Vec<Vec<Point>>,
    pub(crate) level: u32,
    pub(crate) show_base: bool,
    pub(crate) show_elevated: bool,
    pub(crate) pointer: PointerPhase,
    pub(crate) page: Page,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) geom_ver: u64,
}

impl Editor {
    pub fn new(width: f32, height: f32) -> Self {
        let (width, height) = sanitize_surface(width, height);
        let mut ed = Editor {
            points: polygon::default_fanout(DEFAULT_POINT_COUNT, width, height),
            history: Vec::new(),
            level: 0,
            show_base: true,
            show_elevated: true,
            pointer: PointerPhase::Idle,
            page: Page::Playground,
            width,
            height,
            geom_ver: 1,
        };
        ed.rebuild();
        ed
    }

    /// Single mutation entry point. Returns what the host should
    /// refresh; by the time this returns, state and derived history are
    /// consistent again.
    pub fn apply(&mut self, input: Input) -> RenderRequest {
        controller::apply_impl(self, input)
    }

    // Read accessors; the scene builder and panels are pure consumers.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn history(&self) -> &[Vec<Point>] {
        &self.history
    }
    pub fn elevation_level(&self) -> u32 {
        self.level
    }
    pub fn base_degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
    pub fn show_base(&self) -> bool {
        self.show_base
    }
    pub fn show_elevated(&self) -> bool {
        self.show_elevated
    }
    pub fn hover_index(&self) -> Option<usize> {
        match self.pointer {
            PointerPhase::Hovering(i) | PointerPhase::Dragging(i) => Some(i),
            PointerPhase::Idle => None,
        }
    }
    pub fn dragging_index(&self) -> Option<usize> {
        self.pointer.dragging_index()
    }
    pub fn active_page(&self) -> Page {
        self.page
    }
    pub fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    /// Map a point from the host surface's coordinate space (logical
    /// size `rect_w` x `rect_h`) into canvas pixel space. None when the
    /// reported rect is degenerate.
    pub fn surface_to_pixel(&self, sx: f32, sy: f32, rect_w: f32, rect_h: f32) -> Option<Point> {
        if !sx.is_finite() || !sy.is_finite() || !rect_w.is_finite() || !rect_h.is_finite() {
            return None;
        }
        if rect_w <= 0.0 || rect_h <= 0.0 {
            return None;
        }
        Some(Point {
            x: sx * (self.width / rect_w),
            y: sy * (self.height / rect_h),
        })
    }

    // JSON snapshots
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> bool {
        json::from_json_impl(self, v)
    }

    pub(crate) fn clamp_to_surface(&self, p: Point) -> Point {
        Point {
            x: clamp(p.x, 0.0, self.width),
            y: clamp(p.y, 0.0, self.height),
        }
    }

    pub(crate) fn resize_points(&mut self, target: usize) {
        polygon::resize(&mut self.points, target, self.width, self.height);
        // A shrink can strand a hover or drag index past the new end.
        let stale = match self.pointer {
            PointerPhase::Hovering(i) | PointerPhase::Dragging(i) => i >= self.points.len(),
            PointerPhase::Idle => false,
        };
        if stale {
            self.pointer = PointerPhase::Idle;
        }
        self.rebuild();
        self.bump();
    }

    pub(crate) fn reset_points(&mut self) {
        self.points = polygon::default_fanout(DEFAULT_POINT_COUNT, self.width, self.height);
        self.pointer = PointerPhase::Idle;
        self.rebuild();
        self.bump();
    }

    pub(crate) fn set_elevation_level(&mut self, level: u32) {
        self.level = level.min(MAX_ELEVATION_LEVEL);
        self.rebuild();
        self.bump();
    }

    /// Discard and recompute the elevation history. A polygon below 2
    /// points cannot be elevated; it forces level 0 and an empty chain.
    pub(crate) fn rebuild(&mut self) {
        if self.points.len() < 2 {
            self.level = 0;
            self.history.clear();
            return;
        }
        self.history = algorithms::elevation::build_history(&self.points, self.level);
    }

    pub(crate) fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }
}

fn sanitize_surface(width: f32, height: f32) -> (f32, f32) {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        (width, height)
    } else {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
