use crate::error;
use crate::Editor;
use camber::controller::{Input, RenderRequest};
use camber::model::{Page, MAX_ELEVATION_LEVEL, MAX_POINTS, MIN_POINTS};
use camber::{scene, ui};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Plain JS objects (not Maps) so hosts can use property access.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Render request codes handed back to the host:
/// 0 = nothing to do, 1 = redraw the surface, 2 = redraw surface + panels.
fn req_code(r: RenderRequest) -> u8 {
    match r {
        RenderRequest::None => 0,
        RenderRequest::Canvas => 1,
        RenderRequest::Full => 2,
    }
}

#[wasm_bindgen]
impl Editor {
    /// A host without a usable drawing surface must not construct an
    /// editor at all; a surface with nonsensical dimensions is logged
    /// and replaced by the default size so the core keeps its bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Editor {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            web_sys::console::warn_1(&JsValue::from_str(
                "camber: unusable surface size, falling back to default",
            ));
        }
        Editor::rs_new(width, height)
    }

    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Pointer input. Client coordinates are relative to the surface's
    // bounding rect of logical size rect_w x rect_h; the core rescales
    // them into pixel space.
    pub fn pointer_down(&mut self, sx: f32, sy: f32, rect_w: f32, rect_h: f32) -> u8 {
        match self.inner.surface_to_pixel(sx, sy, rect_w, rect_h) {
            Some(p) => req_code(self.inner.apply(Input::PointerDown { x: p.x, y: p.y })),
            None => 0,
        }
    }
    pub fn pointer_move(&mut self, sx: f32, sy: f32, rect_w: f32, rect_h: f32) -> u8 {
        match self.inner.surface_to_pixel(sx, sy, rect_w, rect_h) {
            Some(p) => req_code(self.inner.apply(Input::PointerMove { x: p.x, y: p.y })),
            None => 0,
        }
    }
    pub fn pointer_up(&mut self) -> u8 {
        req_code(self.inner.apply(Input::PointerUp))
    }
    pub fn pointer_cancel(&mut self) -> u8 {
        req_code(self.inner.apply(Input::PointerCancel))
    }
    pub fn pointer_leave(&mut self) -> u8 {
        req_code(self.inner.apply(Input::PointerLeave))
    }

    // Controls
    pub fn set_point_count(&mut self, count: u32) -> u8 {
        req_code(self.inner.apply(Input::SetPointCount(count)))
    }
    pub fn set_point_count_res(&mut self, count: u32) -> JsValue {
        if count < MIN_POINTS as u32 || count > MAX_POINTS as u32 {
            return error::out_of_range(
                "count",
                MIN_POINTS as f32,
                MAX_POINTS as f32,
                count as f32,
            );
        }
        error::ok(JsValue::from_f64(self.set_point_count(count) as f64))
    }
    pub fn set_elevation_level(&mut self, level: u32) -> u8 {
        req_code(self.inner.apply(Input::SetElevationLevel(level)))
    }
    pub fn set_elevation_level_res(&mut self, level: u32) -> JsValue {
        if level > MAX_ELEVATION_LEVEL {
            return error::out_of_range("level", 0.0, MAX_ELEVATION_LEVEL as f32, level as f32);
        }
        error::ok(JsValue::from_f64(self.set_elevation_level(level) as f64))
    }
    pub fn reset_points(&mut self) -> u8 {
        req_code(self.inner.apply(Input::ResetPoints))
    }
    pub fn toggle_base(&mut self) -> u8 {
        req_code(self.inner.apply(Input::ToggleBase))
    }
    pub fn toggle_elevated(&mut self) -> u8 {
        req_code(self.inner.apply(Input::ToggleElevated))
    }
    pub fn set_page(&mut self, id: &str) -> u8 {
        match Page::from_id(id) {
            Some(page) => req_code(self.inner.apply(Input::SetPage(page))),
            None => 0,
        }
    }
    pub fn set_page_res(&mut self, id: &str) -> JsValue {
        match Page::from_id(id) {
            Some(page) => error::ok(JsValue::from_f64(
                req_code(self.inner.apply(Input::SetPage(page))) as f64,
            )),
            None => error::invalid_page(id),
        }
    }
    pub fn active_page(&self) -> String {
        self.inner.active_page().id().to_string()
    }

    pub fn pointer_down_res(&mut self, sx: f32, sy: f32, rect_w: f32, rect_h: f32) -> JsValue {
        if !sx.is_finite() {
            return error::non_finite("sx");
        }
        if !sy.is_finite() {
            return error::non_finite("sy");
        }
        if !rect_w.is_finite() {
            return error::non_finite("rect_w");
        }
        if !rect_h.is_finite() {
            return error::non_finite("rect_h");
        }
        error::ok(JsValue::from_f64(
            self.pointer_down(sx, sy, rect_w, rect_h) as f64,
        ))
    }
    pub fn pointer_move_res(&mut self, sx: f32, sy: f32, rect_w: f32, rect_h: f32) -> JsValue {
        if !sx.is_finite() {
            return error::non_finite("sx");
        }
        if !sy.is_finite() {
            return error::non_finite("sy");
        }
        if !rect_w.is_finite() {
            return error::non_finite("rect_w");
        }
        if !rect_h.is_finite() {
            return error::non_finite("rect_h");
        }
        error::ok(JsValue::from_f64(
            self.pointer_move(sx, sy, rect_w, rect_h) as f64,
        ))
    }

    // State getters
    pub fn point_count(&self) -> u32 {
        self.inner.points().len() as u32
    }
    pub fn elevation_level(&self) -> u32 {
        self.inner.elevation_level()
    }
    pub fn base_degree(&self) -> u32 {
        self.inner.base_degree() as u32
    }
    pub fn show_base(&self) -> bool {
        self.inner.show_base()
    }
    pub fn show_elevated(&self) -> bool {
        self.inner.show_elevated()
    }
    pub fn hover_index(&self) -> i32 {
        self.inner.hover_index().map_or(-1, |i| i as i32)
    }
    pub fn dragging_index(&self) -> i32 {
        self.inner.dragging_index().map_or(-1, |i| i as i32)
    }

    /// Base polygon as interleaved x,y positions.
    pub fn get_point_data(&self) -> JsValue {
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(
            &obj,
            "positions",
            &crate::interop::points_flat(self.inner.points()).into(),
        );
        crate::interop::set_kv(
            &obj,
            "count",
            &JsValue::from_f64(self.inner.points().len() as f64),
        );
        obj.into()
    }

    /// Elevation history flattened: per-step polygon lengths plus all
    /// interleaved positions concatenated in step order.
    pub fn get_history_data(&self) -> JsValue {
        let mut lengths: Vec<u32> = Vec::new();
        let mut flat: Vec<f32> = Vec::new();
        for polygon in self.inner.history() {
            lengths.push(polygon.len() as u32);
            for p in polygon {
                flat.push(p.x);
                flat.push(p.y);
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "lengths", &crate::interop::arr_u32(&lengths).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&flat).into());
        obj.into()
    }

    /// Full display list for the current state, in paint order.
    pub fn scene(&self) -> JsValue {
        to_js(&scene::build_scene(&self.inner))
    }

    // Panel text
    pub fn coordinates_text(&self) -> String {
        ui::coordinates_text(self.inner.points())
    }
    pub fn status_text(&self) -> String {
        ui::elevation_info(self.inner.base_degree(), self.inner.history().len())
    }
    pub fn panel_state(&self) -> JsValue {
        to_js(&ui::panel_state(&self.inner))
    }

    // JSON snapshots
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self.inner.from_json_value(val),
            Err(_) => false,
        }
    }
}
