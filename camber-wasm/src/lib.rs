use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: camber::Editor,
}

impl Editor {
    pub fn rs_new(width: f32, height: f32) -> Editor {
        Editor {
            inner: camber::Editor::new(width, height),
        }
    }
    pub fn rs_geom_version(&self) -> u64 {
        self.inner.geom_version()
    }
}
