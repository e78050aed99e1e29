use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Field { pub(crate) inner: brickfield::Field }

impl Field {
    pub fn rs_new(width: f64, height: f64) -> Result<Field, brickfield::GeometryError> {
        Ok(Field { inner: brickfield::Field::new(width, height)? })
    }
    pub fn rs_geom_version(&self) -> u64 { self.inner.geom_version() }
}
