use crate::Field;
use brickfield::{TilingConfig, Vec2};
use serde::Serialize;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Field {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<Field, JsValue> {
        crate::Field::rs_new(width, height).map_err(|e| error::from_geometry(&e))
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }
    pub fn tile_count(&self) -> u32 {
        self.inner.tile_count() as u32
    }

    // Region and bricks
    pub fn resize(&mut self, width: f64, height: f64) -> JsValue {
        error::unit(self.inner.resize(width, height))
    }
    pub fn set_brick_size(&mut self, width: f64, height: f64) -> JsValue {
        error::unit(self.inner.set_config(TilingConfig { brick_width: width, brick_height: height }))
    }
    pub fn get_region(&self) -> JsValue {
        let (w, h) = self.inner.region();
        let cfg = self.inner.config();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "width", &JsValue::from_f64(w));
        crate::interop::set_kv(&obj, "height", &JsValue::from_f64(h));
        crate::interop::set_kv(&obj, "brick_width", &JsValue::from_f64(cfg.brick_width));
        crate::interop::set_kv(&obj, "brick_height", &JsValue::from_f64(cfg.brick_height));
        obj.into()
    }

    // Circle control points
    pub fn set_control_points(&mut self, ax: f64, ay: f64, bx: f64, by: f64) -> JsValue {
        error::unit(self.inner.set_control_points(Vec2::new(ax, ay), Vec2::new(bx, by)))
    }
    pub fn move_handle(&mut self, index: u32, x: f64, y: f64) -> JsValue {
        error::unit(self.inner.move_handle(index as usize, x, y))
    }
    pub fn get_handles(&self) -> js_sys::Float64Array {
        let [a, b] = self.inner.handles();
        crate::interop::arr_f64(&[a.x, a.y, b.x, b.y])
    }
    pub fn get_circle(&self) -> JsValue {
        let c = self.inner.circle();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "cx", &JsValue::from_f64(c.center.x));
        crate::interop::set_kv(&obj, "cy", &JsValue::from_f64(c.center.y));
        crate::interop::set_kv(&obj, "r", &JsValue::from_f64(c.radius));
        obj.into()
    }

    // Classification (pulled by the renderer after each drag)
    pub fn get_tile_data(&self) -> JsValue {
        let ta = self.inner.tile_arrays();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f64(&ta.positions).into());
        crate::interop::set_kv(&obj, "classes", &crate::interop::arr_u8(&ta.classes).into());
        obj.into()
    }
    pub fn tally(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.tally()).unwrap_or(JsValue::NULL)
    }
    pub fn pick_tile(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.pick_tile(x, y) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Scene documents
    pub fn to_json(&self) -> JsValue {
        // plain objects rather than JS Maps, so the value feeds back into from_json
        let ser = serde_wasm_bindgen::Serializer::json_compatible();
        self.inner.to_json_value().serialize(&ser).unwrap_or(JsValue::NULL)
    }
    pub fn from_json(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => error::unit(self.inner.from_json_value(val)),
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
}
