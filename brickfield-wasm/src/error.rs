use brickfield::GeometryError;
use wasm_bindgen::prelude::*;
use js_sys::{Object, Reflect};

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

/// Map a core error onto the shared `{ok:false, error:{code,message,data}}` shape.
pub fn from_geometry(e: &GeometryError) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    match e {
        GeometryError::NonFinite { param } => non_finite(param),
        GeometryError::OutOfRange { param, min, max, got } => out_of_range(param, *min, *max, *got),
        GeometryError::TooManyTiles { count, max } => {
            let d = new_obj();
            set_kv(&d, "count", &JsValue::from_f64(*count as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            err(e.kind(), e.to_string(), Some(d.into()))
        }
        GeometryError::InvalidHandle { index } => {
            let d = new_obj(); set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            err(e.kind(), e.to_string(), Some(d.into()))
        }
        _ => err(e.kind(), e.to_string(), None),
    }
}

pub fn unit(r: Result<(), GeometryError>) -> JsValue {
    match r {
        Ok(()) => ok(JsValue::from_bool(true)),
        Err(e) => from_geometry(&e),
    }
}
