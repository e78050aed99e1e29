use super::tolerance::EPS_LEN;
use crate::model::Vec2;

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 { a.x * b.x + a.y * b.y }

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 { Vec2 { x: a.x - b.x, y: a.y - b.y } }

#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 { a.x * b.y - a.y * b.x }

#[inline]
pub fn perp(v: Vec2) -> Vec2 { Vec2 { x: -v.y, y: v.x } }

#[inline]
pub fn dist_sq(a: Vec2, b: Vec2) -> f64 {
    let d = sub(a, b);
    dot(d, d)
}

/// Unit vector along `v`, or `None` when `v` is too short to have a direction.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = dot(v, v).sqrt();
    if len > EPS_LEN && len.is_finite() {
        Some(Vec2 { x: v.x / len, y: v.y / len })
    } else {
        None
    }
}
