// Single-pass projections of shapes onto a unit axis.

use super::math::dot;
use crate::model::{Interval, Vec2};

pub fn project_polygon(axis: Vec2, vertices: &[Vec2]) -> Interval {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in vertices {
        let p = dot(axis, v);
        if p < min { min = p; }
        if p > max { max = p; }
    }
    Interval { min, max }
}

pub fn project_circle(axis: Vec2, center: Vec2, radius: f64) -> Interval {
    let c = dot(axis, center);
    Interval { min: c - radius, max: c + radius }
}
