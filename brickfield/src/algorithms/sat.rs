// Circle vs convex polygon by the separating axis theorem.
// Candidate axes: every edge normal, then center -> nearest vertex.

use crate::error::{GeometryError, Result};
use crate::geometry::math::{dist_sq, normalize, perp, sub};
use crate::geometry::projection::{project_circle, project_polygon};
use crate::model::Vec2;

// Axis separates the shapes. Degenerate (zero-length) axes never separate.
#[inline]
fn separates(axis: Option<Vec2>, center: Vec2, radius: f64, vertices: &[Vec2]) -> bool {
    let Some(axis) = axis else {
        log::trace!("skipping degenerate axis");
        return false;
    };
    let p = project_polygon(axis, vertices);
    let c = project_circle(axis, center, radius);
    !p.overlaps(&c)
}

// First vertex at minimum squared distance wins ties.
fn closest_vertex(center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut best = vertices[0];
    let mut best_d2 = dist_sq(best, center);
    for &v in &vertices[1..] {
        let d2 = dist_sq(v, center);
        if d2 < best_d2 {
            best = v;
            best_d2 = d2;
        }
    }
    best
}

/// True when the circle and the convex polygon share at least one point
/// (tangency included). Fails on fewer than 3 vertices.
pub fn circle_polygon_collision(center: Vec2, radius: f64, vertices: &[Vec2]) -> Result<bool> {
    if vertices.len() < 3 {
        return Err(GeometryError::TooFewVertices { got: vertices.len() });
    }
    Ok(collides_unchecked(center, radius, vertices))
}

pub(crate) fn collides_unchecked(center: Vec2, radius: f64, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    for i in 0..n {
        let edge = sub(vertices[(i + 1) % n], vertices[i]);
        if separates(normalize(perp(edge)), center, radius, vertices) {
            return false;
        }
    }
    let nearest = closest_vertex(center, vertices);
    !separates(normalize(sub(nearest, center)), center, radius, vertices)
}
