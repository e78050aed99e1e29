use crate::error::{GeometryError, Result};
use crate::geometry::math::{cross, dist_sq, dot, sub};
use crate::geometry::tolerance::{EPS_CONVEX, EPS_WINDING};
use std::f64::consts::TAU;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Result<Circle> {
        GeometryError::check_finite("center.x", center.x)?;
        GeometryError::check_finite("center.y", center.y)?;
        GeometryError::check_range("radius", radius, 0.0, f64::MAX)?;
        Ok(Circle { center, radius })
    }

    /// Circle through two diametrically opposite control points.
    pub fn from_control_points(a: Vec2, b: Vec2) -> Result<Circle> {
        let center = Vec2::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y));
        let radius = 0.5 * dist_sq(a, b).sqrt();
        Circle::new(center, radius)
    }
}

/// Convex vertex loop. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Polygon> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices { got: vertices.len() });
        }
        for v in &vertices {
            GeometryError::check_finite("vertex.x", v.x)?;
            GeometryError::check_finite("vertex.y", v.y)?;
        }
        if !is_convex(&vertices) {
            return Err(GeometryError::NonConvex);
        }
        Ok(Polygon { vertices })
    }

    // Axis-aligned rectangle from its center, wound top-left, top-right,
    // bottom-right, bottom-left with y growing downward.
    pub(crate) fn rect(cx: f64, cy: f64, w: f64, h: f64) -> Polygon {
        let (hw, hh) = (0.5 * w, 0.5 * h);
        Polygon {
            vertices: vec![
                Vec2::new(cx - hw, cy - hh),
                Vec2::new(cx + hw, cy - hh),
                Vec2::new(cx + hw, cy + hh),
                Vec2::new(cx - hw, cy + hh),
            ],
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex average; inside the polygon for any convex loop.
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Vec2::new(sx / n, sy / n)
    }

    /// Circle around the vertex average reaching the farthest vertex.
    pub fn bounding_circle(&self) -> Circle {
        let c = self.centroid();
        let r2 = self
            .vertices
            .iter()
            .map(|v| dist_sq(*v, c))
            .fold(0.0, f64::max);
        Circle { center: c, radius: r2.sqrt() }
    }

    /// Shoelace area (absolute).
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut acc = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            acc += a.x * b.y - b.x * a.y;
        }
        0.5 * acc.abs()
    }

    /// Inclusive point test; boundary points count as inside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = cross(sub(b, a), sub(p, a));
            if c == 0.0 { continue; }
            if sign == 0.0 {
                sign = c.signum();
            } else if c.signum() != sign {
                return false;
            }
        }
        true
    }
}

// Every significant turn bends the same way and the turns add up to a single
// revolution. Slack is relative to the adjacent edge lengths so the test does
// not depend on the polygon's scale.
fn is_convex(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    // Repeated vertices contribute no direction; turns are measured between
    // the remaining edges.
    let edges: Vec<Vec2> = (0..n)
        .map(|i| sub(vertices[(i + 1) % n], vertices[i]))
        .filter(|e| dot(*e, *e) > 0.0)
        .collect();
    let mut sign = 0.0;
    let mut total_turn = 0.0;
    for i in 0..edges.len() {
        let (ab, bc) = (edges[i], edges[(i + 1) % edges.len()]);
        let turn = cross(ab, bc);
        total_turn += turn.atan2(dot(ab, bc));
        let slack = EPS_CONVEX * dot(ab, ab).sqrt() * dot(bc, bc).sqrt();
        if turn.abs() <= slack { continue; }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    // All turns collinear: a degenerate sliver, still accepted as convex
    if sign == 0.0 {
        return true;
    }
    // A star keeps one turn direction but winds around more than once
    (total_turn.abs() - TAU).abs() <= EPS_WINDING
}

/// Projection of a shape onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Inclusive: touching endpoints overlap.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.max >= other.min && other.max >= self.min
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Outside = 0,
    Overlapping = 1,
    Contained = 2,
}

impl Classification {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn overlaps(self) -> bool {
        !matches!(self, Classification::Outside)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub outside: usize,
    pub overlapping: usize, // includes contained tiles
    pub contained: usize,
}

impl Tally {
    pub fn add(mut self, c: Classification) -> Tally {
        match c {
            Classification::Outside => self.outside += 1,
            Classification::Overlapping => self.overlapping += 1,
            Classification::Contained => {
                self.overlapping += 1;
                self.contained += 1;
            }
        }
        self
    }

    pub fn total(&self) -> usize {
        self.outside + self.overlapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_rejects_short_loops() {
        let r = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(r, Err(GeometryError::TooFewVertices { got: 2 }));
    }

    #[test]
    fn polygon_rejects_concave_loop() {
        let dart = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.0, 4.0),
        ];
        assert_eq!(Polygon::new(dart), Err(GeometryError::NonConvex));
    }

    #[test]
    fn polygon_rejects_star_with_one_turn_direction() {
        let star = (0..5)
            .map(|k| {
                let a = std::f64::consts::FRAC_PI_2 + k as f64 * 4.0 * std::f64::consts::PI / 5.0;
                Vec2::new(a.cos(), a.sin())
            })
            .collect();
        assert_eq!(Polygon::new(star), Err(GeometryError::NonConvex));
    }

    #[test]
    fn convexity_does_not_depend_on_scale() {
        let dart = [(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0)];
        let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for scale in [1e-5, 1e5] {
            let scaled = |pts: &[(f64, f64)]| -> Vec<Vec2> {
                pts.iter().map(|&(x, y)| Vec2::new(x * scale, y * scale)).collect()
            };
            assert_eq!(Polygon::new(scaled(&dart)), Err(GeometryError::NonConvex), "scale {}", scale);
            assert!(Polygon::new(scaled(&square)).is_ok(), "scale {}", scale);
        }
    }

    #[test]
    fn repeated_vertex_keeps_its_turn() {
        let quad = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!(Polygon::new(quad).is_ok());
    }

    #[test]
    fn polygon_accepts_either_winding() {
        let cw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mut ccw = cw.clone();
        ccw.reverse();
        assert!(Polygon::new(cw).is_ok());
        assert!(Polygon::new(ccw).is_ok());
    }

    #[test]
    fn polygon_rejects_nan_vertex() {
        let r = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert!(matches!(r, Err(GeometryError::NonFinite { .. })));
    }

    #[test]
    fn circle_from_control_points_uses_midpoint() {
        let c = Circle::from_control_points(Vec2::new(-1.0, 2.0), Vec2::new(3.0, 2.0)).unwrap();
        assert_eq!(c.center, Vec2::new(1.0, 2.0));
        assert_eq!(c.radius, 2.0);
    }

    #[test]
    fn circle_rejects_negative_radius() {
        let r = Circle::new(Vec2::default(), -1.0);
        assert!(matches!(r, Err(GeometryError::OutOfRange { param: "radius", .. })));
    }

    #[test]
    fn interval_touching_counts_as_overlap() {
        let a = Interval { min: 0.0, max: 1.0 };
        let b = Interval { min: 1.0, max: 2.0 };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        let c = Interval { min: 1.0 + 1e-12, max: 2.0 };
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn rect_area_and_point_test() {
        let r = Polygon::rect(0.0, 0.0, 0.5, 0.25);
        assert_eq!(r.area(), 0.125);
        assert!(r.contains_point(Vec2::new(0.25, 0.125)));
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!r.contains_point(Vec2::new(0.26, 0.0)));
    }

    #[test]
    fn tally_counts_contained_as_overlapping() {
        let t = [
            Classification::Outside,
            Classification::Overlapping,
            Classification::Contained,
        ]
        .into_iter()
        .fold(Tally::default(), Tally::add);
        assert_eq!(t, Tally { outside: 1, overlapping: 2, contained: 1 });
        assert_eq!(t.total(), 3);
    }
}
