use crate::geometry::math::dist_sq;
use crate::model::{Circle, Polygon};

/// Every vertex within or on the circle. Compares squared distances so the
/// boundary stays exact for representable radii.
pub fn is_polygon_contained_in_circle(polygon: &Polygon, circle: &Circle) -> bool {
    let r2 = circle.radius * circle.radius;
    polygon
        .vertices()
        .iter()
        .all(|&v| dist_sq(v, circle.center) <= r2)
}
