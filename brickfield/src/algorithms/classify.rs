use super::containment::is_polygon_contained_in_circle;
use super::sat::collides_unchecked;
use crate::model::{Circle, Classification, Polygon, Tally};

/// SAT overlap between a circle and a validated polygon, tangency included.
pub fn classify_overlap(circle: &Circle, polygon: &Polygon) -> bool {
    collides_unchecked(circle.center, circle.radius, polygon.vertices())
}

pub fn classify_contained(circle: &Circle, polygon: &Polygon) -> bool {
    is_polygon_contained_in_circle(polygon, circle)
}

/// Containment wins over overlap; containment alone is enough because it
/// implies a shared point.
pub fn classify(circle: &Circle, polygon: &Polygon) -> Classification {
    if classify_contained(circle, polygon) {
        Classification::Contained
    } else if classify_overlap(circle, polygon) {
        Classification::Overlapping
    } else {
        Classification::Outside
    }
}

pub fn classify_all<'a, I>(circle: &Circle, polygons: I) -> Vec<Classification>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    polygons.into_iter().map(|p| classify(circle, p)).collect()
}

pub fn tally<I>(classes: I) -> Tally
where
    I: IntoIterator<Item = Classification>,
{
    classes.into_iter().fold(Tally::default(), Tally::add)
}
