use brickfield::geometry::math::dist_sq;
use brickfield::{
    classify, classify_contained, classify_overlap, generate_tiling, Circle, Classification,
    Polygon, Vec2,
};
use proptest::prelude::*;

// Axis-aligned or rotated rectangle; always convex.
fn rect_strategy() -> impl Strategy<Value = Polygon> {
    (-20.0f64..20.0, -20.0f64..20.0, 0.05f64..5.0, 0.05f64..5.0, 0.0f64..std::f64::consts::PI)
        .prop_map(|(cx, cy, w, h, angle)| {
            let (s, c) = angle.sin_cos();
            let corners = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
            let vs = corners
                .iter()
                .map(|&(u, v)| {
                    let (lx, ly) = (u * w, v * h);
                    Vec2::new(cx + lx * c - ly * s, cy + lx * s + ly * c)
                })
                .collect();
            Polygon::new(vs).expect("rectangle is convex")
        })
}

fn circle_strategy() -> impl Strategy<Value = Circle> {
    (-20.0f64..20.0, -20.0f64..20.0, 0.0f64..8.0)
        .prop_map(|(x, y, r)| Circle::new(Vec2::new(x, y), r).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn containment_implies_overlap(c in circle_strategy(), p in rect_strategy()) {
        if classify_contained(&c, &p) {
            prop_assert!(classify_overlap(&c, &p));
            prop_assert_eq!(classify(&c, &p), Classification::Contained);
        }
    }

    #[test]
    fn disjoint_bounding_circles_never_overlap(c in circle_strategy(), p in rect_strategy()) {
        let b = p.bounding_circle();
        let gap = dist_sq(b.center, c.center).sqrt() - (b.radius + c.radius);
        if gap > 1e-9 {
            prop_assert!(!classify_overlap(&c, &p));
            prop_assert_eq!(classify(&c, &p), Classification::Outside);
        }
    }

    #[test]
    fn center_inside_polygon_overlaps(p in rect_strategy(), r in 0.0f64..8.0) {
        let c = Circle::new(p.centroid(), r).unwrap();
        prop_assert!(classify_overlap(&c, &p));
    }

    #[test]
    fn vertex_inside_circle_overlaps(p in rect_strategy(), pad in 0.001f64..3.0) {
        let v = p.vertices()[0];
        let c = Circle::new(Vec2::new(v.x + pad * 0.5, v.y), pad).unwrap();
        prop_assert!(classify_overlap(&c, &p));
    }

    #[test]
    fn tiling_is_deterministic(w in 0.0f64..12.0, h in 0.0f64..12.0) {
        let a = generate_tiling(w, h).unwrap();
        let b = generate_tiling(w, h).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tiling_stays_within_one_column_of_region(w in 0.5f64..12.0, h in 0.25f64..12.0) {
        let tiles = generate_tiling(w, h).unwrap();
        prop_assert!(!tiles.is_empty());
        let area: f64 = tiles.iter().map(|t| t.area()).sum();
        // lost to truncation: at most one brick column and one brick row
        prop_assert!(area <= w * h + 1e-6);
        prop_assert!(area >= w * h - 0.5 * h - 0.25 * w - 1e-6);
        for t in &tiles {
            for v in t.vertices() {
                prop_assert!(v.y >= -0.5 * h - 1e-6 && v.y <= 0.5 * h + 1e-6);
                prop_assert!(v.x >= -0.5 * w - 1e-6 && v.x <= 0.5 * w + 0.25 + 1e-6);
            }
        }
    }
}
