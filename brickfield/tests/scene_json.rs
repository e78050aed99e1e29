use brickfield::{Circle, Field, GeometryError, TilingConfig, Vec2};
use serde_json::json;

#[test]
fn round_trip_restores_region_bricks_and_handles() {
    let mut f = Field::with_config(6.0, 3.0, TilingConfig { brick_width: 1.0, brick_height: 0.5 })
        .unwrap();
    f.set_control_points(Vec2::new(-2.0, 1.0), Vec2::new(2.0, 1.0)).unwrap();
    let doc = f.to_json_value();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["brick"]["width"], 1.0);

    let mut g = Field::new(1.0, 1.0).unwrap();
    g.from_json_value(doc).unwrap();
    assert_eq!(g.region(), (6.0, 3.0));
    assert_eq!(g.config(), f.config());
    assert_eq!(g.handles(), f.handles());
    assert_eq!(g.tiles(), f.tiles());
    assert_eq!(g.classify(), f.classify());
}

#[test]
fn optional_sections_fall_back_to_defaults() {
    let mut f = Field::new(1.0, 1.0).unwrap();
    f.from_json_value(json!({"version": 1, "region": {"width": 4.0, "height": 2.0}}))
        .unwrap();
    assert_eq!(f.config(), TilingConfig::default());
    assert_eq!(f.circle(), Circle { center: Vec2::new(0.0, 0.0), radius: 1.0 });
    assert_eq!(f.tile_count(), 8 * 8);
}

#[test]
fn unknown_version_is_rejected() {
    let mut f = Field::new(1.0, 1.0).unwrap();
    let r = f.from_json_value(json!({"version": 7, "region": {"width": 1.0, "height": 1.0}}));
    assert_eq!(r, Err(GeometryError::UnsupportedVersion { got: 7 }));
}

#[test]
fn failed_load_leaves_field_unchanged() {
    let mut f = Field::new(2.0, 2.0).unwrap();
    let before = f.to_json_value();
    let ver = f.geom_version();
    let bad = [
        json!({"region": {"width": 1.0, "height": 1.0}}),
        json!({"version": 1}),
        json!({"version": 1, "region": {"width": -1.0, "height": 1.0}}),
        json!({"version": 1, "region": {"width": 1.0, "height": 1.0}, "brick": {"width": 0.0, "height": 1.0}}),
        json!({"version": 1, "region": {"width": 1.0, "height": 1.0}, "handles": [{"x": 1e300, "y": 0.0}, {"x": 0.0, "y": 0.0}]}),
    ];
    for doc in bad {
        assert!(f.from_json_value(doc).is_err());
        assert_eq!(f.to_json_value(), before);
        assert_eq!(f.geom_version(), ver);
    }
}

#[test]
fn malformed_text_reports_invalid_scene() {
    let mut f = Field::new(1.0, 1.0).unwrap();
    let e = f.from_json_str("{ not json").unwrap_err();
    assert_eq!(e.kind(), "invalid_scene");
    f.from_json_str(r#"{"version":1,"region":{"width":1.0,"height":0.5}}"#).unwrap();
    assert_eq!(f.tile_count(), 4);
}
