use crate::error::{GeometryError, Result};
use crate::geometry::limits;
use crate::model::{Circle, Vec2};
use crate::{generate_brick_tiling, Field, TilingConfig, DEFAULT_HANDLES};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCENE_VERSION: u64 = 1;

#[derive(Serialize, Deserialize)]
struct RegionSer {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct BrickSer {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct SceneSer {
    version: u64,
    region: RegionSer,
    #[serde(default)]
    brick: Option<BrickSer>,
    #[serde(default)]
    handles: Option<[Vec2; 2]>,
}

pub fn to_json_impl(f: &Field) -> Value {
    let doc = SceneSer {
        version: SCENE_VERSION,
        region: RegionSer { width: f.width, height: f.height },
        brick: Some(BrickSer {
            width: f.config.brick_width,
            height: f.config.brick_height,
        }),
        handles: Some(f.handles),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_value_impl(f: &mut Field, v: Value) -> Result<()> {
    let res = parse_scene(v).and_then(|doc| apply(f, doc));
    if let Err(e) = &res {
        log::warn!("scene rejected: {}", e);
    }
    res
}

fn parse_scene(v: Value) -> Result<SceneSer> {
    // Peek at the version first so a newer layout reports the right error
    let got = v.get("version").and_then(Value::as_u64);
    match got {
        Some(SCENE_VERSION) => {}
        Some(other) => return Err(GeometryError::UnsupportedVersion { got: other }),
        None => {
            return Err(GeometryError::InvalidScene {
                message: "missing or non-integer 'version'".to_string(),
            })
        }
    }
    serde_json::from_value(v).map_err(|e| GeometryError::InvalidScene { message: e.to_string() })
}

fn apply(f: &mut Field, doc: SceneSer) -> Result<()> {
    let config = match doc.brick {
        Some(b) => TilingConfig { brick_width: b.width, brick_height: b.height },
        None => TilingConfig::default(),
    };
    let handles = doc.handles.unwrap_or(DEFAULT_HANDLES);
    for h in &handles {
        if !limits::in_coord_bounds(h.x) || !limits::in_coord_bounds(h.y) {
            return Err(GeometryError::InvalidScene {
                message: "handle coordinate out of bounds".to_string(),
            });
        }
    }
    // Build everything before touching the field
    let tiles = generate_brick_tiling(doc.region.width, doc.region.height, &config)?;
    let circle = Circle::from_control_points(handles[0], handles[1])?;
    f.width = doc.region.width;
    f.height = doc.region.height;
    f.config = config;
    f.tiles = tiles;
    f.handles = handles;
    f.circle = circle;
    f.geom_ver = f.geom_ver.wrapping_add(1);
    Ok(())
}
