pub mod error;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod projection;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod classify;
    pub mod containment;
    pub mod sat;
    pub mod tiling;
}
mod json;

pub use algorithms::classify::{classify, classify_contained, classify_overlap, tally};
pub use algorithms::sat::circle_polygon_collision;
pub use algorithms::tiling::{generate_brick_tiling, BrickTiles, TilingConfig};
pub use error::{GeometryError, Result};
pub use model::{Circle, Classification, Interval, Polygon, Tally, Vec2};

use geometry::limits;

/// Running-bond tiling of a `width` x `height` region centered at the origin,
/// using the default 0.5 x 0.25 brick.
pub fn generate_tiling(width: f64, height: f64) -> Result<Vec<Polygon>> {
    generate_brick_tiling(width, height, &TilingConfig::default())
}

pub const DEFAULT_HANDLES: [Vec2; 2] = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];

pub struct TileArrays {
    pub positions: Vec<f64>, // x,y per vertex, 4 vertices per tile
    pub classes: Vec<u8>,
}

/// A tiled region plus the two control points that span the circle.
/// Nothing is recomputed on its own: callers pull classifications after
/// each edit.
pub struct Field {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) config: TilingConfig,
    pub(crate) tiles: Vec<Polygon>,
    pub(crate) handles: [Vec2; 2],
    pub(crate) circle: Circle,
    pub(crate) geom_ver: u64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Result<Field> {
        Field::with_config(width, height, TilingConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: TilingConfig) -> Result<Field> {
        let tiles = generate_brick_tiling(width, height, &config)?;
        let circle = Circle::from_control_points(DEFAULT_HANDLES[0], DEFAULT_HANDLES[1])?;
        Ok(Field {
            width,
            height,
            config,
            tiles,
            handles: DEFAULT_HANDLES,
            circle,
            geom_ver: 0,
        })
    }

    /// Monotonic geometry version; increments on region, brick or handle edits
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    pub fn region(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> TilingConfig {
        self.config
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.retile(width, height, self.config)
    }

    pub fn set_config(&mut self, config: TilingConfig) -> Result<()> {
        self.retile(self.width, self.height, config)
    }

    // Leaves the field untouched on error.
    fn retile(&mut self, width: f64, height: f64, config: TilingConfig) -> Result<()> {
        let tiles = generate_brick_tiling(width, height, &config)?;
        log::debug!("field retiled to {}x{}: {} tiles", width, height, tiles.len());
        self.width = width;
        self.height = height;
        self.config = config;
        self.tiles = tiles;
        self.bump();
        Ok(())
    }

    pub fn handles(&self) -> [Vec2; 2] {
        self.handles
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    /// Replace both control points, and with them the circle.
    pub fn set_control_points(&mut self, a: Vec2, b: Vec2) -> Result<()> {
        for (param, v) in [("a.x", a.x), ("a.y", a.y), ("b.x", b.x), ("b.y", b.y)] {
            GeometryError::check_range(param, v, limits::COORD_MIN, limits::COORD_MAX)?;
        }
        self.circle = Circle::from_control_points(a, b)?;
        self.handles = [a, b];
        self.bump();
        Ok(())
    }

    pub fn move_handle(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        let mut hs = self.handles;
        let slot = hs.get_mut(index).ok_or(GeometryError::InvalidHandle { index })?;
        *slot = Vec2::new(x, y);
        self.set_control_points(hs[0], hs[1])
    }

    pub fn tiles(&self) -> &[Polygon] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn classify(&self) -> Vec<Classification> {
        algorithms::classify::classify_all(&self.circle, &self.tiles)
    }

    pub fn tally(&self) -> Tally {
        tally(self.tiles.iter().map(|p| classify(&self.circle, p)))
    }

    pub fn tile_arrays(&self) -> TileArrays {
        let mut positions = Vec::with_capacity(self.tiles.len() * 8);
        let mut classes = Vec::with_capacity(self.tiles.len());
        for p in &self.tiles {
            for v in p.vertices() {
                positions.push(v.x);
                positions.push(v.y);
            }
            classes.push(classify(&self.circle, p).code());
        }
        TileArrays { positions, classes }
    }

    /// First tile containing the point, boundary inclusive.
    pub fn pick_tile(&self, x: f64, y: f64) -> Option<u32> {
        if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
            return None;
        }
        let p = Vec2::new(x, y);
        self.tiles
            .iter()
            .position(|t| t.contains_point(p))
            .map(|i| i as u32)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Load a scene document. On error the field keeps its previous state.
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<()> {
        json::from_json_value_impl(self, v)
    }

    pub fn from_json_str(&mut self, s: &str) -> Result<()> {
        let v: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| GeometryError::InvalidScene { message: e.to_string() })?;
        self.from_json_value(v)
    }
}
