// Centralized input limits to harden against untrusted values (scene JSON, wasm calls)

// Region and brick extents
pub const REGION_MAX: f64 = 1_000_000.0;
pub const BRICK_MIN: f64 = 1e-6;
pub const BRICK_MAX: f64 = 1_000_000.0;

// Tiling output cap
pub const MAX_TILES: usize = 1_000_000;

// Coordinate bounds for control points and picks
pub const COORD_MIN: f64 = -1_000_000_000.0;
pub const COORD_MAX: f64 =  1_000_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_brick_bounds(w: f64) -> bool { w.is_finite() && w >= BRICK_MIN && w <= BRICK_MAX }
