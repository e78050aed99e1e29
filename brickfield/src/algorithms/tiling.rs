// Running-bond brick tiling over a region centered at the origin.
//
// Brick centers span [-offset, +offset] inclusive on each axis, where
// offset = extent/2 - brick/2, so even rows cover the region edge to edge.
// Odd rows hold the same number of bricks shifted half a brick toward +x,
// so their last brick reaches bw/2 past +width/2; renderers clipping to the
// region should expect it.
// Rows are emitted top to bottom (y grows downward), bricks left to right,
// vertices top-left, top-right, bottom-right, bottom-left.

use crate::error::{GeometryError, Result};
use crate::geometry::limits::{self, MAX_TILES};
use crate::geometry::tolerance::steps_inclusive;
use crate::model::Polygon;
use serde::{Deserialize, Serialize};

pub const BRICK_WIDTH: f64 = 0.5;
pub const BRICK_HEIGHT: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilingConfig {
    pub brick_width: f64,
    pub brick_height: f64,
}

impl Default for TilingConfig {
    fn default() -> Self {
        TilingConfig { brick_width: BRICK_WIDTH, brick_height: BRICK_HEIGHT }
    }
}

impl TilingConfig {
    pub fn validate(&self) -> Result<()> {
        for (param, v) in [("brick_width", self.brick_width), ("brick_height", self.brick_height)] {
            if !limits::in_brick_bounds(v) {
                GeometryError::check_finite(param, v)?;
                return Err(GeometryError::OutOfRange {
                    param,
                    min: limits::BRICK_MIN,
                    max: limits::BRICK_MAX,
                    got: v,
                });
            }
        }
        Ok(())
    }
}

fn check_region(param: &'static str, v: f64) -> Result<f64> {
    GeometryError::check_range(param, v, 0.0, limits::REGION_MAX)
}

/// Restartable iterator over the bricks of one region. Yields the same
/// sequence as [`generate_brick_tiling`].
#[derive(Clone, Debug)]
pub struct BrickTiles {
    cfg: TilingConfig,
    offset_x: f64,
    offset_y: f64,
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    remaining: usize,
}

impl BrickTiles {
    pub fn new(width: f64, height: f64, cfg: &TilingConfig) -> Result<BrickTiles> {
        let width = check_region("width", width)?;
        let height = check_region("height", height)?;
        cfg.validate()?;
        let (bw, bh) = (cfg.brick_width, cfg.brick_height);
        let offset_x = 0.5 * width - 0.5 * bw;
        let offset_y = 0.5 * height - 0.5 * bh;
        let (rows, cols) = match (
            steps_inclusive(2.0 * offset_y, bh),
            steps_inclusive(2.0 * offset_x, bw),
        ) {
            (Some(0), _) | (_, Some(0)) => (0, 0),
            (Some(r), Some(c)) => (r, c),
            _ => return Err(GeometryError::TooManyTiles { count: usize::MAX, max: MAX_TILES }),
        };
        let remaining = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if remaining > MAX_TILES {
            return Err(GeometryError::TooManyTiles { count: remaining, max: MAX_TILES });
        }
        log::debug!(
            "brick tiling {}x{} with {}x{} bricks: {} rows, {} tiles",
            width, height, bw, bh, rows, remaining
        );
        Ok(BrickTiles {
            cfg: *cfg,
            offset_x,
            offset_y,
            rows,
            cols,
            row: 0,
            col: 0,
            remaining,
        })
    }
}

impl Iterator for BrickTiles {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if self.col >= self.cols {
            self.row += 1;
            self.col = 0;
        }
        if self.row >= self.rows || self.cols == 0 {
            return None;
        }
        let (bw, bh) = (self.cfg.brick_width, self.cfg.brick_height);
        let stagger = if self.row % 2 == 1 { 0.5 * bw } else { 0.0 };
        let cx = -self.offset_x + stagger + self.col as f64 * bw;
        let cy = -self.offset_y + self.row as f64 * bh;
        self.col += 1;
        self.remaining -= 1;
        Some(Polygon::rect(cx, cy, bw, bh))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BrickTiles {}

pub fn generate_brick_tiling(width: f64, height: f64, cfg: &TilingConfig) -> Result<Vec<Polygon>> {
    Ok(BrickTiles::new(width, height, cfg)?.collect())
}
