use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },
    #[error("polygon vertices do not form a convex loop")]
    NonConvex,
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },
    #[error("parameter '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },
    #[error("tiling would produce {count} tiles, cap is {max}")]
    TooManyTiles { count: usize, max: usize },
    #[error("invalid handle index {index}")]
    InvalidHandle { index: usize },
    #[error("invalid scene: {message}")]
    InvalidScene { message: String },
    #[error("unsupported scene version {got}")]
    UnsupportedVersion { got: u64 },
}

impl GeometryError {
    /// Stable code shared with the wasm result objects.
    pub fn kind(&self) -> &'static str {
        match self {
            GeometryError::TooFewVertices { .. } => "too_few_vertices",
            GeometryError::NonConvex => "non_convex",
            GeometryError::NonFinite { .. } => "non_finite",
            GeometryError::OutOfRange { .. } => "out_of_range",
            GeometryError::TooManyTiles { .. } => "too_many_tiles",
            GeometryError::InvalidHandle { .. } => "invalid_handle",
            GeometryError::InvalidScene { .. } => "invalid_scene",
            GeometryError::UnsupportedVersion { .. } => "unsupported_version",
        }
    }

    pub(crate) fn check_finite(param: &'static str, v: f64) -> Result<f64> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(GeometryError::NonFinite { param })
        }
    }

    pub(crate) fn check_range(param: &'static str, v: f64, min: f64, max: f64) -> Result<f64> {
        let v = Self::check_finite(param, v)?;
        if v < min || v > max {
            return Err(GeometryError::OutOfRange { param, min, max, got: v });
        }
        Ok(v)
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
