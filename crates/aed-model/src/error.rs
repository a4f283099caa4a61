use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Bounding box text did not have four comma-separated parts.
    #[error("bounding box needs 4 values (min_lon,min_lat,max_lon,max_lat), got {count}")]
    BoundingBoxArity { count: usize },

    /// A bounding box part was not a number.
    #[error("invalid bounding box value '{value}'")]
    BoundingBoxValue { value: String },

    /// Minimum exceeds maximum on one axis.
    #[error("bounding box {axis} range is inverted: {min} > {max}")]
    BoundingBoxInverted {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
