use crate::V3;
use thiserror::Error;

/// Errors raised while building a scene or writing its image.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Missing field `{field}` for {object}")]
    MissingField {
        object: &'static str,
        field: &'static str,
    },

    #[error("Degenerate vector {0:?} cannot be normalized")]
    DegenerateVector(V3),

    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("Reflectivity must be in [0, 1], got {0}")]
    InvalidReflectivity(f64),

    #[error("Antialias sample count must be at least 1")]
    InvalidAntialias,

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Thread count must be at least 1")]
    InvalidThreadCount,

    #[error("Image error: {0}")]
    Image(#[from] ::image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
