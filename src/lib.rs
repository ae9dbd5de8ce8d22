pub mod util;

pub mod error;
pub mod math;
pub use math::{P3, V3};
pub mod ray;
pub use ray::Ray;
pub mod rgb;
pub use rgb::RGB;

pub mod camera;
pub mod image;
pub mod loader;
pub mod manager;
pub mod object;
pub mod renderer;
pub mod scene;
pub mod shape;

pub use error::{Error, Result};
