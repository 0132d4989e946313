use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Reference to a 3D body shown for a footprint.
///
/// Placement is relative to the footprint anchor, so the model follows every
/// move, rotation, and flip of its footprint without being touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model3D {
    pub path: String,
    pub scale: Vector3,
    /// Degrees about each axis.
    pub rotation: Vector3,
    pub offset: Vector3,
}

impl Model3D {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::default(),
            offset: Vector3::default(),
        }
    }
}
