use crate::utils::error::{AppError, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A stored upload, as acknowledged to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedUpload {
    pub file_name: String,
    pub path: String,
    pub size_bytes: u64,
}

/// Dense per-pixel depth produced by the monocular estimator.
///
/// Values are stored row-major, one `f32` per pixel of the network output.
#[derive(Debug, Clone)]
pub struct DepthMap {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl DepthMap {
    pub fn new(width: usize, height: usize, values: Vec<f32>) -> Result<Self> {
        if values.len() != width * height {
            return Err(AppError::ProcessingError {
                message: format!(
                    "depth map size mismatch: {}x{} grid but {} values",
                    width,
                    height,
                    values.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Triangle surface built from a depth grid.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3<f32>>,
    /// Zero-based vertex indices, counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}
