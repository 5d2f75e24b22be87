//! Depth-estimation-to-mesh conversion pipeline.
//!
//! This pipeline is deliberately not invoked by the upload handler; it is
//! reachable through the `convert` binary and operates on local paths only.

pub mod depth;
pub mod mesh;
pub mod preprocess;

pub use depth::{fetch_model, DepthEstimator, DEFAULT_MODEL_URL};
pub use mesh::{export_obj, mesh_from_depth, obj_string};
pub use preprocess::{load_rgb, to_input_tensor, MODEL_INPUT_SIZE};

use crate::utils::error::Result;
use std::path::Path;

/// Convert one image on disk into an OBJ mesh.
///
/// Loads the model per call, which keeps the function self-contained for
/// one-shot offline use.
pub fn convert_image(model_path: &Path, image_path: &Path, output_path: &Path) -> Result<()> {
    let estimator = DepthEstimator::load(model_path)?;

    let img = load_rgb(image_path)?;
    let tensor = to_input_tensor(&img);

    let depth = estimator.estimate(tensor)?;
    tracing::debug!(
        "Estimated depth map: {}x{}",
        depth.width(),
        depth.height()
    );

    let mesh = mesh_from_depth(&depth);
    export_obj(&mesh, output_path)?;

    Ok(())
}
