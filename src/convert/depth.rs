use crate::convert::preprocess::MODEL_INPUT_SIZE;
use crate::domain::model::DepthMap;
use crate::utils::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;

/// Release artifact of the pretrained MiDaS v2.1 small model.
pub const DEFAULT_MODEL_URL: &str =
    "https://github.com/isl-org/MiDaS/releases/download/v2_1/model-small.onnx";

type RunnableOnnx = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Pretrained monocular depth network, loaded as an optimized tract plan.
pub struct DepthEstimator {
    plan: RunnableOnnx,
}

impl DepthEstimator {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let size = MODEL_INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path.as_ref())?
            .with_input_fact(0, f32::fact([1, 3, size, size]).into())?
            .into_optimized()?
            .into_runnable()?;
        Ok(Self { plan })
    }

    /// Run inference on a preprocessed `[1, 3, H, W]` tensor and squeeze the
    /// result into a height x width depth map.
    pub fn estimate(&self, input: Tensor) -> Result<DepthMap> {
        let outputs = self.plan.run(tvec!(input.into()))?;
        let view = outputs[0].to_array_view::<f32>()?;

        let shape = view.shape();
        if shape.len() < 2 || shape[..shape.len() - 2].iter().any(|&dim| dim != 1) {
            return Err(AppError::ProcessingError {
                message: format!("unexpected depth output shape {:?}", shape),
            });
        }

        let height = shape[shape.len() - 2];
        let width = shape[shape.len() - 1];
        let values: Vec<f32> = view.iter().copied().collect();
        DepthMap::new(width, height, values)
    }
}

/// Download the pretrained model weights unless they are already cached at
/// `dest`.
pub async fn fetch_model(url: &str, dest: &Path) -> Result<PathBuf> {
    if dest.exists() {
        tracing::debug!("Model already cached at {}", dest.display());
        return Ok(dest.to_path_buf());
    }

    tracing::info!("⬇️ Downloading depth model from {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(dest, &bytes).await?;

    tracing::info!("✅ Model saved to {} ({} bytes)", dest.display(), bytes.len());
    Ok(dest.to_path_buf())
}
