use crate::utils::error::Result;
use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;
use tract_onnx::prelude::*;

/// Square input resolution of the pretrained depth network.
pub const MODEL_INPUT_SIZE: u32 = 384;

pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Resize to the network resolution and normalize with ImageNet statistics,
/// producing an NCHW tensor of shape `[1, 3, 384, 384]`.
pub fn to_input_tensor(img: &RgbImage) -> Tensor {
    let resized = image::imageops::resize(
        img,
        MODEL_INPUT_SIZE,
        MODEL_INPUT_SIZE,
        FilterType::Triangle,
    );

    let size = MODEL_INPUT_SIZE as usize;
    let input = tract_ndarray::Array4::from_shape_fn((1, 3, size, size), |(_, c, y, x)| {
        let channel = resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;
        (channel - IMAGENET_MEAN[c]) / IMAGENET_STD[c]
    });

    input.into()
}
