use crate::inference::model_config::{ModelConfig, TensorLayout};
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        image.clone()
    } else {
        image.resize_exact(width, height, imageops::FilterType::Triangle)
    }
}

/// RGB pixels scaled to `[0, 1]`, laid out as the model expects.
fn image_to_tensor(
    image: &DynamicImage,
    layout: TensorLayout,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let shape = match layout {
        TensorLayout::Nhwc => [1, height, width, 3],
        TensorLayout::Nchw => [1, 3, height, width],
    };
    let mut tensor = Tensor::zero::<f32>(&shape)?;
    let data = tensor.as_slice_mut::<f32>()?;

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for c in 0..3 {
            let index = match layout {
                TensorLayout::Nhwc => (y * width + x) * 3 + c,
                TensorLayout::Nchw => c * height * width + y * width + x,
            };
            data[index] = pixel[c] as f32 / 255.0;
        }
    }

    Ok(tensor)
}

pub fn image_to_input_tensor(
    image: &DynamicImage,
    config: &ModelConfig,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let (height, width) = config.input_shape;
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, config.layout)
}
