#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelVariant {
    #[default]
    NonQuantized,
    Quantized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[1, height, width, 3]`, what TFLite image models expect.
    Nhwc,
    /// `[1, 3, height, width]`, the usual ONNX export layout.
    Nchw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub non_quantized_file: String,
    pub quantized_file: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub layout: TensorLayout,
}

impl ModelConfig {
    pub fn file_name(&self, variant: ModelVariant) -> &str {
        match variant {
            ModelVariant::NonQuantized => &self.non_quantized_file,
            ModelVariant::Quantized => &self.quantized_file,
        }
    }

    pub fn input_dims(&self) -> [usize; 4] {
        let (height, width) = (self.input_shape.0 as usize, self.input_shape.1 as usize);
        match self.layout {
            TensorLayout::Nhwc => [1, height, width, 3],
            TensorLayout::Nchw => [1, 3, height, width],
        }
    }
}
