use crate::inference::model_config::{ModelConfig, ModelVariant, TensorLayout};
use crate::photo::transform::BoundingBox;
use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub model_variant: ModelVariant,
    pub gender_model: ModelConfig,
    pub age_model: ModelConfig,
    /// Outputs of the age model are fractions of this age.
    pub age_scale: f32,
    pub capture_dir: PathBuf,
    /// Where the external capture tool leaves its latest frame.
    pub snapshot_source: PathBuf,
    pub face_box: Option<BoundingBox>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Config {
    pub fn gender_model_path(&self) -> PathBuf {
        self.assets_dir
            .join(self.gender_model.file_name(self.model_variant))
    }

    pub fn age_model_path(&self) -> PathBuf {
        self.assets_dir.join(self.age_model.file_name(self.model_variant))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            model_variant: ModelVariant::NonQuantized,
            gender_model: ModelConfig {
                non_quantized_file: "model_gender_nonq.tflite".to_string(),
                quantized_file: "model_gender_q.tflite".to_string(),
                input_shape: (128, 128),
                layout: TensorLayout::Nhwc,
            },
            age_model: ModelConfig {
                non_quantized_file: "model_age_vN_nonq.tflite".to_string(),
                quantized_file: "model_age_q.tflite".to_string(),
                input_shape: (200, 200),
                layout: TensorLayout::Nhwc,
            },
            age_scale: 116.0,
            capture_dir: std::env::temp_dir().join("gender-age-cam"),
            snapshot_source: PathBuf::from("snapshot.jpg"),
            face_box: None,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}
