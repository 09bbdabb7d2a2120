use crate::inference::interface::Interpreter;
use crate::inference::model_config::ModelConfig;
use crate::inference::preprocess::image_to_input_tensor;
use image::DynamicImage;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgePrediction {
    pub age: f32,
    pub inference_time: Duration,
}

impl AgePrediction {
    /// Whole years, rounded down.
    pub fn years(&self) -> i64 {
        self.age.floor() as i64
    }
}

pub struct AgeEstimationModel {
    interpreter: Arc<dyn Interpreter>,
    config: ModelConfig,
    age_scale: f32,
}

impl AgeEstimationModel {
    pub fn new(interpreter: Arc<dyn Interpreter>, config: ModelConfig, age_scale: f32) -> Self {
        Self {
            interpreter,
            config,
            age_scale,
        }
    }

    pub fn predict_age(
        &self,
        image: &DynamicImage,
    ) -> Result<AgePrediction, Box<dyn std::error::Error + Send + Sync>> {
        let input = image_to_input_tensor(image, &self.config)?;

        let start = Instant::now();
        let output = self.interpreter.run(input)?;
        let inference_time = start.elapsed();

        let raw = output.first().ok_or("age model returned no output")?;

        Ok(AgePrediction {
            age: raw * self.age_scale,
            inference_time,
        })
    }
}
