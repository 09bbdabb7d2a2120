use crate::inference::interface::Interpreter;
use crate::inference::model_config::ModelConfig;
use crate::inference::preprocess::image_to_input_tensor;
use image::DynamicImage;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Output index 0 scores "male", index 1 "female". Ties go to female.
    pub fn from_scores(scores: [f32; 2]) -> Self {
        if scores[0] > scores[1] {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenderPrediction {
    pub scores: [f32; 2],
    pub inference_time: Duration,
}

impl GenderPrediction {
    pub fn gender(&self) -> Gender {
        Gender::from_scores(self.scores)
    }
}

pub struct GenderClassificationModel {
    interpreter: Arc<dyn Interpreter>,
    config: ModelConfig,
}

impl GenderClassificationModel {
    pub fn new(interpreter: Arc<dyn Interpreter>, config: ModelConfig) -> Self {
        Self {
            interpreter,
            config,
        }
    }

    pub fn predict_gender(
        &self,
        image: &DynamicImage,
    ) -> Result<GenderPrediction, Box<dyn std::error::Error + Send + Sync>> {
        let input = image_to_input_tensor(image, &self.config)?;

        let start = Instant::now();
        let output = self.interpreter.run(input)?;
        let inference_time = start.elapsed();

        match output.as_slice() {
            [male, female, ..] => Ok(GenderPrediction {
                scores: [*male, *female],
                inference_time,
            }),
            _ => Err(format!(
                "gender model returned {} scores, expected 2",
                output.len()
            )
            .into()),
        }
    }
}
