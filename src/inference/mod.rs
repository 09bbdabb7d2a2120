pub mod age_model;
pub mod gender_model;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_tract;
pub mod interface;
pub mod model_config;
pub mod preprocess;

use crate::config::Config;
use age_model::{AgeEstimationModel, AgePrediction};
use gender_model::{GenderClassificationModel, GenderPrediction};
use image::DynamicImage;
use interface::{InterpreterOptions, ModelRuntime};
use std::fmt;
use std::sync::Arc;

/// Both loaded networks. Dropping the last clone releases them.
#[derive(Clone)]
pub struct Models {
    pub gender: Arc<GenderClassificationModel>,
    pub age: Arc<AgeEstimationModel>,
    pub options: InterpreterOptions,
}

impl fmt::Debug for Models {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Models(delegates: {:?})", self.options.delegates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub gender: GenderPrediction,
    pub age: AgePrediction,
}

/// Loads the gender model, then the age model. Either failing fails the load.
pub fn load_models(
    runtime: &dyn ModelRuntime,
    config: &Config,
    options: InterpreterOptions,
) -> Result<Models, Box<dyn std::error::Error + Send + Sync>> {
    let gender_interpreter =
        runtime.load(&config.gender_model_path(), &config.gender_model, &options)?;
    let age_interpreter = runtime.load(&config.age_model_path(), &config.age_model, &options)?;

    Ok(Models {
        gender: Arc::new(GenderClassificationModel::new(
            gender_interpreter,
            config.gender_model.clone(),
        )),
        age: Arc::new(AgeEstimationModel::new(
            age_interpreter,
            config.age_model.clone(),
            config.age_scale,
        )),
        options,
    })
}

pub fn estimate(
    models: &Models,
    image: &DynamicImage,
) -> Result<Estimate, Box<dyn std::error::Error + Send + Sync>> {
    let gender = models.gender.predict_gender(image)?;
    let age = models.age.predict_age(image)?;
    Ok(Estimate { gender, age })
}
