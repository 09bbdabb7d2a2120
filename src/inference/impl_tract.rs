use crate::inference::interface::{
    Capabilities, Delegate, Interpreter, InterpreterOptions, ModelRuntime,
};
use crate::inference::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct InterpreterTract {
    model: Plan,
}

impl Interpreter for InterpreterTract {
    fn run(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no output")?
            .cast_to::<f32>()?;
        Ok(output.as_slice::<f32>()?.to_vec())
    }
}

/// CPU execution through tract. `.tflite` files use the TFLite front-end,
/// anything else is read as ONNX.
pub struct ModelRuntimeTract {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelRuntimeTract {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("inference").with_namespace("tract"),
        }
    }

    fn load_plan(
        model_path: &Path,
        config: &ModelConfig,
    ) -> Result<Plan, Box<dyn std::error::Error + Send + Sync>> {
        let is_tflite = model_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tflite"))
            .unwrap_or(false);

        let plan = if is_tflite {
            tract_tflite::tflite()
                .model_for_path(model_path)?
                .into_optimized()?
                .into_runnable()?
        } else {
            tract_onnx::onnx()
                .model_for_path(model_path)?
                .with_input_fact(0, f32::fact(config.input_dims()).into())?
                .into_optimized()?
                .into_runnable()?
        };

        Ok(plan)
    }
}

impl ModelRuntime for ModelRuntimeTract {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            gpu: false,
            nnapi: false,
        }
    }

    fn load(
        &self,
        model_path: &Path,
        config: &ModelConfig,
        options: &InterpreterOptions,
    ) -> Result<Arc<dyn Interpreter>, Box<dyn std::error::Error + Send + Sync>> {
        let capabilities = self.capabilities();
        if let Some(delegate) = options
            .delegates
            .iter()
            .find(|delegate| !capabilities.supports(**delegate))
        {
            let name = match delegate {
                Delegate::Gpu => "GPU",
                Delegate::NnApi => "NNAPI",
            };
            return Err(format!("{} delegate is not available", name).into());
        }

        self.logger
            .info(&format!("Loading model {}", model_path.display()))?;
        let model = Self::load_plan(model_path, config)?;
        self.logger
            .info(&format!("Loaded model {}", model_path.display()))?;

        Ok(Arc::new(InterpreterTract { model }))
    }
}
