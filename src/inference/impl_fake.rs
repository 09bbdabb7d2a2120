use crate::inference::interface::{Capabilities, Interpreter, InterpreterOptions, ModelRuntime};
use crate::inference::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

pub enum InterpreterFake {
    Fixed(Vec<f32>),
    Random { output_len: usize },
}

impl Interpreter for InterpreterFake {
    fn run(&self, _input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            InterpreterFake::Fixed(output) => Ok(output.clone()),
            InterpreterFake::Random { output_len } => {
                let mut rng = rand::rng();
                let score_dist = Uniform::new(0.0f32, 1.0)?;
                Ok((0..*output_len)
                    .map(|_| score_dist.sample(&mut rng))
                    .collect())
            }
        }
    }
}

/// Hands out fake interpreters. Models registered by file name answer with
/// fixed outputs, every other model with random scores.
pub struct ModelRuntimeFake {
    capabilities: Capabilities,
    outputs: HashMap<String, Vec<f32>>,
    fail_loads: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelRuntimeFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            capabilities: Capabilities::default(),
            outputs: HashMap::new(),
            fail_loads: false,
            logger: logger.with_namespace("inference").with_namespace("fake"),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_output(mut self, file_name: &str, output: Vec<f32>) -> Self {
        self.outputs.insert(file_name.to_string(), output);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_loads = true;
        self
    }
}

impl ModelRuntime for ModelRuntimeFake {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn load(
        &self,
        model_path: &Path,
        _config: &ModelConfig,
        options: &InterpreterOptions,
    ) -> Result<Arc<dyn Interpreter>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Loading model {} with delegates {:?}",
            model_path.display(),
            options.delegates
        ))?;

        if self.fail_loads {
            return Err(format!("model file not found: {}", model_path.display()).into());
        }

        let file_name = model_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let interpreter = match self.outputs.get(&file_name) {
            Some(output) => InterpreterFake::Fixed(output.clone()),
            None => InterpreterFake::Random { output_len: 2 },
        };

        Ok(Arc::new(interpreter))
    }
}
