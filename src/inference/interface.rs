use crate::inference::model_config::ModelConfig;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

/// Hardware backends a runtime may hand execution to instead of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delegate {
    Gpu,
    NnApi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub gpu: bool,
    pub nnapi: bool,
}

impl Capabilities {
    pub fn supports(&self, delegate: Delegate) -> bool {
        match delegate {
            Delegate::Gpu => self.gpu,
            Delegate::NnApi => self.nnapi,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpreterOptions {
    pub delegates: Vec<Delegate>,
}

/// A loaded network, ready to run.
pub trait Interpreter: Send + Sync {
    /// Runs one input tensor and returns the first output flattened.
    fn run(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait ModelRuntime: Send + Sync {
    fn capabilities(&self) -> Capabilities;

    fn load(
        &self,
        model_path: &Path,
        config: &ModelConfig,
        options: &InterpreterOptions,
    ) -> Result<Arc<dyn Interpreter>, Box<dyn std::error::Error + Send + Sync>>;
}
