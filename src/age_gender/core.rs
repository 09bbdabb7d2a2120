use crate::inference::interface::{Capabilities, Delegate, InterpreterOptions};
use crate::inference::{Estimate, Models};
use crate::photo::Photo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Acceleration {
    pub capabilities: Capabilities,
    pub use_gpu: bool,
    pub use_nnapi: bool,
}

impl Acceleration {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            use_gpu: false,
            use_nnapi: false,
        }
    }

    /// Delegates the device cannot run stay off whatever the user asks.
    pub fn toggle(self, delegate: Delegate, enabled: bool) -> Self {
        let enabled = enabled && self.capabilities.supports(delegate);
        match delegate {
            Delegate::Gpu => Self {
                use_gpu: enabled,
                ..self
            },
            Delegate::NnApi => Self {
                use_nnapi: enabled,
                ..self
            },
        }
    }

    pub fn is_enabled(&self, delegate: Delegate) -> bool {
        match delegate {
            Delegate::Gpu => self.use_gpu,
            Delegate::NnApi => self.use_nnapi,
        }
    }

    pub fn options(&self) -> InterpreterOptions {
        let mut delegates = Vec::new();
        if self.use_gpu {
            delegates.push(Delegate::Gpu);
        }
        if self.use_nnapi {
            delegates.push(Delegate::NnApi);
        }
        InterpreterOptions { delegates }
    }
}

/// The photo on screen and, once inference finished, what was estimated.
#[derive(Debug, Clone)]
pub struct Shown {
    pub photo: Photo,
    pub estimate: Option<Estimate>,
}

#[derive(Debug, Clone)]
pub enum State {
    ModelsUninitialized {
        acceleration: Acceleration,
        message: Option<String>,
    },
    ModelsInitializing {
        acceleration: Acceleration,
    },
    Ready {
        models: Models,
        acceleration: Acceleration,
        shown: Option<Shown>,
        /// Shown once as a toast.
        notice: Option<String>,
        /// Status line.
        message: Option<String>,
    },
    CapturingPhoto {
        models: Models,
        acceleration: Acceleration,
        shown: Option<Shown>,
    },
    SelectingPhoto {
        models: Models,
        acceleration: Acceleration,
        shown: Option<Shown>,
    },
    Estimating {
        models: Models,
        acceleration: Acceleration,
        photo: Photo,
    },
    ShutDown,
}

impl State {
    pub fn models(&self) -> Option<&Models> {
        match self {
            State::Ready { models, .. }
            | State::CapturingPhoto { models, .. }
            | State::SelectingPhoto { models, .. }
            | State::Estimating { models, .. } => Some(models),
            _ => None,
        }
    }

    pub fn acceleration(&self) -> Option<&Acceleration> {
        match self {
            State::ModelsUninitialized { acceleration, .. }
            | State::ModelsInitializing { acceleration }
            | State::Ready { acceleration, .. }
            | State::CapturingPhoto { acceleration, .. }
            | State::SelectingPhoto { acceleration, .. }
            | State::Estimating { acceleration, .. } => Some(acceleration),
            State::ShutDown => None,
        }
    }

    pub fn is_shut_down(&self) -> bool {
        matches!(self, State::ShutDown)
    }
}

#[derive(Debug)]
pub enum Event {
    AccelerationToggled { delegate: Delegate, enabled: bool },
    InitModelsClicked,
    ModelsLoaded(Result<Models, Box<dyn std::error::Error + Send + Sync>>),
    TakePhotoClicked,
    PhotoCaptured(Result<Option<Photo>, Box<dyn std::error::Error + Send + Sync>>),
    SelectImageClicked,
    PhotoSelected(Result<Option<Photo>, Box<dyn std::error::Error + Send + Sync>>),
    EstimateDone(Result<Estimate, Box<dyn std::error::Error + Send + Sync>>),
    ExitRequested,
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadModels { options: InterpreterOptions },
    CapturePhoto,
    PickPhoto,
    Estimate { models: Models, photo: Photo },
    ReleaseModels { models: Models },
}

pub const MODELS_INITIALIZED: &str = "Models initialized.";
pub const NOTHING_SELECTED: &str =
    "No image selected. Type a path or drop a file on the window, then press Select image.";

pub fn init(capabilities: Capabilities) -> (State, Vec<Effect>) {
    (
        State::ModelsUninitialized {
            acceleration: Acceleration::new(capabilities),
            message: None,
        },
        vec![],
    )
}

fn ready(models: Models, acceleration: Acceleration, shown: Option<Shown>) -> State {
    State::Ready {
        models,
        acceleration,
        shown,
        notice: None,
        message: None,
    }
}

fn acquired(
    models: Models,
    acceleration: Acceleration,
    shown: Option<Shown>,
    result: Result<Option<Photo>, Box<dyn std::error::Error + Send + Sync>>,
) -> (State, Vec<Effect>) {
    match result {
        Ok(Some(photo)) => (
            State::Estimating {
                models: models.clone(),
                acceleration,
                photo: photo.clone(),
            },
            vec![Effect::Estimate { models, photo }],
        ),
        Ok(None) | Err(_) => (ready(models, acceleration, shown), vec![]),
    }
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (state, Event::ExitRequested) => {
            let effects = match state.models() {
                Some(models) => vec![Effect::ReleaseModels {
                    models: models.clone(),
                }],
                None => vec![],
            };
            (State::ShutDown, effects)
        }

        // Model initialization
        (
            State::ModelsUninitialized { acceleration, .. },
            Event::AccelerationToggled { delegate, enabled },
        ) => (
            State::ModelsUninitialized {
                acceleration: acceleration.toggle(delegate, enabled),
                message: None,
            },
            vec![],
        ),
        (State::ModelsUninitialized { acceleration, .. }, Event::InitModelsClicked) => (
            State::ModelsInitializing { acceleration },
            vec![Effect::LoadModels {
                options: acceleration.options(),
            }],
        ),
        (State::ModelsInitializing { acceleration }, Event::ModelsLoaded(result)) => match result {
            Ok(models) => (
                State::Ready {
                    models,
                    acceleration,
                    shown: None,
                    notice: Some(MODELS_INITIALIZED.to_string()),
                    message: None,
                },
                vec![],
            ),
            Err(e) => (
                State::ModelsUninitialized {
                    acceleration,
                    message: Some(format!("Model initialization failed: {}", e)),
                },
                vec![],
            ),
        },

        // Acquisition
        (
            State::Ready {
                models,
                acceleration,
                shown,
                ..
            },
            Event::TakePhotoClicked,
        ) => (
            State::CapturingPhoto {
                models,
                acceleration,
                shown,
            },
            vec![Effect::CapturePhoto],
        ),
        (
            State::Ready {
                models,
                acceleration,
                shown,
                ..
            },
            Event::SelectImageClicked,
        ) => (
            State::SelectingPhoto {
                models,
                acceleration,
                shown,
            },
            vec![Effect::PickPhoto],
        ),
        (
            State::CapturingPhoto {
                models,
                acceleration,
                shown,
            },
            Event::PhotoCaptured(result),
        ) => acquired(models, acceleration, shown, result),
        (
            State::SelectingPhoto {
                models,
                acceleration,
                shown,
            },
            Event::PhotoSelected(Ok(None)),
        ) => (
            State::Ready {
                models,
                acceleration,
                shown,
                notice: None,
                message: Some(NOTHING_SELECTED.to_string()),
            },
            vec![],
        ),
        (
            State::SelectingPhoto {
                models,
                acceleration,
                shown,
            },
            Event::PhotoSelected(result),
        ) => acquired(models, acceleration, shown, result),

        // Inference
        (
            State::Estimating {
                models,
                acceleration,
                photo,
            },
            Event::EstimateDone(result),
        ) => {
            let shown = Shown {
                photo,
                estimate: result.ok(),
            };
            (ready(models, acceleration, Some(shown)), vec![])
        }

        // The toast was already shown by the previous render.
        (
            State::Ready {
                models,
                acceleration,
                shown,
                message,
                ..
            },
            _,
        ) => (
            State::Ready {
                models,
                acceleration,
                shown,
                notice: None,
                message,
            },
            vec![],
        ),

        (state, _) => (state, vec![]),
    }
}
