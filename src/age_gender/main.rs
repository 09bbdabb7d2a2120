use crate::age_gender::core::{init, transition, Effect, Event, State};
use crate::age_gender::render::Render;
use crate::age_gender::run_effect::RunEffect;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_gallery::interface::DeviceGallery;
use crate::inference::interface::ModelRuntime;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

pub type RunResult = Result<State, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone)]
pub struct AgeGender {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub model_runtime: Arc<dyn ModelRuntime + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_gallery: Arc<dyn DeviceGallery + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl AgeGender {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_runtime: Arc<dyn ModelRuntime + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_gallery: Arc<dyn DeviceGallery + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        Self {
            config,
            logger,
            model_runtime,
            device_camera,
            device_gallery,
            device_display,
        }
    }

    /// Starts the event loop on its own thread. UI callbacks post through the
    /// returned sender; the loop ends after `Event::ExitRequested`.
    pub fn start(&self) -> (Sender<Event>, JoinHandle<RunResult>) {
        let logger = self.logger.with_namespace("age_gender");
        let render = Render::new(self.device_display.clone());
        let run_effect = RunEffect::new(
            self.config.clone(),
            self.logger.clone(),
            self.model_runtime.clone(),
            self.device_camera.clone(),
            self.device_gallery.clone(),
        );

        let transition_logger = logger.clone();
        let render_logger = logger.clone();

        let machine = StateMachine::new(
            init(self.model_runtime.capabilities()),
            move |state: State, event: Event| {
                let _ = transition_logger.info(&format!(
                    "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
                    state, event
                ));
                let (new_state, effects) = transition(state, event);
                let _ = transition_logger.info(&format!(
                    "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
                    new_state, effects
                ));
                (new_state, effects)
            },
            move |state: &State| {
                if let Err(e) = render.render(state) {
                    let _ = render_logger.error(&format!("Render failed: {}", e));
                }
            },
            move |effect: Effect, event_sender: Sender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            State::is_shut_down,
        );

        let event_sender = machine.sender();
        let handle = std::thread::spawn(move || machine.run());

        (event_sender, handle)
    }
}
