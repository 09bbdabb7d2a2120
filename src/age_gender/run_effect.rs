use crate::age_gender::core::{Effect, Event};
use crate::config::Config;
use crate::device_camera::interface::{CaptureOutcome, DeviceCamera};
use crate::device_gallery::interface::DeviceGallery;
use crate::inference::interface::ModelRuntime;
use crate::inference::{estimate, load_models};
use crate::library::logger::interface::Logger;
use crate::photo::{self, transform, Photo};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model_runtime: Arc<dyn ModelRuntime + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_gallery: Arc<dyn DeviceGallery + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_runtime: Arc<dyn ModelRuntime + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_gallery: Arc<dyn DeviceGallery + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            model_runtime,
            device_camera,
            device_gallery,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        let event = match effect {
            Effect::LoadModels { options } => {
                let loaded = load_models(self.model_runtime.as_ref(), &self.config, options);
                self.log_failure("Loading models", &loaded);
                Event::ModelsLoaded(loaded)
            }
            Effect::CapturePhoto => {
                let captured = self.capture_photo();
                self.log_failure("Capturing photo", &captured);
                Event::PhotoCaptured(captured)
            }
            Effect::PickPhoto => {
                let picked = self.pick_photo();
                self.log_failure("Selecting photo", &picked);
                Event::PhotoSelected(picked)
            }
            Effect::Estimate { models, photo } => {
                let image = match self.config.face_box {
                    Some(bbox) => transform::crop_to_bbox(&photo.image, bbox)
                        .unwrap_or_else(|| photo.image.as_ref().clone()),
                    None => photo.image.as_ref().clone(),
                };
                let estimated = estimate(&models, &image);
                self.log_failure("Estimating", &estimated);
                Event::EstimateDone(estimated)
            }
            Effect::ReleaseModels { models } => {
                let _ = self
                    .logger
                    .info(&format!("Releasing {:?}", models));
                drop(models);
                return;
            }
        };

        let _ = event_sender.send(event);
    }

    /// `Ok(None)` covers everything that silently yields no photo: no camera,
    /// a capture file that cannot be created, or a cancelled capture.
    fn capture_photo(&self) -> Result<Option<Photo>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.device_camera.is_available() {
            self.logger.info("No camera available")?;
            return Ok(None);
        }

        let file = match self.create_capture_file() {
            Ok(file) => file,
            Err(e) => {
                self.logger
                    .error(&format!("Could not create capture file: {}", e))?;
                return Ok(None);
            }
        };

        match self.device_camera.capture(file.path())? {
            CaptureOutcome::Captured => Ok(Some(photo::load_captured(file.path())?)),
            CaptureOutcome::Cancelled => Ok(None),
        }
    }

    fn create_capture_file(
        &self,
    ) -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error + Send + Sync>> {
        std::fs::create_dir_all(&self.config.capture_dir)?;
        let file = tempfile::Builder::new()
            .prefix("image")
            .suffix(".jpg")
            .tempfile_in(&self.config.capture_dir)?;
        Ok(file)
    }

    fn pick_photo(&self) -> Result<Option<Photo>, Box<dyn std::error::Error + Send + Sync>> {
        match self.device_gallery.pick()? {
            Some(path) => Ok(Some(photo::load_selected(&path)?)),
            None => Ok(None),
        }
    }

    fn log_failure<T>(&self, what: &str, result: &Result<T, Box<dyn std::error::Error + Send + Sync>>) {
        if let Err(e) = result {
            let _ = self.logger.error(&format!("{} failed: {}", what, e));
        }
    }
}
