use crate::photo::Photo;
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toggle {
    pub label: String,
    pub enabled: bool,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Controls {
    /// The "initialize models" button.
    pub init_enabled: bool,
    /// Take-photo and select-image buttons.
    pub acquire_enabled: bool,
    pub gpu: Toggle,
    pub nnapi: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Gender,
    Age,
    InferenceSpeed,
    Status,
}

/// The main screen: acceleration toggles, buttons, the photo and the result
/// text fields.
pub trait DeviceDisplay: Send + Sync {
    fn set_controls(&mut self, controls: &Controls) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces the photo, or clears it with `None`.
    fn show_photo(&mut self, photo: Option<&Photo>) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn write_field(&mut self, field: Field, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Shows a blocking progress message, or hides it with `None`.
    fn set_progress(&mut self, message: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Short-lived notification.
    fn toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Called once all parts of a frame have been written.
    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
