use super::core::{Acceleration, Shown, State};
use crate::device_display::interface::{Controls, DeviceDisplay, Field, Toggle};
use crate::inference::interface::Delegate;
use crate::inference::Estimate;
use crate::photo::Photo;
use std::sync::{Arc, Mutex};

pub const PROCESSING: &str = "Processing ...";

/// Everything the screen should show for one state.
#[derive(Debug, Clone)]
pub struct View {
    pub controls: Controls,
    pub photo: Option<Photo>,
    pub gender: String,
    pub age: String,
    pub inference_speed: String,
    pub status: String,
    pub progress: Option<&'static str>,
    pub toast: Option<String>,
}

/// Delegate checkboxes only accept input before the models are loaded.
fn toggle(acceleration: Option<&Acceleration>, delegate: Delegate, editable: bool) -> Toggle {
    let supported = acceleration
        .map(|a| a.capabilities.supports(delegate))
        .unwrap_or(false);

    let label = match (delegate, supported) {
        (Delegate::Gpu, true) => "Use GPU",
        (Delegate::Gpu, false) => "Use GPU ( GPU acceleration is not available on this device ).",
        (Delegate::NnApi, true) => "Use NNAPI",
        (Delegate::NnApi, false) => "Use NNAPI ( NNAPI is not available on this Device)",
    };

    Toggle {
        label: label.to_string(),
        enabled: supported && editable,
        checked: acceleration.map(|a| a.is_enabled(delegate)).unwrap_or(false),
    }
}

pub fn gender_text(estimate: &Estimate) -> String {
    format!("Gender : {}", estimate.gender.gender().as_str())
}

pub fn age_text(estimate: &Estimate) -> String {
    estimate.age.years().to_string()
}

pub fn inference_speed_text(estimate: &Estimate) -> String {
    format!(
        "Age Detection model inference time : {} ms \nGender Detection model inference time : {} ms",
        estimate.age.inference_time.as_millis(),
        estimate.gender.inference_time.as_millis()
    )
}

pub fn view(state: &State) -> View {
    let acceleration = state.acceleration();
    let uninitialized = matches!(state, State::ModelsUninitialized { .. });

    let controls = Controls {
        init_enabled: uninitialized,
        acquire_enabled: matches!(state, State::Ready { .. }),
        gpu: toggle(acceleration, Delegate::Gpu, uninitialized),
        nnapi: toggle(acceleration, Delegate::NnApi, uninitialized),
    };

    let shown: Option<&Shown> = match state {
        State::Ready { shown, .. }
        | State::CapturingPhoto { shown, .. }
        | State::SelectingPhoto { shown, .. } => shown.as_ref(),
        _ => None,
    };

    let photo = match state {
        State::Estimating { photo, .. } => Some(photo.clone()),
        _ => shown.map(|s| s.photo.clone()),
    };

    let estimate = shown.and_then(|s| s.estimate.as_ref());

    let status = match state {
        State::ModelsUninitialized { message, .. } => message.clone().unwrap_or_default(),
        State::ModelsInitializing { .. } => "Initializing models ...".to_string(),
        State::Ready { message, .. } => message.clone().unwrap_or_default(),
        _ => String::new(),
    };

    View {
        controls,
        photo,
        gender: estimate.map(gender_text).unwrap_or_default(),
        age: estimate.map(age_text).unwrap_or_default(),
        inference_speed: estimate.map(inference_speed_text).unwrap_or_default(),
        status,
        progress: matches!(state, State::Estimating { .. }).then_some(PROCESSING),
        toast: match state {
            State::Ready { notice, .. } => notice.clone(),
            _ => None,
        },
    }
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let view = view(state);
        let mut screen = self.device_display.lock().map_err(|e| e.to_string())?;

        screen.set_controls(&view.controls)?;
        screen.show_photo(view.photo.as_ref())?;
        screen.write_field(Field::Gender, &view.gender)?;
        screen.write_field(Field::Age, &view.age)?;
        screen.write_field(Field::InferenceSpeed, &view.inference_speed)?;
        screen.write_field(Field::Status, &view.status)?;
        screen.set_progress(view.progress)?;
        if let Some(toast) = &view.toast {
            screen.toast(toast)?;
        }
        screen.flush()?;

        Ok(())
    }
}
