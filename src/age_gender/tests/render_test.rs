use super::fixture::{models, photo};
use crate::age_gender::core::{init, transition, Acceleration, Event, Shown, State};
use crate::age_gender::render::{age_text, gender_text, inference_speed_text, view, Render};
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_display::interface::Field;
use crate::inference::age_model::AgePrediction;
use crate::inference::gender_model::GenderPrediction;
use crate::inference::interface::{Capabilities, Delegate};
use crate::inference::Estimate;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn estimate(scores: [f32; 2], age: f32) -> Estimate {
    Estimate {
        gender: GenderPrediction {
            scores,
            inference_time: Duration::from_millis(7),
        },
        age: AgePrediction {
            age,
            inference_time: Duration::from_millis(31),
        },
    }
}

#[test]
fn test_gender_label() {
    assert_eq!(gender_text(&estimate([0.6, 0.4], 30.0)), "Gender : Male");
    assert_eq!(gender_text(&estimate([0.4, 0.6], 30.0)), "Gender : Female");
    assert_eq!(gender_text(&estimate([0.5, 0.5], 30.0)), "Gender : Female");
}

#[test]
fn test_age_label_is_floor() {
    assert_eq!(age_text(&estimate([0.6, 0.4], 24.97)), "24");
    assert_eq!(age_text(&estimate([0.6, 0.4], 25.0)), "25");
    assert_eq!(age_text(&estimate([0.6, 0.4], 0.3)), "0");
}

#[test]
fn test_each_model_reports_its_own_time() {
    assert_eq!(
        inference_speed_text(&estimate([0.6, 0.4], 30.0)),
        "Age Detection model inference time : 31 ms \nGender Detection model inference time : 7 ms"
    );
}

#[test]
fn test_unavailable_delegates_are_disabled_with_explanation() {
    let (state, _) = init(Capabilities::default());

    let controls = view(&state).controls;

    assert!(!controls.gpu.enabled);
    assert!(!controls.gpu.checked);
    assert_eq!(
        controls.gpu.label,
        "Use GPU ( GPU acceleration is not available on this device )."
    );
    assert!(!controls.nnapi.enabled);
    assert_eq!(
        controls.nnapi.label,
        "Use NNAPI ( NNAPI is not available on this Device)"
    );
}

#[test]
fn test_available_delegates_are_enabled() {
    let (state, _) = init(Capabilities {
        gpu: true,
        nnapi: true,
    });

    let controls = view(&state).controls;

    assert!(controls.gpu.enabled);
    assert_eq!(controls.gpu.label, "Use GPU");
    assert!(controls.nnapi.enabled);
    assert_eq!(controls.nnapi.label, "Use NNAPI");
}

#[test]
fn test_render_writes_fields_to_display() {
    let display = Arc::new(Mutex::new(DeviceDisplayFake::new()));
    let render = Render::new(display.clone());
    let state = State::Ready {
        models: models([0.2, 0.8], 0.5),
        acceleration: Acceleration::default(),
        shown: Some(Shown {
            photo: photo(),
            estimate: Some(estimate([0.2, 0.8], 58.4)),
        }),
        notice: Some("Models initialized.".to_string()),
        message: None,
    };

    render.render(&state).unwrap();

    let display = display.lock().unwrap();
    let snapshot = display.snapshots().last().unwrap();
    assert_eq!(snapshot.field(Field::Gender), "Gender : Female");
    assert_eq!(snapshot.field(Field::Age), "58");
    assert_eq!(snapshot.photo, Some((60, 40)));
    assert_eq!(snapshot.toasts, vec!["Models initialized.".to_string()]);
    assert!(snapshot.controls.acquire_enabled);
    assert_eq!(snapshot.progress, None);
}

#[test]
fn test_delegate_choice_stays_visible_after_init() {
    let (state, _) = init(Capabilities {
        gpu: true,
        nnapi: true,
    });
    let (state, _) = transition(
        state,
        Event::AccelerationToggled {
            delegate: Delegate::Gpu,
            enabled: true,
        },
    );

    let (state, _) = transition(state, Event::InitModelsClicked);
    let controls = view(&state).controls;
    assert_eq!(controls.gpu.label, "Use GPU");
    assert!(controls.gpu.checked);
    assert!(!controls.gpu.enabled);
    assert_eq!(controls.nnapi.label, "Use NNAPI");
    assert!(!controls.nnapi.checked);
    assert!(!controls.nnapi.enabled);

    let (state, _) = transition(state, Event::ModelsLoaded(Ok(models([0.2, 0.8], 0.5))));
    let controls = view(&state).controls;
    assert_eq!(controls.gpu.label, "Use GPU");
    assert!(controls.gpu.checked);
    assert!(!controls.gpu.enabled);
}

#[test]
fn test_models_initialized_toast_is_shown_once() {
    let display = Arc::new(Mutex::new(DeviceDisplayFake::new()));
    let render = Render::new(display.clone());
    let (state, _) = init(Capabilities::default());
    let (state, _) = transition(state, Event::InitModelsClicked);
    let (state, _) = transition(state, Event::ModelsLoaded(Ok(models([0.2, 0.8], 0.5))));
    render.render(&state).unwrap();

    let (state, _) = transition(
        state,
        Event::AccelerationToggled {
            delegate: Delegate::NnApi,
            enabled: true,
        },
    );
    render.render(&state).unwrap();

    let display = display.lock().unwrap();
    let toasts: usize = display.snapshots().iter().map(|s| s.toasts.len()).sum();
    assert_eq!(toasts, 1);
}
