use age_gender::core::Event;
use age_gender::main::AgeGender;
use config::Config;
use device_camera::impl_snapshot::DeviceCameraSnapshot;
use device_display::impl_gui::DeviceDisplayGui;
use device_gallery::impl_prompt::{DeviceGalleryPrompt, Selection};
use inference::impl_tract::ModelRuntimeTract;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

mod age_gender;
mod config;
mod device_camera;
mod device_display;
mod device_gallery;
mod inference;
mod library;
mod photo;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let model_runtime = Arc::new(ModelRuntimeTract::new(logger.clone()));

    let device_camera = Arc::new(DeviceCameraSnapshot::new(
        config.snapshot_source.clone(),
        logger.clone(),
    ));

    let selection = Selection::default();
    let device_gallery = Arc::new(DeviceGalleryPrompt::new(selection.clone(), logger.clone()));

    let display_gui = DeviceDisplayGui::new();

    let age_gender = AgeGender::new(
        config,
        logger.clone(),
        model_runtime,
        device_camera,
        device_gallery,
        Arc::new(Mutex::new(display_gui.clone())),
    );

    let (event_sender, handle) = age_gender.start();

    let window = display_gui.window(event_sender.clone(), selection);
    display_gui.run(window)?;

    logger.info("Window closed, shutting down")?;
    let _ = event_sender.send(Event::ExitRequested);
    match handle.join() {
        Ok(result) => {
            result?;
        }
        Err(_) => return Err("event loop panicked".into()),
    }

    Ok(())
}
