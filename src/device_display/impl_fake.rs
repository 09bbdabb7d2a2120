use crate::device_display::interface::{Controls, DeviceDisplay, Field};
use crate::photo::Photo;
use std::collections::HashMap;
use std::error::Error;

/// What the screen showed when a frame was flushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub controls: Controls,
    pub photo: Option<(u32, u32)>,
    pub fields: HashMap<Field, String>,
    pub progress: Option<String>,
    pub toasts: Vec<String>,
}

impl Snapshot {
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Default)]
pub struct DeviceDisplayFake {
    current: Snapshot,
    snapshots: Vec<Snapshot>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn set_controls(&mut self, controls: &Controls) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current.controls = controls.clone();
        Ok(())
    }

    fn show_photo(&mut self, photo: Option<&Photo>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current.photo = photo.map(|p| (p.width(), p.height()));
        Ok(())
    }

    fn write_field(&mut self, field: Field, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current.fields.insert(field, text.to_string());
        Ok(())
    }

    fn set_progress(&mut self, message: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current.progress = message.map(str::to_string);
        Ok(())
    }

    fn toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current.toasts.push(message.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.snapshots.push(self.current.clone());
        self.current.toasts.clear();
        Ok(())
    }
}
