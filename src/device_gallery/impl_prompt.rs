use crate::device_gallery::interface::DeviceGallery;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Selection typed or dropped into the window. The window writes it, the
/// gallery takes it when the user asks for the image.
#[derive(Clone, Default)]
pub struct Selection {
    path: Arc<Mutex<Option<PathBuf>>>,
}

impl Selection {
    pub fn set(&self, path: Option<PathBuf>) {
        if let Ok(mut current) = self.path.lock() {
            *current = path;
        }
    }

    fn take(&self) -> Option<PathBuf> {
        self.path.lock().ok().and_then(|mut current| current.take())
    }
}

pub struct DeviceGalleryPrompt {
    selection: Selection,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceGalleryPrompt {
    pub fn new(selection: Selection, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            selection,
            logger: logger.with_namespace("gallery").with_namespace("prompt"),
        }
    }
}

impl DeviceGallery for DeviceGalleryPrompt {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let picked = self
            .selection
            .take()
            .filter(|path| !path.as_os_str().is_empty());

        match &picked {
            Some(path) => self.logger.info(&format!("Picked {}", path.display()))?,
            None => self.logger.info("Nothing selected")?,
        }

        Ok(picked)
    }
}
