use crate::device_gallery::interface::DeviceGallery;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

pub struct DeviceGalleryFake {
    selection: Option<PathBuf>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceGalleryFake {
    pub fn new(selection: Option<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            selection,
            logger: logger.with_namespace("gallery").with_namespace("fake"),
        }
    }
}

impl DeviceGallery for DeviceGalleryFake {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Picking {:?}", self.selection))?;
        Ok(self.selection.clone())
    }
}
