use crate::device_camera::interface::{CaptureOutcome, DeviceCamera};
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hands over the latest frame an external capture tool left at `source`.
pub struct DeviceCameraSnapshot {
    source: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraSnapshot {
    pub fn new(source: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            source,
            logger: logger.with_namespace("camera").with_namespace("snapshot"),
        }
    }
}

impl DeviceCamera for DeviceCameraSnapshot {
    fn is_available(&self) -> bool {
        self.source.is_file()
    }

    fn capture(
        &self,
        output: &Path,
    ) -> Result<CaptureOutcome, Box<dyn std::error::Error + Send + Sync>> {
        if !self.source.is_file() {
            self.logger.info(&format!(
                "No snapshot at {}, nothing captured",
                self.source.display()
            ))?;
            return Ok(CaptureOutcome::Cancelled);
        }

        let bytes = std::fs::copy(&self.source, output)?;
        self.logger.info(&format!(
            "Copied {} bytes from {}",
            bytes,
            self.source.display()
        ))?;
        Ok(CaptureOutcome::Captured)
    }
}
