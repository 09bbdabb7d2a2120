use crate::device_camera::interface::{CaptureOutcome, DeviceCamera};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::path::Path;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    available: bool,
    outcome: CaptureOutcome,
    frame_size: (u32, u32),
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            available: true,
            outcome: CaptureOutcome::Captured,
            frame_size: (320, 240),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn cancelling(mut self) -> Self {
        self.outcome = CaptureOutcome::Cancelled;
        self
    }

    fn frame(&self) -> DynamicImage {
        let (width, height) = self.frame_size;
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
        }))
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        self.available
    }

    fn capture(
        &self,
        output: &Path,
    ) -> Result<CaptureOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing photo...")?;

        if self.outcome == CaptureOutcome::Cancelled {
            self.logger.info("Capture cancelled")?;
            return Ok(CaptureOutcome::Cancelled);
        }

        self.frame().save_with_format(output, ImageFormat::Jpeg)?;
        self.logger
            .info(&format!("Photo written to {}", output.display()))?;
        Ok(CaptureOutcome::Captured)
    }
}
