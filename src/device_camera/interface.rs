use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    Cancelled,
}

pub trait DeviceCamera {
    /// Whether anything can take a picture right now.
    fn is_available(&self) -> bool;

    /// Writes a full-size picture into `output`.
    fn capture(&self, output: &Path)
        -> Result<CaptureOutcome, Box<dyn std::error::Error + Send + Sync>>;
}
