use std::path::PathBuf;

pub trait DeviceGallery {
    /// The file the user chose, or `None` if they backed out.
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;
}
