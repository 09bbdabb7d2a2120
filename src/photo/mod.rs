pub mod orientation;
pub mod transform;

use image::DynamicImage;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Camera,
    Gallery,
}

/// A decoded photo, already upright.
#[derive(Clone)]
pub struct Photo {
    pub image: Arc<DynamicImage>,
    pub source: PhotoSource,
}

impl Photo {
    pub fn new(image: DynamicImage, source: PhotoSource) -> Self {
        Self {
            image: Arc::new(image),
            source,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo({:?}, {}x{})", self.source, self.width(), self.height())
    }
}

/// Decodes a file written by the camera and rotates it according to its EXIF
/// orientation tag.
pub fn load_captured(path: &Path) -> Result<Photo, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?;
    let degrees = orientation::read_rotation(&bytes);
    Ok(Photo::new(
        transform::rotate(image, degrees),
        PhotoSource::Camera,
    ))
}

/// Decodes a file chosen from the gallery as-is.
pub fn load_selected(path: &Path) -> Result<Photo, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?;
    Ok(Photo::new(image, PhotoSource::Gallery))
}
