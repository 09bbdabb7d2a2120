use image::DynamicImage;

/// Vertical offset applied to face boxes before cropping.
pub const BBOX_SHIFT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
}

pub fn rotate(image: DynamicImage, degrees: u32) -> DynamicImage {
    match degrees % 360 {
        90 => image.rotate90(),
        180 => image.rotate180(),
        270 => image.rotate270(),
        _ => image,
    }
}

/// Crops `bbox` moved down by `BBOX_SHIFT`, clamped to the image bounds.
/// Returns `None` when nothing of the box lies inside the image.
pub fn crop_to_bbox(image: &DynamicImage, bbox: BoundingBox) -> Option<DynamicImage> {
    let (width, height) = (image.width() as i64, image.height() as i64);

    let left = bbox.left.clamp(0, width);
    let top = (bbox.top + BBOX_SHIFT).clamp(0, height);
    let right = (bbox.left + bbox.width as i64).clamp(0, width);
    let bottom = (bbox.top + BBOX_SHIFT + bbox.height as i64).clamp(0, height);

    if right <= left || bottom <= top {
        return None;
    }

    Some(image.crop_imm(
        left as u32,
        top as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}
