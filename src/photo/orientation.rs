use std::io::Cursor;

pub const ORIENTATION_UNDEFINED: u32 = 0;
pub const ORIENTATION_ROTATE_90: u32 = 6;
pub const ORIENTATION_ROTATE_180: u32 = 3;
pub const ORIENTATION_ROTATE_270: u32 = 8;

/// Clockwise rotation that makes an image with this EXIF orientation upright.
/// Mirrored orientations and unknown values are left alone.
pub fn rotation_degrees(orientation: u32) -> u32 {
    match orientation {
        ORIENTATION_ROTATE_90 => 90,
        ORIENTATION_ROTATE_180 => 180,
        ORIENTATION_ROTATE_270 => 270,
        _ => 0,
    }
}

/// Reads the Orientation tag of the primary image, falling back to
/// `ORIENTATION_UNDEFINED` when there is no EXIF block or no such tag.
pub fn read_orientation(bytes: &[u8]) -> u32 {
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(_) => return ORIENTATION_UNDEFINED,
    };

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(ORIENTATION_UNDEFINED)
}

pub fn read_rotation(bytes: &[u8]) -> u32 {
    rotation_degrees(read_orientation(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::test_images::{encode_jpeg, jpeg_with_orientation, split_image};

    #[test]
    fn test_orientation_maps_to_rotation() {
        assert_eq!(rotation_degrees(3), 180);
        assert_eq!(rotation_degrees(6), 90);
        assert_eq!(rotation_degrees(8), 270);
        assert_eq!(rotation_degrees(ORIENTATION_UNDEFINED), 0);
    }

    #[test]
    fn test_normal_and_mirrored_orientations_do_not_rotate() {
        for orientation in [1, 2, 4, 5, 7, 42] {
            assert_eq!(rotation_degrees(orientation), 0, "orientation {}", orientation);
        }
    }

    #[test]
    fn test_reads_tag_from_jpeg() {
        let image = split_image(8, 4);

        assert_eq!(read_orientation(&jpeg_with_orientation(&image, 6)), 6);
        assert_eq!(read_orientation(&jpeg_with_orientation(&image, 3)), 3);
        assert_eq!(read_rotation(&jpeg_with_orientation(&image, 8)), 270);
    }

    #[test]
    fn test_missing_exif_is_undefined() {
        let image = split_image(8, 4);

        assert_eq!(read_orientation(&encode_jpeg(&image)), ORIENTATION_UNDEFINED);
        assert_eq!(read_orientation(b"garbage"), ORIENTATION_UNDEFINED);
    }
}
