use std::path::Path;

use image::{GrayImage, RgbImage};
use log::error;

use crate::error::StegoError;
use crate::result::Result;

/// only lossless formats survive LSB embedding
fn ensure_supported(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("png") | Some("bmp") => Ok(()),
        _ => Err(StegoError::UnsupportedMedia),
    }
}

/// loads a PNG or BMP carrier as an 8-bit RGB image
pub fn load_carrier(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    ensure_supported(path)?;

    Ok(image::open(path)
        .map_err(|e| {
            error!("Cannot open carrier image {path:?}: {e}");
            StegoError::InvalidImageMedia
        })?
        .to_rgb8())
}

/// saves a carrier or stego image, the format follows the extension
pub fn save_carrier(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_supported(path)?;

    img.save(path).map_err(|e| {
        error!("Error saving image {path:?}: {e}");
        StegoError::ImageEncodingError
    })
}

/// loads a monochrome bit-plane, thresholding every pixel to pure
/// black or white at mid gray
pub fn load_bit_plane(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    ensure_supported(path)?;

    let mut plane = image::open(path)
        .map_err(|e| {
            error!("Cannot open bit plane image {path:?}: {e}");
            StegoError::InvalidImageMedia
        })?
        .to_luma8();

    for pixel in plane.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < 128 { 0 } else { 255 };
    }

    Ok(plane)
}

pub fn save_bit_plane(plane: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_supported(path)?;

    plane.save(path).map_err(|e| {
        error!("Error saving bit plane {path:?}: {e}");
        StegoError::ImageEncodingError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gradient_carrier;
    use tempfile::TempDir;

    #[test]
    fn should_reject_unsupported_extensions() {
        assert!(matches!(
            load_carrier("carrier.jpg"),
            Err(StegoError::UnsupportedMedia)
        ));
        assert!(matches!(
            save_carrier(&gradient_carrier(2, 2), "stego.gif"),
            Err(StegoError::UnsupportedMedia)
        ));
        assert!(matches!(
            load_carrier("no-extension"),
            Err(StegoError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_fail_on_a_missing_file() {
        assert!(matches!(
            load_carrier("definitely-not-here.png"),
            Err(StegoError::InvalidImageMedia)
        ));
    }

    #[test]
    fn should_roundtrip_a_carrier_through_png_and_bmp() {
        let out_dir = TempDir::new().unwrap();
        let img = gradient_carrier(16, 9);

        for name in ["carrier.png", "carrier.bmp"] {
            let path = out_dir.path().join(name);
            save_carrier(&img, &path).unwrap();
            let reloaded = load_carrier(&path).unwrap();
            assert_eq!(reloaded, img, "{name} did not survive the roundtrip");
        }
    }

    #[test]
    fn should_threshold_a_loaded_bit_plane_to_pure_black_and_white() {
        let out_dir = TempDir::new().unwrap();
        let path = out_dir.path().join("plane.png");
        let mut plane = GrayImage::new(2, 2);
        plane.put_pixel(0, 0, image::Luma([127]));
        plane.put_pixel(1, 0, image::Luma([128]));
        plane.put_pixel(0, 1, image::Luma([255]));

        save_bit_plane(&plane, &path).unwrap();
        let reloaded = load_bit_plane(&path).unwrap();

        assert_eq!(reloaded.get_pixel(0, 0).0[0], 0);
        assert_eq!(reloaded.get_pixel(1, 0).0[0], 255);
        assert_eq!(reloaded.get_pixel(0, 1).0[0], 255);
        assert_eq!(reloaded.get_pixel(1, 1).0[0], 0);
    }
}
