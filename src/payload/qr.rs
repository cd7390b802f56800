use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::StegoError;
use crate::result::Result;

/// renders a payload text as a black-on-white QR bit-plane
///
/// The plane is the typical payload for the embedding engine: strictly
/// binary, so it survives the LSB round-trip bit for bit. Resizing uses
/// nearest neighbor to keep it binary.
///
/// ## Example of usage
/// ```rust
/// use qrstego::payload::QrPayload;
///
/// let plane = QrPayload::new("https://example.org")
///     .with_size((100, 100))
///     .render()
///     .unwrap();
///
/// assert_eq!(plane.dimensions(), (100, 100));
/// assert!(plane.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
/// ```
#[derive(Debug, Clone)]
pub struct QrPayload {
    text: String,
    size: Option<(u32, u32)>,
}

impl QrPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
        }
    }

    /// the dimensions the rendered plane is scaled to, defaults to the
    /// QR code's native module grid
    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = Some(size);
        self
    }

    pub fn render(&self) -> Result<GrayImage> {
        let code = QrCode::with_error_correction_level(self.text.as_bytes(), EcLevel::L)?;
        let plane: GrayImage = code.render::<Luma<u8>>().build();

        match self.size {
            None => Ok(plane),
            Some((width, height)) => {
                if width == 0 || height == 0 {
                    return Err(StegoError::ValidationError(format!(
                        "QR plane dimensions must be positive, got {width}x{height}"
                    )));
                }
                Ok(imageops::resize(&plane, width, height, FilterType::Nearest))
            }
        }
    }
}
