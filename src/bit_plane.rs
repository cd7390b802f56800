use image::GrayImage;

use crate::bit_stream::BitStream;
use crate::error::StegoError;
use crate::result::Result;

/// converts a monochrome image to and from its linear bit-plane
///
/// Pixels are visited row-major, origin top-left. A black pixel (luma 0)
/// maps to bit `0`, anything else maps to bit `1`. The dimensions are
/// returned alongside the stream because the scheme carries no embedded
/// size header, the caller hands them back to [`BitPlaneCodec::decode`].
///
/// ## Example of usage
/// ```rust
/// use image::GrayImage;
/// use qrstego::BitPlaneCodec;
///
/// let plane = GrayImage::from_fn(4, 4, |x, y| {
///     if (x + y) % 2 == 0 { image::Luma([0]) } else { image::Luma([255]) }
/// });
///
/// let (bits, size) = BitPlaneCodec::encode(&plane);
/// assert_eq!(bits.len(), 16);
/// assert_eq!(size, (4, 4));
///
/// let recovered = BitPlaneCodec::decode(&bits, size).unwrap();
/// assert_eq!(recovered, plane);
/// ```
pub struct BitPlaneCodec;

impl BitPlaneCodec {
    /// flattens a monochrome image into a bit stream plus the dimensions needed to invert it
    pub fn encode(plane: &GrayImage) -> (BitStream, (u32, u32)) {
        let bits = plane.pixels().map(|pixel| pixel.0[0] != 0).collect();

        (bits, plane.dimensions())
    }

    /// rebuilds a monochrome image of `size` from a bit stream
    ///
    /// A stream shorter than `width * height` leaves the trailing pixels
    /// black, excess bits beyond the grid are ignored.
    pub fn decode(bits: &BitStream, size: (u32, u32)) -> Result<GrayImage> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(StegoError::ValidationError(format!(
                "bit plane dimensions must be positive, got {width}x{height}"
            )));
        }

        let mut plane = GrayImage::new(width, height);
        for (pixel, bit) in plane.pixels_mut().zip(bits.iter()) {
            pixel.0[0] = if bit { 255 } else { 0 };
        }

        Ok(plane)
    }
}
