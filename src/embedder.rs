use enum_dispatch::enum_dispatch;
use image::RgbImage;
use log::debug;

use crate::bit_stream::BitStream;
use crate::media::iterators::{blue_channels_mut, rgb_channels_mut};
use crate::result::Result;
use crate::strategy::{BlockRedundant, BlueChannel, EmbedStrategy, FullChannel};

/// writes a bit into the least significant bit of a color channel
#[inline]
fn hide_bit(channel: &mut u8, bit: bool) {
    *channel = (*channel & 0xFE) | bit as u8;
}

/// per-strategy dispersal of a bit stream over a carrier's channel LSBs
#[enum_dispatch]
pub trait HideBits {
    /// consumes the stream front to back, channels beyond the stream's
    /// end stay untouched
    fn hide(&self, carrier: &mut RgbImage, bits: &BitStream);
}

impl HideBits for FullChannel {
    fn hide(&self, carrier: &mut RgbImage, bits: &BitStream) {
        for (channel, bit) in rgb_channels_mut(carrier).zip(bits.iter()) {
            hide_bit(channel, bit);
        }
    }
}

impl HideBits for BlueChannel {
    fn hide(&self, carrier: &mut RgbImage, bits: &BitStream) {
        for (blue, bit) in blue_channels_mut(carrier).zip(bits.iter()) {
            hide_bit(blue, bit);
        }
    }
}

impl HideBits for BlockRedundant {
    fn hide(&self, carrier: &mut RgbImage, bits: &BitStream) {
        let mut slots = blue_channels_mut(carrier);
        'bits: for bit in bits.iter() {
            // slots beyond the image bounds are simply unavailable
            for _ in 0..self.block_size {
                match slots.next() {
                    Some(blue) => hide_bit(blue, bit),
                    None => break 'bits,
                }
            }
        }
    }
}

/// writes a bit sequence into a copy of the carrier image
///
/// ## Example of usage
/// ```rust
/// use image::RgbImage;
/// use qrstego::{BitStream, EmbedStrategy, Embedder, Extractor};
///
/// let carrier = RgbImage::from_pixel(8, 8, image::Rgb([120, 90, 201]));
/// let payload = BitStream::from_bytes(b"hi");
/// let strategy = EmbedStrategy::full_channel();
///
/// let stego = Embedder::embed(&carrier, &payload, &strategy).unwrap();
/// let recovered = Extractor::extract(&stego, &strategy, payload.len()).unwrap();
/// assert_eq!(recovered, payload);
/// ```
pub struct Embedder;

impl Embedder {
    /// produces a new stego image, the caller's carrier is never mutated
    ///
    /// Fails with a capacity error before any pixel is touched when the
    /// payload does not fit the carrier under the given strategy.
    pub fn embed(
        carrier: &RgbImage,
        bits: &BitStream,
        strategy: &EmbedStrategy,
    ) -> Result<RgbImage> {
        strategy.validate()?;
        strategy.validate_capacity(carrier.dimensions(), bits.len())?;

        debug!(
            "embedding {} bits into a {}x{} carrier via {strategy:?}",
            bits.len(),
            carrier.width(),
            carrier.height()
        );

        let mut stego = carrier.clone();
        strategy.hide(&mut stego, bits);

        Ok(stego)
    }
}
