use enum_dispatch::enum_dispatch;
use image::RgbImage;
use log::debug;

use crate::bit_stream::BitStream;
use crate::error::StegoError;
use crate::media::iterators::{blue_channels, rgb_channels};
use crate::result::Result;
use crate::strategy::{BlockRedundant, BlueChannel, Capacity, EmbedStrategy, FullChannel};

/// per-strategy recovery of a bit stream from a stego image's channel LSBs
#[enum_dispatch]
pub trait UnveilBits {
    /// reads channel LSBs in the same traversal order as embedding
    fn unveil(&self, stego: &RgbImage, bit_count: usize) -> BitStream;
}

impl UnveilBits for FullChannel {
    fn unveil(&self, stego: &RgbImage, bit_count: usize) -> BitStream {
        rgb_channels(stego)
            .take(bit_count)
            .map(|channel| channel & 1 == 1)
            .collect()
    }
}

impl UnveilBits for BlueChannel {
    fn unveil(&self, stego: &RgbImage, bit_count: usize) -> BitStream {
        blue_channels(stego)
            .take(bit_count)
            .map(|blue| blue & 1 == 1)
            .collect()
    }
}

impl UnveilBits for BlockRedundant {
    /// majority vote per block: a bit decodes to 1 when more than half of
    /// its present slots hold a 1, ties decode to 0
    ///
    /// Slots past the image bounds are absent from the vote entirely, they
    /// neither count as zeros nor widen the denominator.
    fn unveil(&self, stego: &RgbImage, bit_count: usize) -> BitStream {
        let mut slots = blue_channels(stego);
        let mut bits = BitStream::with_capacity(bit_count);

        for _ in 0..bit_count {
            let mut present = 0usize;
            let mut ones = 0usize;
            for blue in slots.by_ref().take(self.block_size) {
                present += 1;
                ones += (blue & 1) as usize;
            }
            if present == 0 {
                break;
            }
            bits.push(2 * ones > present);
        }

        bits
    }
}

/// reads a bit sequence back out of a stego image, the inverse of
/// [`Embedder`](crate::Embedder)
///
/// The caller supplies the exact bit count that was embedded, the scheme
/// has no self-describing length.
pub struct Extractor;

impl Extractor {
    pub fn extract(
        stego: &RgbImage,
        strategy: &EmbedStrategy,
        bit_count: usize,
    ) -> Result<BitStream> {
        strategy.validate()?;

        let (width, height) = stego.dimensions();
        let available = strategy.capacity_bits(width, height);
        if bit_count > available {
            return Err(StegoError::ValidationError(format!(
                "requested {bit_count} bits but the image only offers {available} slots"
            )));
        }

        debug!("extracting {bit_count} bits from a {width}x{height} stego image via {strategy:?}");

        Ok(strategy.unveil(stego, bit_count))
    }
}
