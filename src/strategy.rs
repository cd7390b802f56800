use enum_dispatch::enum_dispatch;
use image::RgbImage;

use crate::bit_stream::BitStream;
use crate::embedder::HideBits;
use crate::error::StegoError;
use crate::extractor::UnveilBits;
use crate::result::Result;

/// knows how many payload bits fit into a carrier of given dimensions
#[enum_dispatch]
pub trait Capacity {
    fn capacity_bits(&self, width: u32, height: u32) -> usize;
}

/// cycles through R, G and B of every pixel, one bit per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullChannel;

/// one bit per pixel, written only into the blue channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueChannel;

/// repeats every payload bit into `block_size` consecutive blue channel
/// slots, recovery runs a majority vote over each block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRedundant {
    pub block_size: usize,
}

impl BlockRedundant {
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }
}

impl Capacity for FullChannel {
    fn capacity_bits(&self, width: u32, height: u32) -> usize {
        3 * (width as usize) * (height as usize)
    }
}

impl Capacity for BlueChannel {
    fn capacity_bits(&self, width: u32, height: u32) -> usize {
        (width as usize) * (height as usize)
    }
}

impl Capacity for BlockRedundant {
    fn capacity_bits(&self, width: u32, height: u32) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        (width as usize) * (height as usize) / self.block_size
    }
}

/// the closed set of bit dispersal strategies
///
/// All three traversals address pixels row-major with the origin
/// top-left, so the same strategy value drives both the
/// [`Embedder`](crate::Embedder) and the [`Extractor`](crate::Extractor).
#[enum_dispatch(Capacity, HideBits, UnveilBits)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedStrategy {
    FullChannel(FullChannel),
    BlueChannel(BlueChannel),
    BlockRedundant(BlockRedundant),
}

impl EmbedStrategy {
    pub fn full_channel() -> Self {
        FullChannel.into()
    }

    pub fn blue_channel() -> Self {
        BlueChannel.into()
    }

    pub fn block_redundant(block_size: usize) -> Self {
        BlockRedundant::new(block_size).into()
    }

    /// rejects malformed strategy parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::BlockRedundant(b) if b.block_size == 0 => Err(StegoError::ValidationError(
                "block size must be positive".into(),
            )),
            _ => Ok(()),
        }
    }

    /// fails when the payload does not fit the carrier, equality is fine
    pub fn validate_capacity(
        &self,
        carrier_size: (u32, u32),
        payload_bits: usize,
    ) -> Result<()> {
        let available = self.capacity_bits(carrier_size.0, carrier_size.1);
        if payload_bits > available {
            return Err(StegoError::CapacityError {
                required: payload_bits,
                available,
            });
        }

        Ok(())
    }
}
