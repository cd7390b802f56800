use std::path::{Path, PathBuf};

use log::debug;

use crate::api::conceal::ConcealReceipt;
use crate::bit_plane::BitPlaneCodec;
use crate::error::StegoError;
use crate::extractor::Extractor;
use crate::media;
use crate::result::Result;
use crate::strategy::EmbedStrategy;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    stego: Option<PathBuf>,
    strategy: Option<EmbedStrategy>,
    bit_count: Option<usize>,
    plane_size: Option<(u32, u32)>,
    output: Option<PathBuf>,
}

impl RevealApi {
    /// the stego image holding the embedded plane
    pub fn from_stego<A: AsRef<Path>>(mut self, stego: A) -> Self {
        self.stego = Some(stego.as_ref().to_path_buf());
        self
    }

    /// must match the strategy used for concealing
    pub fn with_strategy(mut self, strategy: EmbedStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// the exact number of bits that went in, defaults to
    /// `plane width * plane height`
    pub fn expecting_bits(mut self, bit_count: usize) -> Self {
        self.bit_count = Some(bit_count);
        self
    }

    pub fn with_plane_size(mut self, size: (u32, u32)) -> Self {
        self.plane_size = Some(size);
        self
    }

    /// takes strategy, bit count and plane size from a conceal receipt
    pub fn with_receipt(mut self, receipt: &ConcealReceipt) -> Self {
        self.strategy = Some(receipt.strategy);
        self.bit_count = Some(receipt.bit_count);
        self.plane_size = Some(receipt.plane_size);
        self
    }

    /// where the recovered monochrome plane is written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(stego_path) = self.stego else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(plane_size) = self.plane_size else {
            return Err(StegoError::ValidationError(
                "the plane dimensions of the embedded payload must be provided".into(),
            ));
        };

        let strategy = self.strategy.unwrap_or_else(EmbedStrategy::full_channel);
        let bit_count = self
            .bit_count
            .unwrap_or(plane_size.0 as usize * plane_size.1 as usize);
        debug!("revealing {bit_count} bits from {stego_path:?} via {strategy:?}");

        let stego = media::load_carrier(&stego_path)?;
        let bits = Extractor::extract(&stego, &strategy, bit_count)?;
        let plane = BitPlaneCodec::decode(&bits, plane_size)?;

        media::save_bit_plane(&plane, &output)
    }
}
