use std::path::{Path, PathBuf};

use log::debug;

use crate::bit_plane::BitPlaneCodec;
use crate::embedder::Embedder;
use crate::error::StegoError;
use crate::media;
use crate::payload::QrPayload;
use crate::result::Result;
use crate::strategy::EmbedStrategy;

pub fn prepare() -> ConcealApi {
    ConcealApi::default()
}

/// everything [`reveal`](crate::api::reveal) needs to invert a conceal
/// run, the scheme itself carries no length or size header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcealReceipt {
    pub bit_count: usize,
    pub plane_size: (u32, u32),
    pub strategy: EmbedStrategy,
}

#[derive(Default, Debug)]
pub struct ConcealApi {
    qr_text: Option<String>,
    qr_size: Option<(u32, u32)>,
    bit_plane: Option<PathBuf>,
    carrier: Option<PathBuf>,
    strategy: Option<EmbedStrategy>,
    output: Option<PathBuf>,
}

impl ConcealApi {
    /// generate the payload plane as a QR code of this text
    pub fn with_qr_text(mut self, text: &str) -> Self {
        self.qr_text = Some(text.to_string());
        self
    }

    pub fn with_qr_size(mut self, size: (u32, u32)) -> Self {
        self.qr_size = Some(size);
        self
    }

    /// use an existing monochrome image file as the payload plane
    pub fn with_bit_plane<A: AsRef<Path>>(mut self, plane: A) -> Self {
        self.bit_plane = Some(plane.as_ref().to_path_buf());
        self
    }

    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    /// defaults to [`EmbedStrategy::full_channel`]
    pub fn with_strategy(mut self, strategy: EmbedStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<ConcealReceipt> {
        let Some(carrier_path) = self.carrier else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let plane = match (self.qr_text, self.bit_plane) {
            (Some(text), _) => {
                let mut payload = QrPayload::new(text);
                if let Some(size) = self.qr_size {
                    payload = payload.with_size(size);
                }
                payload.render()?
            }
            (None, Some(plane_path)) => media::load_bit_plane(plane_path)?,
            (None, None) => return Err(StegoError::PayloadNotSet),
        };

        let (bits, plane_size) = BitPlaneCodec::encode(&plane);
        let strategy = self.strategy.unwrap_or_else(EmbedStrategy::full_channel);
        debug!(
            "concealing a {}x{} plane ({} bits) into {carrier_path:?}",
            plane_size.0,
            plane_size.1,
            bits.len()
        );

        let carrier = media::load_carrier(&carrier_path)?;
        let stego = Embedder::embed(&carrier, &bits, &strategy)?;
        media::save_carrier(&stego, &output)?;

        Ok(ConcealReceipt {
            bit_count: bits.len(),
            plane_size,
            strategy,
        })
    }
}
