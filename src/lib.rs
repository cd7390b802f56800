//! # qrstego
//!
//! Hides a monochrome bit-plane, typically a QR code, inside the least
//! significant bits of an RGB carrier image and recovers it later.
//!
//! The pieces compose as a pipeline:
//! - [`BitPlaneCodec`] flattens a monochrome image to a linear [`BitStream`]
//! - [`EmbedStrategy`] decides which channel LSBs the bits land in and
//!   gates the carrier's capacity
//! - [`Embedder`] writes the stream into a copy of the carrier,
//!   [`Extractor`] reads it back, including the majority vote of the
//!   block redundant strategy
//! - [`metrics`] quantifies how much the embedding distorted the cover
//!
//! Strategy and bit count travel out-of-band: the scheme deliberately
//! embeds no length header, the caller keeps (or persists) a
//! [`ConcealReceipt`](api::conceal::ConcealReceipt).
//!
//! # Usage Examples
//!
//! ## Hide a QR code inside a carrier and recover it
//!
//! ```rust
//! use image::RgbImage;
//! use qrstego::payload::QrPayload;
//! use qrstego::{metrics, BitPlaneCodec, EmbedStrategy, Embedder, Extractor};
//!
//! let carrier = RgbImage::from_fn(100, 100, |x, y| {
//!     image::Rgb([(x * 2) as u8, (y * 2) as u8, (x + y) as u8])
//! });
//!
//! let plane = QrPayload::new("hello world")
//!     .with_size((50, 50))
//!     .render()
//!     .expect("Cannot render the QR payload");
//! let (bits, plane_size) = BitPlaneCodec::encode(&plane);
//!
//! let strategy = EmbedStrategy::blue_channel();
//! let stego = Embedder::embed(&carrier, &bits, &strategy)
//!     .expect("Payload does not fit the carrier");
//!
//! let recovered_bits = Extractor::extract(&stego, &strategy, bits.len())
//!     .expect("Cannot extract the payload");
//! let recovered = BitPlaneCodec::decode(&recovered_bits, plane_size)
//!     .expect("Cannot rebuild the plane");
//! assert_eq!(recovered, plane);
//!
//! let distortion = metrics::mse(&carrier, &stego, metrics::ChannelScope::Blue)
//!     .expect("Images have equal dimensions");
//! assert!(distortion <= 1.0, "LSB embedding alters blue by at most 1");
//! ```
//!
//! ## File-to-file flows
//!
//! The [`api`] module wires the same pipeline to image files, see
//! [`api::conceal::prepare`] and [`api::reveal::prepare`].

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_plane;
pub mod bit_stream;
pub mod embedder;
pub mod error;
pub mod extractor;
pub mod media;
pub mod metrics;
pub mod payload;
pub mod result;
pub mod strategy;

pub use bit_plane::BitPlaneCodec;
pub use bit_stream::BitStream;
pub use embedder::{Embedder, HideBits};
pub use error::StegoError;
pub use extractor::{Extractor, UnveilBits};
pub use metrics::ChannelScope;
pub use result::Result;
pub use strategy::{BlockRedundant, BlueChannel, Capacity, EmbedStrategy, FullChannel};

#[cfg(test)]
pub(crate) mod test_utils {
    use image::{Rgb, RgbImage};

    /// deterministic carrier with varied channel values, LSBs included
    pub fn gradient_carrier(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let i = (x * 7 + y * 13) as u8;
            Rgb([i, i.wrapping_add(40), i.wrapping_add(90)])
        })
    }
}
