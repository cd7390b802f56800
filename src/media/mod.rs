pub(crate) mod iterators;
pub mod types;

pub use types::{load_bit_plane, load_carrier, save_bit_plane, save_carrier};
