//! High level, builder style entry points for the two end-to-end flows:
//! concealing a payload plane in a carrier file and revealing it again.
//!
//! Everything the flows need is an explicit parameter, there are no
//! implicit paths or process-global defaults.

pub mod conceal;
pub mod reveal;
