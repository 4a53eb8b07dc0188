//! Pack and unpack engines.
//!
//! Both engines walk the token sequence once, carrying the current byte order
//! as a fold accumulator. The order starts little-endian unless a [`Format`]
//! is configured otherwise, and only byte-order markers change it.
//!
//! [`Format`]: crate::format::Format

pub mod decode;
pub mod encode;

pub use decode::unpack;
pub use encode::pack;
