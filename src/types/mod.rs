//! Value types exchanged with the pack and unpack engines.

mod value;

pub use value::{Value, ValueKind};
