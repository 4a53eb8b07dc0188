//! binpack: pack and unpack typed values using compact format tokens.
//!
//! A format is a sequence of tokens such as `["!", "I", "H", "4s"]` that
//! describes a fixed byte layout, much like C struct packing. The layout is
//! little-endian until a `>`/`!` token switches it, and `<` switches back.
//!
//! ```
//! use binpack::{Value, pack, unpack};
//!
//! let tokens = ["H", "H", "H"];
//! let values = [Value::Int(0), Value::Int(5), Value::Int(2300)];
//! let bytes = pack(&tokens, &values)?;
//! assert_eq!(&bytes[..], &[0, 0, 5, 0, 252, 8]);
//! assert_eq!(unpack(&tokens, &bytes)?, values);
//! # Ok::<(), binpack::PackError>(())
//! ```
//!
//! # Architecture
//!
//! - **`format`**: Token grammar, `calc_size`, and the parsed `Format`
//! - **`codec`**: Pack and unpack engines
//! - **`types`**: `Value` and `ValueKind`
//! - **`header`**: Reusable header layouts with a builder

pub mod codec;
pub mod error;
pub mod format;
pub mod header;
pub mod types;

pub use codec::{pack, unpack};
pub use error::PackError;
pub use format::{Endianness, Format, Token, calc_size};
pub use header::{Header, HeaderBuilder};
pub use types::{Value, ValueKind};
