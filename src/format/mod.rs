//! Format token grammar, size calculation and parsed formats.
//!
//! A format is an ordered list of tokens. Each token is either a byte-order
//! switch (`<`, `>`, `!`) or one fixed-width slot:
//!
//! | Token | Slot | Bytes |
//! |---|---|---|
//! | `?` | bool | 1 |
//! | `h`, `H` | integer | 2 |
//! | `i`, `I`, `l`, `L` | integer | 4 |
//! | `q`, `Q` | integer | 8 |
//! | `f` | float32 | 4 |
//! | `d` | float64 | 8 |
//! | `Ns` | string | N |

pub mod marker;
mod token;

pub use token::{Endianness, Token};

use bytes::Bytes;

use crate::codec::{decode, encode};
use crate::error::PackError;
use crate::types::Value;

/// Returns the number of bytes described by `tokens`.
///
/// Byte-order switches are zero-width. Fails on the first unknown token.
/// Sizes past `usize::MAX` saturate, so no buffer can satisfy them.
pub fn calc_size<S: AsRef<str>>(tokens: &[S]) -> Result<usize, PackError> {
    tokens.iter().try_fold(0usize, |size, t| {
        Token::parse(t.as_ref()).map(|token| size.saturating_add(token.width()))
    })
}

/// A parsed token sequence with a starting byte order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    tokens: Vec<Token>,
    byte_order: Endianness,
}

impl Format {
    /// Parses every token up front, failing on the first unknown one.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PackError> {
        let tokens = tokens
            .iter()
            .map(|t| Token::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            byte_order: Endianness::default(),
        }
    }

    /// Sets the byte order in effect before the first marker.
    pub fn with_byte_order(mut self, order: Endianness) -> Self {
        self.byte_order = order;
        self
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Total wire size in bytes.
    pub fn size(&self) -> usize {
        self.tokens
            .iter()
            .fold(0usize, |size, token| size.saturating_add(token.width()))
    }

    /// Number of values consumed by [`Format::pack`].
    pub fn value_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_order()).count()
    }

    pub fn pack(&self, values: &[Value]) -> Result<Bytes, PackError> {
        encode::ensure_values(self.value_count(), values.len())?;
        encode::encode_tokens(self.tokens.iter().copied().map(Ok), values, self.byte_order)
    }

    pub fn unpack(&self, buffer: &[u8]) -> Result<Vec<Value>, PackError> {
        decode::ensure_buffer(self.size(), buffer.len())?;
        decode::decode_tokens(self.tokens.iter().copied().map(Ok), buffer, self.byte_order)
    }
}
