//! Format tokens: one byte-order switch or one fixed-width data slot.

use std::fmt;
use std::str::FromStr;

use super::marker;
use crate::error::PackError;
use crate::types::ValueKind;

/// Byte order applied to multi-byte numbers (and, for fixed strings, to
/// character order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// A classified format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Zero-width; switches the byte order for the tokens that follow.
    Order(Endianness),
    Bool,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// Exactly `n` bytes on the wire.
    FixedString(usize),
}

impl Token {
    /// Classifies a token spelling.
    ///
    /// Any spelling containing `s` is a fixed string: trailing `s` characters
    /// are stripped and the rest is read as the length. A prefix that is not a
    /// number yields a zero-length string rather than an error.
    pub fn parse(token: &str) -> Result<Self, PackError> {
        let parsed = match token {
            marker::LITTLE_ENDIAN => Self::Order(Endianness::Little),
            marker::BIG_ENDIAN | marker::NETWORK => Self::Order(Endianness::Big),
            marker::BOOL => Self::Bool,
            marker::FLOAT_32 => Self::Float32,
            marker::FLOAT_64 => Self::Float64,
            t if marker::INT_16.contains(&t) => Self::Int16,
            t if marker::INT_32.contains(&t) => Self::Int32,
            t if marker::INT_64.contains(&t) => Self::Int64,
            t if t.contains(marker::STRING_SUFFIX) => {
                let len = t
                    .trim_end_matches(marker::STRING_SUFFIX)
                    .parse::<usize>()
                    .unwrap_or(0);
                Self::FixedString(len)
            }
            other => return Err(PackError::unknown_token(other)),
        };
        Ok(parsed)
    }

    /// Number of bytes this token occupies on the wire.
    pub fn width(&self) -> usize {
        match self {
            Self::Order(_) => 0,
            Self::Bool => 1,
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
            Self::FixedString(n) => *n,
        }
    }

    /// The value kind a data token consumes; `None` for byte-order switches.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Order(_) => None,
            Self::Bool => Some(ValueKind::Bool),
            Self::Int16 | Self::Int32 | Self::Int64 => Some(ValueKind::Int),
            Self::Float32 => Some(ValueKind::Float32),
            Self::Float64 => Some(ValueKind::Float64),
            Self::FixedString(_) => Some(ValueKind::String),
        }
    }

    pub fn is_order(&self) -> bool {
        matches!(self, Self::Order(_))
    }
}

impl FromStr for Token {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(Endianness::Little) => f.write_str(marker::LITTLE_ENDIAN),
            Self::Order(Endianness::Big) => f.write_str(marker::BIG_ENDIAN),
            Self::Bool => f.write_str(marker::BOOL),
            Self::Int16 => f.write_str(marker::INT_16[0]),
            Self::Int32 => f.write_str(marker::INT_32[0]),
            Self::Int64 => f.write_str(marker::INT_64[0]),
            Self::Float32 => f.write_str(marker::FLOAT_32),
            Self::Float64 => f.write_str(marker::FLOAT_64),
            Self::FixedString(n) => write!(f, "{n}{}", marker::STRING_SUFFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_order_markers() {
        assert_eq!(Token::parse("<").unwrap(), Token::Order(Endianness::Little));
        assert_eq!(Token::parse(">").unwrap(), Token::Order(Endianness::Big));
        assert_eq!(Token::parse("!").unwrap(), Token::Order(Endianness::Big));
    }

    #[test]
    fn parse_numeric_slots() {
        assert_eq!(Token::parse("?").unwrap(), Token::Bool);
        for t in ["h", "H"] {
            assert_eq!(Token::parse(t).unwrap(), Token::Int16, "{t}");
        }
        for t in ["i", "I", "l", "L"] {
            assert_eq!(Token::parse(t).unwrap(), Token::Int32, "{t}");
        }
        for t in ["q", "Q"] {
            assert_eq!(Token::parse(t).unwrap(), Token::Int64, "{t}");
        }
        assert_eq!(Token::parse("f").unwrap(), Token::Float32);
        assert_eq!(Token::parse("d").unwrap(), Token::Float64);
    }

    #[test]
    fn parse_fixed_strings() {
        assert_eq!(Token::parse("1s").unwrap(), Token::FixedString(1));
        assert_eq!(Token::parse("10s").unwrap(), Token::FixedString(10));
        assert_eq!(Token::parse("4ss").unwrap(), Token::FixedString(4));
    }

    #[test]
    fn malformed_string_length_is_zero() {
        assert_eq!(Token::parse("s").unwrap(), Token::FixedString(0));
        assert_eq!(Token::parse("xs").unwrap(), Token::FixedString(0));
        assert_eq!(Token::parse("s4").unwrap(), Token::FixedString(0));
        assert_eq!(Token::parse("-3s").unwrap(), Token::FixedString(0));
        assert_eq!(
            Token::parse("99999999999999999999s").unwrap(),
            Token::FixedString(0)
        );
    }

    #[test]
    fn parse_unknown() {
        for t in ["a", "b", "", "@", "=", "hh", "x"] {
            assert_eq!(
                Token::parse(t),
                Err(PackError::UnknownToken(t.to_string())),
                "{t}"
            );
        }
    }

    #[test]
    fn widths_and_kinds() {
        assert_eq!(Token::Order(Endianness::Big).width(), 0);
        assert_eq!(Token::Order(Endianness::Big).kind(), None);
        assert_eq!(Token::Bool.width(), 1);
        assert_eq!(Token::Int16.width(), 2);
        assert_eq!(Token::Int32.width(), 4);
        assert_eq!(Token::Int64.width(), 8);
        assert_eq!(Token::Float32.width(), 4);
        assert_eq!(Token::Float64.width(), 8);
        assert_eq!(Token::FixedString(5).width(), 5);
        assert_eq!(Token::Int64.kind(), Some(ValueKind::Int));
        assert_eq!(Token::FixedString(0).kind(), Some(ValueKind::String));
    }

    #[test]
    fn display_is_parseable() {
        let tokens = [
            Token::Order(Endianness::Little),
            Token::Order(Endianness::Big),
            Token::Bool,
            Token::Int16,
            Token::Int32,
            Token::Int64,
            Token::Float32,
            Token::Float64,
            Token::FixedString(12),
        ];
        for token in tokens {
            assert_eq!(token.to_string().parse::<Token>().unwrap(), token);
        }
    }
}
