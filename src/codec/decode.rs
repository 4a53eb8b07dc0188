//! Unpack engine: bytes → values.

use bytes::Buf;

use crate::error::PackError;
use crate::format::{Endianness, Token, calc_size};
use crate::types::Value;

/// Unpacks `buffer` according to `tokens`, starting in little-endian mode.
///
/// The buffer must hold at least [`calc_size`] bytes; anything past that is
/// ignored. Returns one value per data token, in token order.
pub fn unpack<S: AsRef<str>>(tokens: &[S], buffer: &[u8]) -> Result<Vec<Value>, PackError> {
    let expected = calc_size(tokens)?;
    ensure_buffer(expected, buffer.len())?;
    decode_tokens(
        tokens.iter().map(|t| Token::parse(t.as_ref())),
        buffer,
        Endianness::Little,
    )
}

pub(crate) fn ensure_buffer(expected: usize, actual: usize) -> Result<(), PackError> {
    if expected > actual {
        return Err(PackError::BufferTooShort { expected, actual });
    }
    Ok(())
}

/// Walks already-sized tokens, carrying the byte order from step to step.
pub(crate) fn decode_tokens<I>(
    tokens: I,
    mut buf: &[u8],
    order: Endianness,
) -> Result<Vec<Value>, PackError>
where
    I: IntoIterator<Item = Result<Token, PackError>>,
{
    let total = buf.len();
    let mut values = Vec::new();

    let walked = tokens.into_iter().try_fold(order, |order, token| {
        let token = token?;
        if let Token::Order(next) = token {
            return Ok(next);
        }
        values.extend(decode_slot(&mut buf, token, order)?);
        Ok(order)
    });

    match walked {
        Ok(_) => {
            tracing::trace!(
                values = values.len(),
                bytes = total - buf.len(),
                "unpacked"
            );
            Ok(values)
        }
        Err(e) => {
            tracing::debug!(error = %e, "unpack failed");
            Err(e)
        }
    }
}

/// Decodes one data token; byte-order switches yield nothing.
fn decode_slot(
    buf: &mut &[u8],
    token: Token,
    order: Endianness,
) -> Result<Option<Value>, PackError> {
    ensure_remaining(buf, token.width())?;
    let value = match token {
        Token::Order(_) => return Ok(None),
        Token::Bool => Value::Bool(decode_int(buf, 1, order) > 0),
        Token::Int16 | Token::Int32 | Token::Int64 => {
            Value::Int(decode_int(buf, token.width(), order))
        }
        Token::Float32 => Value::Float32(match order {
            Endianness::Little => buf.get_f32_le(),
            Endianness::Big => buf.get_f32(),
        }),
        Token::Float64 => Value::Float64(match order {
            Endianness::Little => buf.get_f64_le(),
            Endianness::Big => buf.get_f64(),
        }),
        Token::FixedString(len) => Value::String(decode_fixed_string(buf, len, order)),
    };
    Ok(Some(value))
}

/// Reads `width` bytes and sign-extends them to an `i64`.
pub fn decode_int(buf: &mut impl Buf, width: usize, order: Endianness) -> i64 {
    match (width, order) {
        (1, _) => i64::from(buf.get_i8()),
        (2, Endianness::Little) => i64::from(buf.get_i16_le()),
        (2, Endianness::Big) => i64::from(buf.get_i16()),
        (4, Endianness::Little) => i64::from(buf.get_i32_le()),
        (4, Endianness::Big) => i64::from(buf.get_i32()),
        (_, Endianness::Little) => buf.get_i64_le(),
        (_, Endianness::Big) => buf.get_i64(),
    }
}

/// Reads `len` bytes as text with trailing NULs removed. Under big-endian
/// the characters are reversed before trimming, undoing the pack layout.
pub fn decode_fixed_string(buf: &mut &[u8], len: usize, order: Endianness) -> String {
    let slice: &[u8] = *buf;
    let (raw, rest) = slice.split_at(len);
    *buf = rest;

    let text = String::from_utf8_lossy(raw);
    match order {
        Endianness::Little => text.trim_end_matches('\0').to_string(),
        Endianness::Big => {
            let reversed: String = text.chars().rev().collect();
            reversed.trim_end_matches('\0').to_string()
        }
    }
}

fn ensure_remaining(buf: &[u8], n: usize) -> Result<(), PackError> {
    if buf.len() < n {
        return Err(PackError::BufferTooShort {
            expected: n,
            actual: buf.len(),
        });
    }
    Ok(())
}
