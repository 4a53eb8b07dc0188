//! Pack engine: values → bytes.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::PackError;
use crate::format::{Endianness, Token, marker};
use crate::types::{Value, ValueKind};

/// Packs `values` according to `tokens`, starting in little-endian mode.
///
/// Every data token consumes the next value by position and the value's
/// kind must match the token exactly. Values beyond the last data token are
/// ignored.
pub fn pack<S: AsRef<str>>(tokens: &[S], values: &[Value]) -> Result<Bytes, PackError> {
    let slots = tokens
        .iter()
        .filter(|t| !marker::is_order_marker(t.as_ref()))
        .count();
    ensure_values(slots, values.len())?;
    encode_tokens(
        tokens.iter().map(|t| Token::parse(t.as_ref())),
        values,
        Endianness::Little,
    )
}

pub(crate) fn ensure_values(slots: usize, values: usize) -> Result<(), PackError> {
    if slots > values {
        return Err(PackError::FormatTooLong {
            tokens: slots,
            values,
        });
    }
    Ok(())
}

/// Walks already-counted tokens, carrying the byte order from step to step.
pub(crate) fn encode_tokens<I>(
    tokens: I,
    values: &[Value],
    order: Endianness,
) -> Result<Bytes, PackError>
where
    I: IntoIterator<Item = Result<Token, PackError>>,
{
    let mut buf = BytesMut::new();
    let mut index = 0;

    let walked = tokens.into_iter().try_fold(order, |order, token| {
        let token = token?;
        if let Token::Order(next) = token {
            return Ok(next);
        }
        let value = values.get(index).ok_or(PackError::FormatTooLong {
            tokens: index + 1,
            values: values.len(),
        })?;
        encode_slot(&mut buf, index, token, value, order)?;
        index += 1;
        Ok(order)
    });

    match walked {
        Ok(_) => {
            tracing::trace!(values = index, bytes = buf.len(), "packed");
            Ok(buf.freeze())
        }
        Err(e) => {
            tracing::debug!(error = %e, "pack failed");
            Err(e)
        }
    }
}

/// Encodes a single data token. `token` is never an `Order` marker here.
fn encode_slot(
    buf: &mut BytesMut,
    index: usize,
    token: Token,
    value: &Value,
    order: Endianness,
) -> Result<(), PackError> {
    match token {
        Token::Order(_) => {}
        Token::Bool => {
            let b = require(value, index, token, ValueKind::Bool, Value::as_bool)?;
            encode_int(buf, i64::from(b), 1, order);
        }
        Token::Int16 | Token::Int32 | Token::Int64 => {
            let i = require(value, index, token, ValueKind::Int, Value::as_int)?;
            encode_int(buf, i, token.width(), order);
        }
        Token::Float32 => {
            let f = require(value, index, token, ValueKind::Float32, Value::as_f32)?;
            encode_f32(buf, f, order);
        }
        Token::Float64 => {
            let f = require(value, index, token, ValueKind::Float64, Value::as_f64)?;
            encode_f64(buf, f, order);
        }
        Token::FixedString(len) => {
            let s = require(value, index, token, ValueKind::String, Value::as_str)?;
            if len > MAX_FIELD_LEN {
                return Err(PackError::FieldTooLarge(len));
            }
            encode_fixed_string(buf, s, len, order);
        }
    }
    Ok(())
}

/// Largest fixed-string field a buffer can hold.
const MAX_FIELD_LEN: usize = isize::MAX as usize;

/// Writes the low `width` bytes of `value` (two's complement).
pub fn encode_int(buf: &mut BytesMut, value: i64, width: usize, order: Endianness) {
    match (width, order) {
        (1, _) => buf.put_i8(value as i8),
        (2, Endianness::Little) => buf.put_i16_le(value as i16),
        (2, Endianness::Big) => buf.put_i16(value as i16),
        (4, Endianness::Little) => buf.put_i32_le(value as i32),
        (4, Endianness::Big) => buf.put_i32(value as i32),
        (_, Endianness::Little) => buf.put_i64_le(value),
        (_, Endianness::Big) => buf.put_i64(value),
    }
}

pub fn encode_f32(buf: &mut BytesMut, value: f32, order: Endianness) {
    match order {
        Endianness::Little => buf.put_f32_le(value),
        Endianness::Big => buf.put_f32(value),
    }
}

pub fn encode_f64(buf: &mut BytesMut, value: f64, order: Endianness) {
    match order {
        Endianness::Little => buf.put_f64_le(value),
        Endianness::Big => buf.put_f64(value),
    }
}

/// Writes exactly `len` bytes: `value` truncated or zero-padded.
///
/// Little-endian is `<bytes><zeros>`, cut at exactly `len` bytes. Big-endian
/// is `<zeros><text reversed by character>`, and the byte order of each
/// character is left alone. A character that would straddle the cut under
/// big-endian is dropped and its bytes become padding.
pub fn encode_fixed_string(buf: &mut BytesMut, value: &str, len: usize, order: Endianness) {
    match order {
        Endianness::Little => {
            let bytes = value.as_bytes();
            let kept = &bytes[..bytes.len().min(len)];
            buf.put_slice(kept);
            buf.put_bytes(0, len - kept.len());
        }
        Endianness::Big => {
            let kept = &value[..char_boundary_at_or_below(value, len)];
            buf.put_bytes(0, len - kept.len());
            for c in kept.chars().rev() {
                let mut utf8 = [0; 4];
                buf.put_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
}

fn char_boundary_at_or_below(value: &str, len: usize) -> usize {
    let mut end = value.len().min(len);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    end
}

// -- Value extraction helpers --

fn require<'a, T>(
    value: &'a Value,
    index: usize,
    token: Token,
    expected: ValueKind,
    get: fn(&'a Value) -> Option<T>,
) -> Result<T, PackError> {
    get(value).ok_or_else(|| PackError::TypeMismatch {
        index,
        token: token.to_string(),
        expected,
        found: value.kind(),
    })
}
