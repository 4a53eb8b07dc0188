//! Typed values carried through pack and unpack.

use std::fmt;

/// A single value slot, matched against a data token when packing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Used for every integer width; narrower tokens truncate on pack and
    /// sign-extend on unpack.
    Int(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float32,
    Float64,
    String,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns the value as a bool, if it is a `Bool` variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an `Int` variant.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float32(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string reference, if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

// -- Convenience conversions --
//
// No `From<i32>`: integer slots only take `i64`.

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float32(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float64(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(7i64).kind(), ValueKind::Int);
        assert_eq!(Value::from(1.5f32).kind(), ValueKind::Float32);
        assert_eq!(Value::from(1.5f64).kind(), ValueKind::Float64);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
    }

    #[test]
    fn accessors_reject_other_variants() {
        let v = Value::Float32(2.5);
        assert_eq!(v.as_f32(), Some(2.5));
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_int(), None);
        assert_eq!(Value::from("DUMP").as_str(), Some("DUMP"));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(-5).to_string(), "-5");
        assert_eq!(Value::from("ab").to_string(), "\"ab\"");
        assert_eq!(ValueKind::Float64.to_string(), "float64");
    }
}
