//! Format token spellings.

// Byte order
pub const LITTLE_ENDIAN: &str = "<";
pub const BIG_ENDIAN: &str = ">";
pub const NETWORK: &str = "!";

// Accepted as zero-width by the pack count check only; parsing still rejects them.
pub const NATIVE: &str = "@";
pub const STANDARD: &str = "=";

// Boolean (1 byte)
pub const BOOL: &str = "?";

// Integers. Lower/upper case pairs are the same slot.
pub const INT_16: [&str; 2] = ["h", "H"];
pub const INT_32: [&str; 4] = ["i", "I", "l", "L"];
pub const INT_64: [&str; 2] = ["q", "Q"];

// Floats (IEEE 754)
pub const FLOAT_32: &str = "f";
pub const FLOAT_64: &str = "d";

// Fixed string: "<N>s", N bytes.
pub const STRING_SUFFIX: char = 's';

/// Returns true for spellings that take no value slot when packing.
pub fn is_order_marker(token: &str) -> bool {
    matches!(
        token,
        LITTLE_ENDIAN | BIG_ENDIAN | NETWORK | NATIVE | STANDARD
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_markers() {
        for t in ["<", ">", "!", "@", "="] {
            assert!(is_order_marker(t), "{t}");
        }
        for t in ["?", "H", "4s", "a", ""] {
            assert!(!is_order_marker(t), "{t}");
        }
    }
}
