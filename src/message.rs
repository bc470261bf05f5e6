//! The Message: a fixed, immutable byte payload.
//!
//! Layout:
//! ┌──────────────────────────────┬──────┐
//! │ "Hello, world!" (13 × ASCII) │ 0x0A │
//! └──────────────────────────────┴──────┘
//!
//! The length is derived from the literal, never stored by hand, so the
//! two values cannot disagree.

/// The full output payload: ASCII `Hello, world!` plus one line feed.
pub const MESSAGE: &[u8] = b"Hello, world!\n";

/// Byte count of [`MESSAGE`], computed from the literal at compile time.
pub const MESSAGE_LEN: usize = MESSAGE.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_derived_from_literal() {
        assert_eq!(MESSAGE_LEN, MESSAGE.len());
        assert_eq!(MESSAGE_LEN, 14);
    }

    #[test]
    fn test_exact_bytes() {
        let expected: [u8; 14] = [
            0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x2C, 0x20, 0x77, 0x6F, 0x72, 0x6C, 0x64, 0x21, 0x0A,
        ];
        assert_eq!(MESSAGE, expected);
    }

    #[test]
    fn test_ascii_with_single_trailing_newline() {
        assert!(MESSAGE.is_ascii());
        assert_eq!(MESSAGE[MESSAGE_LEN - 1], b'\n');
        assert!(!MESSAGE[..MESSAGE_LEN - 1].contains(&b'\n'));
    }
}
