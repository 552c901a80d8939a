//! RP1210 Reference Tables
//!
//! Command codes for `RP1210_SendCommand` and human-readable names for the
//! error codes returned by RP1210 adapter drivers. Everything here is static
//! data; no adapter I/O happens in this crate.

#![warn(missing_docs)]

pub mod command;
mod error;
pub mod error_code;

pub use command::*;
pub use error::Rp1210Error;
pub use error_code::{describe, ErrorCategory, ErrorCode, ErrorEntry, UNKNOWN_ERROR};

/// Parse a numeric code given as decimal (`"128"`) or hex (`"0x80"`).
pub fn parse_code(text: &str) -> Result<u16, Rp1210Error> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse::<u16>(),
    };

    parsed.map_err(|_| Rp1210Error::InvalidCode(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_and_hex() {
        assert_eq!(parse_code("128").unwrap(), 128);
        assert_eq!(parse_code("0x8000").unwrap(), 0x8000);
        assert_eq!(parse_code("0X001b").unwrap(), 0x001B);
        assert_eq!(parse_code(" 3008 ").unwrap(), 3008);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_code("abc"), Err(Rp1210Error::InvalidCode(_))));
        assert!(matches!(parse_code("70000"), Err(Rp1210Error::InvalidCode(_))));
        assert!(matches!(parse_code("0x"), Err(Rp1210Error::InvalidCode(_))));
        assert!(matches!(parse_code("-1"), Err(Rp1210Error::InvalidCode(_))));
    }
}
