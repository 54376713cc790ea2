//! Fixed-width hex codec for foreign-chain ABI words
//!
//! Every packed value is one 32-byte EVM word rendered as 64 hex characters,
//! big-endian, without a `0x` prefix:
//!
//! ```text
//! pack_eth_address("0x54dbb737eac5007103e729e9ab7ce64a6850a310")
//!   = 000000000000000000000000 54dbb737eac5007103e729e9ab7ce64a6850a310
//!     |---- 24 zero chars ----| |------------ 40 address chars ------|
//! ```
//!
//! Values wider than a word are NOT rejected: `left_pad` keeps the leftmost 64
//! characters.

use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

use crate::amount::Amount;

/// Width of one ABI word in hex characters (32 bytes).
pub const HEX_WORD_LEN: usize = 64;

/// Hex characters in an Ethereum address (20 bytes).
pub const ETH_ADDRESS_HEX_LEN: usize = 40;

/// Largest decimal shift `pack_amount` will perform.
pub const MAX_DECIMAL_SHIFT: i64 = 1024;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Invalid Ethereum prefix: {address:?} must start with \"0x\"")]
    InvalidPrefix { address: String },

    #[error("Invalid address length: expected 40 hex characters, got {got}")]
    InvalidAddressLength { got: usize },

    #[error("Invalid hex string: {value:?}")]
    InvalidHex { value: String },

    #[error("Invalid integer: {value:?}")]
    InvalidInteger { value: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Decimal shift out of range: {shift}")]
    ShiftOutOfRange { shift: i64 },
}

/// Left-pad `s` with `'0'` to exactly 64 characters. Longer input is cut to its
/// first 64 characters. No hex validation happens here.
pub fn left_pad(s: &str) -> String {
    format!("{:0>width$}", s, width = HEX_WORD_LEN)
        .chars()
        .take(HEX_WORD_LEN)
        .collect()
}

/// Pack an unsigned integer as one ABI word.
pub fn pack_uint(value: &BigUint) -> String {
    left_pad(&value.to_str_radix(16))
}

pub fn pack_nonce(nonce: u64) -> String {
    pack_uint(&BigUint::from(nonce))
}

/// Pack a base-10 integer string. Signs, decimal points, `0x` prefixes and any
/// other non-digit content are rejected.
pub fn pack_int(i: &str) -> Result<String, CodecError> {
    if i.is_empty() || !i.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidInteger {
            value: i.to_string(),
        });
    }

    let value = BigUint::parse_bytes(i.as_bytes(), 10).ok_or_else(|| CodecError::InvalidInteger {
        value: i.to_string(),
    })?;

    Ok(pack_uint(&value))
}

/// `floor(amount * 10^decimals)` as one ABI word. Fractional digits beyond
/// `decimals` are truncated, never rounded.
pub fn pack_amount(amount: &Amount, decimals: i32) -> Result<String, CodecError> {
    if amount.is_negative() {
        return Err(CodecError::InvalidAmount {
            reason: format!("{} is negative", amount),
        });
    }

    let value = scale_to_uint(amount, decimals)?;
    Ok(pack_uint(&value))
}

fn scale_to_uint(amount: &Amount, decimals: i32) -> Result<BigUint, CodecError> {
    let (digits, exponent) = amount.as_digits_and_exponent();
    // amount * 10^decimals == digits * 10^shift
    let shift = i64::from(decimals) - exponent;

    let scaled: BigInt = if shift >= 0 {
        if shift > MAX_DECIMAL_SHIFT {
            return Err(CodecError::ShiftOutOfRange { shift });
        }
        digits * BigInt::from(10u32).pow(shift as u32)
    } else {
        let drop = shift.unsigned_abs();
        // Every digit falls below the decimal point.
        if drop > digits.magnitude().to_str_radix(10).len() as u64 {
            BigInt::from(0u32)
        } else {
            digits / BigInt::from(10u32).pow(drop as u32)
        }
    };

    match scaled.into_parts() {
        (Sign::Minus, _) => Err(CodecError::InvalidAmount {
            reason: format!("{} is negative", amount),
        }),
        (_, magnitude) => Ok(magnitude),
    }
}

/// Validate an Ethereum address and pack its 40 hex characters into one word.
///
/// Checks run in a fixed order and each has its own error: `0x` prefix (exact
/// case), then length, then hex digits. Letter case of the digits is preserved.
pub fn pack_eth_address(address: &str) -> Result<String, CodecError> {
    let hex_part = address
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::InvalidPrefix {
            address: address.to_string(),
        })?;

    let len = hex_part.chars().count();
    if len != ETH_ADDRESS_HEX_LEN {
        return Err(CodecError::InvalidAddressLength { got: len });
    }

    if !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex {
            value: address.to_string(),
        });
    }

    Ok(left_pad(hex_part))
}

/// Storage key for an Ethereum address. Hex digits compare without case, so
/// `0xAB..` and `0xab..` name the same account.
pub fn eth_address_key(address: &str) -> String {
    address.to_ascii_lowercase()
}

/// Parse a foreign uint256 given in hex, with or without `0x`. Bare digits are
/// hex too: `"10"` is sixteen.
pub fn parse_hex_uint(uint: &str) -> Result<BigUint, CodecError> {
    let digits = uint
        .strip_prefix("0x")
        .or_else(|| uint.strip_prefix("0X"))
        .unwrap_or(uint);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex {
            value: uint.to_string(),
        });
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| CodecError::InvalidHex {
        value: uint.to_string(),
    })
}

/// Decode a foreign uint256 into a token amount: `uint / 10^decimals`, exact.
pub fn unpack_uint256(uint: &str, decimals: i32) -> Result<Amount, CodecError> {
    let value = parse_hex_uint(uint)?;
    Ok(Amount::from_scaled_uint(value, decimals))
}
