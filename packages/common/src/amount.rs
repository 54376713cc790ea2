//! Exact decimal amounts
//!
//! Balances and transferred values are human-scale decimals (e.g. `10.005` tokens),
//! not integer base units. A token registered with 18 decimals can receive a mint of
//! `0x10` base units, which is `0.000000000000000016` tokens, and a burn may carry more
//! fractional digits than the foreign token supports. `Amount` keeps all of them.
//!
//! On the wire an `Amount` is a JSON string, like `Uint128`.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Largest decimal exponent (in either direction) accepted when parsing an amount.
pub const MAX_AMOUNT_EXPONENT: i64 = 1024;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(BigDecimal);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAmountError {
    pub input: String,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount: {:?}", self.input)
    }
}

impl std::error::Error for ParseAmountError {}

impl Amount {
    pub fn zero() -> Self {
        Amount(BigDecimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// `value / 10^decimals`, exact. Negative `decimals` scale up.
    pub fn from_scaled_uint(value: BigUint, decimals: i32) -> Self {
        Amount(BigDecimal::new(BigInt::from(value), i64::from(decimals)))
    }

    /// Digits and decimal exponent such that `self == digits * 10^-exponent`.
    pub fn as_digits_and_exponent(&self) -> (BigInt, i64) {
        self.0.as_bigint_and_exponent()
    }

    /// Subtraction that refuses to go below zero.
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = &self.0 - &other.0;
        if result.is_negative() {
            None
        } else {
            Some(Amount(result))
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(BigDecimal::from(value))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Amount> for Amount {
    type Output = Amount;

    fn add(self, rhs: &'a Amount) -> Amount {
        Amount(self.0 + &rhs.0)
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAmountError {
            input: s.to_string(),
        };

        if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '_') {
            return Err(err());
        }

        let value = BigDecimal::from_str(s).map_err(|_| err())?;
        let (_, exponent) = value.as_bigint_and_exponent();
        if exponent.abs() > MAX_AMOUNT_EXPONENT {
            return Err(err());
        }

        Ok(Amount(value))
    }
}

/// Plain decimal notation, trailing zeros removed. Never scientific notation.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (digits, exponent) = self.0.normalized().as_bigint_and_exponent();
        let mut s = digits.magnitude().to_str_radix(10);

        if exponent <= 0 {
            if !digits.is_zero() {
                s.push_str(&"0".repeat(exponent.unsigned_abs() as usize));
            }
        } else {
            let exponent = exponent as usize;
            if s.len() <= exponent {
                s = format!("0.{}{}", "0".repeat(exponent - s.len()), s);
            } else {
                s.insert(s.len() - exponent, '.');
            }
        }

        if digits.sign() == Sign::Minus {
            write!(f, "-{}", s)
        } else {
            f.write_str(&s)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> de::Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded decimal amount")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Amount::from_str(v).map_err(E::custom)
    }
}

impl JsonSchema for Amount {
    fn schema_name() -> String {
        "Amount".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}
