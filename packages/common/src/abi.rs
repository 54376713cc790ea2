//! Four-word ABI messages handed to the foreign chain
//!
//! ```text
//! | token (32) | amount (32) | nonce (32) | destination (32) |
//! ```
//!
//! The bridge emits this as a mint instruction (destination = depositor's foreign
//! address), the router as a burn instruction (token = foreign token contract,
//! destination = foreign recipient). Field order is part of the wire contract.

use cosmwasm_schema::cw_serde;

use crate::amount::Amount;
use crate::codec::{pack_amount, pack_eth_address, pack_nonce, CodecError};
use crate::hash::abi_hash;

#[derive(Debug, Clone)]
pub struct AbiMessage<'a> {
    /// Foreign token contract, `0x` + 40 hex
    pub token: &'a str,
    pub amount: &'a Amount,
    /// Decimals of the foreign token
    pub decimals: i32,
    /// Nonce value after increment
    pub nonce: u64,
    /// Foreign recipient, `0x` + 40 hex
    pub destination: &'a str,
}

impl AbiMessage<'_> {
    /// Hex-encode the message, 256 characters.
    pub fn encode(&self) -> Result<String, CodecError> {
        let mut abi = String::with_capacity(256);
        abi.push_str(&pack_eth_address(self.token)?);
        abi.push_str(&pack_amount(self.amount, self.decimals)?);
        abi.push_str(&pack_nonce(self.nonce));
        abi.push_str(&pack_eth_address(self.destination)?);
        Ok(abi)
    }

    /// Encode and hash in one step.
    pub fn to_response(&self) -> Result<AbiMessageResponse, CodecError> {
        let abi = self.encode()?;
        let abi_hash = abi_hash(&abi)?;
        Ok(AbiMessageResponse {
            abi,
            abi_hash,
            nonce: self.nonce,
        })
    }
}

/// Response data of every deposit and burn.
#[cw_serde]
pub struct AbiMessageResponse {
    pub abi: String,
    /// Lowercase hex SHA3-256 of the ABI bytes
    pub abi_hash: String,
    pub nonce: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const TOKEN: &str = "0xF08eF1668524a98893D97F16Ad134dA8cccefb03";
    const DESTINATION: &str = "0xEA674fdDe714fd979de3EdF0F56AA9716B898ec8";

    fn message(amount: &Amount, nonce: u64) -> AbiMessage<'_> {
        AbiMessage {
            token: TOKEN,
            amount,
            decimals: 18,
            nonce,
            destination: DESTINATION,
        }
    }

    #[test]
    fn test_encode_layout() {
        let amount = Amount::from(1u64);
        let abi = message(&amount, 1).encode().unwrap();

        assert_eq!(abi.len(), 256);
        assert_eq!(
            abi,
            concat!(
                "000000000000000000000000F08eF1668524a98893D97F16Ad134dA8cccefb03",
                "0000000000000000000000000000000000000000000000000de0b6b3a7640000",
                "0000000000000000000000000000000000000000000000000000000000000001",
                "000000000000000000000000EA674fdDe714fd979de3EdF0F56AA9716B898ec8",
            )
        );
    }

    #[test]
    fn test_response_hashes() {
        let cases = [
            ("1", 1, "2467d967d604f32992a2ac4e1ae03b9a86a2ac5069d22e0743e45ee89147319f"),
            ("10", 2, "5d3ae41b5df3d3932bf63f401477a244116155ee44308a80228ccb947803fb69"),
            ("0.5", 3, "f8fd422a9fb49671816e41452583dd90c8a2dd53ee251f64942e770cdaf684d2"),
            ("0.5", 4, "80960e2f94e9a066c101e948494f081ed33d93e899a7fb608925c4f49357bfb5"),
        ];

        for (value, nonce, expected) in cases {
            let amount = Amount::from_str(value).unwrap();
            let response = message(&amount, nonce).to_response().unwrap();
            assert_eq!(response.abi_hash, expected);
            assert_eq!(response.nonce, nonce);
        }
    }

    #[test]
    fn test_encode_rejects_bad_addresses() {
        let amount = Amount::from(1u64);
        let mut msg = message(&amount, 1);
        msg.destination = "EA674fdDe714fd979de3EdF0F56AA9716B898ec8";
        assert!(matches!(msg.encode(), Err(CodecError::InvalidPrefix { .. })));

        let mut msg = message(&amount, 1);
        msg.token = "0x1234";
        assert_eq!(msg.encode(), Err(CodecError::InvalidAddressLength { got: 4 }));
    }
}
