//! ABI message digest
//!
//! Relayers sign the SHA3-256 digest of the raw ABI bytes (the hex message decoded,
//! 128 bytes for a four-word message). The same digest is the key under which
//! `post_proof` stores the signature.

use tiny_keccak::{Hasher, Sha3};

use crate::codec::CodecError;

/// Compute SHA3-256 of arbitrary data
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Lowercase hex SHA3-256 of a hex-encoded ABI message.
pub fn abi_hash(abi: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(abi).map_err(|_| CodecError::InvalidHex {
        value: abi.to_string(),
    })?;
    Ok(hex::encode(sha3_256(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_empty_input() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_abi_hash_of_deposit_message() {
        let abi = concat!(
            "000000000000000000000000F08eF1668524a98893D97F16Ad134dA8cccefb03",
            "0000000000000000000000000000000000000000000000000de0b6b3a7640000",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "000000000000000000000000EA674fdDe714fd979de3EdF0F56AA9716B898ec8",
        );
        assert_eq!(
            abi_hash(abi).unwrap(),
            "2467d967d604f32992a2ac4e1ae03b9a86a2ac5069d22e0743e45ee89147319f"
        );
        // hex case does not change the bytes
        assert_eq!(abi_hash(abi).unwrap(), abi_hash(&abi.to_lowercase()).unwrap());
    }

    #[test]
    fn test_abi_hash_rejects_non_hex() {
        assert_eq!(
            abi_hash("zz"),
            Err(CodecError::InvalidHex {
                value: "zz".to_string()
            })
        );
        assert!(abi_hash("abc").is_err());
    }
}
