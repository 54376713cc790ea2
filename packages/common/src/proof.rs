//! Proof registry
//!
//! Owner-written store of relayer signatures keyed by the hash of the ABI message
//! they sign. Entries are overwritten on repost and never expire. Signatures are
//! stored as given; nothing here verifies them.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;

/// hashed_abi => signed_abi
pub const PROOFS: Map<&str, String> = Map::new("proofs");

#[cw_serde]
pub struct ProofResponse {
    pub hashed_abi: String,
    /// `None` when nothing was posted for this hash
    pub signed_abi: Option<String>,
}

pub fn save_proof(storage: &mut dyn Storage, hashed_abi: &str, signed_abi: &str) -> StdResult<()> {
    PROOFS.save(storage, hashed_abi, &signed_abi.to_string())
}

pub fn query_proof(storage: &dyn Storage, hashed_abi: String) -> StdResult<ProofResponse> {
    let signed_abi = PROOFS.may_load(storage, &hashed_abi)?;
    Ok(ProofResponse {
        hashed_abi,
        signed_abi,
    })
}
