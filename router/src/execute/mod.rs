//! Execute handlers for the CL8Y Clearing House.
//!
//! - `registry` - token registration and interface negotiation
//! - `transfer` - mint, burn and proof posting

mod registry;
mod transfer;

pub use registry::*;
pub use transfer::*;

use common::codec::eth_address_key;
use cosmwasm_std::{MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::{TokenEntry, CONFIG, SUPPORTED_TOKENS};

fn ensure_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn load_supported(
    storage: &dyn Storage,
    ethereum_contract: &str,
) -> Result<TokenEntry, ContractError> {
    SUPPORTED_TOKENS
        .may_load(storage, &eth_address_key(ethereum_contract))?
        .ok_or_else(|| ContractError::TokenNotSupported {
            ethereum_contract: ethereum_contract.to_string(),
        })
}
