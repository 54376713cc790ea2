//! Token registration.

use common::codec::{eth_address_key, pack_eth_address};
use common::token::{TokenCapability, TokenContract, TOKEN_INTERFACE};
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use super::ensure_owner;
use crate::error::ContractError;
use crate::state::{TokenEntry, SUPPORTED_TOKENS};

/// Register `ethereum_contract` against a ledger token.
///
/// The token must answer `token_interface {}` with [`TOKEN_INTERFACE`] and every
/// capability in [`TokenCapability::REQUIRED`]. `decimals` is stored unchecked.
/// Entries are keyed by the lowercased contract address.
pub fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    ethereum_contract: String,
    lamden_contract: String,
    decimals: i32,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    pack_eth_address(&ethereum_contract)?;

    let key = eth_address_key(&ethereum_contract);
    if SUPPORTED_TOKENS.has(deps.storage, &key) {
        return Err(ContractError::TokenAlreadyRegistered { ethereum_contract });
    }

    let local_token = deps.api.addr_validate(&lamden_contract)?;
    let interface = TokenContract(local_token.clone())
        .interface(&deps.querier)
        .map_err(|err| ContractError::InterfaceUnavailable {
            contract: lamden_contract.clone(),
            reason: err.to_string(),
        })?;

    if interface.interface != TOKEN_INTERFACE {
        return Err(ContractError::IncompatibleInterface {
            contract: lamden_contract,
            interface: interface.interface,
        });
    }

    let missing = interface.missing(&TokenCapability::REQUIRED);
    if !missing.is_empty() {
        return Err(ContractError::MissingCapabilities {
            contract: lamden_contract,
            missing: missing
                .iter()
                .map(TokenCapability::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    SUPPORTED_TOKENS.save(
        deps.storage,
        &key,
        &TokenEntry {
            local_token: local_token.clone(),
            decimals,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("ethereum_contract", ethereum_contract)
        .add_attribute("local_token", local_token)
        .add_attribute("decimals", decimals.to_string()))
}
