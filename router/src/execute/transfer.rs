//! Mint, burn and proof handlers.

use common::codec::{eth_address_key, pack_eth_address, unpack_uint256};
use common::proof::save_proof;
use common::token::{TokenContract, TokenExecuteMsg};
use common::{AbiMessage, Amount};
use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};

use super::{ensure_owner, load_supported};
use crate::error::ContractError;
use crate::state::NONCES;

/// Mint a foreign deposit on the registered ledger token.
///
/// `amount` is hex with or without `0x`; `"10"` means sixteen base units.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    ethereum_contract: String,
    amount: String,
    lamden_wallet: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    let entry = load_supported(deps.storage, &ethereum_contract)?;

    let value = unpack_uint256(&amount, entry.decimals)?;
    if !value.is_positive() {
        return Err(ContractError::InvalidAmount { amount: value });
    }
    let wallet = deps.api.addr_validate(&lamden_wallet)?;

    let mint = TokenContract(entry.local_token).call(TokenExecuteMsg::Mint {
        amount: value.clone(),
        to: wallet.to_string(),
    })?;

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("method", "mint")
        .add_attribute("ethereum_contract", ethereum_contract)
        .add_attribute("to", wallet)
        .add_attribute("uint256", amount)
        .add_attribute("amount", value.to_string()))
}

/// Move `amount` from `lamden_address` into custody and emit the burn message.
///
/// The nonce is keyed by the lowercased `ethereum_address` alone, so burns of
/// different tokens to the same recipient share one sequence.
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    ethereum_contract: String,
    ethereum_address: String,
    lamden_address: String,
    amount: Amount,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    let entry = load_supported(deps.storage, &ethereum_contract)?;

    if !amount.is_positive() {
        return Err(ContractError::InvalidAmount { amount });
    }
    pack_eth_address(&ethereum_address)?;
    let account = deps.api.addr_validate(&lamden_address)?;

    let key = eth_address_key(&ethereum_address);
    let nonce = NONCES
        .may_load(deps.storage, &key)?
        .unwrap_or_default()
        .checked_add(1)
        .ok_or_else(|| ContractError::NonceOverflow {
            ethereum_address: ethereum_address.clone(),
        })?;
    NONCES.save(deps.storage, &key, &nonce)?;

    let message = AbiMessage {
        token: &ethereum_contract,
        amount: &amount,
        decimals: entry.decimals,
        nonce,
        destination: &ethereum_address,
    }
    .to_response()?;

    let pull = TokenContract(entry.local_token).call(TokenExecuteMsg::TransferFrom {
        amount: amount.clone(),
        to: env.contract.address.to_string(),
        main_account: account.to_string(),
    })?;

    Ok(Response::new()
        .add_message(pull)
        .set_data(to_json_binary(&message)?)
        .add_attribute("method", "burn")
        .add_attribute("ethereum_contract", ethereum_contract)
        .add_attribute("ethereum_address", ethereum_address)
        .add_attribute("from", account)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("abi", message.abi)
        .add_attribute("abi_hash", message.abi_hash))
}

pub fn execute_post_proof(
    deps: DepsMut,
    info: MessageInfo,
    hashed_abi: String,
    signed_abi: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    save_proof(deps.storage, &hashed_abi, &signed_abi)?;

    Ok(Response::new()
        .add_attribute("method", "post_proof")
        .add_attribute("hashed_abi", hashed_abi))
}
