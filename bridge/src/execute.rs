//! Execute handlers for the CL8Y Bridge contract.

use common::codec::{eth_address_key, pack_eth_address};
use common::proof::save_proof;
use common::token::{TokenContract, TokenExecuteMsg};
use common::{AbiMessage, Amount};
use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, NONCES};

/// Pull `amount` into custody and emit the foreign mint message.
///
/// The nonce is bumped in the same call that encodes it. It is keyed by the
/// lowercased address; the ABI keeps the spelling as given. If the dispatched
/// `transfer_from` fails, the whole transaction reverts, nonce included.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Amount,
    ethereum_address: String,
) -> Result<Response, ContractError> {
    if !amount.is_positive() {
        return Err(ContractError::InvalidAmount { amount });
    }
    pack_eth_address(&ethereum_address)?;

    let config = CONFIG.load(deps.storage)?;

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
        token: &config.token_address,
        amount: &amount,
        decimals: config.decimals,
        nonce,
        destination: &ethereum_address,
    }
    .to_response()?;

    let pull = TokenContract(config.token).call(TokenExecuteMsg::TransferFrom {
        amount: amount.clone(),
        to: env.contract.address.to_string(),
        main_account: info.sender.to_string(),
    })?;

    Ok(Response::new()
        .add_message(pull)
        .set_data(to_json_binary(&message)?)
        .add_attribute("method", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("ethereum_address", ethereum_address)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("abi", message.abi)
        .add_attribute("abi_hash", message.abi_hash))
}

/// Release custodied tokens. Owner only; nonces are not involved.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Amount,
    to: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    if !amount.is_positive() {
        return Err(ContractError::InvalidAmount { amount });
    }
    let to = deps.api.addr_validate(&to)?;

    let release = TokenContract(config.token).call(TokenExecuteMsg::Transfer {
        amount: amount.clone(),
        to: to.to_string(),
    })?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("method", "withdraw")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_post_proof(
    deps: DepsMut,
    info: MessageInfo,
    hashed_abi: String,
    signed_abi: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    save_proof(deps.storage, &hashed_abi, &signed_abi)?;

    Ok(Response::new()
        .add_attribute("method", "post_proof")
        .add_attribute("hashed_abi", hashed_abi))
}
