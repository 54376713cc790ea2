//! CL8Y Bridge Contract - Entry Points
//!
//! Handlers live in `execute` and `query`.

use common::codec::pack_eth_address;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_deposit, execute_post_proof, execute_withdraw};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_custody_balance, query_nonce, query_proof};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let token = deps.api.addr_validate(&msg.token)?;
    pack_eth_address(&msg.token_address)?;

    let config = Config {
        owner,
        token,
        token_address: msg.token_address,
        decimals: msg.decimals,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token", config.token)
        .add_attribute("token_address", config.token_address)
        .add_attribute("decimals", config.decimals.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            amount,
            ethereum_address,
        } => execute_deposit(deps, env, info, amount, ethereum_address),
        ExecuteMsg::Withdraw { amount, to } => execute_withdraw(deps, info, amount, to),
        ExecuteMsg::PostProof {
            hashed_abi,
            signed_abi,
        } => execute_post_proof(deps, info, hashed_abi, signed_abi),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Nonce { ethereum_address } => {
            to_json_binary(&query_nonce(deps, ethereum_address)?)
        }
        QueryMsg::Proof { hashed_abi } => to_json_binary(&query_proof(deps, hashed_abi)?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
