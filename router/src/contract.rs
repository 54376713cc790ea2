//! CL8Y Clearing House - Entry Points
//!
//! The implementation is split into:
//! - `execute/` - registry and transfer handlers
//! - `query` - query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_add_token, execute_burn, execute_mint, execute_post_proof};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_nonce, query_proof, query_supported_token, query_supported_tokens,
};
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
    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
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
        ExecuteMsg::AddToken {
            ethereum_contract,
            lamden_contract,
            decimals,
        } => execute_add_token(deps, info, ethereum_contract, lamden_contract, decimals),
        ExecuteMsg::Mint {
            ethereum_contract,
            amount,
            lamden_wallet,
        } => execute_mint(deps, info, ethereum_contract, amount, lamden_wallet),
        ExecuteMsg::Burn {
            ethereum_contract,
            ethereum_address,
            lamden_address,
            amount,
        } => execute_burn(
            deps,
            env,
            info,
            ethereum_contract,
            ethereum_address,
            lamden_address,
            amount,
        ),
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
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::SupportedToken { ethereum_contract } => {
            to_json_binary(&query_supported_token(deps, ethereum_contract)?)
        }
        QueryMsg::SupportedTokens { start_after, limit } => {
            to_json_binary(&query_supported_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Nonce { ethereum_address } => {
            to_json_binary(&query_nonce(deps, ethereum_address)?)
        }
        QueryMsg::Proof { hashed_abi } => to_json_binary(&query_proof(deps, hashed_abi)?),
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
