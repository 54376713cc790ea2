//! Query handlers for the CL8Y Bridge contract.

use common::codec::eth_address_key;
use common::proof::{self, ProofResponse};
use common::token::TokenContract;
use cosmwasm_std::{Deps, Env, StdResult};

use crate::msg::{ConfigResponse, CustodyBalanceResponse, NonceResponse};
use crate::state::{CONFIG, NONCES};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token: config.token,
        token_address: config.token_address,
        decimals: config.decimals,
    })
}

pub fn query_nonce(deps: Deps, ethereum_address: String) -> StdResult<NonceResponse> {
    let nonce = NONCES
        .may_load(deps.storage, &eth_address_key(&ethereum_address))?
        .unwrap_or_default();
    Ok(NonceResponse {
        ethereum_address,
        nonce,
    })
}

pub fn query_proof(deps: Deps, hashed_abi: String) -> StdResult<ProofResponse> {
    proof::query_proof(deps.storage, hashed_abi)
}

pub fn query_custody_balance(deps: Deps, env: Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = TokenContract(config.token).balance(&deps.querier, env.contract.address)?;
    Ok(CustodyBalanceResponse { balance })
}
