//! Query handlers for the CL8Y Clearing House.

use common::codec::eth_address_key;
use common::proof::{self, ProofResponse};
use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, NonceResponse, SupportedTokenResponse, SupportedTokensResponse};
use crate::state::{TokenEntry, CONFIG, NONCES, SUPPORTED_TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
    })
}

pub fn query_supported_token(
    deps: Deps,
    ethereum_contract: String,
) -> StdResult<SupportedTokenResponse> {
    let entry = SUPPORTED_TOKENS.load(deps.storage, &eth_address_key(&ethereum_contract))?;
    Ok(to_response(ethereum_contract, entry))
}

pub fn query_supported_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<SupportedTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after.as_deref().map(eth_address_key);
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = SUPPORTED_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (ethereum_contract, entry) = item?;
            Ok(to_response(ethereum_contract, entry))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SupportedTokensResponse { tokens })
}

fn to_response(ethereum_contract: String, entry: TokenEntry) -> SupportedTokenResponse {
    SupportedTokenResponse {
        ethereum_contract,
        local_token: entry.local_token,
        decimals: entry.decimals,
    }
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
