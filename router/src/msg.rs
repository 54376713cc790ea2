use common::Amount;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

pub use common::abi::AbiMessageResponse;
pub use common::proof::ProofResponse;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

/// `lamden_*` fields carry ledger addresses; the names match the relayer's
/// message format.
#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: register a foreign token. `lamden_contract` must answer the token
    /// interface query with every required capability.
    AddToken {
        ethereum_contract: String,
        lamden_contract: String,
        decimals: i32,
    },
    /// Owner: mint a foreign deposit. `amount` is a hex uint256 in foreign base
    /// units, `0x` optional.
    Mint {
        ethereum_contract: String,
        amount: String,
        lamden_wallet: String,
    },
    /// Owner: pull `amount` from `lamden_address` (which approved the router) and
    /// emit the foreign burn message for `ethereum_address`.
    Burn {
        ethereum_contract: String,
        ethereum_address: String,
        lamden_address: String,
        amount: Amount,
    },
    /// Owner: store a signature for an ABI hash, replacing any previous one.
    PostProof {
        hashed_abi: String,
        signed_abi: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(SupportedTokenResponse)]
    SupportedToken { ethereum_contract: String },
    /// Paginated, ascending by foreign contract
    #[returns(SupportedTokensResponse)]
    SupportedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Last burn nonce for a foreign address
    #[returns(NonceResponse)]
    Nonce { ethereum_address: String },
    #[returns(ProofResponse)]
    Proof { hashed_abi: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct SupportedTokenResponse {
    pub ethereum_contract: String,
    pub local_token: Addr,
    pub decimals: i32,
}

#[cw_serde]
pub struct SupportedTokensResponse {
    pub tokens: Vec<SupportedTokenResponse>,
}

#[cw_serde]
pub struct NonceResponse {
    pub ethereum_address: String,
    pub nonce: u64,
}
