use common::Amount;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

pub use common::abi::AbiMessageResponse;
pub use common::proof::ProofResponse;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Ledger token contract
    pub token: String,
    /// Foreign token contract the mint messages name
    pub token_address: String,
    pub decimals: i32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pull `amount` from the caller into custody and emit a mint message for
    /// `ethereum_address`. Requires a prior `approve` on the token.
    Deposit {
        amount: Amount,
        ethereum_address: String,
    },
    /// Owner: release custodied tokens.
    Withdraw { amount: Amount, to: String },
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
    /// Last nonce issued for a foreign address
    #[returns(NonceResponse)]
    Nonce { ethereum_address: String },
    #[returns(ProofResponse)]
    Proof { hashed_abi: String },
    /// This contract's balance on its token
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    pub token_address: String,
    pub decimals: i32,
}

#[cw_serde]
pub struct NonceResponse {
    pub ethereum_address: String,
    pub nonce: u64,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub balance: Amount,
}
