use common::Amount;
use cosmwasm_schema::cw_serde;

pub use common::token::{
    AllowanceResponse, BalanceResponse, OwnerResponse, TokenExecuteMsg as ExecuteMsg,
    TokenInterfaceResponse, TokenQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InitialBalance {
    pub address: String,
    pub amount: Amount,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Sole minter
    pub owner: String,
    pub initial_balances: Vec<InitialBalance>,
}

#[cw_serde]
pub struct MigrateMsg {}
