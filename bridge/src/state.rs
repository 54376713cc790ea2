use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cl8y-eth-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Ledger token held in custody
    pub token: Addr,
    /// Foreign token contract, `0x` + 40 hex
    pub token_address: String,
    /// Decimals of the foreign token
    pub decimals: i32,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// foreign address => last nonce issued (absent means 0)
pub const NONCES: Map<&str, u64> = Map::new("nonces");
