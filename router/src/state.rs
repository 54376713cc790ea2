use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cl8y-clearing-house";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
}

#[cw_serde]
pub struct TokenEntry {
    /// Ledger token minted and burned for this foreign token
    pub local_token: Addr,
    /// Decimals of the foreign token, stored as registered
    pub decimals: i32,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// foreign token contract (as registered) => entry
pub const SUPPORTED_TOKENS: Map<&str, TokenEntry> = Map::new("supported_tokens");

/// foreign recipient => last burn nonce, shared by every token
pub const NONCES: Map<&str, u64> = Map::new("nonces");
