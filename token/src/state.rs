use common::Amount;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cl8y-wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Item<Addr> = Item::new("owner");

/// account => balance
pub const BALANCES: Map<&Addr, Amount> = Map::new("balances");

/// (owner, spender) => remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Amount> = Map::new("allowances");
