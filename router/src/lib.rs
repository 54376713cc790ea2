//! CL8Y Clearing House - multi-token router for TerraClassic
//!
//! Maps foreign token contracts to ledger tokens (and their foreign decimals) and
//! drives both directions for every registered pair:
//!
//! # Incoming (Mint)
//! The owner relays a verified foreign deposit as `Mint`: the hex uint256 amount is
//! scaled down by the registered decimals and minted on the ledger token. The router
//! must be that token's owner. No nonce is consumed.
//!
//! # Outgoing (Burn)
//! The owner calls `Burn` for an account that approved the router: the tokens move
//! into the router's custody, the nonce of the foreign recipient is bumped (one
//! sequence per foreign address across all tokens) and the ABI burn message is
//! returned with its digest.
//!
//! # Registration
//! `AddToken` negotiates the token interface first and refuses tokens that do not
//! serve every required capability.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
