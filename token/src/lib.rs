//! Wrapped Token - decimal ledger for bridged assets
//!
//! Balances and allowances are exact decimals ([`common::Amount`]). The owner set at
//! instantiation (normally the router) is the only minter. Every other account moves
//! tokens with `transfer`, or grants a spender an additive allowance with `approve`
//! that the spender consumes through `transfer_from`.
//!
//! The execute and query schema is [`common::token`], shared with the contracts that
//! drive this token.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
