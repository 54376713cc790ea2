//! CL8Y Bridge Contract - single-token custody bridge for TerraClassic
//!
//! # Outgoing Flow (Deposit)
//! 1. User approves this contract on the configured ledger token
//! 2. User calls `Deposit` with an amount and their foreign address
//! 3. The contract pulls the tokens into custody, bumps the nonce of that foreign
//!    address and returns the ABI mint message plus its SHA3-256 digest
//! 4. A relayer signs the digest, the owner posts the signature with `PostProof`,
//!    and the foreign chain mints against it
//!
//! # Incoming Flow (Withdraw)
//! Once a foreign burn has been verified off-chain, the owner releases custodied
//! tokens to the recipient with `Withdraw`.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
