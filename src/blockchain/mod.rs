//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key) + NetworkConfig (RPC URL)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection, chain id, signer accessor)
//!     → transaction.rs (submit call, wait until mined)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::Connection;
pub use transaction::{ContractCall, MinedTransaction, Transactor};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::Wallet;
