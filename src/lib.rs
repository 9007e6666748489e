//! Client facade over the deployed voucher-escrow contracts.
//!
//! Each operation submits one transaction, waits for it to be mined and
//! returns the fields of one expected event from the receipt. All escrow
//! and voucher lifecycle rules live in the contracts themselves.

pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod observability;
pub mod service;

pub use blockchain::{BlockchainError, Connection, Wallet};
pub use config::ServiceConfig;
pub use contracts::{ContractName, EventRecord};
pub use service::VoucherService;
