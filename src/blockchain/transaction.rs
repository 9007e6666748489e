//! Transaction dispatch.
//!
//! # Responsibilities
//! - Describe a single contract call (target, calldata, optional value)
//! - Submit it from the signer and wait until it is mined
//! - Hand back the hash and emitted logs for event extraction
//!
//! No retry, batching or gas strategy happens here; the provider's defaults
//! apply.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::Log;
use async_trait::async_trait;

use crate::blockchain::types::BlockchainResult;
use crate::contracts::ContractName;

/// A single encoded call against one of the known contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    /// Which contract the call targets.
    pub contract: ContractName,
    /// Deployed address of the contract.
    pub to: Address,
    /// Solidity function signature, for logging.
    pub method: &'static str,
    /// ABI-encoded call data.
    pub calldata: Bytes,
    /// Native value attached to the call, if any.
    pub value: Option<U256>,
}

/// A transaction that has been included in a block.
#[derive(Debug, Clone, Default)]
pub struct MinedTransaction {
    pub tx_hash: TxHash,
    pub logs: Vec<Log>,
}

/// Submits contract calls and waits for their inclusion.
#[async_trait]
pub trait Transactor: Send + Sync {
    /// Send `call` from the current signer and resolve once it is mined.
    ///
    /// A reverted transaction is an error.
    async fn submit(&self, call: ContractCall) -> BlockchainResult<MinedTransaction>;
}

#[async_trait]
impl<T: Transactor + ?Sized> Transactor for std::sync::Arc<T> {
    async fn submit(&self, call: ContractCall) -> BlockchainResult<MinedTransaction> {
        (**self).submit(call).await
    }
}
