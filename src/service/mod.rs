//! The voucher service facade.
//!
//! # Data Flow
//! ```text
//! operation (operations.rs)
//!     → ContractFactory::handle (address + signer)
//!     → sol! call encoding
//!     → Transactor::submit (send, wait until mined)
//!     → parse_receipt + find_event_by_name
//!     → Option<EventRecord>
//! ```
//!
//! Overlapping calls are independent; nothing is serialized between them.

pub mod operations;
pub mod types;

use alloy::primitives::{Address, Bytes, U256};
use alloy::signers::Signature;

use crate::blockchain::client::Connection;
use crate::blockchain::transaction::{ContractCall, Transactor};
use crate::blockchain::types::{BlockchainResult, ChainId};
use crate::blockchain::wallet::Wallet;
use crate::config::ServiceConfig;
use crate::contracts::{
    find_event_by_name, parse_receipt, ContractAddresses, ContractFactory, ContractHandle,
    EventRecord,
};

pub use types::{CommitToBuyArgs, CreateOrderArgs};

/// Facade over the deployed contracts.
#[derive(Debug, Clone)]
pub struct VoucherService<T> {
    factory: ContractFactory,
    transactor: T,
}

impl VoucherService<Connection> {
    /// Connect to the configured network with `wallet` as the signer.
    pub async fn connect(config: &ServiceConfig, wallet: Wallet) -> BlockchainResult<Self> {
        let addresses = ContractAddresses::from_config(&config.contracts)?;
        let factory = ContractFactory::new(addresses, wallet.address());
        let connection = Connection::new(config.network.clone(), wallet).await?;
        Ok(Self::new(factory, connection))
    }

    /// Chain identifier of the active network.
    pub async fn get_network_id(&self) -> BlockchainResult<ChainId> {
        self.transactor.get_network_id().await
    }

    /// Sign a backend-issued login nonce with the current signer.
    pub async fn sign_nonce(&self, nonce: &str) -> BlockchainResult<Signature> {
        self.transactor.signer().sign_nonce(nonce).await
    }
}

impl<T: Transactor> VoucherService<T> {
    pub fn new(factory: ContractFactory, transactor: T) -> Self {
        Self {
            factory,
            transactor,
        }
    }

    /// Address of the current user.
    pub fn user_address(&self) -> Address {
        self.factory.signer()
    }

    /// Contract handle by name; empty or unknown names are rejected.
    pub fn contract(&self, name: &str) -> BlockchainResult<ContractHandle> {
        self.factory.contract(name)
    }

    pub fn transactor(&self) -> &T {
        &self.transactor
    }

    /// Submit one call, wait for it to be mined and extract `event_name`.
    pub(crate) async fn process_tx(
        &self,
        handle: ContractHandle,
        method: &'static str,
        calldata: Vec<u8>,
        value: Option<U256>,
        event_name: &str,
        fields: &[&str],
    ) -> BlockchainResult<Option<EventRecord>> {
        let call = ContractCall {
            contract: handle.name,
            to: handle.address,
            method,
            calldata: Bytes::from(calldata),
            value,
        };

        tracing::info!(
            contract = %handle.name,
            method,
            value = ?value,
            "Submitting transaction"
        );

        let mined = self.transactor.submit(call).await?;
        let events = parse_receipt(handle.name, &mined);
        find_event_by_name(&events, mined.tx_hash, event_name, fields)
    }
}
