//! Network connection and signer accessor.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint with the user's wallet attached
//! - Expose the active chain id and the signer's address
//! - Submit contract calls and wait for the mined receipt

use alloy::network::TransactionBuilder;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::transaction::{ContractCall, MinedTransaction, Transactor};
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, NetworkConfig};
use crate::blockchain::wallet::Wallet;
use crate::observability::metrics;

/// A link to the network, authorized by a single wallet.
#[derive(Clone)]
pub struct Connection {
    provider: Arc<dyn Provider + Send + Sync>,
    wallet: Wallet,
    config: NetworkConfig,
    timeout_duration: Duration,
}

impl Connection {
    /// Connect to the configured endpoint with `wallet` as signer.
    ///
    /// A chain id mismatch is logged but does not fail construction.
    pub async fn new(config: NetworkConfig, wallet: Wallet) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_http(url);

        let connection = Self {
            provider: Arc::new(provider),
            wallet,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
        };

        if connection.config.chain_id.is_some() {
            if let Err(e) = connection.verify_chain_id().await {
                tracing::warn!(error = %e, "Connection established but chain verification failed");
            }
        }

        tracing::info!(
            rpc_url = %connection.config.rpc_url,
            signer = %connection.wallet.address(),
            "Connection initialized"
        );

        Ok(connection)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let Some(expected) = self.config.chain_id else {
            return Ok(());
        };
        let actual = self.get_network_id().await?;
        if actual.0 != expected {
            return Err(BlockchainError::ChainMismatch {
                expected,
                actual: actual.0,
            });
        }
        Ok(())
    }

    /// Chain identifier of the active network.
    pub async fn get_network_id(&self) -> BlockchainResult<ChainId> {
        match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(ChainId(id)),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// The signer transactions are sent from.
    pub fn signer(&self) -> &Wallet {
        &self.wallet
    }

    /// Address of the current user.
    pub fn user_address(&self) -> Address {
        self.wallet.address()
    }
}

#[async_trait]
impl Transactor for Connection {
    async fn submit(&self, call: ContractCall) -> BlockchainResult<MinedTransaction> {
        let mut tx = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(call.to)
            .with_input(call.calldata.clone());
        if let Some(value) = call.value {
            tx = tx.with_value(value);
        }

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            metrics::record_transaction(call.method, "send_failed");
            BlockchainError::Rpc(e.to_string())
        })?;
        let tx_hash = *pending.tx_hash();
        tracing::debug!(
            contract = %call.contract,
            method = call.method,
            tx_hash = %tx_hash,
            "Transaction sent, waiting for inclusion"
        );

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| {
                metrics::record_transaction(call.method, "receipt_failed");
                BlockchainError::Rpc(e.to_string())
            })?;

        if !receipt.status() {
            metrics::record_transaction(call.method, "reverted");
            return Err(BlockchainError::Reverted(format!(
                "{}.{} in {}",
                call.contract, call.method, receipt.transaction_hash
            )));
        }

        metrics::record_transaction(call.method, "mined");
        tracing::info!(
            contract = %call.contract,
            method = call.method,
            tx_hash = %receipt.transaction_hash,
            block_number = receipt.block_number.unwrap_or_default(),
            "Transaction mined"
        );

        Ok(MinedTransaction {
            tx_hash: receipt.transaction_hash,
            logs: receipt.inner.logs().to_vec(),
        })
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("signer", &self.wallet.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_config() -> NetworkConfig {
        NetworkConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            chain_id: None,
            rpc_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_connection_creation() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, None).unwrap();
        let connection = Connection::new(test_config(), wallet).await;
        // Nothing is contacted without an expected chain id
        assert!(connection.is_ok());
        let connection = connection.unwrap();
        assert_eq!(
            connection.user_address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[tokio::test]
    async fn test_invalid_rpc_url() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, None).unwrap();
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();
        let result = Connection::new(config, wallet).await;
        assert!(matches!(result, Err(BlockchainError::Rpc(_))));
    }

    #[tokio::test]
    async fn test_unreachable_network_id() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, None).unwrap();
        let mut config = test_config();
        config.chain_id = Some(31337);
        // Chain verification failure is not fatal
        let connection = Connection::new(config, wallet).await.unwrap();
        assert!(connection.get_network_id().await.is_err());
    }
}
