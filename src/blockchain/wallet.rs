//! Signer management.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables or explicit input
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "VOUCHER_PRIVATE_KEY";

/// Prefix prepended to a login nonce before it is signed.
const NONCE_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// The credential that authorizes transactions on behalf of the user.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID used for EIP-155 replay protection, if known
    pub fn from_private_key(private_key_hex: &str, chain_id: Option<u64>) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;
        let signer = signer.with_chain_id(chain_id);

        tracing::info!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Load wallet from environment variable.
    ///
    /// Reads `VOUCHER_PRIVATE_KEY` from environment.
    pub fn from_env(chain_id: Option<u64>) -> BlockchainResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            BlockchainError::Wallet(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key, chain_id)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> BlockchainResult<Signature> {
        self.signer
            .sign_message(message)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Message signing failed: {}", e)))
    }

    /// Sign a backend-issued login nonce.
    ///
    /// The nonce is prefixed with the personal-message header and then signed
    /// as a personal message, so the header appears twice in the digest.
    pub async fn sign_nonce(&self, nonce: &str) -> BlockchainResult<Signature> {
        self.sign_message(nonce_message(nonce).as_bytes()).await
    }

    /// Wrap the signer for use as a provider transaction signer.
    pub(crate) fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

/// Message body signed by [`Wallet::sign_nonce`].
pub fn nonce_message(nonce: &str) -> String {
    format!("{}{}", NONCE_MESSAGE_PREFIX, nonce)
}
