//! Contract handle construction.

use alloy::primitives::Address;
use dashmap::DashMap;
use std::sync::Arc;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::schema::ContractsConfig;
use crate::contracts::names::ContractName;

/// Deployed addresses of the known contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    pub cashier: Address,
    pub token: Address,
    pub voucher_kernel: Address,
}

impl ContractAddresses {
    /// Parse the configured address strings.
    pub fn from_config(config: &ContractsConfig) -> BlockchainResult<Self> {
        Ok(Self {
            cashier: parse_address(ContractName::Cashier, &config.cashier)?,
            token: parse_address(ContractName::Token, &config.token)?,
            voucher_kernel: parse_address(ContractName::VoucherKernel, &config.voucher_kernel)?,
        })
    }
}

fn parse_address(name: ContractName, value: &str) -> BlockchainResult<Address> {
    value.trim().parse().map_err(|e| {
        BlockchainError::InvalidArgument(format!("Invalid {} address '{}': {}", name, value, e))
    })
}

/// A contract bound to its deployed address and the signer that will call it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractHandle {
    pub name: ContractName,
    pub address: Address,
    pub signer: Address,
}

/// Builds contract handles on first use and caches them.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    addresses: ContractAddresses,
    signer: Address,
    handles: Arc<DashMap<ContractName, ContractHandle>>,
}

impl ContractFactory {
    pub fn new(addresses: ContractAddresses, signer: Address) -> Self {
        Self {
            addresses,
            signer,
            handles: Arc::new(DashMap::new()),
        }
    }

    /// Handle for a known contract.
    pub fn handle(&self, name: ContractName) -> ContractHandle {
        *self.handles.entry(name).or_insert_with(|| {
            let handle = match name {
                ContractName::Cashier => self.cashier(),
                ContractName::Token => self.token(),
                ContractName::VoucherKernel => self.voucher_kernel(),
            };
            tracing::debug!(contract = %name, address = %handle.address, "Contract handle created");
            handle
        })
    }

    /// Handle by name; an empty or unknown name is an invalid argument.
    pub fn contract(&self, name: &str) -> BlockchainResult<ContractHandle> {
        let name: ContractName = name.parse()?;
        Ok(self.handle(name))
    }

    /// Address every handle is bound to as caller.
    pub fn signer(&self) -> Address {
        self.signer
    }

    fn cashier(&self) -> ContractHandle {
        self.bind(ContractName::Cashier, self.addresses.cashier)
    }

    fn token(&self) -> ContractHandle {
        self.bind(ContractName::Token, self.addresses.token)
    }

    fn voucher_kernel(&self) -> ContractHandle {
        self.bind(ContractName::VoucherKernel, self.addresses.voucher_kernel)
    }

    fn bind(&self, name: ContractName, address: Address) -> ContractHandle {
        ContractHandle {
            name,
            address,
            signer: self.signer,
        }
    }
}
