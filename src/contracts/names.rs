//! The closed set of contracts the facade talks to.

use std::fmt;
use std::str::FromStr;

use crate::blockchain::types::BlockchainError;

/// A known contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractName {
    Cashier,
    Token,
    VoucherKernel,
}

impl ContractName {
    /// All known contracts.
    pub const ALL: [ContractName; 3] = [
        ContractName::Cashier,
        ContractName::Token,
        ContractName::VoucherKernel,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::Cashier => "Cashier",
            ContractName::Token => "Token",
            ContractName::VoucherKernel => "VoucherKernel",
        }
    }

    /// Environment variable holding the deployed address.
    pub fn env_var(&self) -> &'static str {
        match self {
            ContractName::Cashier => "CASHIER_CONTRACT",
            ContractName::Token => "TOKEN_CONTRACT",
            ContractName::VoucherKernel => "VOUCHER_KERNEL_CONTRACT",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = BlockchainError;

    /// Case-insensitive; `-` and `_` are ignored, so `voucher-kernel`,
    /// `VOUCHER_KERNEL` and `VoucherKernel` all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "" => Err(BlockchainError::InvalidArgument(
                "No contract name has been provided".to_string(),
            )),
            "cashier" => Ok(ContractName::Cashier),
            "token" | "erc1155erc721" => Ok(ContractName::Token),
            "voucherkernel" => Ok(ContractName::VoucherKernel),
            _ => Err(BlockchainError::InvalidArgument(format!(
                "Unknown contract name '{}'",
                s
            ))),
        }
    }
}
