//! Call arguments for the domain operations.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::contracts::abi::Cashier;

/// Positional arguments of `Cashier.requestCreateOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderArgs {
    pub asset_title: String,
    pub valid_from: U256,
    pub valid_to: U256,
    pub price: U256,
    pub seller_deposit: U256,
    pub buyer_deposit: U256,
    pub quantity: U256,
}

impl From<CreateOrderArgs> for Cashier::requestCreateOrderCall {
    fn from(args: CreateOrderArgs) -> Self {
        Self {
            _assetTitle: args.asset_title,
            _validFrom: args.valid_from,
            _validTo: args.valid_to,
            _price: args.price,
            _depositSe: args.seller_deposit,
            _depositBu: args.buyer_deposit,
            _quantity: args.quantity,
        }
    }
}

/// Positional arguments of `Cashier.requestVoucher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitToBuyArgs {
    pub token_id_supply: U256,
    pub issuer: Address,
}

impl From<CommitToBuyArgs> for Cashier::requestVoucherCall {
    fn from(args: CommitToBuyArgs) -> Self {
        Self {
            _tokenIdSupply: args.token_id_supply,
            _issuer: args.issuer,
        }
    }
}
