//! Domain operations: one contract call and one expected event each.

use alloy::primitives::U256;
use alloy::sol_types::SolCall;

use crate::blockchain::transaction::Transactor;
use crate::blockchain::types::BlockchainResult;
use crate::contracts::abi::{Cashier, VoucherKernel};
use crate::contracts::{ContractName, EventRecord};
use crate::service::types::{CommitToBuyArgs, CreateOrderArgs};
use crate::service::VoucherService;

impl<T: Transactor> VoucherService<T> {
    /// Create a supply of vouchers; `value` carries the seller deposit.
    ///
    /// Extracts `LogOrderCreated`.
    pub async fn request_create_order(
        &self,
        args: CreateOrderArgs,
        value: Option<U256>,
    ) -> BlockchainResult<Option<EventRecord>> {
        let cashier = self.factory.handle(ContractName::Cashier);
        let call = Cashier::requestCreateOrderCall::from(args);

        self.process_tx(
            cashier,
            Cashier::requestCreateOrderCall::SIGNATURE,
            call.abi_encode(),
            value,
            "LogOrderCreated",
            &["_tokenIdSupply", "_seller", "_promiseId", "_quantity"],
        )
        .await
    }

    /// Buy a voucher from a supply; `value` carries price plus buyer deposit.
    ///
    /// Extracts `LogVoucherDelivered`.
    pub async fn commit_to_buy(
        &self,
        args: CommitToBuyArgs,
        value: Option<U256>,
    ) -> BlockchainResult<Option<EventRecord>> {
        let cashier = self.factory.handle(ContractName::Cashier);
        let call = Cashier::requestVoucherCall::from(args);

        self.process_tx(
            cashier,
            Cashier::requestVoucherCall::SIGNATURE,
            call.abi_encode(),
            value,
            "LogVoucherDelivered",
            &["_tokenIdSupply", "_tokenIdVoucher", "_issuer", "_holder", "_promiseId"],
        )
        .await
    }

    pub async fn redeem(&self, voucher_id: U256) -> BlockchainResult<Option<EventRecord>> {
        let kernel = self.factory.handle(ContractName::VoucherKernel);
        let call = VoucherKernel::redeemCall { _tokenIdVoucher: voucher_id };

        self.process_tx(
            kernel,
            VoucherKernel::redeemCall::SIGNATURE,
            call.abi_encode(),
            None,
            "LogVoucherRedeemed",
            &["_tokenIdVoucher", "_holder", "_promiseId"],
        )
        .await
    }

    pub async fn refund(&self, voucher_id: U256) -> BlockchainResult<Option<EventRecord>> {
        let kernel = self.factory.handle(ContractName::VoucherKernel);
        let call = VoucherKernel::refundCall { _tokenIdVoucher: voucher_id };

        self.process_tx(
            kernel,
            VoucherKernel::refundCall::SIGNATURE,
            call.abi_encode(),
            None,
            "LogVoucherRefunded",
            &["_tokenIdVoucher"],
        )
        .await
    }

    pub async fn complain(&self, voucher_id: U256) -> BlockchainResult<Option<EventRecord>> {
        let kernel = self.factory.handle(ContractName::VoucherKernel);
        let call = VoucherKernel::complainCall { _tokenIdVoucher: voucher_id };

        self.process_tx(
            kernel,
            VoucherKernel::complainCall::SIGNATURE,
            call.abi_encode(),
            None,
            "LogVoucherComplain",
            &["_tokenIdVoucher"],
        )
        .await
    }

    /// Seller cancels the voucher or admits fault.
    pub async fn cancel_or_fault(&self, voucher_id: U256) -> BlockchainResult<Option<EventRecord>> {
        let kernel = self.factory.handle(ContractName::VoucherKernel);
        let call = VoucherKernel::cancelOrFaultCall { _tokenIdVoucher: voucher_id };

        self.process_tx(
            kernel,
            VoucherKernel::cancelOrFaultCall::SIGNATURE,
            call.abi_encode(),
            None,
            "LogVoucherFaultCancel",
            &["_tokenIdVoucher"],
        )
        .await
    }
}
