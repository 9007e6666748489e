//! Receipt decoding and event extraction.
//!
//! # Data Flow
//! ```text
//! MinedTransaction.logs
//!     → parse_receipt (decode against the contract's interface)
//!     → Vec<ParsedEvent> (name + stringified args)
//!     → find_event_by_name (first match, requested fields only)
//!     → Option<EventRecord>
//! ```

use alloy::primitives::TxHash;
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::blockchain::transaction::MinedTransaction;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::contracts::abi::{Cashier, VoucherKernel, ERC1155ERC721};
use crate::contracts::names::ContractName;
use crate::observability::metrics;

/// An event decoded from a log, with every argument rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub name: String,
    pub args: Vec<(String, String)>,
}

impl ParsedEvent {
    /// Value of a named argument.
    pub fn arg(&self, field: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// The flat result of a dispatched operation: the transaction hash plus the
/// requested event fields, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    tx_hash: TxHash,
    fields: Vec<(String, String)>,
}

impl EventRecord {
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("txHash", &self.tx_hash.to_string())?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Name part of a Solidity event signature, e.g. `Foo` for `Foo(uint256)`.
fn event_name(signature: &'static str) -> &'static str {
    signature.split('(').next().unwrap_or(signature)
}

/// Try decoding `$log` as `$event`; on success return its fields stringified.
macro_rules! decode_event {
    ($log:expr, $event:ty { $($field:ident),* $(,)? }) => {
        if $log.topics().first() == Some(&<$event as SolEvent>::SIGNATURE_HASH) {
            if let Ok(decoded) = $log.log_decode::<$event>() {
                let event = decoded.inner.data;
                return Some(ParsedEvent {
                    name: event_name(<$event as SolEvent>::SIGNATURE).to_string(),
                    args: vec![$((stringify!($field).to_string(), event.$field.to_string())),*],
                });
            }
        }
    };
}

fn parse_cashier_log(log: &Log) -> Option<ParsedEvent> {
    decode_event!(log, Cashier::LogOrderCreated {
        _tokenIdSupply, _seller, _promiseId, _quantity
    });
    decode_event!(log, Cashier::LogVoucherDelivered {
        _tokenIdSupply, _tokenIdVoucher, _issuer, _holder, _promiseId
    });
    None
}

fn parse_voucher_kernel_log(log: &Log) -> Option<ParsedEvent> {
    decode_event!(log, VoucherKernel::LogVoucherDelivered {
        _tokenIdSupply, _tokenIdVoucher, _issuer, _holder, _promiseId
    });
    decode_event!(log, VoucherKernel::LogVoucherRedeemed { _tokenIdVoucher, _holder, _promiseId });
    decode_event!(log, VoucherKernel::LogVoucherRefunded { _tokenIdVoucher });
    decode_event!(log, VoucherKernel::LogVoucherComplain { _tokenIdVoucher });
    decode_event!(log, VoucherKernel::LogVoucherFaultCancel { _tokenIdVoucher });
    None
}

fn parse_token_log(log: &Log) -> Option<ParsedEvent> {
    decode_event!(log, ERC1155ERC721::TransferSingle { _operator, _from, _to, _id, _value });
    decode_event!(log, ERC1155ERC721::ApprovalForAll { _owner, _operator, _approved });
    None
}

/// Decode one log against a contract's interface.
///
/// Logs are matched by event signature regardless of the emitting address;
/// logs unknown to the interface yield `None`.
pub fn parse_log(contract: ContractName, log: &Log) -> Option<ParsedEvent> {
    match contract {
        ContractName::Cashier => parse_cashier_log(log),
        ContractName::VoucherKernel => parse_voucher_kernel_log(log),
        ContractName::Token => parse_token_log(log),
    }
}

/// Decode every recognizable log of a mined transaction, in log order.
pub fn parse_receipt(contract: ContractName, mined: &MinedTransaction) -> Vec<ParsedEvent> {
    mined
        .logs
        .iter()
        .filter_map(|log| parse_log(contract, log))
        .collect()
}

/// Pull the requested fields of the first event named `event_name`.
///
/// Returns `Ok(None)` when no event carries that name. A matched event
/// lacking one of `fields` is an error.
pub fn find_event_by_name(
    events: &[ParsedEvent],
    tx_hash: TxHash,
    event_name: &str,
    fields: &[&str],
) -> BlockchainResult<Option<EventRecord>> {
    let Some(event) = events.iter().find(|e| e.name == event_name) else {
        metrics::record_event_miss(event_name);
        tracing::warn!(tx_hash = %tx_hash, event = event_name, "Expected event not found in receipt");
        return Ok(None);
    };

    let fields = fields
        .iter()
        .map(|field| {
            event
                .arg(field)
                .map(|value| (field.to_string(), value.to_string()))
                .ok_or_else(|| BlockchainError::MissingEventField {
                    event: event_name.to_string(),
                    field: field.to_string(),
                })
        })
        .collect::<BlockchainResult<Vec<_>>>()?;

    Ok(Some(EventRecord { tx_hash, fields }))
}
