//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy::primitives::{address, keccak256, Address, Bytes, TxHash, B256};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use voucher_service::blockchain::{BlockchainResult, ContractCall, MinedTransaction, Transactor};
use voucher_service::contracts::{ContractAddresses, ContractFactory};
use voucher_service::service::VoucherService;

pub const CASHIER: Address = address!("0101010101010101010101010101010101010101");
pub const TOKEN: Address = address!("0202020202020202020202020202020202020202");
pub const VOUCHER_KERNEL: Address = address!("0303030303030303030303030303030303030303");
pub const SIGNER: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// A transactor that records every call and answers with canned logs.
pub struct RecordingTransactor {
    tx_hash: TxHash,
    logs: Vec<Log>,
    calls: Mutex<Vec<ContractCall>>,
}

impl RecordingTransactor {
    pub fn new(tx_hash: TxHash, logs: Vec<Log>) -> Self {
        Self {
            tx_hash,
            logs,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transactor for RecordingTransactor {
    async fn submit(&self, call: ContractCall) -> BlockchainResult<MinedTransaction> {
        self.calls.lock().unwrap().push(call);
        Ok(MinedTransaction {
            tx_hash: self.tx_hash,
            logs: self.logs.clone(),
        })
    }
}

/// A log emitted by `emitter` carrying `event`.
pub fn log_of<E: SolEvent>(emitter: Address, event: &E) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: emitter,
            data: event.encode_log_data(),
        },
        ..Default::default()
    }
}

/// A service wired to a recording transactor that answers with `logs`.
pub fn service_with_logs(tx_hash: TxHash, logs: Vec<Log>) -> VoucherService<RecordingTransactor> {
    let addresses = ContractAddresses {
        cashier: CASHIER,
        token: TOKEN,
        voucher_kernel: VOUCHER_KERNEL,
    };
    VoucherService::new(
        ContractFactory::new(addresses, SIGNER),
        RecordingTransactor::new(tx_hash, logs),
    )
}

/// A local JSON-RPC node that mines every raw transaction it receives into a
/// receipt with the given status and logs.
pub struct RpcNode {
    pub url: String,
    raw_transactions: Arc<Mutex<Vec<Bytes>>>,
}

impl RpcNode {
    /// Signed transactions received through `eth_sendRawTransaction`.
    pub fn raw_transactions(&self) -> Vec<Bytes> {
        self.raw_transactions.lock().unwrap().clone()
    }
}

struct NodeState {
    success: bool,
    logs: Vec<Log>,
    raw_transactions: Arc<Mutex<Vec<Bytes>>>,
}

pub async fn start_rpc_node(success: bool, logs: Vec<Log>) -> RpcNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let raw_transactions = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(NodeState {
        success,
        logs,
        raw_transactions: raw_transactions.clone(),
    });

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let state = state.clone();
                    tokio::spawn(async move {
                        let Some(body) = read_request_body(&mut socket).await else {
                            return;
                        };
                        let Ok(request) = serde_json::from_slice::<Value>(&body) else {
                            return;
                        };
                        let method = request["method"].as_str().unwrap_or_default();
                        let result = answer(&state, method, &request["params"]);
                        let body = json!({
                            "jsonrpc": "2.0",
                            "id": request["id"],
                            "result": result,
                        })
                        .to_string();

                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    RpcNode {
        url,
        raw_transactions,
    }
}

async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let start = end + 4;
            while buf.len() < start + length {
                let n = socket.read(&mut chunk).await.ok()?;
                if n == 0 {
                    return None;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            return Some(buf[start..start + length].to_vec());
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

fn answer(state: &NodeState, method: &str, params: &Value) -> Value {
    match method {
        "eth_chainId" => json!("0x7a69"),
        "eth_blockNumber" => json!("0x1"),
        "eth_getTransactionCount" => json!("0x0"),
        "eth_estimateGas" => json!("0x5208"),
        "eth_gasPrice" | "eth_maxPriorityFeePerGas" => json!("0x3b9aca00"),
        "eth_feeHistory" => json!({
            "oldestBlock": "0x1",
            "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
            "gasUsedRatio": [0.5],
            "reward": [["0x3b9aca00"]],
        }),
        "eth_getBlockByNumber" => json!({
            "hash": B256::repeat_byte(0x0b),
            "parentHash": B256::ZERO,
            "sha3Uncles": B256::ZERO,
            "miner": Address::ZERO,
            "stateRoot": B256::ZERO,
            "transactionsRoot": B256::ZERO,
            "receiptsRoot": B256::ZERO,
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "difficulty": "0x0",
            "number": "0x1",
            "gasLimit": "0x1c9c380",
            "gasUsed": "0x5208",
            "timestamp": "0x1",
            "extraData": "0x",
            "mixHash": B256::ZERO,
            "nonce": "0x0000000000000000",
            "baseFeePerGas": "0x3b9aca00",
            "uncles": [],
            "transactions": [],
        }),
        "eth_sendRawTransaction" => {
            let raw: Bytes = params[0]
                .as_str()
                .and_then(|hex| hex.parse().ok())
                .unwrap_or_default();
            let hash = keccak256(&raw);
            state.raw_transactions.lock().unwrap().push(raw);
            json!(hash)
        }
        "eth_getTransactionReceipt" => json!({
            "type": "0x2",
            "status": if state.success { "0x1" } else { "0x0" },
            "cumulativeGasUsed": "0x5208",
            "logs": state.logs,
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": params[0],
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(0x0b),
            "blockNumber": "0x1",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x3b9aca00",
            "from": Address::ZERO,
            "to": Address::ZERO,
            "contractAddress": null,
        }),
        _ => Value::Null,
    }
}
