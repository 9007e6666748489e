//! Metrics collection.
//!
//! # Metrics
//! - `voucher_transactions_total` (counter): submitted transactions by method, outcome
//! - `voucher_event_misses_total` (counter): receipts lacking the expected event
//!
//! No recorder is installed here; the hosting application decides where
//! metrics go. Without one these calls are no-ops.

use metrics::counter;

/// Record the outcome of a submitted transaction.
pub fn record_transaction(method: &'static str, outcome: &'static str) {
    counter!("voucher_transactions_total", "method" => method, "outcome" => outcome).increment(1);
}

/// Record a receipt that did not contain the expected event.
pub fn record_event_miss(event: &str) {
    counter!("voucher_event_misses_total", "event" => event.to_string()).increment(1);
}
