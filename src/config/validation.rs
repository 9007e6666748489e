//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("network.rpc_url '{0}' is not a valid URL")]
    InvalidRpcUrl(String),

    #[error("network.rpc_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("contracts.{0} is not set")]
    MissingAddress(&'static str),

    #[error("contracts.{field} '{value}' is not a valid address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if url::Url::parse(&config.network.rpc_url).is_err() {
        errors.push(ValidationError::InvalidRpcUrl(config.network.rpc_url.clone()));
    }
    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let contracts = [
        ("cashier", &config.contracts.cashier),
        ("token", &config.contracts.token),
        ("voucher_kernel", &config.contracts.voucher_kernel),
    ];
    for (field, value) in contracts {
        if value.trim().is_empty() {
            errors.push(ValidationError::MissingAddress(field));
        } else if value.trim().parse::<Address>().is_err() {
            errors.push(ValidationError::InvalidAddress {
                field,
                value: value.clone(),
            });
        }
    }

    if tracing_subscriber::EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
