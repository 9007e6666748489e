//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::contracts::ContractName;

/// Environment variable overriding `network.rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "VOUCHER_RPC_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override from the process environment, and validate a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Build a configuration from defaults plus the process environment only.
pub fn config_from_env() -> Result<ServiceConfig, ConfigError> {
    let mut config = ServiceConfig::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse TOML without validating.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overlay environment values on top of `config`.
///
/// Contract addresses use `CASHIER_CONTRACT`, `TOKEN_CONTRACT` and
/// `VOUCHER_KERNEL_CONTRACT`; the RPC endpoint uses `VOUCHER_RPC_URL`.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(RPC_URL_ENV_VAR) {
        config.network.rpc_url = url;
    }

    for name in ContractName::ALL {
        if let Some(address) = lookup(name.env_var()) {
            let slot = match name {
                ContractName::Cashier => &mut config.contracts.cashier,
                ContractName::Token => &mut config.contracts.token,
                ContractName::VoucherKernel => &mut config.contracts.voucher_kernel,
            };
            *slot = address;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
        [network]
        rpc_url = "http://127.0.0.1:8545"
        chain_id = 31337

        [contracts]
        cashier = "0x0101010101010101010101010101010101010101"
        token = "0x0202020202020202020202020202020202020202"
        voucher_kernel = "0x0303030303030303030303030303030303030303"

        [observability]
        log_level = "debug"
    "#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.network.chain_id, Some(31337));
        assert_eq!(config.network.rpc_timeout_secs, 10);
        assert_eq!(config.observability.log_level, "debug");
        assert!(!config.observability.json);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[network\nrpc_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("VOUCHER_RPC_URL", "http://node:8545"),
            ("VOUCHER_KERNEL_CONTRACT", "0x0404040404040404040404040404040404040404"),
        ]);
        let mut config = parse_config(SAMPLE).unwrap();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.network.rpc_url, "http://node:8545");
        assert_eq!(
            config.contracts.voucher_kernel,
            "0x0404040404040404040404040404040404040404"
        );
        assert_eq!(
            config.contracts.cashier,
            "0x0101010101010101010101010101010101010101"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroTimeout,
            ValidationError::MissingAddress("token"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: network.rpc_timeout_secs must be greater than zero, contracts.token is not set"
        );
    }
}
