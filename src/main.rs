use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};

use voucher_service::blockchain::Wallet;
use voucher_service::config::{config_from_env, load_config};
use voucher_service::observability::init_logging;
use voucher_service::service::{CommitToBuyArgs, CreateOrderArgs};
use voucher_service::{EventRecord, VoucherService};

#[derive(Parser)]
#[command(name = "voucher-cli")]
#[command(about = "Submit voucher transactions and print the resulting event", long_about = None)]
struct Cli {
    /// TOML configuration file; environment only when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chain id of the connected network
    NetworkId,
    /// Print the signer address
    #[command(name = "address")]
    UserAddress,
    /// Sign a login nonce
    SignNonce { nonce: String },
    /// Create an order (voucher supply)
    CreateOrder {
        #[arg(long)]
        title: String,
        #[arg(long)]
        valid_from: U256,
        #[arg(long)]
        valid_to: U256,
        #[arg(long)]
        price: U256,
        #[arg(long)]
        seller_deposit: U256,
        #[arg(long)]
        buyer_deposit: U256,
        #[arg(long)]
        quantity: U256,
        /// Wei attached to the transaction
        #[arg(long)]
        value: Option<U256>,
    },
    /// Commit to buy a voucher from a supply
    CommitToBuy {
        #[arg(long)]
        supply_id: U256,
        #[arg(long)]
        issuer: Address,
        /// Wei attached to the transaction
        #[arg(long)]
        value: Option<U256>,
    },
    /// Redeem a voucher
    Redeem { voucher_id: U256 },
    /// Refund a voucher
    Refund { voucher_id: U256 },
    /// Complain about a voucher
    Complain { voucher_id: U256 },
    /// Cancel a voucher or admit fault
    CancelOrFault { voucher_id: U256 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => config_from_env()?,
    };
    init_logging(&config.observability);

    let wallet = Wallet::from_env(config.network.chain_id)?;
    let service = VoucherService::connect(&config, wallet).await?;

    match cli.command {
        Commands::NetworkId => {
            println!("{}", service.get_network_id().await?);
        }
        Commands::UserAddress => {
            println!("{}", service.user_address());
        }
        Commands::SignNonce { nonce } => {
            let signature = service.sign_nonce(&nonce).await?;
            println!("{}", alloy::hex::encode_prefixed(signature.as_bytes()));
        }
        Commands::CreateOrder {
            title,
            valid_from,
            valid_to,
            price,
            seller_deposit,
            buyer_deposit,
            quantity,
            value,
        } => {
            let args = CreateOrderArgs {
                asset_title: title,
                valid_from,
                valid_to,
                price,
                seller_deposit,
                buyer_deposit,
                quantity,
            };
            print_record(service.request_create_order(args, value).await?)?;
        }
        Commands::CommitToBuy {
            supply_id,
            issuer,
            value,
        } => {
            let args = CommitToBuyArgs {
                token_id_supply: supply_id,
                issuer,
            };
            print_record(service.commit_to_buy(args, value).await?)?;
        }
        Commands::Redeem { voucher_id } => print_record(service.redeem(voucher_id).await?)?,
        Commands::Refund { voucher_id } => print_record(service.refund(voucher_id).await?)?,
        Commands::Complain { voucher_id } => print_record(service.complain(voucher_id).await?)?,
        Commands::CancelOrFault { voucher_id } => {
            print_record(service.cancel_or_fault(voucher_id).await?)?
        }
    }

    Ok(())
}

fn print_record(record: Option<EventRecord>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_names() {
        let cli = Cli::try_parse_from(["voucher-cli", "address"]).unwrap();
        assert!(matches!(cli.command, Commands::UserAddress));

        let cli = Cli::try_parse_from(["voucher-cli", "cancel-or-fault", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::CancelOrFault { voucher_id } if voucher_id == U256::from(7u64)
        ));

        assert!(Cli::try_parse_from(["voucher-cli", "user-address"]).is_err());
    }
}
