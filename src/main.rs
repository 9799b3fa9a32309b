//! `arb-bridge`: one-shot L1 ⇄ L2 bridge scripts.
//!
//! ```text
//! arb-bridge [--config FILE] [--json] <deposit|withdraw|greet|balances|trace>
//! ```
//!
//! RPC endpoints and contract addresses come from the config file and the
//! environment (`L1RPC`, `L2RPC`, `INBOX_ADDRESS`, ...). The signing key is
//! read from `DEVNET_PRIVKEY`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use alloy::primitives::TxHash;
use clap::{Parser, Subcommand};
use tracing::Instrument;

use arb_bridge_demos::bridge::ArbBridge;
use arb_bridge_demos::chain::{BridgeResult, Wallet};
use arb_bridge_demos::config::{load_config, BridgeConfig};
use arb_bridge_demos::observability::{init_logging, run_span};
use arb_bridge_demos::scripts::{self, exit_status, write_report};

#[derive(Parser)]
#[command(name = "arb-bridge")]
#[command(about = "Demonstration scripts for the Arbitrum L1/L2 bridge", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deposit ETH from L1 into L2 and wait for the L2 credit
    Deposit {
        /// Amount in ether
        #[arg(long)]
        amount: Option<String>,
        /// Give up waiting on L2 after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Withdraw ETH from L2 back to L1
    Withdraw {
        /// Amount in ether
        #[arg(long)]
        amount: Option<String>,
    },
    /// Set the L2 greeting through a retryable ticket sent from L1
    Greet {
        /// New greeting
        #[arg(long)]
        greeting: Option<String>,
        /// Give up waiting on L2 after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Show the signer's balances on both layers
    Balances,
    /// Follow the Inbox messages of an L1 transaction onto L2
    Trace {
        /// L1 transaction hash
        l1_tx: TxHash,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Deposit { .. } => "deposit",
            Commands::Withdraw { .. } => "withdraw",
            Commands::Greet { .. } => "greet",
            Commands::Balances => "balances",
            Commands::Trace { .. } => "trace",
        }
    }

    fn needs_signer(&self) -> bool {
        !matches!(self, Commands::Trace { .. })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    init_logging(&config.observability.log_level);

    let span = run_span(cli.command.name());
    let result = run(&cli, &config).instrument(span).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Script failed");
        eprintln!("Error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}

async fn run(cli: &Cli, config: &BridgeConfig) -> BridgeResult<()> {
    // Resolve the signer before touching the network.
    let wallet = if cli.command.needs_signer() {
        Some(Wallet::from_env()?)
    } else {
        Wallet::from_env().ok()
    };

    match &cli.command {
        Commands::Deposit {
            amount,
            timeout_secs,
        } => {
            let params = scripts::deposit::DepositParams::from_config(
                config,
                amount.as_deref(),
                timeout_secs.map(Duration::from_secs),
            )?;
            let sdk = ArbBridge::connect(config, wallet).await?;
            emit(&scripts::deposit::run(&sdk, &params).await?, cli.json)
        }
        Commands::Withdraw { amount } => {
            let params = scripts::withdraw::WithdrawParams::from_config(config, amount.as_deref())?;
            let sdk = ArbBridge::connect(config, wallet).await?;
            emit(&scripts::withdraw::run(&sdk, &params).await?, cli.json)
        }
        Commands::Greet {
            greeting,
            timeout_secs,
        } => {
            let params = scripts::greeter::GreeterParams::from_config(
                config,
                greeting.clone(),
                timeout_secs.map(Duration::from_secs),
            )?;
            let sdk = ArbBridge::connect(config, wallet).await?;
            emit(&scripts::greeter::run(&sdk, &params).await?, cli.json)
        }
        Commands::Balances => {
            let sdk = ArbBridge::connect(config, wallet).await?;
            emit(&scripts::balances::run(&sdk).await?, cli.json)
        }
        Commands::Trace { l1_tx } => {
            let sdk = ArbBridge::connect(config, wallet).await?;
            emit(&scripts::trace::run(&sdk, *l1_tx).await?, cli.json)
        }
    }
}

fn emit<R: serde::Serialize + std::fmt::Display>(report: &R, json: bool) -> BridgeResult<()> {
    write_report(&mut std::io::stdout().lock(), report, json)
}
