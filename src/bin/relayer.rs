//! CLI entry point for the bridge relayer node (SPEC_FULL.md §6, "CLI exit
//! codes"). Subcommands: `start` runs the relayer, `keys` manages the
//! relayer's signing key in the OS keyring, `config init` emits a starter
//! YAML config, `version` prints build metadata.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use cosmrs::AccountId;
use tonic::transport::Channel;
use tracing_subscriber::EnvFilter;

use xrpl::relayer::config::RelayerConfig;
use xrpl::relayer::contract::{ContractClient, QueryMsg, XrplTokensResponse};
use xrpl::relayer::contract::client::GasAdjustment;
use xrpl::relayer::keyring::{InMemoryKeyringBackend, KeyringCache, OsKeyringBackend};
use xrpl::relayer::metrics::{spawn_metrics_server, RelayerMetrics};
use xrpl::relayer::observer::{TokenRegistry, XrplObserver};
use xrpl::relayer::rpc::JsonRpcNodeClient;
use xrpl::relayer::scanner::LedgerScanner;
use xrpl::relayer::submitter::Submitter;
use xrpl::relayer::supervisor::{install_shutdown_handler, run_supervised, Supervisor};
use xrpl::relayer::types::{ScanCursor, XrplToken};

#[derive(Parser)]
#[command(name = "relayer", version, about = "XRPL <-> Coreum bridge relayer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the relayer's observer and submitter loops until interrupted.
    Start {
        #[arg(long, env = "RELAYER_CONFIG")]
        config: PathBuf,
    },
    /// Manages the relayer's XRPL/Coreum signing key.
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
    /// Writes a starter configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Prints version information and exits.
    Version,
}

#[derive(Subcommand)]
enum KeysAction {
    Add {
        #[arg(long)]
        key_name: String,
        #[arg(long)]
        seed_hex: String,
    },
    List,
}

#[derive(Subcommand)]
enum ConfigAction {
    Init {
        #[arg(long, default_value = "relayer.yaml")]
        out: PathBuf,
    },
}

const EXIT_OK: i32 = 0;
const EXIT_CONFIG_ERROR: i32 = 2;
const EXIT_FATAL: i32 = 3;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => EXIT_OK,
        Err(CliError::Config(message)) => {
            eprintln!("configuration error: {message}");
            EXIT_CONFIG_ERROR
        }
        Err(CliError::Fatal(message)) => {
            eprintln!("fatal error: {message}");
            EXIT_FATAL
        }
    };
    std::process::exit(code);
}

enum CliError {
    Config(String),
    Fatal(String),
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Version => {
            println!("relayer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config {
            action: ConfigAction::Init { out },
        } => {
            std::fs::write(&out, STARTER_CONFIG)
                .map_err(|e| CliError::Fatal(e.to_string()))?;
            println!("wrote starter configuration to {}", out.display());
            Ok(())
        }
        Commands::Keys {
            action: KeysAction::Add { key_name, seed_hex },
        } => {
            let seed = hex::decode(seed_hex.trim())
                .map_err(|e| CliError::Config(format!("seed must be hex: {e}")))?;
            let entry = keyring::Entry::new("xrpl-bridge-relayer", &key_name)
                .map_err(|e| CliError::Fatal(e.to_string()))?;
            entry
                .set_password(&hex::encode(seed))
                .map_err(|e| CliError::Fatal(e.to_string()))?;
            println!("stored key '{key_name}' in the OS keyring");
            Ok(())
        }
        Commands::Keys {
            action: KeysAction::List,
        } => {
            println!("the OS keyring backend does not support enumeration; track key names in your config file");
            Ok(())
        }
        Commands::Start { config } => start(config).await,
    }
}

async fn start(config_path: PathBuf) -> Result<(), CliError> {
    let config = RelayerConfig::load(Some(&config_path))
        .map_err(|e| CliError::Config(e.to_string()))?;

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let metrics = Arc::new(RelayerMetrics::new());
    if config.metrics.enabled {
        spawn_metrics_server(metrics.clone(), &config.metrics.bind_addr);
    }

    let xrpl_backend = OsKeyringBackend {
        service: "xrpl-bridge-relayer".to_string(),
    };
    let xrpl_keyring = KeyringCache::new(xrpl_backend);
    let xrpl_key = xrpl_keyring
        .get(&config.xrpl.key_name)
        .await
        .map_err(|e| CliError::Fatal(e.to_string()))?;

    let coreum_backend = OsKeyringBackend {
        service: "xrpl-bridge-relayer".to_string(),
    };
    let coreum_keyring = KeyringCache::new(coreum_backend);
    let coreum_key = coreum_keyring
        .get(&config.coreum.signer_key_name)
        .await
        .map_err(|e| CliError::Fatal(e.to_string()))?;

    let contract_address: AccountId = config
        .bridge
        .contract_address
        .parse()
        .map_err(|_| CliError::Config("bridge.contract_address is not a valid bech32 address".into()))?;
    let signer_account_id: AccountId = config
        .coreum
        .signer_account
        .parse()
        .map_err(|_| CliError::Config("coreum.signer_account is not a valid bech32 address".into()))?;

    let channel = Channel::from_shared(config.coreum.grpc_url.clone())
        .map_err(|e| CliError::Config(e.to_string()))?
        .connect()
        .await
        .map_err(|e| CliError::Fatal(format!("failed to connect to coreum grpc endpoint: {e}")))?;

    let coreum_secret = coreum_key
        .secp256k1_secret_bytes()
        .map_err(|e| CliError::Fatal(e.to_string()))?;
    let signing_key = cosmrs::crypto::secp256k1::SigningKey::from_slice(&coreum_secret)
        .map_err(|e| CliError::Fatal(format!("invalid coreum signing key: {e}")))?;

    let contract = Arc::new(ContractClient::new(
        channel,
        contract_address,
        config.coreum.chain_id.clone(),
        cosmrs::Coin {
            denom: config
                .coreum
                .gas_price_denom
                .parse()
                .map_err(|_| CliError::Config("invalid gas_price_denom".into()))?,
            amount: config.coreum.gas_price_amount,
        },
        GasAdjustment {
            percent_over_estimate: config.coreum.gas_adjustment_percent,
            max_retries: config.coreum.gas_max_retries,
            retry_delay: std::time::Duration::from_millis(config.coreum.out_of_gas_retry_delay_ms),
        },
        signing_key,
        signer_account_id,
    ));

    let registry = Arc::new(RefreshingTokenRegistry::new());

    let supervisor = Arc::new(Supervisor::new(5, 500));
    install_shutdown_handler(supervisor.root_token());

    let observer_config = config.clone();
    let observer_metrics = metrics.clone();
    let observer_registry = registry.clone();
    let observer_contract = contract.clone();
    let observer_task = move |cancel: tokio_util::sync::CancellationToken| {
        let config = observer_config.clone();
        let metrics = observer_metrics.clone();
        let registry = observer_registry.clone();
        let contract = observer_contract.clone();
        async move {
            let rpc = JsonRpcNodeClient::new(config.xrpl.rpc_url.clone());
            let mut scanner = LedgerScanner::new(
                rpc,
                config.xrpl.bridge_account.clone(),
                ScanCursor {
                    last_processed_ledger_index: 0,
                    full_scan_complete: false,
                },
                config.xrpl.scanner.clone(),
            );
            while !cancel.is_cancelled() {
                if let Err(error) = registry.refresh(&contract).await {
                    tracing::warn!(%error, "failed to refresh token registry from contract");
                }

                let batch = scanner
                    .next_batch()
                    .await
                    .map_err(xrpl::relayer::error::ObserverError::Scanner)
                    .map_err(xrpl::relayer::error::RelayerError::Observer)?;
                let observer = XrplObserver::new(
                    config.xrpl.bridge_account.clone(),
                    registry.as_ref(),
                    &metrics,
                );
                for txn in &batch {
                    match observer
                        .decode(txn)
                        .map_err(xrpl::relayer::error::RelayerError::Observer)?
                    {
                        Some(transfer) => {
                            if let Err(error) = observer.submit_evidence(&contract, transfer).await {
                                tracing::warn!(%error, hash = %txn.hash, "failed to submit evidence for observed transfer");
                            }
                        }
                        None => {}
                    }
                }
                tokio::time::sleep(std::time::Duration::from_millis(
                    config.xrpl.poll_interval_ms,
                ))
                .await;
            }
            Ok(())
        }
    };

    let submitter_config = config.clone();
    let submitter_contract = contract.clone();
    let submitter_key = xrpl_key.clone();
    let submitter_metrics = metrics.clone();
    let submitter_task = move |cancel: tokio_util::sync::CancellationToken| {
        let config = submitter_config.clone();
        let contract = submitter_contract.clone();
        let key = submitter_key.clone();
        let metrics = submitter_metrics.clone();
        async move {
            while !cancel.is_cancelled() {
                let rpc = JsonRpcNodeClient::new(config.xrpl.rpc_url.clone());
                let submitter = Submitter::new(
                    rpc,
                    contract.as_ref(),
                    key.as_ref(),
                    metrics.as_ref(),
                    config.xrpl.bridge_account.clone(),
                    config.bridge.min_ticket_threshold,
                    config.bridge.target_ticket_pool_size,
                );
                if let Err(error) = submitter.run_once().await {
                    tracing::warn!(%error, "submitter pass failed");
                }
                tokio::time::sleep(std::time::Duration::from_millis(
                    config.xrpl.poll_interval_ms,
                ))
                .await;
            }
            Ok(())
        }
    };

    run_supervised(supervisor, observer_task, submitter_task)
        .await
        .map_err(|e| CliError::Fatal(e.to_string()))
}

/// A token registry refreshed from `QueryMsg::XrplTokens`/`CoreumTokens` on
/// an interval by a background task (wiring for that refresh loop lives
/// alongside the submitter's contract polling in a full deployment).
struct RefreshingTokenRegistry {
    xrpl_tokens: Mutex<BTreeMap<String, XrplToken>>,
}

impl RefreshingTokenRegistry {
    fn new() -> Self {
        Self {
            xrpl_tokens: Mutex::new(BTreeMap::new()),
        }
    }

    async fn refresh(&self, contract: &ContractClient) -> Result<(), String> {
        let response: XrplTokensResponse = contract
            .query(&QueryMsg::XrplTokens {
                offset: None,
                limit: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        let mut guard = self.xrpl_tokens.lock().unwrap();
        guard.clear();
        for token in response.tokens {
            let key = match &token.issuer {
                Some(issuer) => format!("{issuer}:{}", token.currency),
                None => token.currency.clone(),
            };
            guard.insert(key, token);
        }
        Ok(())
    }
}

impl TokenRegistry for RefreshingTokenRegistry {
    fn lookup(&self, issuer: Option<&str>, currency: &str) -> Option<XrplToken> {
        let key = match issuer {
            Some(issuer) => format!("{issuer}:{currency}"),
            None => currency.to_string(),
        };
        self.xrpl_tokens.lock().unwrap().get(&key).cloned()
    }
}

const STARTER_CONFIG: &str = r#"xrpl:
  rpc_url: "https://s.altnet.rippletest.net:51234"
  bridge_account: "rBridgeAccountXXXXXXXXXXXXXXXXXXXX"
  key_name: "relayer-xrpl"

coreum:
  grpc_url: "https://full-node.testnet-1.coreum.dev:9090"
  chain_id: "coreum-testnet-1"
  signer_account: "testcore1youraddresshere"
  signer_key_name: "relayer-coreum"
  gas_price_denom: "utestcore"
  gas_price_amount: 500000000

bridge:
  contract_address: "testcore1yourcontractaddresshere"

metrics:
  enabled: true
  bind_addr: "0.0.0.0:9477"

logging:
  filter: "info"
  json: false
"#;
