//! Layered YAML + environment configuration (SPEC_FULL.md §6), grounded on
//! the `config`/`serde_path_to_error` loader pattern from the pack's
//! `world-id-relay` config module: a YAML file provides the base, and
//! `RELAYER__`-prefixed environment variables (double underscore as the
//! path separator) override individual fields for container deployments.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::relayer::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayerConfig {
    pub xrpl: XrplConfig,
    pub coreum: CoreumConfig,
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrplConfig {
    pub rpc_url: String,
    pub bridge_account: String,
    pub key_name: String,
    #[serde(default = "default::xrpl_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Two-phase ledger scanner knobs (SPEC_FULL.md §4.1, §9 `scanner:{...}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default::full_scan_enabled")]
    pub full_scan_enabled: bool,
    #[serde(default = "default::recent_scan_enabled")]
    pub recent_scan_enabled: bool,
    /// How many ledgers behind the startup tip the recent-scan phase starts
    /// from once the full scan (if any) is done.
    #[serde(default = "default::recent_scan_window")]
    pub recent_scan_window: u32,
    #[serde(default = "default::repeat_recent_scan")]
    pub repeat_recent_scan: bool,
    #[serde(default = "default::repeat_full_scan")]
    pub repeat_full_scan: bool,
    #[serde(default = "default::scanner_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default::xrpl_page_limit")]
    pub page_limit: u16,
}

impl ScannerConfig {
    pub fn page_limit(&self) -> u16 {
        self.page_limit
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            full_scan_enabled: default::full_scan_enabled(),
            recent_scan_enabled: default::recent_scan_enabled(),
            recent_scan_window: default::recent_scan_window(),
            repeat_recent_scan: default::repeat_recent_scan(),
            repeat_full_scan: default::repeat_full_scan(),
            retry_delay_ms: default::scanner_retry_delay_ms(),
            page_limit: default::xrpl_page_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreumConfig {
    pub grpc_url: String,
    pub chain_id: String,
    pub signer_account: String,
    pub signer_key_name: String,
    pub gas_price_denom: String,
    pub gas_price_amount: u128,
    #[serde(default = "default::gas_adjustment_percent")]
    pub gas_adjustment_percent: u64,
    #[serde(default = "default::gas_max_retries")]
    pub gas_max_retries: u32,
    /// Delay between out-of-gas retry attempts in `ContractClient::execute`,
    /// in milliseconds.
    #[serde(default = "default::out_of_gas_retry_delay_ms")]
    pub out_of_gas_retry_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub contract_address: String,
    #[serde(default = "default::registry_refresh_interval_secs")]
    pub registry_refresh_interval_secs: u64,
    #[serde(default = "default::min_ticket_threshold")]
    pub min_ticket_threshold: u32,
    /// Absolute ticket-pool size requested via `RecoverTickets` once the free
    /// count drops below `min_ticket_threshold` (SPEC_FULL.md §9's ticket
    /// allocation Open Question resolution: a target, not a delta).
    #[serde(default = "default::target_ticket_pool_size")]
    pub target_ticket_pool_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default::metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default::metrics_bind_addr")]
    pub bind_addr: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default::metrics_enabled(),
            bind_addr: default::metrics_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default::log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default::log_filter(),
            json: false,
        }
    }
}

mod default {
    pub fn xrpl_poll_interval_ms() -> u64 {
        2_000
    }
    pub fn xrpl_page_limit() -> u16 {
        200
    }
    pub fn gas_adjustment_percent() -> u64 {
        30
    }
    pub fn gas_max_retries() -> u32 {
        3
    }
    pub fn out_of_gas_retry_delay_ms() -> u64 {
        500
    }
    pub fn full_scan_enabled() -> bool {
        true
    }
    pub fn recent_scan_enabled() -> bool {
        true
    }
    pub fn recent_scan_window() -> u32 {
        256
    }
    pub fn repeat_recent_scan() -> bool {
        true
    }
    pub fn repeat_full_scan() -> bool {
        false
    }
    pub fn scanner_retry_delay_ms() -> u64 {
        2_000
    }
    pub fn registry_refresh_interval_secs() -> u64 {
        60
    }
    pub fn min_ticket_threshold() -> u32 {
        10
    }
    pub fn target_ticket_pool_size() -> u32 {
        200
    }
    pub fn metrics_enabled() -> bool {
        true
    }
    pub fn metrics_bind_addr() -> alloc::string::String {
        "0.0.0.0:9477".into()
    }
    pub fn log_filter() -> alloc::string::String {
        "info".into()
    }
}

impl RelayerConfig {
    /// Loads config from an optional YAML file, then overlays
    /// `RELAYER__`-prefixed environment variables (e.g.
    /// `RELAYER__XRPL__RPC_URL`).
    pub fn load(config_path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Yaml)
                    .required(true),
            );
        }
        let built = builder
            .add_source(
                config::Environment::with_prefix("RELAYER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        serde_path_to_error::deserialize(built).map_err(|e| ConfigError::Invalid {
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_yaml_with_defaults_filled_in() {
        let yaml = r#"
xrpl:
  rpc_url: "https://xrpl.example/rpc"
  bridge_account: "rBridgeAccount"
  key_name: "relayer-xrpl"
coreum:
  grpc_url: "https://coreum.example:9090"
  chain_id: "coreum-mainnet-1"
  signer_account: "core1signer"
  signer_key_name: "relayer-coreum"
  gas_price_denom: "ucore"
  gas_price_amount: 500000000
bridge:
  contract_address: "core1contractaddress"
"#;
        let built = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap();
        let config: RelayerConfig = serde_path_to_error::deserialize(built).unwrap();
        assert_eq!(config.xrpl.poll_interval_ms, 2_000);
        assert_eq!(config.bridge.min_ticket_threshold, 10);
        assert!(config.metrics.enabled);
    }
}
