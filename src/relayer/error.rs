//! Error taxonomy for the bridge relayer.
//!
//! Mirrors the teacher library's own `thiserror_no_std::Error` pattern (see
//! `crate::transaction::exceptions` and the former CLI's `CliError`), rather
//! than introducing a second error-handling crate.

use alloc::string::String;
use thiserror_no_std::Error;

#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("XRPL RPC call failed: {0}")]
    TransientRpc(String),
    #[error("account_tx marker did not advance; possible server-side pagination bug")]
    StuckPagination,
}

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("scanner error: {0}")]
    Scanner(#[from] ScannerError),
    #[error("contract error: {0}")]
    Contract(#[from] ContractError),
    #[error("amount codec error: {0}")]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum SubmitterError {
    #[error("contract error: {0}")]
    Contract(#[from] ContractError),
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),
    #[error("amount codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("xrpl rpc error: {0}")]
    Client(#[from] ScannerError),
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("transient RPC failure: {0}")]
    TransientRpc(String),
    #[error("gas estimation failed after {attempts} attempts: {message}")]
    OutOfGas { attempts: u32, message: String },
    #[error("evidence already submitted by this relayer for this tx hash")]
    DuplicateEvidence,
    #[error("operation already processed")]
    AlreadyProcessed,
    #[error("bridge is halted")]
    ContractHalted,
    #[error("unexpected null response from simulate/broadcast")]
    NilResponse,
    #[error("malformed contract response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("amount is not a valid XRPL amount: {0}")]
    InvalidXrplAmount(String),
    #[error("amount has more fractional digits than sending_precision {sending_precision} allows")]
    PrecisionLoss { sending_precision: i32 },
    #[error("token (issuer={issuer}, currency={currency}) is not registered")]
    UnregisteredToken { issuer: String, currency: String },
    #[error("amount exceeds max_holding_amount")]
    MaxHoldingExceeded,
    #[error("memo did not decode to a valid Coreum address")]
    MalformedMemo,
}

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("signature does not verify against the declared public key")]
    SignatureMismatch,
    #[error("key not found in keyring: {0}")]
    KeyNotFound(String),
    #[error("bip32 derivation failed: {0}")]
    Derivation(String),
    #[error("xrpl core error: {0}")]
    Core(#[from] crate::core::exceptions::XRPLCoreException),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),
    #[error("invalid configuration at {path}: {message}")]
    Invalid { path: String, message: String },
}

/// The crate-wide error assembled at the process boundary (supervisor / CLI).
#[derive(Debug, Error)]
pub enum RelayerError {
    #[error("{0}")]
    Scanner(#[from] ScannerError),
    #[error("{0}")]
    Observer(#[from] ObserverError),
    #[error("{0}")]
    Submitter(#[from] SubmitterError),
    #[error("{0}")]
    Contract(#[from] ContractError),
    #[error("{0}")]
    Codec(#[from] CodecError),
    #[error("{0}")]
    Signer(#[from] SignerError),
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl ContractError {
    /// Transient failures are retried in place by the caller's loop;
    /// everything else either terminates the operation or the process.
    pub fn is_transient(&self) -> bool {
        matches!(self, ContractError::TransientRpc(_) | ContractError::OutOfGas { .. })
    }
}
