//! Cross-chain data model shared by the scanner, observer, submitter and
//! contract client (SPEC_FULL.md §3).

use alloc::string::String;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// State of a registered token as tracked by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    Enabled,
    Disabled,
    Processing,
    Inactive,
}

/// An XRPL-originated token registered with the bridge. The sentinel
/// issuer/currency pair for XRP itself is represented by `issuer: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrplToken {
    pub issuer: Option<String>,
    pub currency: String,
    pub coreum_denom: String,
    pub state: TokenState,
    /// Number of fractional digits retained when bridging; may be negative,
    /// meaning whole multiples of `10^-sending_precision` are truncated too.
    pub sending_precision: i32,
    pub max_holding_amount: BigUint,
    pub bridging_fee: BigUint,
}

/// A Coreum-originated token registered with the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreumToken {
    pub denom: String,
    pub decimals: u32,
    pub xrpl_currency_representation: String,
    pub state: TokenState,
    pub sending_precision: i32,
    pub max_holding_amount: BigUint,
    pub bridging_fee: BigUint,
}

/// One member of the federated relayer set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayerSetMember {
    pub coreum_address: String,
    pub xrpl_address: String,
    pub xrpl_pub_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayerSet {
    pub members: alloc::vec::Vec<RelayerSetMember>,
    pub evidence_threshold: u32,
}

impl RelayerSet {
    pub fn quorum_reached(&self, signatures: usize) -> bool {
        signatures as u32 >= self.evidence_threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    AllocateTickets,
    TrustSet,
    CoreumToXrplTransfer,
    RotateKeys,
    UpdateXrplBaseFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Pending,
    Ready,
    AwaitingResult,
    Completed,
}

/// A contract-tracked pending operation awaiting relayer signatures and,
/// eventually, XRPL submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingOperation {
    pub id: u32,
    pub operation_type: OperationType,
    pub ticket_sequence: Option<u32>,
    pub account_sequence: Option<u32>,
    pub signing_pub_key: String,
    /// relayer xrpl address -> signature hex
    pub signatures: alloc::collections::BTreeMap<String, String>,
    pub status: OperationStatus,
    /// Operation-type-dependent payload, decoded by the submitter when it
    /// reconstructs the canonical XRPL transaction.
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionResult {
    Accepted,
    Rejected,
    Invalid,
}

/// Evidence submitted by a relayer to the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Evidence {
    XrplToCoreumTransfer {
        tx_hash: String,
        issuer: String,
        currency: String,
        amount: BigUint,
        recipient: String,
    },
    XrplTransactionResult {
        tx_hash: Option<String>,
        account_sequence: Option<u32>,
        ticket_sequence: Option<u32>,
        transaction_result: TransactionResult,
        operation_result: serde_json::Value,
    },
}

/// Relayer-local scan position, reconstructed on startup rather than
/// persisted (SPEC_FULL.md §3, "Scan cursor").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    pub last_processed_ledger_index: u32,
    pub full_scan_complete: bool,
}
