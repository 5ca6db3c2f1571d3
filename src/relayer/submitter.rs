//! XRPL transaction submitter (SPEC_FULL.md §4.3): drives the contract's
//! pending-operation queue through `Pending -> Ready -> AwaitingResult ->
//! Completed`, signing with this relayer's key, assembling the final
//! multi-signed blob once quorum is reached, submitting it to XRPL, and
//! reporting the outcome back to the contract as
//! `Evidence::XrplTransactionResult`.
//!
//! Transaction payloads are carried as `serde_json::Value` end to end: the
//! teacher's `core::binarycodec::encode`/`encode_for_multisigning` only
//! require `T: Serialize`, which `serde_json::Value` already satisfies, so
//! the submitter never needs to reconstruct one of the library's typed
//! `Transaction` structs for an operation type it does not otherwise care
//! about the shape of.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde_json::{json, Value};

use crate::core::binarycodec;
use crate::relayer::contract::{
    AvailableTicketsResponse, ConfigResponse, ContractApi, ExecuteMsg, PendingOperationsResponse,
    QueryMsg,
};
use crate::relayer::error::SubmitterError;
use crate::relayer::metrics::RelayerMetrics;
use crate::relayer::rpc::XrplNodeClient;
use crate::relayer::signer::DerivedKey;
use crate::relayer::types::{
    Evidence, OperationStatus, PendingOperation, TransactionResult as XrplEngineOutcome,
};

pub struct Submitter<'a, C: XrplNodeClient, T: ContractApi> {
    rpc: C,
    contract: &'a T,
    key: &'a DerivedKey,
    metrics: &'a RelayerMetrics,
    bridge_account: String,
    min_ticket_threshold: u32,
    target_ticket_pool_size: u32,
}

impl<'a, C: XrplNodeClient, T: ContractApi> Submitter<'a, C, T> {
    pub fn new(
        rpc: C,
        contract: &'a T,
        key: &'a DerivedKey,
        metrics: &'a RelayerMetrics,
        bridge_account: String,
        min_ticket_threshold: u32,
        target_ticket_pool_size: u32,
    ) -> Self {
        Self {
            rpc,
            contract,
            key,
            metrics,
            bridge_account,
            min_ticket_threshold,
            target_ticket_pool_size,
        }
    }

    /// One pass over the contract's pending-operation queue: sign anything
    /// unsigned by this relayer, submit anything that has reached quorum,
    /// and warn if the ticket pool is running low.
    pub async fn run_once(&self) -> Result<(), SubmitterError> {
        self.check_ticket_pool().await?;

        let pending: PendingOperationsResponse = self
            .contract
            .query(&QueryMsg::PendingOperations {})
            .await
            .map_err(SubmitterError::Contract)?;
        let config: ConfigResponse = self
            .contract
            .query(&QueryMsg::Config {})
            .await
            .map_err(SubmitterError::Contract)?;

        for operation in pending.operations {
            match operation.status {
                OperationStatus::Pending => {
                    self.sign_operation(&operation, config.xrpl_base_fee, config.relayers.members.len()).await?
                }
                OperationStatus::Ready => {
                    if config.relayers.quorum_reached(operation.signatures.len()) {
                        self.submit_operation(&operation, config.xrpl_base_fee, config.relayers.members.len())
                            .await?;
                    }
                }
                OperationStatus::AwaitingResult | OperationStatus::Completed => {}
            }
        }
        Ok(())
    }

    /// Requests a ticket top-up once the free-ticket count drops below
    /// `min_ticket_threshold`, per SPEC_FULL.md §4.3 step 5: reads the bridge
    /// account's current `account_sequence` from `account_info` and forwards
    /// it to the contract via `RecoverTickets`, along with the absolute
    /// target pool size (the Open Question resolution in DESIGN.md — not a
    /// delta on top of the current free-ticket count).
    async fn check_ticket_pool(&self) -> Result<(), SubmitterError> {
        let tickets: AvailableTicketsResponse = self
            .contract
            .query(&QueryMsg::AvailableTickets {})
            .await
            .map_err(SubmitterError::Contract)?;
        if (tickets.tickets.len() as u32) < self.min_ticket_threshold {
            tracing::warn!(
                remaining = tickets.tickets.len(),
                threshold = self.min_ticket_threshold,
                "xrpl ticket pool is running low; requesting a ticket top-up"
            );
            let account_info = self
                .rpc
                .account_info(&self.bridge_account)
                .await
                .map_err(SubmitterError::Client)?;
            self.contract
                .execute(&ExecuteMsg::RecoverTickets {
                    account_sequence: account_info.sequence,
                    number_of_tickets: self.target_ticket_pool_size,
                })
                .await
                .map_err(SubmitterError::Contract)?;
        }
        Ok(())
    }

    /// Signs the operation's canonical (unsigned) transaction for
    /// multi-signing and submits the signature to the contract.
    async fn sign_operation(
        &self,
        operation: &PendingOperation,
        xrpl_base_fee: u64,
        relayer_count: usize,
    ) -> Result<(), SubmitterError> {
        if operation.signatures.contains_key(&self.key.xrpl_address) {
            return Ok(());
        }

        let unsigned_tx =
            canonical_tx_json(operation, &self.key.public_key_hex, xrpl_base_fee, relayer_count)?;
        let signing_blob = binarycodec::encode_for_multisigning(
            &unsigned_tx,
            Cow::from(self.key.xrpl_address.as_str()),
        )
        .map_err(|e| SubmitterError::Codec(crate::relayer::error::CodecError::InvalidXrplAmount(
            e.to_string(),
        )))?;
        let signature = self
            .key
            .sign_blob(&signing_blob)
            .map_err(SubmitterError::Signer)?;

        self.contract
            .execute(&ExecuteMsg::SaveSignature {
                operation_id: operation.id,
                operation_version: 0,
                signature,
            })
            .await
            .map_err(SubmitterError::Contract)?;
        self.metrics
            .operation_signed(operation_type_label(operation));
        Ok(())
    }

    /// Assembles the final multi-signed blob from the contract's collected
    /// signatures and submits it to XRPL, then reports the result back to
    /// the contract as evidence.
    async fn submit_operation(
        &self,
        operation: &PendingOperation,
        xrpl_base_fee: u64,
        relayer_count: usize,
    ) -> Result<(), SubmitterError> {
        let unsigned_tx = canonical_tx_json(
            operation,
            &operation.signing_pub_key,
            xrpl_base_fee,
            relayer_count,
        )?;
        let unsorted: Vec<crate::models::transactions::Signer> = operation
            .signatures
            .iter()
            .map(|(account, signature)| crate::models::transactions::Signer {
                account: account.clone(),
                txn_signature: signature.clone(),
                signing_pub_key: self.key.public_key_hex.clone(),
            })
            .collect();
        let signers: Vec<Value> = crate::relayer::signer::sort_signers_by_account(unsorted)
            .into_iter()
            .map(|s| {
                json!({
                    "Signer": {
                        "Account": s.account,
                        "TxnSignature": s.txn_signature,
                        "SigningPubKey": s.signing_pub_key,
                    }
                })
            })
            .collect();

        let mut signed_tx = unsigned_tx;
        signed_tx["SigningPubKey"] = json!("");
        signed_tx["Signers"] = json!(signers);

        let tx_blob = binarycodec::encode(&signed_tx).map_err(|e| {
            SubmitterError::Codec(crate::relayer::error::CodecError::InvalidXrplAmount(
                e.to_string(),
            ))
        })?;

        let outcome = self.rpc.submit(&tx_blob).await.map_err(SubmitterError::Client)?;
        self.metrics.xrpl_submit_result(&outcome.engine_result);

        let result = classify_engine_result(&outcome.engine_result);
        let evidence = Evidence::XrplTransactionResult {
            tx_hash: None,
            account_sequence: operation.account_sequence,
            ticket_sequence: operation.ticket_sequence,
            transaction_result: result,
            operation_result: json!({ "engine_result": outcome.engine_result }),
        };
        self.contract
            .execute(&ExecuteMsg::SaveEvidence { evidence })
            .await
            .map_err(SubmitterError::Contract)?;
        Ok(())
    }
}

fn operation_type_label(operation: &PendingOperation) -> &'static str {
    match operation.operation_type {
        crate::relayer::types::OperationType::AllocateTickets => "allocate_tickets",
        crate::relayer::types::OperationType::TrustSet => "trust_set",
        crate::relayer::types::OperationType::CoreumToXrplTransfer => "coreum_to_xrpl_transfer",
        crate::relayer::types::OperationType::RotateKeys => "rotate_keys",
        crate::relayer::types::OperationType::UpdateXrplBaseFee => "update_xrpl_base_fee",
    }
}

/// Builds the canonical (pre-signature) XRPL transaction JSON for an
/// operation from its contract-stored payload, filling in the shared
/// `SigningPubKey`/`Sequence`/`Fee` fields every multi-signed bridge
/// transaction needs.
///
/// `Fee` follows the teacher's own
/// `asynch::transaction::calculate_fee_per_transaction_type` formula,
/// `base_fee + net_fee * (signers_count + 1)`, reimplemented over plain
/// integers here since operations travel as `serde_json::Value` rather than
/// one of the library's typed `Transaction`s bound to its (unfinished)
/// async client trait.
fn canonical_tx_json(
    operation: &PendingOperation,
    signing_pub_key: &str,
    xrpl_base_fee: u64,
    relayer_count: usize,
) -> Result<Value, SubmitterError> {
    let mut tx = operation.payload.clone();
    if !tx.is_object() {
        return Err(SubmitterError::Codec(
            crate::relayer::error::CodecError::MalformedMemo,
        ));
    }
    tx["SigningPubKey"] = json!(signing_pub_key);
    tx["Fee"] = json!(multisign_fee(xrpl_base_fee, relayer_count).to_string());
    if let Some(sequence) = operation.account_sequence {
        tx["Sequence"] = json!(sequence);
    }
    if let Some(ticket) = operation.ticket_sequence {
        tx["TicketSequence"] = json!(ticket);
        tx["Sequence"] = json!(0);
    }
    Ok(tx)
}

/// `base_fee + net_fee * (signers_count + 1)`, drops.
fn multisign_fee(xrpl_base_fee: u64, relayer_count: usize) -> u64 {
    xrpl_base_fee + xrpl_base_fee * (relayer_count as u64 + 1)
}

fn classify_engine_result(engine_result: &str) -> XrplEngineOutcome {
    match engine_result.get(0..3) {
        Some("tes") => XrplEngineOutcome::Accepted,
        Some("tem") | Some("tef") => XrplEngineOutcome::Invalid,
        _ => XrplEngineOutcome::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;

    #[test]
    fn classifies_tes_as_accepted_tec_and_tel_as_rejected_tem_as_invalid() {
        assert!(matches!(classify_engine_result("tesSUCCESS"), XrplEngineOutcome::Accepted));
        assert!(matches!(classify_engine_result("tecPATH_PARTIAL"), XrplEngineOutcome::Rejected));
        assert!(matches!(classify_engine_result("temBAD_FEE"), XrplEngineOutcome::Invalid));
        assert!(matches!(classify_engine_result("telFAILED"), XrplEngineOutcome::Rejected));
    }

    #[test]
    fn canonical_tx_json_prefers_ticket_sequence_over_account_sequence() {
        let operation = PendingOperation {
            id: 1,
            operation_type: crate::relayer::types::OperationType::CoreumToXrplTransfer,
            ticket_sequence: Some(42),
            account_sequence: Some(7),
            signing_pub_key: "AA".to_string(),
            signatures: BTreeMap::new(),
            status: OperationStatus::Pending,
            payload: json!({ "TransactionType": "Payment" }),
        };
        let tx = canonical_tx_json(&operation, "AA", 10, 3).unwrap();
        assert_eq!(tx["TicketSequence"], json!(42));
        assert_eq!(tx["Sequence"], json!(0));
    }

    #[test]
    fn multisign_fee_matches_base_plus_net_times_signers_plus_one() {
        assert_eq!(multisign_fee(10, 3), 10 + 10 * 4);
    }

    use crate::relayer::contract::BridgeState;
    use crate::relayer::rpc::{AccountInfo, AccountTxPage, AccountTxQuery, SubmitOutcome, TxLookup};
    use crate::relayer::types::{RelayerSet, RelayerSetMember};
    use serde::de::DeserializeOwned;
    use tokio::sync::Mutex;

    /// Drives `ContractApi` off canned, in-memory responses keyed by the
    /// externally-tagged JSON shape `ExecuteMsg`/`QueryMsg` serialize to
    /// (`{"variant_name": {...}}`), recording every executed message for
    /// assertions, the same round-trip-through-JSON shape the real
    /// `ContractClient` uses against the live contract.
    struct MockContract {
        pending: PendingOperationsResponse,
        config: ConfigResponse,
        tickets: AvailableTicketsResponse,
        executed: Mutex<Vec<Value>>,
    }

    impl MockContract {
        fn variant_key(value: &Value) -> String {
            value
                .as_object()
                .and_then(|o| o.keys().next())
                .cloned()
                .unwrap_or_default()
        }
    }

    impl ContractApi for MockContract {
        async fn query<Q: serde::Serialize + Send + Sync, R: DeserializeOwned>(
            &self,
            msg: &Q,
        ) -> Result<R, crate::relayer::error::ContractError> {
            let value = serde_json::to_value(msg).unwrap();
            let response = match Self::variant_key(&value).as_str() {
                "pending_operations" => serde_json::to_value(&self.pending).unwrap(),
                "config" => serde_json::to_value(&self.config).unwrap(),
                "available_tickets" => serde_json::to_value(&self.tickets).unwrap(),
                other => panic!("unexpected query in MockContract: {other}"),
            };
            Ok(serde_json::from_value(response).unwrap())
        }

        async fn execute<M: serde::Serialize + Send + Sync>(
            &self,
            msg: &M,
        ) -> Result<String, crate::relayer::error::ContractError> {
            self.executed.lock().await.push(serde_json::to_value(msg).unwrap());
            Ok("MOCKHASH".to_string())
        }
    }

    struct MockRpc {
        account_info: AccountInfo,
    }

    impl XrplNodeClient for MockRpc {
        async fn account_tx(
            &self,
            _request: AccountTxQuery,
        ) -> Result<AccountTxPage, crate::relayer::error::ScannerError> {
            unreachable!("not exercised by submitter tests")
        }

        async fn submit(
            &self,
            _tx_blob: &str,
        ) -> Result<SubmitOutcome, crate::relayer::error::ScannerError> {
            Ok(SubmitOutcome {
                engine_result: "tesSUCCESS".to_string(),
                engine_result_message: "".to_string(),
                accepted: true,
            })
        }

        async fn tx(
            &self,
            _hash: &str,
        ) -> Result<Option<TxLookup>, crate::relayer::error::ScannerError> {
            unreachable!("not exercised by submitter tests")
        }

        async fn account_info(
            &self,
            _account: &str,
        ) -> Result<AccountInfo, crate::relayer::error::ScannerError> {
            Ok(self.account_info.clone())
        }

        async fn current_ledger_index(&self) -> Result<u32, crate::relayer::error::ScannerError> {
            unreachable!("not exercised by submitter tests")
        }
    }

    fn relayer_set(members: usize, threshold: u32) -> RelayerSet {
        RelayerSet {
            members: (0..members)
                .map(|i| RelayerSetMember {
                    coreum_address: alloc::format!("core1member{i}"),
                    xrpl_address: alloc::format!("rMember{i}"),
                    xrpl_pub_key: alloc::format!("PUB{i}"),
                })
                .collect(),
            evidence_threshold: threshold,
        }
    }

    #[tokio::test]
    async fn run_once_signs_pending_and_submits_ready_operations_against_mock_contract() {
        let key = crate::relayer::signer::derive_key(&[9u8; 32]).unwrap();

        let pending_operation = PendingOperation {
            id: 1,
            operation_type: crate::relayer::types::OperationType::CoreumToXrplTransfer,
            ticket_sequence: Some(10),
            account_sequence: None,
            signing_pub_key: key.public_key_hex.clone(),
            signatures: BTreeMap::new(),
            status: OperationStatus::Pending,
            payload: json!({ "TransactionType": "Payment" }),
        };
        let ready_operation = PendingOperation {
            id: 2,
            operation_type: crate::relayer::types::OperationType::CoreumToXrplTransfer,
            ticket_sequence: Some(11),
            account_sequence: None,
            signing_pub_key: key.public_key_hex.clone(),
            signatures: {
                let mut sigs = BTreeMap::new();
                sigs.insert(key.xrpl_address.clone(), "AABBCC".to_string());
                sigs
            },
            status: OperationStatus::Ready,
            payload: json!({ "TransactionType": "Payment" }),
        };

        let contract = MockContract {
            pending: PendingOperationsResponse {
                operations: alloc::vec![pending_operation, ready_operation],
            },
            config: ConfigResponse {
                relayers: relayer_set(1, 1),
                bridge_state: BridgeState::Active,
                xrpl_base_fee: 10,
            },
            tickets: AvailableTicketsResponse {
                tickets: (1..=50).collect(),
            },
            executed: Mutex::new(Vec::new()),
        };
        let rpc = MockRpc {
            account_info: AccountInfo {
                sequence: 1,
                ticket_count: 50,
            },
        };
        let metrics = RelayerMetrics::new();

        let submitter = Submitter::new(
            rpc,
            &contract,
            &key,
            &metrics,
            "rBridge".to_string(),
            10,
            200,
        );
        submitter.run_once().await.unwrap();

        let executed = contract.executed.lock().await;
        assert_eq!(executed.len(), 2, "expected one SaveSignature and one SaveEvidence");
        assert!(executed.iter().any(|m| has_top_level_key(m, "save_signature")));
        assert!(executed.iter().any(|m| has_top_level_key(m, "save_evidence")));
    }

    fn has_top_level_key(value: &Value, key: &str) -> bool {
        value.as_object().map(|o| o.contains_key(key)).unwrap_or(false)
    }

    #[tokio::test]
    async fn check_ticket_pool_requests_recover_tickets_below_threshold() {
        let key = crate::relayer::signer::derive_key(&[9u8; 32]).unwrap();

        let contract = MockContract {
            pending: PendingOperationsResponse { operations: Vec::new() },
            config: ConfigResponse {
                relayers: relayer_set(1, 1),
                bridge_state: BridgeState::Active,
                xrpl_base_fee: 10,
            },
            tickets: AvailableTicketsResponse { tickets: alloc::vec![1, 2, 3] },
            executed: Mutex::new(Vec::new()),
        };
        let rpc = MockRpc {
            account_info: AccountInfo {
                sequence: 42,
                ticket_count: 3,
            },
        };
        let metrics = RelayerMetrics::new();

        let submitter = Submitter::new(
            rpc,
            &contract,
            &key,
            &metrics,
            "rBridge".to_string(),
            10,
            200,
        );
        submitter.run_once().await.unwrap();

        let executed = contract.executed.lock().await;
        assert_eq!(executed.len(), 1);
        let msg = &executed[0];
        assert!(has_top_level_key(msg, "recover_tickets"));
        assert_eq!(msg["recover_tickets"]["account_sequence"], json!(42));
        assert_eq!(msg["recover_tickets"]["number_of_tickets"], json!(200));
    }

    #[tokio::test]
    async fn check_ticket_pool_does_not_fire_above_threshold() {
        let key = crate::relayer::signer::derive_key(&[9u8; 32]).unwrap();

        let contract = MockContract {
            pending: PendingOperationsResponse { operations: Vec::new() },
            config: ConfigResponse {
                relayers: relayer_set(1, 1),
                bridge_state: BridgeState::Active,
                xrpl_base_fee: 10,
            },
            tickets: AvailableTicketsResponse { tickets: (1..=50).collect() },
            executed: Mutex::new(Vec::new()),
        };
        let rpc = MockRpc {
            account_info: AccountInfo {
                sequence: 42,
                ticket_count: 50,
            },
        };
        let metrics = RelayerMetrics::new();

        let submitter = Submitter::new(
            rpc,
            &contract,
            &key,
            &metrics,
            "rBridge".to_string(),
            10,
            200,
        );
        submitter.run_once().await.unwrap();

        assert!(contract.executed.lock().await.is_empty());
    }
}
