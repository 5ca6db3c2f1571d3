//! Ledger scanner (SPEC_FULL.md §4.1): walks the bridge XRPL account's
//! `account_tx` history so the observer sees every Payment exactly once, in
//! ledger order, and can resume after a restart without re-scanning from
//! genesis every time.
//!
//! Two phases, driven by `ScannerConfig`: a one-time **full scan** that pages
//! forward from the account's earliest ledger up to the index seen at
//! startup, and an ongoing **recent scan** that continues forward from
//! `upper_bound - recent_scan_window`. Both phases share the same pagination
//! loop; only the starting cursor and stop condition differ. A full scan
//! transitions into a recent scan once its range is exhausted (when both
//! phases are enabled); otherwise whichever phase is enabled runs on its own.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde_json::Value;

use crate::relayer::config::ScannerConfig;
use crate::relayer::error::ScannerError;
use crate::relayer::rpc::{AccountTxPage, AccountTxQuery, ScannedTransaction, XrplNodeClient};
use crate::relayer::types::ScanCursor;

/// Internal state machine position, matching SPEC_FULL.md §4.1's
/// `{Full(marker, upper_bound), Recent(ledger_index_min, marker)}` phases.
#[derive(Debug, Clone)]
enum ScanPhase {
    /// Backfilling `[genesis, upper_bound]`. `upper_bound` is `None` until
    /// the first `next_batch` call resolves it via `current_ledger_index`.
    Full {
        marker: Option<Value>,
        upper_bound: Option<u32>,
    },
    /// Tailing `[ledger_index_min, tip)` continuously.
    Recent {
        ledger_index_min: u32,
        marker: Option<Value>,
    },
    /// Neither phase is enabled, or a one-shot phase has run to completion.
    Idle,
}

pub struct LedgerScanner<C: XrplNodeClient> {
    client: C,
    bridge_account: String,
    cursor: ScanCursor,
    config: ScannerConfig,
    phase: ScanPhase,
}

impl<C: XrplNodeClient> LedgerScanner<C> {
    pub fn new(
        client: C,
        bridge_account: String,
        cursor: ScanCursor,
        config: ScannerConfig,
    ) -> Self {
        let phase = if !cursor.full_scan_complete && config.full_scan_enabled {
            ScanPhase::Full {
                marker: None,
                upper_bound: None,
            }
        } else if config.recent_scan_enabled {
            ScanPhase::Recent {
                ledger_index_min: cursor.last_processed_ledger_index,
                marker: None,
            }
        } else if config.full_scan_enabled && config.repeat_full_scan {
            ScanPhase::Full {
                marker: None,
                upper_bound: None,
            }
        } else {
            ScanPhase::Idle
        };
        Self {
            client,
            bridge_account,
            cursor,
            config,
            phase,
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// Fetches and returns the next batch of validated transactions newer
    /// than the current cursor, advancing the cursor monotonically. Returns
    /// an empty `Vec` (not an error) when the tip of the ledger has been
    /// reached, the node has not caught up to the requested range yet, or
    /// both phases are disabled/exhausted; callers should sleep and call
    /// again.
    pub async fn next_batch(&mut self) -> Result<Vec<ScannedTransaction>, ScannerError> {
        loop {
            let phase = core::mem::replace(&mut self.phase, ScanPhase::Idle);
            match phase {
                ScanPhase::Idle => return Ok(Vec::new()),
                ScanPhase::Full { marker, upper_bound } => {
                    match self.advance_full(marker, upper_bound).await? {
                        Some(batch) if !batch.is_empty() => return Ok(batch),
                        Some(_) => continue,
                        None => return Ok(Vec::new()),
                    }
                }
                ScanPhase::Recent {
                    ledger_index_min,
                    marker,
                } => match self.advance_recent(ledger_index_min, marker).await? {
                    Some(batch) if !batch.is_empty() => return Ok(batch),
                    Some(_) => continue,
                    None => return Ok(Vec::new()),
                },
            }
        }
    }

    /// True once the scanner has caught up through at least the ledger index
    /// that was current when the relayer started (the "full scan" phase is
    /// over and only newly-closed ledgers remain to be processed).
    pub fn is_caught_up(&self) -> bool {
        self.cursor.full_scan_complete
    }

    async fn fetch_page(
        &self,
        ledger_index_min: u32,
        marker: Option<Value>,
    ) -> Result<AccountTxPage, ScannerError> {
        self.client
            .account_tx(AccountTxQuery {
                account: self.bridge_account.clone(),
                ledger_index_min: Some(ledger_index_min),
                marker,
                forward: true,
                limit: self.config.page_limit(),
            })
            .await
    }

    /// Advances one page within the full-scan phase. Returns `None` if the
    /// caller should stop and wait (transient/unvalidated page), `Some(vec)`
    /// otherwise (possibly empty, meaning "page consumed, keep looping").
    async fn advance_full(
        &mut self,
        marker: Option<Value>,
        upper_bound: Option<u32>,
    ) -> Result<Option<Vec<ScannedTransaction>>, ScannerError> {
        let upper_bound = match upper_bound {
            Some(u) => u,
            None => self.client.current_ledger_index().await?,
        };

        let page = self
            .fetch_page(self.cursor.last_processed_ledger_index + 1, marker.clone())
            .await?;
        if !page.validated {
            self.phase = ScanPhase::Full {
                marker,
                upper_bound: Some(upper_bound),
            };
            return Ok(None);
        }

        let min_ledger_index = self.cursor.last_processed_ledger_index;
        let batch: Vec<_> = page
            .transactions
            .into_iter()
            .filter(|txn| txn.ledger_index > min_ledger_index && txn.ledger_index <= upper_bound)
            .collect();
        if let Some(last) = batch.iter().map(|t| t.ledger_index).max() {
            self.cursor.last_processed_ledger_index = last;
        }

        match page.marker {
            Some(next_marker) => {
                if Some(&next_marker) == marker.as_ref() {
                    return Err(ScannerError::StuckPagination);
                }
                self.phase = ScanPhase::Full {
                    marker: Some(next_marker),
                    upper_bound: Some(upper_bound),
                };
                Ok(Some(sorted(batch)))
            }
            None => {
                // Full-scan range exhausted.
                self.cursor.last_processed_ledger_index =
                    self.cursor.last_processed_ledger_index.max(upper_bound);
                self.cursor.full_scan_complete = true;
                self.phase = self.phase_after_full_scan(upper_bound);
                Ok(Some(sorted(batch)))
            }
        }
    }

    fn phase_after_full_scan(&self, upper_bound: u32) -> ScanPhase {
        if self.config.recent_scan_enabled {
            ScanPhase::Recent {
                ledger_index_min: upper_bound.saturating_sub(self.config.recent_scan_window),
                marker: None,
            }
        } else if self.config.repeat_full_scan {
            // No recent-scan phase to hand off to; keep the account covered
            // by re-running an (incremental, since the cursor already
            // advanced) full-range pass instead of going idle forever.
            ScanPhase::Full {
                marker: None,
                upper_bound: None,
            }
        } else {
            ScanPhase::Idle
        }
    }

    /// Advances one page within the recent-scan phase. Same `Option`
    /// convention as `advance_full`.
    async fn advance_recent(
        &mut self,
        ledger_index_min: u32,
        marker: Option<Value>,
    ) -> Result<Option<Vec<ScannedTransaction>>, ScannerError> {
        let effective_min = ledger_index_min.max(self.cursor.last_processed_ledger_index + 1);
        let page = self.fetch_page(effective_min, marker.clone()).await?;
        if !page.validated {
            self.phase = ScanPhase::Recent {
                ledger_index_min,
                marker,
            };
            return Ok(None);
        }

        let min_ledger_index = self.cursor.last_processed_ledger_index;
        let batch: Vec<_> = page
            .transactions
            .into_iter()
            .filter(|txn| txn.ledger_index > min_ledger_index)
            .collect();
        if let Some(last) = batch.iter().map(|t| t.ledger_index).max() {
            self.cursor.last_processed_ledger_index = last;
        }

        match page.marker {
            Some(next_marker) => {
                if Some(&next_marker) == marker.as_ref() {
                    return Err(ScannerError::StuckPagination);
                }
                self.phase = ScanPhase::Recent {
                    ledger_index_min,
                    marker: Some(next_marker),
                };
                Ok(Some(sorted(batch)))
            }
            None => {
                // Reached the tip of this pass.
                self.phase = if self.config.repeat_recent_scan {
                    ScanPhase::Recent {
                        ledger_index_min,
                        marker: None,
                    }
                } else {
                    ScanPhase::Idle
                };
                Ok(Some(sorted(batch)))
            }
        }
    }
}

fn sorted(mut batch: Vec<ScannedTransaction>) -> Vec<ScannedTransaction> {
    batch.sort_by_key(|t| t.ledger_index);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relayer::rpc::{AccountInfo, SubmitOutcome, TxLookup};
    use alloc::sync::Arc;
    use tokio::sync::Mutex;

    struct StubClient {
        pages: Arc<Mutex<Vec<AccountTxPage>>>,
        current_ledger_index: u32,
    }

    impl XrplNodeClient for StubClient {
        async fn account_tx(
            &self,
            _request: AccountTxQuery,
        ) -> Result<AccountTxPage, ScannerError> {
            let mut pages = self.pages.lock().await;
            if pages.is_empty() {
                return Ok(AccountTxPage {
                    transactions: Vec::new(),
                    marker: None,
                    validated: true,
                });
            }
            Ok(pages.remove(0))
        }

        async fn submit(&self, _tx_blob: &str) -> Result<SubmitOutcome, ScannerError> {
            unreachable!("not exercised by scanner tests")
        }

        async fn tx(&self, _hash: &str) -> Result<Option<TxLookup>, ScannerError> {
            unreachable!("not exercised by scanner tests")
        }

        async fn account_info(&self, _account: &str) -> Result<AccountInfo, ScannerError> {
            unreachable!("not exercised by scanner tests")
        }

        async fn current_ledger_index(&self) -> Result<u32, ScannerError> {
            Ok(self.current_ledger_index)
        }
    }

    fn txn(hash: &str, ledger_index: u32) -> ScannedTransaction {
        ScannedTransaction {
            hash: hash.to_string(),
            ledger_index,
            validated: true,
            tx_json: Value::Null,
            meta: Value::Null,
        }
    }

    fn full_scan_only_config() -> ScannerConfig {
        ScannerConfig {
            full_scan_enabled: true,
            recent_scan_enabled: false,
            recent_scan_window: 10,
            repeat_recent_scan: false,
            repeat_full_scan: false,
            retry_delay_ms: 1,
            page_limit: 200,
        }
    }

    #[tokio::test]
    async fn advances_cursor_to_highest_ledger_seen() {
        let pages = Arc::new(Mutex::new(alloc::vec![AccountTxPage {
            transactions: alloc::vec![txn("A", 10), txn("B", 12)],
            marker: None,
            validated: true,
        }]));
        let mut scanner = LedgerScanner::new(
            StubClient {
                pages,
                current_ledger_index: 12,
            },
            "rBridge".to_string(),
            ScanCursor {
                last_processed_ledger_index: 5,
                full_scan_complete: false,
            },
            full_scan_only_config(),
        );

        let batch = scanner.next_batch().await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(scanner.cursor().last_processed_ledger_index, 12);
        assert!(scanner.is_caught_up());
    }

    #[tokio::test]
    async fn repeated_marker_is_reported_as_stuck_pagination() {
        let marker = Value::from("same-marker");
        let pages = Arc::new(Mutex::new(alloc::vec![
            AccountTxPage {
                transactions: alloc::vec![txn("A", 10)],
                marker: Some(marker.clone()),
                validated: true,
            },
            AccountTxPage {
                transactions: alloc::vec![],
                marker: Some(marker),
                validated: true,
            },
        ]));
        let mut scanner = LedgerScanner::new(
            StubClient {
                pages,
                current_ledger_index: 100,
            },
            "rBridge".to_string(),
            ScanCursor {
                last_processed_ledger_index: 0,
                full_scan_complete: false,
            },
            full_scan_only_config(),
        );

        let err = scanner.next_batch().await.unwrap_err();
        assert!(matches!(err, ScannerError::StuckPagination));
    }

    #[tokio::test]
    async fn full_scan_hands_off_to_recent_scan_once_exhausted() {
        let pages = Arc::new(Mutex::new(alloc::vec![
            // Full-scan page: exhausts at ledger 50 (the startup tip).
            AccountTxPage {
                transactions: alloc::vec![txn("A", 20), txn("B", 50)],
                marker: None,
                validated: true,
            },
            // Recent-scan page: a new transaction beyond the startup tip.
            AccountTxPage {
                transactions: alloc::vec![txn("C", 60)],
                marker: None,
                validated: true,
            },
        ]));
        let mut scanner = LedgerScanner::new(
            StubClient {
                pages,
                current_ledger_index: 50,
            },
            "rBridge".to_string(),
            ScanCursor {
                last_processed_ledger_index: 0,
                full_scan_complete: false,
            },
            ScannerConfig {
                full_scan_enabled: true,
                recent_scan_enabled: true,
                recent_scan_window: 30,
                repeat_recent_scan: true,
                repeat_full_scan: false,
                retry_delay_ms: 1,
                page_limit: 200,
            },
        );

        let first = scanner.next_batch().await.unwrap();
        assert_eq!(first.len(), 2);
        assert!(scanner.is_caught_up());

        let second = scanner.next_batch().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].hash, "C");
        assert_eq!(scanner.cursor().last_processed_ledger_index, 60);
    }

    #[tokio::test]
    async fn both_phases_disabled_never_advances() {
        let pages = Arc::new(Mutex::new(alloc::vec![AccountTxPage {
            transactions: alloc::vec![txn("A", 10)],
            marker: None,
            validated: true,
        }]));
        let mut scanner = LedgerScanner::new(
            StubClient {
                pages,
                current_ledger_index: 10,
            },
            "rBridge".to_string(),
            ScanCursor {
                last_processed_ledger_index: 0,
                full_scan_complete: true,
            },
            ScannerConfig {
                full_scan_enabled: false,
                recent_scan_enabled: false,
                recent_scan_window: 10,
                repeat_recent_scan: false,
                repeat_full_scan: false,
                retry_delay_ms: 1,
                page_limit: 200,
            },
        );

        let batch = scanner.next_batch().await.unwrap();
        assert!(batch.is_empty());
    }
}
