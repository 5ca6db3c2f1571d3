//! Process supervisor (SPEC_FULL.md §4.7): runs the observer and submitter
//! loops as independent tokio tasks under a shared root cancellation token,
//! restarting either one a bounded number of times if it returns an error,
//! and bringing the whole process down if a task exhausts its restarts or a
//! fatal error (e.g. `SignerError::KeyNotFound`) surfaces.

use alloc::string::String;
use alloc::sync::Arc;
use core::future::Future;
use tokio_util::sync::CancellationToken;

use crate::relayer::error::RelayerError;

/// Restarts a task up to `max_restarts` times with linear backoff, then
/// gives up and returns the last error. Cancellation always wins over
/// restart: a cancelled task returns `Ok(())` without consuming a retry.
pub struct Supervisor {
    root_token: CancellationToken,
    max_restarts: u32,
    backoff_base_ms: u64,
}

impl Supervisor {
    pub fn new(max_restarts: u32, backoff_base_ms: u64) -> Self {
        Self {
            root_token: CancellationToken::new(),
            max_restarts,
            backoff_base_ms,
        }
    }

    pub fn root_token(&self) -> CancellationToken {
        self.root_token.clone()
    }

    pub fn cancel_all(&self) {
        self.root_token.cancel();
    }

    /// Supervises a single named task: `make_task` is called again on each
    /// restart to build a fresh future (since a `JoinHandle`'s future can
    /// only be polled to completion once).
    pub async fn supervise<F, Fut>(&self, name: &str, mut make_task: F) -> Result<(), RelayerError>
    where
        F: FnMut(CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), RelayerError>>,
    {
        let mut attempt = 0;
        loop {
            let child_token = self.root_token.child_token();
            let result = make_task(child_token).await;

            if self.root_token.is_cancelled() {
                tracing::info!(task = name, "supervised task stopped: shutdown requested");
                return Ok(());
            }

            match result {
                Ok(()) => {
                    tracing::info!(task = name, "supervised task exited cleanly");
                    return Ok(());
                }
                Err(error) => {
                    attempt += 1;
                    tracing::error!(task = name, attempt, %error, "supervised task failed");
                    if attempt > self.max_restarts {
                        tracing::error!(task = name, "exhausted restart budget, giving up");
                        self.root_token.cancel();
                        return Err(error);
                    }
                    let backoff = self.backoff_base_ms.saturating_mul(attempt as u64);
                    tokio::time::sleep(tokio::time::Duration::from_millis(backoff)).await;
                }
            }
        }
    }
}

/// Runs `observer` and `submitter` side by side under one supervisor;
/// returns as soon as either one fails terminally or the root token is
/// cancelled (e.g. by a Ctrl-C handler installed at the CLI boundary).
pub async fn run_supervised<O, OFut, S, SFut>(
    supervisor: Arc<Supervisor>,
    observer_task: O,
    submitter_task: S,
) -> Result<(), RelayerError>
where
    O: FnMut(CancellationToken) -> OFut + Send + 'static,
    OFut: Future<Output = Result<(), RelayerError>> + Send,
    S: FnMut(CancellationToken) -> SFut + Send + 'static,
    SFut: Future<Output = Result<(), RelayerError>> + Send,
{
    let observer_supervisor = supervisor.clone();
    let submitter_supervisor = supervisor.clone();

    let observer_handle = tokio::spawn(async move {
        observer_supervisor.supervise("observer", observer_task).await
    });
    let submitter_handle = tokio::spawn(async move {
        submitter_supervisor.supervise("submitter", submitter_task).await
    });

    tokio::select! {
        result = observer_handle => {
            supervisor.cancel_all();
            result.map_err(|e| RelayerError::Config(crate::relayer::error::ConfigError::Load(e.to_string())))?
        }
        result = submitter_handle => {
            supervisor.cancel_all();
            result.map_err(|e| RelayerError::Config(crate::relayer::error::ConfigError::Load(e.to_string())))?
        }
    }
}

/// Installs a Ctrl-C handler that cancels the supervisor's root token,
/// giving both tasks a chance to observe cancellation and exit cleanly.
pub fn install_shutdown_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("received Ctrl-C, requesting shutdown");
            token.cancel();
        }
    });
}
