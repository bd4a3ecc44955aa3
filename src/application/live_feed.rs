use crate::domain::entities::trade_history::TradeHistory;
use crate::domain::error::AnalysisError;
use crate::domain::ports::trading_platform::{HistoryRange, TradingPlatform};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

pub struct LiveFeedUseCase {
    platform: Arc<dyn TradingPlatform>,
    /// The terminal holds one session at a time; runs queue here.
    session_lock: Arc<Mutex<()>>,
}

impl LiveFeedUseCase {
    pub fn new(platform: Arc<dyn TradingPlatform>) -> Self {
        Self {
            platform,
            session_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn platform_name(&self) -> &str {
        self.platform.name()
    }

    /// Account snapshot plus exit deals, oldest first.
    ///
    /// When `expected_account` is set and the terminal is logged into a
    /// different account this fails with `AccountMismatch`. Concurrent calls
    /// run one after another. Once initialized, the session is shut down on
    /// every path, including when the caller drops this future.
    pub async fn fetch(
        &self,
        expected_account: Option<u64>,
        range: HistoryRange,
    ) -> Result<TradeHistory, AnalysisError> {
        let lock = self.session_lock.clone().lock_owned().await;
        self.platform.initialize().await?;
        let session = Session::open(self.platform.clone(), lock);

        let outcome = self.fetch_connected(expected_account, range).await;
        session.close().await;
        outcome
    }

    async fn fetch_connected(
        &self,
        expected_account: Option<u64>,
        range: HistoryRange,
    ) -> Result<TradeHistory, AnalysisError> {
        let account = self.platform.account_info().await?;
        if let Some(expected) = expected_account {
            if account.login != expected {
                return Err(AnalysisError::AccountMismatch {
                    connected: account.login,
                    expected,
                });
            }
        }

        let all = self.platform.history_deals(range).await?;
        let fetched = all.len();
        let mut deals: Vec<_> = all.into_iter().filter(|d| d.entry.is_exit()).collect();
        deals.sort_by_key(|d| d.time);

        debug!(fetched, exits = deals.len(), "deal history filtered");
        info!(login = account.login, trades = deals.len(), "live history loaded");
        Ok(TradeHistory::Live { account, deals })
    }
}

/// An initialized terminal session. Holds the session lock until the
/// terminal has been shut down.
struct Session {
    platform: Arc<dyn TradingPlatform>,
    lock: Option<OwnedMutexGuard<()>>,
    open: bool,
}

impl Session {
    fn open(platform: Arc<dyn TradingPlatform>, lock: OwnedMutexGuard<()>) -> Self {
        Self {
            platform,
            lock: Some(lock),
            open: true,
        }
    }

    async fn close(mut self) {
        self.platform.shutdown().await;
        self.open = false;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        // Dropped mid-run: finish the shutdown in the background, still
        // holding the lock so the next run cannot start early.
        let platform = self.platform.clone();
        let lock = self.lock.take();
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    platform.shutdown().await;
                    debug!(platform = platform.name(), "abandoned session shut down");
                    drop(lock);
                });
            }
            Err(_) => warn!(
                platform = self.platform.name(),
                "session dropped outside a runtime, shutdown skipped"
            ),
        }
    }
}
