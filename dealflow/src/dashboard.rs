use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use dealflow_core::{DealflowError, IpoRecord, Snapshot};

use crate::Dealflow;

/// Message shown when the first fetch cycle fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Message shown when a manual refresh fails.
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh data. Please try again.";

/// What the dashboard currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// A fetch cycle is in flight and nothing is displayed yet.
    Loading,
    /// The last fetch cycle succeeded.
    Ready(Arc<Snapshot>),
    /// The last fetch cycle failed; no stale data is kept.
    Failed {
        /// User-facing message.
        message: String,
        /// Underlying cause.
        error: DealflowError,
    },
}

impl DashboardState {
    /// Snapshot when `Ready`.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            Self::Ready(s) => Some(s),
            _ => None,
        }
    }

    /// True while a fetch cycle is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Clone, Copy)]
enum Cycle {
    Load,
    Refresh,
}

impl Cycle {
    const fn failure_message(self) -> &'static str {
        match self {
            Self::Load => LOAD_FAILED_MESSAGE,
            Self::Refresh => REFRESH_FAILED_MESSAGE,
        }
    }
}

struct Inner {
    state: DashboardState,
    last_updated: Option<DateTime<Utc>>,
}

/// Puts back the pre-cycle state if a cycle is dropped while still `Loading`.
struct RestoreOnCancel<'a> {
    inner: &'a RwLock<Inner>,
    previous: Option<DashboardState>,
}

impl RestoreOnCancel<'_> {
    fn disarm(&mut self) {
        self.previous = None;
    }
}

impl Drop for RestoreOnCancel<'_> {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        // Cycles hold the serial lock until this runs, so only a reader can contend.
        if let Ok(mut inner) = self.inner.try_write()
            && inner.state.is_loading()
        {
            inner.state = previous;
        }
    }
}

/// Holds the current dashboard state and drives fetch cycles through a [`Dealflow`].
///
/// A cycle replaces the whole state: success swaps in a new snapshot, failure
/// drops the old one. Cycles are serialized, so two concurrent refreshes
/// never interleave their results.
pub struct Dashboard {
    dealflow: Arc<Dealflow>,
    inner: RwLock<Inner>,
    cycle: Mutex<()>,
}

impl Dashboard {
    /// New dashboard in the `Loading` state. Nothing is fetched until [`load`](Self::load).
    #[must_use]
    pub fn new(dealflow: Arc<Dealflow>) -> Self {
        Self {
            dealflow,
            inner: RwLock::new(Inner {
                state: DashboardState::Loading,
                last_updated: None,
            }),
            cycle: Mutex::new(()),
        }
    }

    /// Run the initial fetch cycle.
    ///
    /// Dropping the returned future before it completes puts back the state
    /// the dashboard showed before the cycle started.
    pub async fn load(&self) -> DashboardState {
        self.run_cycle(Cycle::Load).await
    }

    /// Re-run the fetch cycle on user request.
    ///
    /// Cancellation behaves as for [`load`](Self::load).
    pub async fn refresh(&self) -> DashboardState {
        self.run_cycle(Cycle::Refresh).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dealflow::dashboard::cycle",
            skip(self, cycle),
            fields(refresh = matches!(cycle, Cycle::Refresh)),
        )
    )]
    async fn run_cycle(&self, cycle: Cycle) -> DashboardState {
        let _serial = self.cycle.lock().await;

        let previous = std::mem::replace(
            &mut self.inner.write().await.state,
            DashboardState::Loading,
        );
        let mut restore = RestoreOnCancel {
            inner: &self.inner,
            previous: Some(previous),
        };

        let outcome = self.dealflow.fetch_snapshot().await;

        let mut inner = self.inner.write().await;
        let next = match outcome {
            Ok(snapshot) => {
                inner.last_updated = Some(snapshot.fetched_at());
                #[cfg(feature = "tracing")]
                tracing::info!(
                    ipos = snapshot.ipos().len(),
                    angels = snapshot.angels().len(),
                    "dashboard ready"
                );
                DashboardState::Ready(Arc::new(snapshot))
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(error = %error, "{}", cycle.failure_message());
                DashboardState::Failed {
                    message: cycle.failure_message().to_string(),
                    error,
                }
            }
        };
        inner.state = next.clone();
        restore.disarm();
        next
    }

    /// Current state.
    pub async fn state(&self) -> DashboardState {
        self.inner.read().await.state.clone()
    }

    /// Current snapshot, only while `Ready`.
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.inner.read().await.state.snapshot().cloned()
    }

    /// Time of the last successful fetch cycle. Survives later failures.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_updated
    }

    /// Company preselected by the detail view: the first IPO of the current snapshot.
    pub async fn default_selection(&self) -> Option<IpoRecord> {
        self.snapshot()
            .await
            .and_then(|s| s.default_selection().cloned())
    }
}
