use chrono::Utc;
use dealflow_core::{AngelRecord, DealflowError, IpoRecord, RecordKind, Snapshot};

use crate::Dealflow;
use crate::core::with_request_deadline;

impl Dealflow {
    /// Fetch the upcoming-IPO list.
    ///
    /// Capable sources are tried in priority order with the per-source timeout;
    /// the first complete list wins.
    ///
    /// # Errors
    /// Returns `AllSourcesTimedOut` when every attempt timed out, otherwise
    /// `AllSourcesFailed` with the tagged per-source errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "dealflow::router", skip(self))
    )]
    pub async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError> {
        self.fetch_kind(RecordKind::Ipo, |s| {
            s.as_ipo_source()?;
            Some(async move {
                match s.as_ipo_source() {
                    Some(p) => p.ipo_records().await,
                    None => Err(DealflowError::source(
                        s.name(),
                        "missing ipo capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Fetch the angel-investment list.
    ///
    /// Same routing rules as [`Dealflow::ipo_records`].
    ///
    /// # Errors
    /// Returns `AllSourcesTimedOut` when every attempt timed out, otherwise
    /// `AllSourcesFailed` with the tagged per-source errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "dealflow::router", skip(self))
    )]
    pub async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError> {
        self.fetch_kind(RecordKind::Angel, |s| {
            s.as_angel_source()?;
            Some(async move {
                match s.as_angel_source() {
                    Some(p) => p.angel_records().await,
                    None => Err(DealflowError::source(
                        s.name(),
                        "missing angel capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Run one fetch cycle: both lists concurrently, bounded by the request timeout.
    ///
    /// The cycle is all-or-nothing. If either list fails the other is dropped
    /// and no snapshot is produced.
    ///
    /// # Errors
    /// Returns the first failing kind's error, or `RequestTimeout("snapshot")`
    /// when the configured request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "dealflow::router", skip(self), err)
    )]
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, DealflowError> {
        let both = futures::future::try_join(self.ipo_records(), self.angel_records());
        let (ipos, angels) = match with_request_deadline(self.cfg.request_timeout, both).await {
            Ok(res) => res?,
            Err(DealflowError::RequestTimeout { .. }) => {
                return Err(DealflowError::request_timeout("snapshot"));
            }
            Err(e) => return Err(e),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(ipos = ipos.len(), angels = angels.len(), "fetched snapshot");

        Ok(Snapshot::new(ipos, angels, Utc::now()))
    }
}
