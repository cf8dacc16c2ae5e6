use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use dealflow_core::{DealflowConfig, DealflowError, RecordKind, RecordSource, SourceKey};

use crate::router::util::collapse_errors;

/// Orchestrator that routes record fetches across registered sources.
pub struct Dealflow {
    pub(crate) sources: Vec<Arc<dyn RecordSource>>,
    pub(crate) per_kind_priority: HashMap<RecordKind, Vec<SourceKey>>,
    pub(crate) cfg: DealflowConfig,
}

/// Builder for constructing a `Dealflow` orchestrator with custom configuration.
pub struct DealflowBuilder {
    sources: Vec<Arc<dyn RecordSource>>,
    per_kind_priority: HashMap<RecordKind, Vec<SourceKey>>,
    cfg: DealflowConfig,
}

impl Default for DealflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DealflowBuilder {
    /// Create a new builder with defaults: no sources, 10s per-source timeout and
    /// no overall request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            per_kind_priority: HashMap::new(),
            cfg: DealflowConfig::default(),
        }
    }

    /// Register a record source.
    ///
    /// Registration order is the fallback order unless [`prefer_for`](Self::prefer_for)
    /// says otherwise. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn RecordSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Set preferred sources for a record kind.
    ///
    /// This is an ordering hint: unlisted but capable sources are still tried
    /// after the listed ones, in registration order.
    #[must_use]
    pub fn prefer_for(mut self, kind: RecordKind, sources_desc: &[Arc<dyn RecordSource>]) -> Self {
        let keys: Vec<SourceKey> = sources_desc.iter().map(|s| s.key()).collect();
        self.per_kind_priority.insert(kind, keys);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DealflowConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-source call timeout. An elapsed timeout counts as a failed fetch.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Bound a whole fetch cycle (both record kinds together).
    ///
    /// When exceeded, [`Dealflow::fetch_snapshot`] returns `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Dealflow` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources are registered, or if no registered
    /// source can serve one of the two record kinds.
    pub fn build(mut self) -> Result<Dealflow, DealflowError> {
        if self.sources.is_empty() {
            return Err(DealflowError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        for kind in [RecordKind::Ipo, RecordKind::Angel] {
            if !self.sources.iter().any(|s| s.supports(kind)) {
                return Err(DealflowError::InvalidArg(format!(
                    "no registered source can supply {kind} records"
                )));
            }
        }

        // Drop priority keys naming unregistered sources and dedup the rest.
        let known: HashSet<&'static str> = self.sources.iter().map(|s| s.name()).collect();
        for keys in self.per_kind_priority.values_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            keys.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        Ok(Dealflow {
            sources: self.sources,
            per_kind_priority: self.per_kind_priority,
            cfg: self.cfg,
        })
    }
}

/// Tag a source error with the source's name unless it already carries one.
pub(crate) fn tag_err(source_name: &str, e: DealflowError) -> DealflowError {
    match e {
        e @ (DealflowError::Source { .. }
        | DealflowError::HttpStatus { .. }
        | DealflowError::SourceTimeout { .. }
        | DealflowError::NotFound { .. }
        | DealflowError::RequestTimeout { .. }
        | DealflowError::AllSourcesTimedOut { .. }
        | DealflowError::AllSourcesFailed(_)) => e,
        other => DealflowError::source(source_name, other.to_string()),
    }
}

/// Apply an optional deadline to `fut`.
///
/// On timeout this returns `RequestTimeout("request")`; call sites remap the
/// label as needed.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, DealflowError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| DealflowError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Dealflow {
    /// Start building a new `Dealflow` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let http = Arc::new(dealflow_http::HttpSource::from_env()?);
    /// let mock = Arc::new(dealflow_mock::MockSource::new());
    ///
    /// let dealflow = dealflow::Dealflow::builder()
    ///     .with_source(http)
    ///     .with_source(mock)
    ///     .source_timeout(Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DealflowBuilder {
        DealflowBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &DealflowConfig {
        &self.cfg
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dealflow::core::source_call_with_timeout",
            skip(fut, kind),
            fields(
                source = source_name,
                kind = %kind,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        kind: RecordKind,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, DealflowError>
    where
        Fut: core::future::Future<Output = Result<T, DealflowError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(DealflowError::source_timeout(source_name, kind.as_str())))
    }

    pub(crate) fn ordered_for_kind(&self, kind: RecordKind) -> Vec<Arc<dyn RecordSource>> {
        let mut out: Vec<(usize, Arc<dyn RecordSource>)> =
            self.sources.iter().cloned().enumerate().collect();
        if let Some(pref) = self.per_kind_priority.get(&kind) {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, s)| {
                (pos.get(s.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, s)| s).collect()
    }

    /// Try capable sources in priority order until one succeeds.
    ///
    /// - Applies the per-source timeout to every attempt
    /// - `call` returns `None` for sources lacking the capability; they are skipped
    /// - If every attempt fails, errors collapse via [`collapse_errors`]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dealflow::core::fetch_kind",
            skip(self, kind, call),
            fields(kind = %kind),
        )
    )]
    pub(crate) async fn fetch_kind<T, F, Fut>(
        &self,
        kind: RecordKind,
        call: F,
    ) -> Result<T, DealflowError>
    where
        T: Send,
        F: Fn(Arc<dyn RecordSource>) -> Option<Fut> + Send + Sync,
        Fut: core::future::Future<Output = Result<T, DealflowError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<DealflowError> = Vec::new();

        for s in self.ordered_for_kind(kind) {
            let Some(fut) = call(Arc::clone(&s)) else {
                continue;
            };
            attempted_any = true;
            match Self::source_call_with_timeout(s.name(), kind, self.cfg.source_timeout, fut)
                .await
            {
                Ok(v) => return Ok(v),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(source = s.name(), kind = %kind, error = %e, "source fetch failed");
                    errors.push(tag_err(s.name(), e));
                }
            }
        }

        Err(collapse_errors(kind, attempted_any, errors))
    }
}
