//! dealflow-http
//!
//! Record source that implements `RecordSource` on top of `reqwest`, reading
//! the IPO calendar and angel-investment endpoints as JSON arrays.
#![warn(missing_docs)]

mod config;

use async_trait::async_trait;
use dealflow_core::source::{AngelSource, IpoSource, RecordSource, SourceKey};
use dealflow_core::{AngelRecord, DealflowError, IpoRecord, RecordKind, decode_records};
use serde::de::DeserializeOwned;
use url::Url;

pub use config::{API_URL_ENV, DEFAULT_BASE_URL, HttpSourceConfig, PRODUCTION_BASE_URL};

/// Source backed by the two HTTP JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    ipo_url: Url,
    angel_url: Url,
}

impl HttpSource {
    /// Static source key for orchestrator priority configuration.
    pub const KEY: SourceKey = SourceKey::new("dealflow-http");

    /// Build a source with a fresh `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL or an endpoint path does not form
    /// a valid URL, or if the HTTP client cannot be constructed.
    pub fn new(cfg: &HttpSourceConfig) -> Result<Self, DealflowError> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(t) = cfg.timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DealflowError::InvalidArg(format!("http client: {e}")))?;
        Self::with_client(client, cfg)
    }

    /// Build a source from configuration found in the environment.
    ///
    /// # Errors
    /// Same as [`HttpSource::new`].
    pub fn from_env() -> Result<Self, DealflowError> {
        Self::new(&HttpSourceConfig::from_env())
    }

    /// Build a source around an existing `reqwest::Client`.
    ///
    /// The client's own user agent and timeout settings take precedence over `cfg`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the endpoint URLs cannot be formed.
    pub fn with_client(client: reqwest::Client, cfg: &HttpSourceConfig) -> Result<Self, DealflowError> {
        let mut base = Url::parse(&cfg.base_url)
            .map_err(|e| DealflowError::InvalidArg(format!("base url {:?}: {e}", cfg.base_url)))?;
        // Endpoint paths are relative to the base, including any path prefix it carries.
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        let join = |path: &str| {
            base.join(path.trim_start_matches('/'))
                .map_err(|e| DealflowError::InvalidArg(format!("endpoint path {path:?}: {e}")))
        };
        Ok(Self {
            ipo_url: join(&cfg.ipo_path)?,
            angel_url: join(&cfg.angel_path)?,
            client,
        })
    }

    /// Resolved endpoint for `kind`.
    #[must_use]
    pub const fn endpoint(&self, kind: RecordKind) -> &Url {
        match kind {
            RecordKind::Ipo => &self.ipo_url,
            RecordKind::Angel => &self.angel_url,
        }
    }

    fn map_reqwest_err(e: &reqwest::Error, kind: RecordKind) -> DealflowError {
        if e.is_timeout() {
            DealflowError::source_timeout(Self::KEY.as_str(), kind.as_str())
        } else {
            DealflowError::source(
                Self::KEY.as_str(),
                format!("failed to fetch {} data: {e}", what(kind)),
            )
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dealflow_http::fetch",
            skip(self, kind),
            fields(kind = %kind, url = %self.endpoint(kind)),
            err,
        )
    )]
    async fn fetch<T: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<T>, DealflowError> {
        let url = self.endpoint(kind).clone();
        let resp = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::map_reqwest_err(&e, kind))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DealflowError::HttpStatus {
                source_name: Self::KEY.as_str().to_string(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Self::map_reqwest_err(&e, kind))?;
        let records = decode_records(&body).map_err(|e| match e {
            DealflowError::Data(msg) => DealflowError::source(
                Self::KEY.as_str(),
                format!("invalid {} payload: {msg}", what(kind)),
            ),
            other => other,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = records.len(), "fetched records");

        Ok(records)
    }
}

const fn what(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Ipo => "IPO",
        RecordKind::Angel => "angel investment",
    }
}

impl RecordSource for HttpSource {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "HTTP JSON API"
    }

    fn as_ipo_source(&self) -> Option<&dyn IpoSource> {
        Some(self as &dyn IpoSource)
    }

    fn as_angel_source(&self) -> Option<&dyn AngelSource> {
        Some(self as &dyn AngelSource)
    }
}

#[async_trait]
impl IpoSource for HttpSource {
    async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError> {
        self.fetch(RecordKind::Ipo).await
    }
}

#[async_trait]
impl AngelSource for HttpSource {
    async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError> {
        self.fetch(RecordKind::Angel).await
    }
}
