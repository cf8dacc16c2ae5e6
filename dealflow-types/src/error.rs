use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dealflow workspace.
///
/// Errors only ever originate at the record-source boundary: transport and
/// status failures, undecodable payloads, timeouts, and the aggregate produced
/// when every source registered for a record kind failed. Aggregation itself
/// is infallible.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealflowError {
    /// No registered source can supply the requested record kind.
    #[error("unsupported record kind: {kind}")]
    Unsupported {
        /// Record kind label (e.g. "ipo", "angel").
        kind: String,
    },

    /// The payload could not be interpreted (not a JSON array, invalid UTF-8, ...).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or builder configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream endpoint answered with a non-success HTTP status.
    #[error("{source_name} returned HTTP {status} for {url}")]
    HttpStatus {
        /// Source name that issued the request.
        source_name: String,
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "ipo records".
        what: String,
    },

    /// All sources capable of the record kind failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<DealflowError>),

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {kind} via {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
        /// Record kind label.
        kind: String,
    },

    /// The overall fetch cycle exceeded the configured deadline.
    #[error("request timed out: {kind}")]
    RequestTimeout {
        /// Label of the operation that timed out.
        kind: String,
    },

    /// All attempted sources timed out for the requested record kind.
    #[error("all sources timed out: {kind}")]
    AllSourcesTimedOut {
        /// Record kind label that timed out across all sources.
        kind: String,
    },
}

impl DealflowError {
    /// Helper: build an `Unsupported` error for a record kind label.
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
            kind: kind.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(kind: impl Into<String>) -> Self {
        Self::RequestTimeout { kind: kind.into() }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a benign
    /// not-found condition. Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllSourcesFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Returns true for any timeout flavor (per source, per request, or aggregate).
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::SourceTimeout { .. } | Self::RequestTimeout { .. } | Self::AllSourcesTimedOut { .. }
        )
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<serde_json::Error> for DealflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
