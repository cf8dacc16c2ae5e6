use async_trait::async_trait;

use crate::DealflowError;
pub use dealflow_types::SourceKey;
use dealflow_types::{AngelRecord, IpoRecord, RecordKind};

/// Focused role trait for sources that serve the upcoming-IPO list.
#[async_trait]
pub trait IpoSource: Send + Sync {
    /// Fetch the complete IPO list. A list is either complete or an error.
    async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError>;
}

/// Focused role trait for sources that serve the angel-investment list.
#[async_trait]
pub trait AngelSource: Send + Sync {
    /// Fetch the complete angel-investment list. A list is either complete or an error.
    async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError>;
}

/// Main source trait implemented by source crates. Exposes capability discovery.
pub trait RecordSource: Send + Sync {
    /// A stable identifier for priority lists (e.g., "dealflow-http", "dealflow-mock").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise IPO capability by returning a usable trait object reference when supported.
    fn as_ipo_source(&self) -> Option<&dyn IpoSource> {
        None
    }

    /// Advertise angel capability by returning a usable trait object reference when supported.
    fn as_angel_source(&self) -> Option<&dyn AngelSource> {
        None
    }

    /// Whether this source can serve the given record kind.
    fn supports(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Ipo => self.as_ipo_source().is_some(),
            RecordKind::Angel => self.as_angel_source().is_some(),
        }
    }
}
