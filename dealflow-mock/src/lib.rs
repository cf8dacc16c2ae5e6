//! dealflow-mock
//!
//! Record sources for CI-safe tests and examples.
//!
//! - [`MockSource`] serves the bundled sample datasets.
//! - [`DynamicMockSource`] defers every call to a [`DynamicMockController`]
//!   so tests can script successes, failures and hangs per record kind.
#![warn(missing_docs)]

use async_trait::async_trait;
use dealflow_core::source::{AngelSource, IpoSource, RecordSource};
use dealflow_core::{AngelRecord, DealflowError, IpoRecord, RecordKind};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource {
    fail: Option<RecordKind>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Stable source name.
    pub const NAME: &'static str = "dealflow-mock";

    /// Source serving both sample lists.
    #[must_use]
    pub const fn new() -> Self {
        Self { fail: None }
    }

    /// Source whose `kind` list always fails, for exercising error states.
    #[must_use]
    pub const fn failing(kind: RecordKind) -> Self {
        Self { fail: Some(kind) }
    }

    fn maybe_fail(&self, kind: RecordKind) -> Result<(), DealflowError> {
        if self.fail == Some(kind) {
            return Err(DealflowError::source(
                Self::NAME,
                format!("forced failure: {kind}"),
            ));
        }
        Ok(())
    }
}

impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_ipo_source(&self) -> Option<&dyn IpoSource> {
        Some(self as &dyn IpoSource)
    }

    fn as_angel_source(&self) -> Option<&dyn AngelSource> {
        Some(self as &dyn AngelSource)
    }
}

#[async_trait]
impl IpoSource for MockSource {
    async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError> {
        self.maybe_fail(RecordKind::Ipo)?;
        fixtures::ipos()
    }
}

#[async_trait]
impl AngelSource for MockSource {
    async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError> {
        self.maybe_fail(RecordKind::Angel)?;
        fixtures::angels()
    }
}
