use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dealflow_core::source::{AngelSource, IpoSource, RecordSource};
use dealflow_core::{AngelRecord, DealflowError, IpoRecord, RecordKind};

/// Instruction for how a fetch should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DealflowError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    ipo_rule: Option<MockBehavior<Vec<IpoRecord>>>,
    angel_rule: Option<MockBehavior<Vec<AngelRecord>>>,
    ipo_calls: usize,
    angel_calls: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `ipo_records` calls.
    pub async fn set_ipo_behavior(&self, behavior: MockBehavior<Vec<IpoRecord>>) {
        let mut guard = self.state.lock().await;
        guard.ipo_rule = Some(behavior);
    }

    /// Set the behavior for `angel_records` calls.
    pub async fn set_angel_behavior(&self, behavior: MockBehavior<Vec<AngelRecord>>) {
        let mut guard = self.state.lock().await;
        guard.angel_rule = Some(behavior);
    }

    /// Number of fetches received so far for `kind`.
    pub async fn calls(&self, kind: RecordKind) -> usize {
        let guard = self.state.lock().await;
        match kind {
            RecordKind::Ipo => guard.ipo_calls,
            RecordKind::Angel => guard.angel_calls,
        }
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn RecordSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn RecordSource>, controller)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, kind: RecordKind) -> Result<T, DealflowError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(DealflowError::unsupported(kind.as_str())),
    }
}

impl RecordSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_ipo_source(&self) -> Option<&dyn IpoSource> {
        Some(self as &dyn IpoSource)
    }

    fn as_angel_source(&self) -> Option<&dyn AngelSource> {
        Some(self as &dyn AngelSource)
    }
}

#[async_trait]
impl IpoSource for DynamicMockSource {
    async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError> {
        // Snapshot the rule without holding the lock across the await below.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.ipo_calls += 1;
            guard.ipo_rule.clone()
        };
        play(behavior, RecordKind::Ipo).await
    }
}

#[async_trait]
impl AngelSource for DynamicMockSource {
    async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.angel_calls += 1;
            guard.angel_rule.clone()
        };
        play(behavior, RecordKind::Angel).await
    }
}
