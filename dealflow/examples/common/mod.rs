use dealflow::RecordSource;
use std::sync::Arc;

/// Mock source when `DEALFLOW_EXAMPLES_USE_MOCK` is set, otherwise the HTTP
/// source configured from `DEALFLOW_API_URL`.
pub fn get_source() -> Result<Arc<dyn RecordSource>, dealflow::DealflowError> {
    if std::env::var("DEALFLOW_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Ok(Arc::new(dealflow_mock::MockSource::new()))
    } else {
        Ok(Arc::new(dealflow_http::HttpSource::from_env()?))
    }
}
