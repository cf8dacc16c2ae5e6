use dealflow_core::{DealflowError, RecordKind};

/// Collapse a set of source errors into a uniform `DealflowError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(kind)`.
/// - If all errors are `SourceTimeout` → `AllSourcesTimedOut(kind)`.
/// - Else → `AllSourcesFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    kind: RecordKind,
    attempted_any: bool,
    errors: Vec<DealflowError>,
) -> DealflowError {
    if !attempted_any {
        return DealflowError::unsupported(kind.as_str());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, DealflowError::SourceTimeout { .. }))
    {
        return DealflowError::AllSourcesTimedOut {
            kind: kind.to_string(),
        };
    }
    DealflowError::AllSourcesFailed(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collapse_errors_all_timeouts() {
        let errors = vec![
            DealflowError::source_timeout("s1", "ipo"),
            DealflowError::source_timeout("s2", "ipo"),
        ];
        match collapse_errors(RecordKind::Ipo, true, errors) {
            DealflowError::AllSourcesTimedOut { kind } => assert_eq!(kind, "ipo"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn collapse_errors_unsupported_when_no_attempts() {
        match collapse_errors(RecordKind::Angel, false, vec![]) {
            DealflowError::Unsupported { kind } => assert_eq!(kind, "angel"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn collapse_errors_mixed_maps_to_all_failed() {
        let errors = vec![
            DealflowError::source_timeout("s1", "ipo"),
            DealflowError::source("s2", "boom"),
        ];
        match collapse_errors(RecordKind::Ipo, true, errors.clone()) {
            DealflowError::AllSourcesFailed(es) => assert_eq!(es, errors),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
