use dealflow_core::{Company, RecordKind, Risk, filter_by_sector, flatten_news, vocabulary};
use dealflow_mock::{MockSource, fixtures};

#[test]
fn bundled_datasets_decode_completely() {
    let ipos = fixtures::ipos().expect("ipo fixture");
    let angels = fixtures::angels().expect("angel fixture");
    assert_eq!(ipos.len(), 2);
    assert_eq!(angels.len(), 4);

    let techflow = &ipos[0];
    assert_eq!(techflow.name(), "TechFlow Solutions");
    assert_eq!(techflow.exchange.as_deref(), Some("NASDAQ"));
    assert_eq!(techflow.base.risk, Risk::Medium);

    let quantum = &angels[0];
    assert_eq!(quantum.name(), "QuantumFlow AI");
    assert_eq!(quantum.target_raise, Some(35.0));
    assert_eq!(quantum.base.risk, Risk::High);
    assert!(angels.iter().any(|a| a.base.risk == Risk::VeryHigh));
}

#[test]
fn sample_dashboard_views() {
    let ipos = fixtures::ipos().expect("ipo fixture");
    let angels = fixtures::angels().expect("angel fixture");

    assert_eq!(
        vocabulary(&ipos, &angels),
        ["All", "Tech", "Health Tech", "AI/Quantum", "BioTech", "CleanTech", "MedTech"]
    );
    assert_eq!(filter_by_sector(&angels, "BioTech").len(), 1);

    let feed = flatten_news(&ipos, &angels);
    assert_eq!(feed.len(), 12);
    assert_eq!(feed[0].title, "TechFlow announces IPO roadshow schedule");
    assert_eq!(feed[0].date, "2025-05-28");
    assert_eq!(feed.last().map(|n| n.company.as_str()), Some("NeuroLink Therapeutics"));
}

#[tokio::test]
async fn mock_source_serves_and_fails_on_demand() {
    use dealflow_core::RecordSource;

    let ok = MockSource::new();
    let ipos = ok
        .as_ipo_source()
        .expect("ipo capability")
        .ipo_records()
        .await
        .expect("ipo records");
    assert_eq!(ipos.len(), 2);

    let broken = MockSource::failing(RecordKind::Angel);
    assert!(broken.as_ipo_source().expect("ipo").ipo_records().await.is_ok());
    let err = broken
        .as_angel_source()
        .expect("angel capability")
        .angel_records()
        .await
        .expect_err("forced failure");
    assert_eq!(
        err,
        dealflow_core::DealflowError::source("dealflow-mock", "forced failure: angel")
    );
}
