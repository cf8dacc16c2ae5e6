use dealflow_core::{Company, DealflowError, RecordSource};
use dealflow_http::{HttpSource, HttpSourceConfig};
use httpmock::prelude::*;
use serde_json::json;

fn source_for(server: &MockServer) -> HttpSource {
    HttpSource::new(&HttpSourceConfig::with_base_url(server.base_url())).expect("valid config")
}

#[tokio::test]
async fn fetches_and_decodes_ipo_calendar() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ipo-calendar")
                .header("accept", "application/json");
            then.status(200).json_body(json!([
                {
                    "id": 2,
                    "name": "HealthAI Diagnostics",
                    "sector": "Health Tech",
                    "stage": "Filed",
                    "risk": "Medium-High",
                    "growth": 156,
                    "symbol": "HLAI",
                    "exchange": "NYSE",
                    "news": [
                        { "date": "2025-05-25", "title": "HealthAI receives FDA approval for new diagnostic tool", "url": "https://medcitynews.com/healthai-fda" }
                    ]
                }
            ]));
        })
        .await;

    let src = source_for(&server);
    let ipos = src
        .as_ipo_source()
        .expect("ipo capability")
        .ipo_records()
        .await
        .expect("ipo records");

    mock.assert_async().await;
    assert_eq!(ipos.len(), 1);
    assert_eq!(ipos[0].name(), "HealthAI Diagnostics");
    assert_eq!(ipos[0].exchange.as_deref(), Some("NYSE"));
    assert_eq!(ipos[0].news().len(), 1);
}

#[tokio::test]
async fn angel_records_tolerate_missing_news_and_skip_broken_rows() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/angel-investments");
            then.status(200).json_body(json!([
                { "id": 101, "name": "QuantumFlow AI", "sector": "AI/Quantum", "targetRaise": 35 },
                { "id": 102, "sector": "BioTech" },
                { "id": 103, "name": "CarbonZero Systems", "sector": "CleanTech", "news": null }
            ]));
        })
        .await;

    let angels = source_for(&server)
        .as_angel_source()
        .expect("angel capability")
        .angel_records()
        .await
        .expect("angel records");

    assert_eq!(angels.len(), 2);
    assert!(angels.iter().all(|a| a.news().is_empty()));
    assert_eq!(angels[0].target_raise, Some(35.0));
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ipo-calendar");
            then.status(500)
                .json_body(json!({ "error": "Failed to fetch IPO data" }));
        })
        .await;

    let err = source_for(&server)
        .as_ipo_source()
        .expect("ipo capability")
        .ipo_records()
        .await
        .expect_err("500 must fail");

    match err {
        DealflowError::HttpStatus {
            source_name,
            status,
            url,
        } => {
            assert_eq!(source_name, "dealflow-http");
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/ipo-calendar"), "{url}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn non_array_payload_is_a_source_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/angel-investments");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let err = source_for(&server)
        .as_angel_source()
        .expect("angel capability")
        .angel_records()
        .await
        .expect_err("object payload must fail");

    match err {
        DealflowError::Source { source_name, msg } => {
            assert_eq!(source_name, "dealflow-http");
            assert!(msg.contains("angel investment"), "{msg}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_source_error() {
    // Port 9 (discard) on localhost is assumed closed in CI.
    let src = HttpSource::new(&HttpSourceConfig::with_base_url("http://127.0.0.1:9"))
        .expect("valid config");
    let err = src
        .as_ipo_source()
        .expect("ipo capability")
        .ipo_records()
        .await
        .expect_err("connection refused");
    assert!(
        matches!(err, DealflowError::Source { .. } | DealflowError::SourceTimeout { .. }),
        "{err:?}"
    );
}
