//! Tests for dataset loading against a local HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use heatmap::pipeline::render_chart;
use heatmap::{DatasetLoader, DatasetSource, FetchError, LoaderConfig, OutputTarget};
use heatmap_common::ChartConfig;
use renderer::OutputFormat;
use test_utils::{sample_dataset, write_temp_json, SAMPLE_JSON};

/// Serve a few canned responses on an ephemeral port.
async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/global-temperature.json", get(|| async { SAMPLE_JSON }))
        .route("/broken.json", get(|| async { "{\"baseTemperature\": 8.66" }))
        .route(
            "/unavailable.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                SAMPLE_JSON
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn loader_for(addr: SocketAddr, path: &str) -> DatasetLoader {
    DatasetLoader::new(LoaderConfig {
        url: format!("http://{}{}", addr, path),
        timeout: None,
    })
    .unwrap()
}

// ============================================================================
// HTTP loading
// ============================================================================

#[tokio::test]
async fn test_fetch_success() {
    let addr = spawn_server().await;
    let dataset = loader_for(addr, "/global-temperature.json").fetch().await.unwrap();
    assert_eq!(dataset, sample_dataset());
}

#[tokio::test]
async fn test_fetch_not_found_is_status_error() {
    let addr = spawn_server().await;
    let err = loader_for(addr, "/missing.json").fetch().await.unwrap_err();
    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_status_error() {
    let addr = spawn_server().await;
    let err = loader_for(addr, "/unavailable.json").fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { .. }));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_fetch_truncated_body_is_parse_error() {
    let addr = spawn_server().await;
    let err = loader_for(addr, "/broken.json").fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = loader_for(addr, "/global-temperature.json").fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let addr = spawn_server().await;
    let loader = DatasetLoader::new(LoaderConfig {
        url: format!("http://{}/slow.json", addr),
        timeout: Some(Duration::from_millis(200)),
    })
    .unwrap();
    let err = loader.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

// ============================================================================
// File loading and the full pipeline
// ============================================================================

#[tokio::test]
async fn test_file_source() {
    let (_guard, path) = write_temp_json(SAMPLE_JSON);
    let dataset = DatasetSource::File(path).load().await.unwrap();
    assert_eq!(dataset.len(), 5);
}

#[tokio::test]
async fn test_fetch_then_render_to_file() {
    let addr = spawn_server().await;
    let source = DatasetSource::Url(LoaderConfig {
        url: format!("http://{}/global-temperature.json", addr),
        timeout: None,
    });
    let dataset = source.load().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget::File(dir.path().join("charts").join("heatmap.html"));
    let format = target.resolve_format(None).unwrap();
    assert_eq!(format, OutputFormat::Html);

    let bytes = render_chart(&dataset, &ChartConfig::default(), format).unwrap();
    target.write(&bytes).unwrap();

    let written = std::fs::read_to_string(dir.path().join("charts").join("heatmap.html")).unwrap();
    assert_eq!(written.matches(r#"class="cell""#).count(), 5);
    assert!(written.contains("1900 - January: 8.32°C"));
}

#[test]
fn test_render_rejects_invalid_dataset() {
    let mut dataset = sample_dataset();
    dataset.monthly_variance[0].month = 13;
    let result = render_chart(&dataset, &ChartConfig::default(), OutputFormat::Svg);
    assert!(result.is_err());
}
