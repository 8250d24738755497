// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Router, http::StatusCode, routing::get};
use ollama_probe::{ProbeConfig, ProbeOutcome, Prober, UnreachableReason, probe};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

async fn spawn_service(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr, timeout: Duration) -> ProbeConfig {
    ProbeConfig {
        url: format!("http://{addr}/api/tags"),
        timeout,
        build_config_path: None,
    }
}

// --- reachable and healthy ---

#[tokio::test]
async fn healthy_service_reports_model_count() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async {
            (
                [("content-type", "application/json")],
                r#"{"models":[{"name":"llama3:8b"},{"name":"mistral:7b"},{"name":"phi3:mini"}]}"#,
            )
        }),
    );
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert!(outcome.is_available());
    assert_eq!(outcome.exit_code(), 0);
    match outcome {
        ProbeOutcome::Healthy {
            status,
            model_count,
            models,
        } => {
            assert_eq!(status, 200);
            assert_eq!(model_count, 3);
            assert_eq!(models, vec!["llama3:8b", "mistral:7b", "phi3:mini"]);
        }
        other => panic!("expected healthy outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn healthy_service_without_models_key_counts_zero() {
    let app = Router::new().route("/api/tags", get(|| async { "{}" }));
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ProbeOutcome::Healthy {
            status: 200,
            model_count: 0,
            models: vec![],
        }
    );
}

// --- reachable but unhealthy ---

#[tokio::test]
async fn non_success_status_is_unhealthy() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "loading") }),
    );
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(outcome, ProbeOutcome::Unhealthy { status: 503 });
    assert!(!outcome.is_available());
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn missing_route_is_unhealthy() {
    let addr = spawn_service(Router::new()).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(outcome, ProbeOutcome::Unhealthy { status: 404 });
    assert_eq!(outcome.exit_code(), 1);
}

// --- unreachable ---

#[tokio::test]
async fn malformed_body_is_unreachable() {
    let app = Router::new().route("/api/tags", get(|| async { "<html>proxy page</html>" }));
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        ProbeOutcome::Unreachable {
            reason: UnreachableReason::Malformed,
            ..
        }
    ));
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn top_level_array_is_unreachable() {
    let app = Router::new().route("/api/tags", get(|| async { "[]" }));
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert!(
        matches!(
            outcome,
            ProbeOutcome::Unreachable {
                reason: UnreachableReason::Malformed,
                ..
            }
        ),
        "expected malformed response, got {outcome:?}"
    );
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn nameless_model_entry_is_unreachable() {
    let app = Router::new().route("/api/tags", get(|| async { r#"{"models":[{}]}"# }));
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert!(
        matches!(
            outcome,
            ProbeOutcome::Unreachable {
                reason: UnreachableReason::Malformed,
                ..
            }
        ),
        "expected malformed response, got {outcome:?}"
    );
}

#[tokio::test]
async fn no_listener_is_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = probe(&config_for(addr, Duration::from_secs(5)))
        .await
        .unwrap();

    assert!(
        matches!(
            outcome,
            ProbeOutcome::Unreachable {
                reason: UnreachableReason::Connect,
                ..
            }
        ),
        "expected connection failure, got {outcome:?}"
    );
    assert!(!outcome.is_available());
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn silent_listener_times_out_at_configured_bound() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let bound = Duration::from_millis(300);
    let prober = Prober::new(&config_for(addr, bound)).unwrap();

    let start = Instant::now();
    let outcome = prober.probe().await;
    let elapsed = start.elapsed();

    assert!(matches!(
        outcome,
        ProbeOutcome::Unreachable {
            reason: UnreachableReason::Timeout,
            ..
        }
    ));
    assert_eq!(outcome.exit_code(), 1);
    assert!(elapsed >= bound, "returned before the bound: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(5), "took too long: {elapsed:?}");
}

#[tokio::test]
async fn slow_handler_times_out() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            r#"{"models":[]}"#
        }),
    );
    let addr = spawn_service(app).await;

    let outcome = probe(&config_for(addr, Duration::from_millis(200)))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        ProbeOutcome::Unreachable {
            reason: UnreachableReason::Timeout,
            ..
        }
    ));
}

#[tokio::test]
async fn invalid_configuration_is_an_error() {
    let config = ProbeConfig {
        timeout: Duration::ZERO,
        ..ProbeConfig::default()
    };
    assert!(probe(&config).await.is_err());
}
