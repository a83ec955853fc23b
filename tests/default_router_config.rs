//! Runs in its own test binary: it changes the working directory so that the
//! default `router.json` is found.

use std::fs;

use lambda_router_config::options::{
    with_enable_telemetry, with_graph_api_token, with_http_port, with_stage,
    DEFAULT_TRACE_SAMPLE_RATE,
};
use lambda_router_config::{new_router, OptionsBuilder};
use tempfile::TempDir;

#[test]
fn test_end_to_end_with_default_router_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("router.json"),
        r#"{"version": "default-path", "engineConfig": {}}"#,
    )
    .unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let router = new_router(
        OptionsBuilder,
        [
            with_http_port("8080"),
            with_enable_telemetry(true),
            with_stage("v1"),
            with_graph_api_token("tok123"),
        ],
    )
    .unwrap();

    assert!(router.aws_lambda_runtime);
    assert!(router.playground);
    assert!(router.introspection);
    assert_eq!(router.graph_api_token, "tok123");
    assert_eq!(router.static_config.unwrap().version, "default-path");
    assert_eq!(router.listener_addr, ":8080");
    assert!(router.graphql_metrics.is_some());
    assert!(router.metrics.is_some());
    assert_eq!(router.tracing.unwrap().sampler, DEFAULT_TRACE_SAMPLE_RATE);
    assert_eq!(router.graphql_web_url.as_deref(), Some("/v1/graphql"));
}
