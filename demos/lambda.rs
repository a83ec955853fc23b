use lambda_router_config::options::{
    with_config_path, with_enable_telemetry, with_http_port, with_logger,
    with_router_config_path, with_stage, with_telemetry_service_name,
};
use lambda_router_config::{new_router, OptionsBuilder};

fn main() {
    let logger = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let mut options = vec![
        with_logger(logger),
        with_router_config_path("demos/router.json"),
        with_http_port("3002"),
        with_telemetry_service_name("employees-router"),
        with_enable_telemetry(true),
        with_stage("dev"),
    ];
    // Run with `-- --with-config` to take settings from demos/config.toml.
    if std::env::args().any(|arg| arg == "--with-config") {
        options.push(with_config_path("demos/config.toml"));
    }

    match new_router(OptionsBuilder, options) {
        Ok(router) => {
            println!("Listening on: {}", router.listener_addr);
            println!("GraphQL URL: {}", router.effective_graphql_web_url());
            println!("Playground: {}", router.playground);
            println!("{router:#?}");
        }
        // Already logged by the resolver.
        Err(_) => std::process::exit(1),
    }
}
