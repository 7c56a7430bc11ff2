//! Subdomain Lookup - HTTP service for subdomain discovery
//!
//! Serves `/<domain>` as JSON, `/lookup?domain=<domain>` as an HTML page and
//! everything else as the search form.

use anyhow::Context;
use std::env;
use subdomain_lookup::{config, web, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "subdomain_lookup=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        println!("subdomain-lookup {}", subdomain_lookup::VERSION);
        return Ok(());
    }

    if args.len() > 1 {
        anyhow::bail!("unexpected argument '{}' (use --help for usage)", args[1]);
    }

    subdomain_lookup::init().context("failed to initialize")?;
    init_tracing();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    let state = AppState::from_config(&config.resolver).context("failed to build resolver")?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        upstream = %config.resolver.base_url,
        "Subdomain lookup server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn print_help() {
    println!("Subdomain Lookup - subdomain discovery over certificate transparency logs");
    println!();
    println!("USAGE:");
    println!("    subdomain-lookup");
    println!();
    println!("ROUTES:");
    println!("    GET /<domain>                  JSON list of known subdomains");
    println!("    GET /lookup?domain=<domain>    HTML page listing known subdomains");
    println!("    GET /                          Search form");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    {:<34}Listen address (default: 127.0.0.1:8787)", config::BIND_ENV);
    println!(
        "    {:<34}Search service base URL (default: https://crt.sh/)",
        config::UPSTREAM_URL_ENV
    );
    println!(
        "    {:<34}Upstream timeout in seconds (default: none)",
        config::UPSTREAM_TIMEOUT_ENV
    );
    println!("    {:<34}Log filter (default: {})", "RUST_LOG", DEFAULT_LOG_FILTER);
}
