/**
 * Echo Frontier Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app on a
 * current-thread runtime.
 */

#[cfg(feature = "ssr")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = echo_frontier::backend::server::ServerConfig::from_env()?;
    let app = echo_frontier::backend::server::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Echo Frontier listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://127.0.0.1:{}/ws", config.port);
    tracing::info!("Documents served from http://127.0.0.1:{}/data/", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin echo-frontier-server --features ssr");
    std::process::exit(1);
}
