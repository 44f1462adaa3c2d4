use anyhow::Context;
use news_app::{config::Config, routes::create_app_routes, server};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "news_app=debug,tower_http=debug,info".into()
        }))
        .init();

    info!("Starting server...");

    // Bad configuration is fatal
    let config = Config::load().context("failed to load configuration")?;

    let app_routes = create_app_routes(&config);

    let listener = server::bind(&config)
        .await
        .with_context(|| format!("failed to bind to {}", config.server_address()))?;

    info!("🚀 Server running on http://{}", listener.local_addr()?);

    server::serve(listener, app_routes, server::shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
