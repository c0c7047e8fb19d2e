use anyhow::Context;
use mongodb::bson::doc;
use tokio::net::TcpListener;
use tokio::signal;

use portfolio_server::api::router::build_router;
use portfolio_server::app::AppState;
use portfolio_server::auth::token::TokenService;
use portfolio_server::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting portfolio server...");

    let config = AppConfig::from_env()?;

    // Connect to MongoDB
    let mongo_client = mongodb::Client::with_uri_str(config.connection_uri()?)
        .await
        .context("Failed to create MongoDB client")?;
    let mongo_db = mongo_client.database(&config.mongodb_database);

    mongo_db
        .run_command(doc! { "ping": 1 })
        .await
        .context("Failed to reach MongoDB")?;

    tracing::info!(
        "Connected to MongoDB database '{}'",
        config.mongodb_database
    );

    let state = AppState::from_database(
        &mongo_db,
        TokenService::new(&config.token_secret),
        config.port,
    );
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Closing MongoDB connections...");
    mongo_client.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
