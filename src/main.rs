use axum::Router;
use std::{env, net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing::info;

use silverbank::app::create_router;
use silverbank::config::load_env;
use silverbank::logging::setup_logging;
use silverbank::models::AppState;

#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    setup_logging();

    info!("Starting Silverbank application");

    load_env();

    let state = Arc::new(AppState::with_sample_data());
    let router = create_router(state)?;

    serve(router).await
}

async fn serve(router: Router) -> Result<(), eyre::Report> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".into());

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| eyre::eyre!("Invalid bind address: {}", e))?;

    info!("Server listening on http://{}", addr);
    info!("Swagger UI: http://{}/swagger-ui/", addr);

    axum::serve(TcpListener::bind(&addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
