use crate::config::{ServerConfig, StorageKind};
use crate::routes::{router, AppState};
use axum::Router;
use kanban_board::BoardContext;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level is used.
/// Calling this twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Open the board store the configuration asks for
pub async fn open_context(config: &ServerConfig) -> kanban_board::Result<BoardContext> {
    match config.storage {
        StorageKind::File => {
            tracing::info!(data_dir = %config.data_dir.display(), "opening file board store");
            BoardContext::open_dir(&config.data_dir).await
        }
        StorageKind::Memory => {
            tracing::info!("using in-memory board store");
            Ok(BoardContext::in_memory())
        }
    }
}

/// The complete application: routes plus request tracing and permissive CORS
pub fn app(ctx: BoardContext) -> Router {
    router(AppState::new(ctx))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind, serve until ctrl-c, then release the store.
pub async fn serve(config: &ServerConfig, ctx: BoardContext) -> anyhow::Result<()> {
    let socket_addr = config.socket_addr()?;
    let listener = TcpListener::bind(socket_addr).await?;
    tracing::info!("kanban board server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(ctx.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped, closing board store");
    ctx.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
