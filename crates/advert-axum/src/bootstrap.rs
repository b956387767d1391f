//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;
use std::time::Duration;

use advert_core::AdvertService;
use advert_db::CoreFactory;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::routes::create_router;

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// Advert CRUD service.
    pub adverts: Arc<AdvertService>,
}

impl AxumContext {
    pub const fn new(adverts: Arc<AdvertService>) -> Self {
        Self { adverts }
    }
}

/// Bootstrap the Axum server: open the database and build the services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    info!(
        database_path = %config.database_path.display(),
        log_dir = %config.log_dir.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = CoreFactory::create_pool(&config.database_path).await?;
    let adverts = Arc::new(CoreFactory::build_advert_service(pool));

    Ok(AxumContext::new(adverts))
}

/// Start the web server and run it until `shutdown` is cancelled.
pub async fn start_server(config: ServerConfig, shutdown: CancellationToken) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("advert server listening on http://{}", listener.local_addr()?);

    serve(listener, app, shutdown, config.shutdown_timeout()).await
}

/// Serve `app` until `shutdown` is cancelled.
///
/// In-flight requests get at most `drain_timeout` to finish once shutdown
/// starts; after that the server future is dropped along with any open
/// connections.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
    drain_timeout: Duration,
) -> Result<()> {
    let server = {
        let shutdown = shutdown.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown.cancelled_owned())
                .await
        }
    };

    let deadline = async {
        shutdown.cancelled().await;
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => {
            result?;
            info!("advert server shut down");
        }
        () = deadline => {
            warn!(?drain_timeout, "graceful shutdown timed out, dropping open connections");
        }
    }
    Ok(())
}

/// Cancel `token` on Ctrl+C or SIGTERM.
pub async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }

    token.cancel();
}
