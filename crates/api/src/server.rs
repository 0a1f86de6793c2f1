//! Listener lifecycle: bind, serve, graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::error::{Result, ServerError};

/// A bound, not yet serving, HTTP server.
///
/// Holding a `Server` means the port is claimed; dropping it releases the
/// socket without serving anything.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
}

impl Server {
    /// Binds `addr` and prepares to serve `app` on it.
    pub async fn bind(addr: &str, app: Router) -> Result<Self> {
        let bind_err = |source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        };

        let listener = TcpListener::bind(addr).await.map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        Ok(Self {
            listener,
            local_addr,
            app,
        })
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until `signal` resolves, then drains in-flight connections.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(addr = %self.local_addr, "listening");

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("server shut down gracefully");
        Ok(())
    }

    /// Serves until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }
}

/// Binds the configured address and serves the application until a
/// shutdown signal arrives.
pub async fn start(config: &Config) -> Result<()> {
    Server::bind(&config.addr(), crate::create_app())
        .await?
        .run()
        .await
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// If a handler cannot be installed, that branch never resolves and the
/// other signal still works.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}
