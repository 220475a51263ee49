//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (timeout, request ID, tracing, trace recording)
//! - Bind server to listener
//! - Apply configuration updates while running
//! - Drain in-flight requests on shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{http::header::InvalidHeaderName, middleware, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin::setup_admin_router;
use crate::api::{self, Greeting, API_PREFIX};
use crate::config::ServiceConfig;
use crate::http::request::X_REQUEST_ID;
use crate::trace::{record_exchange, TraceStore};

/// Error type for server construction and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid credential header: {0}")]
    CredentialHeader(#[from] InvalidHeaderName),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Active rendering settings, replaced on config reload.
    pub greeting: Arc<ArcSwap<Greeting>>,
    /// Present when trace recording is enabled.
    pub traces: Option<Arc<TraceStore>>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServerError> {
        let greeting = Greeting::from_config(&config.credential)?;
        let traces = config
            .trace
            .enabled
            .then(|| Arc::new(TraceStore::from_config(&config.trace)));

        Ok(Self {
            greeting: Arc::new(ArcSwap::from_pointee(greeting)),
            traces,
        })
    }

    /// Apply the live-reloadable parts of a new configuration.
    pub fn apply(&self, config: &ServiceConfig) -> Result<(), ServerError> {
        let greeting = Greeting::from_config(&config.credential)?;
        tracing::info!(
            header = %greeting.header(),
            trailing_newline = greeting.trailing_newline(),
            "Credential settings reloaded"
        );
        self.greeting.store(Arc::new(greeting));
        Ok(())
    }
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        let state = AppState::new(&config)?;
        let router = Self::build_router(&config, state.clone());

        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router: Router = Router::new()
            .nest(API_PREFIX, api::router())
            .with_state(state.clone())
            .merge(setup_admin_router(state.traces.clone()));

        if let Some(store) = state.traces {
            router = router.layer(middleware::from_fn_with_state(store, record_exchange));
        }

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configuration updates received while running are applied to the
    /// credential settings; everything else takes effect on restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<ServiceConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let state = self.state.clone();
        let running = self.config.clone();
        let reloader = tokio::spawn(async move {
            while let Some(update) = config_updates.recv().await {
                if update.listener != running.listener
                    || update.timeouts != running.timeouts
                    || update.trace != running.trace
                    || update.observability != running.observability
                {
                    tracing::warn!("Listener, timeout, trace and logging changes take effect after restart");
                }
                if let Err(e) = state.apply(&update) {
                    tracing::error!(error = %e, "Rejected configuration update");
                }
            }
        });

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
