//! ServerBuilder for fluent API to build HTTP servers

use super::router::{build_item_routes, health_routes};
use crate::core::item::ItemForm;
use crate::core::repository::ItemRepository;
use crate::core::validation::{ItemValidator, Validator};
use crate::items::AppState;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the item HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryItemRepository::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn ItemRepository>>,
    validator: Option<Arc<dyn Validator<ItemForm>>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            repository: None,
            validator: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the item repository (required)
    pub fn with_repository(mut self, repository: impl ItemRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Share an existing repository handle (required unless `with_repository` is used)
    pub fn with_shared_repository(mut self, repository: Arc<dyn ItemRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the validator used by the delegated (v3) routes
    ///
    /// Defaults to [`ItemValidator`].
    pub fn with_validator(mut self, validator: impl Validator<ItemForm> + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        let repository = self.repository.take().ok_or_else(|| {
            anyhow::anyhow!("ItemRepository is required. Call .with_repository()")
        })?;
        let validator = self
            .validator
            .take()
            .unwrap_or_else(|| Arc::new(ItemValidator) as Arc<dyn Validator<ItemForm>>);

        Ok(AppState {
            repository,
            validator,
        })
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health check routes
    /// - Item routes for all three validation versions
    /// - Custom routes
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = health_routes().merge(build_item_routes(state));

        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
