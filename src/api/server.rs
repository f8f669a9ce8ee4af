use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::server_config::*;
use crate::core::config::ServerConfig;
use crate::storage::{MemoryUserStore, UserStorage};

/// Registry HTTP server. Cloning shares the same store.
#[derive(Clone)]
pub struct RegistryServer {
    pub store: Arc<dyn UserStorage>,
    pub config: ServerConfig,
}

impl RegistryServer {
    /// Server backed by a fresh in-memory store
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryUserStore::new()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn UserStorage>) -> Self {
        Self { store, config }
    }

    pub fn create_router(self) -> Router {
        let state = Arc::new(self);

        // Wrong verbs get 400 from the route's method fallback rather than axum's 405
        Router::new()
            .route(ADD_USER_PATH, post(handlers::add_user).fallback(handlers::only_post))
            .route(GET_USER_PATH, get_only(get(handlers::get_user)))
            .route(GET_ALL_USERS_PATH, get_only(get(handlers::get_all_users)))
            .route(HEALTH_PATH, get_only(get(handlers::health_check)))
            // request bodies are not size limited
            .layer(DefaultBodyLimit::disable())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the configured address and serve until the process exits
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<(), anyhow::Error> {
        tracing::info!("Server listening on {}", listener.local_addr()?);
        let app = self.create_router();
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

/// Reject every verb but GET on a read route. axum serves HEAD through the
/// GET handler unless HEAD has its own, so it is routed to the rejection too.
fn get_only(route: MethodRouter<Arc<RegistryServer>>) -> MethodRouter<Arc<RegistryServer>> {
    route.head(handlers::only_get).fallback(handlers::only_get)
}
