use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::storage::GreetingStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub store: Mutex<GreetingStore>,
}

impl AppState {
    pub fn new(store: GreetingStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

/// Build the application router
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/greetings/{prefix}", get(routes::get_greetings))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(port: u16, database_path: &Path) -> anyhow::Result<()> {
    let store = GreetingStore::open(database_path)?;
    let state = Arc::new(AppState::new(store));
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
