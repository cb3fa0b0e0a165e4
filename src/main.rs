use axum::extract::Extension;
use axum::response::Response;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use nonprofit_backend::api::cors::permissive_cors;
use nonprofit_backend::api::handlers::{
    handle_diagnostics, handle_list, handle_root, handle_submit,
};
use nonprofit_backend::config::Config;
use nonprofit_backend::schema::types::{
    ContactMessage, Event, Program, Subscriber, VolunteerApplication,
};
use nonprofit_backend::storage::gateway::SharedStore;
use nonprofit_backend::storage::mongo::MongoStore;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration:
    let config = Config::from_env()?;

    // 2. Persistence gateway (connects lazily; failures surface per request):
    let store: SharedStore = Arc::new(
        MongoStore::connect(&config.database_url, &config.database_name).await?,
    );
    tracing::info!("Using database `{}`", config.database_name);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/api/programs", get(handle_list_programs))
        .route("/api/events", get(handle_list_events))
        .route("/api/contact", post(handle_submit_contact))
        .route("/api/volunteer", post(handle_submit_volunteer))
        .route("/api/subscribe", post(handle_submit_subscriber))
        .route("/test", get(handle_diagnostics))
        .layer(middleware::from_fn(permissive_cors))
        .layer(Extension(store));

    // 4. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_list_programs(store: Extension<SharedStore>) -> Response {
    handle_list::<Program>(store).await
}

async fn handle_list_events(store: Extension<SharedStore>) -> Response {
    handle_list::<Event>(store).await
}

async fn handle_submit_contact(store: Extension<SharedStore>, json: Json<Value>) -> Response {
    handle_submit::<ContactMessage>(store, json).await
}

async fn handle_submit_volunteer(store: Extension<SharedStore>, json: Json<Value>) -> Response {
    handle_submit::<VolunteerApplication>(store, json).await
}

async fn handle_submit_subscriber(store: Extension<SharedStore>, json: Json<Value>) -> Response {
    handle_submit::<Subscriber>(store, json).await
}
