use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_checker_handler))
        .route("/tarefa", get(get_tasks).post(create_task))
        .route(
            "/tarefa/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(app_state)
}

/// Lets the browser front-end served from `origin` call the API.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}
