use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, cors_layer, json_error_middleware},
    state::AppState,
};

pub mod public;
pub mod todo;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors);
    Router::new()
        .merge(public::router())
        .merge(todo::router(state))
        .layer(cors)
}

/// The router with the error envelope, panic catching and request tracing
/// layered on, as served by the binary.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
