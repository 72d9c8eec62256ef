use crate::model::app_state::AppState;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use export_controller::*;
pub use interaction_controller::*;

mod export_controller;
mod interaction_controller;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(handle_interaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
