mod handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::tracker::Tracker;

pub fn create_router(tracker: Tracker) -> Router {
    let api = Router::new()
        .route("/state", get(handlers::get_state))
        .route("/quests", post(handlers::add_quest))
        .route("/quests/{category}/{index}/complete", post(handlers::complete_quest))
        .route("/quests/{category}/{index}", delete(handlers::delete_quest))
        .route("/xp", post(handlers::adjust_xp))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(tracker)
}
