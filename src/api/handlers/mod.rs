use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::engine;
use crate::models::*;
use crate::tracker::{Tracker, TrackerError};

// ============================================================
// Error Handling
// ============================================================

/// Map a tracker error to a response.
///
/// A bad quest position is the client's mistake and is reported as-is.
/// Storage failures are logged in full and returned as a generic message.
fn tracker_error(e: TrackerError) -> (StatusCode, String) {
    match e {
        TrackerError::Engine(e) => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::NOT_FOUND, e.to_string())
        }
        TrackerError::Store(e) => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn view(state: AppState) -> Json<StateView> {
    let standing = engine::standing(&state);
    Json(StateView { state, standing })
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// State
// ============================================================

pub async fn get_state(State(tracker): State<Tracker>) -> Json<StateView> {
    view(tracker.state())
}

// ============================================================
// Quests
// ============================================================

pub async fn add_quest(
    State(tracker): State<Tracker>,
    Json(input): Json<CreateTaskInput>,
) -> Result<(StatusCode, Json<StateView>), (StatusCode, String)> {
    if input.name.trim().is_empty() {
        return Ok((StatusCode::OK, view(tracker.state())));
    }

    let next = tracker
        .add_task(input.category, &input.name, input.xp)
        .map_err(tracker_error)?;
    Ok((StatusCode::CREATED, view(next)))
}

pub async fn complete_quest(
    State(tracker): State<Tracker>,
    Path((category, index)): Path<(Category, usize)>,
) -> Result<Json<StateView>, (StatusCode, String)> {
    tracker
        .complete_task(category, index)
        .map(view)
        .map_err(tracker_error)
}

pub async fn delete_quest(
    State(tracker): State<Tracker>,
    Path((category, index)): Path<(Category, usize)>,
) -> Result<Json<StateView>, (StatusCode, String)> {
    tracker
        .delete_task(category, index)
        .map(view)
        .map_err(tracker_error)
}

// ============================================================
// Experience
// ============================================================

pub async fn adjust_xp(
    State(tracker): State<Tracker>,
    Json(input): Json<AdjustXpInput>,
) -> Result<Json<StateView>, (StatusCode, String)> {
    tracker
        .adjust_xp(input.delta)
        .map(view)
        .map_err(tracker_error)
}
