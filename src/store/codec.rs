//! Encoding of [`AppState`] to and from the stored JSON blob.
//!
//! Layout:
//! ```text
//! { "xp": 1250,
//!   "tasks": { "penalty": [ { "name": "Skip gym", "xp": 100 } ], "daily": [], ... } }
//! ```

use serde_json::{Map, Value};

use crate::models::{xp_from_value, AppState, Category, Task, TaskBoard};

use super::StoreError;

pub fn encode(state: &AppState) -> Result<String, StoreError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a stored blob, repairing whatever is missing or malformed.
///
/// Repair is per field once the blob parses as a JSON object:
/// - `xp` that is missing, malformed or negative becomes 0; fractions truncate
///   and numeric strings are read like user input
/// - a missing or non-object `tasks` yields five empty lists
/// - each category keeps its list only if it is an array, else it is empty
/// - list entries without a non-blank string `name` are dropped
/// - entry `xp` follows the same rule as the top-level `xp`
///
/// A blob that is not JSON, or not an object, decodes to the default state.
pub fn decode(raw: &str) -> AppState {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Saved state is not valid JSON, starting fresh: {}", e);
            return AppState::default();
        }
    };

    let Some(root) = value.as_object() else {
        tracing::warn!("Saved state is not a JSON object, starting fresh");
        return AppState::default();
    };

    AppState {
        experience: root.get("xp").map(xp_from_value).unwrap_or(0),
        tasks: root
            .get("tasks")
            .and_then(Value::as_object)
            .map(decode_board)
            .unwrap_or_default(),
    }
}

fn decode_board(lists: &Map<String, Value>) -> TaskBoard {
    let mut board = TaskBoard::default();
    for category in Category::ALL {
        match lists.get(category.as_str()) {
            Some(Value::Array(entries)) => {
                *board.get_mut(category) = entries.iter().filter_map(decode_task).collect();
            }
            Some(_) => {
                tracing::warn!("Discarding malformed '{}' quest list", category);
            }
            None => {}
        }
    }
    board
}

fn decode_task(entry: &Value) -> Option<Task> {
    let name = entry.get("name")?.as_str()?;
    if name.trim().is_empty() {
        return None;
    }
    let xp = entry.get("xp").map(xp_from_value).unwrap_or(0);
    Some(Task::new(name, xp))
}
