//! Plain-text rendering of the quest log.

use crate::engine;
use crate::models::AppState;

const BAR_WIDTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '░';

/// Render a progress bar for a percentage in `[0, 100)`.
///
/// ```text
/// [█████░░░░░░░░░░░░░░░] 25.0%
/// ```
pub fn render_progress(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).floor() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 10);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(BAR_WIDTH - filled));
    bar.push(']');
    bar.push_str(&format!(" {:.1}%", percent));
    bar
}

/// Render the whole log: standing header, then every category's quests
/// with the index used to complete or delete them.
///
/// Example output:
/// ```text
/// Level 1  (1250 XP)
/// [█████░░░░░░░░░░░░░░░] 25.0%
///
/// Penalty Quests
///   [0] Skip gym (-100 XP)
/// Daily Quests
///   (none)
/// ```
pub fn render_state(state: &AppState) -> String {
    let standing = engine::standing(state);
    let mut output = format!(
        "Level {}  ({} XP)\n{}\n",
        standing.level,
        standing.experience,
        render_progress(standing.progress_percent)
    );

    for (category, tasks) in state.tasks.iter() {
        output.push('\n');
        output.push_str(category.title());
        output.push('\n');

        if tasks.is_empty() {
            output.push_str("  (none)\n");
            continue;
        }

        let sign = if category.is_penalty() { '-' } else { '+' };
        for (index, task) in tasks.iter().enumerate() {
            output.push_str(&format!("  [{}] {} ({}{} XP)\n", index, task.name, sign, task.xp));
        }
    }

    output
}
