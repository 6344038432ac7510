//! Progression engine: pure state transitions over [`AppState`].
//!
//! Every operation borrows the current state and returns the next one, so a
//! rejected transition never disturbs the caller's state. Persistence is the
//! caller's job (see [`crate::tracker::Tracker`]).

use thiserror::Error;

use crate::models::{AppState, Category, Standing, Task, XP_PER_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no {category} quest at position {index} (the list has {len})")]
    TaskIndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
}

pub fn level(state: &AppState) -> u64 {
    state.experience / XP_PER_LEVEL
}

/// Progress through the current level band as a percentage in `[0, 100)`.
pub fn progress_percent(state: &AppState) -> f64 {
    (state.experience % XP_PER_LEVEL) as f64 / 10.0
}

pub fn standing(state: &AppState) -> Standing {
    Standing {
        level: level(state),
        experience: state.experience,
        progress_percent: progress_percent(state),
    }
}

/// Append a quest to the end of `category`.
///
/// A name that is empty after trimming leaves the state unchanged. The name
/// is stored as given.
pub fn add_task(state: &AppState, category: Category, name: &str, xp: u64) -> AppState {
    let mut next = state.clone();
    if name.trim().is_empty() {
        return next;
    }
    next.tasks.get_mut(category).push(Task::new(name, xp));
    next
}

/// Complete the quest at `index`: apply its XP and remove it in one step.
///
/// Penalty quests subtract their XP, clamped at zero. Other quests add it.
pub fn complete_task(
    state: &AppState,
    category: Category,
    index: usize,
) -> Result<AppState, EngineError> {
    let task = task_at(state, category, index)?;
    let experience = if category.is_penalty() {
        state.experience.saturating_sub(task.xp)
    } else {
        state.experience.saturating_add(task.xp)
    };

    let mut next = delete_task(state, category, index)?;
    next.experience = experience;
    Ok(next)
}

/// Remove the quest at `index` without touching experience. Later quests in
/// the same category shift down by one.
pub fn delete_task(
    state: &AppState,
    category: Category,
    index: usize,
) -> Result<AppState, EngineError> {
    task_at(state, category, index)?;
    let mut next = state.clone();
    next.tasks.get_mut(category).remove(index);
    Ok(next)
}

/// Grant (`delta > 0`) or take away (`delta < 0`) experience outside the
/// quest system. The total never drops below zero.
pub fn adjust_xp(state: &AppState, delta: i64) -> AppState {
    let mut next = state.clone();
    next.experience = if delta >= 0 {
        state.experience.saturating_add(delta.unsigned_abs())
    } else {
        state.experience.saturating_sub(delta.unsigned_abs())
    };
    next
}

fn task_at(state: &AppState, category: Category, index: usize) -> Result<&Task, EngineError> {
    let tasks = state.tasks.get(category);
    tasks.get(index).ok_or(EngineError::TaskIndexOutOfRange {
        category,
        index,
        len: tasks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_xp(experience: u64) -> AppState {
        AppState {
            experience,
            ..Default::default()
        }
    }

    #[test]
    fn level_is_floor_of_thousands() {
        assert_eq!(level(&with_xp(0)), 0);
        assert_eq!(level(&with_xp(999)), 0);
        assert_eq!(level(&with_xp(1000)), 1);
        assert_eq!(level(&with_xp(25_431)), 25);
    }

    #[test]
    fn progress_stays_below_one_hundred() {
        assert_eq!(progress_percent(&with_xp(0)), 0.0);
        assert_eq!(progress_percent(&with_xp(1250)), 25.0);
        assert_eq!(progress_percent(&with_xp(999)), 99.9);
        assert_eq!(progress_percent(&with_xp(2000)), 0.0);
    }

    #[test]
    fn adjust_xp_clamps_at_zero() {
        for (start, delta, expected) in [(0, -5, 0), (30, -100, 0), (30, 20, 50), (100, -100, 0)] {
            assert_eq!(adjust_xp(&with_xp(start), delta).experience, expected);
        }
    }

    #[test]
    fn adjust_xp_handles_extreme_deltas() {
        assert_eq!(adjust_xp(&with_xp(10), i64::MIN).experience, 0);
        assert_eq!(adjust_xp(&with_xp(u64::MAX), 1).experience, u64::MAX);
    }

    #[test]
    fn add_task_ignores_blank_names() {
        let state = with_xp(10);
        assert_eq!(add_task(&state, Category::Daily, "", 50), state);
        assert_eq!(add_task(&state, Category::Daily, "   ", 50), state);
    }

    #[test]
    fn add_task_keeps_the_name_untrimmed() {
        let next = add_task(&AppState::default(), Category::Weekly, " Clean desk ", 20);
        assert_eq!(next.tasks.weekly, vec![Task::new(" Clean desk ", 20)]);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let state = add_task(&AppState::default(), Category::Epic, "Ship", 500);
        assert_eq!(
            complete_task(&state, Category::Epic, 1),
            Err(EngineError::TaskIndexOutOfRange {
                category: Category::Epic,
                index: 1,
                len: 1,
            })
        );
        assert!(delete_task(&state, Category::Daily, 0).is_err());
    }
}
