use serde::{Deserialize, Serialize};

use super::{Category, Task};

/// Experience needed per level.
pub const XP_PER_LEVEL: u64 = 1000;

/// The single persisted aggregate.
///
/// Serializes to the storage layout `{ "xp": n, "tasks": { "penalty": [...], ... } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Total accumulated experience. Never negative.
    #[serde(rename = "xp")]
    pub experience: u64,
    pub tasks: TaskBoard,
}

/// Quest lists for every category. All five lists are always present.
///
/// List order is insertion order, and is the order quests are shown and
/// addressed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskBoard {
    pub penalty: Vec<Task>,
    pub daily: Vec<Task>,
    pub weekly: Vec<Task>,
    pub epic: Vec<Task>,
    pub legendary: Vec<Task>,
}

impl TaskBoard {
    pub fn get(&self, category: Category) -> &[Task] {
        match category {
            Category::Penalty => &self.penalty,
            Category::Daily => &self.daily,
            Category::Weekly => &self.weekly,
            Category::Epic => &self.epic,
            Category::Legendary => &self.legendary,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Penalty => &mut self.penalty,
            Category::Daily => &mut self.daily,
            Category::Weekly => &mut self.weekly,
            Category::Epic => &mut self.epic,
            Category::Legendary => &mut self.legendary,
        }
    }

    /// Every category with its quests, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Task])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, tasks)| tasks.len()).sum()
    }
}

/// Level and in-level progress derived from an experience total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Standing {
    pub level: u64,
    pub experience: u64,
    /// Percentage of the current level band, in `[0, 100)`.
    pub progress_percent: f64,
}

/// The live state together with its derived standing, as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateView {
    pub state: AppState,
    pub standing: Standing,
}
