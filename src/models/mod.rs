//! Domain models for Questlog.
//!
//! # Core Concepts
//!
//! - [`Category`]: One of the five fixed quest tiers. Penalty quests take
//!   experience away when completed; every other tier grants it.
//! - [`Task`]: A quest. Tasks have no identity of their own; they are
//!   addressed by their position within their category's list, so any
//!   removal shifts the indices of the quests after it.
//! - [`AppState`]: The single persisted aggregate: total experience plus a
//!   [`TaskBoard`] that always holds all five category lists.
//! - [`Standing`]: Level and progress derived from the experience total.

mod category;
mod state;
mod task;

pub use category::*;
pub use state::*;
pub use task::*;
