//! Questlog: a gamified quest tracker.
//!
//! Quests live in five fixed tiers. Completing a quest grants its experience
//! (or takes it away, for penalty quests), and every 1000 XP is one level.
//! State is persisted through a [`store::Store`] after every mutation.

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod render;
pub mod store;
pub mod tracker;
