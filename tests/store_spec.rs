use questlog::models::*;
use questlog::store::{MemoryStore, SqliteStore, Store};
use speculate2::speculate;

fn sample_state() -> AppState {
    let mut state = AppState {
        experience: 3210,
        ..Default::default()
    };
    state.tasks.penalty.push(Task::new("Skip gym", 100));
    state.tasks.daily.push(Task::new("Workout", 50));
    state.tasks.daily.push(Task::new("Read", 20));
    state.tasks.legendary.push(Task::new("Marathon", 5000));
    state
}

speculate! {
    before {
        let store = SqliteStore::open_memory().expect("Failed to create in-memory database");
        store.migrate().expect("Failed to run migrations");
    }

    describe "load" {
        it "returns the default state when nothing was saved" {
            assert_eq!(store.load(), AppState::default());
        }

        it "returns the default state for a corrupt blob" {
            store.write_raw("{\"xp\": 10, \"tasks\"").expect("Failed to write");
            assert_eq!(store.load(), AppState::default());
        }

        it "repairs a missing category without touching the others" {
            store.write_raw(
                r#"{"xp":75,"tasks":{"penalty":[],"daily":[{"name":"Workout","xp":50}],"epic":[{"name":"Ship","xp":500}],"legendary":[]}}"#,
            ).expect("Failed to write");

            let state = store.load();
            assert_eq!(state.experience, 75);
            assert!(state.tasks.weekly.is_empty());
            assert_eq!(state.tasks.daily, vec![Task::new("Workout", 50)]);
            assert_eq!(state.tasks.epic, vec![Task::new("Ship", 500)]);
        }

        it "treats an unmigrated database as empty" {
            let fresh = SqliteStore::open_memory().expect("Failed to create database");
            assert_eq!(fresh.load(), AppState::default());
        }
    }

    describe "save" {
        it "round-trips a well-formed state" {
            let state = sample_state();
            store.save(&state).expect("Failed to save");
            assert_eq!(store.load(), state);
        }

        it "overwrites the previous value" {
            store.save(&sample_state()).expect("Failed to save");
            store.save(&AppState::default()).expect("Failed to save");
            assert_eq!(store.load(), AppState::default());
        }

        it "writes the storage layout" {
            store.save(&sample_state()).expect("Failed to save");
            let raw = store.raw_value().expect("Failed to read").expect("No value");
            let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

            assert_eq!(value["xp"], 3210);
            assert_eq!(value["tasks"]["daily"][1]["name"], "Read");
            for key in ["penalty", "daily", "weekly", "epic", "legendary"] {
                assert!(value["tasks"][key].is_array(), "missing {key}");
            }
        }

        it "fails on an unmigrated database and keeps nothing" {
            let fresh = SqliteStore::open_memory().expect("Failed to create database");
            assert!(fresh.save(&sample_state()).is_err());
            assert!(fresh.raw_value().is_err());
        }
    }

    describe "on disk" {
        it "persists across reopen" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("nested").join("quests.db");

            {
                let store = SqliteStore::open(&path).expect("Failed to open");
                store.migrate().expect("Failed to migrate");
                store.save(&sample_state()).expect("Failed to save");
            }

            let reopened = SqliteStore::open(&path).expect("Failed to reopen");
            reopened.migrate().expect("Failed to migrate");
            assert_eq!(reopened.load(), sample_state());
        }

        it "lets the last writer win between handles" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("quests.db");

            let first = SqliteStore::open(&path).expect("Failed to open");
            first.migrate().expect("Failed to migrate");
            let second = SqliteStore::open(&path).expect("Failed to open");
            second.migrate().expect("Failed to migrate");

            first.save(&sample_state()).expect("Failed to save");
            second.save(&AppState { experience: 1, ..Default::default() }).expect("Failed to save");

            assert_eq!(first.load().experience, 1);
        }
    }

    describe "memory store" {
        it "applies the same repair as sqlite" {
            let memory = MemoryStore::with_raw(r#"{"xp":-3,"tasks":{"daily":[{"name":"Run","xp":"ten"}]}}"#);
            let state = memory.load();
            assert_eq!(state.experience, 0);
            assert_eq!(state.tasks.daily, vec![Task::new("Run", 0)]);
        }

        it "round-trips a well-formed state" {
            let memory = MemoryStore::new();
            memory.save(&sample_state()).expect("Failed to save");
            assert_eq!(memory.load(), sample_state());
        }
    }
}
