//! Fixture loader for the golden sample dataset shared by integration tests.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use triage_core::Event;

/// Absolute path to a fixture file bundled with this crate.
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative)
}

/// Load and deserialize a JSON fixture.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized — fixtures are
/// part of the repository and missing ones are test bugs.
pub fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    let path = fixture_path(relative);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

#[derive(Debug, Deserialize)]
struct Dataset {
    events: Vec<Event>,
}

/// Events from the golden sample dataset.
pub fn sample_events() -> Vec<Event> {
    let dataset: Dataset = load_fixture("sample_dataset.json");
    dataset.events
}
