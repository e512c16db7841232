//! End-to-end engine tests over in-memory logs and a real file-backed store.

use triage_core::traits::ModelStore;
use triage_core::{Event, TriageError};
use triage_engine::PriorityEngine;
use triage_storage::{JsonEventLog, JsonModelStore, MemoryEventLog};

fn event(
    domain: &str,
    received: i64,
    opened: bool,
    dismissed: bool,
    action: bool,
    delay: u32,
) -> Event {
    Event {
        domain: domain.to_string(),
        received,
        opened,
        dismissed,
        action_clicked: action,
        delay_seconds: delay,
    }
}

fn engine_in(
    dir: &tempfile::TempDir,
    events: Vec<Event>,
) -> PriorityEngine<MemoryEventLog, JsonModelStore> {
    PriorityEngine::new(
        MemoryEventLog::new(events),
        JsonModelStore::new(dir.path().join("priority_model.json")),
    )
}

#[test]
fn empty_log_trains_with_error_and_predicts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir, vec![]);

    let err = engine.train().unwrap_err();
    assert!(matches!(
        err,
        TriageError::NoTrainingData {
            operation: "train",
            event_count: 0,
            ..
        }
    ));
    assert!(engine.predict().unwrap().is_empty());
}

#[test]
fn no_model_falls_back_to_heuristic_for_any_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(
        &dir,
        vec![
            event("A", 100, true, false, true, 2),
            event("B", 50, false, true, false, 50),
        ],
    );

    let baseline = engine.predict_with_alpha(0.0).unwrap();
    for alpha in [0.3, 0.6, 1.0] {
        assert_eq!(engine.predict_with_alpha(alpha).unwrap(), baseline);
    }
}

#[test]
fn interacted_recent_domain_ranks_first_without_model() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(
        &dir,
        vec![
            event("A", 100, true, false, true, 2),
            event("B", 50, false, true, false, 50),
        ],
    );

    let ranking = engine.predict().unwrap();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].domain, "A");
    assert_eq!(ranking[1].domain, "B");
    assert!(ranking[0].score > ranking[1].score);
}

#[test]
fn prediction_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir, test_fixtures::sample_events());

    engine.train().unwrap();
    let first = engine.predict().unwrap();
    let second = engine.predict().unwrap();
    assert_eq!(first, second);
}

#[test]
fn training_weights_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir, test_fixtures::sample_events());
    let store = JsonModelStore::new(dir.path().join("priority_model.json"));

    engine.train().unwrap();
    let first = store.load().unwrap().unwrap();
    engine.train().unwrap();
    let second = store.load().unwrap().unwrap();

    assert_eq!(first.weights, second.weights);
    assert_eq!(first.bias, second.bias);
}

#[test]
fn golden_dataset_trains_and_ranks_sensibly() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir, test_fixtures::sample_events());

    let summary = engine.train().unwrap();
    assert_eq!(summary.samples, 13);
    // Better than predicting 0.5 for everything.
    assert!(summary.final_loss < std::f64::consts::LN_2);

    let store = JsonModelStore::new(dir.path().join("priority_model.json"));
    assert!(store.load().unwrap().is_some());

    let ranking = engine.predict().unwrap();
    assert_eq!(ranking.len(), 4);
    assert_eq!(ranking[0].domain, "Messengers");
    assert_eq!(ranking[3].domain, "Promotions");
}

#[test]
fn reset_clears_model_but_never_the_event_log() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("sample_dataset.json");
    std::fs::copy(
        test_fixtures::fixture_path("sample_dataset.json"),
        &dataset_path,
    )
    .unwrap();

    let store = JsonModelStore::new(dir.path().join("priority_model.json"));
    let engine = PriorityEngine::new(
        JsonEventLog::new(&dataset_path),
        JsonModelStore::new(dir.path().join("priority_model.json")),
    );

    engine.train().unwrap();
    let log_before = std::fs::read(&dataset_path).unwrap();

    engine.reset().unwrap();

    assert!(store.load().unwrap().is_none());
    assert_eq!(std::fs::read(&dataset_path).unwrap(), log_before);

    // Post-reset prediction equals heuristic-only ranking.
    let after_reset = engine.predict().unwrap();
    assert_eq!(after_reset, engine.predict_with_alpha(0.0).unwrap());
}

#[test]
fn alpha_zero_matches_pre_training_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir, test_fixtures::sample_events());

    let heuristic_only = engine.predict().unwrap();
    engine.train().unwrap();
    assert_eq!(engine.predict_with_alpha(0.0).unwrap(), heuristic_only);
}
