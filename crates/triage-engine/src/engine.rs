use tracing::info;

use triage_core::traits::{EventSource, ModelStore};
use triage_core::{Ranking, TriageConfig, TriageError, TriageResult, TrainingSummary};
use triage_features::{aggregate, extract, training_set};
use triage_heuristic::HeuristicScorer;
use triage_training::{loss, Trainer};

use crate::blend;

/// Engine facade over an event source and a model store.
///
/// All numeric paths are pure functions of the event-log snapshot; only the
/// store's save/clear mutate anything, and the event log is read-only
/// throughout.
pub struct PriorityEngine<S: EventSource, M: ModelStore> {
    source: S,
    store: M,
    config: TriageConfig,
    scorer: HeuristicScorer,
    trainer: Trainer,
}

impl<S: EventSource, M: ModelStore> PriorityEngine<S, M> {
    pub fn new(source: S, store: M) -> Self {
        Self::with_config(source, store, TriageConfig::default())
    }

    pub fn with_config(source: S, store: M, config: TriageConfig) -> Self {
        let scorer = HeuristicScorer::new(config.heuristic.clone());
        let trainer = Trainer::new(config.trainer.clone());
        Self {
            source,
            store,
            config,
            scorer,
            trainer,
        }
    }

    /// Read the full event log, fit a fresh model, and persist it.
    ///
    /// An empty or domain-less log fails with `NoTrainingData` before
    /// anything is written; a prior persisted model survives any failure.
    pub fn train(&self) -> TriageResult<TrainingSummary> {
        let events = self.source.events()?;
        let (features, labels) = training_set(&events);
        if features.is_empty() {
            return Err(TriageError::NoTrainingData {
                operation: "train",
                event_count: events.len(),
                domain_count: 0,
            });
        }

        let model = self.trainer.fit(&features, &labels)?;
        let final_loss = loss::binary_cross_entropy(&model.weights, model.bias, &features, &labels)?;
        self.store.save(&model)?;

        let summary = TrainingSummary {
            samples: features.len(),
            epochs: self.config.trainer.epochs,
            final_loss,
        };
        info!(
            samples = summary.samples,
            final_loss = summary.final_loss,
            "training complete"
        );
        Ok(summary)
    }

    /// Rank all domains with the configured blend coefficient.
    pub fn predict(&self) -> TriageResult<Ranking> {
        self.predict_with_alpha(self.config.blend_alpha)
    }

    /// Rank all domains, blending model and heuristic scores with `alpha`.
    ///
    /// An empty event log ranks nothing; a missing trained model falls back
    /// to heuristic-only scores. Neither is an error.
    pub fn predict_with_alpha(&self, alpha: f64) -> TriageResult<Ranking> {
        let events = self.source.events()?;
        if events.is_empty() {
            return Ok(Ranking::new());
        }

        let aggregates = aggregate(&events);
        let heuristic_scores = self.scorer.score_all(&aggregates, &events);
        let features = extract(&events);
        let model = self.store.load()?;

        let ranking = blend::rank(&features, &heuristic_scores, model.as_ref(), alpha)?;
        info!(
            domains = ranking.len(),
            model_loaded = model.is_some(),
            "prediction complete"
        );
        Ok(ranking)
    }

    /// Remove the persisted model. The event log is untouched; the next
    /// prediction falls back to heuristic-only ranking.
    pub fn reset(&self) -> TriageResult<()> {
        self.store.clear()?;
        info!("model reset");
        Ok(())
    }
}
