//! Pure blending of heuristic and model scores into a ranking.

use std::collections::HashMap;

use triage_core::{FeatureVector, Model, RankedDomain, Ranking, TriageResult};

/// Blend per-domain scores and rank.
///
/// Final score per domain is `alpha·model + (1−alpha)·heuristic`; with no
/// trained model the heuristic score stands alone (alpha effectively 0) —
/// a missing model is a valid state, never a failure. `alpha` is clamped to
/// [0,1]. Output is sorted descending by score with ties broken by domain
/// name ascending, so identical inputs always rank identically.
pub fn rank(
    features: &HashMap<String, FeatureVector>,
    heuristic_scores: &HashMap<String, f64>,
    model: Option<&Model>,
    alpha: f64,
) -> TriageResult<Ranking> {
    let alpha = alpha.clamp(0.0, 1.0);

    let mut ranking: Ranking = Vec::with_capacity(heuristic_scores.len());
    for (domain, &heuristic) in heuristic_scores {
        let score = match (model, features.get(domain)) {
            (Some(model), Some(vector)) => {
                let model_score = model.score(vector)?;
                alpha * model_score + (1.0 - alpha) * heuristic
            }
            _ => heuristic,
        };
        ranking.push(RankedDomain {
            domain: domain.clone(),
            score,
        });
    }

    ranking.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.domain.cmp(&b.domain))
    });
    Ok(ranking)
}
