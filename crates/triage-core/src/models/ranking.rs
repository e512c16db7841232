use serde::{Deserialize, Serialize};

/// One entry in a priority ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDomain {
    pub domain: String,
    pub score: f64,
}

/// Domains sorted descending by blended score; ties broken by domain name
/// ascending so identical inputs always produce identical output.
pub type Ranking = Vec<RankedDomain>;
