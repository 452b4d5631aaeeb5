use serde::{Deserialize, Serialize};
use crate::core::{explain::explain, filters::ineligibility_reasons, scoring::{score_breakdown, ScoreBreakdown}};
use crate::models::{GuestRequest, HostOffer, MatchingPolicy};

/// Everything an admin needs to judge a single guest/host pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEvaluation {
    pub eligible: bool,
    /// Empty when eligible
    pub reasons: Vec<String>,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub rationale: String,
}

/// Evaluate one pairing outside of a batch run, e.g. when a guest is
/// moved to a different host by hand.
///
/// # Arguments
/// * `remaining_capacity` - Host's currently open seats
/// * `total_capacity` - Seats across the host pool, for the capacity sub-score
pub fn evaluate_pair(
    guest: &GuestRequest,
    host: &HostOffer,
    remaining_capacity: u32,
    total_capacity: u64,
    policy: &MatchingPolicy,
) -> PairEvaluation {
    let reasons = ineligibility_reasons(guest, host, remaining_capacity);
    let breakdown = score_breakdown(guest, host, remaining_capacity, total_capacity);

    PairEvaluation {
        eligible: reasons.is_empty(),
        reasons,
        score: breakdown.weighted(&policy.weights),
        breakdown,
        rationale: explain(guest, host),
    }
}
