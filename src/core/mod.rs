// Core algorithm exports
pub mod distance;
pub mod explain;
pub mod filters;
pub mod invariants;
pub mod matcher;
pub mod scoring;

pub use distance::{travel_minutes, Neighborhood, FALLBACK_TRAVEL_MINUTES};
pub use explain::{explain, explain_for_host};
pub use filters::{ineligibility_reasons, is_eligible};
pub use invariants::{verify_invariants, InvariantViolation};
pub use matcher::{GreedyMatcher, MatchingEngine};
pub use scoring::{calculate_total_score, score_breakdown, ScoreBreakdown};
