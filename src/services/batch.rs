use tracing::{info, warn};
use crate::core::{
    matcher::{NOTE_NOTHING_TO_MATCH, NOTE_NO_CAPACITY},
    InvariantViolation, MatchingEngine,
};
use crate::models::{AssignmentRun, MatchingPolicy, MatchingSnapshot};
use crate::services::pool::{pending_guests, prepare_host_pool};

/// Run one matching pass over a snapshot.
///
/// Guests with a live match are left out and host seats are reduced by
/// held commitments before the engine sees them. The two degenerate cases
/// are told apart: nobody to match at all, or hosts exist but every seat
/// is already taken.
pub fn run_snapshot<E: MatchingEngine>(
    engine: &E,
    snapshot: MatchingSnapshot,
    policy: &MatchingPolicy,
) -> Result<AssignmentRun, InvariantViolation> {
    let MatchingSnapshot {
        guests,
        hosts,
        commitments,
    } = snapshot;

    let guests = pending_guests(guests, &commitments);

    if guests.is_empty() || hosts.is_empty() {
        warn!("Matching skipped: {}", NOTE_NOTHING_TO_MATCH);
        return Ok(AssignmentRun::skipped(&guests, hosts.len(), NOTE_NOTHING_TO_MATCH));
    }

    let total_hosts = hosts.len();
    let hosts = prepare_host_pool(hosts, &commitments);

    if hosts.is_empty() {
        warn!("Matching skipped: {}", NOTE_NO_CAPACITY);
        return Ok(AssignmentRun::skipped(&guests, total_hosts, NOTE_NO_CAPACITY));
    }

    info!(
        "Matching {} pending guests against {} of {} hosts with open seats",
        guests.len(),
        hosts.len(),
        total_hosts
    );

    engine.generate_matches(&guests, &hosts, policy)
}
