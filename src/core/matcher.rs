use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, error, info, warn};
use crate::models::{AssignmentRun, GuestRequest, HostOffer, MatchingPolicy, ProposedAssignment, RunStats};
use crate::core::{
    explain::explain,
    filters::is_eligible,
    invariants::{verify_invariants, InvariantViolation},
    scoring::calculate_total_score,
};

/// Note attached when there is nothing to match
pub const NOTE_NOTHING_TO_MATCH: &str = "No guests or hosts available for matching";

/// Note attached when every host is already full
pub const NOTE_NO_CAPACITY: &str = "No hosts with available capacity";

/// Any assignment strategy the batch runner can plug in.
///
/// # Guarantees
/// * No guest is assigned to more than one host
/// * No host receives more guests than its starting `seats_available`
/// * Every guest ends up either assigned or unplaced, never both
pub trait MatchingEngine {
    fn generate_matches(
        &self,
        guests: &[GuestRequest],
        hosts: &[HostOffer],
        policy: &MatchingPolicy,
    ) -> Result<AssignmentRun, InvariantViolation>;
}

/// Greedy hardest-first assignment
///
/// # Pipeline Stages
/// 1. Reliability gate for flagged repeat no-shows
/// 2. Eligibility filtering and scoring against starting capacity
/// 3. Ordering guests by how few hosts they can go to
/// 4. Committing each guest to its best host that still has room
/// 5. Verifying the structural invariants of the result
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMatcher;

/// A guest with its eligible hosts ranked by score
struct GuestOptions<'a> {
    guest: &'a GuestRequest,
    /// (host index, score), best first
    ranked_hosts: Vec<(usize, f64)>,
}

impl GreedyMatcher {
    pub fn new() -> Self {
        Self
    }

    fn rank_hosts<'a>(
        guest: &'a GuestRequest,
        hosts: &[HostOffer],
        remaining: &[u32],
        total_capacity: u64,
        policy: &MatchingPolicy,
    ) -> GuestOptions<'a> {
        let mut ranked_hosts: Vec<(usize, f64)> = hosts
            .iter()
            .enumerate()
            .filter(|(idx, host)| is_eligible(guest, host, remaining[*idx]))
            .map(|(idx, host)| {
                let score =
                    calculate_total_score(guest, host, remaining[idx], total_capacity, policy);
                (idx, score)
            })
            .filter(|(_, score)| *score >= policy.min_score_threshold)
            .collect();

        // Stable: equal scores keep host input order
        ranked_hosts.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        GuestOptions { guest, ranked_hosts }
    }

    fn degenerate(guests: &[GuestRequest], total_hosts: usize, note: &str) -> AssignmentRun {
        warn!("Matching skipped: {}", note);
        AssignmentRun::skipped(guests, total_hosts, note)
    }
}

impl MatchingEngine for GreedyMatcher {
    fn generate_matches(
        &self,
        guests: &[GuestRequest],
        hosts: &[HostOffer],
        policy: &MatchingPolicy,
    ) -> Result<AssignmentRun, InvariantViolation> {
        if guests.is_empty() || hosts.is_empty() {
            return Ok(Self::degenerate(guests, hosts.len(), NOTE_NOTHING_TO_MATCH));
        }

        let mut remaining: Vec<u32> = hosts.iter().map(|h| h.seats_available).collect();
        // Summed wide; each host may offer up to u32::MAX seats
        let total_capacity: u64 = remaining.iter().map(|&seats| u64::from(seats)).sum();

        if total_capacity == 0 {
            return Ok(Self::degenerate(guests, hosts.len(), NOTE_NO_CAPACITY));
        }

        let mut unplaced: Vec<String> = Vec::new();

        // Stage 1 & 2: gate, then rank hosts from the starting snapshot
        let mut options: Vec<GuestOptions> = Vec::with_capacity(guests.len());
        for guest in guests {
            if guest.is_reliability_gated() {
                debug!(
                    "Guest {} skipped: flagged with {} no-shows",
                    guest.id, guest.no_show_count
                );
                unplaced.push(guest.id.clone());
                continue;
            }

            options.push(Self::rank_hosts(guest, hosts, &remaining, total_capacity, policy));
        }

        // Stage 3: fewest options first; stable sort keeps input order on ties
        options.sort_by_key(|o| o.ranked_hosts.len());

        // Stage 4: commit greedily, capacity shrinks as we go
        let mut assigned: HashSet<&str> = HashSet::with_capacity(options.len());
        let mut assignments: Vec<ProposedAssignment> = Vec::with_capacity(options.len());

        for GuestOptions { guest, ranked_hosts } in options {
            if assigned.contains(guest.id.as_str()) {
                warn!("Guest {} appears more than once in the input", guest.id);
                continue;
            }

            let mut chosen: Option<(usize, f64)> = None;
            let mut alternatives: Vec<String> = Vec::new();

            for &(idx, score) in &ranked_hosts {
                if remaining[idx] < guest.party_size {
                    continue;
                }

                if chosen.is_none() {
                    chosen = Some((idx, score));
                } else if alternatives.len() < policy.max_alternatives {
                    alternatives.push(hosts[idx].id.clone());
                } else {
                    break;
                }
            }

            match chosen {
                Some((idx, score)) => {
                    let host = &hosts[idx];

                    // Whole party, not one seat
                    remaining[idx] -= guest.party_size;
                    assigned.insert(guest.id.as_str());

                    debug!(
                        "Guest {} (party of {}) -> host {} (score {:.3}, {} seats left)",
                        guest.id, guest.party_size, host.id, score, remaining[idx]
                    );

                    assignments.push(ProposedAssignment {
                        guest_id: guest.id.clone(),
                        host_id: host.id.clone(),
                        score,
                        rationale: explain(guest, host),
                        alternatives,
                    });
                }
                None => {
                    debug!(
                        "Guest {} unplaced ({} hosts ranked, none with room)",
                        guest.id,
                        ranked_hosts.len()
                    );
                    unplaced.push(guest.id.clone());
                }
            }
        }

        // Stage 5
        verify_invariants(&assignments, &unplaced, guests, hosts, &remaining).map_err(|e| {
            error!("INVARIANT VIOLATION: {}", e);
            e
        })?;

        let hosts_used = assignments
            .iter()
            .map(|a| a.host_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let stats = RunStats {
            total_guests: guests.len(),
            matched_guests: assignments.len(),
            unmatched_guests: unplaced.len(),
            hosts_used,
            total_hosts: hosts.len(),
        };

        info!(
            "Matching complete: {} matched, {} unplaced, {}/{} hosts used",
            stats.matched_guests, stats.unmatched_guests, stats.hosts_used, stats.total_hosts
        );

        Ok(AssignmentRun {
            assignments,
            unplaced,
            stats,
            note: None,
        })
    }
}
