use std::collections::{HashMap, HashSet};
use thiserror::Error;
use crate::core::filters::{check_dietary, check_language_overlap, check_travel};
use crate::models::{GuestRequest, HostOffer, ProposedAssignment};

/// A structural guarantee of the assignment was broken.
///
/// These are defects in the matching code, never business outcomes:
/// a run that produces one must not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Guest {0} was assigned more than once")]
    DuplicateGuest(String),

    #[error("Assignment references unknown guest {0}")]
    UnknownGuest(String),

    #[error("Assignment references unknown host {0}")]
    UnknownHost(String),

    #[error("Host {host_id} seats {seats_used} guests but only offered {seats_available}")]
    CapacityExceeded {
        host_id: String,
        seats_used: u32,
        seats_available: u32,
    },

    #[error("Capacity bookkeeping for host {host_id} says {tracked} seats remain, assignments imply {derived}")]
    BookkeepingMismatch {
        host_id: String,
        tracked: u32,
        derived: u32,
    },

    #[error("Guest {guest_id} was assigned to ineligible host {host_id}")]
    IneligiblePairing { guest_id: String, host_id: String },

    #[error("Guest {0} is both assigned and unplaced")]
    AssignedAndUnplaced(String),

    #[error("{considered} guests were considered but {accounted} were accounted for")]
    GuestConservation { considered: usize, accounted: usize },
}

/// Re-derive seat usage from the finished assignment and check it against
/// the run's own bookkeeping.
///
/// # Arguments
/// * `assignments` - Committed assignments of the run
/// * `unplaced` - Guest ids the run could not place
/// * `guests` - Every guest handed to the run
/// * `hosts` - Every host handed to the run, with starting capacity
/// * `remaining` - The run's remaining-capacity counters, parallel to `hosts`
pub fn verify_invariants(
    assignments: &[ProposedAssignment],
    unplaced: &[String],
    guests: &[GuestRequest],
    hosts: &[HostOffer],
    remaining: &[u32],
) -> Result<(), InvariantViolation> {
    let guest_lookup: HashMap<&str, &GuestRequest> =
        guests.iter().map(|g| (g.id.as_str(), g)).collect();
    let host_lookup: HashMap<&str, &HostOffer> =
        hosts.iter().map(|h| (h.id.as_str(), h)).collect();

    let mut assigned: HashSet<&str> = HashSet::with_capacity(assignments.len());
    let mut seats_used: HashMap<&str, u32> = HashMap::with_capacity(hosts.len());

    for assignment in assignments {
        if !assigned.insert(assignment.guest_id.as_str()) {
            return Err(InvariantViolation::DuplicateGuest(assignment.guest_id.clone()));
        }

        let guest = guest_lookup
            .get(assignment.guest_id.as_str())
            .ok_or_else(|| InvariantViolation::UnknownGuest(assignment.guest_id.clone()))?;
        let host = host_lookup
            .get(assignment.host_id.as_str())
            .ok_or_else(|| InvariantViolation::UnknownHost(assignment.host_id.clone()))?;

        // Capacity is covered by the seat totals below
        if !(check_dietary(guest, host) && check_language_overlap(guest, host) && check_travel(guest, host))
        {
            return Err(InvariantViolation::IneligiblePairing {
                guest_id: guest.id.clone(),
                host_id: host.id.clone(),
            });
        }

        *seats_used.entry(host.id.as_str()).or_default() += guest.party_size;
    }

    for (host, &tracked) in hosts.iter().zip(remaining) {
        let used = seats_used.get(host.id.as_str()).copied().unwrap_or(0);

        if used > host.seats_available {
            return Err(InvariantViolation::CapacityExceeded {
                host_id: host.id.clone(),
                seats_used: used,
                seats_available: host.seats_available,
            });
        }

        let derived = host.seats_available - used;
        if derived != tracked {
            return Err(InvariantViolation::BookkeepingMismatch {
                host_id: host.id.clone(),
                tracked,
                derived,
            });
        }
    }

    if let Some(id) = unplaced.iter().find(|id| assigned.contains(id.as_str())) {
        return Err(InvariantViolation::AssignedAndUnplaced(id.clone()));
    }

    let accounted = assignments.len() + unplaced.len();
    if accounted != guests.len() {
        return Err(InvariantViolation::GuestConservation {
            considered: guests.len(),
            accounted,
        });
    }

    Ok(())
}
