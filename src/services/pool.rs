use std::collections::{HashMap, HashSet};
use crate::models::{Commitment, GuestRequest, HostOffer};

/// Guests that still need a table.
///
/// Anyone with a live match (proposed, requested, accepted or confirmed)
/// is left out of the run.
pub fn pending_guests(guests: Vec<GuestRequest>, commitments: &[Commitment]) -> Vec<GuestRequest> {
    let matched: HashSet<&str> = commitments
        .iter()
        .filter(|c| c.status.is_active())
        .map(|c| c.guest_id.as_str())
        .collect();

    guests
        .into_iter()
        .filter(|g| !matched.contains(g.id.as_str()))
        .collect()
}

/// Reduce each host's seats by the parties already holding seats there,
/// then drop hosts with nothing left.
///
/// Only requested, accepted and confirmed matches hold seats; a merely
/// proposed match does not.
pub fn prepare_host_pool(hosts: Vec<HostOffer>, commitments: &[Commitment]) -> Vec<HostOffer> {
    let mut held: HashMap<&str, u32> = HashMap::new();
    for commitment in commitments.iter().filter(|c| c.status.holds_seats()) {
        let seats = held.entry(commitment.host_id.as_str()).or_default();
        *seats = seats.saturating_add(commitment.party_size);
    }

    hosts
        .into_iter()
        .filter_map(|mut host| {
            let taken = held.get(host.id.as_str()).copied().unwrap_or(0);
            host.seats_available = host.seats_available.saturating_sub(taken);

            if host.seats_available == 0 {
                tracing::debug!("Host {} has no seats left, dropped from pool", host.id);
                None
            } else {
                Some(host)
            }
        })
        .collect()
}
