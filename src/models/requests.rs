use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};
use crate::models::domain::{GuestRequest, HostOffer, MatchStatus};

/// Seats already promised to a guest outside this run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Commitment {
    #[serde(rename = "guestId")]
    #[validate(length(min = 1))]
    pub guest_id: String,
    #[serde(rename = "hostId")]
    #[validate(length(min = 1))]
    pub host_id: String,
    #[serde(rename = "partySize")]
    #[validate(range(min = 1))]
    pub party_size: u32,
    pub status: MatchStatus,
}

/// Everything a batch run reads: the guest and host pools plus
/// the matches already in flight against them
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_ids"))]
pub struct MatchingSnapshot {
    #[serde(default)]
    #[validate(nested)]
    pub guests: Vec<GuestRequest>,
    #[serde(default)]
    #[validate(nested)]
    pub hosts: Vec<HostOffer>,
    #[serde(default)]
    #[validate(nested)]
    pub commitments: Vec<Commitment>,
}

fn validate_unique_ids(snapshot: &MatchingSnapshot) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(snapshot.guests.len());
    if !snapshot.guests.iter().all(|g| seen.insert(g.id.as_str())) {
        return Err(ValidationError::new("duplicate_guest_id"));
    }

    let mut seen = HashSet::with_capacity(snapshot.hosts.len());
    if !snapshot.hosts.iter().all(|h| seen.insert(h.id.as_str())) {
        return Err(ValidationError::new("duplicate_host_id"));
    }

    Ok(())
}
