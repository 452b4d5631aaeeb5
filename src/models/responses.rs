use serde::{Deserialize, Serialize};
use super::GuestRequest;

/// A single proposed guest/host pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedAssignment {
    #[serde(rename = "guestId")]
    pub guest_id: String,
    #[serde(rename = "hostId")]
    pub host_id: String,
    pub score: f64,
    /// "Why it's a fit" text shown to the guest
    pub rationale: String,
    /// Other hosts that were eligible and had room when this guest was placed
    pub alternatives: Vec<String>,
}

/// Counts describing a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(rename = "totalGuests")]
    pub total_guests: usize,
    #[serde(rename = "matchedGuests")]
    pub matched_guests: usize,
    #[serde(rename = "unmatchedGuests")]
    pub unmatched_guests: usize,
    #[serde(rename = "hostsUsed")]
    pub hosts_used: usize,
    #[serde(rename = "totalHosts")]
    pub total_hosts: usize,
}

/// Output of one matching run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRun {
    pub assignments: Vec<ProposedAssignment>,
    /// Guest ids that could not be placed
    pub unplaced: Vec<String>,
    pub stats: RunStats,
    /// Set when the run short-circuited on degenerate input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AssignmentRun {
    /// Empty run that leaves every guest unplaced, with a note saying why
    pub fn skipped(guests: &[GuestRequest], total_hosts: usize, note: &str) -> Self {
        let unplaced: Vec<String> = guests.iter().map(|g| g.id.clone()).collect();

        Self {
            assignments: Vec::new(),
            stats: RunStats {
                total_guests: guests.len(),
                matched_guests: 0,
                unmatched_guests: unplaced.len(),
                hosts_used: 0,
                total_hosts,
            },
            unplaced,
            note: Some(note.to_string()),
        }
    }

    /// Assignment for a guest, if one was made
    pub fn assignment_for(&self, guest_id: &str) -> Option<&ProposedAssignment> {
        self.assignments.iter().find(|a| a.guest_id == guest_id)
    }

    pub fn is_unplaced(&self, guest_id: &str) -> bool {
        self.unplaced.iter().any(|id| id == guest_id)
    }
}
