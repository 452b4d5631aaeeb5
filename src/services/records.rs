use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::{AssignmentRun, MatchStatus, ProposedAssignment};

/// A match as handed to the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    #[serde(rename = "guestId")]
    pub guest_id: String,
    #[serde(rename = "hostId")]
    pub host_id: String,
    pub status: MatchStatus,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "whyItsAFit")]
    pub why_its_a_fit: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// New record in the initial `proposed` state
    pub fn proposed(assignment: &ProposedAssignment) -> Self {
        Self {
            id: Uuid::new_v4(),
            guest_id: assignment.guest_id.clone(),
            host_id: assignment.host_id.clone(),
            status: MatchStatus::Proposed,
            match_score: assignment.score,
            why_its_a_fit: assignment.rationale.clone(),
            created_at: Utc::now(),
        }
    }
}

/// One `proposed` record per assignment in the run
pub fn to_match_records(run: &AssignmentRun) -> Vec<MatchRecord> {
    run.assignments.iter().map(MatchRecord::proposed).collect()
}
