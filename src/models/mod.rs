// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ContributionRange, DietaryRequirement, GuestRequest, HostContribution, HostOffer,
    InvalidTravelLimit, KosherLevel, MatchStatus, MatchingPolicy, ScoringWeights, StyleProfile,
    TravelLimit, NO_LIMIT_MINUTES,
};
pub use requests::{Commitment, MatchingSnapshot};
pub use responses::{AssignmentRun, ProposedAssignment, RunStats};
