//! Shabbat Match - guest/host assignment engine for community Shabbat dinners
//!
//! This library places dinner guests at host tables in a single batch pass.
//! Hard eligibility rules (seats, kosher level, language, travel time) gate
//! every pairing; a weighted compatibility score ranks the eligible ones; a
//! greedy hardest-first pass commits guests while tracking seats.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{explain, ineligibility_reasons, is_eligible, travel_minutes, GreedyMatcher, InvariantViolation, MatchingEngine};
pub use crate::models::{AssignmentRun, GuestRequest, HostOffer, MatchingPolicy, ProposedAssignment, RunStats};
