use serde::{Deserialize, Serialize};
use crate::core::distance::travel_minutes;
use crate::models::{
    ContributionRange, GuestRequest, HostContribution, HostOffer, MatchingPolicy, ScoringWeights,
    StyleProfile,
};

/// Score used whenever either side declined to state a contribution
pub const UNSTATED_CONTRIBUTION_SCORE: f64 = 0.7;

/// Score returned for capacity when there is no capacity at all
const NEUTRAL_CAPACITY_SCORE: f64 = 0.5;

/// Largest gap between two positions on the contribution scale
const MAX_CONTRIBUTION_GAP: f64 = 5.0;

/// Positions on the contribution scale:
/// none, prefer not to say, $0-10, $10-25, $25-50, $50+
const UNSTATED_POSITION: u8 = 1;

/// Distance between the (1,1,1) and (5,5,5) style corners
#[inline]
fn max_style_distance() -> f64 {
    (3.0_f64 * 4.0 * 4.0).sqrt()
}

/// The four sub-scores behind a pairing's total, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub style: f64,
    pub contribution: f64,
    pub capacity: f64,
}

impl ScoreBreakdown {
    /// Weighted sum. Weights are used as given, never renormalized.
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        self.distance * weights.distance
            + self.style * weights.style
            + self.contribution * weights.contribution
            + self.capacity * weights.capacity
    }
}

/// Compute every sub-score for a guest/host pairing
pub fn score_breakdown(
    guest: &GuestRequest,
    host: &HostOffer,
    remaining_capacity: u32,
    total_capacity: u64,
) -> ScoreBreakdown {
    ScoreBreakdown {
        distance: distance_score(guest, host),
        style: style_score(&guest.style, &host.style),
        contribution: contribution_score(guest.contribution, host.contribution),
        capacity: capacity_score(remaining_capacity, total_capacity),
    }
}

/// Calculate the weighted match score for a guest/host pairing
///
/// Scoring formula:
/// score = (
///     distance_score * w.distance +        # Shorter trip = higher
///     style_score * w.style +              # Closer vibe sliders = higher
///     contribution_score * w.contribution + # Aligned expectations = higher
///     capacity_score * w.capacity          # More open seats = higher
/// )
///
/// # Arguments
/// * `remaining_capacity` - Host's open seats at scoring time
/// * `total_capacity` - Starting seats summed over every host in the run
pub fn calculate_total_score(
    guest: &GuestRequest,
    host: &HostOffer,
    remaining_capacity: u32,
    total_capacity: u64,
    policy: &MatchingPolicy,
) -> f64 {
    score_breakdown(guest, host, remaining_capacity, total_capacity).weighted(&policy.weights)
}

/// Linear decay from 1.0 at zero minutes to 0.0 at the guest's limit.
/// "No limit" guests are scored against the sentinel minutes value.
pub fn distance_score(guest: &GuestRequest, host: &HostOffer) -> f64 {
    let travel = f64::from(travel_minutes(&guest.neighborhood, &host.neighborhood));
    let max_travel = f64::from(guest.max_travel.minutes());

    if travel >= max_travel {
        return 0.0;
    }

    1.0 - travel / max_travel
}

/// One minus the normalized Euclidean distance between two style vectors
pub fn style_score(guest: &StyleProfile, host: &StyleProfile) -> f64 {
    let diff = |a: u8, b: u8| f64::from(a) - f64::from(b);

    let distance = (diff(guest.observance, host.observance).powi(2)
        + diff(guest.social, host.social).powi(2)
        + diff(guest.formality, host.formality).powi(2))
    .sqrt();

    (1.0 - distance / max_style_distance()).clamp(0.0, 1.0)
}

fn guest_position(range: ContributionRange) -> u8 {
    match range {
        ContributionRange::PreferNotToSay => UNSTATED_POSITION,
        ContributionRange::UpToTen => 2,
        ContributionRange::TenToTwentyFive => 3,
        ContributionRange::TwentyFiveToFifty => 4,
        ContributionRange::FiftyPlus => 5,
    }
}

fn host_position(preference: HostContribution) -> u8 {
    match preference {
        HostContribution::NoContribution => 0,
        HostContribution::PreferNotToSay => UNSTATED_POSITION,
        HostContribution::UpToTen => 2,
        HostContribution::TenToTwentyFive => 3,
        HostContribution::TwentyFiveToFifty => 4,
        HostContribution::FiftyPlus => 5,
    }
}

/// How well contribution expectations line up.
///
/// An unstated side wins over everything, including a host that needs
/// no contribution.
pub fn contribution_score(guest: ContributionRange, host: HostContribution) -> f64 {
    let guest_pos = guest_position(guest);
    let host_pos = host_position(host);

    if guest_pos == UNSTATED_POSITION || host_pos == UNSTATED_POSITION {
        return UNSTATED_CONTRIBUTION_SCORE;
    }

    if host == HostContribution::NoContribution {
        return 1.0;
    }

    let gap = f64::from(guest_pos.abs_diff(host_pos));
    1.0 - gap / MAX_CONTRIBUTION_GAP
}

/// Share of the run's total seats this host still has open
#[inline]
pub fn capacity_score(remaining_capacity: u32, total_capacity: u64) -> f64 {
    if total_capacity == 0 {
        return NEUTRAL_CAPACITY_SCORE;
    }

    (f64::from(remaining_capacity) / total_capacity as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryRequirement, KosherLevel, TravelLimit};

    fn create_test_guest(neighborhood: &str, max_travel: TravelLimit) -> GuestRequest {
        GuestRequest {
            id: "guest".to_string(),
            full_name: "Test Guest".to_string(),
            party_size: 1,
            neighborhood: neighborhood.to_string(),
            max_travel,
            languages: vec!["English".to_string()],
            dietary: DietaryRequirement::KosherTakeout,
            contribution: ContributionRange::TenToTwentyFive,
            style: StyleProfile::new(3, 3, 3),
            is_flagged: false,
            no_show_count: 0,
        }
    }

    fn create_test_host(neighborhood: &str) -> HostOffer {
        HostOffer {
            id: "host".to_string(),
            full_name: "Test Host".to_string(),
            seats_available: 6,
            neighborhood: neighborhood.to_string(),
            languages: vec!["English".to_string()],
            kosher_level: KosherLevel::FullKosher,
            contribution: HostContribution::TenToTwentyFive,
            style: StyleProfile::new(3, 3, 3),
        }
    }

    #[test]
    fn test_distance_score() {
        // 15 minutes against a 30 minute limit
        let guest = create_test_guest("Upper West Side", TravelLimit::Thirty);
        let host = create_test_host("Midtown West");
        assert!((distance_score(&guest, &host) - 0.5).abs() < 1e-9);

        // At the limit scores zero
        let guest = create_test_guest("Upper West Side", TravelLimit::Fifteen);
        assert_eq!(distance_score(&guest, &host), 0.0);
    }

    #[test]
    fn test_distance_score_without_limit_uses_sentinel() {
        let guest = create_test_guest("Financial District", TravelLimit::NoLimit);
        let host = create_test_host("Washington Heights");

        let score = distance_score(&guest, &host);
        assert!((score - (1.0 - 50.0 / 999.0)).abs() < 1e-9);
    }

    #[test]
    fn test_style_score_extremes() {
        let low = StyleProfile::new(1, 1, 1);
        let high = StyleProfile::new(5, 5, 5);

        assert_eq!(style_score(&low, &low), 1.0);
        assert!(style_score(&low, &high).abs() < 1e-9);

        let mid = style_score(&StyleProfile::new(3, 3, 3), &StyleProfile::new(3, 3, 5));
        assert!(mid > 0.7 && mid < 0.72);
    }

    #[test]
    fn test_contribution_unstated_beats_no_contribution() {
        assert_eq!(
            contribution_score(ContributionRange::PreferNotToSay, HostContribution::NoContribution),
            UNSTATED_CONTRIBUTION_SCORE
        );
        assert_eq!(
            contribution_score(ContributionRange::FiftyPlus, HostContribution::PreferNotToSay),
            UNSTATED_CONTRIBUTION_SCORE
        );
    }

    #[test]
    fn test_contribution_no_contribution_host() {
        assert_eq!(
            contribution_score(ContributionRange::FiftyPlus, HostContribution::NoContribution),
            1.0
        );
    }

    #[test]
    fn test_contribution_gap_decays_linearly() {
        assert_eq!(
            contribution_score(ContributionRange::UpToTen, HostContribution::UpToTen),
            1.0
        );
        let score = contribution_score(ContributionRange::UpToTen, HostContribution::FiftyPlus);
        assert!((score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_score() {
        assert_eq!(capacity_score(5, 10), 0.5);
        assert_eq!(capacity_score(0, 10), 0.0);
        assert_eq!(capacity_score(3, 0), NEUTRAL_CAPACITY_SCORE);
    }

    #[test]
    fn test_capacity_score_with_huge_pool() {
        let total = 2 * u64::from(u32::MAX);
        assert_eq!(capacity_score(u32::MAX, total), 0.5);
        assert_eq!(capacity_score(u32::MAX, 1), 1.0);
    }

    #[test]
    fn test_total_score_is_weighted_sum() {
        let guest = create_test_guest("Chelsea", TravelLimit::Thirty);
        let host = create_test_host("Chelsea");
        let policy = MatchingPolicy::default();

        let breakdown = score_breakdown(&guest, &host, 6, 12);
        let total = calculate_total_score(&guest, &host, 6, 12, &policy);

        // distance 1 - 5/30, style 1, contribution 1, capacity 0.5
        let expected = (1.0 - 5.0 / 30.0) * 0.25 + 0.35 + 0.15 + 0.5 * 0.25;
        assert!((total - expected).abs() < 1e-9);
        assert_eq!(total, breakdown.weighted(&policy.weights));
        assert!((0.0..=1.0).contains(&total));
    }

    #[test]
    fn test_weights_are_not_renormalized() {
        let guest = create_test_guest("Chelsea", TravelLimit::Thirty);
        let host = create_test_host("Chelsea");
        let mut policy = MatchingPolicy::default();
        policy.weights = ScoringWeights {
            distance: 0.0,
            style: 2.0,
            contribution: 0.0,
            capacity: 0.0,
        };

        assert_eq!(calculate_total_score(&guest, &host, 6, 12, &policy), 2.0);
    }
}
