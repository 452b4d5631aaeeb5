// Unit tests for Shabbat Match

use shabbat_match::core::{
    distance::{travel_minutes, FALLBACK_TRAVEL_MINUTES},
    explain::{explain, explain_for_host},
    filters::{acceptable_kosher_levels, ineligibility_reasons, is_eligible},
    scoring::{calculate_total_score, contribution_score, distance_score, style_score},
};
use shabbat_match::models::{
    ContributionRange, DietaryRequirement, GuestRequest, HostContribution, HostOffer, KosherLevel,
    MatchingPolicy, ScoringWeights, StyleProfile, TravelLimit,
};
use shabbat_match::services::evaluate_pair;

fn create_guest() -> GuestRequest {
    GuestRequest {
        id: "guest".to_string(),
        full_name: "Miriam Katz".to_string(),
        party_size: 2,
        neighborhood: "East Village / NoHo".to_string(),
        max_travel: TravelLimit::Thirty,
        languages: vec!["English".to_string()],
        dietary: DietaryRequirement::NotKosherHome,
        contribution: ContributionRange::TwentyFiveToFifty,
        style: StyleProfile::new(2, 4, 2),
        is_flagged: false,
        no_show_count: 0,
    }
}

fn create_host() -> HostOffer {
    HostOffer {
        id: "host".to_string(),
        full_name: "The Goldbergs".to_string(),
        seats_available: 8,
        neighborhood: "Lower East Side".to_string(),
        languages: vec!["English".to_string(), "Portuguese".to_string()],
        kosher_level: KosherLevel::VegetarianHome,
        contribution: HostContribution::FiftyPlus,
        style: StyleProfile::new(2, 5, 1),
    }
}

#[test]
fn test_travel_minutes_directional_lookup() {
    assert_eq!(travel_minutes("East Village / NoHo", "Lower East Side"), 10);
    assert_eq!(travel_minutes("Lower East Side", "East Village / NoHo"), 10);
    assert_eq!(travel_minutes("east village / noho", "Lower East Side"), FALLBACK_TRAVEL_MINUTES);
}

#[test]
fn test_not_kosher_home_accepts_every_kitchen() {
    let levels = acceptable_kosher_levels(DietaryRequirement::NotKosherHome);
    assert_eq!(levels.len(), 3);
}

#[test]
fn test_eligibility_for_realistic_pair() {
    let guest = create_guest();
    let host = create_host();

    assert!(is_eligible(&guest, &host, 8));
    assert!(is_eligible(&guest, &host, 2));
    assert!(!is_eligible(&guest, &host, 1));
    assert_eq!(
        ineligibility_reasons(&guest, &host, 1),
        vec!["Insufficient capacity (needs 2, has 1)".to_string()]
    );
}

#[test]
fn test_sub_scores_in_unit_range() {
    let guest = create_guest();
    let host = create_host();

    for score in [
        distance_score(&guest, &host),
        style_score(&guest.style, &host.style),
        contribution_score(guest.contribution, host.contribution),
    ] {
        assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }
}

#[test]
fn test_contribution_adjacent_tiers() {
    let score = contribution_score(ContributionRange::TwentyFiveToFifty, HostContribution::FiftyPlus);
    assert!((score - 0.8).abs() < 1e-9);
}

#[test]
fn test_zero_weights_give_zero_score() {
    let policy = MatchingPolicy {
        weights: ScoringWeights {
            distance: 0.0,
            style: 0.0,
            contribution: 0.0,
            capacity: 0.0,
        },
        ..MatchingPolicy::default()
    };

    assert_eq!(calculate_total_score(&create_guest(), &create_host(), 8, 16, &policy), 0.0);
}

#[test]
fn test_explanation_for_realistic_pair() {
    let guest = create_guest();
    let host = create_host();

    // 10 minutes apart, style score just under 0.8
    assert_eq!(
        explain(&guest, &host),
        "You're just a short trip apart, and your Shabbat styles align well."
    );
    assert_eq!(
        explain_for_host(&guest, &host),
        "Miriam Katz is bringing a party of 2. You're just a short trip apart, and your Shabbat styles align well."
    );
}

#[test]
fn test_evaluate_pair_matches_components() {
    let guest = create_guest();
    let host = create_host();
    let policy = MatchingPolicy::default();

    let eval = evaluate_pair(&guest, &host, 8, 16, &policy);

    assert!(eval.eligible);
    assert_eq!(eval.score, calculate_total_score(&guest, &host, 8, 16, &policy));
    assert_eq!(eval.rationale, explain(&guest, &host));
}
