use std::collections::BTreeSet;
use crate::core::distance::travel_minutes;
use crate::models::{DietaryRequirement, GuestRequest, HostOffer, KosherLevel};

const FULL_KOSHER_ONLY: &[KosherLevel] = &[KosherLevel::FullKosher];
const FULL_OR_MIXED: &[KosherLevel] = &[KosherLevel::FullKosher, KosherLevel::MixedDishes];
const ANY_KOSHER_LEVEL: &[KosherLevel] = &[
    KosherLevel::FullKosher,
    KosherLevel::MixedDishes,
    KosherLevel::VegetarianHome,
];

/// Host kitchens a guest's kosher requirement accepts
pub fn acceptable_kosher_levels(requirement: DietaryRequirement) -> &'static [KosherLevel] {
    match requirement {
        DietaryRequirement::KosherHouse => FULL_KOSHER_ONLY,
        DietaryRequirement::KosherTakeout => ANY_KOSHER_LEVEL,
        DietaryRequirement::NotKosherHome => ANY_KOSHER_LEVEL,
        // Legacy spellings
        DietaryRequirement::FullKosherOnly => FULL_KOSHER_ONLY,
        DietaryRequirement::MixedDishesOk => FULL_OR_MIXED,
        DietaryRequirement::VegetarianHomeOk => ANY_KOSHER_LEVEL,
    }
}

/// Host has room for the whole party
#[inline]
pub fn check_capacity(guest: &GuestRequest, remaining_capacity: u32) -> bool {
    remaining_capacity >= guest.party_size
}

#[inline]
pub fn check_dietary(guest: &GuestRequest, host: &HostOffer) -> bool {
    acceptable_kosher_levels(guest.dietary).contains(&host.kosher_level)
}

/// Languages spoken by both sides, in sorted order
pub fn shared_languages<'a>(guest: &'a GuestRequest, host: &HostOffer) -> BTreeSet<&'a str> {
    guest
        .languages
        .iter()
        .filter(|lang| host.languages.contains(lang))
        .map(String::as_str)
        .collect()
}

#[inline]
pub fn check_language_overlap(guest: &GuestRequest, host: &HostOffer) -> bool {
    guest
        .languages
        .iter()
        .any(|lang| host.languages.contains(lang))
}

#[inline]
pub fn check_travel(guest: &GuestRequest, host: &HostOffer) -> bool {
    guest
        .max_travel
        .allows(travel_minutes(&guest.neighborhood, &host.neighborhood))
}

/// Hard gate for a guest/host pairing.
///
/// All four checks must pass: capacity, kosher compatibility,
/// a shared language and travel within the guest's limit.
#[inline]
pub fn is_eligible(guest: &GuestRequest, host: &HostOffer, remaining_capacity: u32) -> bool {
    check_capacity(guest, remaining_capacity)
        && check_dietary(guest, host)
        && check_language_overlap(guest, host)
        && check_travel(guest, host)
}

/// Human-readable reasons a pairing fails, one per failed check.
/// Empty when the pairing is eligible.
pub fn ineligibility_reasons(
    guest: &GuestRequest,
    host: &HostOffer,
    remaining_capacity: u32,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if !check_capacity(guest, remaining_capacity) {
        reasons.push(format!(
            "Insufficient capacity (needs {}, has {})",
            guest.party_size, remaining_capacity
        ));
    }

    if !check_dietary(guest, host) {
        reasons.push(format!(
            "Kosher incompatible ({} vs {})",
            guest.dietary.label(),
            host.kosher_level.label()
        ));
    }

    if !check_language_overlap(guest, host) {
        reasons.push(format!(
            "No shared language ({} vs {})",
            guest.languages.join(", "),
            host.languages.join(", ")
        ));
    }

    if !check_travel(guest, host) {
        reasons.push(format!(
            "Travel too far ({} to {}: {} min, limit {} min)",
            guest.neighborhood,
            host.neighborhood,
            travel_minutes(&guest.neighborhood, &host.neighborhood),
            guest.max_travel.minutes()
        ));
    }

    reasons
}
