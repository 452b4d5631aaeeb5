//! "Why it's a fit" text for a guest/host pairing.
//!
//! Only factual observations are used: shared languages, how close the
//! two neighborhoods are, and how similar the vibe sliders are.

use crate::core::{distance::travel_minutes, filters::shared_languages, scoring::style_score};
use crate::models::{GuestRequest, HostOffer};

/// Language most guests share; never worth mentioning on its own
pub const DEFAULT_LANGUAGE: &str = "English";

/// Returned when no observation applies
pub const FALLBACK_RATIONALE: &str = "Based on your preferences, this looks like a great match!";

const SHORT_TRIP_MINUTES: u16 = 15;
const NEARBY_MINUTES: u16 = 25;

const VERY_SIMILAR_STYLE: f64 = 0.85;
const ALIGNED_STYLE: f64 = 0.70;

const MAX_OBSERVATIONS: usize = 2;

fn language_observation(guest: &GuestRequest, host: &HostOffer) -> Option<String> {
    let shared: Vec<&str> = shared_languages(guest, host).into_iter().collect();

    match shared.as_slice() {
        [only] if *only != DEFAULT_LANGUAGE => Some(format!("You both speak {only}")),
        [first, second] => Some(format!("You both speak {first} and {second}")),
        _ => None,
    }
}

fn proximity_observation(guest: &GuestRequest, host: &HostOffer) -> Option<&'static str> {
    let minutes = travel_minutes(&guest.neighborhood, &host.neighborhood);

    if minutes <= SHORT_TRIP_MINUTES {
        if guest.neighborhood == host.neighborhood {
            Some("you're in the same neighborhood")
        } else {
            Some("you're just a short trip apart")
        }
    } else if minutes <= NEARBY_MINUTES {
        Some("you're conveniently located nearby")
    } else {
        None
    }
}

fn style_observation(guest: &GuestRequest, host: &HostOffer) -> Option<&'static str> {
    let score = style_score(&guest.style, &host.style);

    if score >= VERY_SIMILAR_STYLE {
        Some("you have very similar Shabbat vibes")
    } else if score >= ALIGNED_STYLE {
        Some("your Shabbat styles align well")
    } else {
        None
    }
}

/// A single slider the two sides agree on (within one point)
fn style_detail(guest: &GuestRequest, host: &HostOffer) -> Option<&'static str> {
    let social = if guest.style.social.abs_diff(host.style.social) <= 1 {
        match guest.style.social {
            0..=2 => Some("you both prefer intimate gatherings"),
            4.. => Some("you both enjoy larger groups"),
            _ => None,
        }
    } else {
        None
    };

    let formality = if guest.style.formality.abs_diff(host.style.formality) <= 1 {
        match guest.style.formality {
            0..=2 => Some("you both enjoy a casual atmosphere"),
            4.. => Some("you both appreciate a traditional setting"),
            _ => None,
        }
    } else {
        None
    };

    social.or(formality)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate a friendly one- or two-sentence explanation of a pairing
pub fn explain(guest: &GuestRequest, host: &HostOffer) -> String {
    let mut points: Vec<String> = Vec::with_capacity(3);

    points.extend(language_observation(guest, host));
    points.extend(proximity_observation(guest, host).map(str::to_string));
    points.extend(style_observation(guest, host).map(str::to_string));

    if points.len() < MAX_OBSERVATIONS {
        points.extend(style_detail(guest, host).map(str::to_string));
    }

    points.truncate(MAX_OBSERVATIONS);

    match points.as_slice() {
        [] => FALLBACK_RATIONALE.to_string(),
        [only] => format!(
            "{} - we think you'll have a wonderful time!",
            capitalize_first(only)
        ),
        [first, second, ..] => format!("{}, and {}.", capitalize_first(first), second),
    }
}

/// Explanation addressed to the host, mentioning the party size
pub fn explain_for_host(guest: &GuestRequest, host: &HostOffer) -> String {
    let base = explain(guest, host);

    if guest.party_size > 1 {
        let name = if guest.full_name.is_empty() {
            "Your guest"
        } else {
            guest.full_name.as_str()
        };
        return format!("{} is bringing a party of {}. {}", name, guest.party_size, base);
    }

    base
}
