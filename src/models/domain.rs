use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Sentinel minutes value meaning "distance doesn't matter"
pub const NO_LIMIT_MINUTES: u16 = 999;

/// Rejected max-travel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported max travel time: {0} minutes")]
pub struct InvalidTravelLimit(pub u16);

/// Max travel time a guest is willing to accept, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum TravelLimit {
    Fifteen,
    Thirty,
    FortyFive,
    Sixty,
    NoLimit,
}

impl TravelLimit {
    pub fn minutes(self) -> u16 {
        match self {
            TravelLimit::Fifteen => 15,
            TravelLimit::Thirty => 30,
            TravelLimit::FortyFive => 45,
            TravelLimit::Sixty => 60,
            TravelLimit::NoLimit => NO_LIMIT_MINUTES,
        }
    }

    /// Whether a trip of `travel_minutes` is acceptable.
    /// `NoLimit` accepts any trip, including fallback distances.
    #[inline]
    pub fn allows(self, travel_minutes: u16) -> bool {
        match self {
            TravelLimit::NoLimit => true,
            limit => travel_minutes <= limit.minutes(),
        }
    }
}

impl TryFrom<u16> for TravelLimit {
    type Error = InvalidTravelLimit;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(TravelLimit::Fifteen),
            30 => Ok(TravelLimit::Thirty),
            45 => Ok(TravelLimit::FortyFive),
            60 => Ok(TravelLimit::Sixty),
            NO_LIMIT_MINUTES => Ok(TravelLimit::NoLimit),
            other => Err(InvalidTravelLimit(other)),
        }
    }
}

impl From<TravelLimit> for u16 {
    fn from(limit: TravelLimit) -> Self {
        limit.minutes()
    }
}

/// Guest kosher requirement.
///
/// The last three variants are the spellings used by earlier registration
/// forms. They are still accepted and keep their original meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryRequirement {
    #[serde(rename = "Kosher House")]
    KosherHouse,
    #[serde(rename = "Kosher Take out")]
    KosherTakeout,
    #[serde(rename = "Not a Kosher home (Staff member will reach out to you)")]
    NotKosherHome,
    #[serde(rename = "Full kosher only")]
    FullKosherOnly,
    #[serde(rename = "Mixed dairy and meat dishes ok")]
    MixedDishesOk,
    #[serde(rename = "Vegetarian kosher home ok")]
    VegetarianHomeOk,
}

impl DietaryRequirement {
    pub fn label(self) -> &'static str {
        match self {
            DietaryRequirement::KosherHouse => "Kosher House",
            DietaryRequirement::KosherTakeout => "Kosher Take out",
            DietaryRequirement::NotKosherHome => {
                "Not a Kosher home (Staff member will reach out to you)"
            }
            DietaryRequirement::FullKosherOnly => "Full kosher only",
            DietaryRequirement::MixedDishesOk => "Mixed dairy and meat dishes ok",
            DietaryRequirement::VegetarianHomeOk => "Vegetarian kosher home ok",
        }
    }
}

/// Host kitchen kosher level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KosherLevel {
    #[serde(rename = "Full kosher")]
    FullKosher,
    #[serde(rename = "Mixed dairy and meat dishes")]
    MixedDishes,
    #[serde(rename = "Vegetarian kosher home")]
    VegetarianHome,
}

impl KosherLevel {
    pub fn label(self) -> &'static str {
        match self {
            KosherLevel::FullKosher => "Full kosher",
            KosherLevel::MixedDishes => "Mixed dairy and meat dishes",
            KosherLevel::VegetarianHome => "Vegetarian kosher home",
        }
    }
}

/// Guest contribution comfort range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionRange {
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
    #[serde(rename = "$0 to $10")]
    UpToTen,
    #[serde(rename = "$10 to $25")]
    TenToTwentyFive,
    #[serde(rename = "$25 to $50")]
    TwentyFiveToFifty,
    #[serde(rename = "$50+")]
    FiftyPlus,
}

/// Host contribution preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostContribution {
    #[serde(rename = "No contribution needed")]
    NoContribution,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
    #[serde(rename = "$0 to $10")]
    UpToTen,
    #[serde(rename = "$10 to $25")]
    TenToTwentyFive,
    #[serde(rename = "$25 to $50")]
    TwentyFiveToFifty,
    #[serde(rename = "$50+")]
    FiftyPlus,
}

/// Shabbat "vibe" sliders, each on a 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StyleProfile {
    /// Religious observance intensity (chill to full on)
    #[serde(rename = "vibeChabad")]
    #[validate(range(min = 1, max = 5))]
    pub observance: u8,
    /// Group size preference (intimate to big group)
    #[serde(rename = "vibeSocial")]
    #[validate(range(min = 1, max = 5))]
    pub social: u8,
    /// Atmosphere preference (casual to traditional)
    #[serde(rename = "vibeFormality")]
    #[validate(range(min = 1, max = 5))]
    pub formality: u8,
}

impl StyleProfile {
    pub fn new(observance: u8, social: u8, formality: u8) -> Self {
        Self {
            observance,
            social,
            formality,
        }
    }
}

/// A guest asking to be placed at a Shabbat dinner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuestRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "partySize")]
    #[validate(range(min = 1))]
    pub party_size: u32,
    pub neighborhood: String,
    #[serde(rename = "maxTravelTime")]
    pub max_travel: TravelLimit,
    #[validate(length(min = 1))]
    pub languages: Vec<String>,
    #[serde(rename = "kosherRequirement")]
    pub dietary: DietaryRequirement,
    #[serde(rename = "contributionRange")]
    pub contribution: ContributionRange,
    #[serde(flatten)]
    #[validate(nested)]
    pub style: StyleProfile,
    #[serde(rename = "isFlagged", default)]
    pub is_flagged: bool,
    #[serde(rename = "noShowCount", default)]
    pub no_show_count: u32,
}

impl GuestRequest {
    /// Flagged guests with repeated no-shows are never placed
    #[inline]
    pub fn is_reliability_gated(&self) -> bool {
        self.is_flagged && self.no_show_count >= 2
    }
}

/// A host offering seats at their table
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HostOffer {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    /// Seats still open for this run, net of in-flight commitments
    #[serde(rename = "seatsAvailable")]
    #[validate(range(min = 1))]
    pub seats_available: u32,
    pub neighborhood: String,
    #[validate(length(min = 1))]
    pub languages: Vec<String>,
    #[serde(rename = "kosherLevel")]
    pub kosher_level: KosherLevel,
    #[serde(rename = "contributionPreference")]
    pub contribution: HostContribution,
    #[serde(flatten)]
    #[validate(nested)]
    pub style: StyleProfile,
}

/// Lifecycle of a guest/host match once it leaves the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Proposed,
    Requested,
    Accepted,
    Declined,
    Confirmed,
}

impl MatchStatus {
    /// Guest already has a live match and must not be re-matched
    pub fn is_active(self) -> bool {
        !matches!(self, MatchStatus::Declined)
    }

    /// Seats are held at the host for this match
    pub fn holds_seats(self) -> bool {
        matches!(
            self,
            MatchStatus::Requested | MatchStatus::Accepted | MatchStatus::Confirmed
        )
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub style: f64,
    pub contribution: f64,
    pub capacity: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.distance + self.style + self.contribution + self.capacity
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.25,
            style: 0.35,
            contribution: 0.15,
            capacity: 0.25,
        }
    }
}

/// Knobs for a single matching run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingPolicy {
    pub weights: ScoringWeights,
    /// Hosts scoring below this are not considered for the guest
    #[serde(rename = "minScoreThreshold")]
    pub min_score_threshold: f64,
    #[serde(rename = "maxAlternativesPerGuest")]
    pub max_alternatives: usize,
}

impl Default for MatchingPolicy {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score_threshold: 0.3,
            max_alternatives: 3,
        }
    }
}
