/// Minutes assumed for any pair the table doesn't know about
pub const FALLBACK_TRAVEL_MINUTES: u16 = 60;

/// Manhattan neighborhoods covered by the travel-time table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Neighborhood {
    UpperWestSide,
    UpperEastSide,
    MidtownWest,
    MidtownEast,
    MurrayHill,
    GramercyFlatiron,
    Chelsea,
    GreenwichVillage,
    EastVillage,
    SohoTribeca,
    LowerEastSide,
    FinancialDistrict,
    WashingtonHeights,
    Harlem,
}

impl Neighborhood {
    /// Table order; row/column index of each neighborhood
    pub const ALL: [Neighborhood; 14] = [
        Neighborhood::UpperWestSide,
        Neighborhood::UpperEastSide,
        Neighborhood::MidtownWest,
        Neighborhood::MidtownEast,
        Neighborhood::MurrayHill,
        Neighborhood::GramercyFlatiron,
        Neighborhood::Chelsea,
        Neighborhood::GreenwichVillage,
        Neighborhood::EastVillage,
        Neighborhood::SohoTribeca,
        Neighborhood::LowerEastSide,
        Neighborhood::FinancialDistrict,
        Neighborhood::WashingtonHeights,
        Neighborhood::Harlem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::UpperWestSide => "Upper West Side",
            Neighborhood::UpperEastSide => "Upper East Side",
            Neighborhood::MidtownWest => "Midtown West",
            Neighborhood::MidtownEast => "Midtown East",
            Neighborhood::MurrayHill => "Murray Hill",
            Neighborhood::GramercyFlatiron => "Gramercy / Flatiron",
            Neighborhood::Chelsea => "Chelsea",
            Neighborhood::GreenwichVillage => "Greenwich Village / West Village",
            Neighborhood::EastVillage => "East Village / NoHo",
            Neighborhood::SohoTribeca => "SoHo / Tribeca",
            Neighborhood::LowerEastSide => "Lower East Side",
            Neighborhood::FinancialDistrict => "Financial District",
            Neighborhood::WashingtonHeights => "Washington Heights",
            Neighborhood::Harlem => "Harlem",
        }
    }

    /// Exact (case-sensitive) label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.label() == label)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Approximate subway/walking minutes, rows keyed by the guest's
/// neighborhood and columns by the host's, both in `Neighborhood::ALL` order.
#[rustfmt::skip]
static TRAVEL_MINUTES: [[u16; 14]; 14] = [
    //UWS UES  MW  ME  MH  GF  CH  GV  EV  ST LES  FD  WH  HA
    [  5, 20, 15, 20, 25, 25, 20, 25, 30, 30, 35, 35, 20, 15], // Upper West Side
    [ 20,  5, 20, 10, 15, 20, 25, 25, 20, 30, 25, 35, 35, 20], // Upper East Side
    [ 15, 20,  5, 15, 15, 15, 10, 15, 20, 20, 25, 25, 30, 25], // Midtown West
    [ 20, 10, 15,  5, 10, 15, 20, 20, 15, 25, 20, 30, 35, 25], // Midtown East
    [ 25, 15, 15, 10,  5, 10, 15, 15, 15, 20, 15, 25, 40, 30], // Murray Hill
    [ 25, 20, 15, 15, 10,  5, 10, 10, 10, 15, 15, 25, 40, 35], // Gramercy / Flatiron
    [ 20, 25, 10, 20, 15, 10,  5, 10, 15, 15, 20, 25, 35, 30], // Chelsea
    [ 25, 25, 15, 20, 15, 10, 10,  5, 10, 10, 15, 20, 40, 35], // Greenwich Village
    [ 30, 20, 20, 15, 15, 10, 15, 10,  5, 10, 10, 20, 45, 35], // East Village / NoHo
    [ 30, 30, 20, 25, 20, 15, 15, 10, 10,  5, 15, 15, 45, 40], // SoHo / Tribeca
    [ 35, 25, 25, 20, 15, 15, 20, 15, 10, 15,  5, 15, 50, 40], // Lower East Side
    [ 35, 35, 25, 30, 25, 25, 25, 20, 20, 15, 15,  5, 50, 45], // Financial District
    [ 20, 35, 30, 35, 40, 40, 35, 40, 45, 45, 50, 50,  5, 15], // Washington Heights
    [ 15, 20, 25, 25, 30, 35, 30, 35, 35, 40, 40, 45, 15,  5], // Harlem
];

/// Travel time between two known neighborhoods
#[inline]
pub fn travel_minutes_between(from: Neighborhood, to: Neighborhood) -> u16 {
    TRAVEL_MINUTES[from.index()][to.index()]
}

/// Estimated travel time in minutes between two neighborhood labels
///
/// # Arguments
/// * `from` - Guest's neighborhood label
/// * `to` - Host's neighborhood label
///
/// # Returns
/// Minutes from the table, or `FALLBACK_TRAVEL_MINUTES` when either label
/// is unknown
pub fn travel_minutes(from: &str, to: &str) -> u16 {
    match (Neighborhood::from_label(from), Neighborhood::from_label(to)) {
        (Some(from), Some(to)) => travel_minutes_between(from, to),
        _ => FALLBACK_TRAVEL_MINUTES,
    }
}
