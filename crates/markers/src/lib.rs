use gazetteer::normalized_name;
use game::{DistanceTier, Round};
use serde::{Deserialize, Serialize};

/// Visual style for one guess marker.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: [f32; 4],
    /// Halo ring drawn around the marker that hit the target.
    pub ring: bool,
}

impl MarkerStyle {
    pub const fn new(color: [f32; 4], ring: bool) -> Self {
        Self { color, ring }
    }
}

/// Red ramp, hotter for nearer tiers.
pub fn style_for_tier(tier: DistanceTier) -> MarkerStyle {
    let color = match tier {
        DistanceTier::Near => [0.86, 0.08, 0.06, 1.0],
        DistanceTier::Medium => [0.91, 0.36, 0.14, 1.0],
        DistanceTier::Far => [0.95, 0.62, 0.25, 1.0],
        DistanceTier::VeryFar => [0.97, 0.83, 0.41, 1.0],
    };
    MarkerStyle::new(color, false)
}

/// One globe marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessMarker {
    pub name: String,
    pub flag_code: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    /// Whole kilometers for the marker tooltip.
    pub display_km: u32,
    pub tier: DistanceTier,
    pub style: MarkerStyle,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub markers: Vec<GuessMarker>,
}

/// Extracts the globe markers for a round, one per guess in submission
/// order. Read-only; the round is never mutated.
pub fn marker_snapshot(round: &Round) -> MarkerSnapshot {
    let target_key = normalized_name(&round.target().name);
    let markers = round
        .guesses()
        .iter()
        .map(|guess| {
            let tier = guess.tier();
            let mut style = style_for_tier(tier);
            style.ring = normalized_name(&guess.country.name) == target_key;
            GuessMarker {
                name: guess.country.name.clone(),
                flag_code: guess.country.flag_code(),
                lat_deg: guess.country.lat_deg,
                lon_deg: guess.country.lon_deg,
                display_km: guess.display_km(),
                tier,
                style,
            }
        })
        .collect();
    MarkerSnapshot { markers }
}

/// One row of the ranked guess list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// 1-based rank, closest first.
    pub rank: u32,
    pub name: String,
    pub flag_code: String,
    pub display_km: u32,
    pub tier: DistanceTier,
}

/// Ranked-list projection: ascending distance, ties in submission order.
/// A permutation of the submitted guesses.
pub fn ranked_rows(round: &Round) -> Vec<RankedRow> {
    round
        .ranked_view()
        .iter()
        .enumerate()
        .map(|(i, guess)| RankedRow {
            rank: i as u32 + 1,
            name: guess.country.name.clone(),
            flag_code: guess.country.flag_code(),
            display_km: guess.display_km(),
            tier: guess.tier(),
        })
        .collect()
}
