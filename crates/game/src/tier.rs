use serde::{Deserialize, Serialize};

/// Tier thresholds (kilometers). A boundary value belongs to the farther
/// tier: 500 km is Medium, 1500 km is Far, 3000 km is VeryFar.
pub const NEAR_MAX_KM: f64 = 500.0;
pub const MEDIUM_MAX_KM: f64 = 1500.0;
pub const FAR_MAX_KM: f64 = 3000.0;

/// Coarse proximity bucket for a guess, driving marker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceTier {
    Near,
    Medium,
    Far,
    VeryFar,
}

impl DistanceTier {
    /// Classifies a great-circle distance. Deterministic, total.
    pub fn for_km(km: f64) -> Self {
        if km < NEAR_MAX_KM {
            DistanceTier::Near
        } else if km < MEDIUM_MAX_KM {
            DistanceTier::Medium
        } else if km < FAR_MAX_KM {
            DistanceTier::Far
        } else {
            DistanceTier::VeryFar
        }
    }
}
