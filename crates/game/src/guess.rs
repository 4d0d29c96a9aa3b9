use gazetteer::Country;
use geodesy::display_km;
use serde::{Deserialize, Serialize};

use crate::tier::DistanceTier;

/// One accepted guess: a country plus its great-circle distance to the
/// hidden target.
///
/// Immutable once created. `distance_km` keeps full precision; rounding
/// happens only in display accessors and renderer projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub country: Country,
    /// Unrounded kilometers to the target.
    pub distance_km: f64,
    /// Position in submission order, starting at 0.
    pub submitted_at: u32,
}

impl Guess {
    /// Whole kilometers for display.
    pub fn display_km(&self) -> u32 {
        display_km(self.distance_km)
    }

    pub fn tier(&self) -> DistanceTier {
        DistanceTier::for_km(self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::Guess;
    use crate::tier::DistanceTier;
    use gazetteer::Country;

    #[test]
    fn display_rounds_while_the_record_keeps_precision() {
        let guess = Guess {
            country: Country {
                name: "Germany".to_string(),
                iso: "DE".to_string(),
                capital: "Berlin".to_string(),
                lat_deg: 51.1657,
                lon_deg: 10.4515,
            },
            distance_km: 877.46,
            submitted_at: 0,
        };
        assert_eq!(guess.display_km(), 877);
        assert_eq!(guess.distance_km, 877.46);
        assert_eq!(guess.tier(), DistanceTier::Medium);
    }
}
