use std::collections::BTreeSet;

use gazetteer::{Country, normalized_name};
use geodesy::{great_circle_km, stable_total_cmp_f64};

use crate::guess::Guess;
use crate::journal::{Event, Journal};

/// Rejection returned by [`Round::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The candidate's normalized name matches an existing guess.
    DuplicateGuess { name: String },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::DuplicateGuess { name } => {
                write!(f, "{name} has already been guessed")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// One round of the guessing game: a hidden target plus the guesses made
/// against it.
///
/// Ordering contract:
/// - `guesses()` yields submission order; insertion order is the source of
///   truth.
/// - `ranked_view()` is a read-only projection, ascending by distance, with
///   ties kept in submission order.
#[derive(Debug, Clone)]
pub struct Round {
    target: Country,
    target_key: String,
    guesses: Vec<Guess>,
    seen: BTreeSet<String>,
    journal: Journal,
}

impl Round {
    /// Starts a round against an externally chosen target. The ledger is
    /// cleared only by constructing a new round.
    pub fn new(target: Country) -> Self {
        let target_key = normalized_name(&target.name);
        Self {
            target,
            target_key,
            guesses: Vec::new(),
            seen: BTreeSet::new(),
            journal: Journal::new(),
        }
    }

    /// The hidden target. Revealing it before the round ends is the host
    /// UI's concern.
    pub fn target(&self) -> &Country {
        &self.target
    }

    /// Validates and appends a guess.
    ///
    /// A candidate whose normalized name matches an existing guess is
    /// rejected and the ledger is left untouched. On success the ledger
    /// grows by exactly one entry and the accepted guess is returned.
    pub fn submit(&mut self, candidate: Country) -> Result<Guess, SubmitError> {
        let key = normalized_name(&candidate.name);
        if self.seen.contains(&key) {
            self.journal
                .emit("duplicate", format!("rejected repeat guess {}", candidate.name));
            return Err(SubmitError::DuplicateGuess {
                name: candidate.name,
            });
        }

        let distance_km = great_circle_km(candidate.latlon(), self.target.latlon());
        let guess = Guess {
            country: candidate,
            distance_km,
            submitted_at: self.guesses.len() as u32,
        };
        self.journal.emit(
            "guess",
            format!("{} at {} km", guess.country.name, guess.display_km()),
        );
        if key == self.target_key {
            self.journal
                .emit("solved", format!("target {} found", self.target.name));
        }
        self.seen.insert(key);
        self.guesses.push(guess.clone());
        Ok(guess)
    }

    /// Guesses in submission order.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Guesses ascending by distance; ties keep submission order.
    pub fn ranked_view(&self) -> Vec<&Guess> {
        let mut out: Vec<&Guess> = self.guesses.iter().collect();
        out.sort_by(|a, b| stable_total_cmp_f64(a.distance_km, b.distance_km));
        out
    }

    /// True once the target itself has been guessed.
    pub fn solved(&self) -> bool {
        self.seen.contains(&self.target_key)
    }

    pub fn events(&self) -> &[Event] {
        self.journal.events()
    }

    /// Takes the buffered journal events.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.journal.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::{Round, SubmitError};
    use crate::tier::DistanceTier;
    use gazetteer::Country;
    use pretty_assertions::assert_eq;

    fn country(name: &str, iso: &str, capital: &str, lat: f64, lon: f64) -> Country {
        Country {
            name: name.to_string(),
            iso: iso.to_string(),
            capital: capital.to_string(),
            lat_deg: lat,
            lon_deg: lon,
        }
    }

    fn france() -> Country {
        // Paris coordinates; the round target in the examples below.
        country("France", "FR", "Paris", 48.8566, 2.3522)
    }

    fn germany() -> Country {
        country("Germany", "DE", "Berlin", 52.5200, 13.4050)
    }

    #[test]
    fn accepted_guess_grows_the_ledger_by_one() {
        let mut round = Round::new(france());
        assert!(round.is_empty());

        let guess = round.submit(germany()).unwrap();
        assert_eq!(round.len(), 1);
        assert_eq!(guess.submitted_at, 0);
        assert_eq!(guess.tier(), DistanceTier::Medium);
        assert!((877..=878).contains(&guess.display_km()));
    }

    #[test]
    fn duplicate_is_rejected_across_accent_and_case_variation() {
        let mut round = Round::new(france());
        round
            .submit(country("Côte d'Ivoire", "CI", "Yamoussoukro", 7.54, -5.5471))
            .unwrap();

        let err = round
            .submit(country("COTE D'IVOIRE", "CI", "Yamoussoukro", 7.54, -5.5471))
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::DuplicateGuess {
                name: "COTE D'IVOIRE".to_string()
            }
        );
        assert_eq!(round.len(), 1);
        assert_eq!(err.to_string(), "COTE D'IVOIRE has already been guessed");
    }

    #[test]
    fn ranked_view_sorts_ascending_and_preserves_submission_order() {
        let mut round = Round::new(country("Target", "TT", "Midpoint", 0.0, 0.0));
        round.submit(country("Far", "FA", "F", 0.0, 40.0)).unwrap();
        round.submit(country("East", "EA", "E", 0.0, 10.0)).unwrap();
        // Mirror of East across the target meridian: exactly equidistant.
        round.submit(country("West", "WE", "W", 0.0, -10.0)).unwrap();

        let ranked: Vec<&str> = round
            .ranked_view()
            .iter()
            .map(|g| g.country.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["East", "West", "Far"]);

        // The projection did not disturb submission order.
        let submitted: Vec<&str> = round
            .guesses()
            .iter()
            .map(|g| g.country.name.as_str())
            .collect();
        assert_eq!(submitted, vec!["Far", "East", "West"]);
    }

    #[test]
    fn ranked_view_is_a_permutation_of_the_ledger() {
        let mut round = Round::new(france());
        round.submit(germany()).unwrap();
        round
            .submit(country("Japan", "JP", "Tokyo", 36.2048, 138.2529))
            .unwrap();
        round
            .submit(country("Belgium", "BE", "Brussels", 50.5039, 4.4699))
            .unwrap();

        let ranked = round.ranked_view();
        assert_eq!(ranked.len(), round.len());
        let mut indices: Vec<u32> = ranked.iter().map(|g| g.submitted_at).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);

        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn guessing_the_target_solves_the_round() {
        let mut round = Round::new(france());
        round.submit(germany()).unwrap();
        assert!(!round.solved());

        let hit = round.submit(france()).unwrap();
        assert_eq!(hit.distance_km, 0.0);
        assert_eq!(hit.tier(), DistanceTier::Near);
        assert!(round.solved());
    }

    #[test]
    fn journal_records_guesses_duplicates_and_the_solve() {
        let mut round = Round::new(france());
        round.submit(germany()).unwrap();
        let _ = round.submit(germany());
        round.submit(france()).unwrap();

        let kinds: Vec<&str> = round.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["guess", "duplicate", "guess", "solved"]);
        let sequences: Vec<u64> = round.events().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3]);

        let drained = round.drain_events();
        assert_eq!(drained.len(), 4);
        assert!(round.events().is_empty());
    }
}
