pub mod guess;
pub mod journal;
pub mod ledger;
pub mod tier;

pub use guess::Guess;
pub use journal::{Event, Journal};
pub use ledger::{Round, SubmitError};
pub use tier::DistanceTier;
