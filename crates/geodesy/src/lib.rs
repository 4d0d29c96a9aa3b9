pub mod distance;
pub mod latlon;
pub mod precision;

// Geodesy crate: small, well-tested spherical primitives only.
pub use distance::*;
pub use latlon::*;
pub use precision::*;
