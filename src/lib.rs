pub mod body_errors;
pub mod body_ids;
pub mod ephemeris;

pub use body_errors::BodyError;
pub use body_ids::{body_kind::BodyKind, celestial_body::CelestialBody, BodyCode};
pub use ephemeris::{BodyState, EphemerisProvider};
