//! # Ephemeris provider seam
//!
//! The catalog never computes positions. An external ephemeris engine is plugged in
//! through [`EphemerisProvider`] and receives bodies only through their
//! [`BodyCode`](crate::body_ids::BodyCode), an opaque integer in the engine's own
//! body-numbering convention.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use celestial_bodies::{ephemeris::EphemerisProvider, CelestialBody};
//! use hifitime::Epoch;
//!
//! let epoch = Epoch::from_gregorian_utc_at_midnight(2024, 3, 20);
//! let state = provider.ephemeris(&CelestialBody::Mars, &epoch)?;
//! println!("Mars at {epoch}: {:?}", state.position);
//! ```
use hifitime::Epoch;
use nalgebra::Vector3;

use crate::body_ids::BodyCode;

/// State of a body returned by a provider.
///
/// Units and reference frame are those of the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub position: Vector3<f64>,
    pub velocity: Option<Vector3<f64>>,
}

pub trait EphemerisProvider {
    type Error: std::error::Error;

    /// Compute the state of `body` at `epoch`.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: Any value exposing an engine body code, typically a
    ///   [`CelestialBody`](crate::body_ids::celestial_body::CelestialBody).
    /// * `epoch`: Instant of the request.
    ///
    /// Return
    /// ----------
    /// * `Result<BodyState, Self::Error>` – The provider's answer, or its own error
    ///   when it cannot serve the code or the epoch.
    fn ephemeris(&self, body: &dyn BodyCode, epoch: &Epoch) -> Result<BodyState, Self::Error>;
}
