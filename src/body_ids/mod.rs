pub mod body_kind;
pub mod celestial_body;

/// Numeric identity of a body as understood by an ephemeris provider.
///
/// Providers only need the integer code to select a body; the richer naming and
/// classification API lives on [`celestial_body::CelestialBody`].
pub trait BodyCode {
    fn code(&self) -> i32;
}

impl<T: BodyCode + ?Sized> BodyCode for &T {
    fn code(&self) -> i32 {
        (**self).code()
    }
}
