use std::fmt;

use super::celestial_body::CelestialBody;

/// Coarse classification of a [`CelestialBody`].
///
/// Every body belongs to exactly one kind. Codes `10..=20` interleave several
/// kinds, so membership is decided per body and never from the code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Sun and Moon.
    Luminary,
    /// Mercury through Pluto.
    Planet,
    LunarNode,
    LunarApogee,
    Earth,
    Centaur,
    Asteroid,
}

impl BodyKind {
    /// Bodies of this kind, in code order.
    pub fn members(self) -> impl Iterator<Item = CelestialBody> {
        CelestialBody::iter().filter(move |body| body.kind() == self)
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BodyKind::Luminary => "Luminary",
            BodyKind::Planet => "Planet",
            BodyKind::LunarNode => "Lunar Node",
            BodyKind::LunarApogee => "Lunar Apogee",
            BodyKind::Earth => "Earth",
            BodyKind::Centaur => "Centaur",
            BodyKind::Asteroid => "Asteroid",
        };
        write!(f, "{s}")
    }
}
