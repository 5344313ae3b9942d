//! Celestial bodies known to the ephemeris engine.
//!
//! This module defines [`CelestialBody`], the closed set of 21 bodies (planets, lunar
//! points, Earth, centaurs and the four main asteroids) that can be requested from an
//! ephemeris provider. Each body carries a stable integer code in `0..=20` following the
//! engine's body-numbering convention (`Sun = 0` … `Vesta = 20`). These codes are part of
//! the wire contract with the provider and must never be renumbered.
//!
//! # Examples
//! ```rust
//! use celestial_bodies::body_ids::celestial_body::CelestialBody;
//!
//! let mars = CelestialBody::from_code(4).unwrap();
//! assert_eq!(mars, CelestialBody::Mars);
//! assert_eq!(mars.name(), "Mars");
//! assert!(mars.is_traditional_planet());
//! assert!(CelestialBody::from_code(99).is_none());
//! ```
//!
//! # Notes
//! * [`CelestialBody::formatted`] is `symbol + " " + name` for every body except
//!   [`CelestialBody::Pholus`], whose formatted name carries no glyph.
//! * Mean and true lunar nodes share the ☊ glyph; mean and osculating apogees share ⚸.
//!
//! # See also
//! ------------
//! * [`BodyKind`] – Coarse classification returned by [`CelestialBody::kind`].
//! * [`BodyCode`] – Code-only view used by ephemeris providers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{body_kind::BodyKind, BodyCode};
use crate::body_errors::BodyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum CelestialBody {
    Sun = 0,
    Moon = 1,
    Mercury = 2,
    Venus = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
    MeanNode = 10,
    TrueNode = 11,
    /// Mean lunar apogee, also known as Black Moon Lilith.
    MeanApogee = 12,
    OscuApogee = 13,
    Earth = 14,
    Chiron = 15,
    Pholus = 16,
    Ceres = 17,
    Pallas = 18,
    Juno = 19,
    Vesta = 20,
}

/// Static properties of one body, stored at the index equal to its code.
struct BodyRecord {
    body: CelestialBody,
    key: &'static str,
    symbol: &'static str,
    name: &'static str,
    formatted: &'static str,
}

const fn record(
    body: CelestialBody,
    key: &'static str,
    symbol: &'static str,
    name: &'static str,
    formatted: &'static str,
) -> BodyRecord {
    BodyRecord {
        body,
        key,
        symbol,
        name,
        formatted,
    }
}

// The array length is tied to the last variant, so a new body cannot be added
// without extending the table.
static CATALOG: [BodyRecord; CelestialBody::COUNT] = [
    record(CelestialBody::Sun, "sun", "☉", "Sun", "☉ Sun"),
    record(CelestialBody::Moon, "moon", "☾", "Moon", "☾ Moon"),
    record(CelestialBody::Mercury, "mercury", "☿", "Mercury", "☿ Mercury"),
    record(CelestialBody::Venus, "venus", "♀", "Venus", "♀ Venus"),
    record(
        CelestialBody::Mars,
        "mars",
        "\u{2642}\u{fe0f}",
        "Mars",
        "\u{2642}\u{fe0f} Mars",
    ),
    record(CelestialBody::Jupiter, "jupiter", "♃", "Jupiter", "♃ Jupiter"),
    record(CelestialBody::Saturn, "saturn", "♄", "Saturn", "♄ Saturn"),
    record(CelestialBody::Uranus, "uranus", "♅", "Uranus", "♅ Uranus"),
    record(CelestialBody::Neptune, "neptune", "♆", "Neptune", "♆ Neptune"),
    record(CelestialBody::Pluto, "pluto", "♇", "Pluto", "♇ Pluto"),
    record(CelestialBody::MeanNode, "mean_node", "☊", "Mean Node", "☊ Mean Node"),
    record(CelestialBody::TrueNode, "true_node", "☊", "True Node", "☊ True Node"),
    record(
        CelestialBody::MeanApogee,
        "mean_apogee",
        "⚸",
        "Mean Apogee (Lilith)",
        "⚸ Mean Apogee (Lilith)",
    ),
    record(
        CelestialBody::OscuApogee,
        "oscu_apogee",
        "⚸",
        "Osculating Apogee",
        "⚸ Osculating Apogee",
    ),
    record(CelestialBody::Earth, "earth", "🜨", "Earth", "🜨 Earth"),
    record(CelestialBody::Chiron, "chiron", "⚷", "Chiron", "⚷ Chiron"),
    // Pholus has always been formatted without its glyph.
    record(CelestialBody::Pholus, "pholus", "⯛", "Pholus", "Pholus"),
    record(CelestialBody::Ceres, "ceres", "⚳", "Ceres", "⚳ Ceres"),
    record(CelestialBody::Pallas, "pallas", "⚴", "Pallas", "⚴ Pallas"),
    record(CelestialBody::Juno, "juno", "⚵", "Juno", "⚵ Juno"),
    record(CelestialBody::Vesta, "vesta", "⚶", "Vesta", "⚶ Vesta"),
];

impl CelestialBody {
    /// Number of bodies in the catalog.
    pub const COUNT: usize = CelestialBody::Vesta as usize + 1;

    /// Every body, in increasing code order.
    pub const ALL: [CelestialBody; CelestialBody::COUNT] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::MeanNode,
        CelestialBody::TrueNode,
        CelestialBody::MeanApogee,
        CelestialBody::OscuApogee,
        CelestialBody::Earth,
        CelestialBody::Chiron,
        CelestialBody::Pholus,
        CelestialBody::Ceres,
        CelestialBody::Pallas,
        CelestialBody::Juno,
        CelestialBody::Vesta,
    ];

    /// Look up a body from its ephemeris code.
    ///
    /// Arguments
    /// -----------------
    /// * `code`: Integer body code as used by the ephemeris engine.
    ///
    /// Return
    /// ----------
    /// * `Option<Self>` – `Some(body)` for codes in `0..=20`, `None` otherwise.
    ///
    /// See also
    /// ------------
    /// * `TryFrom<i32>` for `CelestialBody` – Same lookup, failing with [`BodyError::InvalidCode`].
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| CATALOG.get(index))
            .map(|row| row.body)
    }

    /// The ephemeris code of this body.
    pub const fn code(self) -> i32 {
        self as i32
    }

    fn row(self) -> &'static BodyRecord {
        &CATALOG[self as usize]
    }

    /// The glyph conventionally associated with the body.
    ///
    /// Glyphs are not unique: both lunar nodes return `"☊"` and both apogees return `"⚸"`.
    pub fn symbol(self) -> &'static str {
        self.row().symbol
    }

    /// The human-readable name, without glyph (e.g. `"Mean Node"`).
    pub fn name(self) -> &'static str {
        self.row().name
    }

    /// The name prefixed by the symbol, e.g. `"♃ Jupiter"`.
    ///
    /// [`CelestialBody::Pholus`] is the one exception and formats as plain `"Pholus"`.
    pub fn formatted(self) -> &'static str {
        self.row().formatted
    }

    /// The snake_case identifier accepted by [`FromStr`] (e.g. `"oscu_apogee"`).
    pub fn key(self) -> &'static str {
        self.row().key
    }

    pub fn kind(self) -> BodyKind {
        match self {
            CelestialBody::Sun | CelestialBody::Moon => BodyKind::Luminary,
            CelestialBody::Mercury
            | CelestialBody::Venus
            | CelestialBody::Mars
            | CelestialBody::Jupiter
            | CelestialBody::Saturn
            | CelestialBody::Uranus
            | CelestialBody::Neptune
            | CelestialBody::Pluto => BodyKind::Planet,
            CelestialBody::MeanNode | CelestialBody::TrueNode => BodyKind::LunarNode,
            CelestialBody::MeanApogee | CelestialBody::OscuApogee => BodyKind::LunarApogee,
            CelestialBody::Earth => BodyKind::Earth,
            CelestialBody::Chiron | CelestialBody::Pholus => BodyKind::Centaur,
            CelestialBody::Ceres
            | CelestialBody::Pallas
            | CelestialBody::Juno
            | CelestialBody::Vesta => BodyKind::Asteroid,
        }
    }

    /// True for the Sun through Pluto (codes `0..=9`).
    pub const fn is_traditional_planet(self) -> bool {
        self.code() <= CelestialBody::Pluto.code()
    }

    pub fn is_lunar_node(self) -> bool {
        matches!(self, CelestialBody::MeanNode | CelestialBody::TrueNode)
    }

    /// True for the mean and osculating lunar apogee (Lilith).
    pub fn is_lunar_apogee(self) -> bool {
        matches!(self, CelestialBody::MeanApogee | CelestialBody::OscuApogee)
    }

    pub fn is_asteroid(self) -> bool {
        matches!(
            self,
            CelestialBody::Ceres
                | CelestialBody::Pallas
                | CelestialBody::Juno
                | CelestialBody::Vesta
        )
    }

    pub fn is_centaur(self) -> bool {
        matches!(self, CelestialBody::Chiron | CelestialBody::Pholus)
    }

    /// Iterate over every body in code order.
    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        CelestialBody::ALL.into_iter()
    }
}

impl BodyCode for CelestialBody {
    fn code(&self) -> i32 {
        CelestialBody::code(*self)
    }
}

impl From<CelestialBody> for i32 {
    fn from(body: CelestialBody) -> Self {
        body.code()
    }
}

impl TryFrom<i32> for CelestialBody {
    type Error = BodyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        CelestialBody::from_code(code).ok_or(BodyError::InvalidCode(code))
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = BodyError;

    /// Parse either the snake_case key (`"true_node"`) or the display name
    /// (`"True Node"`), ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CATALOG
            .iter()
            .find(|row| {
                row.key.eq_ignore_ascii_case(needle) || row.name.eq_ignore_ascii_case(needle)
            })
            .map(|row| row.body)
            .ok_or_else(|| BodyError::UnknownBodyName(s.to_string()))
    }
}

#[cfg(test)]
mod test_celestial_body {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(CelestialBody::from_code(0), Some(CelestialBody::Sun));
        assert_eq!(CelestialBody::from_code(1), Some(CelestialBody::Moon));
        assert_eq!(CelestialBody::from_code(4), Some(CelestialBody::Mars));
        assert_eq!(CelestialBody::from_code(10), Some(CelestialBody::MeanNode));
        assert_eq!(CelestialBody::from_code(13), Some(CelestialBody::OscuApogee));
        assert_eq!(CelestialBody::from_code(14), Some(CelestialBody::Earth));
        assert_eq!(CelestialBody::from_code(16), Some(CelestialBody::Pholus));
        assert_eq!(CelestialBody::from_code(20), Some(CelestialBody::Vesta));
        assert_eq!(CelestialBody::from_code(-1), None);
        assert_eq!(CelestialBody::from_code(21), None);
        assert_eq!(CelestialBody::from_code(99), None);
        assert_eq!(CelestialBody::from_code(i32::MIN), None);
        assert_eq!(CelestialBody::from_code(i32::MAX), None);
    }

    #[test]
    fn test_code() {
        assert_eq!(CelestialBody::Sun.code(), 0);
        assert_eq!(CelestialBody::Pluto.code(), 9);
        assert_eq!(CelestialBody::TrueNode.code(), 11);
        assert_eq!(CelestialBody::MeanApogee.code(), 12);
        assert_eq!(CelestialBody::Chiron.code(), 15);
        assert_eq!(CelestialBody::Ceres.code(), 17);
        assert_eq!(CelestialBody::Vesta.code(), 20);
    }

    #[test]
    fn test_catalog_rows_in_code_order() {
        for (index, body) in CelestialBody::ALL.iter().enumerate() {
            assert_eq!(body.code() as usize, index);
            assert_eq!(CATALOG[index].body, *body);
        }
        assert_eq!(CelestialBody::COUNT, 21);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(CelestialBody::try_from(5), Ok(CelestialBody::Jupiter));
        assert_eq!(CelestialBody::try_from(19), Ok(CelestialBody::Juno));
        assert_eq!(
            CelestialBody::try_from(21),
            Err(BodyError::InvalidCode(21))
        );
        assert_eq!(
            CelestialBody::try_from(-1),
            Err(BodyError::InvalidCode(-1))
        );
    }

    #[test]
    fn test_into() {
        let saturn: i32 = CelestialBody::Saturn.into();
        assert_eq!(saturn, 6);
        let earth: i32 = CelestialBody::Earth.into();
        assert_eq!(earth, 14);
    }

    #[test]
    fn test_symbol() {
        assert_eq!(CelestialBody::Sun.symbol(), "☉");
        assert_eq!(CelestialBody::Mars.symbol(), "♂\u{fe0f}");
        assert_eq!(CelestialBody::Earth.symbol(), "🜨");
        assert_eq!(CelestialBody::Pholus.symbol(), "⯛");
        assert_eq!(
            CelestialBody::MeanNode.symbol(),
            CelestialBody::TrueNode.symbol()
        );
        assert_eq!(
            CelestialBody::MeanApogee.symbol(),
            CelestialBody::OscuApogee.symbol()
        );
    }

    #[test]
    fn test_formatted() {
        assert_eq!(CelestialBody::Sun.formatted(), "☉ Sun");
        assert_eq!(CelestialBody::Mars.formatted(), "♂\u{fe0f} Mars");
        assert_eq!(
            CelestialBody::MeanApogee.formatted(),
            "⚸ Mean Apogee (Lilith)"
        );
        assert_eq!(CelestialBody::Vesta.formatted(), "⚶ Vesta");
        assert_eq!(CelestialBody::Pholus.formatted(), "Pholus");
    }

    #[test]
    fn test_to_string() {
        assert_eq!(CelestialBody::Moon.to_string(), "Moon");
        assert_eq!(CelestialBody::OscuApogee.to_string(), "Osculating Apogee");
        assert_eq!(CelestialBody::Pholus.to_string(), "Pholus");
    }

    #[test]
    fn test_predicates() {
        assert!(CelestialBody::Sun.is_traditional_planet());
        assert!(CelestialBody::Pluto.is_traditional_planet());
        assert!(!CelestialBody::MeanNode.is_traditional_planet());
        assert!(!CelestialBody::Earth.is_traditional_planet());

        assert!(CelestialBody::TrueNode.is_lunar_node());
        assert!(!CelestialBody::MeanApogee.is_lunar_node());

        assert!(CelestialBody::OscuApogee.is_lunar_apogee());
        assert!(!CelestialBody::Sun.is_lunar_apogee());

        assert!(CelestialBody::Pallas.is_asteroid());
        assert!(!CelestialBody::Chiron.is_asteroid());

        assert!(CelestialBody::Pholus.is_centaur());
        assert!(!CelestialBody::Ceres.is_centaur());
    }

    #[test]
    fn test_kind() {
        assert_eq!(CelestialBody::Moon.kind(), BodyKind::Luminary);
        assert_eq!(CelestialBody::Neptune.kind(), BodyKind::Planet);
        assert_eq!(CelestialBody::MeanNode.kind(), BodyKind::LunarNode);
        assert_eq!(CelestialBody::OscuApogee.kind(), BodyKind::LunarApogee);
        assert_eq!(CelestialBody::Earth.kind(), BodyKind::Earth);
        assert_eq!(CelestialBody::Chiron.kind(), BodyKind::Centaur);
        assert_eq!(CelestialBody::Juno.kind(), BodyKind::Asteroid);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mars".parse::<CelestialBody>(), Ok(CelestialBody::Mars));
        assert_eq!("Mars".parse::<CelestialBody>(), Ok(CelestialBody::Mars));
        assert_eq!(
            "mean_node".parse::<CelestialBody>(),
            Ok(CelestialBody::MeanNode)
        );
        assert_eq!(
            "True Node".parse::<CelestialBody>(),
            Ok(CelestialBody::TrueNode)
        );
        assert_eq!(
            "  OSCU_APOGEE ".parse::<CelestialBody>(),
            Ok(CelestialBody::OscuApogee)
        );
        assert_eq!(
            "Mean Apogee (Lilith)".parse::<CelestialBody>(),
            Ok(CelestialBody::MeanApogee)
        );
        assert_eq!(
            "Nibiru".parse::<CelestialBody>(),
            Err(BodyError::UnknownBodyName("Nibiru".to_string()))
        );
        assert!("".parse::<CelestialBody>().is_err());
    }

    #[test]
    fn test_body_code_trait() {
        let body: &dyn BodyCode = &CelestialBody::Juno;
        assert_eq!(body.code(), 19);
    }
}
