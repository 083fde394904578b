//! # Planetary osculating elements
//!
//! A read-only catalog of heliocentric elements for the eight planets and
//! Pluto, in the perihelion form used by [`OrbitalElements`].
//!
//! The values are the J2000 mean elements of Standish (JPL, *Keplerian
//! Elements for Approximate Positions of the Major Planets*), converted with
//! `q = a (1 − e)`, `ω = ϖ − Ω` and `T = J2000 − M₀ / n` where
//! `n = √(μ/a³)` and `μ` is [`GM_SUN`]. They are referred to the ecliptic
//! and equinox of J2000.
//!
//! The table is built once, on first access, and never mutated afterwards.
//!
//! ```rust
//! use orbitprop::planets::{osculating_elements, Planet};
//!
//! let mars = osculating_elements("mars").unwrap();
//! assert_eq!(mars, Planet::Mars.osculating_elements());
//! assert!(mars.r45 > mars.elements.perihelion_distance);
//! ```

use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, GM_SUN},
    orbit_errors::OrbitError,
    orbit_type::OrbitalElements,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// Every body of the catalog, ordered by distance to the Sun.
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    /// Catalog entry of this body.
    pub fn osculating_elements(&self) -> OsculatingElements {
        // every variant is inserted when the catalog is built
        CATALOG[self]
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = OrbitError;

    /// Case-insensitive lookup by English name, surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Planet::ALL
            .into_iter()
            .find(|planet| planet.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OrbitError::UnknownBody(s.to_string()))
    }
}

/// Catalog entry: the element set plus the radius used for visibility culling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OsculatingElements {
    pub elements: OrbitalElements,

    /// Heliocentric distance at true anomaly ±45°, `p / (1 + e cos 45°)` (AU).
    pub r45: AstronomicalUnit,
}

impl OsculatingElements {
    fn new(
        perihelion_distance: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node_longitude: f64,
        periapsis_argument: f64,
        perihelion_time: f64,
    ) -> Self {
        let elements = OrbitalElements {
            perihelion_distance,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            perihelion_time,
        };
        let r45 = elements.semilatus_rectum()
            / (1.0 + eccentricity * std::f64::consts::FRAC_PI_4.cos());
        OsculatingElements { elements, r45 }
    }
}

/// Gravitational parameter the catalog perihelion times were derived with.
pub const CATALOG_MU: f64 = GM_SUN;

static CATALOG: LazyLock<BTreeMap<Planet, OsculatingElements>> = LazyLock::new(|| {
    use Planet::*;
    BTreeMap::from([
        (
            Mercury,
            OsculatingElements::new(0.3074977516112289, 0.20563593, 7.00497902, 48.33076593, 29.12703035, 2451502.287763),
        ),
        (
            Venus,
            OsculatingElements::new(0.7184338167661649, 0.00677672, 3.39467605, 76.67984255, 54.92262463, 2451513.556211),
        ),
        (
            Earth,
            OsculatingElements::new(0.9832913363836896, 0.01671123, 0.0, 0.0, 102.93768193, 2451182.250905),
        ),
        (
            Mars,
            OsculatingElements::new(1.381404784135006, 0.0933941, 1.84969142, 49.55953891, 286.4968315, 2451507.997439),
        ),
        (
            Jupiter,
            OsculatingElements::new(4.95113886092512, 0.04838624, 1.30439695, 100.47390909, 274.25457074, 2451308.178107),
        ),
        (
            Saturn,
            OsculatingElements::new(9.023013503221668, 0.05386179, 2.48599187, 113.66242448, 338.93645383, 2442062.1843),
        ),
        (
            Uranus,
            OsculatingElements::new(18.28233384337508, 0.04725744, 0.77263783, 74.01692503, 96.93735127, 2439410.117619),
        ),
        (
            Neptune,
            OsculatingElements::new(29.811607689928678, 0.00859048, 1.77004347, 131.78422574, 273.18053653, 2408061.340493),
        ),
        (
            Pluto,
            OsculatingElements::new(29.657888240812728, 0.2488273, 17.14001206, 110.30393684, 113.76497945, 2447804.592279),
        ),
    ])
});

/// Read-only view of the whole catalog.
pub fn catalog() -> &'static BTreeMap<Planet, OsculatingElements> {
    &CATALOG
}

/// Look up a body's osculating elements by name (case-insensitive).
///
/// Errors
/// ----------
/// * [`OrbitError::UnknownBody`] when the name is not in the catalog.
pub fn osculating_elements(name: &str) -> Result<OsculatingElements, OrbitError> {
    let planet: Planet = name.parse()?;
    Ok(planet.osculating_elements())
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use crate::constants::{J2000_JD, SIDEREAL_YEAR};
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("earth".parse::<Planet>().unwrap(), Planet::Earth);
        assert_eq!("PLUTO".parse::<Planet>().unwrap(), Planet::Pluto);
        assert_eq!(" Mars ".parse::<Planet>().unwrap(), Planet::Mars);
        assert_eq!(
            osculating_elements("Vulcan"),
            Err(OrbitError::UnknownBody("Vulcan".into()))
        );
    }

    #[test]
    fn test_catalog_is_complete_and_valid() {
        assert_eq!(catalog().len(), Planet::ALL.len());
        for planet in Planet::ALL {
            let entry = planet.osculating_elements();
            entry.elements.validate().unwrap();
            assert!(entry.elements.regime().is_closed(), "{planet} must be bound");

            let q = entry.elements.perihelion_distance;
            let big_q = entry.elements.aphelion().unwrap();
            assert!(q <= entry.r45 && entry.r45 <= big_q);
        }
    }

    #[test]
    fn test_semi_major_axes_match_j2000_table() {
        for (planet, a) in [
            (Planet::Mercury, 0.38709927),
            (Planet::Earth, 1.00000261),
            (Planet::Jupiter, 5.20288700),
            (Planet::Neptune, 30.06992276),
            (Planet::Pluto, 39.48211675),
        ] {
            let el = planet.osculating_elements().elements;
            assert_relative_eq!(el.semi_major_axis().unwrap(), a, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_earth_r45() {
        let earth = osculating_elements("Earth").unwrap();
        assert_relative_eq!(earth.r45, 0.9880479528558269, max_relative = 1e-12);
    }

    #[test]
    fn test_earth_period_close_to_sidereal_year() {
        let period = Planet::Earth
            .osculating_elements()
            .elements
            .period(CATALOG_MU)
            .unwrap();
        assert!((period - SIDEREAL_YEAR).abs() < 1e-2);
    }

    #[test]
    fn test_perihelion_times_bracket_j2000() {
        // perihelion passage precedes J2000 by less than one period
        for planet in Planet::ALL {
            let el = planet.osculating_elements().elements;
            let period = el.period(CATALOG_MU).unwrap();
            let lag = J2000_JD - el.perihelion_time;
            assert!((0.0..period).contains(&lag), "{planet}: {lag}");
        }
    }
}
