//! # Orbital state representations
//!
//! This module defines the value types exchanged by the library and the
//! conversions between them:
//!
//! - [`StateVector`] — heliocentric Cartesian position (AU) and velocity (AU/day).
//! - [`cometary_element`](crate::orbit_type::cometary_element) — [`OrbitalElements`], the perihelion-based set
//!   `(q, e, i, Ω, ω, T)` used for user input and the planet catalog. It is valid for
//!   every conic, including the parabola.
//! - [`classical_element`](crate::orbit_type::classical_element) — [`ClassicalElements`], the set
//!   `(h, e, i, Ω, ω, ν)` that maps one-to-one onto a [`StateVector`].
//!
//! ## Typical workflow
//!
//! ```rust
//! use orbitprop::constants::GM_SUN;
//! use orbitprop::orbit_type::{cartesian_to_elements, elements_to_cartesian, ClassicalElements};
//!
//! let elements = ClassicalElements {
//!     angular_momentum: (GM_SUN * 1.2).sqrt(),
//!     eccentricity: 0.2,
//!     inclination: 10.0,
//!     ascending_node_longitude: 40.0,
//!     periapsis_argument: 60.0,
//!     true_anomaly: 30.0,
//! };
//!
//! let state = elements_to_cartesian(&elements, GM_SUN);
//! let back = cartesian_to_elements(&state, GM_SUN).unwrap();
//! assert!((back.eccentricity - 0.2).abs() < 1e-12);
//! ```
//!
//! All values are transient and `Copy`. Angles stored in element sets are in **degrees**.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::Degree,
    orbit_errors::OrbitError,
    vector::{cross, dot, norm, Vec3},
};

/// Perihelion-based orbital elements `(q, e, i, Ω, ω, T)`.
pub mod cometary_element;

/// Angular-momentum based classical elements `(h, e, i, Ω, ω, ν)`.
pub mod classical_element;

pub use classical_element::ClassicalElements;
pub use cometary_element::OrbitalElements;

/// Heliocentric Cartesian state.
///
/// Units
/// -----
/// * `pos`: AU
/// * `vel`: AU/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl StateVector {
    pub fn new(pos: Vec3, vel: Vec3) -> Self {
        StateVector { pos, vel }
    }

    pub fn radius(&self) -> f64 {
        norm(&self.pos)
    }

    pub fn speed(&self) -> f64 {
        norm(&self.vel)
    }

    /// Vis-viva energy `|v|²/2 − μ/|r|` (AU²/day²).
    pub fn specific_energy(&self, mu: f64) -> f64 {
        dot(&self.vel, &self.vel) / 2.0 - mu / self.radius()
    }

    /// Specific angular momentum `r × v` (AU²/day).
    pub fn angular_momentum(&self) -> Vec3 {
        cross(&self.pos, &self.vel)
    }

    /// Laplace–Runge–Lenz vector scaled by `1/μ`: `(v × h)/μ − r/|r|`.
    pub fn eccentricity_vector(&self, mu: f64) -> Vec3 {
        cross(&self.vel, &self.angular_momentum()) / mu - self.pos / self.radius()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|x| x.is_finite())
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  r = [{:+.9}, {:+.9}, {:+.9}] AU",
            self.pos.x, self.pos.y, self.pos.z
        )?;
        write!(
            f,
            "  v = [{:+.9e}, {:+.9e}, {:+.9e}] AU/day",
            self.vel.x, self.vel.y, self.vel.z
        )
    }
}

/// Rotation from the perifocal-like frame whose x axis points at argument of
/// latitude `u` to the inertial frame: `Rz(Ω)·Rx(i)·Rz(u)`.
///
/// Arguments
/// -----------------
/// * `inclination`, `ascending_node_longitude`, `argument_of_latitude`: degrees.
pub(crate) fn orbit_rotation(
    inclination: Degree,
    ascending_node_longitude: Degree,
    argument_of_latitude: Degree,
) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), ascending_node_longitude.to_radians())
        * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination.to_radians())
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_latitude.to_radians())
}

/// Classical elements `[h, e, i, Ω, ω, ν]` → Cartesian state.
///
/// See [`ClassicalElements::to_state_vector`].
pub fn elements_to_cartesian(elements: &ClassicalElements, mu: f64) -> StateVector {
    elements.to_state_vector(mu)
}

/// Cartesian state → classical elements `[h, e, i, Ω, ω, ν]`.
///
/// See [`ClassicalElements::from_state_vector`].
pub fn cartesian_to_elements(state: &StateVector, mu: f64) -> Result<ClassicalElements, OrbitError> {
    ClassicalElements::from_state_vector(state, mu)
}
