//! # Classical elements `(h, e, i, Ω, ω, ν)`
//!
//! The set used by the Cartesian conversion: specific angular momentum,
//! eccentricity, and four angles in degrees. Unlike the semi-major-axis form,
//! it is regular for the parabola (`e = 1`).
//!
//! ## Degeneracies
//!
//! - **Equatorial orbits (`i → 0` or `i → 180°`)**: the node is undefined and
//!   is conventionally set to `Ω = 0`, so that ω is measured from the x axis.
//! - **Circular orbits (`e → 0`)**: the periapsis is undefined and is
//!   conventionally set to `ω = 0`. ν then holds the argument of latitude.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::Degree,
    orbit_errors::OrbitError,
    orbit_type::{cometary_element::OrbitalElements, orbit_rotation, StateVector},
    vector::{cross, dot, norm, unit_or_zero, Vec3},
};

/// Eccentricities and sin(i) below this are treated as zero when recovering angles.
const DEGENERACY_EPS: f64 = 1e-11;

/// Classical orbital elements keyed on the angular momentum.
///
/// Units
/// -----
/// * `angular_momentum`: AU²/day
/// * angles: degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicalElements {
    pub angular_momentum: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub true_anomaly: Degree,
}

impl ClassicalElements {
    /// Convert to a heliocentric Cartesian state.
    ///
    /// Arguments
    /// -----------------
    /// * `mu`: gravitational parameter (AU³/day²).
    ///
    /// Return
    /// ----------
    /// * The [`StateVector`] on the orbit at `true_anomaly`.
    ///
    /// Details
    /// ----------
    /// `r = h²/μ / (1 + e·cos ν)`, with radial velocity `μ/h·e·sin ν` and
    /// transverse velocity `h/r`. Both are expressed in the rotating
    /// (radial, transverse) frame and rotated into the inertial frame by
    /// `Rz(Ω)·Rx(i)·Rz(ω + ν)`.
    pub fn to_state_vector(&self, mu: f64) -> StateVector {
        let h = self.angular_momentum;
        let e = self.eccentricity;
        let nu = self.true_anomaly.to_radians();

        let r = h * h / mu / (1.0 + e * nu.cos());
        let v_radial = mu / h * e * nu.sin();
        let v_transverse = h / r;

        let rot = orbit_rotation(
            self.inclination,
            self.ascending_node_longitude,
            self.periapsis_argument + self.true_anomaly,
        );
        let radial = rot * Vec3::x();
        let transverse = rot * Vec3::y();

        StateVector::new(r * radial, v_radial * radial + v_transverse * transverse)
    }

    /// Recover the classical elements of a heliocentric state.
    ///
    /// Angles are returned in [0, 360), the inclination in [0, 180].
    ///
    /// Errors
    /// ----------
    /// * [`OrbitError::InvalidStateVector`] for non-finite components, a zero
    ///   position or a radial trajectory (`r × v = 0`).
    pub fn from_state_vector(state: &StateVector, mu: f64) -> Result<Self, OrbitError> {
        if !state.is_finite() {
            return Err(OrbitError::InvalidStateVector(format!(
                "non-finite component in {:?}",
                state
            )));
        }

        let r = norm(&state.pos);
        if r == 0.0 {
            return Err(OrbitError::InvalidStateVector(
                "position is the zero vector".into(),
            ));
        }

        let h_vec = state.angular_momentum();
        let h = norm(&h_vec);
        if h == 0.0 {
            return Err(OrbitError::InvalidStateVector(
                "radial trajectory, angular momentum is zero".into(),
            ));
        }
        let h_hat = h_vec / h;

        let e_vec = state.eccentricity_vector(mu);
        let e = norm(&e_vec);

        let inclination = h_hat.z.clamp(-1.0, 1.0).acos();

        // Line of nodes, z × h
        let node = Vec3::new(-h_vec.y, h_vec.x, 0.0);
        let node_defined = inclination.sin() > DEGENERACY_EPS;
        let (ascending_node_longitude, reference) = if node_defined {
            (node.y.atan2(node.x), unit_or_zero(&node))
        } else {
            (0.0, Vec3::x())
        };

        let directed = |from: &Vec3, to: &Vec3| cross(from, to).dot(&h_hat).atan2(dot(from, to));

        let pos_hat = state.pos / r;
        let (periapsis_argument, true_anomaly) = if e > DEGENERACY_EPS {
            let e_hat = e_vec / e;
            (directed(&reference, &e_hat), directed(&e_hat, &pos_hat))
        } else {
            (0.0, directed(&reference, &pos_hat))
        };

        let wrap = |angle: f64| angle.to_degrees().rem_euclid(360.0);

        Ok(ClassicalElements {
            angular_momentum: h,
            eccentricity: e,
            inclination: inclination.to_degrees(),
            ascending_node_longitude: wrap(ascending_node_longitude),
            periapsis_argument: wrap(periapsis_argument),
            true_anomaly: wrap(true_anomaly),
        })
    }

    /// Semi-latus rectum `p = h²/μ` (AU).
    pub fn semilatus_rectum(&self, mu: f64) -> f64 {
        self.angular_momentum * self.angular_momentum / mu
    }

    /// Drop the true anomaly and attach a perihelion time.
    ///
    /// `q = h²/μ / (1 + e)`
    pub fn to_orbital_elements(&self, perihelion_time: f64, mu: f64) -> OrbitalElements {
        OrbitalElements {
            perihelion_distance: self.semilatus_rectum(mu) / (1.0 + self.eccentricity),
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            ascending_node_longitude: self.ascending_node_longitude,
            periapsis_argument: self.periapsis_argument,
            perihelion_time,
        }
    }
}

impl fmt::Display for ClassicalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classical Elements")?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(
            f,
            "  h   (angular momentum)        = {:.9e} AU²/day",
            self.angular_momentum
        )?;
        writeln!(f, "  e   (eccentricity)            = {:.6}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)             = {:.6}°", self.inclination)?;
        writeln!(
            f,
            "  Ω   (longitude of node)       = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis)   = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(f, "  ν   (true anomaly)            = {:.6}°", self.true_anomaly)
    }
}
