use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    anomaly::{
        hyperbolic_to_true, mean_to_hyperbolic, mean_to_true, parabolic_from_mean,
        parabolic_to_true, KeplerSolverSettings,
    },
    constants::{Degree, JulianDate, DPI},
    kepler::{propagate_kepler_with, OrbitRegime, PropagatorSettings},
    orbit_errors::OrbitError,
    orbit_type::{classical_element::ClassicalElements, StateVector},
};

/// # Perihelion-based orbital elements
///
/// `(q, e, i, Ω, ω, T)` describes every conic section with the same six
/// numbers: the semi-major axis is never stored, so the parabola (`e = 1`)
/// needs no special case.
///
/// Units & conventions
/// --------------------
/// - Distances in **AU**; angles in **degrees**; `perihelion_time` is a **Julian Date**.
/// - Heliocentric, ecliptic J2000 reference frame.
/// - The short names `qr`, `ecc`, `inc`, `raan`, `omega`, `tp` are accepted
///   when deserializing.
///
/// See also
/// ------------
/// * [`ClassicalElements`] – `(h, e, i, Ω, ω, ν)`, the set converted to Cartesian.
/// * [`OrbitalElements::state_at`] – Heliocentric state at a Julian date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Perihelion distance `q` (AU), `q > 0`.
    #[serde(alias = "qr")]
    pub perihelion_distance: f64,

    /// Eccentricity `e ≥ 0`.
    #[serde(alias = "ecc")]
    pub eccentricity: f64,

    /// Inclination `i` (degrees), in [0, 180].
    #[serde(alias = "inc")]
    pub inclination: Degree,

    /// Longitude of the ascending node `Ω` (degrees), in [0, 360).
    #[serde(alias = "raan")]
    pub ascending_node_longitude: Degree,

    /// Argument of perihelion `ω` (degrees), in [0, 360).
    #[serde(alias = "omega")]
    pub periapsis_argument: Degree,

    /// Time of perihelion passage `T` (JD).
    #[serde(alias = "tp")]
    pub perihelion_time: JulianDate,
}

impl OrbitalElements {
    /// Check the physical domain of the element set.
    ///
    /// Errors
    /// ----------
    /// * [`OrbitError::InvalidOrbitalElements`] if any value is not finite,
    ///   `q ≤ 0`, `e < 0`, `i ∉ [0, 180]` or an angle is outside [0, 360).
    pub fn validate(&self) -> Result<(), OrbitError> {
        let fields = [
            ("perihelion distance", self.perihelion_distance),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending node longitude", self.ascending_node_longitude),
            ("argument of perihelion", self.periapsis_argument),
            ("perihelion time", self.perihelion_time),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrbitError::InvalidOrbitalElements(format!(
                "{name} is not finite ({value})"
            )));
        }

        if self.perihelion_distance <= 0.0 {
            return Err(OrbitError::InvalidOrbitalElements(format!(
                "perihelion distance must be > 0, got {}",
                self.perihelion_distance
            )));
        }
        if self.eccentricity < 0.0 {
            return Err(OrbitError::InvalidOrbitalElements(format!(
                "eccentricity must be >= 0, got {}",
                self.eccentricity
            )));
        }
        if !(0.0..=180.0).contains(&self.inclination) {
            return Err(OrbitError::InvalidOrbitalElements(format!(
                "inclination must be in [0, 180], got {}",
                self.inclination
            )));
        }
        for (name, angle) in [
            ("ascending node longitude", self.ascending_node_longitude),
            ("argument of perihelion", self.periapsis_argument),
        ] {
            if !(0.0..360.0).contains(&angle) {
                return Err(OrbitError::InvalidOrbitalElements(format!(
                    "{name} must be in [0, 360), got {angle}"
                )));
            }
        }
        Ok(())
    }

    pub fn regime(&self) -> OrbitRegime {
        OrbitRegime::from_eccentricity(self.eccentricity)
    }

    /// Semi-major axis `a = q / (1 − e)` (AU), negative for hyperbolas and
    /// `None` for the parabola.
    pub fn semi_major_axis(&self) -> Option<f64> {
        match self.regime() {
            OrbitRegime::Parabolic => None,
            _ => Some(self.perihelion_distance / (1.0 - self.eccentricity)),
        }
    }

    /// Semi-latus rectum `p = q (1 + e)` (AU).
    pub fn semilatus_rectum(&self) -> f64 {
        self.perihelion_distance * (1.0 + self.eccentricity)
    }

    /// Specific angular momentum `h = √(μ p)` (AU²/day).
    pub fn angular_momentum(&self, mu: f64) -> f64 {
        (mu * self.semilatus_rectum()).sqrt()
    }

    /// Rate of the regime's mean anomaly (rad/day).
    ///
    /// * elliptic: `n = √(μ/a³)`
    /// * hyperbolic: `n = √(μ/(−a)³)`
    /// * parabolic: `n = √(μ/(2q³))`, the rate of `W` in Barker's equation `D + D³/3 = W`
    pub fn mean_motion(&self, mu: f64) -> f64 {
        match self.semi_major_axis() {
            Some(a) => (mu / a.abs().powi(3)).sqrt(),
            None => (mu / (2.0 * self.perihelion_distance.powi(3))).sqrt(),
        }
    }

    /// Orbital period (days), `None` for open orbits.
    pub fn period(&self, mu: f64) -> Option<f64> {
        self.regime()
            .is_closed()
            .then(|| DPI / self.mean_motion(mu))
    }

    /// Aphelion distance `Q = q (1 + e) / (1 − e)` (AU), `None` for open orbits.
    pub fn aphelion(&self) -> Option<f64> {
        self.regime()
            .is_closed()
            .then(|| self.semilatus_rectum() / (1.0 - self.eccentricity))
    }

    /// Attach a true anomaly (degrees) to obtain the classical set.
    pub fn to_classical(&self, true_anomaly: Degree, mu: f64) -> ClassicalElements {
        ClassicalElements {
            angular_momentum: self.angular_momentum(mu),
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            ascending_node_longitude: self.ascending_node_longitude,
            periapsis_argument: self.periapsis_argument,
            true_anomaly,
        }
    }

    /// Heliocentric state at perihelion (`ν = 0`).
    pub fn perihelion_state(&self, mu: f64) -> StateVector {
        self.to_classical(0.0, mu).to_state_vector(mu)
    }

    /// True anomaly (degrees, in (−180, 180]) at Julian date `jd`.
    ///
    /// Solves the Kepler equation of the element set's regime: Kepler's
    /// equation for ellipses, its hyperbolic form for hyperbolas and Barker's
    /// equation (closed form) for the parabola.
    ///
    /// Errors
    /// ----------
    /// * [`OrbitError::InvalidOrbitalElements`] from [`OrbitalElements::validate`].
    /// * [`OrbitError::KeplerEquationDidNotConverge`] from the Newton solvers.
    pub fn true_anomaly_at(&self, jd: JulianDate, mu: f64) -> Result<Degree, OrbitError> {
        self.validate()?;

        let e = self.eccentricity;
        let mean_anomaly = self.mean_motion(mu) * (jd - self.perihelion_time);

        let nu = match self.regime() {
            OrbitRegime::Elliptic => mean_to_true(e, mean_anomaly)?,
            OrbitRegime::Hyperbolic => {
                let hyp = mean_to_hyperbolic(mean_anomaly, e, &KeplerSolverSettings::default())?;
                hyperbolic_to_true(hyp, e)
            }
            OrbitRegime::Parabolic => parabolic_to_true(parabolic_from_mean(mean_anomaly)),
        };

        let deg = nu.to_degrees().rem_euclid(360.0);
        Ok(if deg > 180.0 { deg - 360.0 } else { deg })
    }

    /// Heliocentric state at Julian date `jd`.
    ///
    /// The perihelion state is propagated by `jd − T` with the
    /// universal-variable solver, so every regime goes through the same path.
    ///
    /// Arguments
    /// -----------------
    /// * `jd`: target epoch (JD).
    /// * `settings`: gravitational parameter and solver controls.
    ///
    /// Return
    /// ----------
    /// * The [`StateVector`] at `jd`.
    ///
    /// Errors
    /// ----------
    /// * [`OrbitError::InvalidOrbitalElements`] when validation fails.
    /// * [`OrbitError::PropagationDidNotConverge`] from the propagator.
    pub fn state_at(
        &self,
        jd: JulianDate,
        settings: &PropagatorSettings,
    ) -> Result<StateVector, OrbitError> {
        self.validate()?;
        let perihelion = self.perihelion_state(settings.mu);
        propagate_kepler_with(
            &perihelion.pos,
            &perihelion.vel,
            jd - self.perihelion_time,
            settings,
        )
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Orbital Elements ({:?}), perihelion at JD {:.6}",
            self.regime(),
            self.perihelion_time
        )?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(
            f,
            "  q   (perihelion distance)     = {:.9} AU",
            self.perihelion_distance
        )?;
        writeln!(f, "  e   (eccentricity)            = {:.9}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)             = {:.6}°", self.inclination)?;
        writeln!(
            f,
            "  Ω   (longitude of node)       = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of perihelion)  = {:.6}°",
            self.periapsis_argument
        )
    }
}
