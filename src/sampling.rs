//! # Orbit sampling
//!
//! Discretizes an orbit into a polyline of heliocentric positions, together
//! with the body's state at a requested date. Closed orbits are sampled over
//! a full revolution. Open orbits are sampled between the two points where
//! the trajectory crosses the display radius.
//!
//! ```rust
//! use orbitprop::planets::Planet;
//! use orbitprop::sampling::orbit_samples;
//!
//! let mars = Planet::Mars.osculating_elements().elements;
//! let samples = orbit_samples(&mars, 2460000.5).unwrap();
//!
//! assert_eq!(samples.points.len(), 360);
//! assert!(!samples.is_hyperbolic);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    constants::JulianDate,
    kepler::PropagatorSettings,
    orbit_errors::OrbitError,
    orbit_type::{OrbitalElements, StateVector},
    vector::Vec3,
};

/// Controls of [`orbit_samples_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Number of points of the polyline, at least 2.
    pub samples: usize,
    /// Heliocentric distance (AU) at which open orbits are cut.
    pub max_display_radius: f64,
    pub propagator: PropagatorSettings,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings {
            samples: 360,
            max_display_radius: 50.0,
            propagator: PropagatorSettings::default(),
        }
    }
}

impl SamplingSettings {
    pub fn validate(&self) -> Result<(), OrbitError> {
        if self.samples < 2 {
            return Err(OrbitError::InvalidSamplingSettings(format!(
                "at least 2 samples are needed, got {}",
                self.samples
            )));
        }
        if !(self.max_display_radius.is_finite() && self.max_display_radius > 0.0) {
            return Err(OrbitError::InvalidSamplingSettings(format!(
                "display radius must be positive and finite, got {}",
                self.max_display_radius
            )));
        }
        Ok(())
    }
}

/// Sampled orbit, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSamples {
    /// Heliocentric positions (AU), ordered by increasing true anomaly.
    pub points: Vec<Vec3>,
    /// State of the body at the requested Julian date.
    pub reference_state: StateVector,
    /// Aphelion distance for closed orbits, the display radius for open ones (AU).
    pub max_range: f64,
    /// `true` for every open orbit (`e ≥ 1`), parabolas included.
    pub is_hyperbolic: bool,
}

/// Sample an orbit with [`SamplingSettings::default`].
pub fn orbit_samples(elements: &OrbitalElements, jd: JulianDate) -> Result<OrbitSamples, OrbitError> {
    orbit_samples_with(elements, jd, &SamplingSettings::default())
}

/// Sample an orbit and compute the body's state at `jd`.
///
/// Arguments
/// -----------------
/// * `elements`: the orbit.
/// * `jd`: date of `reference_state` (JD).
/// * `settings`: sample count, display radius and propagator controls.
///
/// Return
/// ----------
/// * [`OrbitSamples`]. Closed orbits get `samples` points evenly spaced in
///   true anomaly over [0°, 360°). Open orbits get `samples` points over
///   [−ν_max, ν_max] with `ν_max = acos((p/R − 1)/e)`, both ends on the
///   sphere of radius `R = max_display_radius`.
///
/// Errors
/// ----------
/// * [`OrbitError::InvalidOrbitalElements`] or [`OrbitError::InvalidSamplingSettings`]
///   on bad input.
/// * [`OrbitError::OrbitOutOfRange`] when an open orbit's perihelion lies beyond `R`.
/// * [`OrbitError::PropagationDidNotConverge`] from the reference state.
pub fn orbit_samples_with(
    elements: &OrbitalElements,
    jd: JulianDate,
    settings: &SamplingSettings,
) -> Result<OrbitSamples, OrbitError> {
    elements.validate()?;
    settings.validate()?;

    let mu = settings.propagator.mu;
    let n = settings.samples;
    let reference_state = elements.state_at(jd, &settings.propagator)?;

    let position_at = |true_anomaly: f64| elements.to_classical(true_anomaly, mu).to_state_vector(mu).pos;

    let samples = match elements.aphelion() {
        Some(aphelion) => {
            let step = 360.0 / n as f64;
            OrbitSamples {
                points: (0..n).map(|k| position_at(k as f64 * step)).collect(),
                reference_state,
                max_range: aphelion,
                is_hyperbolic: false,
            }
        }
        None => {
            let radius = settings.max_display_radius;
            if elements.perihelion_distance > radius {
                return Err(OrbitError::OrbitOutOfRange {
                    perihelion: elements.perihelion_distance,
                    max_range: radius,
                });
            }

            let cos_limit = (elements.semilatus_rectum() / radius - 1.0) / elements.eccentricity;
            let nu_max = cos_limit.clamp(-1.0, 1.0).acos().to_degrees();
            let step = 2.0 * nu_max / (n - 1) as f64;

            OrbitSamples {
                points: (0..n).map(|k| position_at(-nu_max + k as f64 * step)).collect(),
                reference_state,
                max_range: radius,
                is_hyperbolic: true,
            }
        }
    };

    debug!(
        "sampled {:?} orbit with {} points, max range {} AU",
        elements.regime(),
        samples.points.len(),
        samples.max_range
    );
    Ok(samples)
}

#[cfg(test)]
mod sampling_test {
    use super::*;
    use crate::constants::GM_SUN;
    use approx::assert_relative_eq;

    fn elements(q: f64, e: f64) -> OrbitalElements {
        OrbitalElements {
            perihelion_distance: q,
            eccentricity: e,
            inclination: 5.0,
            ascending_node_longitude: 30.0,
            periapsis_argument: 60.0,
            perihelion_time: 2451545.0,
        }
    }

    #[test]
    fn test_circular_orbit() {
        let samples = orbit_samples(&elements(2.0, 0.0), 2451600.0).unwrap();
        assert_eq!(samples.points.len(), 360);
        assert!(!samples.is_hyperbolic);
        assert_relative_eq!(samples.max_range, 2.0);
        for p in &samples.points {
            assert_relative_eq!(p.norm(), 2.0, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_elliptic_orbit_spans_perihelion_to_aphelion() {
        let el = elements(1.0, 0.6);
        let samples = orbit_samples(&el, 2451545.0).unwrap();

        // ν = 0 and ν = 180° are both sampled
        assert_relative_eq!(samples.points[0].norm(), 1.0, max_relative = 1e-14);
        assert_relative_eq!(samples.points[180].norm(), 4.0, max_relative = 1e-13);
        assert_relative_eq!(samples.max_range, 4.0, max_relative = 1e-15);
        assert_eq!(samples.reference_state, el.perihelion_state(GM_SUN));
    }

    #[test]
    fn test_open_orbits_are_cut_at_display_radius() {
        let settings = SamplingSettings {
            samples: 101,
            max_display_radius: 10.0,
            ..Default::default()
        };
        for el in [elements(1.5, 1.0), elements(0.8, 2.2)] {
            let samples = orbit_samples_with(&el, 2451500.0, &settings).unwrap();
            assert!(samples.is_hyperbolic);
            assert_eq!(samples.points.len(), 101);
            assert_eq!(samples.max_range, 10.0);

            assert_relative_eq!(samples.points[0].norm(), 10.0, max_relative = 1e-12);
            assert_relative_eq!(samples.points[100].norm(), 10.0, max_relative = 1e-12);
            // the middle sample is perihelion
            assert_relative_eq!(
                samples.points[50].norm(),
                el.perihelion_distance,
                max_relative = 1e-12
            );
            assert!(samples.points.iter().all(|p| p.norm() <= 10.0 * (1.0 + 1e-12)));
        }
    }

    #[test]
    fn test_open_orbit_out_of_range() {
        let settings = SamplingSettings {
            max_display_radius: 3.0,
            ..Default::default()
        };
        assert_eq!(
            orbit_samples_with(&elements(4.0, 1.5), 2451545.0, &settings),
            Err(OrbitError::OrbitOutOfRange {
                perihelion: 4.0,
                max_range: 3.0
            })
        );
    }

    #[test]
    fn test_invalid_input() {
        let few = SamplingSettings {
            samples: 1,
            ..Default::default()
        };
        assert!(matches!(
            orbit_samples_with(&elements(1.0, 0.1), 2451545.0, &few),
            Err(OrbitError::InvalidSamplingSettings(_))
        ));

        let no_radius = SamplingSettings {
            max_display_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            orbit_samples_with(&elements(1.0, 1.1), 2451545.0, &no_radius),
            Err(OrbitError::InvalidSamplingSettings(_))
        ));

        assert!(matches!(
            orbit_samples(&elements(1.0, -0.1), 2451545.0),
            Err(OrbitError::InvalidOrbitalElements(_))
        ));
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings: SamplingSettings =
            serde_json::from_str(r#"{"samples": 90, "propagator": {"tolerance": 1e-10}}"#).unwrap();
        assert_eq!(settings.samples, 90);
        assert_eq!(settings.max_display_radius, 50.0);
        assert_eq!(settings.propagator.tolerance, 1e-10);
        assert_eq!(settings.propagator.mu, GM_SUN);
        assert_eq!(settings.propagator.max_iterations, 500);
    }
}
