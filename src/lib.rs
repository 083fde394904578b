//! # orbitprop
//!
//! Two-body orbit propagation around the Sun.
//!
//! The crate converts between perihelion-based elements, classical
//! elements and Cartesian states, and advances a state in time with a
//! universal-variable Kepler solver that covers elliptic, parabolic and
//! hyperbolic motion with one algorithm. Every function is pure: there is no
//! I/O and no shared mutable state besides the read-only planet catalog.
//!
//! Units are AU, days and degrees for element angles. Dates are Julian dates.
//!
//! ```rust
//! use orbitprop::kepler::propagate_kepler;
//! use orbitprop::planets::Planet;
//! use orbitprop::kepler::PropagatorSettings;
//! use orbitprop::time::calendar_to_julian_date;
//!
//! let jd = calendar_to_julian_date(2024, 3, 20.0).unwrap();
//! let earth = Planet::Earth.osculating_elements().elements;
//! let state = earth.state_at(jd, &PropagatorSettings::default()).unwrap();
//!
//! // one day later
//! let next = propagate_kepler(&state.pos, &state.vel, 1.0).unwrap();
//! assert!((next.radius() - state.radius()).abs() < 1e-3);
//! ```
//!
//! Solvers log through the [`log`] facade: `debug` on convergence, `warn`
//! when they give up.

pub mod anomaly;
pub mod constants;
pub mod geometry;
pub mod kepler;
pub mod orbit_errors;
pub mod orbit_type;
pub mod planets;
pub mod sampling;
pub mod time;
pub mod vector;
