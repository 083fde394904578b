//! # Anomaly conversions
//!
//! Relations between the true anomaly `ν` and the regime-specific auxiliary
//! anomalies:
//!
//! | regime     | auxiliary anomaly | mean anomaly         |
//! |------------|-------------------|----------------------|
//! | elliptic   | eccentric `E`     | `M = E − e·sin E`    |
//! | hyperbolic | hyperbolic `H`    | `M = e·sinh H − H`   |
//! | parabolic  | Barker `D`        | `D + D³/3`           |
//!
//! The inverse of Kepler's equation has no closed form: [`mean_to_eccentric`]
//! and [`mean_to_hyperbolic`] use a bounded Newton iteration and return
//! [`OrbitError::KeplerEquationDidNotConverge`] when the cap is hit. The
//! parabolic case is solved exactly by [`parabolic_from_mean`].
//!
//! All angles are in radians unless the function name says otherwise.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, Radian},
    kepler::angle_diff,
    orbit_errors::OrbitError,
};

/// Settings of the Newton solver for Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerSolverSettings {
    /// Bound on both the residual and the relative step
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSolverSettings {
    fn default() -> Self {
        KeplerSolverSettings {
            tolerance: 1e-10,
            max_iterations: 50,
        }
    }
}

/// Eccentric anomaly → true anomaly (elliptic, `0 ≤ e < 1`), in (-π, π].
pub fn eccentric_to_true(eccentric_anomaly: Radian, e: f64) -> Radian {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
}

/// True anomaly → eccentric anomaly (elliptic, `0 ≤ e < 1`), in (-π, π].
pub fn true_to_eccentric(true_anomaly: Radian, e: f64) -> Radian {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - e).sqrt() * half.sin()).atan2((1.0 + e).sqrt() * half.cos())
}

pub fn eccentric_to_mean(eccentric_anomaly: Radian, e: f64) -> Radian {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

pub fn true_to_mean(true_anomaly: Radian, e: f64) -> Radian {
    eccentric_to_mean(true_to_eccentric(true_anomaly, e), e)
}

/// Solve Kepler's equation `E − e·sin E = M` for the eccentric anomaly.
///
/// Arguments
/// -----------------
/// * `mean_anomaly`: mean anomaly `M` (rad), any real value.
/// * `e`: eccentricity, `0 ≤ e < 1`.
/// * `settings`: tolerance and iteration cap.
///
/// Return
/// ----------
/// * `E` on the same revolution as `M`.
///
/// Errors
/// ----------
/// * [`OrbitError::KeplerEquationDidNotConverge`] once `max_iterations` Newton
///   steps have not brought both the residual and the relative step under
///   `tolerance`.
///
/// Note
/// ----------
/// * The iteration starts from `E₀ = M`, after reducing `M` to (-π, π].
pub fn mean_to_eccentric(
    mean_anomaly: Radian,
    e: f64,
    settings: &KeplerSolverSettings,
) -> Result<Radian, OrbitError> {
    // Work on the principal revolution, then add the full turns back
    let reduced = angle_diff(mean_anomaly, 0.0);
    let turns = mean_anomaly - reduced;

    let mut ecc_anomaly = reduced;
    let mut residual = f64::INFINITY;

    for iteration in 1..=settings.max_iterations {
        let f = ecc_anomaly - e * ecc_anomaly.sin() - reduced;
        let f_prime = 1.0 - e * ecc_anomaly.cos();
        let step = -f / f_prime;
        ecc_anomaly += step;

        residual = (ecc_anomaly - e * ecc_anomaly.sin() - reduced).abs();
        let relative_step = step.abs() / ecc_anomaly.abs().max(1.0);

        if residual < settings.tolerance && relative_step < settings.tolerance {
            debug!("Kepler equation converged in {iteration} iterations (e = {e})");
            return Ok(ecc_anomaly + turns);
        }
    }

    warn!("Kepler equation did not converge: M = {mean_anomaly}, e = {e}, residual = {residual:e}");
    Err(OrbitError::KeplerEquationDidNotConverge {
        iterations: settings.max_iterations,
        residual,
    })
}

/// Mean anomaly → true anomaly for an elliptic orbit, with the default solver settings.
///
/// The result is on the same revolution as `mean_anomaly`.
pub fn mean_to_true(e: f64, mean_anomaly: Radian) -> Result<Radian, OrbitError> {
    mean_to_true_with(e, mean_anomaly, &KeplerSolverSettings::default())
}

pub fn mean_to_true_with(
    e: f64,
    mean_anomaly: Radian,
    settings: &KeplerSolverSettings,
) -> Result<Radian, OrbitError> {
    let ecc_anomaly = mean_to_eccentric(mean_anomaly, e, settings)?;
    let reduced = angle_diff(ecc_anomaly, 0.0);
    Ok(eccentric_to_true(reduced, e) + (ecc_anomaly - reduced))
}

/// Degree flavour of [`mean_to_true`], the result is wrapped to [0, 360).
pub fn mean_to_true_deg(e: f64, mean_anomaly: Degree) -> Result<Degree, OrbitError> {
    let nu = mean_to_true(e, mean_anomaly.to_radians())?;
    Ok(nu.to_degrees().rem_euclid(360.0))
}

#[inline]
fn hyperbolic_factor(e: f64) -> f64 {
    ((e - 1.0) / (e + 1.0)).sqrt()
}

/// Hyperbolic anomaly → true anomaly (`e > 1`).
///
/// `tanh(H/2) = sqrt((e-1)/(e+1)) tan(ν/2)`
pub fn hyperbolic_to_true(hyperbolic_anomaly: f64, e: f64) -> Radian {
    let tanh_half_hyp = (hyperbolic_anomaly / 2.0).tanh();
    2.0 * (tanh_half_hyp / hyperbolic_factor(e)).atan()
}

pub fn true_to_hyperbolic(true_anomaly: Radian, e: f64) -> f64 {
    let tan_half_theta = (true_anomaly / 2.0).tan();
    2.0 * (tan_half_theta * hyperbolic_factor(e)).atanh()
}

/// Hyperbolic mean anomaly `M = e·sinh H − H`.
pub fn hyperbolic_to_mean(hyperbolic_anomaly: f64, e: f64) -> f64 {
    e * hyperbolic_anomaly.sinh() - hyperbolic_anomaly
}

/// Solve the hyperbolic Kepler equation `e·sinh H − H = M`.
///
/// Newton iteration started from `H₀ = sign(M)·ln(2|M|/e + 1.8)`, with the
/// same stopping rule and error as [`mean_to_eccentric`].
pub fn mean_to_hyperbolic(
    mean_anomaly: f64,
    e: f64,
    settings: &KeplerSolverSettings,
) -> Result<f64, OrbitError> {
    let mut hyp_anomaly = mean_anomaly.signum() * (2.0 * mean_anomaly.abs() / e + 1.8).ln();
    let mut residual = f64::INFINITY;

    for iteration in 1..=settings.max_iterations {
        let f = hyperbolic_to_mean(hyp_anomaly, e) - mean_anomaly;
        let f_prime = e * hyp_anomaly.cosh() - 1.0;
        let step = -f / f_prime;
        hyp_anomaly += step;

        residual = (hyperbolic_to_mean(hyp_anomaly, e) - mean_anomaly).abs();
        let relative_step = step.abs() / hyp_anomaly.abs().max(1.0);

        if residual < settings.tolerance * mean_anomaly.abs().max(1.0)
            && relative_step < settings.tolerance
        {
            debug!("hyperbolic Kepler equation converged in {iteration} iterations (e = {e})");
            return Ok(hyp_anomaly);
        }
    }

    warn!("hyperbolic Kepler equation did not converge: M = {mean_anomaly}, e = {e}");
    Err(OrbitError::KeplerEquationDidNotConverge {
        iterations: settings.max_iterations,
        residual,
    })
}

/// Barker anomaly → true anomaly, `D = tan(ν/2)`.
pub fn parabolic_to_true(parabolic_anomaly: f64) -> Radian {
    2.0 * parabolic_anomaly.atan()
}

pub fn true_to_parabolic(true_anomaly: Radian) -> f64 {
    (true_anomaly / 2.0).tan()
}

/// Exact solution of Barker's equation `D + D³/3 = W`.
pub fn parabolic_from_mean(w: f64) -> f64 {
    // odd in w, solve for |w| to avoid cancellation
    let y = (1.5 * w.abs() + (1.0 + 2.25 * w * w).sqrt()).cbrt();
    w.signum() * (y - 1.0 / y)
}
