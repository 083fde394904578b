//! # Universal-variable Kepler propagation
//!
//! Two-body propagation of a heliocentric state `(r₀, v₀)` by an arbitrary
//! signed time span, valid for elliptic, parabolic and hyperbolic motion.
//!
//! The method is the classical universal-anomaly formulation:
//!
//! 1. Energy → reciprocal semi-major axis `α = 2/r₀ − v₀²/μ`.
//! 2. `α` selects an [`OrbitRegime`], which provides the initial guess `χ₀`.
//! 3. Newton iterations on the universal Kepler equation, using the Stumpff
//!    functions `c₂(ψ)`, `c₃(ψ)` with `ψ = χ²α`.
//! 4. Lagrange coefficients `f, g, ḟ, ġ` map `(r₀, v₀)` to `(r, v)`.
//!
//! Units are AU, days and AU³/day² throughout. Non-convergence is reported as
//! [`OrbitError::PropagationDidNotConverge`] instead of silently returning the
//! last iterate.
//!
//! ## See also
//!
//! * [`crate::anomaly`] – Closed-form anomaly conversions and the classical Kepler solver.
//! * [`crate::orbit_type::OrbitalElements::state_at`] – Elements → state at a Julian date, built on this module.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::{
    constants::{DPI, GM_SUN},
    orbit_errors::OrbitError,
    orbit_type::StateVector,
    vector::Vec3,
};

/// `|α|` below this value (AU⁻¹) is treated as parabolic.
pub const REGIME_TOLERANCE: f64 = 1e-6;

/// `|ψ|` below this value uses the Stumpff series instead of the closed forms.
pub const STUMPFF_SERIES_TOLERANCE: f64 = 1e-2;

/// Relative step under which a Newton step that stops shrinking counts as converged.
pub const STALL_TOLERANCE: f64 = 1e-6;

/// Principal value of an angle, in [0, 2π).
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Principal difference `a − b`, wrapped to [-π, π].
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let a = principal_angle(a);
    let b = principal_angle(b);

    let mut diff = a - b;

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Settings of the universal-variable solver.
///
/// `Default` uses the solar gravitational parameter, a `1e-12` tolerance on
/// successive universal-anomaly iterates and a cap of 500 Newton steps. The
/// tolerance is absolute for `|χ| ≤ 1` and relative above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagatorSettings {
    /// Gravitational parameter μ (AU³/day²)
    pub mu: f64,
    /// Convergence threshold on `|χₙ₊₁ − χₙ| / max(|χ|, 1)`
    pub tolerance: f64,
    /// Maximum number of Newton iterations
    pub max_iterations: usize,
}

impl Default for PropagatorSettings {
    fn default() -> Self {
        PropagatorSettings {
            mu: GM_SUN,
            tolerance: 1e-12,
            max_iterations: 500,
        }
    }
}

/// Conic family of an orbit, computed once and dispatched on by pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitRegime {
    Elliptic,
    Parabolic,
    Hyperbolic,
}

impl OrbitRegime {
    /// Classify from the reciprocal semi-major axis `α = 1/a` (AU⁻¹).
    pub fn from_alpha(alpha: f64) -> Self {
        if alpha.abs() < REGIME_TOLERANCE {
            OrbitRegime::Parabolic
        } else if alpha > 0.0 {
            OrbitRegime::Elliptic
        } else {
            OrbitRegime::Hyperbolic
        }
    }

    /// Classify from the eccentricity, with the same tolerance band around `e = 1`.
    pub fn from_eccentricity(ecc: f64) -> Self {
        if (ecc - 1.0).abs() < REGIME_TOLERANCE {
            OrbitRegime::Parabolic
        } else if ecc < 1.0 {
            OrbitRegime::Elliptic
        } else {
            OrbitRegime::Hyperbolic
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, OrbitRegime::Elliptic)
    }

    /// Initial guess for the universal anomaly.
    ///
    /// Arguments
    /// -----------------
    /// * `r0`: initial heliocentric distance (AU).
    /// * `rdotv`: `r₀·v₀` (AU²/day).
    /// * `alpha`: reciprocal semi-major axis (AU⁻¹).
    /// * `slr`: semi-latus rectum `|r₀×v₀|²/μ` (AU), used by the parabolic seed.
    /// * `mu`: gravitational parameter (AU³/day²).
    /// * `dt`: elapsed time (days), non-zero.
    ///
    /// Return
    /// ----------
    /// * `χ₀` (AU^½).
    ///
    /// The parabolic seed solves Barker's equation in closed form. The hyperbolic
    /// seed falls back to the short-arc estimate `√μ·dt/r₀` when the logarithmic
    /// estimate is not finite or points against `dt`, which happens for arcs
    /// much shorter than `1/n`.
    pub fn initial_guess(
        &self,
        r0: f64,
        rdotv: f64,
        alpha: f64,
        slr: f64,
        mu: f64,
        dt: f64,
    ) -> f64 {
        let sqrt_mu = mu.sqrt();
        match self {
            OrbitRegime::Elliptic => sqrt_mu * dt * alpha,
            OrbitRegime::Parabolic => {
                // s = ½ acot(3 √(μ/p³) dt), w = atan(∛tan s), χ₀ = 2 √p cot(2w)
                let s = 0.5 * (1.0 / (3.0 * (mu / slr.powi(3)).sqrt() * dt)).atan();
                let w = s.tan().cbrt().atan();
                slr.sqrt() * 2.0 / (2.0 * w).tan()
            }
            OrbitRegime::Hyperbolic => {
                let a = alpha.recip();
                let sign = dt.signum();
                let chi = sign
                    * (-a).sqrt()
                    * ((-2.0 * mu * alpha * dt)
                        / (rdotv + sign * (-mu * a).sqrt() * (1.0 - r0 * alpha)))
                        .ln();
                if chi.is_finite() && chi * dt > 0.0 {
                    chi
                } else {
                    sqrt_mu * dt / r0
                }
            }
        }
    }
}

/// Stumpff functions `(c₂(ψ), c₃(ψ))`.
///
/// The trigonometric forms are used for `ψ > tol`, the hyperbolic forms for
/// `ψ < −tol`, and the Taylor series (leading terms `1/2`, `1/6`) in between.
pub fn stumpff_c2_c3(psi: f64, tol: f64) -> (f64, f64) {
    if psi > tol {
        let sqrt_psi = psi.sqrt();
        // 1 - cos u = 2 sin²(u/2)
        let c2 = 2.0 * (sqrt_psi / 2.0).sin().powi(2) / psi;
        let c3 = (sqrt_psi - sqrt_psi.sin()) / (psi * sqrt_psi);
        (c2, c3)
    } else if psi < -tol {
        let sqrt_mpsi = (-psi).sqrt();
        let c2 = -2.0 * (sqrt_mpsi / 2.0).sinh().powi(2) / psi;
        let c3 = (sqrt_mpsi.sinh() - sqrt_mpsi) / (-psi * sqrt_mpsi);
        (c2, c3)
    } else {
        // c2 = Σ (-ψ)^k / (2k+2)!, c3 = Σ (-ψ)^k / (2k+3)!
        let c2 = 0.5 + psi * (-1.0 / 24.0 + psi * (1.0 / 720.0 + psi * (-1.0 / 40320.0)));
        let c3 = 1.0 / 6.0 + psi * (-1.0 / 120.0 + psi * (1.0 / 5040.0 + psi * (-1.0 / 362880.0)));
        (c2, c3)
    }
}

/// Converged universal anomaly and the quantities derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversalSolution {
    pub chi: f64,
    pub psi: f64,
    pub c2: f64,
    pub c3: f64,
    pub iterations: usize,
    pub regime: OrbitRegime,
}

/// Solve the universal Kepler equation for `χ` after `dt` days.
///
/// Arguments
/// -----------------
/// * `r0`: initial heliocentric distance (AU).
/// * `rdotv`: `r₀·v₀` (AU²/day).
/// * `alpha`: reciprocal semi-major axis (AU⁻¹).
/// * `slr`: semi-latus rectum (AU).
/// * `dt`: elapsed time (days).
/// * `settings`: gravitational parameter, tolerance and iteration cap.
///
/// Return
/// ----------
/// * The [`UniversalSolution`] or [`OrbitError::PropagationDidNotConverge`].
///
/// Note
/// ----------
/// * `dt = 0` returns `χ = 0` without iterating.
/// * Non-finite inputs are not rejected: a NaN solution is returned as is.
/// * A non-finite iterate from finite inputs is reported as
///   [`OrbitError::PropagationDidNotConverge`].
/// * Besides the tolerance, the iteration stops once the Newton step is
///   below the rounding noise of the Kepler residual, or stops shrinking
///   below [`STALL_TOLERANCE`].
pub fn solve_universal_anomaly(
    r0: f64,
    rdotv: f64,
    alpha: f64,
    slr: f64,
    dt: f64,
    settings: &PropagatorSettings,
) -> Result<UniversalSolution, OrbitError> {
    let regime = OrbitRegime::from_alpha(alpha);
    let mu = settings.mu;
    let sqrt_mu = mu.sqrt();

    if dt == 0.0 {
        return Ok(UniversalSolution {
            chi: 0.0,
            psi: 0.0,
            c2: 0.5,
            c3: 1.0 / 6.0,
            iterations: 0,
            regime,
        });
    }

    if ![r0, rdotv, alpha, slr, dt].iter().all(|x| x.is_finite()) {
        return Ok(UniversalSolution {
            chi: f64::NAN,
            psi: f64::NAN,
            c2: f64::NAN,
            c3: f64::NAN,
            iterations: 0,
            regime,
        });
    }

    let mut chi = regime.initial_guess(r0, rdotv, alpha, slr, mu, dt);
    let mut last_step = f64::INFINITY;

    for iteration in 1..=settings.max_iterations {
        let chi2 = chi * chi;
        let psi = chi2 * alpha;
        let (c2, c3) = stumpff_c2_c3(psi, STUMPFF_SERIES_TOLERANCE);

        let terms = [
            sqrt_mu * dt,
            chi2 * chi * c3,
            rdotv / sqrt_mu * chi2 * c2,
            r0 * chi * (1.0 - psi * c3),
        ];
        let r = chi2 * c2 + rdotv / sqrt_mu * chi * (1.0 - psi * c3) + r0 * (1.0 - psi * c2);
        let fun = terms[0] - terms[1] - terms[2] - terms[3];

        let next = chi + fun / r;
        if !next.is_finite() {
            warn!("universal anomaly diverged: regime={regime:?}, dt={dt}, iteration={iteration}");
            return Err(OrbitError::PropagationDidNotConverge {
                iterations: iteration,
                last_step: f64::NAN,
            });
        }

        let previous_step = last_step;
        last_step = (next - chi).abs();
        chi = next;

        // the residual cannot be resolved below the rounding error of its terms
        let noise_floor = 8.0 * f64::EPSILON * terms.iter().map(|t| t.abs()).sum::<f64>() / r.abs();
        let scale = chi.abs().max(1.0);
        let converged = last_step < settings.tolerance * scale
            || last_step <= noise_floor
            || (last_step >= previous_step && last_step < STALL_TOLERANCE * scale);

        if converged {
            let psi = chi * chi * alpha;
            let (c2, c3) = stumpff_c2_c3(psi, STUMPFF_SERIES_TOLERANCE);
            debug!("universal anomaly converged: regime={regime:?}, iterations={iteration}, chi={chi}");
            return Ok(UniversalSolution {
                chi,
                psi,
                c2,
                c3,
                iterations: iteration,
                regime,
            });
        }
    }

    warn!(
        "universal anomaly did not converge: regime={regime:?}, dt={dt}, last step={last_step:e}"
    );
    Err(OrbitError::PropagationDidNotConverge {
        iterations: settings.max_iterations,
        last_step,
    })
}

/// Propagate a heliocentric state by `dt` days under two-body gravity, with [`PropagatorSettings::default`].
///
/// Arguments
/// -----------------
/// * `pos0`: initial position (AU).
/// * `vel0`: initial velocity (AU/day).
/// * `dt`: signed elapsed time (days).
///
/// Return
/// ----------
/// * The [`StateVector`] at `t₀ + dt`.
///
/// See also
/// ------------
/// * [`propagate_kepler_with`] – Same with explicit settings.
pub fn propagate_kepler(pos0: &Vec3, vel0: &Vec3, dt: f64) -> Result<StateVector, OrbitError> {
    propagate_kepler_with(pos0, vel0, dt, &PropagatorSettings::default())
}

/// Propagate a state by `dt` days with explicit solver settings.
pub fn propagate_kepler_with(
    pos0: &Vec3,
    vel0: &Vec3,
    dt: f64,
    settings: &PropagatorSettings,
) -> Result<StateVector, OrbitError> {
    let mu = settings.mu;
    let sqrt_mu = mu.sqrt();

    let r0 = pos0.norm();
    let v0_sq = vel0.norm_squared();
    let rdotv = pos0.dot(vel0);
    let alpha = 2.0 / r0 - v0_sq / mu;
    let slr = pos0.cross(vel0).norm_squared() / mu;

    let sol = solve_universal_anomaly(r0, rdotv, alpha, slr, dt, settings)?;
    let chi2 = sol.chi * sol.chi;

    // Lagrange coefficients
    let f = 1.0 - chi2 / r0 * sol.c2;
    let g = dt - chi2 * sol.chi / sqrt_mu * sol.c3;
    let pos = f * pos0 + g * vel0;
    let r = pos.norm();

    let f_dot = sqrt_mu / (r * r0) * sol.chi * (sol.psi * sol.c3 - 1.0);
    let g_dot = 1.0 - chi2 / r * sol.c2;
    let vel = f_dot * pos0 + g_dot * vel0;

    let state = StateVector::new(pos, vel);
    let finite_input = pos0.iter().chain(vel0.iter()).all(|x| x.is_finite()) && dt.is_finite();
    if finite_input && !state.is_finite() {
        warn!("propagation by {dt} days produced a non-finite state");
        return Err(OrbitError::PropagationDidNotConverge {
            iterations: sol.iterations,
            last_step: f64::NAN,
        });
    }
    Ok(state)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn circular_state() -> (Vec3, Vec3) {
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, GM_SUN.sqrt(), 0.0))
    }

    #[test]
    fn test_principal_angle_and_diff() {
        assert_relative_eq!(principal_angle(-PI / 2.0), 3.0 * PI / 2.0);
        assert_relative_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert_relative_eq!(angle_diff(0.1, DPI - 0.1), 0.2, epsilon = 1e-12);
        assert_relative_eq!(angle_diff(DPI - 0.1, 0.1), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_regime_selection() {
        assert_eq!(OrbitRegime::from_alpha(0.5), OrbitRegime::Elliptic);
        assert_eq!(OrbitRegime::from_alpha(-0.5), OrbitRegime::Hyperbolic);
        assert_eq!(OrbitRegime::from_alpha(1e-9), OrbitRegime::Parabolic);
        assert_eq!(OrbitRegime::from_alpha(-1e-9), OrbitRegime::Parabolic);

        assert_eq!(OrbitRegime::from_eccentricity(0.0), OrbitRegime::Elliptic);
        assert_eq!(OrbitRegime::from_eccentricity(1.0), OrbitRegime::Parabolic);
        assert_eq!(OrbitRegime::from_eccentricity(1.3), OrbitRegime::Hyperbolic);
        assert!(OrbitRegime::Elliptic.is_closed());
        assert!(!OrbitRegime::Parabolic.is_closed());
    }

    #[test]
    fn test_stumpff_branches_agree_at_the_boundary() {
        let tol = STUMPFF_SERIES_TOLERANCE;
        for psi in [tol, -tol] {
            let (c2_series, c3_series) = stumpff_c2_c3(psi, 2.0 * tol);
            let (c2_closed, c3_closed) = stumpff_c2_c3(psi, 0.5 * tol);
            assert_relative_eq!(c2_series, c2_closed, max_relative = 1e-13);
            assert_relative_eq!(c3_series, c3_closed, max_relative = 1e-12);
        }

        assert_eq!(stumpff_c2_c3(0.0, tol), (0.5, 1.0 / 6.0));

        // c2(π²) = 2/π², c3 from the closed form
        let (c2, c3) = stumpff_c2_c3(PI * PI, tol);
        assert_relative_eq!(c2, 2.0 / (PI * PI), max_relative = 1e-14);
        assert_relative_eq!(c3, 1.0 / (PI * PI), max_relative = 1e-14);
    }

    #[test]
    fn test_dt_zero_is_identity() {
        let (pos0, vel0) = circular_state();
        let state = propagate_kepler(&pos0, &vel0, 0.0).unwrap();
        assert_eq!(state.pos, pos0);
        assert_eq!(state.vel, vel0);
    }

    #[test]
    fn test_quarter_circular_orbit() {
        let (pos0, vel0) = circular_state();
        let period = DPI / GM_SUN.sqrt();

        let state = propagate_kepler(&pos0, &vel0, period / 4.0).unwrap();
        assert_abs_diff_eq!(state.pos, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            state.vel,
            Vec3::new(-GM_SUN.sqrt(), 0.0, 0.0),
            epsilon = 1e-14
        );

        let state = propagate_kepler(&pos0, &vel0, -period / 4.0).unwrap();
        assert_abs_diff_eq!(state.pos, Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_parabolic_seed_is_finite() {
        let mu = GM_SUN;
        for dt in [-100.0, -1.0, 0.5, 30.0, 1000.0] {
            let chi0 = OrbitRegime::Parabolic.initial_guess(1.0, 0.0, 0.0, 2.0, mu, dt);
            assert!(chi0.is_finite(), "dt = {dt} gave chi0 = {chi0}");
            assert_eq!(chi0.signum(), dt.signum());
        }
    }

    #[test]
    fn test_parabolic_propagation_follows_barker() {
        let mu = GM_SUN;
        let pos0 = Vec3::new(1.0, 0.0, 0.0);
        let vel0 = Vec3::new(0.0, (2.0 * mu).sqrt(), 0.0);
        let dt = 40.0;

        let sol =
            solve_universal_anomaly(1.0, 0.0, 0.0, 2.0, dt, &PropagatorSettings::default()).unwrap();
        assert_eq!(sol.regime, OrbitRegime::Parabolic);

        let state = propagate_kepler(&pos0, &vel0, dt).unwrap();

        // Barker: t = ½ √(p³/μ) (D + D³/3), with D = tan(ν/2) and p = 2 q
        let p = 2.0;
        let nu = state.pos.y.atan2(state.pos.x);
        let d = (nu / 2.0).tan();
        let t = 0.5 * (p * p * p / mu).sqrt() * (d + d * d * d / 3.0);
        assert_relative_eq!(t, dt, max_relative = 1e-9);
        assert_relative_eq!(state.pos.norm(), p / (1.0 + nu.cos()), max_relative = 1e-10);
    }

    #[test]
    fn test_hyperbolic_energy_conserved() {
        let pos0 = Vec3::new(1.0, 0.2, -0.1);
        let vel0 = Vec3::new(0.005, 0.03, 0.004);
        let before = StateVector::new(pos0, vel0).specific_energy(GM_SUN);
        assert!(before > 0.0);

        let state = propagate_kepler(&pos0, &vel0, 250.0).unwrap();
        assert_relative_eq!(state.specific_energy(GM_SUN), before, max_relative = 1e-9);

        let back = propagate_kepler(&state.pos, &state.vel, -250.0).unwrap();
        assert_relative_eq!(back.pos, pos0, max_relative = 1e-9);
        assert_relative_eq!(back.vel, vel0, max_relative = 1e-9);
    }

    #[test]
    fn test_non_convergence_is_reported() {
        let pos0 = Vec3::new(1.0, 0.0, 0.0);
        let vel0 = Vec3::new(0.0, 0.02, 0.0);
        let settings = PropagatorSettings {
            max_iterations: 1,
            tolerance: 0.0,
            ..PropagatorSettings::default()
        };
        let err = propagate_kepler_with(&pos0, &vel0, 500.0, &settings).unwrap_err();
        assert_eq!(
            err,
            OrbitError::PropagationDidNotConverge {
                iterations: 1,
                last_step: 0.0
            }
        );
    }

    fn hyperbolic_state(q: f64, ecc: f64, nu_deg: f64) -> StateVector {
        use crate::orbit_type::{elements_to_cartesian, ClassicalElements};

        let el = ClassicalElements {
            angular_momentum: (GM_SUN * q * (1.0 + ecc)).sqrt(),
            eccentricity: ecc,
            inclination: 40.0,
            ascending_node_longitude: 110.0,
            periapsis_argument: 250.0,
            true_anomaly: nu_deg.rem_euclid(360.0),
        };
        elements_to_cartesian(&el, GM_SUN)
    }

    #[test]
    fn test_hyperbolic_seed_has_the_sign_of_dt() {
        let start = hyperbolic_state(0.5, 2.0, 20.0);
        let r0 = start.radius();
        let rdotv = start.pos.dot(&start.vel);
        let alpha = 2.0 / r0 - start.vel.norm_squared() / GM_SUN;
        let slr = start.angular_momentum().norm_squared() / GM_SUN;

        for dt in [-1e6, -800.0, -1.0, 1e-3, 300.0, 1e6] {
            let chi0 = OrbitRegime::Hyperbolic.initial_guess(r0, rdotv, alpha, slr, GM_SUN, dt);
            let sol =
                solve_universal_anomaly(r0, rdotv, alpha, slr, dt, &PropagatorSettings::default())
                    .unwrap();
            assert_eq!(chi0.signum(), dt.signum(), "dt = {dt}");
            assert_eq!(sol.chi.signum(), dt.signum(), "dt = {dt}");
            // the logarithmic estimate never overshoots the root by more than 2x
            assert!(chi0.abs() < 2.0 * sol.chi.abs(), "dt = {dt}: seed {chi0}, root {}", sol.chi);
        }
    }

    #[test]
    fn test_hyperbolic_sweep_stays_finite() {
        for q in [0.0101, 0.2, 1.0, 30.0] {
            for ecc in [1.1, 1.5, 2.0, 4.0, 7.2, 10.0] {
                for nu in [-60.0, 0.0, 37.7] {
                    let start = hyperbolic_state(q, ecc, nu);
                    let energy = start.specific_energy(GM_SUN);
                    for dt in [1.0, 38.1, 1e3, 1e5, 1e6] {
                        for dt in [dt, -dt] {
                            let end = propagate_kepler(&start.pos, &start.vel, dt).unwrap_or_else(
                                |err| panic!("q={q}, e={ecc}, nu={nu}, dt={dt}: {err}"),
                            );
                            assert!(end.is_finite(), "q={q}, e={ecc}, nu={nu}, dt={dt}");
                            assert_relative_eq!(
                                end.specific_energy(GM_SUN),
                                energy,
                                max_relative = 1e-8
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflow_from_finite_input_is_an_error() {
        // v∞ ≈ 5 AU/day, so the position after 1e308 days does not fit in an f64
        let start = hyperbolic_state(1e-4, 10.0, 0.0);
        for dt in [1e308, -1e308] {
            let result = propagate_kepler(&start.pos, &start.vel, dt);
            assert!(matches!(
                result,
                Err(OrbitError::PropagationDidNotConverge { .. })
            ));
        }
    }

    #[test]
    fn test_nan_input_propagates_nan() {
        let pos0 = Vec3::new(f64::NAN, 0.0, 0.0);
        let vel0 = Vec3::new(0.0, 0.01, 0.0);
        let state = propagate_kepler(&pos0, &vel0, 10.0).unwrap();
        assert!(state.pos.x.is_nan());

        let (pos0, vel0) = circular_state();
        let state = propagate_kepler(&pos0, &vel0, f64::NAN).unwrap();
        assert!(!state.is_finite());
    }
}
