#![allow(dead_code)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use orbitprop::orbit_type::{ClassicalElements, StateVector};

/// Relative comparison of two states, componentwise on position and velocity.
pub fn assert_state_close(actual: &StateVector, expected: &StateVector, max_relative: f64) {
    let pos_scale = expected.pos.norm().max(f64::MIN_POSITIVE);
    let vel_scale = expected.vel.norm().max(f64::MIN_POSITIVE);

    assert_abs_diff_eq!(actual.pos, expected.pos, epsilon = max_relative * pos_scale);
    assert_abs_diff_eq!(actual.vel, expected.vel, epsilon = max_relative * vel_scale);
}

/// Difference of two angles in degrees, wrapped to (−180, 180].
pub fn angle_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

pub fn assert_elements_close(
    actual: &ClassicalElements,
    expected: &ClassicalElements,
    max_relative: f64,
) {
    assert_relative_eq!(
        actual.angular_momentum,
        expected.angular_momentum,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        max_relative = max_relative,
        epsilon = max_relative
    );
    assert_abs_diff_eq!(
        actual.inclination,
        expected.inclination,
        epsilon = 360.0 * max_relative
    );
    for (a, b) in [
        (actual.ascending_node_longitude, expected.ascending_node_longitude),
        (actual.periapsis_argument, expected.periapsis_argument),
        (actual.true_anomaly, expected.true_anomaly),
    ] {
        assert_abs_diff_eq!(angle_gap(a, b), 0.0, epsilon = 360.0 * max_relative);
    }
}

/// Install `env_logger` once so solver logs show up with `RUST_LOG=debug`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
