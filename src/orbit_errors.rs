use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum OrbitError {
    #[error("Invalid orbital elements: {0}")]
    InvalidOrbitalElements(String),

    #[error("Invalid state vector: {0}")]
    InvalidStateVector(String),

    #[error(
        "Universal Kepler equation did not converge after {iterations} iterations (last step {last_step:e})"
    )]
    PropagationDidNotConverge { iterations: usize, last_step: f64 },

    #[error(
        "Kepler equation did not converge after {iterations} iterations (residual {residual:e})"
    )]
    KeplerEquationDidNotConverge { iterations: usize, residual: f64 },

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("Invalid sampling settings: {0}")]
    InvalidSamplingSettings(String),

    #[error("Orbit perihelion {perihelion} AU lies beyond the display radius {max_range} AU")]
    OrbitOutOfRange { perihelion: f64, max_range: f64 },
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            (InvalidOrbitalElements(a), InvalidOrbitalElements(b)) => a == b,
            (InvalidStateVector(a), InvalidStateVector(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InvalidCalendarDate(a), InvalidCalendarDate(b)) => a == b,
            (InvalidSamplingSettings(a), InvalidSamplingSettings(b)) => a == b,

            // Numerical diagnostics are not compared, only the variant and the iteration budget
            (
                PropagationDidNotConverge { iterations: a, .. },
                PropagationDidNotConverge { iterations: b, .. },
            ) => a == b,
            (
                KeplerEquationDidNotConverge { iterations: a, .. },
                KeplerEquationDidNotConverge { iterations: b, .. },
            ) => a == b,

            (
                OrbitOutOfRange {
                    perihelion: p1,
                    max_range: r1,
                },
                OrbitOutOfRange {
                    perihelion: p2,
                    max_range: r2,
                },
            ) => p1 == p2 && r1 == r2,

            _ => false,
        }
    }
}
