//! Closed-form orbit vectors computed from the element set alone, without
//! going through a Cartesian state. Used for orbit-plane overlays.

use crate::{
    orbit_type::{orbit_rotation, OrbitalElements},
    vector::Vec3,
};

/// `sin i` below this value is an equatorial orbit without a line of nodes.
const EQUATORIAL_SIN_INC: f64 = 1e-12;

/// Unit normal of the orbital plane, along `r × v`.
pub fn orbit_normal(elements: &OrbitalElements) -> Vec3 {
    orbit_rotation(elements.inclination, elements.ascending_node_longitude, 0.0) * Vec3::z()
}

/// Unit vector from the Sun toward perihelion.
pub fn perihelion_direction(elements: &OrbitalElements) -> Vec3 {
    orbit_rotation(
        elements.inclination,
        elements.ascending_node_longitude,
        elements.periapsis_argument,
    ) * Vec3::x()
}

/// Specific angular momentum vector `h·n̂` (AU²/day).
pub fn angular_momentum_vector(elements: &OrbitalElements, mu: f64) -> Vec3 {
    elements.angular_momentum(mu) * orbit_normal(elements)
}

/// Eccentricity vector `e·p̂`, pointing at perihelion.
pub fn eccentricity_vector(elements: &OrbitalElements) -> Vec3 {
    elements.eccentricity * perihelion_direction(elements)
}

/// Unit vector toward the ascending node, or zero for an equatorial orbit.
pub fn line_of_nodes(elements: &OrbitalElements) -> Vec3 {
    if elements.inclination.to_radians().sin() < EQUATORIAL_SIN_INC {
        return Vec3::zeros();
    }
    let node = elements.ascending_node_longitude.to_radians();
    Vec3::new(node.cos(), node.sin(), 0.0)
}
