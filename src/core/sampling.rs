//! Draw random samples from a chosen probability distribution.

// std
use std::f32::consts::PI;
// pbrt
use crate::core::geometry::{Point2f, Vector3f, XYEnum};
use crate::core::pbrt::Float;

// see sampling.h

/// Uniformly sample rays in a full sphere. Choose a direction.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z: Float = 1.0 as Float - 2.0 as Float * u[XYEnum::X];
    let r: Float = (0.0 as Float).max(1.0 as Float - z * z).sqrt();
    let phi: Float = 2.0 as Float * PI * u[XYEnum::Y];
    Vector3f {
        x: r * phi.cos(),
        y: r * phi.sin(),
        z,
    }
}
