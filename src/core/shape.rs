//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean system design. All geometric primitives
//! answer the same set of queries (bounds, intersection, occlusion,
//! area and sampling), and the rest of the renderer can use them
//! without needing any details about the underlying shape.
//!
//! The set of shapes is closed, so dispatch happens through the
//! **Shape** enum instead of trait objects.

// others
use thiserror::Error;
// pbrt
use crate::core::geometry::{Bounds3f, Point2f, Ray};
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::pbrt::Float;
use crate::shapes::cone::Cone;
use crate::shapes::cylinder::Cylinder;
use crate::shapes::snowman::SnowMan;
use crate::shapes::sphere::Sphere;

// see shape.h

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("shape \"{0}\" unknown")]
    UnknownShape(String),
}

pub enum Shape {
    Cn(Cone),
    Clndr(Cylinder),
    Sphr(Sphere),
    SnwMn(Box<SnowMan>),
}

impl Shape {
    pub fn object_bound(&self) -> Bounds3f {
        match self {
            Shape::Cn(shape) => shape.object_bound(),
            Shape::Clndr(shape) => shape.object_bound(),
            Shape::Sphr(shape) => shape.object_bound(),
            Shape::SnwMn(shape) => shape.object_bound(),
        }
    }
    pub fn world_bound(&self) -> Bounds3f {
        match self {
            Shape::Cn(shape) => shape.world_bound(),
            Shape::Clndr(shape) => shape.world_bound(),
            Shape::Sphr(shape) => shape.world_bound(),
            Shape::SnwMn(shape) => shape.world_bound(),
        }
    }
    /// Nearest hit along the ray. On a hit *t_hit* and *isect* are
    /// overwritten, on a miss both stay untouched. The quadrics have
    /// no alpha textures and ignore *test_alpha_texture*.
    pub fn intersect(
        &self,
        r: &Ray,
        t_hit: &mut Float,
        isect: &mut SurfaceInteraction,
        test_alpha_texture: bool,
    ) -> bool {
        match self {
            Shape::Cn(shape) => shape.intersect(r, t_hit, isect),
            Shape::Clndr(shape) => shape.intersect(r, t_hit, isect),
            Shape::Sphr(shape) => shape.intersect(r, t_hit, isect),
            Shape::SnwMn(shape) => shape.intersect(r, t_hit, isect, test_alpha_texture),
        }
    }
    pub fn intersect_p(&self, r: &Ray, test_alpha_texture: bool) -> bool {
        match self {
            Shape::Cn(shape) => shape.intersect_p(r),
            Shape::Clndr(shape) => shape.intersect_p(r),
            Shape::Sphr(shape) => shape.intersect_p(r),
            Shape::SnwMn(shape) => shape.intersect_p(r, test_alpha_texture),
        }
    }
    pub fn get_reverse_orientation(&self) -> bool {
        match self {
            Shape::Cn(shape) => shape.get_reverse_orientation(),
            Shape::Clndr(shape) => shape.get_reverse_orientation(),
            Shape::Sphr(shape) => shape.get_reverse_orientation(),
            Shape::SnwMn(shape) => shape.get_reverse_orientation(),
        }
    }
    pub fn get_transform_swaps_handedness(&self) -> bool {
        match self {
            Shape::Cn(shape) => shape.get_transform_swaps_handedness(),
            Shape::Clndr(shape) => shape.get_transform_swaps_handedness(),
            Shape::Sphr(shape) => shape.get_transform_swaps_handedness(),
            Shape::SnwMn(shape) => shape.get_transform_swaps_handedness(),
        }
    }
    pub fn area(&self) -> Float {
        match self {
            Shape::Cn(shape) => shape.area(),
            Shape::Clndr(shape) => shape.area(),
            Shape::Sphr(shape) => shape.area(),
            Shape::SnwMn(shape) => shape.area(),
        }
    }
    /// Uniformly sample a point on the surface with respect to area.
    pub fn sample(&self, u: Point2f, pdf: &mut Float) -> Result<InteractionCommon, ShapeError> {
        match self {
            Shape::Cn(shape) => shape.sample(u, pdf),
            Shape::Clndr(shape) => Ok(shape.sample(u, pdf)),
            Shape::Sphr(shape) => Ok(shape.sample(u, pdf)),
            Shape::SnwMn(shape) => shape.sample(u, pdf),
        }
    }
}
