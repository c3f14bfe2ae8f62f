//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean system design. All geometric primitives
//! answer the same queries, and the rest of the renderer can use them
//! without needing any details about the underlying shape.
//!
//! - Cone
//! - Cylinder
//! - Sphere
//! - SnowMan
//!
//! ## Cones
//!
//! Cones are centered around the z axis, with the base circle in the
//! z = 0 plane and the apex at the given height.
//!
//! ## Cylinders
//!
//! Another useful quadric is the cylinder. Cylinder shapes are
//! centered around the z axis and open at both ends.
//!
//! ## Spheres
//!
//! Spheres are a special case of a general type of surfaces called
//! quadrics. They are the simplest type of curved surfaces that is
//! useful to a ray tracer and are a good starting point for general
//! ray intersection routines.
//!
//! ## SnowMan
//!
//! A compound shape made of two spheres, a cone and a cylinder. It
//! answers the same queries as the quadrics and tells which of its
//! parts was hit.

pub mod cone;
pub mod cylinder;
pub mod snowman;
pub mod sphere;
