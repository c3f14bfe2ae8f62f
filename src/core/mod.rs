//! The core of the renderer: the math every shape builds on and the
//! interfaces shapes are queried through.
//!
//! ## Floating point and error bounds
//!
//! **Float** is an alias for `f32`. Ray-shape intersections keep track
//! of the accumulated rounding error with **EFloat** values, so hit
//! points can be bounded conservatively.
//!
//! ## Geometry and transformations
//!
//! Points, vectors, normals, bounding boxes and rays, plus the 4x4
//! matrices which move them between coordinate systems.
//!
//! ## Scene description
//!
//! Shapes are created by name from a **ParamSet** via
//! **make_shape()**.

pub mod api;
pub mod efloat;
pub mod geometry;
pub mod interaction;
pub mod paramset;
pub mod pbrt;
pub mod sampling;
pub mod shape;
pub mod stats;
pub mod transform;
