//! # rs_pbrt_snowman
//!
//! [Rust][rust] crate implementing a compound **SnowMan** shape for a
//! ray tracer following the [PBRT book][book]. The snowman is built
//! from four quadrics (two spheres, a cone and a cylinder) and behaves
//! like any other shape: it has bounds, answers nearest-hit and
//! occlusion queries and reports its surface area.
//!
//! Shapes are created by name from a scene-description parameter set,
//! see [make_shape].
//!
//! [rust]: https://www.rust-lang.org
//! [book]: http://www.pbrt.org
//! [make_shape]: core/api/fn.make_shape.html

#[macro_use]
extern crate impl_ops;

pub mod core;
pub mod shapes;
