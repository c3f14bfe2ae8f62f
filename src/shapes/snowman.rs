//! A snowman assembled from four quadrics: a body sphere, a head
//! sphere, a cylindrical nose and a conical hat.
//!
//! Each part sits at its own anchor inside the snowman's object space
//! and owns a transform pair mapping between its local frame and
//! world space. The compound answers the usual shape queries by asking
//! its parts and records which part produced a hit in the
//! **SurfaceInteraction** (*part_id* and *part_name*).
//!
//! ```rust
//! use rs_pbrt_snowman::core::geometry::{Point3f, Ray, Vector3f};
//! use rs_pbrt_snowman::core::interaction::SurfaceInteraction;
//! use rs_pbrt_snowman::core::paramset::ParamSet;
//! use rs_pbrt_snowman::core::pbrt::Float;
//! use rs_pbrt_snowman::core::transform::Transform;
//! use rs_pbrt_snowman::shapes::snowman::create_snowman_shape;
//!
//! let snowman = create_snowman_shape(
//!     &Transform::default(),
//!     &Transform::default(),
//!     false,
//!     &ParamSet::default(),
//! );
//! let ray = Ray::new(
//!     Point3f { x: 0.0, y: -5.0, z: -0.5 },
//!     Vector3f { x: 0.0, y: 1.0, z: 0.0 },
//! );
//! let mut t_hit: Float = 0.0;
//! let mut isect = SurfaceInteraction::default();
//! assert!(snowman.intersect(&ray, &mut t_hit, &mut isect, true));
//! assert_eq!(isect.part_name, Some("body"));
//! ```

// others
use log::debug;
use strum_macros::{EnumIter, IntoStaticStr};
// pbrt
use crate::core::geometry::{bnd3_expand, bnd3_union_bnd3f};
use crate::core::geometry::{Bounds3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::paramset::ParamSet;
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, radians};
use crate::core::shape::{Shape, ShapeError};
use crate::core::stats::StatCounter;
use crate::core::transform::Transform;
use crate::shapes::cone::Cone;
use crate::shapes::cylinder::Cylinder;
use crate::shapes::sphere::Sphere;

/// The parts of a snowman. The discriminant is the *part_id* stored
/// in a surface interaction, the lowercase name its *part_name*.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SnowManPart {
    Body = 0,
    Head = 1,
    Nose = 2,
    Hat = 3,
}

impl SnowManPart {
    fn counter_title(self) -> &'static str {
        match self {
            SnowManPart::Body => "SnowMan/Rays hitting the body",
            SnowManPart::Head => "SnowMan/Rays hitting the head",
            SnowManPart::Nose => "SnowMan/Rays hitting the nose",
            SnowManPart::Hat => "SnowMan/Rays hitting the hat",
        }
    }
}

pub struct SnowManComponent {
    pub part: SnowManPart,
    /// anchor placement inside the snowman's object space
    pub placement: Transform,
    pub local_to_sub: Transform,
    pub sub_to_local: Transform,
    pub shape: Shape,
}

pub struct SnowMan {
    pub radius_head: Float,
    pub radius_body: Float,
    pub radius_hat: Float,
    pub height_hat: Float,
    pub phi_max: Float,
    pub pos_head: Point3f,
    pub pos_body: Point3f,
    pub pos_hat: Point3f,
    pub bounds_margin: Float,
    // inherited from class Shape (see shape.h)
    pub object_to_world: Transform,
    pub world_to_object: Transform,
    pub reverse_orientation: bool,
    pub transform_swaps_handedness: bool,
    // body, head, nose, hat
    parts: [SnowManComponent; 4],
    hits: [StatCounter; 4],
}

impl SnowMan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        object_to_world: &Transform,
        world_to_object: &Transform,
        reverse_orientation: bool,
        radius_head: Float,
        radius_body: Float,
        radius_hat: Float,
        height_hat: Float,
        pos_head: Point3f,
        pos_body: Point3f,
        pos_hat: Point3f,
        phi_max: Float,
        bounds_margin: Float,
    ) -> Self {
        let phi_max_deg: Float = clamp_t(phi_max, 0.0, 360.0);
        let nose_rotation: Transform = Transform::rotate(
            90.0 as Float,
            &Vector3f {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
        );
        let place = |part: SnowManPart| -> SnowManComponent {
            let placement: Transform = match part {
                SnowManPart::Body => Transform::translate(&Vector3f::from(pos_body)),
                SnowManPart::Head => Transform::translate(&Vector3f::from(pos_head)),
                SnowManPart::Nose => {
                    Transform::translate(&Vector3f::from(pos_head)) * nose_rotation
                }
                SnowManPart::Hat => Transform::translate(&Vector3f::from(pos_hat)),
            };
            // translation innermost, undone outermost
            let local_to_sub: Transform = *object_to_world * placement;
            let sub_to_local: Transform = Transform::inverse(&placement) * *world_to_object;
            let shape: Shape = match part {
                SnowManPart::Body => Shape::Sphr(Sphere::new(
                    local_to_sub,
                    sub_to_local,
                    reverse_orientation,
                    radius_body,
                    -radius_body,
                    radius_body,
                    phi_max_deg,
                )),
                SnowManPart::Head => Shape::Sphr(Sphere::new(
                    local_to_sub,
                    sub_to_local,
                    reverse_orientation,
                    radius_head,
                    -radius_head,
                    radius_head,
                    phi_max_deg,
                )),
                SnowManPart::Nose => Shape::Clndr(Cylinder::new(
                    local_to_sub,
                    sub_to_local,
                    reverse_orientation,
                    radius_head / 5.0 as Float,
                    0.0 as Float,
                    1.5 as Float * radius_head,
                    phi_max_deg,
                )),
                SnowManPart::Hat => Shape::Cn(Cone::new(
                    local_to_sub,
                    sub_to_local,
                    reverse_orientation,
                    height_hat,
                    radius_hat,
                    phi_max_deg,
                )),
            };
            debug!("{:?} placed by {:?}", part, placement);
            SnowManComponent {
                part,
                placement,
                local_to_sub,
                sub_to_local,
                shape,
            }
        };
        let parts: [SnowManComponent; 4] = [
            place(SnowManPart::Body),
            place(SnowManPart::Head),
            place(SnowManPart::Nose),
            place(SnowManPart::Hat),
        ];
        let hits: [StatCounter; 4] = [
            StatCounter::new(SnowManPart::Body.counter_title()),
            StatCounter::new(SnowManPart::Head.counter_title()),
            StatCounter::new(SnowManPart::Nose.counter_title()),
            StatCounter::new(SnowManPart::Hat.counter_title()),
        ];
        let snowman = SnowMan {
            radius_head,
            radius_body,
            radius_hat,
            height_hat,
            phi_max: radians(phi_max_deg),
            pos_head,
            pos_body,
            pos_hat,
            bounds_margin,
            object_to_world: *object_to_world,
            world_to_object: *world_to_object,
            reverse_orientation,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
            parts,
            hits,
        };
        debug!("SnowMan object bound {:?}", snowman.object_bound());
        snowman
    }
    pub fn part_transforms(&self, part: SnowManPart) -> (&Transform, &Transform) {
        let component: &SnowManComponent = &self.parts[part as usize];
        (&component.local_to_sub, &component.sub_to_local)
    }
    pub fn part_shape(&self, part: SnowManPart) -> &Shape {
        &self.parts[part as usize].shape
    }
    /// Number of nearest hits the given part has won so far.
    pub fn hit_count(&self, part: SnowManPart) -> u64 {
        self.hits[part as usize].get()
    }
    pub fn report_stats(&self) {
        for counter in self.hits.iter() {
            counter.report();
        }
    }
    // Shape
    pub fn object_bound(&self) -> Bounds3f {
        let mut bounds: Bounds3f = Bounds3f::default();
        for component in self.parts.iter() {
            let part_bounds: Bounds3f = component
                .placement
                .transform_bounds(&component.shape.object_bound());
            bounds = bnd3_union_bnd3f(&bounds, &part_bounds);
        }
        bnd3_expand(&bounds, self.bounds_margin)
    }
    pub fn world_bound(&self) -> Bounds3f {
        self.object_to_world.transform_bounds(&self.object_bound())
    }
    /// Nearest hit over all parts. Parts are visited in the order
    /// body, head, nose, hat; which part wins between hits at exactly
    /// the same *t* is undefined.
    pub fn intersect(
        &self,
        r: &Ray,
        t_hit: &mut Float,
        isect: &mut SurfaceInteraction,
        test_alpha_texture: bool,
    ) -> bool {
        let mut nearest: Option<(SnowManPart, Float, SurfaceInteraction)> = None;
        for component in self.parts.iter() {
            let mut t: Float = 0.0;
            let mut si: SurfaceInteraction = SurfaceInteraction::default();
            if !component
                .shape
                .intersect(r, &mut t, &mut si, test_alpha_texture)
            {
                continue;
            }
            let closer: bool = match nearest {
                Some((_, t_best, _)) => t < t_best,
                None => true,
            };
            if closer {
                si.part_id = Some(component.part as u8);
                si.part_name = Some(component.part.into());
                nearest = Some((component.part, t, si));
            }
        }
        match nearest {
            Some((part, t, si)) => {
                self.hits[part as usize].inc();
                *t_hit = t;
                *isect = si;
                true
            }
            None => false,
        }
    }
    pub fn intersect_p(&self, r: &Ray, test_alpha_texture: bool) -> bool {
        [
            SnowManPart::Body,
            SnowManPart::Head,
            SnowManPart::Hat,
            SnowManPart::Nose,
        ]
        .iter()
        .any(|part| {
            self.parts[*part as usize]
                .shape
                .intersect_p(r, test_alpha_texture)
        })
    }
    pub fn get_reverse_orientation(&self) -> bool {
        self.reverse_orientation
    }
    pub fn get_transform_swaps_handedness(&self) -> bool {
        self.transform_swaps_handedness
    }
    /// Sum of the part areas. Overlaps (the nose inside the head) are
    /// counted twice.
    pub fn area(&self) -> Float {
        self.parts
            .iter()
            .map(|component| component.shape.area())
            .sum()
    }
    /// Area sampling over the parts is not implemented.
    pub fn sample(&self, _u: Point2f, _pdf: &mut Float) -> Result<InteractionCommon, ShapeError> {
        Err(ShapeError::Unsupported("SnowMan::sample"))
    }
}

pub fn create_snowman_shape(
    o2w: &Transform,
    w2o: &Transform,
    reverse_orientation: bool,
    params: &ParamSet,
) -> SnowMan {
    let radius_head: Float = params.find_one_float("radiusHead", 0.5);
    let radius_body: Float = params.find_one_float("radiusBody", 1.0);
    let radius_hat: Float = params.find_one_float("radiusHat", 0.5);
    let height_hat: Float = params.find_one_float("heightHat", 1.0);
    let pos_head: Point3f = params.find_one_point3f(
        "posHead",
        Point3f {
            x: 0.0,
            y: 0.0,
            z: 1.1,
        },
    );
    let pos_body: Point3f = params.find_one_point3f("posBody", Point3f::default());
    let pos_hat: Point3f = params.find_one_point3f(
        "posHat",
        Point3f {
            x: 0.0,
            y: 0.0,
            z: 2.1,
        },
    );
    let phi_max: Float = params.find_one_float("phimax", 360.0);
    let bounds_margin: Float = params.find_one_float("boundsmargin", 1.0);
    SnowMan::new(
        o2w,
        w2o,
        reverse_orientation,
        radius_head,
        radius_body,
        radius_hat,
        height_hat,
        pos_head,
        pos_body,
        pos_hat,
        phi_max,
        bounds_margin,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::PI;
    use strum::IntoEnumIterator;

    fn default_snowman() -> SnowMan {
        create_snowman_shape(
            &Transform::default(),
            &Transform::default(),
            false,
            &ParamSet::default(),
        )
    }

    #[test]
    fn part_names_follow_ids() {
        let names: Vec<(u8, &'static str)> = SnowManPart::iter()
            .map(|part| (part as u8, <&'static str>::from(part)))
            .collect();
        assert_eq!(
            names,
            vec![(0, "body"), (1, "head"), (2, "nose"), (3, "hat")]
        );
    }

    #[test]
    fn parts_are_stored_in_enumeration_order() {
        let snowman: SnowMan = default_snowman();
        for (i, component) in snowman.parts.iter().enumerate() {
            assert_eq!(component.part as usize, i);
        }
        assert!(matches!(snowman.part_shape(SnowManPart::Nose), Shape::Clndr(_)));
        assert!(matches!(snowman.part_shape(SnowManPart::Hat), Shape::Cn(_)));
    }

    #[test]
    fn nose_points_along_x() {
        let snowman: SnowMan = default_snowman();
        let (local_to_sub, _) = snowman.part_transforms(SnowManPart::Nose);
        let tip: Point3f = local_to_sub.transform_point(&Point3f {
            x: 0.0,
            y: 0.0,
            z: 0.75,
        });
        assert!((tip.x - 0.75).abs() < 1e-5);
        assert!(tip.y.abs() < 1e-5);
        assert!((tip.z - 1.1).abs() < 1e-5);
    }

    #[test]
    fn defaults_and_sweep_clamp() {
        let snowman: SnowMan = default_snowman();
        assert_eq!(snowman.radius_head, 0.5);
        assert_eq!(snowman.radius_body, 1.0);
        assert_eq!(snowman.height_hat, 1.0);
        assert_eq!(snowman.pos_hat.z, 2.1);
        assert!((snowman.phi_max - 2.0 * PI).abs() < 1e-6);
        let mut params: ParamSet = ParamSet::default();
        params.add_float(String::from("phimax"), 720.0);
        let wide: SnowMan =
            create_snowman_shape(&Transform::default(), &Transform::default(), false, &params);
        assert!((wide.phi_max - 2.0 * PI).abs() < 1e-6);
    }

    #[test]
    fn reads_camel_case_parameters() {
        let mut params: ParamSet = ParamSet::default();
        params.add_float(String::from("radiusHead"), 0.8);
        params.add_float(String::from("radiusBody"), 1.5);
        params.add_float(String::from("radiusHat"), 0.4);
        params.add_float(String::from("heightHat"), 2.0);
        params.add_point3f(
            String::from("posHead"),
            Point3f {
                x: 0.0,
                y: 0.0,
                z: 1.5,
            },
        );
        params.add_point3f(String::from("posBody"), Point3f::default());
        params.add_point3f(
            String::from("posHat"),
            Point3f {
                x: 0.0,
                y: 0.0,
                z: 3.0,
            },
        );
        let snowman: SnowMan =
            create_snowman_shape(&Transform::default(), &Transform::default(), false, &params);
        assert_eq!(snowman.radius_head, 0.8);
        assert_eq!(snowman.radius_body, 1.5);
        assert_eq!(snowman.radius_hat, 0.4);
        assert_eq!(snowman.height_hat, 2.0);
        assert_eq!(snowman.pos_head.z, 1.5);
        assert_eq!(snowman.pos_hat.z, 3.0);
        assert!(params.unused().is_empty());
        // the hat now sits on top of the head at z = 3
        let (local_to_sub, _) = snowman.part_transforms(SnowManPart::Hat);
        let base: Point3f = local_to_sub.transform_point(&Point3f::default());
        assert!((base.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn miss_leaves_counters_alone() {
        let snowman: SnowMan = default_snowman();
        let r: Ray = Ray::new(
            Point3f {
                x: 5.0,
                y: 5.0,
                z: 5.0,
            },
            Vector3f {
                x: 1.0,
                y: 0.0,
                z: 0.0,
            },
        );
        let mut t_hit: Float = -1.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(!snowman.intersect(&r, &mut t_hit, &mut isect, true));
        assert_eq!(t_hit, -1.0);
        for part in SnowManPart::iter() {
            assert_eq!(snowman.hit_count(part), 0);
        }
    }
}
