// std
use std::f32::consts::PI;
// pbrt
use crate::core::efloat::quadratic_efloat;
use crate::core::efloat::EFloat;
use crate::core::geometry::{Bounds3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::normal_derivatives;
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, radians};
use crate::core::shape::ShapeError;
use crate::core::transform::Transform;

// see cone.h

/// A cone around the z axis with its base circle in the z = 0 plane
/// and its apex at z = height.
#[derive(Clone)]
pub struct Cone {
    pub radius: Float,
    pub height: Float,
    pub phi_max: Float,
    // inherited from class Shape (see shape.h)
    pub object_to_world: Transform,
    pub world_to_object: Transform,
    pub reverse_orientation: bool,
    pub transform_swaps_handedness: bool,
}

impl Default for Cone {
    fn default() -> Self {
        let object_to_world: Transform = Transform::default();
        Cone {
            // Shape
            object_to_world,
            world_to_object: Transform::default(),
            reverse_orientation: false,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
            // Cone
            radius: 1.0,
            height: 1.0,
            phi_max: radians(360.0),
        }
    }
}

impl Cone {
    pub fn new(
        object_to_world: Transform,
        world_to_object: Transform,
        reverse_orientation: bool,
        height: Float,
        radius: Float,
        phi_max: Float,
    ) -> Self {
        Cone {
            // Shape
            object_to_world,
            world_to_object,
            reverse_orientation,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
            // Cone
            radius,
            height,
            phi_max: radians(clamp_t(phi_max, 0.0, 360.0)),
        }
    }
    // Shape
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f {
            p_min: Point3f {
                x: -self.radius,
                y: -self.radius,
                z: 0.0,
            },
            p_max: Point3f {
                x: self.radius,
                y: self.radius,
                z: self.height,
            },
        }
    }
    pub fn world_bound(&self) -> Bounds3f {
        self.object_to_world.transform_bounds(&self.object_bound())
    }
    fn hit_point(&self, ray: &Ray, t: Float) -> (Point3f, Float) {
        let p_hit: Point3f = ray.position(t);
        let mut phi: Float = p_hit.y.atan2(p_hit.x);
        if phi < 0.0 as Float {
            phi += 2.0 as Float * PI;
        }
        (p_hit, phi)
    }
    fn is_clipped(&self, p_hit: &Point3f, z_error: Float, phi: Float) -> bool {
        p_hit.z < -z_error || p_hit.z > self.height + z_error || phi > self.phi_max
    }
    fn find_hit(
        &self,
        ray: &Ray,
        o_err: &Vector3f,
        d_err: &Vector3f,
    ) -> Option<(EFloat, Point3f, Float)> {
        // initialize _EFloat_ ray coordinate values
        let ox = EFloat::new(ray.o.x, o_err.x);
        let oy = EFloat::new(ray.o.y, o_err.y);
        let oz = EFloat::new(ray.o.z, o_err.z);
        let dx = EFloat::new(ray.d.x, d_err.x);
        let dy = EFloat::new(ray.d.y, d_err.y);
        let dz = EFloat::new(ray.d.z, d_err.z);
        // compute quadratic cone coefficients
        let k: EFloat = EFloat::new(self.radius, 0.0) / EFloat::new(self.height, 0.0);
        let k: EFloat = k * k;
        let oz_h: EFloat = oz - EFloat::new(self.height, 0.0);
        let a: EFloat = dx * dx + dy * dy - k * dz * dz;
        let b: EFloat = (dx * ox + dy * oy - k * dz * oz_h) * 2.0f32;
        let c: EFloat = ox * ox + oy * oy - k * oz_h * oz_h;
        // solve quadratic equation for _t_ values
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        let discrim: EFloat = b * b - a * c * 4.0f32;
        if discrim.upper_bound() < 0.0f32 {
            return None;
        }
        if discrim.lower_bound() <= 0.0f32 {
            // double root, e.g. any ray through the apex
            if a.v == 0.0f32 {
                return None;
            }
            t0 = b / a * -0.5f32;
            t1 = t0;
        } else if !quadratic_efloat(a, b, c, &mut t0, &mut t1) {
            return None;
        }
        let z_error = |t: EFloat| (oz + t * dz).get_absolute_error();
        // check quadric shape _t0_ and _t1_ for nearest intersection
        let t_max: Float = ray.t_max.get();
        if t0.upper_bound() > t_max || t1.lower_bound() <= 0.0f32 {
            return None;
        }
        let mut t_shape_hit: EFloat = t0;
        if t_shape_hit.lower_bound() <= 0.0f32 {
            t_shape_hit = t1;
            if t_shape_hit.upper_bound() > t_max {
                return None;
            }
        }
        // compute cone inverse mapping
        let (mut p_hit, mut phi) = self.hit_point(ray, t_shape_hit.v);
        // test cone intersection against clipping parameters
        if self.is_clipped(&p_hit, z_error(t_shape_hit), phi) {
            if t_shape_hit == t1 {
                return None;
            }
            t_shape_hit = t1;
            if t1.upper_bound() > t_max {
                return None;
            }
            let (p, ph) = self.hit_point(ray, t_shape_hit.v);
            p_hit = p;
            phi = ph;
            if self.is_clipped(&p_hit, z_error(t_shape_hit), phi) {
                return None;
            }
        }
        // hits within the error bound of the base or apex lie on the cone
        p_hit.z = clamp_t(p_hit.z, 0.0 as Float, self.height);
        Some((t_shape_hit, p_hit, phi))
    }
    pub fn intersect(&self, r: &Ray, t_hit: &mut Float, isect: &mut SurfaceInteraction) -> bool {
        // transform _Ray_ to object space
        let mut o_err: Vector3f = Vector3f::default();
        let mut d_err: Vector3f = Vector3f::default();
        let ray: Ray = self
            .world_to_object
            .transform_ray_with_error(r, &mut o_err, &mut d_err);
        let (t_shape_hit, p_hit, phi) = match self.find_hit(&ray, &o_err, &d_err) {
            Some(hit) => hit,
            None => return false,
        };
        // find parametric representation of cone hit
        let u: Float = phi / self.phi_max;
        let v: Float = p_hit.z / self.height;
        // compute cone $\dpdu$ and $\dpdv$
        let (sin_phi, cos_phi) = phi.sin_cos();
        let mut dpdu: Vector3f = Vector3f {
            x: -self.phi_max * p_hit.y,
            y: self.phi_max * p_hit.x,
            z: 0.0,
        };
        if dpdu.x == 0.0 as Float && dpdu.y == 0.0 as Float {
            // the apex has no circle to sweep, use the direction of the base circle
            dpdu = Vector3f {
                x: -sin_phi,
                y: cos_phi,
                z: 0.0,
            } * (self.phi_max * self.radius);
        }
        let dpdv: Vector3f = Vector3f {
            x: -self.radius * cos_phi,
            y: -self.radius * sin_phi,
            z: self.height,
        };
        // compute cone $\dndu$ and $\dndv$
        let d2_p_duu: Vector3f = Vector3f {
            x: p_hit.x,
            y: p_hit.y,
            z: 0.0,
        } * -self.phi_max
            * self.phi_max;
        let d2_p_duv: Vector3f = Vector3f {
            x: sin_phi,
            y: -cos_phi,
            z: 0.0,
        } * (self.phi_max * self.radius);
        let d2_p_dvv: Vector3f = Vector3f::default();
        let (dndu, dndv) = normal_derivatives(&dpdu, &dpdv, &d2_p_duu, &d2_p_duv, &d2_p_dvv);
        // compute error bounds for cone intersection
        let px: EFloat = EFloat::new(ray.o.x, o_err.x) + t_shape_hit * EFloat::new(ray.d.x, d_err.x);
        let py: EFloat = EFloat::new(ray.o.y, o_err.y) + t_shape_hit * EFloat::new(ray.d.y, d_err.y);
        let pz: EFloat = EFloat::new(ray.o.z, o_err.z) + t_shape_hit * EFloat::new(ray.d.z, d_err.z);
        let p_error: Vector3f = Vector3f {
            x: px.get_absolute_error(),
            y: py.get_absolute_error(),
            z: pz.get_absolute_error(),
        };
        // initialize _SurfaceInteraction_ from parametric information
        let uv_hit: Point2f = Point2f { x: u, y: v };
        let wo: Vector3f = -ray.d;
        *isect = SurfaceInteraction::new(
            &p_hit,
            &p_error,
            uv_hit,
            &wo,
            &dpdu,
            &dpdv,
            &dndu,
            &dndv,
            ray.time,
            self.reverse_orientation ^ self.transform_swaps_handedness,
        );
        self.object_to_world.transform_surface_interaction(isect);
        *t_hit = t_shape_hit.v as Float;
        true
    }
    pub fn intersect_p(&self, r: &Ray) -> bool {
        // transform _Ray_ to object space
        let mut o_err: Vector3f = Vector3f::default();
        let mut d_err: Vector3f = Vector3f::default();
        let ray: Ray = self
            .world_to_object
            .transform_ray_with_error(r, &mut o_err, &mut d_err);
        self.find_hit(&ray, &o_err, &d_err).is_some()
    }
    pub fn get_reverse_orientation(&self) -> bool {
        self.reverse_orientation
    }
    pub fn get_transform_swaps_handedness(&self) -> bool {
        self.transform_swaps_handedness
    }
    pub fn area(&self) -> Float {
        self.radius * ((self.height * self.height) + (self.radius * self.radius)).sqrt()
            * self.phi_max
            / 2.0 as Float
    }
    pub fn sample(&self, _u: Point2f, _pdf: &mut Float) -> Result<InteractionCommon, ShapeError> {
        Err(ShapeError::Unsupported("Cone::sample"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ray(o: (Float, Float, Float), d: (Float, Float, Float)) -> Ray {
        Ray::new(
            Point3f {
                x: o.0,
                y: o.1,
                z: o.2,
            },
            Vector3f {
                x: d.0,
                y: d.1,
                z: d.2,
            },
        )
    }

    #[test]
    fn hits_slanted_side() {
        let cone: Cone = Cone::default();
        let r: Ray = ray((5.0, 0.0, 0.5), (-1.0, 0.0, 0.0));
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(cone.intersect(&r, &mut t_hit, &mut isect));
        assert!((t_hit - 4.5).abs() < 1e-4);
        assert!((isect.uv.y - 0.5).abs() < 1e-4);
        // normal points outwards and upwards
        let s: Float = 0.5 as Float;
        assert!((isect.common.n.x - s.sqrt()).abs() < 1e-3);
        assert!((isect.common.n.z - s.sqrt()).abs() < 1e-3);
        assert!(isect.common.p_error.x >= 0.0);
    }

    #[test]
    fn clips_the_mirrored_nappe() {
        // the implicit double cone continues above the apex
        let cone: Cone = Cone::default();
        let r: Ray = ray((5.0, 0.0, 1.5), (-1.0, 0.0, 0.0));
        assert!(!cone.intersect_p(&r));
        let below: Ray = ray((5.0, 0.0, -0.5), (-1.0, 0.0, 0.0));
        assert!(!cone.intersect_p(&below));
    }

    #[test]
    fn hits_the_apex_along_the_axis() {
        let cone: Cone = Cone::new(
            Transform::default(),
            Transform::default(),
            false,
            1.0,
            0.5,
            360.0,
        );
        let r: Ray = ray((0.0, 0.0, 5.0), (0.0, 0.0, -1.0));
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(cone.intersect(&r, &mut t_hit, &mut isect));
        assert!(cone.intersect_p(&r));
        assert!((t_hit - 4.0).abs() < 1e-4);
        assert!((isect.common.p.z - 1.0).abs() < 1e-5);
        assert!(isect.common.p.z <= 1.0);
        assert!((isect.uv.y - 1.0).abs() < 1e-6);
        let n = isect.common.n;
        assert!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
        assert!(n.z > 0.0);
        for d in [isect.dpdu, isect.dpdv].iter() {
            assert!(d.x.is_finite() && d.y.is_finite() && d.z.is_finite());
        }
        for d in [isect.dndu, isect.dndv].iter() {
            assert!(d.x.is_finite() && d.y.is_finite() && d.z.is_finite());
        }
        // a translated cone sees the same ray with rounding in its origin
        let o2w: Transform = Transform::translate(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: 2.1,
        });
        let moved: Cone = Cone::new(o2w, Transform::inverse(&o2w), false, 1.0, 0.5, 360.0);
        assert!(moved.intersect(&r, &mut t_hit, &mut isect));
        assert!((t_hit - 1.9).abs() < 1e-3);
        assert!((isect.common.p.z - 3.1).abs() < 1e-3);
        assert!(isect.common.n.z.is_finite());
    }

    #[test]
    fn intersect_p_agrees_with_intersect() {
        let cone: Cone = Cone::new(
            Transform::default(),
            Transform::default(),
            false,
            2.0,
            0.5,
            270.0,
        );
        for i in 0..21 {
            for j in 0..21 {
                let r: Ray = ray(
                    (-1.0 + i as Float * 0.1, -3.0, -0.5 + j as Float * 0.15),
                    (0.0, 1.0, 0.05),
                );
                let mut t_hit: Float = 0.0;
                let mut isect: SurfaceInteraction = SurfaceInteraction::default();
                assert_eq!(
                    cone.intersect(&r, &mut t_hit, &mut isect),
                    cone.intersect_p(&r)
                );
            }
        }
    }

    #[test]
    fn area_bounds_and_sampling() {
        let cone: Cone = Cone::new(
            Transform::default(),
            Transform::default(),
            false,
            1.0,
            0.5,
            360.0,
        );
        let expected: Float = PI * 0.5 * (1.25 as Float).sqrt();
        assert!((cone.area() - expected).abs() < 1e-5);
        let b: Bounds3f = cone.object_bound();
        assert_eq!(b.p_min.z, 0.0);
        assert_eq!(b.p_max.z, 1.0);
        assert_eq!(b.p_max.x, 0.5);
        let mut pdf: Float = 0.0;
        assert_eq!(
            cone.sample(Point2f::default(), &mut pdf).err(),
            Some(ShapeError::Unsupported("Cone::sample"))
        );
    }
}
