// std
use std::f32::consts::PI;
// pbrt
use crate::core::efloat::quadratic_efloat;
use crate::core::efloat::EFloat;
use crate::core::geometry::pnt3_distancef;
use crate::core::geometry::{Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::interaction::normal_derivatives;
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, gamma, radians};
use crate::core::sampling::uniform_sample_sphere;
use crate::core::transform::Transform;

// see sphere.h

#[derive(Clone)]
pub struct Sphere {
    pub radius: Float,
    pub z_min: Float,
    pub z_max: Float,
    pub theta_min: Float,
    pub theta_max: Float,
    pub phi_max: Float,
    // inherited from class Shape (see shape.h)
    pub object_to_world: Transform,
    pub world_to_object: Transform,
    pub reverse_orientation: bool,
    pub transform_swaps_handedness: bool,
}

impl Default for Sphere {
    fn default() -> Self {
        let object_to_world: Transform = Transform::default();
        Sphere {
            // Shape
            object_to_world,
            world_to_object: Transform::default(),
            reverse_orientation: false,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
            // Sphere
            radius: 1.0,
            z_min: -1.0,
            z_max: 1.0,
            theta_min: (-1.0 as Float).acos(),
            theta_max: (1.0 as Float).acos(),
            phi_max: radians(360.0),
        }
    }
}

impl Sphere {
    pub fn new(
        object_to_world: Transform,
        world_to_object: Transform,
        reverse_orientation: bool,
        radius: Float,
        z_min: Float,
        z_max: Float,
        phi_max: Float,
    ) -> Self {
        Sphere {
            // Shape
            object_to_world,
            world_to_object,
            reverse_orientation,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
            // Sphere
            radius,
            z_min: clamp_t(z_min.min(z_max), -radius, radius),
            z_max: clamp_t(z_min.max(z_max), -radius, radius),
            theta_min: clamp_t(z_min.min(z_max) / radius, -1.0, 1.0).acos(),
            theta_max: clamp_t(z_min.max(z_max) / radius, -1.0, 1.0).acos(),
            phi_max: radians(clamp_t(phi_max, 0.0, 360.0)),
        }
    }
    // Shape
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f {
            p_min: Point3f {
                x: -self.radius,
                y: -self.radius,
                z: self.z_min,
            },
            p_max: Point3f {
                x: self.radius,
                y: self.radius,
                z: self.z_max,
            },
        }
    }
    pub fn world_bound(&self) -> Bounds3f {
        self.object_to_world.transform_bounds(&self.object_bound())
    }
    /// Compute sphere hit position and $\phi$ for a given ray
    /// parameter, refined back onto the surface.
    fn hit_point(&self, ray: &Ray, t: Float) -> (Point3f, Float) {
        let mut p_hit: Point3f = ray.position(t);
        p_hit *= self.radius / pnt3_distancef(&p_hit, &Point3f::default());
        if p_hit.x == 0.0 && p_hit.y == 0.0 {
            p_hit.x = 1e-5_f32 * self.radius;
        }
        let mut phi: Float = p_hit.y.atan2(p_hit.x);
        if phi < 0.0 {
            phi += 2.0_f32 * PI;
        }
        (p_hit, phi)
    }
    fn is_clipped(&self, p_hit: &Point3f, phi: Float) -> bool {
        (self.z_min > -self.radius && p_hit.z < self.z_min)
            || (self.z_max < self.radius && p_hit.z > self.z_max)
            || phi > self.phi_max
    }
    /// Nearest valid root for an object space ray, shared by
    /// **intersect()** and **intersect_p()**.
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
        let a: EFloat = dx * dx + dy * dy + dz * dz;
        let b: EFloat = (dx * ox + dy * oy + dz * oz) * 2.0f32;
        let c: EFloat = ox * ox + oy * oy + oz * oz
            - EFloat::new(self.radius, 0.0) * EFloat::new(self.radius, 0.0);
        // solve quadratic equation for _t_ values
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        if !quadratic_efloat(a, b, c, &mut t0, &mut t1) {
            return None;
        }
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
        let (mut p_hit, mut phi) = self.hit_point(ray, t_shape_hit.v);
        // test sphere intersection against clipping parameters
        if self.is_clipped(&p_hit, phi) {
            if t_shape_hit == t1 {
                return None;
            }
            if t1.upper_bound() > t_max {
                return None;
            }
            t_shape_hit = t1;
            let (p, ph) = self.hit_point(ray, t_shape_hit.v);
            p_hit = p;
            phi = ph;
            if self.is_clipped(&p_hit, phi) {
                return None;
            }
        }
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
        // find parametric representation of sphere hit
        let u: Float = phi / self.phi_max;
        let theta: Float = clamp_t(p_hit.z / self.radius, -1.0, 1.0).acos();
        let v: Float = (theta - self.theta_min) / (self.theta_max - self.theta_min);
        // compute sphere $\dpdu$ and $\dpdv$
        let z_radius: Float = (p_hit.x * p_hit.x + p_hit.y * p_hit.y).sqrt();
        let inv_z_radius: Float = 1.0 / z_radius;
        let cos_phi: Float = p_hit.x * inv_z_radius;
        let sin_phi: Float = p_hit.y * inv_z_radius;
        let dpdu: Vector3f = Vector3f {
            x: -self.phi_max * p_hit.y,
            y: self.phi_max * p_hit.x,
            z: 0.0,
        };
        let dpdv: Vector3f = Vector3f {
            x: p_hit.z * cos_phi,
            y: p_hit.z * sin_phi,
            z: -self.radius * theta.sin(),
        } * (self.theta_max - self.theta_min);
        // compute sphere $\dndu$ and $\dndv$
        let d2_p_duu: Vector3f = Vector3f {
            x: p_hit.x,
            y: p_hit.y,
            z: 0.0,
        } * -self.phi_max
            * self.phi_max;
        let d2_p_duv: Vector3f = Vector3f {
            x: -sin_phi,
            y: cos_phi,
            z: 0.0,
        } * (self.theta_max - self.theta_min)
            * p_hit.z
            * self.phi_max;
        let d2_p_dvv: Vector3f = Vector3f::from(p_hit)
            * -(self.theta_max - self.theta_min)
            * (self.theta_max - self.theta_min);
        let (dndu, dndv) = normal_derivatives(&dpdu, &dpdv, &d2_p_duu, &d2_p_duv, &d2_p_dvv);
        // compute error bounds for sphere intersection
        let p_error: Vector3f = Vector3f::from(p_hit).abs() * gamma(5_i32);
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
        self.phi_max * self.radius * (self.z_max - self.z_min)
    }
    pub fn sample(&self, u: Point2f, pdf: &mut Float) -> InteractionCommon {
        let mut p_obj: Point3f = Point3f::default() + uniform_sample_sphere(&u) * self.radius;
        let mut it: InteractionCommon = InteractionCommon::default();
        it.n = self
            .object_to_world
            .transform_normal(&Normal3f {
                x: p_obj.x,
                y: p_obj.y,
                z: p_obj.z,
            })
            .normalize();
        if self.reverse_orientation {
            it.n *= -1.0 as Float;
        }
        // reproject _p_obj_ to sphere surface and compute _p_obj_error_
        p_obj *= self.radius / pnt3_distancef(&p_obj, &Point3f::default());
        let p_obj_error: Vector3f = Vector3f::from(p_obj).abs() * gamma(5_i32);
        it.p = self.object_to_world.transform_point_with_abs_error(
            &p_obj,
            &p_obj_error,
            &mut it.p_error,
        );
        *pdf = 1.0 as Float / self.area();
        it
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
    fn hits_unit_sphere_from_outside() {
        let sphere: Sphere = Sphere::default();
        let r: Ray = ray((0.3, 0.0, -5.0), (0.0, 0.0, 1.0));
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(sphere.intersect(&r, &mut t_hit, &mut isect));
        let z: Float = -(1.0 as Float - 0.09).sqrt();
        assert!((t_hit - (5.0 + z)).abs() < 1e-4);
        assert!((isect.common.p.z - z).abs() < 1e-4);
        // outward facing normal
        assert!((isect.common.n.x - 0.3).abs() < 1e-3);
        assert!((isect.common.n.z - z).abs() < 1e-3);
        assert!(sphere.intersect_p(&r));
    }

    #[test]
    fn hits_far_side_from_inside() {
        let sphere: Sphere = Sphere::default();
        let r: Ray = ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0));
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(sphere.intersect(&r, &mut t_hit, &mut isect));
        assert!((t_hit - 1.0).abs() < 1e-4);
    }

    #[test]
    fn respects_t_max_and_misses() {
        let sphere: Sphere = Sphere::default();
        let r: Ray = ray((0.0, 0.0, -5.0), (0.0, 0.0, 1.0));
        r.t_max.set(3.0);
        assert!(!sphere.intersect_p(&r));
        let miss: Ray = ray((2.0, 0.0, -5.0), (0.0, 0.0, 1.0));
        let mut t_hit: Float = -1.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(!sphere.intersect(&miss, &mut t_hit, &mut isect));
        assert_eq!(t_hit, -1.0);
    }

    #[test]
    fn partial_sweep_clips_hits() {
        // only the quarter with x >= 0 and y >= 0 remains
        let sphere: Sphere = Sphere::new(
            Transform::default(),
            Transform::default(),
            false,
            1.0,
            -1.0,
            1.0,
            90.0,
        );
        let behind: Ray = ray((-5.0, -0.5, 0.0), (1.0, 0.0, 0.0));
        // enters at x < 0 (clipped), leaves at x > 0 but y < 0 (clipped)
        assert!(!sphere.intersect_p(&behind));
        let front: Ray = ray((5.0, 0.5, 0.0), (-1.0, 0.0, 0.0));
        assert!(sphere.intersect_p(&front));
    }

    #[test]
    fn translated_sphere_area_and_bounds() {
        let o2w: Transform = Transform::translate(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: 3.0,
        });
        let sphere: Sphere = Sphere::new(o2w, Transform::inverse(&o2w), false, 2.0, -2.0, 2.0, 360.0);
        let expected: Float = 4.0 * PI * 4.0;
        assert!((sphere.area() - expected).abs() < 1e-3);
        let wb: Bounds3f = sphere.world_bound();
        assert_eq!(wb.p_min.z, 1.0);
        assert_eq!(wb.p_max.z, 5.0);
        let r: Ray = ray((0.0, 0.0, 10.0), (0.0, 0.0, -1.0));
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert!(sphere.intersect(&r, &mut t_hit, &mut isect));
        assert!((t_hit - 5.0).abs() < 1e-4);
        assert!((isect.common.p.z - 5.0).abs() < 1e-4);
    }

    #[test]
    fn samples_lie_on_surface() {
        let sphere: Sphere = Sphere::default();
        let mut pdf: Float = 0.0;
        let it: InteractionCommon = sphere.sample(Point2f { x: 0.3, y: 0.7 }, &mut pdf);
        assert!((pnt3_distancef(&it.p, &Point3f::default()) - 1.0).abs() < 1e-4);
        assert!((pdf - 1.0 / (4.0 * PI)).abs() < 1e-5);
    }
}
