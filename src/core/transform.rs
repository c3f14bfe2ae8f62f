//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//!
//! ## Transformations
//!
//! In general a transformation is a mapping from points to points and
//! from vectors to vectors. When a new **Transform** is created, it
//! defaults to the *identity transformation* - the transformation
//! that maps each point and each vector to itself.
//!
//! ### Translations
//!
//! One of the simplest transformations is the translation
//! transformation. Translations only affect points, leaving vectors
//! unchanged.
//!
//! ### Scaling
//!
//! Another basic transformations is the scale transformation. We can
//! differentiate between **uniform** scaling, where all three scale
//! factors have the same value, and **nonuniform** scaling, where
//! they may have different values.
//!
//! ### Rotation Around an Arbitrary Axis
//!
//! We also provide a routine to compute the transformation that
//! represents rotation around an arbitrary axis. Compound shapes use
//! it to turn a sub-shape's intrinsic axis into a new direction.
//!
//! ### Composition
//!
//! Multiplying two transforms `a * b` yields the transform that
//! applies `b` first and `a` afterwards. The inverse matrix is
//! composed in the opposite order, so every **Transform** keeps an
//! exact pair.

// std
use std::cell::Cell;
use std::ops::Mul;
// others
use log::warn;
// pbrt
use crate::core::geometry::{bnd3_union_pnt3f, nrm_faceforward_nrm, vec3_dot_vec3f};
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray, Vector3f};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::Float;
use crate::core::pbrt::{gamma, radians};

// see transform.h

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
    /// Gauss-Jordan elimination with full pivoting. A singular matrix
    /// is reported and the partially reduced result is returned.
    pub fn inverse(m: &Matrix4x4) -> Matrix4x4 {
        let mut indxc: [usize; 4] = [0; 4];
        let mut indxr: [usize; 4] = [0; 4];
        let mut ipiv: [usize; 4] = [0; 4];
        let mut minv: Matrix4x4 = *m;
        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            // choose pivot
            for j in 0..4 {
                if ipiv[j] != 1 {
                    for (k, item) in ipiv.iter().enumerate() {
                        if *item == 0 {
                            let abs: Float = (minv.m[j][k]).abs();
                            if abs >= big {
                                big = abs;
                                irow = j;
                                icol = k;
                            }
                        } else if *item > 1 {
                            warn!("Singular matrix in MatrixInvert");
                        }
                    }
                }
            }
            ipiv[icol] += 1;
            // swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                minv.m.swap(irow, icol);
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv.m[icol][icol] == 0.0 {
                warn!("Singular matrix in MatrixInvert");
            }
            // set $m[icol][icol]$ to one by scaling row _icol_ appropriately
            let pivinv: Float = 1.0 / minv.m[icol][icol];
            minv.m[icol][icol] = 1.0;
            for j in 0..4 {
                minv.m[icol][j] *= pivinv;
            }
            // subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save: Float = minv.m[j][icol];
                    minv.m[j][icol] = 0.0;
                    for k in 0..4 {
                        minv.m[j][k] -= minv.m[icol][k] * save;
                    }
                }
            }
        }
        // swap columns to reflect permutation
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.m[k].swap(indxr[j], indxc[j])
                }
            }
        }
        minv
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        self.m == rhs.m
    }
}

// see transform.cpp

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    pub fn inverse(t: &Transform) -> Transform {
        Transform {
            m: t.m_inv,
            m_inv: t.m,
        }
    }
    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::default()
    }
    pub fn swaps_handedness(&self) -> bool {
        let det: Float = self.m.m[0][0]
            * (self.m.m[1][1] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][1])
            - self.m.m[0][1] * (self.m.m[1][0] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][0])
            + self.m.m[0][2] * (self.m.m[1][0] * self.m.m[2][1] - self.m.m[1][1] * self.m.m[2][0]);
        det < 0.0 as Float
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, delta.x, 0.0, 1.0, 0.0, delta.y, 0.0, 0.0, 1.0, delta.z, 0.0, 0.0,
                0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -delta.x, 0.0, 1.0, 0.0, -delta.y, 0.0, 0.0, 1.0, -delta.z, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform {
            m: Matrix4x4::new(
                x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0 / x,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / y,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / z,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ),
        }
    }
    pub fn rotate_z(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    /// Rotation by *theta* degrees around an arbitrary *axis*.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Transform {
        let a: Vector3f = axis.normalize();
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let mut m = Matrix4x4::default();
        // compute rotation of first basis vector
        m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        m.m[0][3] = 0.0;
        // compute rotations of second basis vectors
        m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        m.m[1][3] = 0.0;
        // compute rotations of third basis vectors
        m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        m.m[2][3] = 0.0;
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Normals transform with the transpose of the inverse matrix.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let x: Float = n.x;
        let y: Float = n.y;
        let z: Float = n.z;
        Normal3f {
            x: self.m_inv.m[0][0] * x + self.m_inv.m[1][0] * y + self.m_inv.m[2][0] * z,
            y: self.m_inv.m[0][1] * x + self.m_inv.m[1][1] * y + self.m_inv.m[2][1] * z,
            z: self.m_inv.m[0][2] * x + self.m_inv.m[1][2] * y + self.m_inv.m[2][2] * z,
        }
    }
    /// Transform all eight corners and bound the result.
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        let p: Point3f = self.transform_point(&b.corner(0));
        let mut ret: Bounds3f = Bounds3f { p_min: p, p_max: p };
        for corner in 1..8_u8 {
            ret = bnd3_union_pnt3f(&ret, &self.transform_point(&b.corner(corner)));
        }
        ret
    }
    pub fn transform_point_with_error(&self, p: &Point3f, p_error: &mut Vector3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        // compute transformed coordinates from point _pt_
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        // compute absolute error for transformed point
        let x_abs_sum: Float = (self.m.m[0][0] * x).abs()
            + (self.m.m[0][1] * y).abs()
            + (self.m.m[0][2] * z).abs()
            + self.m.m[0][3].abs();
        let y_abs_sum: Float = (self.m.m[1][0] * x).abs()
            + (self.m.m[1][1] * y).abs()
            + (self.m.m[1][2] * z).abs()
            + self.m.m[1][3].abs();
        let z_abs_sum: Float = (self.m.m[2][0] * x).abs()
            + (self.m.m[2][1] * y).abs()
            + (self.m.m[2][2] * z).abs()
            + self.m.m[2][3].abs();
        *p_error = Vector3f {
            x: x_abs_sum,
            y: y_abs_sum,
            z: z_abs_sum,
        } * gamma(3i32);
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1. {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_point_with_abs_error(
        &self,
        pt: &Point3f,
        pt_error: &Vector3f,
        abs_error: &mut Vector3f,
    ) -> Point3f {
        let x: Float = pt.x;
        let y: Float = pt.y;
        let z: Float = pt.z;
        // compute transformed coordinates from point _pt_
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        let g3: Float = gamma(3i32);
        for (i, e) in [&mut abs_error.x, &mut abs_error.y, &mut abs_error.z]
            .iter_mut()
            .enumerate()
        {
            **e = (g3 + 1.0 as Float)
                * (self.m.m[i][0].abs() * pt_error.x
                    + self.m.m[i][1].abs() * pt_error.y
                    + self.m.m[i][2].abs() * pt_error.z)
                + g3 * ((self.m.m[i][0] * x).abs()
                    + (self.m.m[i][1] * y).abs()
                    + (self.m.m[i][2] * z).abs()
                    + self.m.m[i][3].abs());
        }
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1. {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector_with_error(&self, v: &Vector3f, abs_error: &mut Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        let gamma: Float = gamma(3i32);
        abs_error.x = gamma
            * ((self.m.m[0][0] * v.x).abs()
                + (self.m.m[0][1] * v.y).abs()
                + (self.m.m[0][2] * v.z).abs());
        abs_error.y = gamma
            * ((self.m.m[1][0] * v.x).abs()
                + (self.m.m[1][1] * v.y).abs()
                + (self.m.m[1][2] * v.z).abs());
        abs_error.z = gamma
            * ((self.m.m[2][0] * v.x).abs()
                + (self.m.m[2][1] * v.y).abs()
                + (self.m.m[2][2] * v.z).abs());
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Transform a ray and offset its origin to the edge of the
    /// error bounds. The parametrization is kept, so a *t* found for
    /// the transformed ray is valid for the original one.
    pub fn transform_ray_with_error(
        &self,
        r: &Ray,
        o_error: &mut Vector3f,
        d_error: &mut Vector3f,
    ) -> Ray {
        let mut o: Point3f = self.transform_point_with_error(&r.o, o_error);
        let d: Vector3f = self.transform_vector_with_error(&r.d, d_error);
        let length_squared: Float = d.length_squared();
        if length_squared > 0.0 {
            let dt: Float = vec3_dot_vec3f(&d.abs(), &*o_error) / length_squared;
            o += d * dt;
        }
        Ray {
            o,
            d,
            t_max: Cell::new(r.t_max.get()),
            time: r.time,
        }
    }
    pub fn transform_surface_interaction(&self, si: &mut SurfaceInteraction) {
        let mut ret: SurfaceInteraction = SurfaceInteraction::default();
        {
            // transform _p_ and _pError_ in _SurfaceInteraction_
            ret.common.p = self.transform_point_with_abs_error(
                &si.common.p,
                &si.common.p_error,
                &mut ret.common.p_error,
            );
            // transform remaining members of _SurfaceInteraction_
            ret.common.n = self.transform_normal(&si.common.n).normalize();
            ret.common.wo = self.transform_vector(&si.common.wo).normalize();
            ret.common.time = si.common.time;
        }
        ret.uv = si.uv;
        ret.dpdu = self.transform_vector(&si.dpdu);
        ret.dpdv = self.transform_vector(&si.dpdv);
        ret.dndu = self.transform_normal(&si.dndu);
        ret.dndv = self.transform_normal(&si.dndv);
        ret.shading.n = self.transform_normal(&si.shading.n).normalize();
        ret.shading.dpdu = self.transform_vector(&si.shading.dpdu);
        ret.shading.dpdv = self.transform_vector(&si.shading.dpdv);
        ret.shading.dndu = self.transform_normal(&si.shading.dndu);
        ret.shading.dndv = self.transform_normal(&si.shading.dndv);
        ret.shading.n = nrm_faceforward_nrm(&ret.shading.n, &ret.common.n);
        ret.part_id = si.part_id;
        ret.part_name = si.part_name;
        *si = ret;
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        rhs.m == self.m && rhs.m_inv == self.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_near_identity(m: &Matrix4x4) {
        let id: Matrix4x4 = Matrix4x4::default();
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (m.m[i][j] - id.m[i][j]).abs() < 1e-5,
                    "m[{}][{}] = {}",
                    i,
                    j,
                    m.m[i][j]
                );
            }
        }
    }

    #[test]
    fn composition_keeps_inverse_pair() {
        let t: Transform = Transform::rotate_z(30.0)
            * Transform::translate(&Vector3f {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            })
            * Transform::rotate(
                90.0,
                &Vector3f {
                    x: 0.0,
                    y: 1.0,
                    z: 0.0,
                },
            );
        assert_near_identity(&mtx_mul(&t.m, &t.m_inv));
        assert_near_identity(&mtx_mul(&t.m_inv, &t.m));
        let inv: Matrix4x4 = Matrix4x4::inverse(&t.m);
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv.m[i][j] - t.m_inv.m[i][j]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn translation_is_applied_first() {
        // rotate(90, y) * translate(0, 0, 1) maps the origin to (1, 0, 0)
        let t: Transform = Transform::rotate(
            90.0,
            &Vector3f {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
        ) * Transform::translate(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        });
        let p: Point3f = t.transform_point(&Point3f::default());
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
        // vectors ignore the translation
        let v: Vector3f = t.transform_vector(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        });
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn transformed_bounds_contain_rotated_corners() {
        let b: Bounds3f = Bounds3f::new(
            Point3f {
                x: -0.1,
                y: -0.1,
                z: 0.0,
            },
            Point3f {
                x: 0.1,
                y: 0.1,
                z: 0.75,
            },
        );
        let t: Transform = Transform::rotate(
            90.0,
            &Vector3f {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
        );
        let tb: Bounds3f = t.transform_bounds(&b);
        assert!((tb.p_max.x - 0.75).abs() < 1e-5);
        assert!(tb.p_min.x.abs() < 1e-5);
        assert!((tb.p_max.z - 0.1).abs() < 1e-5);
    }

    #[test]
    fn handedness_and_identity() {
        assert!(Transform::default().is_identity());
        assert!(!Transform::default().swaps_handedness());
        assert!(Transform::scale(1.0, 1.0, -1.0).swaps_handedness());
        let t: Transform = Transform::translate(&Vector3f {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        });
        assert!(!t.is_identity());
        assert!((t * Transform::inverse(&t)).is_identity());
    }

    #[test]
    fn ray_keeps_parametrization() {
        let t: Transform = Transform::translate(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: -2.0,
        });
        let r: Ray = Ray::new(
            Point3f {
                x: 0.0,
                y: 0.0,
                z: 5.0,
            },
            Vector3f {
                x: 0.0,
                y: 0.0,
                z: -1.0,
            },
        );
        r.t_max.set(10.0);
        let mut o_err: Vector3f = Vector3f::default();
        let mut d_err: Vector3f = Vector3f::default();
        let tr: Ray = t.transform_ray_with_error(&r, &mut o_err, &mut d_err);
        assert_eq!(tr.t_max.get(), 10.0);
        assert!((tr.o.z - 3.0).abs() < 1e-5);
        assert_eq!(tr.d, r.d);
    }
}
